//! Terminal shell around the pure hub state machine.
mod app;
mod cli;
mod config;
mod effects;
mod input;
mod logging;
mod render;

pub use app::run_app;
pub use cli::Cli;
