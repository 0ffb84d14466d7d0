#![deny(missing_docs)]
//! Shared logging utilities for the game hub workspace.
//!
//! This crate provides the `hub_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger.

use std::cell::Cell;

thread_local! {
    /// Thread-local count of render passes performed by the shell.
    static RENDER_PASS: Cell<u64> = const { Cell::new(0) };
}

/// Records the render pass count for the current thread.
/// The shell calls this once per rendered frame so log lines can be correlated.
pub fn set_render_pass(pass: u64) {
    RENDER_PASS.with(|v| v.set(pass));
}

/// Retrieves the render pass count for the current thread.
/// Returns 0 before the first render.
pub fn render_pass() -> u64 {
    RENDER_PASS.with(|v| v.get())
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! hub_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! hub_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! hub_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! hub_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! hub_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Another test binary thread may have won the race; that logger is fine.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_pass_is_thread_local() {
        set_render_pass(7);
        assert_eq!(render_pass(), 7);
        let other = std::thread::spawn(render_pass).join().unwrap();
        assert_eq!(other, 0);
    }
}
