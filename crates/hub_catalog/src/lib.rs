//! Hub catalog: startup collections and their validation.
mod load;
mod records;
mod source;
mod validate;

pub use load::load_hub_data;
pub use source::{DataSource, SourceError};
pub use validate::{sanitize_games, validate_games, CatalogIssue};
