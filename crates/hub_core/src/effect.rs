use crate::Hub;

/// Requests the shell carries out after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Present the detail card for a catalog entry of `hub`.
    ShowDetails { hub: Hub, id: String },
    Quit,
}
