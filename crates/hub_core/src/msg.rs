#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User switched between the discovery, profile and world hubs.
    HubSelected(crate::Hub),
    /// User edited the search box of the active hub.
    SearchChanged(String),
    /// User picked a category chip (game category or space type).
    CategorySelected(crate::CategoryFilter),
    /// User picked a sort order for the active hub.
    SortSelected(crate::SortKey),
    /// User toggled grid/list presentation.
    DisplayModeSelected(crate::DisplayMode),
    ProfileTabSelected(crate::ProfileTab),
    WorldTabSelected(crate::WorldTab),
    /// User opened a card in the active hub.
    ItemActivated { id: String },
    QuitRequested,
    /// Fallback for unrecognised input.
    NoOp,
}
