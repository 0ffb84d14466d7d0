//! Hub core: pure catalog engine, hub state machine and view-model helpers.
mod catalog;
mod effect;
mod format;
mod msg;
mod profile;
mod state;
mod update;
mod view_model;
mod world;

pub use catalog::{
    derive_visible, featured, CatalogEntry, CatalogItem, Category, CategoryFilter, DisplayMode,
    SortKey, ViewState,
};
pub use effect::Effect;
pub use format::{format_number, percent, relative_time, star_rating, truncate, StarRating};
pub use msg::Msg;
pub use profile::{ActivityKind, Badge, GameStats, GamerProfile, RecentActivity};
pub use state::{AppState, Hub, HubData, ProfileTab, WorldTab};
pub use update::update;
pub use view_model::{
    ActivityRow, AppViewModel, BadgeRow, CategoryChip, DiscoveryView, EventRow, FriendRow,
    GameRow, GameStatsRow, ProfileSummary, ProfileView, SpaceRow, WorldView,
};
pub use world::{CommunityEvent, EventKind, Friend, Presence, SpaceType, VirtualSpace};
