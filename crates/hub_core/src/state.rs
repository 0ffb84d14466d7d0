use crate::view_model::{self, AppViewModel};
use crate::{
    Badge, CatalogItem, Category, CommunityEvent, Friend, GameStats, GamerProfile,
    RecentActivity, SortKey, ViewState, VirtualSpace,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Hub {
    #[default]
    Discovery,
    Profile,
    World,
}

impl Hub {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "discovery" | "games" => Some(Self::Discovery),
            "profile" => Some(Self::Profile),
            "world" => Some(Self::World),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Discovery => "Discovery",
            Self::Profile => "Profile",
            Self::World => "World",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    Overview,
    Games,
    Achievements,
    Badges,
}

impl ProfileTab {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "overview" => Some(Self::Overview),
            "games" => Some(Self::Games),
            "achievements" => Some(Self::Achievements),
            "badges" => Some(Self::Badges),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorldTab {
    #[default]
    Explore,
    Events,
    Friends,
    MySpaces,
}

impl WorldTab {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "explore" => Some(Self::Explore),
            "events" => Some(Self::Events),
            "friends" => Some(Self::Friends),
            "myspaces" | "my-spaces" => Some(Self::MySpaces),
            _ => None,
        }
    }
}

/// Read-only collections supplied once at startup.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HubData {
    pub categories: Vec<Category>,
    pub games: Vec<CatalogItem>,
    pub spaces: Vec<VirtualSpace>,
    pub events: Vec<CommunityEvent>,
    pub friends: Vec<Friend>,
    pub profile: GamerProfile,
    pub activity: Vec<RecentActivity>,
    pub game_stats: Vec<GameStats>,
    pub badges: Vec<Badge>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    data: HubData,
    hub: Hub,
    discovery: ViewState,
    world: ViewState,
    profile_tab: ProfileTab,
    world_tab: WorldTab,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(HubData::default())
    }
}

impl AppState {
    pub fn new(data: HubData) -> Self {
        Self {
            data,
            hub: Hub::default(),
            discovery: ViewState::default(),
            // Spaces are listed in collection order until the user picks a sort.
            world: ViewState::default().with_sort(SortKey::Unsorted),
            profile_tab: ProfileTab::default(),
            world_tab: WorldTab::default(),
            dirty: false,
        }
    }

    pub fn view(&self) -> AppViewModel {
        view_model::build(self)
    }

    pub fn data(&self) -> &HubData {
        &self.data
    }

    pub fn hub(&self) -> Hub {
        self.hub
    }

    pub fn discovery(&self) -> &ViewState {
        &self.discovery
    }

    pub fn world(&self) -> &ViewState {
        &self.world
    }

    pub fn profile_tab(&self) -> ProfileTab {
        self.profile_tab
    }

    pub fn world_tab(&self) -> WorldTab {
        self.world_tab
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn select_hub(&mut self, hub: Hub) {
        if self.hub != hub {
            self.hub = hub;
            self.dirty = true;
        }
    }

    pub(crate) fn select_profile_tab(&mut self, tab: ProfileTab) {
        if self.profile_tab != tab {
            self.profile_tab = tab;
            self.dirty = true;
        }
    }

    pub(crate) fn select_world_tab(&mut self, tab: WorldTab) {
        if self.world_tab != tab {
            self.world_tab = tab;
            self.dirty = true;
        }
    }

    /// View state of the active browsable hub; `None` on the profile hub.
    pub(crate) fn active_view_mut(&mut self) -> Option<&mut ViewState> {
        match self.hub {
            Hub::Discovery => Some(&mut self.discovery),
            Hub::World => Some(&mut self.world),
            Hub::Profile => None,
        }
    }

    /// Applies `edit` to the active view state, marking dirty only on change.
    pub(crate) fn edit_active_view(&mut self, edit: impl FnOnce(&mut ViewState)) {
        let Some(view) = self.active_view_mut() else {
            return;
        };
        let before = view.clone();
        edit(view);
        if *view != before {
            self.dirty = true;
        }
    }
}
