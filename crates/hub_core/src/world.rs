use crate::CatalogEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpaceType {
    Community,
    Business,
    Entertainment,
    Education,
    Social,
}

impl SpaceType {
    pub const ALL: [SpaceType; 5] = [
        SpaceType::Community,
        SpaceType::Business,
        SpaceType::Entertainment,
        SpaceType::Education,
        SpaceType::Social,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SpaceType::Community => "community",
            SpaceType::Business => "business",
            SpaceType::Entertainment => "entertainment",
            SpaceType::Education => "education",
            SpaceType::Social => "social",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(raw.trim()))
    }
}

/// A social space in the virtual world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualSpace {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub space_type: SpaceType,
    pub description: String,
    pub members: u64,
    pub active_now: u64,
    pub featured: bool,
    pub premium: bool,
}

impl CatalogEntry for VirtualSpace {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        self.space_type.as_str()
    }

    fn popularity(&self) -> u64 {
        self.members
    }

    fn is_featured(&self) -> bool {
        self.featured
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Meetup,
    Workshop,
    Party,
    Competition,
    Presentation,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Meetup => "meetup",
            EventKind::Workshop => "workshop",
            EventKind::Party => "party",
            EventKind::Competition => "competition",
            EventKind::Presentation => "presentation",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunityEvent {
    pub id: String,
    pub title: String,
    /// Display name of the hosting space.
    pub space: String,
    /// Free-form schedule label ("Today 7:00 PM").
    pub start_label: String,
    pub attendees: u64,
    pub kind: EventKind,
    pub live: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Online,
    Away,
    Busy,
    Offline,
}

impl Presence {
    pub fn as_str(self) -> &'static str {
        match self {
            Presence::Online => "online",
            Presence::Away => "away",
            Presence::Busy => "busy",
            Presence::Offline => "offline",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Friend {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub level: u32,
    pub presence: Presence,
    pub current_space: Option<String>,
}
