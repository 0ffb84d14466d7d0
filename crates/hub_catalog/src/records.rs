//! On-disk shapes of the startup collections.

use chrono::{DateTime, Duration, Utc};
use hub_core::{
    ActivityKind, Badge, CatalogItem, Category, CommunityEvent, EventKind, Friend, GameStats,
    GamerProfile, Presence, RecentActivity,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CategoryRecord {
    id: String,
    name: String,
    icon: String,
    #[serde(default)]
    count: u32,
    #[serde(default)]
    gradient: String,
}

impl From<CategoryRecord> for Category {
    fn from(record: CategoryRecord) -> Self {
        Category {
            id: record.id,
            name: record.name,
            icon: record.icon,
            count: record.count,
            gradient: record.gradient,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct GameRecord {
    id: String,
    title: String,
    #[serde(default)]
    thumbnail: String,
    category: String,
    #[serde(default)]
    tags: Vec<String>,
    rating: f32,
    plays: u64,
    #[serde(default)]
    featured: bool,
    #[serde(default)]
    new: bool,
    #[serde(default)]
    multiplayer: bool,
    #[serde(default)]
    description: String,
}

impl From<GameRecord> for CatalogItem {
    fn from(record: GameRecord) -> Self {
        CatalogItem {
            id: record.id,
            title: record.title,
            thumbnail: record.thumbnail,
            category: record.category,
            tags: record.tags,
            rating: record.rating,
            plays: record.plays,
            featured: record.featured,
            new: record.new,
            multiplayer: record.multiplayer,
            description: record.description,
        }
    }
}

/// Space types stay textual here; unknown types are reported by validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct SpaceRecord {
    pub(crate) id: String,
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) icon: String,
    pub(crate) space_type: String,
    #[serde(default)]
    pub(crate) description: String,
    pub(crate) members: u64,
    #[serde(default)]
    pub(crate) active_now: u64,
    #[serde(default)]
    pub(crate) featured: bool,
    #[serde(default)]
    pub(crate) premium: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
enum EventKindRecord {
    Meetup,
    Workshop,
    Party,
    Competition,
    Presentation,
}

impl From<EventKindRecord> for EventKind {
    fn from(kind: EventKindRecord) -> Self {
        match kind {
            EventKindRecord::Meetup => EventKind::Meetup,
            EventKindRecord::Workshop => EventKind::Workshop,
            EventKindRecord::Party => EventKind::Party,
            EventKindRecord::Competition => EventKind::Competition,
            EventKindRecord::Presentation => EventKind::Presentation,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct EventRecord {
    id: String,
    title: String,
    space: String,
    start_label: String,
    attendees: u64,
    kind: EventKindRecord,
    #[serde(default)]
    live: bool,
}

impl From<EventRecord> for CommunityEvent {
    fn from(record: EventRecord) -> Self {
        CommunityEvent {
            id: record.id,
            title: record.title,
            space: record.space,
            start_label: record.start_label,
            attendees: record.attendees,
            kind: record.kind.into(),
            live: record.live,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
enum PresenceRecord {
    Online,
    Away,
    Busy,
    Offline,
}

impl From<PresenceRecord> for Presence {
    fn from(presence: PresenceRecord) -> Self {
        match presence {
            PresenceRecord::Online => Presence::Online,
            PresenceRecord::Away => Presence::Away,
            PresenceRecord::Busy => Presence::Busy,
            PresenceRecord::Offline => Presence::Offline,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct FriendRecord {
    id: String,
    name: String,
    #[serde(default)]
    avatar: String,
    level: u32,
    presence: PresenceRecord,
    #[serde(default)]
    current_space: Option<String>,
}

impl From<FriendRecord> for Friend {
    fn from(record: FriendRecord) -> Self {
        Friend {
            id: record.id,
            name: record.name,
            avatar: record.avatar,
            level: record.level,
            presence: record.presence.into(),
            current_space: record.current_space,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct ProfileRecord {
    username: String,
    avatar: String,
    level: u32,
    xp: u64,
    xp_to_next: u64,
    member_since: String,
    total_play_hours: u64,
    games_played: u32,
    achievements: u32,
    total_achievements: u32,
    rank: String,
    rank_icon: String,
    streak: u32,
    favorite_category: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
enum ActivityKindRecord {
    Play,
    Achievement,
    Highscore,
    Level,
}

impl From<ActivityKindRecord> for ActivityKind {
    fn from(kind: ActivityKindRecord) -> Self {
        match kind {
            ActivityKindRecord::Play => ActivityKind::Play,
            ActivityKindRecord::Achievement => ActivityKind::Achievement,
            ActivityKindRecord::Highscore => ActivityKind::Highscore,
            ActivityKindRecord::Level => ActivityKind::Level,
        }
    }
}

/// Timestamps are stored as an age so the sample data never goes stale.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ActivityRecord {
    id: String,
    kind: ActivityKindRecord,
    #[serde(default)]
    game: Option<String>,
    detail: String,
    age_minutes: u32,
    #[serde(default)]
    icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GameStatsRecord {
    game: String,
    #[serde(default)]
    thumbnail: String,
    play_hours: u64,
    high_score: u64,
    achievements: u32,
    total_achievements: u32,
    age_minutes: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BadgeRecord {
    id: String,
    name: String,
    icon: String,
    description: String,
    #[serde(default)]
    earned: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub(crate) struct ProfileDocument {
    #[serde(default)]
    profile: ProfileRecord,
    #[serde(default)]
    activity: Vec<ActivityRecord>,
    #[serde(default)]
    game_stats: Vec<GameStatsRecord>,
    #[serde(default)]
    badges: Vec<BadgeRecord>,
}

pub(crate) struct ProfileParts {
    pub(crate) profile: GamerProfile,
    pub(crate) activity: Vec<RecentActivity>,
    pub(crate) game_stats: Vec<GameStats>,
    pub(crate) badges: Vec<Badge>,
}

fn minutes_before(now: DateTime<Utc>, minutes: u32) -> DateTime<Utc> {
    now - Duration::minutes(i64::from(minutes))
}

impl ProfileDocument {
    /// Resolves stored ages against `now`.
    pub(crate) fn into_parts(self, now: DateTime<Utc>) -> ProfileParts {
        let p = self.profile;
        ProfileParts {
            profile: GamerProfile {
                username: p.username,
                avatar: p.avatar,
                level: p.level,
                xp: p.xp,
                xp_to_next: p.xp_to_next,
                member_since: p.member_since,
                total_play_hours: p.total_play_hours,
                games_played: p.games_played,
                achievements: p.achievements,
                total_achievements: p.total_achievements,
                rank: p.rank,
                rank_icon: p.rank_icon,
                streak: p.streak,
                favorite_category: p.favorite_category,
            },
            activity: self
                .activity
                .into_iter()
                .map(|a| RecentActivity {
                    id: a.id,
                    kind: a.kind.into(),
                    game: a.game,
                    detail: a.detail,
                    at: minutes_before(now, a.age_minutes),
                    icon: a.icon,
                })
                .collect(),
            game_stats: self
                .game_stats
                .into_iter()
                .map(|s| GameStats {
                    game: s.game,
                    thumbnail: s.thumbnail,
                    play_hours: s.play_hours,
                    high_score: s.high_score,
                    achievements: s.achievements,
                    total_achievements: s.total_achievements,
                    last_played: minutes_before(now, s.age_minutes),
                })
                .collect(),
            badges: self
                .badges
                .into_iter()
                .map(|b| Badge {
                    id: b.id,
                    name: b.name,
                    icon: b.icon,
                    description: b.description,
                    earned: b.earned,
                })
                .collect(),
        }
    }
}
