use chrono::{DateTime, Utc};

use crate::{
    derive_visible, featured, format_number, star_rating, ActivityKind, AppState, CatalogItem,
    CategoryFilter, DisplayMode, EventKind, Hub, Presence, ProfileTab, SortKey, SpaceType,
    StarRating, VirtualSpace, WorldTab,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub hub: Hub,
    pub discovery: DiscoveryView,
    pub profile: ProfileView,
    pub world: WorldView,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DiscoveryView {
    pub search: String,
    pub sort: SortKey,
    pub mode: DisplayMode,
    pub chips: Vec<CategoryChip>,
    pub featured: Vec<GameRow>,
    pub games: Vec<GameRow>,
    pub total_games: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryChip {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameRow {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub category: String,
    pub plays: String,
    pub rating: f32,
    pub stars: StarRating,
    pub new: bool,
    pub multiplayer: bool,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileView {
    pub tab: ProfileTab,
    pub summary: ProfileSummary,
    pub activity: Vec<ActivityRow>,
    pub games: Vec<GameStatsRow>,
    pub badges: Vec<BadgeRow>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileSummary {
    pub username: String,
    pub avatar: String,
    pub level: u32,
    pub rank: String,
    pub rank_icon: String,
    pub member_since: String,
    pub xp: u64,
    pub xp_to_next: u64,
    pub xp_progress: f64,
    pub achievements: u32,
    pub total_achievements: u32,
    pub achievement_progress: f64,
    pub play_hours: u64,
    pub games_played: u32,
    pub streak: u32,
    pub favorite_category: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRow {
    pub kind: ActivityKind,
    pub icon: String,
    pub game: Option<String>,
    pub detail: String,
    /// Rendered relative to the shell's clock.
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameStatsRow {
    pub game: String,
    pub thumbnail: String,
    pub play_hours: u64,
    pub high_score: String,
    pub achievements: u32,
    pub total_achievements: u32,
    pub achievement_progress: f64,
    pub last_played: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeRow {
    pub name: String,
    pub icon: String,
    pub description: String,
    pub earned: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorldView {
    pub tab: WorldTab,
    pub search: String,
    pub sort: SortKey,
    pub mode: DisplayMode,
    pub chips: Vec<CategoryChip>,
    pub highlights: Vec<SpaceRow>,
    pub spaces: Vec<SpaceRow>,
    pub events: Vec<EventRow>,
    pub friends: Vec<FriendRow>,
    pub online_now: u64,
    pub space_count: usize,
    pub friends_online: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceRow {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub space_type: SpaceType,
    pub description: String,
    pub members: String,
    pub active_now: u64,
    pub premium: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub title: String,
    pub space: String,
    pub start_label: String,
    pub attendees: u64,
    pub kind: EventKind,
    pub live: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriendRow {
    pub name: String,
    pub avatar: String,
    pub level: u32,
    pub presence: Presence,
    pub current_space: Option<String>,
}

pub(crate) fn build(state: &AppState) -> AppViewModel {
    AppViewModel {
        hub: state.hub(),
        discovery: discovery_view(state),
        profile: profile_view(state),
        world: world_view(state),
        dirty: state.is_dirty(),
    }
}

fn discovery_view(state: &AppState) -> DiscoveryView {
    let data = state.data();
    let view = state.discovery();

    let mut chips = vec![all_chip(&view.category)];
    chips.extend(data.categories.iter().map(|category| CategoryChip {
        id: category.id.clone(),
        label: category.name.clone(),
        icon: category.icon.clone(),
        selected: view.category.as_str() == category.id,
    }));

    DiscoveryView {
        search: view.search.clone(),
        sort: view.sort,
        mode: view.mode,
        chips,
        featured: featured(&data.games).into_iter().map(game_row).collect(),
        games: derive_visible(&data.games, view)
            .into_iter()
            .map(game_row)
            .collect(),
        total_games: data.games.len(),
    }
}

fn all_chip(filter: &CategoryFilter) -> CategoryChip {
    CategoryChip {
        id: "all".to_owned(),
        label: "All".to_owned(),
        icon: String::new(),
        selected: *filter == CategoryFilter::All,
    }
}

fn game_row(game: &CatalogItem) -> GameRow {
    GameRow {
        id: game.id.clone(),
        title: game.title.clone(),
        thumbnail: game.thumbnail.clone(),
        category: game.category.clone(),
        plays: format_number(game.plays),
        rating: game.rating,
        stars: star_rating(game.rating),
        new: game.new,
        multiplayer: game.multiplayer,
        description: game.description.clone(),
    }
}

fn profile_view(state: &AppState) -> ProfileView {
    let data = state.data();
    let profile = &data.profile;

    let summary = ProfileSummary {
        username: profile.username.clone(),
        avatar: profile.avatar.clone(),
        level: profile.level,
        rank: profile.rank.clone(),
        rank_icon: profile.rank_icon.clone(),
        member_since: profile.member_since.clone(),
        xp: profile.xp,
        xp_to_next: profile.xp_to_next,
        xp_progress: profile.xp_progress(),
        achievements: profile.achievements,
        total_achievements: profile.total_achievements,
        achievement_progress: profile.achievement_progress(),
        play_hours: profile.total_play_hours,
        games_played: profile.games_played,
        streak: profile.streak,
        favorite_category: profile.favorite_category.clone(),
    };

    ProfileView {
        tab: state.profile_tab(),
        summary,
        activity: data
            .activity
            .iter()
            .map(|activity| ActivityRow {
                kind: activity.kind,
                icon: activity.icon.clone(),
                game: activity.game.clone(),
                detail: activity.detail.clone(),
                at: activity.at,
            })
            .collect(),
        games: data
            .game_stats
            .iter()
            .map(|stats| GameStatsRow {
                game: stats.game.clone(),
                thumbnail: stats.thumbnail.clone(),
                play_hours: stats.play_hours,
                high_score: format_number(stats.high_score),
                achievements: stats.achievements,
                total_achievements: stats.total_achievements,
                achievement_progress: stats.achievement_progress(),
                last_played: stats.last_played,
            })
            .collect(),
        badges: data
            .badges
            .iter()
            .map(|badge| BadgeRow {
                name: badge.name.clone(),
                icon: badge.icon.clone(),
                description: badge.description.clone(),
                earned: badge.earned,
            })
            .collect(),
    }
}

fn world_view(state: &AppState) -> WorldView {
    let data = state.data();
    let view = state.world();

    let mut chips = vec![all_chip(&view.category)];
    chips.extend(SpaceType::ALL.into_iter().map(|kind| CategoryChip {
        id: kind.as_str().to_owned(),
        label: kind.as_str().to_owned(),
        icon: String::new(),
        selected: view.category.as_str() == kind.as_str(),
    }));

    WorldView {
        tab: state.world_tab(),
        search: view.search.clone(),
        sort: view.sort,
        mode: view.mode,
        chips,
        highlights: featured(&data.spaces).into_iter().map(space_row).collect(),
        spaces: derive_visible(&data.spaces, view)
            .into_iter()
            .map(space_row)
            .collect(),
        events: data
            .events
            .iter()
            .map(|event| EventRow {
                title: event.title.clone(),
                space: event.space.clone(),
                start_label: event.start_label.clone(),
                attendees: event.attendees,
                kind: event.kind,
                live: event.live,
            })
            .collect(),
        friends: data
            .friends
            .iter()
            .map(|friend| FriendRow {
                name: friend.name.clone(),
                avatar: friend.avatar.clone(),
                level: friend.level,
                presence: friend.presence,
                current_space: friend.current_space.clone(),
            })
            .collect(),
        online_now: data.spaces.iter().map(|space| space.active_now).sum(),
        space_count: data.spaces.len(),
        friends_online: data
            .friends
            .iter()
            .filter(|friend| friend.presence == Presence::Online)
            .count(),
    }
}

fn space_row(space: &VirtualSpace) -> SpaceRow {
    SpaceRow {
        id: space.id.clone(),
        name: space.name.clone(),
        icon: space.icon.clone(),
        space_type: space.space_type,
        description: space.description.clone(),
        members: format_number(space.members),
        active_now: space.active_now,
        premium: space.premium,
    }
}
