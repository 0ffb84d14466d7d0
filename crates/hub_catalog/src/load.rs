use chrono::{DateTime, Utc};
use hub_core::{CatalogItem, Category, CommunityEvent, Friend, HubData};
use hub_logging::{hub_info, hub_warn};
use serde::de::DeserializeOwned;

use crate::records::{
    CategoryRecord, EventRecord, FriendRecord, GameRecord, ProfileDocument, SpaceRecord,
};
use crate::validate::{sanitize_games, sanitize_space_records, CatalogIssue};
use crate::DataSource;

/// Parses one RON collection. Malformed text yields the type's default
/// (an empty collection) and a warning.
fn parse_collection<T>(name: &str, text: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match ron::from_str(text) {
        Ok(value) => value,
        Err(err) => {
            hub_warn!("Failed to parse {} collection: {}", name, err);
            T::default()
        }
    }
}

fn read_collection<T>(source: &DataSource, name: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match source.read(name) {
        Ok(text) => parse_collection(name, &text),
        Err(err) => {
            hub_warn!("Using empty {} collection: {}", name, err);
            T::default()
        }
    }
}

fn report(issues: &[CatalogIssue]) {
    for issue in issues {
        hub_warn!("Dropped catalog entry: {}", issue);
    }
}

/// Builds every hub collection from `source`. Never fails: unreadable or
/// malformed collections load as empty, invalid entries are dropped.
pub fn load_hub_data(source: &DataSource, now: DateTime<Utc>) -> HubData {
    let categories: Vec<Category> = read_collection::<Vec<CategoryRecord>>(source, "categories")
        .into_iter()
        .map(Category::from)
        .collect();

    let games: Vec<CatalogItem> = read_collection::<Vec<GameRecord>>(source, "games")
        .into_iter()
        .map(CatalogItem::from)
        .collect();
    let (games, issues) = sanitize_games(&categories, games);
    report(&issues);

    let (spaces, issues) =
        sanitize_space_records(read_collection::<Vec<SpaceRecord>>(source, "spaces"));
    report(&issues);

    let events: Vec<CommunityEvent> = read_collection::<Vec<EventRecord>>(source, "events")
        .into_iter()
        .map(CommunityEvent::from)
        .collect();
    let friends: Vec<Friend> = read_collection::<Vec<FriendRecord>>(source, "friends")
        .into_iter()
        .map(Friend::from)
        .collect();

    let profile = read_collection::<ProfileDocument>(source, "profile").into_parts(now);

    hub_info!(
        "Loaded {} categories, {} games, {} spaces, {} events, {} friends",
        categories.len(),
        games.len(),
        spaces.len(),
        events.len(),
        friends.len()
    );

    HubData {
        categories,
        games,
        spaces,
        events,
        friends,
        profile: profile.profile,
        activity: profile.activity,
        game_stats: profile.game_stats,
        badges: profile.badges,
    }
}
