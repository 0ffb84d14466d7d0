use std::fs;
use std::sync::Once;

use chrono::{Duration, TimeZone, Utc};
use hub_catalog::{load_hub_data, validate_games, CatalogIssue, DataSource, SourceError};
use hub_core::{featured, CatalogEntry, SpaceType};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(hub_logging::initialize_for_tests);
}

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

#[test]
fn embedded_sample_data_is_complete_and_valid() {
    init_logging();
    let data = load_hub_data(&DataSource::Embedded, now());

    assert_eq!(data.categories.len(), 8);
    assert_eq!(data.games.len(), 8);
    assert_eq!(data.spaces.len(), 8);
    assert_eq!(data.events.len(), 4);
    assert_eq!(data.friends.len(), 5);
    assert_eq!(data.profile.username, "NeonPlayer42");
    assert_eq!(data.activity.len(), 5);
    assert_eq!(data.game_stats.len(), 4);
    assert_eq!(data.badges.len(), 5);
    assert!(validate_games(&data.categories, &data.games).is_empty());

    let featured_games: Vec<&str> = featured(&data.games)
        .into_iter()
        .map(|g| g.title.as_str())
        .collect();
    assert_eq!(
        featured_games,
        vec!["Neon Runner", "Block Puzzle Master", "Turbo Drift"]
    );
    assert_eq!(data.spaces[5].space_type, SpaceType::Social);
    assert!(data.spaces[5].premium);
}

#[test]
fn activity_ages_resolve_against_now() {
    init_logging();
    let data = load_hub_data(&DataSource::Embedded, now());
    assert_eq!(data.activity[0].at, now() - Duration::hours(2));
    assert_eq!(data.game_stats[3].last_played, now() - Duration::days(3));
}

#[test]
fn missing_directory_collections_load_empty() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let source = DataSource::Directory(temp.path().to_path_buf());

    assert!(matches!(source.read("games"), Err(SourceError::Missing(_))));
    let data = load_hub_data(&source, now());
    assert!(data.games.is_empty());
    assert!(data.categories.is_empty());
    assert!(data.spaces.is_empty());
    assert_eq!(data.profile.username, "");
}

#[test]
fn malformed_collection_loads_empty() {
    init_logging();
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("games.ron"), "[ (id: \"1\", title: ").unwrap();
    fs::write(
        temp.path().join("categories.ron"),
        "[(id: \"action\", name: \"Action\", icon: \"x\")]",
    )
    .unwrap();

    let data = load_hub_data(&DataSource::Directory(temp.path().to_path_buf()), now());
    assert!(data.games.is_empty());
    assert_eq!(data.categories.len(), 1);
}

#[test]
fn invalid_games_are_dropped() {
    init_logging();
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("categories.ron"),
        "[(id: \"action\", name: \"Action\", icon: \"x\")]",
    )
    .unwrap();
    fs::write(
        temp.path().join("games.ron"),
        r#"[
            (id: "1", title: "Neon Runner", category: "action", rating: 4.8, plays: 125000),
            (id: "1", title: "Neon Runner II", category: "action", rating: 4.1, plays: 10),
            (id: "2", title: "Lost Game", category: "rpg", rating: 4.0, plays: 5),
            (id: "3", title: "Overrated", category: "action", rating: 6.5, plays: 7),
            (id: "4", title: "Quiet Game", category: "action", rating: 0.0, plays: 0),
        ]"#,
    )
    .unwrap();

    let data = load_hub_data(&DataSource::Directory(temp.path().to_path_buf()), now());
    let ids: Vec<&str> = data.games.iter().map(|g| g.id()).collect();
    assert_eq!(ids, vec!["1", "4"]);
    assert_eq!(data.games[0].title, "Neon Runner");
}

#[test]
fn spaces_with_unknown_type_are_dropped() {
    init_logging();
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("spaces.ron"),
        r#"[
            (id: "1", name: "Central Plaza", space_type: "community", members: 15420),
            (id: "2", name: "Moon Base", space_type: "lunar", members: 3),
        ]"#,
    )
    .unwrap();

    let data = load_hub_data(&DataSource::Directory(temp.path().to_path_buf()), now());
    let names: Vec<&str> = data.spaces.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Central Plaza"]);
}

#[test]
fn validation_reports_every_issue() {
    init_logging();
    let data = load_hub_data(&DataSource::Embedded, now());
    let mut games = data.games.clone();
    games[1].category = "rpg".to_owned();
    games.push(games[0].clone());

    let issues = validate_games(&data.categories, &games);
    assert_eq!(
        issues,
        vec![
            CatalogIssue::UnknownCategory {
                collection: "game",
                id: "2".to_owned(),
                category: "rpg".to_owned(),
            },
            CatalogIssue::DuplicateId {
                collection: "game",
                id: "1".to_owned(),
            },
        ]
    );
}
