use hub_core::{
    derive_visible, featured, CatalogItem, CategoryFilter, SortKey, SpaceType, ViewState,
    VirtualSpace,
};
use pretty_assertions::assert_eq;

fn game(id: &str, title: &str, category: &str, plays: u64, rating: f32, new: bool) -> CatalogItem {
    CatalogItem {
        id: id.to_owned(),
        title: title.to_owned(),
        category: category.to_owned(),
        plays,
        rating,
        new,
        ..CatalogItem::default()
    }
}

fn two_games() -> Vec<CatalogItem> {
    vec![
        game("1", "Neon Runner", "action", 125_000, 4.8, false),
        game("3", "Space Blaster", "arcade", 67_000, 4.5, true),
    ]
}

fn library() -> Vec<CatalogItem> {
    let mut games = vec![
        game("1", "Neon Runner", "action", 125_000, 4.8, false),
        game("2", "Block Puzzle Master", "puzzle", 89_000, 4.6, false),
        game("3", "Space Blaster", "arcade", 67_000, 4.5, true),
        game("4", "Soccer Champions", "sports", 54_000, 4.4, false),
        game("5", "Turbo Drift", "racing", 78_000, 4.7, false),
        game("6", "Kingdom Builder", "strategy", 45_000, 4.3, true),
        game("7", "Treasure Quest", "adventure", 56_000, 4.5, false),
        game("8", "Bubble Pop", "casual", 98_000, 4.2, false),
        game("9", "Neon Arena", "action", 54_000, 4.5, true),
    ];
    for id in ["1", "2", "5"] {
        if let Some(g) = games.iter_mut().find(|g| g.id == id) {
            g.featured = true;
        }
    }
    games
}

fn ids(items: &[&CatalogItem]) -> Vec<String> {
    items.iter().map(|item| item.id.clone()).collect()
}

fn view(category: &str, search: &str, sort: SortKey) -> ViewState {
    ViewState::default()
        .with_category(CategoryFilter::parse(category))
        .with_search(search)
        .with_sort(sort)
}

#[test]
fn new_sort_puts_flagged_items_first() {
    let games = two_games();
    let visible = derive_visible(&games, &view("all", "", SortKey::New));
    assert_eq!(ids(&visible), vec!["3", "1"]);
}

#[test]
fn category_filter_keeps_matching_items_only() {
    let games = two_games();
    let visible = derive_visible(&games, &view("action", "", SortKey::Popular));
    assert_eq!(ids(&visible), vec!["1"]);
}

#[test]
fn search_without_match_yields_empty() {
    let games = two_games();
    let visible = derive_visible(&games, &view("all", "zzz", SortKey::Popular));
    assert!(visible.is_empty());
}

#[test]
fn search_is_case_insensitive() {
    let games = library();
    let visible = derive_visible(&games, &view("all", "NEON", SortKey::Popular));
    assert_eq!(ids(&visible), vec!["1", "9"]);
}

#[test]
fn repeated_calls_yield_identical_output() {
    let games = library();
    let state = view("all", "e", SortKey::Rating);
    let first = ids(&derive_visible(&games, &state));
    let second = ids(&derive_visible(&games, &state));
    assert_eq!(first, second);
}

#[test]
fn filters_are_conjunctive() {
    let games = library();
    let state = view("action", "arena", SortKey::Unsorted);
    let visible = ids(&derive_visible(&games, &state));

    let expected: Vec<String> = games
        .iter()
        .filter(|g| g.category == "action" && g.title.to_lowercase().contains("arena"))
        .map(|g| g.id.clone())
        .collect();
    assert_eq!(visible, expected);
    assert_eq!(visible, vec!["9"]);
}

#[test]
fn all_sentinel_never_excludes() {
    let games = library();
    let visible = derive_visible(&games, &view("all", "", SortKey::Unsorted));
    assert_eq!(visible.len(), games.len());
}

#[test]
fn popular_sort_is_descending_and_stable() {
    let games = library();
    let visible = derive_visible(&games, &view("all", "", SortKey::Popular));
    // Soccer Champions (4) and Neon Arena (9) tie at 54K plays.
    assert_eq!(
        ids(&visible),
        vec!["1", "8", "2", "5", "3", "7", "4", "9", "6"]
    );
}

#[test]
fn rating_sort_is_descending_and_stable() {
    let games = library();
    let visible = derive_visible(&games, &view("all", "", SortKey::Rating));
    // 4.5 ties: Space Blaster (3), Treasure Quest (7), Neon Arena (9).
    assert_eq!(
        ids(&visible),
        vec!["1", "5", "2", "3", "7", "9", "4", "6", "8"]
    );
}

#[test]
fn new_sort_is_a_stable_partition() {
    let games = library();
    let visible = derive_visible(&games, &view("all", "", SortKey::New));
    assert_eq!(
        ids(&visible),
        vec!["3", "6", "9", "1", "2", "4", "5", "7", "8"]
    );
}

#[test]
fn unrecognised_sort_key_keeps_collection_order() {
    let games = library();
    let state = view("all", "", SortKey::parse("most-recent"));
    assert_eq!(state.sort, SortKey::Unsorted);

    let visible = derive_visible(&games, &state);
    let expected: Vec<String> = games.iter().map(|g| g.id.clone()).collect();
    assert_eq!(ids(&visible), expected);
}

#[test]
fn unknown_category_yields_empty() {
    let games = library();
    let visible = derive_visible(&games, &view("rpg", "", SortKey::Popular));
    assert!(visible.is_empty());
}

#[test]
fn empty_collection_yields_empty() {
    let games: Vec<CatalogItem> = Vec::new();
    assert!(derive_visible(&games, &view("all", "neon", SortKey::Rating)).is_empty());
    assert!(featured(&games).is_empty());
}

#[test]
fn input_collection_is_untouched() {
    let games = library();
    let before = games.clone();
    let _ = derive_visible(&games, &view("all", "", SortKey::Popular));
    assert_eq!(games, before);
}

#[test]
fn featured_ignores_view_state() {
    let games = library();
    let expected = vec!["1", "2", "5"];
    assert_eq!(ids(&featured(&games)), expected);

    // The visible set changes with the view; the featured set must not.
    let narrowed = derive_visible(&games, &view("casual", "bubble", SortKey::New));
    assert_eq!(ids(&narrowed), vec!["8"]);
    assert_eq!(ids(&featured(&games)), expected);
}

#[test]
fn spaces_filter_by_type_and_sort_by_members() {
    let space = |id: &str, name: &str, space_type, members| VirtualSpace {
        id: id.to_owned(),
        name: name.to_owned(),
        icon: String::new(),
        space_type,
        description: String::new(),
        members,
        active_now: 0,
        featured: false,
        premium: false,
    };
    let spaces = vec![
        space("5", "Social Lounge", SpaceType::Social, 9_450),
        space("6", "VIP Penthouse", SpaceType::Social, 1_200),
        space("1", "Central Plaza", SpaceType::Community, 15_420),
    ];

    let state = view("social", "", SortKey::Popular);
    let names: Vec<&str> = derive_visible(&spaces, &state)
        .into_iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(names, vec!["Social Lounge", "VIP Penthouse"]);

    // Spaces carry no "new" marker, so the partition keeps collection order.
    let state = view("all", "", SortKey::New);
    let names: Vec<&str> = derive_visible(&spaces, &state)
        .into_iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(names, vec!["Social Lounge", "VIP Penthouse", "Central Plaza"]);
}
