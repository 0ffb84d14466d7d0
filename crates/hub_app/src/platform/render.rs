//! Plain-text rendering of the hub view model.

use chrono::{DateTime, Utc};
use hub_core::{
    relative_time, truncate, AppViewModel, CategoryChip, DiscoveryView, DisplayMode, GameRow, Hub,
    ProfileTab, ProfileView, SpaceRow, StarRating, WorldTab, WorldView,
};

const DESCRIPTION_WIDTH: usize = 40;

pub fn render(view: &AppViewModel, now: DateTime<Utc>) -> String {
    let mut lines = vec![hub_bar(view.hub)];
    match view.hub {
        Hub::Discovery => render_discovery(&mut lines, &view.discovery),
        Hub::Profile => render_profile(&mut lines, &view.profile, now),
        Hub::World => render_world(&mut lines, &view.world),
    }
    lines.join("\n")
}

fn hub_bar(active: Hub) -> String {
    [Hub::Discovery, Hub::Profile, Hub::World]
        .into_iter()
        .map(|hub| {
            if hub == active {
                format!("[{}]", hub.label())
            } else {
                format!(" {} ", hub.label())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn chips(chips: &[CategoryChip]) -> String {
    chips
        .iter()
        .map(|chip| {
            let label = if chip.icon.is_empty() {
                chip.label.clone()
            } else {
                format!("{} {}", chip.icon, chip.label)
            };
            if chip.selected {
                format!("[{label}]")
            } else {
                label
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn stars(stars: StarRating) -> String {
    let mut out = "★".repeat(usize::from(stars.full));
    if stars.half {
        out.push('½');
    }
    out.push_str(&"☆".repeat(usize::from(stars.empty)));
    out
}

fn render_discovery(lines: &mut Vec<String>, view: &DiscoveryView) {
    lines.push(String::new());
    lines.push("Featured:".to_owned());
    for game in &view.featured {
        lines.push(format!(
            "  {} {}  {} {:.1}  {} plays",
            game.thumbnail,
            game.title,
            stars(game.stars),
            game.rating,
            game.plays
        ));
    }

    lines.push(String::new());
    lines.push(chips(&view.chips));
    lines.push(format!(
        "search: {:?}  sort: {}  showing {} of {}",
        view.search,
        view.sort.label(),
        view.games.len(),
        view.total_games
    ));

    if view.games.is_empty() {
        lines.push("  No games match.".to_owned());
        return;
    }
    match view.mode {
        DisplayMode::Grid => {
            for pair in view.games.chunks(2) {
                let cells: Vec<String> = pair.iter().map(grid_cell).collect();
                lines.push(format!("  {}", cells.join(" | ")));
            }
        }
        DisplayMode::List => {
            for game in &view.games {
                lines.push(list_row(game));
            }
        }
    }
}

fn grid_cell(game: &GameRow) -> String {
    format!(
        "{:<3} {} {:<20} {:.1} {:>5}",
        game.id, game.thumbnail, game.title, game.rating, game.plays
    )
}

fn list_row(game: &GameRow) -> String {
    let mut badges = Vec::new();
    if game.new {
        badges.push("NEW");
    }
    if game.multiplayer {
        badges.push("MP");
    }
    format!(
        "  {:<3} {} {:<20} {:<10} {:.1} {:>5} plays  {}  {}",
        game.id,
        game.thumbnail,
        game.title,
        game.category,
        game.rating,
        game.plays,
        truncate(&game.description, DESCRIPTION_WIDTH),
        badges.join(" ")
    )
}

fn render_profile(lines: &mut Vec<String>, view: &ProfileView, now: DateTime<Utc>) {
    let s = &view.summary;
    lines.push(String::new());
    lines.push(format!(
        "{} {}  {} {}  Level {}  member since {}",
        s.avatar, s.username, s.rank_icon, s.rank, s.level, s.member_since
    ));
    lines.push(format!(
        "XP {}/{} ({:.0}%)  streak {} days  {}h played  {} games  favourite: {}",
        s.xp,
        s.xp_to_next,
        s.xp_progress,
        s.streak,
        s.play_hours,
        s.games_played,
        s.favorite_category
    ));
    lines.push(String::new());

    match view.tab {
        ProfileTab::Overview => {
            lines.push("Recent activity:".to_owned());
            for activity in &view.activity {
                let game = activity
                    .game
                    .as_deref()
                    .map(|g| format!("{g}: "))
                    .unwrap_or_default();
                lines.push(format!(
                    "  {} {}{}  ({})",
                    activity.icon,
                    game,
                    activity.detail,
                    relative_time(activity.at, now)
                ));
            }
        }
        ProfileTab::Games => {
            for game in &view.games {
                lines.push(format!(
                    "  {} {:<20} {:>3}h  best {:>6}  {}/{} achievements  last played {}",
                    game.thumbnail,
                    game.game,
                    game.play_hours,
                    game.high_score,
                    game.achievements,
                    game.total_achievements,
                    relative_time(game.last_played, now)
                ));
            }
        }
        ProfileTab::Achievements => {
            lines.push(format!(
                "Achievements {}/{} ({:.0}%)",
                s.achievements, s.total_achievements, s.achievement_progress
            ));
            for game in &view.games {
                lines.push(format!(
                    "  {} {:<20} {:.0}%",
                    game.thumbnail, game.game, game.achievement_progress
                ));
            }
        }
        ProfileTab::Badges => {
            for badge in &view.badges {
                let mark = if badge.earned { "x" } else { " " };
                lines.push(format!(
                    "  [{mark}] {} {} - {}",
                    badge.icon, badge.name, badge.description
                ));
            }
        }
    }
}

fn render_world(lines: &mut Vec<String>, view: &WorldView) {
    lines.push(format!(
        "{} online now  {} spaces  {} events  {} friends online",
        view.online_now,
        view.space_count,
        view.events.len(),
        view.friends_online
    ));
    lines.push(String::new());

    match view.tab {
        WorldTab::Explore => {
            lines.push("Highlights:".to_owned());
            for space in &view.highlights {
                lines.push(format!("  {}", space_line(space)));
            }
            lines.push(String::new());
            lines.push(chips(&view.chips));
            lines.push(format!(
                "search: {:?}  sort: {}",
                view.search,
                view.sort.label()
            ));
            if view.spaces.is_empty() {
                lines.push("  No spaces match.".to_owned());
            }
            for space in &view.spaces {
                lines.push(format!("  {}", space_line(space)));
            }
        }
        WorldTab::Events => {
            for event in &view.events {
                let live = if event.live { "LIVE " } else { "" };
                lines.push(format!(
                    "  {live}{} @ {}  {}  {} attending  ({})",
                    event.title,
                    event.space,
                    event.start_label,
                    event.attendees,
                    event.kind.as_str()
                ));
            }
        }
        WorldTab::Friends => {
            for friend in &view.friends {
                let place = friend
                    .current_space
                    .as_deref()
                    .map(|space| format!(" in {space}"))
                    .unwrap_or_default();
                lines.push(format!(
                    "  {} {} (lvl {})  {}{}",
                    friend.avatar,
                    friend.name,
                    friend.level,
                    friend.presence.as_str(),
                    place
                ));
            }
        }
        WorldTab::MySpaces => lines.push("  You have not created any spaces yet.".to_owned()),
    }
}

fn space_line(space: &SpaceRow) -> String {
    let premium = if space.premium { " [premium]" } else { "" };
    format!(
        "{:<3} {} {:<18} {:<13} {:>6} members  {} active{}",
        space.id,
        space.icon,
        space.name,
        space.space_type.as_str(),
        space.members,
        space.active_now,
        premium
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use hub_core::{update, AppState, CatalogItem, Category, HubData, Msg, SortKey};

    fn state() -> AppState {
        AppState::new(HubData {
            categories: vec![Category {
                id: "action".to_owned(),
                name: "Action".to_owned(),
                ..Category::default()
            }],
            games: vec![CatalogItem {
                id: "1".to_owned(),
                title: "Neon Runner".to_owned(),
                category: "action".to_owned(),
                plays: 125_000,
                rating: 4.8,
                featured: true,
                description: "Fast-paced endless runner with neon aesthetics".to_owned(),
                ..CatalogItem::default()
            }],
            ..HubData::default()
        })
    }

    #[test]
    fn discovery_marks_active_hub_and_selected_chip() {
        let out = render(&state().view(), Utc::now());
        assert!(out.starts_with("[Discovery]"));
        assert!(out.contains("[All]"));
        assert!(out.contains("Neon Runner"));
        assert!(out.contains("125K"));
    }

    #[test]
    fn list_mode_truncates_descriptions() {
        let (state, _) = update(state(), Msg::DisplayModeSelected(DisplayMode::List));
        let out = render(&state.view(), Utc::now());
        assert!(out.contains("Fast-paced endless runner with neon aest..."));
    }

    #[test]
    fn empty_result_is_rendered_not_an_error() {
        let (state, _) = update(state(), Msg::SearchChanged("zzz".to_owned()));
        let (state, _) = update(state, Msg::SortSelected(SortKey::Rating));
        let out = render(&state.view(), Utc::now());
        assert!(out.contains("No games match."));
        assert!(out.contains("showing 0 of 1"));
        // The featured carousel is independent of the search.
        assert!(out.contains("Featured:\n  "));
    }
}
