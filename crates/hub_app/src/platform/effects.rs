use hub_core::{format_number, star_rating, Effect, Hub, HubData};
use hub_logging::hub_info;

/// What the shell loop should do after running a batch of effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Carries out effects and returns any text to print alongside the render.
pub fn run(effects: Vec<Effect>, data: &HubData) -> (Flow, Vec<String>) {
    let mut flow = Flow::Continue;
    let mut output = Vec::new();
    for effect in effects {
        match effect {
            Effect::ShowDetails { hub, id } => {
                hub_info!("ShowDetails hub={:?} id={}", hub, id);
                if let Some(card) = detail_card(data, hub, &id) {
                    output.push(card);
                }
            }
            Effect::Quit => {
                hub_info!("Quit requested");
                flow = Flow::Quit;
            }
        }
    }
    (flow, output)
}

fn detail_card(data: &HubData, hub: Hub, id: &str) -> Option<String> {
    match hub {
        Hub::Discovery => data.games.iter().find(|g| g.id == id).map(|game| {
            let stars = star_rating(game.rating);
            format!(
                "== {} {} ==\n{}\ncategory: {}  rating: {:.1} ({} full, half: {})  plays: {}\ntags: {}{}",
                game.thumbnail,
                game.title,
                game.description,
                game.category,
                game.rating,
                stars.full,
                stars.half,
                format_number(game.plays),
                game.tags.join(", "),
                if game.multiplayer { "\nmultiplayer" } else { "" }
            )
        }),
        Hub::World => data.spaces.iter().find(|s| s.id == id).map(|space| {
            format!(
                "== {} {} ==\n{}\ntype: {}  members: {}  active now: {}{}",
                space.icon,
                space.name,
                space.description,
                space.space_type.as_str(),
                format_number(space.members),
                space.active_now,
                if space.premium { "\npremium members only" } else { "" }
            )
        }),
        Hub::Profile => None,
    }
}
