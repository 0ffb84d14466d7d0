use crate::{AppState, CatalogEntry, Effect, Hub, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::HubSelected(hub) => {
            state.select_hub(hub);
            Vec::new()
        }
        Msg::SearchChanged(search) => {
            state.edit_active_view(|view| view.search = search);
            Vec::new()
        }
        Msg::CategorySelected(category) => {
            state.edit_active_view(|view| view.category = category);
            Vec::new()
        }
        Msg::SortSelected(sort) => {
            state.edit_active_view(|view| view.sort = sort);
            Vec::new()
        }
        Msg::DisplayModeSelected(mode) => {
            state.edit_active_view(|view| view.mode = mode);
            Vec::new()
        }
        Msg::ProfileTabSelected(tab) => {
            state.select_profile_tab(tab);
            Vec::new()
        }
        Msg::WorldTabSelected(tab) => {
            state.select_world_tab(tab);
            Vec::new()
        }
        Msg::ItemActivated { id } => activate(&state, id).into_iter().collect(),
        Msg::QuitRequested => vec![Effect::Quit],
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn activate(state: &AppState, id: String) -> Option<Effect> {
    let hub = state.hub();
    let known = match hub {
        Hub::Discovery => contains_id(&state.data().games, &id),
        Hub::World => contains_id(&state.data().spaces, &id),
        Hub::Profile => false,
    };
    known.then_some(Effect::ShowDetails { hub, id })
}

fn contains_id<T: CatalogEntry>(items: &[T], id: &str) -> bool {
    items.iter().any(|item| item.id() == id)
}
