use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use chrono::Utc;
use hub_catalog::load_hub_data;
use hub_core::{update, AppState, Effect, Hub, Msg};
use hub_logging::{hub_debug, hub_info, hub_warn, set_render_pass};
use log::LevelFilter;

use super::cli::Cli;
use super::config::{self, HubConfig};
use super::effects::{self, Flow};
use super::input::{self, Command};
use super::{logging, render};

/// Input forwarded from the stdin reader thread.
enum Inbound {
    Msg(Msg),
    Help,
    Rejected(String),
}

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    // Logging is not up yet; keep the fallback notice for after initialization.
    let (config, config_notice) = match config::load(cli.config.as_deref()) {
        Ok(config) => (config, None),
        Err(err @ config::ConfigError::Missing(_)) => return Err(err).context("loading config"),
        Err(err) => (HubConfig::default(), Some(err.to_string())),
    };

    let level = config.level().unwrap_or(LevelFilter::Info);
    logging::initialize(cli.log.unwrap_or(config.log_destination), level);
    if let Some(notice) = config_notice {
        hub_warn!("Using default config: {}", notice);
    }

    let data = load_hub_data(&config.data_source(), Utc::now());
    let mut state = AppState::new(data);
    for msg in startup_messages(&cli, &config) {
        let (next, _effects) = update(state, msg);
        state = next;
    }
    state.consume_dirty();

    let (msg_tx, msg_rx) = mpsc::channel::<Inbound>();
    thread::spawn(move || read_stdin(msg_tx));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut render_pass = 0_u64;
    write_frame(&mut out, &state, &[], &mut render_pass)?;

    // Block for the next line, then drain whatever else queued up so a burst
    // of edits renders once with the latest state.
    while let Ok(first) = msg_rx.recv() {
        let mut inbox = vec![first];
        inbox.extend(msg_rx.try_iter());

        let (next, batch) = process_inbox(state, inbox);
        state = next;
        let (flow, output) = effects::run(batch.effects, state.data());
        let mut notes = batch.notes;
        notes.extend(output);

        if flow == Flow::Quit {
            for note in &notes {
                writeln!(out, "{note}").context("writing to stdout")?;
            }
            break;
        }

        if batch.render {
            write_frame(&mut out, &state, &notes, &mut render_pass)?;
        } else {
            for note in &notes {
                writeln!(out, "{note}").context("writing to stdout")?;
            }
            out.flush().context("flushing stdout")?;
        }
    }

    hub_info!("Shell finished after {} renders", render_pass);
    Ok(())
}

/// Outcome of applying one drained batch of input.
#[derive(Debug, Default)]
struct Batch {
    effects: Vec<Effect>,
    notes: Vec<String>,
    /// True when any message in the batch changed the state.
    render: bool,
}

/// Applies every queued input in arrival order. The batch renders at most
/// once, from the state left by the last message.
fn process_inbox(mut state: AppState, inbox: Vec<Inbound>) -> (AppState, Batch) {
    let mut batch = Batch::default();
    for inbound in inbox {
        match inbound {
            Inbound::Msg(msg) => {
                hub_debug!("Applying {:?}", msg);
                let (next, effects) = update(state, msg);
                state = next;
                batch.effects.extend(effects);
            }
            Inbound::Help => batch.notes.push(input::HELP.to_owned()),
            Inbound::Rejected(reason) => batch.notes.push(format!("{reason} (type `help`)")),
        }
    }
    batch.render = state.consume_dirty();
    (state, batch)
}

fn startup_messages(cli: &Cli, config: &HubConfig) -> Vec<Msg> {
    // Sort and mode target the discovery catalog, so they go before the hub switch.
    let mut msgs = vec![Msg::SortSelected(config.sort())];
    match config.mode() {
        Some(mode) => msgs.push(Msg::DisplayModeSelected(mode)),
        None => hub_warn!("Unknown display mode {:?} in config", config.initial_mode),
    }

    let hub = match cli.hub.as_deref() {
        Some(raw) => Hub::parse(raw).or_else(|| {
            hub_warn!("Unknown hub {:?} on the command line", raw);
            config.hub()
        }),
        None => config.hub(),
    };
    match hub {
        Some(hub) => msgs.push(Msg::HubSelected(hub)),
        None => hub_warn!("Unknown hub {:?} in config", config.initial_hub),
    }
    msgs
}

fn read_stdin(tx: mpsc::Sender<Inbound>) {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                hub_warn!("Failed to read stdin: {}", err);
                break;
            }
        };
        let inbound = match input::parse_line(&line) {
            Ok(Command::Dispatch(msg)) => Inbound::Msg(msg),
            Ok(Command::Help) => Inbound::Help,
            Err(err) => {
                hub_debug!("Rejected input {:?}: {}", line, err);
                Inbound::Rejected(err.to_string())
            }
        };
        if tx.send(inbound).is_err() {
            return;
        }
    }
    // End of input behaves like an explicit quit.
    let _ = tx.send(Inbound::Msg(Msg::QuitRequested));
}

fn write_frame(
    out: &mut impl Write,
    state: &AppState,
    notes: &[String],
    render_pass: &mut u64,
) -> anyhow::Result<()> {
    *render_pass += 1;
    set_render_pass(*render_pass);
    hub_debug!("Render pass {}", render_pass);

    writeln!(out, "{}", render::render(&state.view(), Utc::now())).context("writing to stdout")?;
    for note in notes {
        writeln!(out, "{note}").context("writing to stdout")?;
    }
    writeln!(out, "> ").context("writing to stdout")?;
    out.flush().context("flushing stdout")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hub_core::{CatalogItem, HubData, SortKey};
    use pretty_assertions::assert_eq;

    fn state() -> AppState {
        let game = |id: &str, title: &str| CatalogItem {
            id: id.to_owned(),
            title: title.to_owned(),
            category: "action".to_owned(),
            ..CatalogItem::default()
        };
        let mut state = AppState::new(HubData {
            games: vec![game("1", "Neon Runner"), game("2", "Space Blaster")],
            ..HubData::default()
        });
        state.consume_dirty();
        state
    }

    fn search(text: &str) -> Inbound {
        Inbound::Msg(Msg::SearchChanged(text.to_owned()))
    }

    #[test]
    fn burst_of_edits_renders_once_with_last_search() {
        let inbox = vec![search("n"), search("ne"), search("neo"), search("space")];
        let (mut state, batch) = process_inbox(state(), inbox);

        assert!(batch.render);
        assert!(batch.effects.is_empty());
        // The flag was consumed by the batch, so nothing is left to render.
        assert!(!state.consume_dirty());

        let view = state.view();
        assert_eq!(view.discovery.search, "space");
        let titles: Vec<&str> = view.discovery.games.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, vec!["Space Blaster"]);
    }

    #[test]
    fn batch_without_changes_does_not_render() {
        let inbox = vec![
            Inbound::Msg(Msg::SortSelected(SortKey::default())),
            Inbound::Msg(Msg::NoOp),
            Inbound::Help,
            Inbound::Rejected("unknown command \"jump\"".to_owned()),
        ];
        let (_, batch) = process_inbox(state(), inbox);

        assert!(!batch.render);
        assert_eq!(batch.notes.len(), 2);
        assert_eq!(batch.notes[0], input::HELP);
    }

    #[test]
    fn effects_keep_arrival_order() {
        let inbox = vec![
            Inbound::Msg(Msg::ItemActivated { id: "2".to_owned() }),
            Inbound::Msg(Msg::ItemActivated { id: "missing".to_owned() }),
            Inbound::Msg(Msg::QuitRequested),
        ];
        let (_, batch) = process_inbox(state(), inbox);

        assert_eq!(
            batch.effects,
            vec![
                Effect::ShowDetails {
                    hub: Hub::Discovery,
                    id: "2".to_owned(),
                },
                Effect::Quit,
            ]
        );
    }
}
