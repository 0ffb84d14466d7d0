//! Line commands typed into the shell.

use hub_core::{CategoryFilter, DisplayMode, Hub, Msg, ProfileTab, SortKey, WorldTab};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  hub <discovery|profile|world>
  search [text]            empty text clears the search
  category <id|all>        game category (discovery) or space type (world)
  sort <popular|rating|new>
  mode <grid|list>
  tab <name>               overview, games, achievements, badges,
                           explore, events, friends, myspaces
  open <id>
  help
  quit";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown command {0:?}")]
    UnknownCommand(String),
    #[error("{0} needs an argument")]
    MissingArgument(&'static str),
    #[error("unknown {what} {value:?}")]
    InvalidValue { what: &'static str, value: String },
}

/// What a typed line asks the shell to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Help,
}

pub fn parse_line(line: &str) -> Result<Command, InputError> {
    let line = line.trim_start();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line.trim_end(), ""),
    };

    let msg = match word.to_ascii_lowercase().as_str() {
        "" => Msg::NoOp,
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" => Msg::QuitRequested,
        "search" => Msg::SearchChanged(rest.to_owned()),
        "hub" => Msg::HubSelected(
            Hub::parse(required("hub", rest)?).ok_or_else(|| invalid("hub", rest))?,
        ),
        "category" | "type" => {
            Msg::CategorySelected(CategoryFilter::parse(required("category", rest)?))
        }
        // Unknown keys are accepted and leave the list in collection order.
        "sort" => Msg::SortSelected(SortKey::parse(required("sort", rest)?)),
        "mode" => Msg::DisplayModeSelected(
            DisplayMode::parse(required("mode", rest)?).ok_or_else(|| invalid("mode", rest))?,
        ),
        "tab" => {
            let name = required("tab", rest)?;
            if let Some(tab) = ProfileTab::parse(name) {
                Msg::ProfileTabSelected(tab)
            } else if let Some(tab) = WorldTab::parse(name) {
                Msg::WorldTabSelected(tab)
            } else {
                return Err(invalid("tab", name));
            }
        }
        "open" => Msg::ItemActivated {
            id: required("open", rest)?.to_owned(),
        },
        other => return Err(InputError::UnknownCommand(other.to_owned())),
    };
    Ok(Command::Dispatch(msg))
}

fn required<'a>(command: &'static str, rest: &'a str) -> Result<&'a str, InputError> {
    if rest.is_empty() {
        Err(InputError::MissingArgument(command))
    } else {
        Ok(rest)
    }
}

fn invalid(what: &'static str, value: &str) -> InputError {
    InputError::InvalidValue {
        what,
        value: value.to_owned(),
    }
}
