//! Line commands for the interactive `todo` binary.

use crate::types::{ParseFilterError, TodoAction, TodoId, VisibilityFilter};
use std::str::FromStr;
use thiserror::Error;

/// Usage text printed by `help`
pub const HELP: &str = "\
Commands:
  add <text>          add an item
  delete <id>         remove an item
  edit <id> <text>    replace an item's text
  toggle <id>         complete or reopen an item
  toggle-all          complete every item, or reopen all if all are done
  clear               remove completed items
  filter <name>       show all, active or completed items
  list                show the visible items
  json                print the whole state as JSON
  help                show this text
  quit                exit";

/// Command parse error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Blank input
    #[error("Empty command")]
    Empty,

    /// First word is not a known command
    #[error("Unknown command \"{0}\" (try \"help\")")]
    Unknown(String),

    /// Required argument missing
    #[error("{command}: missing {argument}")]
    MissingArgument {
        /// Command name
        command: &'static str,
        /// What was expected
        argument: &'static str,
    },

    /// Id argument is not a number
    #[error("{command}: invalid id \"{value}\"")]
    InvalidId {
        /// Command name
        command: &'static str,
        /// Offending value
        value: String,
    },

    /// Filter argument is not a filter
    #[error(transparent)]
    InvalidFilter(#[from] ParseFilterError),
}

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Dispatch an action
    Dispatch(TodoAction),
    /// Show the visible items
    List,
    /// Print the state as JSON
    Json,
    /// Show usage
    Help,
    /// Exit
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));

        let command = match word {
            "" => return Err(CommandError::Empty),
            "add" => Self::Dispatch(TodoAction::AddTodo {
                text: required_text("add", rest)?,
            }),
            "delete" | "rm" => Self::Dispatch(TodoAction::DeleteTodo {
                id: parse_id("delete", rest)?,
            }),
            "edit" => {
                let (id, text) = rest
                    .split_once(char::is_whitespace)
                    .map_or((rest, ""), |(id, text)| (id, text.trim()));
                Self::Dispatch(TodoAction::EditTodo {
                    id: parse_id("edit", id)?,
                    text: required_text("edit", text)?,
                })
            },
            "toggle" => Self::Dispatch(TodoAction::CompleteTodo {
                id: parse_id("toggle", rest)?,
            }),
            "toggle-all" => Self::Dispatch(TodoAction::CompleteAll),
            "clear" => Self::Dispatch(TodoAction::ClearCompleted),
            "filter" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "filter",
                        argument: "filter name",
                    });
                }
                Self::Dispatch(TodoAction::SetVisibilityFilter {
                    filter: rest.parse::<VisibilityFilter>()?,
                })
            },
            "list" | "ls" => Self::List,
            "json" => Self::Json,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(command)
    }
}

fn required_text(command: &'static str, text: &str) -> Result<String, CommandError> {
    if text.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            argument: "text",
        });
    }
    Ok(text.to_string())
}

fn parse_id(command: &'static str, value: &str) -> Result<TodoId, CommandError> {
    if value.is_empty() {
        return Err(CommandError::MissingArgument { command, argument: "id" });
    }
    value
        .parse::<u64>()
        .map(TodoId::new)
        .map_err(|_| CommandError::InvalidId {
            command,
            value: value.to_string(),
        })
}
