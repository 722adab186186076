//! Line command parsing for the tracker shell.

use projtrack_core::{parse_project_status, ProjectStatus};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `add <title> | <description> | <people>`
    Add {
        title: String,
        description: String,
        people: String,
    },
    /// `move <id-prefix> <active|finished>`
    Move {
        id_prefix: String,
        target: ProjectStatus,
    },
    Show,
    Json,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    Unknown(String),
    Usage(&'static str),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command"),
            Self::Unknown(word) => write!(f, "unknown command `{word}`; try `help`"),
            Self::Usage(usage) => write!(f, "usage: {usage}"),
        }
    }
}

impl Error for CommandError {}

pub const HELP: &str = "\
commands:
  add <title> | <description> | <people>   submit the new-project form
  move <id-prefix> <active|finished>       drag a project onto a list
  show                                     print the rendered page
  json                                     print all projects as JSON
  help                                     show this help
  quit                                     exit";

const ADD_USAGE: &str = "add <title> | <description> | <people>";
const MOVE_USAGE: &str = "move <id-prefix> <active|finished>";

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map(|(word, rest)| (word, rest.trim()))
        .unwrap_or((line, ""));

    match word {
        "" => Err(CommandError::Empty),
        "add" => {
            // Fields are kept as typed; the form validates them.
            let fields = rest.splitn(3, '|').collect::<Vec<_>>();
            let [title, description, people] = fields.as_slice() else {
                return Err(CommandError::Usage(ADD_USAGE));
            };
            Ok(Command::Add {
                title: title.trim().to_string(),
                description: description.trim().to_string(),
                people: people.trim().to_string(),
            })
        }
        "move" => {
            let mut parts = rest.split_whitespace();
            let (Some(id_prefix), Some(status), None) = (parts.next(), parts.next(), parts.next())
            else {
                return Err(CommandError::Usage(MOVE_USAGE));
            };
            let target =
                parse_project_status(status).map_err(|_| CommandError::Usage(MOVE_USAGE))?;
            Ok(Command::Move {
                id_prefix: id_prefix.to_string(),
                target,
            })
        }
        "show" => Ok(Command::Show),
        "json" => Ok(Command::Json),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}
