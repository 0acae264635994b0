//! Command table and parsing
//!
//! Maps REPL input lines onto [`Command`] values.

use crate::error::{PokedexError, Result};

// == Command Table ==
/// Help-table row for one REPL command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

/// Every command the REPL understands, in help order.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "help",
        usage: "help",
        description: "Displays a help message",
    },
    CommandSpec {
        name: "exit",
        usage: "exit",
        description: "Exit the Pokedex",
    },
    CommandSpec {
        name: "map",
        usage: "map",
        description: "Displays the names of the next page of location areas",
    },
    CommandSpec {
        name: "mapb",
        usage: "mapb",
        description: "Displays the names of the previous page of location areas",
    },
    CommandSpec {
        name: "explore",
        usage: "explore <location_area>",
        description: "Displays the Pokemon that can be found in a location area",
    },
    CommandSpec {
        name: "catch",
        usage: "catch <pokemon>",
        description: "Attempts to catch a Pokemon and add it to your Pokedex",
    },
    CommandSpec {
        name: "inspect",
        usage: "inspect <pokemon>",
        description: "Displays the details of a Pokemon you have caught",
    },
    CommandSpec {
        name: "pokedex",
        usage: "pokedex",
        description: "Lists the names of every Pokemon you have caught",
    },
];

/// Looks up a command's help row by name.
pub fn find_spec(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.name == name)
}

// == Command ==
/// A parsed REPL command with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore(String),
    Catch(String),
    Inspect(String),
    Pokedex,
}

impl Command {
    /// Parses one input line.
    ///
    /// The first whitespace-separated word selects the command and the
    /// second, if the command takes one, is its argument. Command names are
    /// case-insensitive. Returns `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let arg = words.next();

        let command = match name.to_lowercase().as_str() {
            "help" => Command::Help,
            "exit" => Command::Exit,
            "map" => Command::Map,
            "mapb" => Command::MapBack,
            "explore" => Command::Explore(required(arg, "explore")?),
            "catch" => Command::Catch(required(arg, "catch")?),
            "inspect" => Command::Inspect(required(arg, "inspect")?),
            "pokedex" => Command::Pokedex,
            _ => return Err(PokedexError::UnknownCommand(line.trim().to_string())),
        };

        Ok(Some(command))
    }
}

fn required(arg: Option<&str>, command: &'static str) -> Result<String> {
    arg.map(str::to_string)
        .ok_or_else(|| PokedexError::MissingArgument {
            usage: find_spec(command).map_or(command, |spec| spec.usage),
        })
}
