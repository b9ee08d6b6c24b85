//! Commands typed at the prompt.

use hexword_core::HexCoord;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Usage: [place] <q> <r> <letter>")]
    MissingArgument,

    #[error("Not a coordinate: {0}")]
    BadCoordinate(String),

    #[error("Expected a single letter, got {0:?}")]
    BadLetter(String),
}

/// A parsed line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play a letter from the rack
    Place { coord: HexCoord, letter: char },
    /// Print the grid
    Board,
    /// Print the rack
    Rack,
    /// Print both scores
    Score,
    /// Print the game as JSON
    State,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  <q> <r> <letter>        place a letter from your rack (also: place <q> <r> <letter>)
  board                   show the board (your tiles upper case, AI tiles lower case)
  rack                    show your letters
  score                   show the scores
  state                   dump the game as JSON
  help                    show this message
  quit                    leave the game";

impl std::str::FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let first = words.next().ok_or(CommandError::Empty)?;

        match first.to_ascii_lowercase().as_str() {
            "board" | "b" => Ok(Command::Board),
            "rack" => Ok(Command::Rack),
            "score" | "scores" => Ok(Command::Score),
            "state" => Ok(Command::State),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "place" | "p" => parse_place(words.next(), words.next(), words.next()),
            _ if looks_numeric(first) => parse_place(Some(first), words.next(), words.next()),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn looks_numeric(word: &str) -> bool {
    word.trim_start_matches(['-', '+']).starts_with(|c: char| c.is_ascii_digit())
}

fn parse_place(q: Option<&str>, r: Option<&str>, letter: Option<&str>) -> Result<Command, CommandError> {
    let (Some(q), Some(r), Some(letter)) = (q, r, letter) else {
        return Err(CommandError::MissingArgument);
    };
    let q = q
        .parse()
        .map_err(|_| CommandError::BadCoordinate(q.to_string()))?;
    let r = r
        .parse()
        .map_err(|_| CommandError::BadCoordinate(r.to_string()))?;

    let mut chars = letter.chars();
    let letter = match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
        _ => return Err(CommandError::BadLetter(letter.to_string())),
    };

    Ok(Command::Place {
        coord: HexCoord::new(q, r),
        letter,
    })
}
