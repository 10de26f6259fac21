//! Console command parsing.

use std::fmt;

use gambit_core::{Promotion, Square};

use crate::error::ConsoleError;

/// A session setting changed with `set <name> <value>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOption {
    /// Draw pieces as Unicode chess symbols instead of letters.
    Glyphs(bool),
    /// Print rank numbers and file letters around the board.
    Coordinates(bool),
    /// Print the board after every accepted move.
    Echo(bool),
    /// Deepest `count` or `divide` the session will run.
    MaxDepth(usize),
    /// Piece every promotion becomes during `count` and `divide`.
    Promotion(Promotion),
}

impl fmt::Display for SessionOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let on_off = |b: bool| if b { "on" } else { "off" };
        match self {
            SessionOption::Glyphs(b) => write!(f, "glyphs {}", on_off(*b)),
            SessionOption::Coordinates(b) => write!(f, "coordinates {}", on_off(*b)),
            SessionOption::Echo(b) => write!(f, "echo {}", on_off(*b)),
            SessionOption::MaxDepth(d) => write!(f, "maxdepth {d}"),
            SessionOption::Promotion(p) => write!(f, "promotion {p}"),
        }
    }
}

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `e2e4` -- play a move for the side to move.
    Move {
        /// Square the piece leaves.
        src: Square,
        /// Square the piece lands on.
        dst: Square,
    },
    /// `board` -- print the current position.
    Board,
    /// `count <depth>` -- run the position enumerator.
    Count(usize),
    /// `divide <depth>` -- enumerator totals per first move.
    Divide(usize),
    /// `set <name> <value>` -- change a session setting.
    Set(SessionOption),
    /// `new` -- start a fresh game.
    New,
    /// `help` -- list commands.
    Help,
    /// `end` or `quit` -- leave the session.
    Quit,
    /// Blank line.
    Empty,
}

/// Parse a single line of console input into a [`Command`].
///
/// Anything that is not a command word is read as a move.
pub fn parse_command(line: &str) -> Result<Command, ConsoleError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&first) = tokens.first() else {
        return Ok(Command::Empty);
    };

    match first {
        "board" => Ok(Command::Board),
        "count" => parse_depth(tokens.get(1)).map(Command::Count),
        "divide" => parse_depth(tokens.get(1)).map(Command::Divide),
        "set" => parse_set(&tokens[1..]).map(Command::Set),
        "new" => Ok(Command::New),
        "help" => Ok(Command::Help),
        "end" | "quit" => Ok(Command::Quit),
        _ if tokens.len() == 1 => parse_move(first),
        _ => Err(ConsoleError::InvalidMoveFormat {
            input: line.trim().to_string(),
        }),
    }
}

/// Parse coordinate notation such as `e2e4`.
///
/// The file letter gives the column (`a` = 0) and the rank digit gives the
/// row counted from the top (`8` = row 0). Text that has the right shape but
/// names a square off the board is [`ConsoleError::OutOfBounds`].
pub fn parse_move(text: &str) -> Result<Command, ConsoleError> {
    let chars: Vec<char> = text.chars().collect();
    let well_formed = chars.len() == 4
        && chars[0].is_ascii_alphabetic()
        && chars[1].is_ascii_digit()
        && chars[2].is_ascii_alphabetic()
        && chars[3].is_ascii_digit();
    if !well_formed {
        return Err(ConsoleError::InvalidMoveFormat {
            input: text.to_string(),
        });
    }

    let square = |file: char, rank: char| {
        let col = file.to_ascii_lowercase() as i32 - 'a' as i32;
        let row = 8 - (rank as i32 - '0' as i32);
        Square::from_coords(row, col)
    };
    match (square(chars[0], chars[1]), square(chars[2], chars[3])) {
        (Some(src), Some(dst)) => Ok(Command::Move { src, dst }),
        _ => Err(ConsoleError::OutOfBounds {
            input: text.to_string(),
        }),
    }
}

fn parse_depth(token: Option<&&str>) -> Result<usize, ConsoleError> {
    let value = token.copied().unwrap_or_default();
    value.parse().map_err(|_| ConsoleError::InvalidDepth {
        value: value.to_string(),
    })
}

/// Parse the `set` arguments: `<name> <value>`.
fn parse_set(tokens: &[&str]) -> Result<SessionOption, ConsoleError> {
    let name = tokens.first().copied().unwrap_or_default();
    let value = tokens.get(1).copied().unwrap_or_default();
    let invalid = || ConsoleError::InvalidOptionValue {
        name: name.to_string(),
        value: value.to_string(),
    };

    match name.to_ascii_lowercase().as_str() {
        "glyphs" => parse_switch(value).map(SessionOption::Glyphs).ok_or_else(invalid),
        "coordinates" => parse_switch(value)
            .map(SessionOption::Coordinates)
            .ok_or_else(invalid),
        "echo" => parse_switch(value).map(SessionOption::Echo).ok_or_else(invalid),
        "maxdepth" => value
            .parse::<usize>()
            .ok()
            .filter(|&d| d > 0)
            .map(SessionOption::MaxDepth)
            .ok_or_else(invalid),
        "promotion" => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Promotion::from_letter(c)
                    .map(SessionOption::Promotion)
                    .ok_or_else(invalid),
                _ => Err(invalid()),
            }
        }
        _ => Err(ConsoleError::UnknownOption {
            name: name.to_string(),
        }),
    }
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" => Some(true),
        "off" | "false" | "no" => Some(false),
        _ => None,
    }
}
