//! Parsing of shell input lines

use crate::model::Rack;
use crate::ops::PatternFilter;
use crate::{Error, Result};

/// Shown by `help`
pub const HELP: &str = "\
Commands:
  set LETTERS   use LETTERS as the rack (_ or ? is a blank)
  -xx           words ending with xx
  xx-           words starting with xx
  -xx-          words containing xx
  xx            words other than xx that use its letters
  N             words that are N letters long
  N PATTERN     N letters long and matching PATTERN
  (empty)       everything the rack can spell
  help          show this
  quit          leave the shell";

/// One line of shell input
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Replace the rack, then list what it spells
    Set(Rack),
    /// Query the current rack
    Lookup {
        length: Option<usize>,
        pattern: Option<PatternFilter>,
    },
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        match tokens.as_slice() {
            [] => Ok(Command::Lookup {
                length: None,
                pattern: None,
            }),
            ["help"] => Ok(Command::Help),
            ["quit"] | ["exit"] => Ok(Command::Quit),
            ["set"] => Err(Error::InvalidCommand("set needs letters".into())),
            ["set", letters @ ..] => Ok(Command::Set(Rack::parse(&letters.concat())?)),
            [first, rest @ ..] => match first.parse::<usize>() {
                Ok(length) => match rest {
                    [] => Ok(Command::Lookup {
                        length: Some(length),
                        pattern: None,
                    }),
                    [pattern] => Ok(Command::Lookup {
                        length: Some(length),
                        pattern: Some(PatternFilter::parse(pattern)),
                    }),
                    _ => Err(Error::InvalidCommand(line.trim().to_string())),
                },
                Err(_) if rest.is_empty() => Ok(Command::Lookup {
                    length: None,
                    pattern: Some(PatternFilter::parse(first)),
                }),
                Err(_) => Err(Error::InvalidCommand(line.trim().to_string())),
            },
        }
    }
}
