//! Rack tokens: letters and blank tiles

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Character used to print and type a wildcard (blank tile)
pub const WILDCARD: char = '_';

/// Alternative input spelling for a wildcard
pub const WILDCARD_ALT: char = '?';

/// A single query element
///
/// `Wildcard` is declared first so it orders before every letter. A sorted
/// rack therefore keeps its blanks at the front and its letters ascending,
/// which is the order the candidate search expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Token {
    /// Stands in for any single letter
    Wildcard,
    /// A literal (lowercase) letter
    Letter(char),
}

impl Token {
    /// Parse a token from a string holding exactly one character
    pub fn parse(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Self::from_char(c).ok_or_else(|| Error::MalformedToken(s.to_string()))
            }
            _ => Err(Error::MalformedToken(s.to_string())),
        }
    }

    /// Convert a single character, `None` if it is neither a letter nor a wildcard
    pub fn from_char(c: char) -> Option<Self> {
        if c == WILDCARD || c == WILDCARD_ALT {
            Some(Token::Wildcard)
        } else if c.is_alphabetic() {
            // Multi-char lowercase mappings are not letters we can key on
            let mut lower = c.to_lowercase();
            match (lower.next(), lower.next()) {
                (Some(l), None) => Some(Token::Letter(l)),
                _ => None,
            }
        } else {
            None
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Token::Wildcard)
    }

    /// The literal letter, if any
    pub fn letter(&self) -> Option<char> {
        match self {
            Token::Letter(c) => Some(*c),
            Token::Wildcard => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Wildcard => write!(f, "{}", WILDCARD),
            Token::Letter(c) => write!(f, "{}", c),
        }
    }
}

/// The tiles a player holds
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rack(Vec<Token>);

impl Rack {
    /// Create an empty rack
    pub fn new() -> Self {
        Rack(Vec::new())
    }

    /// Parse every non-whitespace character of `s` as a token
    pub fn parse(s: &str) -> Result<Self> {
        let mut rack = Rack::new();
        rack.push_str(s)?;
        Ok(rack)
    }

    /// Append the characters of `s`, rejecting anything that is not a token
    pub fn push_str(&mut self, s: &str) -> Result<()> {
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            let token =
                Token::from_char(c).ok_or_else(|| Error::MalformedToken(c.to_string()))?;
            self.0.push(token);
        }
        Ok(())
    }

    pub fn push(&mut self, token: Token) {
        self.0.push(token);
    }

    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    /// Tokens in search order: wildcards first, then letters ascending
    pub fn sorted(&self) -> Vec<Token> {
        let mut tokens = self.0.clone();
        tokens.sort();
        tokens
    }

    pub fn wildcard_count(&self) -> usize {
        self.0.iter().filter(|t| t.is_wildcard()).count()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Token>> for Rack {
    fn from(tokens: Vec<Token>) -> Self {
        Rack(tokens)
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.0 {
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}
