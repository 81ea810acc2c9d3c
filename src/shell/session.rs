//! Interactive rack shell

use super::command::{Command, HELP};
use crate::dictionary::Dictionary;
use crate::model::Rack;
use crate::ops::{FlagFilters, PatternFilter, Query};
use crate::{Error, Result};
use std::io::{BufRead, Write};

/// A read-eval-print loop over a loaded dictionary
///
/// Keeps the current rack between lines; every other line is a lookup
/// against it.
pub struct Shell<'a> {
    dictionary: &'a Dictionary,
    rack: Rack,
    limit: Option<usize>,
}

impl<'a> Shell<'a> {
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Shell {
            dictionary,
            rack: Rack::new(),
            limit: None,
        }
    }

    pub fn with_rack(mut self, rack: Rack) -> Self {
        self.rack = rack;
        self
    }

    /// Cap the number of words printed per lookup
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn rack(&self) -> &Rack {
        &self.rack
    }

    /// Read commands until `quit` or end of input
    ///
    /// Bad input is reported on `output` and the loop continues; only I/O
    /// failures end it early.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        writeln!(output, "Anagram shell, type `help` for commands")?;

        let mut line = String::new();
        loop {
            write!(output, "> ")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                break;
            }

            let outcome = Command::parse(&line).and_then(|command| match command {
                Command::Quit => Ok(false),
                command => self.execute(command, &mut output).map(|_| true),
            });

            match outcome {
                Ok(true) => {}
                Ok(false) => break,
                Err(Error::Io(e)) => return Err(Error::Io(e)),
                Err(e) => writeln!(output, "error: {}", e)?,
            }
        }

        Ok(())
    }

    /// Apply one command, writing its output
    pub fn execute<W: Write>(&mut self, command: Command, output: &mut W) -> Result<()> {
        match command {
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Quit => {}
            Command::Set(rack) => {
                self.rack = rack;
                self.lookup(None, None, output)?;
            }
            Command::Lookup { length, pattern } => self.lookup(length, pattern, output)?,
        }
        Ok(())
    }

    fn lookup<W: Write>(
        &self,
        length: Option<usize>,
        pattern: Option<PatternFilter>,
        output: &mut W,
    ) -> Result<()> {
        let mut query = Query::new(self.rack.clone())
            .with_flags(FlagFilters::new().with_length(length.unwrap_or(0)));
        if let Some(pattern) = pattern {
            query = query.with_pattern(pattern);
        }
        if let Some(limit) = self.limit {
            query = query.with_limit(limit);
        }

        let result = self.dictionary.query(&query)?;
        writeln!(output, "{} matches", result.total)?;
        writeln!(output, "looked at {} nodes", result.stats.nodes_visited)?;
        writeln!(output, "{}", result.words.join(" "))?;
        Ok(())
    }
}
