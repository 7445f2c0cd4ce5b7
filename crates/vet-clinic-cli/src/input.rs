//! Console prompting with reprompt-on-invalid loops.
//!
//! Every prompt reads one line. Parse failures print a hint and ask again;
//! only end of input stops a loop, surfacing as [`io::ErrorKind::UnexpectedEof`].

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use chrono::{NaiveDate, NaiveTime};
use vet_clinic_core::{FieldUpdate, Species};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%I:%M %p";

/// Line-oriented prompter over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Write a full line of output.
    pub fn say(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    /// Prompt and return the raw line without its terminator.
    pub fn line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ));
        }

        let trimmed = buf.trim_end_matches(|c| c == '\n' || c == '\r').len();
        buf.truncate(trimmed);
        Ok(buf)
    }

    /// Prompt until the line parses as an integer.
    pub fn integer(&mut self, prompt: &str) -> io::Result<i64> {
        loop {
            match self.line(prompt)?.trim().parse() {
                Ok(n) => return Ok(n),
                Err(_) => self.say("Invalid input. Please enter a valid integer.")?,
            }
        }
    }

    /// Prompt until the line is a `YYYY-MM-DD` date.
    pub fn date(&mut self, prompt: &str) -> io::Result<NaiveDate> {
        loop {
            match NaiveDate::parse_from_str(self.line(prompt)?.trim(), DATE_FORMAT) {
                Ok(date) => return Ok(date),
                Err(_) => self
                    .say("Invalid date format. Please enter the date in YYYY-MM-DD format.")?,
            }
        }
    }

    /// Prompt until the line is a 12-hour `HH:MM AM/PM` time.
    pub fn time(&mut self, prompt: &str) -> io::Result<NaiveTime> {
        loop {
            match NaiveTime::parse_from_str(self.line(prompt)?.trim(), TIME_FORMAT) {
                Ok(time) => return Ok(time),
                Err(_) => self
                    .say("Invalid time format. Please enter the time in HH:MM AM/PM format.")?,
            }
        }
    }

    /// Prompt until the line names an accepted species.
    pub fn species(&mut self, prompt: &str) -> io::Result<Species> {
        loop {
            match self.line(prompt)?.parse() {
                Ok(species) => return Ok(species),
                Err(_) => self.say("Invalid species. Please enter 'dog' or 'cat'.")?,
            }
        }
    }

    /// Like [`Prompter::species`], but a blank line means "no change".
    pub fn optional_species(&mut self, prompt: &str) -> io::Result<FieldUpdate<Species>> {
        loop {
            let raw = self.line(prompt)?;
            if raw.is_empty() {
                return Ok(FieldUpdate::Empty);
            }
            match raw.parse() {
                Ok(species) => return Ok(FieldUpdate::Value(species)),
                Err(_) => self.say("Invalid species. Please enter 'dog' or 'cat'.")?,
            }
        }
    }
}

/// True when an error chain bottoms out in closed input.
pub fn is_eof(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::UnexpectedEof)
}
