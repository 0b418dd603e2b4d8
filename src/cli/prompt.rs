//! Validated console input
//!
//! Each `parse_*` function turns one line of user text into an [`Entry`]. The
//! [`Prompter`] re-asks on [`Entry::Invalid`] until it gets a value or the user
//! types the cancel sentinel.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Money;

/// Word that aborts the current entry at any prompt
pub const CANCEL: &str = "cancel";

/// Outcome of reading one value from the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry<T> {
    /// A well-formed value
    Value(T),
    /// The user asked to abort the operation
    Cancelled,
    /// Malformed input, with a message to show before re-prompting
    Invalid(String),
}

impl<T> Entry<T> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Entry::Cancelled)
    }

    /// Convert into a result, treating both cancel and invalid input as errors
    ///
    /// Used by the non-interactive subcommands where there is no re-prompt.
    pub fn into_result(self, field: &str) -> ExpenseResult<T> {
        match self {
            Entry::Value(v) => Ok(v),
            Entry::Cancelled => Err(ExpenseError::Validation(format!(
                "'{}' is not a valid {}",
                CANCEL, field
            ))),
            Entry::Invalid(msg) => Err(ExpenseError::Validation(msg)),
        }
    }
}

fn is_cancel(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(CANCEL)
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Parse a calendar date in `YYYY-MM-DD` form
pub fn parse_date(input: &str) -> Entry<String> {
    if is_cancel(input) {
        return Entry::Cancelled;
    }
    let s = input.trim();
    let shape_ok = s.len() == 10
        && s.as_bytes()[4] == b'-'
        && s.as_bytes()[7] == b'-'
        && all_digits(&s[..4])
        && all_digits(&s[5..7])
        && all_digits(&s[8..]);

    if shape_ok && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok() {
        Entry::Value(s.to_string())
    } else {
        Entry::Invalid("Invalid date format. Please use YYYY-MM-DD.".into())
    }
}

/// Parse a year and month in `YYYY-MM` form
pub fn parse_year_month(input: &str) -> Entry<String> {
    if is_cancel(input) {
        return Entry::Cancelled;
    }
    let s = input.trim();
    let valid = s.len() == 7
        && s.as_bytes()[4] == b'-'
        && all_digits(&s[..4])
        && all_digits(&s[5..])
        && NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d").is_ok();

    if valid {
        Entry::Value(s.to_string())
    } else {
        Entry::Invalid("Invalid format. Please use YYYY-MM.".into())
    }
}

/// Parse a four-digit year
pub fn parse_year(input: &str) -> Entry<String> {
    if is_cancel(input) {
        return Entry::Cancelled;
    }
    let s = input.trim();
    if s.len() == 4 && all_digits(s) {
        Entry::Value(s.to_string())
    } else {
        Entry::Invalid("Invalid format. Please use YYYY.".into())
    }
}

/// Parse a decimal amount
pub fn parse_amount(input: &str) -> Entry<Money> {
    if is_cancel(input) {
        return Entry::Cancelled;
    }
    match Money::parse(input) {
        Ok(amount) => Entry::Value(amount),
        Err(e) => Entry::Invalid(format!("{}. Please enter a valid number.", e)),
    }
}

/// Parse a category label (any non-empty text)
pub fn parse_category(input: &str) -> Entry<String> {
    if is_cancel(input) {
        return Entry::Cancelled;
    }
    let s = input.trim();
    if s.is_empty() {
        Entry::Invalid("Category cannot be empty.".into())
    } else {
        Entry::Value(s.to_string())
    }
}

/// Parse a 1-based list position
///
/// Only checks that the text is a positive integer; range checks against the
/// ledger happen at removal.
pub fn parse_position(input: &str) -> Entry<usize> {
    if is_cancel(input) {
        return Entry::Cancelled;
    }
    match input.trim().parse::<usize>() {
        Ok(n) if n > 0 => Entry::Value(n),
        _ => Entry::Invalid("Please enter a positive whole number.".into()),
    }
}

/// Line-oriented console I/O
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Access the output stream for plain messages
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Write a message without a trailing newline
    pub fn say(&mut self, text: &str) -> ExpenseResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Print a prompt and read one line, `None` on end of input
    pub fn line(&mut self, prompt: &str) -> ExpenseResult<Option<String>> {
        self.say(prompt)?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Ask until `parse` yields a value or the user cancels
    ///
    /// Never returns [`Entry::Invalid`]; invalid input is reported and asked
    /// again. End of input counts as cancel.
    pub fn ask<T, F>(&mut self, prompt: &str, parse: F) -> ExpenseResult<Entry<T>>
    where
        F: Fn(&str) -> Entry<T>,
    {
        loop {
            let Some(line) = self.line(prompt)? else {
                return Ok(Entry::Cancelled);
            };
            match parse(&line) {
                Entry::Invalid(msg) => writeln!(self.output, "{}", msg)?,
                other => return Ok(other),
            }
        }
    }
}
