// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Field validation and interactive entry.
//!
//! The `validate_*` functions are pure: they take one raw line and either
//! return the typed value or a [`ValidationError`]. [`Prompter`] drives them
//! against any [`BufRead`]/[`Write`] pair, printing the diagnostic and asking
//! again until the input is accepted.
//!
//! # Example
//!
//! ```
//! use finance_tracker_rs::{Category, Prompter};
//! use std::io::Cursor;
//!
//! let input = Cursor::new("x\nE\n");
//! let mut prompter = Prompter::new(input, Vec::new());
//!
//! assert_eq!(prompter.category().unwrap(), Category::Expense);
//! assert_eq!(prompter.retries(), 1);
//! ```

use crate::base::{Category, parse_date};
use crate::error::ValidationError;
use crate::transaction::Transaction;
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

pub const DATE_PROMPT: &str =
    "Enter the date of the transaction (dd-mm-yyyy) or enter for today's date: ";
pub const START_DATE_PROMPT: &str = "Enter the start date (dd-mm-yyyy): ";
pub const END_DATE_PROMPT: &str = "Enter the end date (dd-mm-yyyy): ";
const AMOUNT_PROMPT: &str = "Enter the amount: ";
const CATEGORY_PROMPT: &str = "Enter the category ('I' for Income or 'E' for Expense): ";
const DESCRIPTION_PROMPT: &str = "Enter a description (optional): ";

/// Validates a `dd-mm-yyyy` date.
///
/// An empty input yields `today` when `allow_default` is set.
pub fn validate_date(
    raw: &str,
    allow_default: bool,
    today: NaiveDate,
) -> Result<NaiveDate, ValidationError> {
    if allow_default && raw.trim().is_empty() {
        return Ok(today);
    }
    parse_date(raw)
}

/// Validates a strictly positive amount no larger than
/// [`Transaction::MAX_AMOUNT`].
///
/// Accepts plain decimal literals (`12.50`) and scientific notation (`1e3`).
pub fn validate_amount(raw: &str) -> Result<Decimal, ValidationError> {
    let raw = raw.trim();
    let amount = Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|_| ValidationError::NotANumber(raw.to_string()))?;

    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositive);
    }
    if amount > Transaction::MAX_AMOUNT {
        return Err(ValidationError::TooLarge(Transaction::MAX_AMOUNT));
    }
    Ok(amount)
}

/// Validates an `I` / `E` entry code, ignoring case.
pub fn validate_category(raw: &str) -> Result<Category, ValidationError> {
    Category::from_code(raw).ok_or(ValidationError::UnknownCategory)
}

/// Descriptions are free text; an empty one is valid.
pub fn validate_description(raw: &str) -> String {
    raw.to_string()
}

/// Line-oriented prompt driver with retry on invalid input.
///
/// Every rejected line prints the validator's diagnostic to the output and
/// increments [`retries`](Self::retries). Closing the input ends the loop with
/// [`io::ErrorKind::UnexpectedEof`].
pub struct Prompter<R, W> {
    input: R,
    output: W,
    today: Option<NaiveDate>,
    retries: usize,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            today: None,
            retries: 0,
        }
    }

    /// Pins the date substituted for an empty date entry.
    ///
    /// Without it the local clock is read at each date prompt.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Number of inputs rejected so far.
    pub fn retries(&self) -> usize {
        self.retries
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Writes `prompt` and returns the next line without its line ending.
    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(line)
    }

    /// Asks a yes/no question; only `y` (any case) counts as yes.
    pub fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        Ok(self.ask(prompt)?.trim().eq_ignore_ascii_case("y"))
    }

    fn retry_until<T>(
        &mut self,
        prompt: &str,
        validate: impl Fn(&str) -> Result<T, ValidationError>,
    ) -> io::Result<T> {
        loop {
            let raw = self.ask(prompt)?;
            match validate(&raw) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    self.retries += 1;
                    tracing::debug!(retries = self.retries, "rejected input: {e}");
                    writeln!(self.output, "{e}")?;
                }
            }
        }
    }

    pub fn date(&mut self, prompt: &str, allow_default: bool) -> io::Result<NaiveDate> {
        let today = self.today();
        self.retry_until(prompt, |raw| validate_date(raw, allow_default, today))
    }

    pub fn amount(&mut self) -> io::Result<Decimal> {
        self.retry_until(AMOUNT_PROMPT, validate_amount)
    }

    pub fn category(&mut self) -> io::Result<Category> {
        self.retry_until(CATEGORY_PROMPT, validate_category)
    }

    pub fn description(&mut self) -> io::Result<String> {
        Ok(validate_description(&self.ask(DESCRIPTION_PROMPT)?))
    }

    /// Collects all four fields of a new transaction.
    pub fn transaction(&mut self) -> io::Result<Transaction> {
        let date = self.date(DATE_PROMPT, true)?;
        let amount = self.amount()?;
        let category = self.category()?;
        let description = self.description()?;

        Transaction::new(date, amount, category, description)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
