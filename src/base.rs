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

//! Core value types: transaction categories and the ledger date format.

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Literal date format used at every text boundary (`dd-mm-yyyy`).
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Parses a `dd-mm-yyyy` literal into a calendar date.
///
/// Day and month may omit the leading zero; the year must be exactly four
/// digits.
pub fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let raw = raw.trim();
    let digits = |part: &str, len: std::ops::RangeInclusive<usize>| {
        len.contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };
    let well_formed = match raw.split('-').collect::<Vec<_>>()[..] {
        [day, month, year] => digits(day, 1..=2) && digits(month, 1..=2) && digits(year, 4..=4),
        _ => false,
    };
    if !well_formed {
        return Err(ValidationError::InvalidFormat);
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| ValidationError::InvalidFormat)
}

/// Formats a date as a zero-padded `dd-mm-yyyy` literal.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Kind of a transaction.
///
/// Entered by the user as a single-letter code (`I` / `E`) and stored as the
/// full word (`Income` / `Expense`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Income,
    Expense,
}

impl Category {
    /// Maps an entry code to a category, ignoring case.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "I" => Some(Self::Income),
            "E" => Some(Self::Expense),
            _ => None,
        }
    }

    /// Single-letter entry code.
    pub fn code(&self) -> char {
        match self {
            Self::Income => 'I',
            Self::Expense => 'E',
        }
    }

    /// Full name as written to storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the stored full name. Exact match only.
impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Income" => Ok(Self::Income),
            "Expense" => Ok(Self::Expense),
            _ => Err(ValidationError::UnknownCategory),
        }
    }
}
