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

//! Error types for field validation and ledger storage.

use std::path::PathBuf;
use thiserror::Error;

/// User-input errors raised by the field validators.
///
/// These are recovered locally by re-prompting and never escape the
/// interactive [`Prompter`](crate::Prompter).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Date does not match `dd-mm-yyyy`
    #[error("invalid date format, please enter the date as dd-mm-yyyy")]
    InvalidFormat,

    /// Amount could not be parsed as a number
    #[error("'{0}' is not a number")]
    NotANumber(String),

    /// Amount is zero or negative
    #[error("amount must be greater than zero")]
    NonPositive,

    /// Amount is above the largest amount a ledger accepts
    #[error("amount must not exceed {0}")]
    TooLarge(rust_decimal::Decimal),

    /// Category is neither income nor expense
    #[error("invalid category, enter 'I' for Income or 'E' for Expense")]
    UnknownCategory,
}

/// Ledger storage and query errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// The ledger file could not be opened or is not valid CSV
    #[error("cannot read ledger '{}': {source}", path.display())]
    StorageRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A stored row holds a value that violates a record invariant
    #[error("malformed row at line {line} in ledger '{}': {source}", path.display())]
    MalformedRecord {
        path: PathBuf,
        line: u64,
        #[source]
        source: ValidationError,
    },

    /// The ledger file could not be created or appended to
    #[error("cannot write ledger '{}': {source}", path.display())]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A query bound is not a `dd-mm-yyyy` literal
    #[error("invalid query date '{0}', expected dd-mm-yyyy")]
    InvalidDate(String),
}

impl LedgerError {
    /// Returns `true` for failures while reading existing storage.
    pub fn is_read_error(&self) -> bool {
        matches!(self, Self::StorageRead { .. } | Self::MalformedRecord { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::{LedgerError, ValidationError};
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn validation_display_messages() {
        assert_eq!(
            ValidationError::InvalidFormat.to_string(),
            "invalid date format, please enter the date as dd-mm-yyyy"
        );
        assert_eq!(
            ValidationError::NotANumber("abc".into()).to_string(),
            "'abc' is not a number"
        );
        assert_eq!(
            ValidationError::NonPositive.to_string(),
            "amount must be greater than zero"
        );
        assert_eq!(
            ValidationError::TooLarge(rust_decimal::Decimal::ONE_THOUSAND).to_string(),
            "amount must not exceed 1000"
        );
        assert_eq!(
            ValidationError::UnknownCategory.to_string(),
            "invalid category, enter 'I' for Income or 'E' for Expense"
        );
    }

    #[test]
    fn validation_errors_are_cloneable() {
        let error = ValidationError::NonPositive;
        let cloned = error.clone();
        assert_eq!(error, cloned);
    }

    #[test]
    fn ledger_errors_name_the_file() {
        let error = LedgerError::StorageWrite {
            path: PathBuf::from("ledger.csv"),
            source: csv::Error::from(io::Error::new(io::ErrorKind::PermissionDenied, "denied")),
        };
        assert!(error.to_string().starts_with("cannot write ledger 'ledger.csv'"));
        assert!(!error.is_read_error());

        let error = LedgerError::MalformedRecord {
            path: PathBuf::from("ledger.csv"),
            line: 3,
            source: ValidationError::InvalidFormat,
        };
        assert!(error.to_string().contains("line 3"));
        assert!(error.is_read_error());
    }

    #[test]
    fn invalid_query_date_message() {
        let error = LedgerError::InvalidDate("2024/01/01".into());
        assert_eq!(
            error.to_string(),
            "invalid query date '2024/01/01', expected dd-mm-yyyy"
        );
        assert!(!error.is_read_error());
    }
}
