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

//! Append-only CSV ledger storage.
//!
//! # File Format
//!
//! ```csv
//! date,amount,category,description
//! 01-01-2024,1000,Income,salary
//! 15-01-2024,200,Expense,"groceries, weekly"
//! ```
//!
//! Rows are only ever appended. Descriptions containing commas, quotes or
//! line breaks are quoted by the CSV writer.

use crate::base::{format_date, parse_date};
use crate::error::{LedgerError, ValidationError};
use crate::transaction::Transaction;
use crate::validate::validate_amount;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Column names, in storage order.
pub const COLUMNS: [&str; 4] = ["date", "amount", "category", "description"];

/// Storage location of a ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    pub path: PathBuf,
}

impl LedgerConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Raw CSV row. Fields stay textual so each one is validated explicitly
/// when read back.
#[derive(Debug, Serialize, Deserialize)]
struct CsvRecord {
    date: String,
    amount: String,
    category: String,
    #[serde(default)]
    description: String,
}

impl CsvRecord {
    fn from_transaction(tx: &Transaction) -> Self {
        Self {
            date: format_date(tx.date()),
            amount: tx.amount().to_string(),
            category: tx.category().to_string(),
            description: tx.description().to_string(),
        }
    }

    fn into_transaction(self) -> Result<Transaction, ValidationError> {
        let date = parse_date(&self.date)?;
        let amount = validate_amount(&self.amount)?;
        let category = self.category.parse()?;
        Transaction::new(date, amount, category, self.description)
    }
}

/// Ledger backed by a single CSV file.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    config: LedgerConfig,
}

impl LedgerStore {
    pub fn new(config: LedgerConfig) -> Self {
        Self { config }
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    fn write_error(&self, source: impl Into<csv::Error>) -> LedgerError {
        LedgerError::StorageWrite {
            path: self.config.path.clone(),
            source: source.into(),
        }
    }

    fn read_error(&self, source: impl Into<csv::Error>) -> LedgerError {
        LedgerError::StorageRead {
            path: self.config.path.clone(),
            source: source.into(),
        }
    }

    /// Creates the file with its header row if it does not exist yet.
    ///
    /// An existing file is left untouched, whatever its content. Returns
    /// `true` if the file was created.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::StorageWrite`] if the file cannot be created.
    pub fn initialize(&self) -> Result<bool, LedgerError> {
        let path = self.path();
        if path.exists() {
            tracing::debug!(path = %path.display(), "ledger already present");
            return Ok(false);
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
        }

        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| self.write_error(e))?;

        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);
        wtr.write_record(COLUMNS).map_err(|e| self.write_error(e))?;
        wtr.flush().map_err(|e| self.write_error(e))?;

        tracing::info!(path = %path.display(), "created ledger");
        Ok(true)
    }

    /// Appends one record after the existing rows.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::StorageWrite`] if the file cannot be opened or
    /// written.
    pub fn append(&self, transaction: &Transaction) -> Result<(), LedgerError> {
        let file = OpenOptions::new()
            .append(true)
            .open(self.path())
            .map_err(|e| self.write_error(e))?;

        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);
        wtr.serialize(CsvRecord::from_transaction(transaction))
            .map_err(|e| self.write_error(e))?;
        wtr.flush().map_err(|e| self.write_error(e))?;

        tracing::info!(
            date = %transaction.date(),
            amount = %transaction.amount(),
            category = %transaction.category(),
            "appended transaction"
        );
        Ok(())
    }

    /// Reads every record in file order.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::StorageRead`] - the file is missing or not valid CSV.
    /// - [`LedgerError::MalformedRecord`] - a row fails field validation.
    pub fn read_all(&self) -> Result<Vec<Transaction>, LedgerError> {
        let file = File::open(self.path()).map_err(|e| self.read_error(e))?;
        self.read_from(io::BufReader::new(file))
    }

    fn read_from<R: io::Read>(&self, reader: R) -> Result<Vec<Transaction>, LedgerError> {
        let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);
        let headers = rdr.headers().map_err(|e| self.read_error(e))?.clone();

        let mut row = StringRecord::new();
        let mut transactions = Vec::new();

        while rdr.read_record(&mut row).map_err(|e| self.read_error(e))? {
            let line = row.position().map_or(0, |p| p.line());
            let record: CsvRecord = row
                .deserialize(Some(&headers))
                .map_err(|e| self.read_error(e))?;

            let transaction = record.into_transaction().map_err(|source| {
                tracing::warn!(path = %self.path().display(), line, "rejected stored row: {source}");
                LedgerError::MalformedRecord {
                    path: self.config.path.clone(),
                    line,
                    source,
                }
            })?;
            transactions.push(transaction);
        }

        tracing::debug!(path = %self.path().display(), count = transactions.len(), "read ledger");
        Ok(transactions)
    }
}
