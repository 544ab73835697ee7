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

//! # Finance Tracker
//!
//! This library records personal income and expense transactions in an
//! append-only CSV ledger and summarizes them over date ranges.
//!
//! ## Core Components
//!
//! - [`Prompter`] and the `validate_*` functions: field validation with re-prompting
//! - [`LedgerStore`]: CSV-backed append-only storage
//! - [`QueryEngine`]: inclusive date range filter with income/expense totals
//! - [`report`]: text table and daily chart for query results
//!
//! ## Example
//!
//! ```
//! use finance_tracker_rs::{Category, LedgerConfig, LedgerStore, QueryEngine, Transaction};
//! use finance_tracker_rs::base::parse_date;
//! use rust_decimal_macros::dec;
//!
//! let dir = std::env::temp_dir().join(format!("finance-tracker-doc-{}", std::process::id()));
//! let store = LedgerStore::new(LedgerConfig::new(dir.join("ledger.csv")));
//! store.initialize().unwrap();
//!
//! let salary = Transaction::new(
//!     parse_date("01-01-2024").unwrap(),
//!     dec!(1000),
//!     Category::Income,
//!     "salary",
//! )
//! .unwrap();
//! store.append(&salary).unwrap();
//!
//! let result = QueryEngine::new(&store).query("01-01-2024", "31-01-2024").unwrap();
//! assert_eq!(result.summary.net, dec!(1000));
//! # std::fs::remove_dir_all(dir).unwrap();
//! ```

pub mod base;
pub mod config;
pub mod error;
mod query;
pub mod report;
mod store;
mod transaction;
mod validate;

pub use base::{Category, DATE_FORMAT};
pub use crate::config::Settings;
pub use error::{LedgerError, ValidationError};
pub use query::{QueryEngine, QueryResult, Summary};
pub use store::{COLUMNS, LedgerConfig, LedgerStore};
pub use transaction::Transaction;
pub use validate::{
    DATE_PROMPT, END_DATE_PROMPT, Prompter, START_DATE_PROMPT, validate_amount, validate_category,
    validate_date, validate_description,
};
