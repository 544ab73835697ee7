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

//! Date range queries over the ledger.
//!
//! The [`QueryEngine`] reads the whole ledger, keeps the records whose date
//! lies in an inclusive `[start, end]` interval (in file order) and totals
//! them by category.
//!
//! A reversed interval (`start > end`) is not an error; it simply matches
//! nothing.

use crate::base::{Category, parse_date};
use crate::error::LedgerError;
use crate::report::DailyTotals;
use crate::store::LedgerStore;
use crate::transaction::Transaction;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Aggregate totals over a set of transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    /// `total_income - total_expense`.
    pub net: Decimal,
}

impl Summary {
    pub fn from_transactions<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Self {
        let (total_income, total_expense) = transactions.into_iter().fold(
            (Decimal::ZERO, Decimal::ZERO),
            |(income, expense), tx| match tx.category() {
                Category::Income => (income + tx.amount(), expense),
                Category::Expense => (income, expense + tx.amount()),
            },
        );

        Self {
            total_income,
            total_expense,
            net: total_income - total_expense,
        }
    }
}

/// Records matched by a range query, with their totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub transactions: Vec<Transaction>,
    pub summary: Summary,
}

impl QueryResult {
    /// Returns `true` when no record fell in the range.
    ///
    /// The summary is all zeros in that case and callers skip rendering.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Per-day income and expense sums for charting.
    pub fn daily_totals(&self) -> Vec<DailyTotals> {
        DailyTotals::from_transactions(&self.transactions)
    }
}

/// Range query engine over a [`LedgerStore`].
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    store: &'a LedgerStore,
}

impl<'a> QueryEngine<'a> {
    pub fn new(store: &'a LedgerStore) -> Self {
        Self { store }
    }

    /// Runs a query with `dd-mm-yyyy` bounds.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InvalidDate`] - a bound is not a valid date literal.
    /// - Any read error from [`LedgerStore::read_all`].
    pub fn query(&self, start: &str, end: &str) -> Result<QueryResult, LedgerError> {
        let start = parse_date(start).map_err(|_| LedgerError::InvalidDate(start.to_string()))?;
        let end = parse_date(end).map_err(|_| LedgerError::InvalidDate(end.to_string()))?;
        self.query_range(start, end)
    }

    /// Runs a query with inclusive bounds.
    pub fn query_range(&self, start: NaiveDate, end: NaiveDate) -> Result<QueryResult, LedgerError> {
        let transactions: Vec<Transaction> = self
            .store
            .read_all()?
            .into_iter()
            .filter(|tx| tx.is_within(start, end))
            .collect();
        let summary = Summary::from_transactions(&transactions);

        tracing::debug!(
            %start,
            %end,
            matched = transactions.len(),
            net = %summary.net,
            "range query"
        );

        Ok(QueryResult {
            start,
            end,
            transactions,
            summary,
        })
    }
}
