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

//! Transaction records.
//!
//! A [`Transaction`] is created once from validated fields, appended once to
//! the ledger and never mutated afterwards.

use crate::base::Category;
use crate::error::ValidationError;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// A single income or expense entry.
///
/// # Invariants
///
/// - `0 < amount <= MAX_AMOUNT`, so totals over any realistic ledger stay
///   within `Decimal` range.
/// - `category` is always [`Category::Income`] or [`Category::Expense`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    date: NaiveDate,
    amount: Decimal,
    category: Category,
    description: String,
}

impl Transaction {
    /// Largest accepted amount (10^15).
    pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

    /// Builds a record, rejecting amounts outside `(0, MAX_AMOUNT]`.
    pub fn new(
        date: NaiveDate,
        amount: Decimal,
        category: Category,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositive);
        }
        if amount > Self::MAX_AMOUNT {
            return Err(ValidationError::TooLarge(Self::MAX_AMOUNT));
        }
        Ok(Self {
            date,
            amount,
            category,
            description: description.into(),
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns `true` if the date lies within `[start, end]`.
    pub fn is_within(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.date && self.date <= end
    }
}
