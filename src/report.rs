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

//! Text rendering of query results.
//!
//! Consumes a [`QueryResult`] as-is; no filtering happens here.

use crate::base::{Category, format_date};
use crate::query::QueryResult;
use crate::transaction::Transaction;
use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};

const BAR_WIDTH: u32 = 40;

/// Rounds to cents, halves away from zero.
fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// An amount prefixed with a currency symbol, always two decimals.
///
/// Negative values put the sign before the symbol (`-£12.00`).
#[derive(Debug, Clone, Copy)]
pub struct Money<'a> {
    pub amount: Decimal,
    pub symbol: &'a str,
}

impl<'a> Money<'a> {
    pub fn new(amount: Decimal, symbol: &'a str) -> Self {
        Self { amount, symbol }
    }
}

impl fmt::Display for Money<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = round_cents(self.amount);
        if rounded.is_sign_negative() && !rounded.is_zero() {
            write!(f, "-{}{:.2}", self.symbol, rounded.abs())
        } else {
            write!(f, "{}{:.2}", self.symbol, rounded.abs())
        }
    }
}

/// Income and expense sums for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyTotals {
    pub date: NaiveDate,
    pub income: Decimal,
    pub expense: Decimal,
}

impl DailyTotals {
    /// Groups transactions by day.
    ///
    /// Covers every day from the earliest to the latest record; days without
    /// a record of a category hold zero for it.
    pub fn from_transactions(transactions: &[Transaction]) -> Vec<Self> {
        let mut by_day: BTreeMap<NaiveDate, (Decimal, Decimal)> = BTreeMap::new();
        for tx in transactions {
            let entry = by_day.entry(tx.date()).or_default();
            match tx.category() {
                Category::Income => entry.0 += tx.amount(),
                Category::Expense => entry.1 += tx.amount(),
            }
        }

        let (Some(&first), Some(&last)) = (by_day.keys().next(), by_day.keys().next_back()) else {
            return Vec::new();
        };

        first
            .iter_days()
            .take_while(|day| *day <= last)
            .map(|date| {
                let (income, expense) = by_day.get(&date).copied().unwrap_or_default();
                Self {
                    date,
                    income,
                    expense,
                }
            })
            .collect()
    }
}

/// Writes the transaction table and the summary block.
pub fn render_report<W: Write>(mut out: W, result: &QueryResult, currency: &str) -> io::Result<()> {
    if result.is_empty() {
        writeln!(out, "No transactions found in the given date range.")?;
        return Ok(());
    }

    writeln!(
        out,
        "Transactions from {} to {}",
        format_date(result.start),
        format_date(result.end)
    )?;
    writeln!(out, "{:<10}  {:>12}  {:<8}  description", "date", "amount", "category")?;
    for tx in &result.transactions {
        writeln!(
            out,
            "{:<10}  {:>12}  {:<8}  {}",
            format_date(tx.date()),
            format!("{:.2}", round_cents(tx.amount())),
            tx.category(),
            tx.description()
        )?;
    }

    let summary = &result.summary;
    writeln!(out)?;
    writeln!(out, "Summary:")?;
    writeln!(out, "Total Income: {}", Money::new(summary.total_income, currency))?;
    writeln!(out, "Total Expense: {}", Money::new(summary.total_expense, currency))?;
    writeln!(out, "Net Savings: {}", Money::new(summary.net, currency))?;
    Ok(())
}

fn bar(value: Decimal, max: Decimal) -> String {
    if value.is_zero() || max.is_zero() {
        return String::new();
    }
    // Ratio first: value <= max keeps every intermediate within BAR_WIDTH.
    let len = (value / max * Decimal::from(BAR_WIDTH))
        .round()
        .to_usize()
        .unwrap_or(0)
        .max(1);
    "#".repeat(len)
}

/// Draws the daily income and expense series as horizontal bars.
pub fn render_chart<W: Write>(mut out: W, series: &[DailyTotals], currency: &str) -> io::Result<()> {
    let max = series
        .iter()
        .flat_map(|day| [day.income, day.expense])
        .max()
        .unwrap_or(Decimal::ZERO);

    writeln!(out, "Income and Expenses over time")?;
    for day in series {
        let width = BAR_WIDTH as usize;
        writeln!(
            out,
            "{}  Income   {:<width$} {}",
            format_date(day.date),
            bar(day.income, max),
            Money::new(day.income, currency)
        )?;
        writeln!(
            out,
            "{:10}  Expense  {:<width$} {}",
            "",
            bar(day.expense, max),
            Money::new(day.expense, currency)
        )?;
    }
    Ok(())
}
