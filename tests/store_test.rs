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

//! Ledger store integration tests against temporary files.

use chrono::NaiveDate;
use finance_tracker_rs::{
    Category, LedgerConfig, LedgerError, LedgerStore, Transaction, ValidationError,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fs;
use tempfile::TempDir;

fn temp_store() -> (TempDir, LedgerStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = LedgerStore::new(LedgerConfig::new(dir.path().join("finance_data.csv")));
    (dir, store)
}

fn make_tx(date: &str, amount: Decimal, category: Category, description: &str) -> Transaction {
    let date = NaiveDate::parse_from_str(date, "%d-%m-%Y").unwrap();
    Transaction::new(date, amount, category, description).unwrap()
}

#[test]
fn initialize_writes_header_only() {
    let (_dir, store) = temp_store();

    assert!(store.initialize().unwrap());
    assert_eq!(
        fs::read_to_string(store.path()).unwrap(),
        "date,amount,category,description\n"
    );
    assert!(store.read_all().unwrap().is_empty());
}

#[test]
fn initialize_twice_leaves_storage_unchanged() {
    let (_dir, store) = temp_store();
    store.initialize().unwrap();
    store
        .append(&make_tx("01-01-2024", dec!(1000), Category::Income, "salary"))
        .unwrap();
    let before = fs::read_to_string(store.path()).unwrap();

    assert!(!store.initialize().unwrap());
    assert!(!store.initialize().unwrap());

    assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
}

#[test]
fn initialize_does_not_validate_existing_file() {
    let (_dir, store) = temp_store();
    fs::write(store.path(), "something else entirely\n").unwrap();

    assert!(!store.initialize().unwrap());
    assert_eq!(
        fs::read_to_string(store.path()).unwrap(),
        "something else entirely\n"
    );
}

#[test]
fn initialize_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let store = LedgerStore::new(LedgerConfig::new(dir.path().join("books/2024/ledger.csv")));

    assert!(store.initialize().unwrap());
    assert!(store.path().exists());
}

#[test]
fn append_preserves_order_and_existing_rows() {
    let (_dir, store) = temp_store();
    store.initialize().unwrap();

    let salary = make_tx("01-01-2024", dec!(1000), Category::Income, "salary");
    let groceries = make_tx("15-01-2024", dec!(200), Category::Expense, "groceries");
    let earlier = make_tx("20-12-2023", dec!(15.5), Category::Expense, "");
    for tx in [&salary, &groceries, &earlier] {
        store.append(tx).unwrap();
    }

    assert_eq!(store.read_all().unwrap(), vec![salary, groceries, earlier]);
}

#[test]
fn duplicates_are_kept() {
    let (_dir, store) = temp_store();
    store.initialize().unwrap();

    let coffee = make_tx("02-02-2024", dec!(3.2), Category::Expense, "coffee");
    store.append(&coffee).unwrap();
    store.append(&coffee).unwrap();

    assert_eq!(store.read_all().unwrap(), vec![coffee.clone(), coffee]);
}

#[test]
fn stored_row_layout() {
    let (_dir, store) = temp_store();
    store.initialize().unwrap();
    store
        .append(&make_tx("05-03-2024", dec!(42.50), Category::Expense, "rent, march"))
        .unwrap();

    assert_eq!(
        fs::read_to_string(store.path()).unwrap(),
        "date,amount,category,description\n05-03-2024,42.50,Expense,\"rent, march\"\n"
    );
}

#[test]
fn descriptions_with_special_characters_round_trip() {
    let (_dir, store) = temp_store();
    store.initialize().unwrap();

    let tricky = make_tx(
        "29-02-2024",
        dec!(1),
        Category::Income,
        "refund, \"store credit\"\nsecond line",
    );
    store.append(&tricky).unwrap();

    assert_eq!(store.read_all().unwrap(), vec![tricky]);
}

#[test]
fn reads_rows_written_with_float_amounts() {
    let (_dir, store) = temp_store();
    fs::write(
        store.path(),
        "date,amount,category,description\n01-01-2024,1000.0,Income,salary\n",
    )
    .unwrap();

    let transactions = store.read_all().unwrap();
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].amount(), dec!(1000));
}

#[test]
fn read_missing_file_fails() {
    let (_dir, store) = temp_store();

    let err = store.read_all().unwrap_err();
    assert!(matches!(err, LedgerError::StorageRead { .. }));
    assert!(err.is_read_error());
}

#[test]
fn read_malformed_date_fails() {
    let (_dir, store) = temp_store();
    fs::write(
        store.path(),
        "date,amount,category,description\n01-01-2024,5,Income,\n2024/01/02,5,Income,\n",
    )
    .unwrap();

    let err = store.read_all().unwrap_err();
    assert!(matches!(err, LedgerError::MalformedRecord { line: 3, .. }));
}

#[test]
fn read_oversized_amount_fails() {
    let (_dir, store) = temp_store();
    fs::write(
        store.path(),
        "date,amount,category,description\n\
         01-01-2024,1000000000000000,Income,\n\
         02-01-2024,50000000000000000000000000000,Income,\n",
    )
    .unwrap();

    let err = store.read_all().unwrap_err();
    assert!(matches!(
        err,
        LedgerError::MalformedRecord { line: 3, source: ValidationError::TooLarge(_), .. }
    ));
}

#[test]
fn read_short_year_fails() {
    let (_dir, store) = temp_store();
    fs::write(
        store.path(),
        "date,amount,category,description\n01-01-24,5,Income,\n",
    )
    .unwrap();

    let err = store.read_all().unwrap_err();
    assert!(matches!(
        err,
        LedgerError::MalformedRecord { line: 2, source: ValidationError::InvalidFormat, .. }
    ));
}

#[test]
fn append_without_initialize_fails() {
    let (_dir, store) = temp_store();

    let err = store
        .append(&make_tx("01-01-2024", dec!(1), Category::Income, ""))
        .unwrap_err();
    assert!(matches!(err, LedgerError::StorageWrite { .. }));
    assert!(!store.path().exists());
}
