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

//! Benchmarks for ledger storage and range queries.
//!
//! Run with: cargo bench
//!
//! Benchmarks include:
//! - Appending single records
//! - Reading the whole ledger at several sizes
//! - Range queries over a year of daily records

use chrono::{Days, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use finance_tracker_rs::{Category, LedgerConfig, LedgerStore, QueryEngine, Transaction};
use rust_decimal::Decimal;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn make_tx(i: u64) -> Transaction {
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Days::new(i % 366);
    let category = if i % 3 == 0 {
        Category::Income
    } else {
        Category::Expense
    };
    Transaction::new(date, Decimal::new(1 + (i as i64 % 10_000), 2), category, "bench, row").unwrap()
}

fn seeded_store(count: u64) -> (TempDir, LedgerStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = LedgerStore::new(LedgerConfig::new(dir.path().join("ledger.csv")));
    store.initialize().unwrap();
    for i in 0..count {
        store.append(&make_tx(i)).unwrap();
    }
    (dir, store)
}

// =============================================================================
// Storage Benchmarks
// =============================================================================

fn bench_append(c: &mut Criterion) {
    let (_dir, store) = seeded_store(0);
    let mut i = 0u64;
    c.bench_function("append", |b| {
        b.iter(|| {
            store.append(black_box(&make_tx(i))).unwrap();
            i += 1;
        })
    });
}

fn bench_read_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_all");

    for count in [100u64, 1_000, 10_000] {
        let (_dir, store) = seeded_store(count);
        group.throughput(Throughput::Elements(count));
        group.bench_with_input(BenchmarkId::from_parameter(count), &store, |b, store| {
            b.iter(|| black_box(store.read_all().unwrap()))
        });
    }
    group.finish();
}

// =============================================================================
// Query Benchmarks
// =============================================================================

fn bench_range_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_query");
    let (_dir, store) = seeded_store(10_000);
    let engine = QueryEngine::new(&store);

    for (name, start, end) in [
        ("month", "01-01-2024", "31-01-2024"),
        ("year", "01-01-2024", "31-12-2024"),
        ("reversed", "31-12-2024", "01-01-2024"),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| black_box(engine.query(black_box(start), black_box(end)).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_append, bench_read_all, bench_range_query);
criterion_main!(benches);
