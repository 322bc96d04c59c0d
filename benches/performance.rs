use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use tempfile::tempdir;

use fintrack_core::domain::EntryKind;
use fintrack_core::export;
use fintrack_core::ledger::{Ledger, TransactionFilter};
use fintrack_core::store::{JsonFileStore, Slot, StorageBackend};
use fintrack_core::Tracker;

fn build_sample_ledger(txn_count: usize) -> Ledger {
    let mut ledger = Ledger::new();
    let start_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    for idx in 0..txn_count {
        let date = start_date + Duration::days((idx % 365) as i64);
        let (kind, category_id) = if idx % 4 == 0 {
            (EntryKind::Income, 1 + (idx % 4) as u32)
        } else {
            (EntryKind::Expense, 5 + (idx % 5) as u32)
        };
        ledger
            .add_transaction(kind, 50.0 + (idx % 100) as f64, date, category_id, "entry")
            .expect("add transaction");
    }

    ledger
}

fn bench_slot_io(c: &mut Criterion) {
    let ledger = build_sample_ledger(black_box(10_000));
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path()).expect("json store");
    let transactions = serde_json::to_value(ledger.transactions()).expect("serialize");

    c.bench_function("slot_save_10k", |b| {
        b.iter(|| {
            store
                .save(Slot::Transactions, &transactions)
                .expect("save slot");
        })
    });

    store.save(Slot::Transactions, &transactions).expect("seed");

    c.bench_function("tracker_open_10k", |b| {
        b.iter_batched(
            || Box::new(store.clone()) as Box<dyn StorageBackend>,
            |storage| {
                let tracker = Tracker::open(storage).expect("open tracker");
                black_box(tracker);
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_ledger_queries(c: &mut Criterion) {
    let ledger = build_sample_ledger(black_box(10_000));

    c.bench_function("summary_10k", |b| {
        b.iter(|| {
            let summary = ledger.summary();
            black_box(summary);
        })
    });

    c.bench_function("monthly_series_10k", |b| {
        b.iter(|| {
            let series = ledger.monthly_series();
            black_box(series);
        })
    });

    let filter = TransactionFilter {
        kind: Some(EntryKind::Expense),
        category_id: Some(5),
        from: NaiveDate::from_ymd_opt(2024, 3, 1),
        to: NaiveDate::from_ymd_opt(2024, 9, 30),
    };
    c.bench_function("filtered_list_10k", |b| {
        b.iter(|| {
            let matches = ledger.filter(&filter);
            black_box(matches);
        })
    });

    c.bench_function("csv_export_10k", |b| {
        b.iter(|| {
            let mut sink = Vec::new();
            export::write_csv(
                ledger.transactions(),
                ledger.categories(),
                ledger.currency(),
                &mut sink,
            )
            .expect("export");
            black_box(sink);
        })
    });
}

criterion_group!(benches, bench_slot_io, bench_ledger_queries);
criterion_main!(benches);
