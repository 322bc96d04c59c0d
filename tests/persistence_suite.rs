mod common;

use std::fs;
use std::path::Path;

use assert_fs::prelude::*;
use chrono::NaiveDate;
use regex::Regex;

use fintrack_core::domain::EntryKind;
use fintrack_core::store::JsonFileStore;
use fintrack_core::Tracker;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn open_tracker(base: &Path) -> Tracker {
    let store = JsonFileStore::new(base).expect("json store");
    Tracker::open(Box::new(store)).expect("open tracker")
}

#[test]
fn a_fresh_directory_seeds_the_default_ledger() {
    let home = common::test_home();
    let tracker = open_tracker(&home);
    let ledger = tracker.ledger();
    assert_eq!(ledger.categories().len(), 9);
    assert_eq!(ledger.categories()[0].name, "Salary");
    assert_eq!(ledger.next_category_id(), 10);
    assert_eq!(ledger.next_transaction_id(), 1);
    assert_eq!(ledger.currency().as_str(), "USD");
    assert!(
        !home.join("transactions.json").exists(),
        "nothing is persisted before the first mutation"
    );
}

#[test]
fn mutations_survive_a_reopen() {
    let home = common::test_home();
    {
        let mut tracker = open_tracker(&home);
        tracker
            .add_transaction(EntryKind::Income, 1200.0, date(2024, 1, 5), 1, "pay")
            .expect("add transaction");
        tracker
            .add_category("Books", EntryKind::Expense)
            .expect("add category");
        tracker.set_currency("EUR").expect("set currency");
    }

    let tracker = open_tracker(&home);
    let ledger = tracker.ledger();
    assert_eq!(ledger.transaction_count(), 1);
    assert_eq!(ledger.transactions()[0].notes, "pay");
    assert_eq!(ledger.categories().len(), 10);
    assert_eq!(ledger.currency().as_str(), "EUR");
    assert_eq!(ledger.next_transaction_id(), 2);
    assert_eq!(ledger.next_category_id(), 11);
}

#[test]
fn slot_files_use_the_wire_shapes() {
    let home = common::test_home();
    let mut tracker = open_tracker(&home);
    tracker
        .add_transaction(EntryKind::Expense, 42.5, date(2024, 3, 1), 5, "lunch")
        .expect("add transaction");
    tracker.set_currency("EUR").expect("set currency");

    let raw = fs::read_to_string(home.join("transactions.json")).expect("read transactions slot");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("parse transactions slot");
    assert_eq!(value[0]["type"], "expense");
    assert_eq!(value[0]["categoryId"], 5);
    assert_eq!(value[0]["date"], "2024-03-01");
    assert_eq!(value[0]["amount"], 42.5);

    let raw = fs::read_to_string(home.join("currency.json")).expect("read currency slot");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("parse currency slot");
    assert_eq!(value, serde_json::json!("EUR"));
}

#[test]
fn slot_files_appear_without_leftover_temp_files() {
    let temp = assert_fs::TempDir::new().expect("temp dir");
    let mut tracker = open_tracker(temp.path());
    tracker
        .add_transaction(EntryKind::Expense, 5.0, date(2024, 1, 1), 5, "")
        .expect("add transaction");

    temp.child("transactions.json")
        .assert(predicates::path::exists());
    temp.child("transactions.json.tmp")
        .assert(predicates::path::missing());
    temp.child("categories.json")
        .assert(predicates::path::missing());
    temp.close().expect("cleanup");
}

#[test]
fn a_failed_save_leaves_the_previous_slot_intact() {
    let home = common::test_home();
    let mut tracker = open_tracker(&home);
    tracker
        .add_transaction(EntryKind::Expense, 10.0, date(2024, 1, 1), 5, "first")
        .expect("add transaction");
    let path = home.join("transactions.json");
    let original = fs::read_to_string(&path).expect("read original file");

    // A directory squatting on the temp path makes the next write fail.
    fs::create_dir_all(home.join("transactions.json.tmp")).expect("block temp path");

    let result = tracker.add_transaction(EntryKind::Expense, 20.0, date(2024, 1, 2), 5, "second");
    assert!(result.is_err(), "save through a blocked temp path must fail");

    let current = fs::read_to_string(&path).expect("read after failure");
    assert_eq!(
        current, original,
        "a failed save must not corrupt the slot file"
    );

    // The in-memory change stands; only persistence failed.
    assert_eq!(tracker.ledger().transaction_count(), 2);
}

#[test]
fn monthly_keys_are_zero_padded_and_sortable() {
    let home = common::test_home();
    let mut tracker = open_tracker(&home);
    for month in [2u32, 10, 12] {
        tracker
            .add_transaction(EntryKind::Expense, 10.0, date(2024, month, 15), 5, "")
            .expect("add transaction");
    }

    let series = tracker.ledger().monthly_series();
    let keys: Vec<String> = series.iter().map(|month| month.key()).collect();
    let key_format = Regex::new(r"^\d{4}-\d{2}$").expect("regex");
    assert!(keys.iter().all(|key| key_format.is_match(key)));
    assert_eq!(keys, vec!["2024-02", "2024-10", "2024-12"]);

    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(
        sorted, keys,
        "lexicographic order must match chronological order"
    );
}
