mod common;

use common::{check_off_at, date};
use rhabits::core::CheckOffLedger;
use rhabits::errors::AppError;
use rhabits::models::{CheckOff, Habit, Periodicity};
use rhabits::store::JsonStore;
use std::fs;
use tempfile::TempDir;

fn habit(title: &str, periodicity: Periodicity) -> Habit {
    Habit::new(title, format!("{title} description"), periodicity, date("2024-02-01"))
}

fn seeded(dir: &TempDir, records: Vec<CheckOff>) -> CheckOffLedger {
    let path = dir.path().join("check_offs.json");
    JsonStore::new(&path).save(records).unwrap();
    CheckOffLedger::new(path)
}

#[test]
fn history_filters_by_title_and_keeps_trailing_records() {
    let dir = TempDir::new().unwrap();
    let today = date("2024-03-10");
    let ledger = seeded(
        &dir,
        (1..=6)
            .map(|i| check_off_at(if i % 2 == 0 { "Gym" } else { "Reading" }, i % 5, today, -i))
            .collect(),
    );

    let all = ledger.history("Gym", None).unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.iter().all(|c| c.habit_title == "Gym"));

    let last_two = ledger.history("Gym", Some(2)).unwrap();
    assert_eq!(last_two, all[1..].to_vec());

    assert_eq!(ledger.history("Gym", Some(10)).unwrap(), all);
    assert!(ledger.history("Writing", None).unwrap().is_empty());
}

#[test]
fn report_appends_a_check_off() {
    let dir = TempDir::new().unwrap();
    let ledger = CheckOffLedger::new(dir.path().join("check_offs.json"));
    let reading = habit("Reading", Periodicity::Daily);

    ledger.report(&reading, 4, date("2024-03-01")).unwrap();
    ledger.report(&reading, 5, date("2024-03-02")).unwrap();

    let history = ledger.history("Reading", None).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[1].emotion, 5);
    assert_eq!(ledger.last("Reading").unwrap(), Some(history[1].clone()));
}

#[test]
fn second_check_off_on_the_same_day_leaves_ledger_unchanged() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("check_offs.json");
    let ledger = CheckOffLedger::new(&path);
    let yoga = habit("Yoga", Periodicity::Weekly);

    ledger.report(&yoga, 3, date("2024-03-01")).unwrap();
    let before = fs::read(&path).unwrap();

    let err = ledger.report(&yoga, 5, date("2024-03-01")).unwrap_err();
    assert!(matches!(err, AppError::AlreadyCheckedOff(_, d) if d == date("2024-03-01")));
    assert_eq!(fs::read(&path).unwrap(), before);

    // weekly habits can still be checked off on the next calendar day
    ledger.report(&yoga, 5, date("2024-03-02")).unwrap();
}

#[test]
fn emotion_outside_range_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("check_offs.json");
    let ledger = CheckOffLedger::new(&path);
    let reading = habit("Reading", Periodicity::Daily);

    for emotion in [-1, 6, 42] {
        assert!(matches!(
            ledger.report(&reading, emotion, date("2024-03-01")),
            Err(AppError::InvalidEmotion(e)) if e == emotion
        ));
    }
    assert!(!path.exists());

    ledger.report(&reading, 0, date("2024-03-01")).unwrap();
    ledger.report(&reading, 5, date("2024-03-02")).unwrap();
}

#[test]
fn archived_habit_cannot_be_checked_off() {
    let dir = TempDir::new().unwrap();
    let ledger = CheckOffLedger::new(dir.path().join("check_offs.json"));
    let archived = habit("Reading", Periodicity::Daily).archived();

    assert!(matches!(
        ledger.report(&archived, 3, date("2024-03-01")),
        Err(AppError::HabitArchived(_))
    ));
}

#[test]
fn delete_removes_exactly_one_of_identical_records() {
    let dir = TempDir::new().unwrap();
    let today = date("2024-03-10");
    let twin = check_off_at("Reading", 3, today, -2);
    let ledger = seeded(
        &dir,
        vec![
            check_off_at("Reading", 1, today, -4),
            twin.clone(),
            check_off_at("Gym", 2, today, -2),
            twin.clone(),
        ],
    );
    let reading = habit("Reading", Periodicity::Daily);

    // window of 2: entries shown are the two twins
    let removed = ledger.delete(&reading, 2, Some(2)).unwrap();

    assert_eq!(removed, twin);
    assert_eq!(
        ledger.history("Reading", None).unwrap(),
        vec![check_off_at("Reading", 1, today, -4), twin]
    );
    assert_eq!(ledger.history("Gym", None).unwrap().len(), 1);
}

#[test]
fn delete_index_is_relative_to_the_shown_window() {
    let dir = TempDir::new().unwrap();
    let today = date("2024-03-10");
    let ledger = seeded(
        &dir,
        (0..5).map(|i| check_off_at("Reading", i, today, i - 5)).collect(),
    );
    let reading = habit("Reading", Periodicity::Daily);

    // shown: emotions 2,3,4 -> index 1 is emotion 2
    let removed = ledger.delete(&reading, 1, Some(3)).unwrap();
    assert_eq!(removed.emotion, 2);

    let left: Vec<u8> = ledger
        .history("Reading", None)
        .unwrap()
        .iter()
        .map(|c| c.emotion)
        .collect();
    assert_eq!(left, vec![0, 1, 3, 4]);
}

#[test]
fn delete_rejects_out_of_range_selection() {
    let dir = TempDir::new().unwrap();
    let today = date("2024-03-10");
    let ledger = seeded(&dir, vec![check_off_at("Reading", 3, today, -1)]);
    let reading = habit("Reading", Periodicity::Daily);

    for index in [0, 2] {
        assert!(matches!(
            ledger.delete(&reading, index, Some(5)),
            Err(AppError::InvalidSelection { max: 1, .. })
        ));
    }
    assert_eq!(ledger.history("Reading", None).unwrap().len(), 1);
}

#[test]
fn purge_counts_removed_records() {
    let dir = TempDir::new().unwrap();
    let today = date("2024-03-10");
    let ledger = seeded(
        &dir,
        vec![
            check_off_at("Reading", 1, today, -3),
            check_off_at("Gym", 1, today, -2),
            check_off_at("Reading", 1, today, -1),
        ],
    );

    assert_eq!(ledger.purge("Reading").unwrap(), 2);
    assert_eq!(ledger.purge("Reading").unwrap(), 0);
    assert_eq!(ledger.all().unwrap().count(), 1);
}
