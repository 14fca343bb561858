mod common;

use common::{check_off_at, date};
use rhabits::core::{CheckOffLedger, HabitCatalog, TextLimits};
use rhabits::errors::AppError;
use rhabits::models::Periodicity;
use rhabits::store::JsonStore;
use tempfile::TempDir;

fn setup(dir: &TempDir, today: &str) -> (HabitCatalog, CheckOffLedger) {
    let catalog = HabitCatalog::new(
        dir.path().join("habits.json"),
        date(today),
        TextLimits::default(),
    );
    let ledger = CheckOffLedger::new(dir.path().join("check_offs.json"));
    (catalog, ledger)
}

#[test]
fn add_sorts_by_periodicity_then_title() {
    let dir = TempDir::new().unwrap();
    let (catalog, _) = setup(&dir, "2024-03-01");

    catalog.add("Yoga", "Stretch before bed", Periodicity::Weekly).unwrap();
    catalog.add("Reading", "Read twenty pages", Periodicity::Daily).unwrap();
    catalog.add("Meditate", "Ten minutes of silence", Periodicity::Daily).unwrap();

    let titles: Vec<String> = catalog.all().unwrap().into_iter().map(|h| h.title).collect();
    assert_eq!(titles, vec!["Meditate", "Reading", "Yoga"]);

    let habit = catalog.find("Reading").unwrap().unwrap();
    assert_eq!(habit.created, date("2024-03-01"));
    assert_eq!(habit.descr_update, date("2024-03-01"));
    assert!(habit.active);
}

#[test]
fn add_rejects_duplicates_across_archived_habits() {
    let dir = TempDir::new().unwrap();
    let (catalog, _) = setup(&dir, "2024-03-01");

    let habit = catalog.add("Reading", "Read twenty pages", Periodicity::Daily).unwrap();
    catalog.archive(&habit).unwrap();

    assert!(matches!(
        catalog.add("Reading", "Something else", Periodicity::Daily),
        Err(AppError::DuplicateTitle(_))
    ));
    assert!(matches!(
        catalog.add("Books", "Read twenty pages", Periodicity::Weekly),
        Err(AppError::DuplicateDescription(_))
    ));
    assert!(catalog.has_duplicate(Some("Reading"), None).unwrap());
    assert!(!catalog.has_duplicate(Some("Books"), Some("Other")).unwrap());
    assert_eq!(catalog.all().unwrap().len(), 1);
}

#[test]
fn add_enforces_length_limits() {
    let dir = TempDir::new().unwrap();
    let (catalog, _) = setup(&dir, "2024-03-01");

    assert!(matches!(
        catalog.add("", "Read twenty pages", Periodicity::Daily),
        Err(AppError::InvalidLength { field: "Title", .. })
    ));
    assert!(matches!(
        catalog.add(&"x".repeat(21), "Read twenty pages", Periodicity::Daily),
        Err(AppError::InvalidLength { field: "Title", len: 21, .. })
    ));
    assert!(matches!(
        catalog.add("Reading", &"y".repeat(46), Periodicity::Daily),
        Err(AppError::InvalidLength { field: "Description", .. })
    ));

    // limits count characters, not bytes
    catalog.add(&"é".repeat(20), &"ü".repeat(45), Periodicity::Daily).unwrap();
}

#[test]
fn edit_description_updates_date_and_keeps_title() {
    let dir = TempDir::new().unwrap();
    let (catalog, _) = setup(&dir, "2024-03-01");
    let habit = catalog.add("Reading", "Read twenty pages", Periodicity::Daily).unwrap();

    let (later, _) = setup(&dir, "2024-03-10");
    let updated = later.edit_description(&habit, "Read thirty pages").unwrap();

    assert_eq!(updated.title, "Reading");
    assert_eq!(updated.created, date("2024-03-01"));
    assert_eq!(updated.descr_update, date("2024-03-10"));
    assert_eq!(later.all().unwrap(), vec![updated]);
}

#[test]
fn edit_description_rejects_used_description() {
    let dir = TempDir::new().unwrap();
    let (catalog, _) = setup(&dir, "2024-03-01");
    let habit = catalog.add("Reading", "Read twenty pages", Periodicity::Daily).unwrap();
    catalog.add("Gym", "Lift some weights", Periodicity::Daily).unwrap();

    assert!(matches!(
        catalog.edit_description(&habit, "Lift some weights"),
        Err(AppError::DuplicateDescription(_))
    ));
}

#[test]
fn archive_keeps_habit_and_history() {
    let dir = TempDir::new().unwrap();
    let (catalog, ledger) = setup(&dir, "2024-03-01");
    let habit = catalog.add("Reading", "Read twenty pages", Periodicity::Daily).unwrap();
    ledger.report(&habit, 4, date("2024-03-01")).unwrap();

    catalog.archive(&habit).unwrap();

    assert!(catalog.list(true).unwrap().is_empty());
    let archived = catalog.list(false).unwrap();
    assert_eq!(archived.len(), 1);
    assert!(!archived[0].active);
    assert_eq!(ledger.history("Reading", None).unwrap().len(), 1);
}

#[test]
fn delete_cascades_only_to_its_own_check_offs() {
    let dir = TempDir::new().unwrap();
    let (catalog, ledger) = setup(&dir, "2024-03-05");
    let reading = catalog.add("Reading", "Read twenty pages", Periodicity::Daily).unwrap();
    catalog.add("Gym", "Lift some weights", Periodicity::Daily).unwrap();

    let today = date("2024-03-05");
    let store = JsonStore::new(dir.path().join("check_offs.json"));
    store
        .save(vec![
            check_off_at("Reading", 3, today, -3),
            check_off_at("Gym", 2, today, -2),
            check_off_at("Reading", 4, today, -1),
        ])
        .unwrap();

    let purged = catalog.delete(&reading, &ledger).unwrap();

    assert_eq!(purged, 2);
    assert!(catalog.find("Reading").unwrap().is_none());
    assert!(ledger.history("Reading", None).unwrap().is_empty());
    assert_eq!(ledger.history("Gym", None).unwrap(), vec![check_off_at("Gym", 2, today, -2)]);
}

#[test]
fn resolve_falls_back_to_case_insensitive_match() {
    let dir = TempDir::new().unwrap();
    let (catalog, _) = setup(&dir, "2024-03-01");
    catalog.add("Reading", "Read twenty pages", Periodicity::Daily).unwrap();

    assert_eq!(catalog.resolve("reading").unwrap().title, "Reading");
    assert!(matches!(
        catalog.resolve("Writing"),
        Err(AppError::HabitNotFound(_))
    ));
}
