mod common;

use common::{check_off_at, date};
use rhabits::core::calculator::emotion::{Trend, summarize};
use rhabits::core::calculator::streak::segments;
use rhabits::core::logic::Core;
use rhabits::models::habit_stats::NOT_AVAILABLE;
use rhabits::models::{CheckOff, Habit, Periodicity, Status};
use rhabits::store::Record;

const WINDOW: usize = 5;

fn habit(title: &str, periodicity: Periodicity, since: &str) -> Habit {
    Habit::new(title, format!("{title} every period"), periodicity, date(since))
}

#[test]
fn empty_history_is_not_started() {
    let today = date("2024-03-10");
    let run = habit("Morning run", Periodicity::Daily, "2024-03-01");

    let stats = Core::compute(&run, &[], WINDOW, today);

    assert_eq!(stats.status, Status::NotStarted);
    assert_eq!((stats.streak, stats.hiatus, stats.max_streak), (0, 0, 0));
    assert_eq!(stats.average_label(), NOT_AVAILABLE);
    assert_eq!(stats.trend_label(), NOT_AVAILABLE);
    assert_eq!(stats.tenure, 9);
}

#[test]
fn yesterday_and_today_make_a_streak_of_two() {
    let today = date("2024-03-10");
    let run = habit("Morning run", Periodicity::Daily, "2024-03-01");
    let history = vec![
        check_off_at("Morning run", 3, today, -1),
        check_off_at("Morning run", 3, today, 0),
    ];

    let stats = Core::compute(&run, &history, WINDOW, today);

    assert_eq!(stats.status, Status::Streak);
    assert_eq!(stats.streak, 2);
    assert_eq!(stats.hiatus, 0);
}

#[test]
fn morning_run_four_days_in_a_row() {
    let today = date("2024-03-10");
    let run = habit("Morning run", Periodicity::Daily, "2024-03-01");
    let history: Vec<CheckOff> = [4, 3, 2, 5]
        .into_iter()
        .zip(-3..=0)
        .map(|(emotion, offset)| check_off_at("Morning run", emotion, today, offset))
        .collect();

    let stats = Core::compute(&run, &history, WINDOW, today);

    assert_eq!(stats.max_streak, 4);
    assert_eq!(stats.status, Status::Streak);
    assert_eq!(stats.streak, 4);
    assert_eq!(stats.hiatus, 0);
    assert_eq!(stats.average_emotion(), Some(3.5));
    assert_eq!(stats.trend(), Some(Trend::Positive));
    assert_eq!(stats.average_label(), "3.5");
    assert_eq!(stats.emotion.map(|e| e.slope), Some(0.2));
}

#[test]
fn evening_yoga_three_weeks_ago_is_broken() {
    let today = date("2024-03-22");
    let yoga = habit("Evening yoga", Periodicity::Weekly, "2024-02-01");
    let history = vec![check_off_at("Evening yoga", 4, today, -21)];

    let stats = Core::compute(&yoga, &history, WINDOW, today);

    assert_eq!(stats.status, Status::Broken);
    assert_eq!(stats.hiatus, 3);
    assert_eq!(stats.streak, 0);
    assert_eq!(stats.max_streak, 1);
    assert_eq!(stats.tenure, 7);
    assert_eq!(stats.average_label(), NOT_AVAILABLE);
}

#[test]
fn gap_equal_to_period_is_adjacent() {
    let today = date("2024-03-22");
    let history = vec![
        check_off_at("Yoga", 3, today, -14),
        check_off_at("Yoga", 3, today, -7),
        check_off_at("Yoga", 3, today, 0),
    ];

    assert_eq!(segments(&history, Periodicity::Weekly.period()), vec![3]);
    assert_eq!(segments(&history, Periodicity::Daily.period()), vec![1, 1, 1]);
}

#[test]
fn last_check_off_one_full_period_ago_breaks_the_streak() {
    let today = date("2024-03-10");
    let run = habit("Reading", Periodicity::Daily, "2024-03-01");
    let history = vec![
        check_off_at("Reading", 2, today, -3),
        check_off_at("Reading", 2, today, -2),
        check_off_at("Reading", 2, today, -1),
    ];

    let stats = Core::compute(&run, &history, WINDOW, today);

    assert_eq!(stats.status, Status::Broken);
    assert_eq!(stats.hiatus, 1);
    assert_eq!(stats.max_streak, 3);
}

#[test]
fn hiatus_rounds_to_nearest_period() {
    let today = date("2024-03-22");
    let yoga = habit("Yoga", Periodicity::Weekly, "2024-01-01");

    let after = |days: i64| {
        let history = vec![check_off_at("Yoga", 3, today, -days)];
        Core::compute(&yoga, &history, WINDOW, today).hiatus
    };

    assert_eq!(after(10), 1);
    assert_eq!(after(11), 2);
    assert_eq!(after(17), 2);
}

#[test]
fn max_streak_comes_from_anywhere_in_the_history() {
    let today = date("2024-03-30");
    let run = habit("Gym", Periodicity::Daily, "2024-03-01");
    let mut history: Vec<CheckOff> = (-20..=-15)
        .map(|d| check_off_at("Gym", 3, today, d))
        .collect();
    history.push(check_off_at("Gym", 3, today, -1));
    history.push(check_off_at("Gym", 3, today, 0));

    let stats = Core::compute(&run, &history, WINDOW, today);

    assert_eq!(stats.max_streak, 6);
    assert_eq!(stats.streak, 2);
    assert!(stats.max_streak >= stats.streak);
}

#[test]
fn unsorted_history_is_analysed_in_date_order() {
    let today = date("2024-03-10");
    let run = habit("Gym", Periodicity::Daily, "2024-03-01");
    let history = vec![
        check_off_at("Gym", 3, today, 0),
        check_off_at("Gym", 3, today, -2),
        check_off_at("Gym", 3, today, -1),
    ];

    let stats = Core::compute(&run, &history, WINDOW, today);

    assert_eq!(stats.status, Status::Streak);
    assert_eq!(stats.streak, 3);
}

#[test]
fn emotion_window_uses_latest_events_only() {
    let today = date("2024-03-10");
    let run = habit("Gym", Periodicity::Daily, "2024-03-01");
    let history: Vec<CheckOff> = [0, 0, 0, 5, 4, 3]
        .into_iter()
        .zip(-5..=0)
        .map(|(emotion, offset)| check_off_at("Gym", emotion, today, offset))
        .collect();

    let stats = Core::compute(&run, &history, 3, today);

    assert_eq!(stats.average_emotion(), Some(4.0));
    assert_eq!(stats.trend(), Some(Trend::Negative));
}

#[test]
fn flat_emotions_are_neutral() {
    let today = date("2024-03-10");
    let window = vec![
        check_off_at("Gym", 2, today, -1),
        check_off_at("Gym", 2, today, 0),
    ];

    let summary = summarize(&window).unwrap();
    assert_eq!(summary.average, 2.0);
    assert_eq!(summary.slope, 0.0);
    assert_eq!(summary.trend, Trend::Neutral);
    assert!(summarize(&window[..1]).is_none());
}

#[test]
fn records_round_trip_through_their_encoding() {
    let habit = Habit::new("Reading", "Read twenty pages", Periodicity::Weekly, date("2024-02-29"))
        .with_description("Read thirty pages", date("2024-03-10"))
        .archived();
    let check_off = check_off_at("2024-01-01", 0, date("2024-03-10"), 0);

    let value: serde_json::Value = serde_json::from_str(&habit.encode().unwrap()).unwrap();
    assert_eq!(Habit::decode(value).unwrap(), habit);

    let value: serde_json::Value = serde_json::from_str(&check_off.encode().unwrap()).unwrap();
    assert_eq!(CheckOff::decode(value).unwrap(), check_off);
}

#[test]
fn sorting_habits_is_idempotent() {
    let today = date("2024-03-10");
    let mut habits = vec![
        habit("Yoga", Periodicity::Weekly, "2024-03-01"),
        habit("Reading", Periodicity::Daily, "2024-03-01"),
        habit("Call mom", Periodicity::Weekly, "2024-03-01"),
        habit("Gym", Periodicity::Daily, "2024-03-01"),
    ];
    habits.sort();
    let once = habits.clone();
    habits.sort();

    assert_eq!(habits, once);
    let titles: Vec<&str> = once.iter().map(|h| h.title.as_str()).collect();
    assert_eq!(titles, vec!["Gym", "Reading", "Call mom", "Yoga"]);
    assert!(once.iter().all(|h| h.tenure(today) >= 0));
}
