#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rhabits::models::CheckOff;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rhb() -> Command {
    cargo_bin_cmd!("rhabits")
}

/// Create a unique data dir inside the system temp dir and remove any leftovers
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rhabits", name));
    fs::remove_dir_all(&path).ok();
    path.to_string_lossy().to_string()
}

/// Run `init` in test mode (no config file written) on `data_dir`
pub fn init_data_dir(data_dir: &str) {
    rhb()
        .args(["--data-dir", data_dir, "--test", "init"])
        .assert()
        .success();
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// Check-off of `title` done `offset` days after `today` (negative = before).
pub fn check_off_at(title: &str, emotion: i64, today: NaiveDate, offset: i64) -> CheckOff {
    CheckOff::new(title, emotion, today + chrono::Duration::days(offset)).expect("valid emotion")
}
