use crate::store::record::is_date_shaped;
use chrono::NaiveDate;

/// Local calendar date. Only the CLI reads the clock; the core always
/// receives `today` as a parameter.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a strict `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if !is_date_shaped(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
