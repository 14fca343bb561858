//! Formatting utilities used for CLI outputs.

use ansi_term::Style;

pub fn bold(s: &str) -> String {
    Style::new().bold().paint(s).to_string()
}

/// First character upper case, the rest lower case ("morning RUN" → "Morning run").
pub fn capitalize(s: &str) -> String {
    let s = s.trim();
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Emotion level as a small bar, e.g. `3 ■■■□□`.
pub fn emotion_bar(emotion: u8) -> String {
    let filled = usize::from(emotion.min(5));
    format!("{} {}{}", emotion, "■".repeat(filled), "□".repeat(5 - filled))
}

/// Periods elapsed with the unit, e.g. `3 d` or `2 w`.
pub fn periods(n: i64, daily: bool) -> String {
    format!("{} {}", n, if daily { "d" } else { "w" })
}
