//! ANSI color helpers for dashboard output.

use crate::core::calculator::emotion::Trend;
use crate::models::Status;
use ansi_term::Colour;

pub fn color_for_status(status: Status) -> Colour {
    match status {
        Status::Streak => Colour::Green,
        Status::Broken => Colour::Red,
        Status::NotStarted => Colour::Fixed(244), // grey
    }
}

pub fn color_for_trend(trend: Option<Trend>) -> Colour {
    match trend {
        Some(Trend::Positive) => Colour::Green,
        Some(Trend::Negative) => Colour::Red,
        Some(Trend::Neutral) => Colour::Yellow,
        None => Colour::Fixed(244),
    }
}

pub fn paint_status(status: Status) -> String {
    color_for_status(status).paint(status.as_str()).to_string()
}

pub fn paint_trend(trend: Option<Trend>, label: &str) -> String {
    color_for_trend(trend).paint(label).to_string()
}
