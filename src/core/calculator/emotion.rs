//! Average emotion and its linear trend over the latest check-offs.

use crate::models::CheckOff;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Positive,
    Neutral,
    Negative,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Positive => "Positive",
            Trend::Neutral => "Neutral",
            Trend::Negative => "Negative",
        }
    }

    /// Sign of a slope already rounded to one decimal.
    pub fn from_slope(slope: f64) -> Self {
        if slope > 0.0 {
            Trend::Positive
        } else if slope < 0.0 {
            Trend::Negative
        } else {
            Trend::Neutral
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmotionSummary {
    /// Mean emotion, rounded to one decimal.
    pub average: f64,
    /// Least-squares slope of emotion against event index, rounded to one decimal.
    pub slope: f64,
    pub trend: Trend,
}

pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Summary of `window`; `None` with fewer than two check-offs.
pub fn summarize(window: &[CheckOff]) -> Option<EmotionSummary> {
    if window.len() < 2 {
        return None;
    }

    let values: Vec<f64> = window.iter().map(|c| f64::from(c.emotion)).collect();
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let slope = round1(linear_slope(&values));

    Some(EmotionSummary {
        average: round1(mean),
        slope,
        trend: Trend::from_slope(slope),
    })
}

/// First-degree least-squares fit of `values[i]` against `i`.
fn linear_slope(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let x_mean = (n - 1.0) / 2.0;
    let y_mean = values.iter().sum::<f64>() / n;

    let (num, den) = values
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(num, den), (i, y)| {
            let dx = i as f64 - x_mean;
            (num + dx * (y - y_mean), den + dx * dx)
        });

    if den == 0.0 { 0.0 } else { num / den }
}
