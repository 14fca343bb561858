pub mod calculator;
pub mod catalog;
pub mod config;
pub mod ledger;
pub mod log;
pub mod logic;

pub use catalog::{HabitCatalog, TextLimits};
pub use ledger::CheckOffLedger;
