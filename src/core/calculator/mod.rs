pub mod emotion;
pub mod streak;
