pub mod check_off;
pub mod habit;
pub mod habit_stats;
pub mod periodicity;

pub use check_off::CheckOff;
pub use habit::Habit;
pub use habit_stats::{HabitStats, Status};
pub use periodicity::Periodicity;
