//! Pure calendar arithmetic: month values, per-day coordinates, ISO weeks and
//! the month grid layout. Nothing in here touches the database.

pub mod day;
pub mod grid;
pub mod month;
pub mod week;

pub use day::DayCoordinates;
pub use grid::{DayInfo, GridLayout, build_grid};
pub use month::YearMonth;
pub use week::iso_week;
