pub mod add;
pub mod aggregate;
pub mod del;
pub mod edit;
pub mod log;
pub mod recurrence;
pub mod validate;

pub use aggregate::{EventSource, MonthResolution, resolve_month, resolve_month_detailed};
