pub mod event;
pub mod pattern;
pub mod request;
pub mod resolved;

pub use event::{
    Event, EventMeta, NewEvent, RecurrenceRule, RecurringEvent, RecurringEventMeta, Schedule,
    SingleEvent, SingleEventMeta, StoredEvent,
};
pub use pattern::{PatternColumns, RepeatPattern};
pub use resolved::{MonthEvents, ResolvedEvent};
