use super::pattern::RepeatPattern;
use crate::calendar::DayCoordinates;
use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub id: i64,             // ⇔ events.id
    pub body: String,        // ⇔ events.body
    pub created_at: String,  // ⇔ events.created_at (RFC 3339)
}

/// Meta row of a one-off event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SingleEventMeta {
    pub event_id: i64,
    pub date: NaiveDate,
}

/// When and how a recurring event repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecurrenceRule {
    /// Inclusive lower bound.
    pub repeat_start: NaiveDate,
    /// Inclusive upper bound, open-ended when `None`.
    pub repeat_end: Option<NaiveDate>,
    pub pattern: RepeatPattern,
}

impl RecurrenceRule {
    pub fn new(
        repeat_start: NaiveDate,
        repeat_end: Option<NaiveDate>,
        pattern: RepeatPattern,
    ) -> AppResult<Self> {
        if let Some(end) = repeat_end
            && end < repeat_start
        {
            return Err(AppError::validation(format!(
                "endDate {} is before startDate {}",
                end, repeat_start
            )));
        }

        Ok(Self {
            repeat_start,
            repeat_end,
            pattern,
        })
    }

    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.repeat_start <= date && self.repeat_end.is_none_or(|end| end >= date)
    }

    pub fn matches(&self, day: &DayCoordinates) -> bool {
        self.pattern.matches(day) && self.is_active_on(day.date)
    }
}

/// Meta row of a recurring event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecurringEventMeta {
    pub event_id: i64,
    #[serde(flatten)]
    pub rule: RecurrenceRule,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EventMeta {
    Single(SingleEventMeta),
    Recurring(RecurringEventMeta),
}

/// Validated input for creating an event together with its meta row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub body: String,
    pub schedule: Schedule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    Once(NaiveDate),
    Recurring(RecurrenceRule),
}

impl NewEvent {
    pub fn once(body: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            body: body.into(),
            schedule: Schedule::Once(date),
        }
    }

    pub fn recurring(body: impl Into<String>, rule: RecurrenceRule) -> Self {
        Self {
            body: body.into(),
            schedule: Schedule::Recurring(rule),
        }
    }

    pub fn is_recurring(&self) -> bool {
        matches!(self.schedule, Schedule::Recurring(_))
    }
}

/// An event as returned after creation or lookup: the event row plus its meta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredEvent {
    #[serde(flatten)]
    pub event: Event,
    pub meta: EventMeta,
}

/// A one-off event joined with its date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleEvent {
    pub event: Event,
    pub date: NaiveDate,
}

/// A recurring event joined with its rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurringEvent {
    pub event: Event,
    pub rule: RecurrenceRule,
}

pub fn now_rfc3339() -> String {
    Local::now().to_rfc3339()
}
