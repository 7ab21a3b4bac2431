//! View-level shapes returned for a month: never persisted.

use super::event::{Event, RecurringEvent, SingleEvent};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

/// An event merged with whichever meta applies, for one month view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEvent {
    pub id: i64,
    pub body: String,
    /// Day of month of `date`.
    pub day: u32,
    pub date: NaiveDate,
    pub created_at: String,
    pub recurring: bool,
}

impl ResolvedEvent {
    fn from_event(event: &Event, date: NaiveDate, recurring: bool) -> Self {
        Self {
            id: event.id,
            body: event.body.clone(),
            day: date.day(),
            date,
            created_at: event.created_at.clone(),
            recurring,
        }
    }

    pub fn one_off(ev: &SingleEvent) -> Self {
        Self::from_event(&ev.event, ev.date, false)
    }

    /// `date` is the first day of the month the rule matched.
    pub fn recurring(ev: &RecurringEvent, date: NaiveDate) -> Self {
        Self::from_event(&ev.event, date, true)
    }
}

/// Response of a month request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MonthEvents {
    pub events: Vec<ResolvedEvent>,
    #[serde(rename = "recurringEvents")]
    pub recurring_events: Vec<ResolvedEvent>,
}

impl MonthEvents {
    /// One-off events grouped by day of month, each day sorted by id.
    pub fn by_day(&self) -> BTreeMap<u32, Vec<&ResolvedEvent>> {
        let mut map: BTreeMap<u32, Vec<&ResolvedEvent>> = BTreeMap::new();
        for ev in &self.events {
            map.entry(ev.day).or_default().push(ev);
        }
        for day in map.values_mut() {
            day.sort_by_key(|e| e.id);
        }
        map
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.recurring_events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len() + self.recurring_events.len()
    }
}
