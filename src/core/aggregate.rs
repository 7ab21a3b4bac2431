//! Month aggregation: one-off events of the month merged with the recurring
//! events active on any of its days.

use crate::calendar::YearMonth;
use crate::core::recurrence::{DayMatches, match_month};
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::{MonthEvents, RecurringEvent, ResolvedEvent, SingleEvent};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// Read side of the event store, as needed to resolve a month.
pub trait EventSource {
    /// One-off events dated in `[start, end]`.
    fn single_events_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<SingleEvent>>;

    /// Recurring rules that may be active somewhere in `[start, end]`.
    fn recurring_rules_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<RecurringEvent>>;
}

impl EventSource for DbPool {
    fn single_events_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<SingleEvent>> {
        queries::single_events_between(&self.conn, start, end)
    }

    fn recurring_rules_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<RecurringEvent>> {
        queries::recurring_rules_between(&self.conn, start, end)
    }
}

/// A resolved month plus, for each day of it, the ids of every event
/// (one-off or recurring) that falls on that day.
#[derive(Debug, Clone)]
pub struct MonthResolution {
    pub month: YearMonth,
    pub events: MonthEvents,
    pub occurrences: BTreeMap<u32, Vec<i64>>,
}

/// Keep each recurring event once, tagged with the first day it matched.
///
/// Days are put in ascending order first, so the outcome does not depend on
/// the order in which per-day results were produced.
pub fn dedup_first_match(mut days: Vec<DayMatches<'_>>) -> Vec<ResolvedEvent> {
    days.sort_by_key(|m| m.day.date);

    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for day in &days {
        for ev in &day.events {
            if seen.insert(ev.event.id) {
                out.push(ResolvedEvent::recurring(ev, day.day.date));
            }
        }
    }
    out
}

fn fail(month: YearMonth, err: AppError) -> AppError {
    AppError::Aggregation {
        month: month.to_string(),
        reason: err.to_string(),
    }
}

pub fn resolve_month_detailed<S>(source: &S, month: YearMonth) -> AppResult<MonthResolution>
where
    S: EventSource + ?Sized,
{
    let first = month.first_day();
    let last = month.last_day();

    let singles = source
        .single_events_between(first, last)
        .map_err(|e| fail(month, e))?;
    let rules = source
        .recurring_rules_between(first, last)
        .map_err(|e| fail(month, e))?;

    let per_day = match_month(month, &rules);

    let mut occurrences: BTreeMap<u32, Vec<i64>> = BTreeMap::new();
    let events: Vec<ResolvedEvent> = singles
        .iter()
        // the store already filters by range; guard against a looser source
        .filter(|ev| ev.date >= first && ev.date <= last)
        .map(ResolvedEvent::one_off)
        .collect();

    for ev in &events {
        occurrences.entry(ev.day).or_default().push(ev.id);
    }
    for day in &per_day {
        if !day.events.is_empty() {
            occurrences
                .entry(day.day.day)
                .or_default()
                .extend(day.events.iter().map(|e| e.event.id));
        }
    }

    let recurring_events = dedup_first_match(per_day);

    debug!(
        %month,
        one_off = events.len(),
        recurring = recurring_events.len(),
        rules = rules.len(),
        "month resolved"
    );

    Ok(MonthResolution {
        month,
        events: MonthEvents {
            events,
            recurring_events,
        },
        occurrences,
    })
}

/// Resolve the `{ events, recurringEvents }` view of a month.
pub fn resolve_month<S>(source: &S, month: YearMonth) -> AppResult<MonthEvents>
where
    S: EventSource + ?Sized,
{
    Ok(resolve_month_detailed(source, month)?.events)
}
