//! Recurrence matching: which stored rules hit which day of a month.

use crate::calendar::{DayCoordinates, YearMonth};
use crate::models::{RecurrenceRule, RecurringEvent};
use std::thread;

/// Above this many (day, rule) pairs the month is split across threads.
pub const PARALLEL_THRESHOLD: usize = 8_192;

/// The rules matched by one day.
#[derive(Debug, Clone)]
pub struct DayMatches<'a> {
    pub day: DayCoordinates,
    pub events: Vec<&'a RecurringEvent>,
}

/// `rule` applies to `day`: its pattern dimension equals the day's coordinate
/// and the day lies inside `[repeat_start, repeat_end]`.
pub fn matches(day: &DayCoordinates, rule: &RecurrenceRule) -> bool {
    rule.matches(day)
}

/// Rules satisfied by a single day, in the order of `rules`.
pub fn match_day<'a>(day: &DayCoordinates, rules: &'a [RecurringEvent]) -> Vec<&'a RecurringEvent> {
    rules.iter().filter(|r| matches(day, &r.rule)).collect()
}

fn match_days<'a>(days: &[DayCoordinates], rules: &'a [RecurringEvent]) -> Vec<DayMatches<'a>> {
    days.iter()
        .map(|day| DayMatches {
            day: *day,
            events: match_day(day, rules),
        })
        .collect()
}

/// Evaluate every day of `month` against `rules`, one entry per day,
/// ascending by date.
///
/// Large rule sets are evaluated on scoped threads; the joined result is put
/// back in day order before it is returned.
pub fn match_month<'a>(month: YearMonth, rules: &'a [RecurringEvent]) -> Vec<DayMatches<'a>> {
    let days: Vec<DayCoordinates> = month.days().into_iter().map(DayCoordinates::of).collect();

    let workers = thread::available_parallelism().map_or(1, |n| n.get());
    if workers < 2 || days.len() * rules.len() < PARALLEL_THRESHOLD {
        return match_days(&days, rules);
    }

    let chunk = days.len().div_ceil(workers);
    let mut out: Vec<DayMatches<'a>> = thread::scope(|s| {
        let handles: Vec<_> = days
            .chunks(chunk)
            .map(|part| s.spawn(move || match_days(part, rules)))
            .collect();

        handles
            .into_iter()
            .flat_map(|h| match h.join() {
                Ok(part) => part,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    });

    out.sort_by_key(|m| m.day.date);
    out
}
