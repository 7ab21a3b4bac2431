use rcalendar::calendar::{DayCoordinates, YearMonth};
use rcalendar::core::recurrence::{PARALLEL_THRESHOLD, match_day, match_month, matches};
use rcalendar::models::{PatternColumns, RecurrenceRule, RepeatPattern};

mod common;
use common::{date, recurring};

fn june_2025() -> YearMonth {
    YearMonth::from_api(2025, 6).unwrap()
}

#[test]
fn weekday_rule_matches_every_monday_of_the_month() {
    let rules = vec![recurring(
        1,
        "Standup",
        date(2025, 1, 1),
        None,
        RepeatPattern::Weekday(1),
    )];

    let hits: Vec<u32> = match_month(june_2025(), &rules)
        .into_iter()
        .filter(|d| !d.events.is_empty())
        .map(|d| d.day.day)
        .collect();

    assert_eq!(hits, vec![2, 9, 16, 23, 30]);
}

#[test]
fn match_month_returns_one_entry_per_day_in_order() {
    let per_day = match_month(june_2025(), &[]);
    assert_eq!(per_day.len(), 30);
    assert!(per_day.windows(2).all(|w| w[0].day.date < w[1].day.date));
    assert!(per_day.iter().all(|d| d.events.is_empty()));
}

#[test]
fn rule_is_inactive_outside_its_range() {
    let rule = RecurrenceRule::new(
        date(2025, 6, 10),
        Some(date(2025, 6, 20)),
        RepeatPattern::DayOfMonth(5),
    )
    .unwrap();

    // right pattern, before the start
    assert!(!matches(&DayCoordinates::of(date(2025, 6, 5)), &rule));
    // right pattern, after the end
    assert!(!matches(&DayCoordinates::of(date(2025, 7, 5)), &rule));

    let bounded = RecurrenceRule::new(
        date(2025, 6, 10),
        Some(date(2025, 6, 20)),
        RepeatPattern::Month(5),
    )
    .unwrap();
    assert!(matches(&DayCoordinates::of(date(2025, 6, 10)), &bounded));
    assert!(matches(&DayCoordinates::of(date(2025, 6, 20)), &bounded));
    assert!(!matches(&DayCoordinates::of(date(2025, 6, 21)), &bounded));
}

#[test]
fn each_dimension_matches_its_own_coordinate() {
    let day = DayCoordinates::of(date(2024, 12, 30)); // Monday of ISO week 1 (2025)
    let start = date(2000, 1, 1);
    let rule = |p| RecurrenceRule::new(start, None, p).unwrap();

    assert!(matches(&day, &rule(RepeatPattern::Year(2024))));
    assert!(matches(&day, &rule(RepeatPattern::Month(11))));
    assert!(matches(&day, &rule(RepeatPattern::DayOfMonth(30))));
    assert!(matches(&day, &rule(RepeatPattern::IsoWeek(1))));
    assert!(matches(&day, &rule(RepeatPattern::Weekday(1))));

    assert!(!matches(&day, &rule(RepeatPattern::Year(2025))));
    assert!(!matches(&day, &rule(RepeatPattern::Month(0))));
    assert!(!matches(&day, &rule(RepeatPattern::IsoWeek(53))));
    assert!(!matches(&day, &rule(RepeatPattern::Weekday(0))));
}

#[test]
fn day_31_never_matches_a_thirty_day_month() {
    let rules = vec![recurring(
        1,
        "Month end",
        date(2025, 1, 1),
        None,
        RepeatPattern::DayOfMonth(31),
    )];
    assert!(match_month(june_2025(), &rules).iter().all(|d| d.events.is_empty()));
}

#[test]
fn match_day_keeps_rule_order() {
    let rules = vec![
        recurring(3, "c", date(2025, 1, 1), None, RepeatPattern::Weekday(0)),
        recurring(1, "a", date(2025, 1, 1), None, RepeatPattern::Month(5)),
        recurring(2, "b", date(2025, 1, 1), None, RepeatPattern::Weekday(2)),
    ];

    let hits = match_day(&DayCoordinates::of(date(2025, 6, 15)), &rules);
    let ids: Vec<i64> = hits.iter().map(|r| r.event.id).collect();
    assert_eq!(ids, vec![3, 1]);
}

#[test]
fn large_rule_sets_give_the_same_result_as_small_ones() {
    let rules: Vec<_> = (0..(PARALLEL_THRESHOLD as i64 / 30 + 50))
        .map(|i| {
            recurring(
                i,
                "bulk",
                date(2025, 1, 1),
                None,
                RepeatPattern::Weekday((i % 7) as u32),
            )
        })
        .collect();

    let per_day = match_month(june_2025(), &rules);
    assert_eq!(per_day.len(), 30);
    assert!(per_day.windows(2).all(|w| w[0].day.date < w[1].day.date));

    for d in &per_day {
        let expected: Vec<i64> = rules
            .iter()
            .filter(|r| r.rule.matches(&d.day))
            .map(|r| r.event.id)
            .collect();
        let got: Vec<i64> = d.events.iter().map(|r| r.event.id).collect();
        assert_eq!(got, expected, "{}", d.day.date);
    }
}

#[test]
fn pattern_columns_must_hold_exactly_one_value() {
    let none = PatternColumns::default();
    let err = RepeatPattern::from_columns(&none).unwrap_err();
    assert!(err.to_string().contains("At least one repeat pattern key"));

    let two = PatternColumns {
        month: Some(2),
        weekday: Some(3),
        ..Default::default()
    };
    let err = RepeatPattern::from_columns(&two).unwrap_err();
    assert!(err.to_string().contains("Only one repeat pattern key is allowed"));
    assert!(err.to_string().contains("month, weekday"));

    let one = PatternColumns {
        week: Some(12),
        ..Default::default()
    };
    assert_eq!(RepeatPattern::from_columns(&one).unwrap(), RepeatPattern::IsoWeek(12));
    assert_eq!(RepeatPattern::IsoWeek(12).to_columns(), one);
}

#[test]
fn pattern_values_are_range_checked() {
    assert!(RepeatPattern::from_key("month", 12).is_err());
    assert!(RepeatPattern::from_key("month", -1).is_err());
    assert!(RepeatPattern::from_key("weekday", 7).is_err());
    assert!(RepeatPattern::from_key("day", 0).is_err());
    assert!(RepeatPattern::from_key("day", 32).is_err());
    assert!(RepeatPattern::from_key("week", 54).is_err());
    assert!(RepeatPattern::from_key("year", 0).is_err());
    assert!(RepeatPattern::from_key("hour", 1).is_err());

    assert_eq!(RepeatPattern::from_key("month", 0).unwrap(), RepeatPattern::Month(0));
    assert_eq!(RepeatPattern::from_key("weekday", 6).unwrap(), RepeatPattern::Weekday(6));
}

#[test]
fn each_pattern_stores_exactly_its_own_column() {
    let cases = [
        (RepeatPattern::Year(2025), "year", 2025),
        (RepeatPattern::Month(11), "month", 11),
        (RepeatPattern::DayOfMonth(31), "day", 31),
        (RepeatPattern::IsoWeek(53), "week", 53),
        (RepeatPattern::Weekday(0), "weekday", 0),
    ];

    for (pattern, key, value) in cases {
        let cols = pattern.to_columns();
        assert_eq!(cols.set_keys(), vec![key]);
        assert_eq!(RepeatPattern::from_key(key, value).unwrap(), pattern);
        assert_eq!(RepeatPattern::from_columns(&cols).unwrap(), pattern);
    }
}

#[test]
fn rule_end_before_start_is_rejected() {
    let err = RecurrenceRule::new(date(2025, 6, 2), Some(date(2025, 6, 1)), RepeatPattern::Weekday(1))
        .unwrap_err();
    assert!(err.is_client_error());
}

#[test]
fn pattern_descriptions_are_readable() {
    assert_eq!(RepeatPattern::Weekday(3).describe(), "every Wednesday");
    assert_eq!(RepeatPattern::Month(0).describe(), "every day of January");
    assert_eq!(RepeatPattern::DayOfMonth(15).describe(), "day 15 of every month");
}
