use chrono::{Datelike, NaiveDate};
use rcalendar::calendar::grid::row_count;
use rcalendar::calendar::month::month0_from_api;
use rcalendar::calendar::week::iso_week_utc;
use rcalendar::calendar::{DayCoordinates, DayInfo, GridLayout, YearMonth, build_grid, iso_week};

mod common;
use common::date;

fn days(cells: &[DayInfo]) -> Vec<u32> {
    cells.iter().map(|c| c.day).collect()
}

fn month(y: i32, m: u32) -> YearMonth {
    YearMonth::from_api(y, m).expect("valid month")
}

#[test]
fn grid_for_month_starting_on_sunday_has_no_leading_days() {
    // June 2025 starts on a Sunday
    let cells = build_grid(month(2025, 6), GridLayout::default());

    assert_eq!(cells.len(), 35);
    assert!(cells[..30].iter().all(|c| c.is_current));
    assert_eq!(days(&cells[..3]), vec![1, 2, 3]);
    assert_eq!(days(&cells[30..]), vec![1, 2, 3, 4, 5]);
    assert!(cells[30..].iter().all(|c| !c.is_current));
}

#[test]
fn grid_leading_cells_are_the_tail_of_the_previous_month() {
    // January 2025 starts on a Wednesday
    let cells = build_grid(month(2025, 1), GridLayout::default());

    assert_eq!(cells.len(), 35);
    assert_eq!(days(&cells[..3]), vec![29, 30, 31]);
    assert!(cells[..3].iter().all(|c| !c.is_current));
    assert_eq!(cells[3], DayInfo { day: 1, is_current: true });
    assert_eq!(cells[33], DayInfo { day: 31, is_current: true });
    assert_eq!(cells[34], DayInfo { day: 1, is_current: false });
}

#[test]
fn grid_leading_cells_follow_leap_february() {
    // March 2024 starts on a Friday; February 2024 has 29 days
    let cells = build_grid(month(2024, 3), GridLayout::default());

    assert_eq!(days(&cells[..5]), vec![25, 26, 27, 28, 29]);
    assert_eq!(cells[5], DayInfo { day: 1, is_current: true });
}

#[test]
fn grid_leading_cells_after_december_wrap_the_year() {
    // January 2026 starts on a Thursday
    let cells = build_grid(month(2026, 1), GridLayout::default());
    assert_eq!(days(&cells[..4]), vec![28, 29, 30, 31]);
}

#[test]
fn grid_overflowing_month_keeps_every_day_without_padding() {
    // March 2025: Saturday start, 31 days, 37 cells needed
    let layout = GridLayout::default();
    let cells = build_grid(month(2025, 3), layout);

    assert_eq!(cells.len(), 37);
    assert_eq!(row_count(&cells, layout), 6);
    assert_eq!(cells.iter().filter(|c| c.is_current).count(), 31);
    assert_eq!(cells[36], DayInfo { day: 31, is_current: true });
}

#[test]
fn grid_thirty_day_month_starting_saturday_just_overflows() {
    // November 2025: Saturday start, 30 days, 36 cells
    let cells = build_grid(month(2025, 11), GridLayout::default());

    assert_eq!(cells.len(), 36);
    assert!(cells.last().is_some_and(|c| c.is_current && c.day == 30));
}

#[test]
fn grid_february_fitting_exactly_four_rows_is_padded_to_five() {
    // February 2026: Sunday start, 28 days
    let cells = build_grid(month(2026, 2), GridLayout::default());

    assert_eq!(cells.len(), 35);
    assert_eq!(days(&cells[28..]), vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn grid_respects_a_custom_layout() {
    let layout = GridLayout::new(6, 7).expect("layout");
    for m in 1..=12 {
        let cells = build_grid(month(2025, m), layout);
        assert_eq!(cells.len(), 42, "month {}", m);
    }
}

#[test]
fn grid_holds_every_day_of_every_month() {
    let layout = GridLayout::default();
    for y in [1999, 2000, 2024, 2025, 2100] {
        for m in 1..=12 {
            let ym = month(y, m);
            let cells = build_grid(ym, layout);
            let current: Vec<u32> = cells.iter().filter(|c| c.is_current).map(|c| c.day).collect();

            assert_eq!(current, (1..=ym.days_in_month()).collect::<Vec<_>>());
            // never padded past the layout; only overflowing months exceed it
            let needed = ym.first_weekday() as usize + ym.days_in_month() as usize;
            assert_eq!(cells.len(), needed.max(layout.cells()));
        }
    }
}

#[test]
fn grid_layout_rejects_empty_dimensions() {
    assert!(GridLayout::new(0, 7).is_err());
    assert!(GridLayout::new(5, 0).is_err());
}

#[test]
fn grid_cells_serialize_in_camel_case() {
    let json = serde_json::to_value(DayInfo { day: 4, is_current: true }).unwrap();
    assert_eq!(json, serde_json::json!({ "day": 4, "isCurrent": true }));
}

#[test]
fn iso_week_known_values() {
    assert_eq!(iso_week(date(2024, 1, 1)), 1);
    assert_eq!(iso_week(date(2020, 12, 31)), 53);
    assert_eq!(iso_week(date(2021, 1, 3)), 53);
    assert_eq!(iso_week(date(2019, 12, 30)), 1);
    assert_eq!(iso_week(date(2025, 6, 15)), 24);
}

#[test]
fn iso_week_agrees_with_chrono_for_three_decades() {
    let mut d = date(2000, 1, 1);
    let end = date(2030, 12, 31);
    while d <= end {
        assert_eq!(iso_week(d), d.iso_week().week(), "{}", d);
        d = d.succ_opt().unwrap();
    }
}

#[test]
fn iso_week_of_an_instant_uses_its_utc_date() {
    let instant = chrono::DateTime::parse_from_rfc3339("2021-01-03T23:30:00-05:00")
        .unwrap()
        .with_timezone(&chrono::Utc);
    // 2021-01-04 in UTC, a Monday in week 1
    assert_eq!(iso_week_utc(instant), 1);
}

#[test]
fn day_coordinates_are_zero_based_for_month_and_weekday() {
    let c = DayCoordinates::of(date(2025, 6, 15));
    assert_eq!(c.year, 2025);
    assert_eq!(c.month0, 5);
    assert_eq!(c.day, 15);
    assert_eq!(c.weekday, 0);
    assert_eq!(c.iso_week, 24);
}

#[test]
fn year_month_converts_api_months_once() {
    let m = YearMonth::from_api(2025, 6).unwrap();
    assert_eq!(m.month0(), 5);
    assert_eq!(m.api_month(), 6);
    assert_eq!(m.to_string(), "2025-06");
    assert_eq!(m.first_of_next_month(), date(2025, 7, 1));
    assert_eq!(m.last_day(), date(2025, 6, 30));

    let dec = YearMonth::from_api(2025, 12).unwrap();
    assert_eq!(dec.first_of_next_month(), date(2026, 1, 1));
    assert_eq!(dec.next(), YearMonth::from_api(2026, 1).unwrap());
    assert_eq!(YearMonth::from_api(2026, 1).unwrap().previous(), dec);
}

#[test]
fn api_months_convert_to_zero_based_with_range_check() {
    assert_eq!(month0_from_api(1).unwrap(), 0);
    assert_eq!(month0_from_api(12).unwrap(), 11);

    for bad in [0, 13, -1, i64::MIN, i64::MAX] {
        let err = month0_from_api(bad).unwrap_err();
        assert!(err.to_string().contains("Month must be between 1 and 12"), "{bad}");
    }
}

#[test]
fn year_month_rejects_bad_input() {
    assert!(YearMonth::from_api(2025, 0).is_err());
    assert!(YearMonth::from_api(2025, 13).is_err());
    assert!(YearMonth::from_api(0, 1).is_err());
    assert!(YearMonth::from_api(10000, 1).is_err());

    let err = YearMonth::parse_path("abc", "6").unwrap_err();
    assert!(err.is_client_error());
    assert!(YearMonth::parse_period("2025/06").is_err());
    assert_eq!(YearMonth::parse_period("2025-06").unwrap(), month(2025, 6));
}

#[test]
fn year_month_days_cover_the_month() {
    let feb = month(2024, 2);
    let all = feb.days();
    assert_eq!(all.len(), 29);
    assert_eq!(all.first(), Some(&NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
    assert_eq!(all.last(), Some(&NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
}
