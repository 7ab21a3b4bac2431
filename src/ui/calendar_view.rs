//! Terminal rendering of a month: the grid with per-day markers, followed by
//! the one-off and recurring event listings.

use crate::calendar::{GridLayout, build_grid};
use crate::core::MonthResolution;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_cell, color_for_event};
use crate::utils::formatting::{bold, pad_left};
use crate::utils::table::{Column, Table};
use chrono::Datelike;

const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
const CELL_WIDTH: usize = 5;
const BODY_WIDTH: usize = 48;

pub fn month_title(res: &MonthResolution) -> String {
    let name = MONTH_NAMES
        .get(res.month.month0() as usize)
        .copied()
        .unwrap_or("?");
    format!("{} {}", name, res.month.year())
}

/// The grid only: one line per row, `•` after days holding events.
pub fn render_grid(res: &MonthResolution, layout: GridLayout) -> String {
    let cells = build_grid(res.month, layout);
    let mut out = String::new();

    if layout.cols == WEEKDAY_HEADERS.len() {
        for h in WEEKDAY_HEADERS {
            out.push_str(&pad_left(h, CELL_WIDTH - 1));
            out.push(' ');
        }
        out.push('\n');
    }

    for row in cells.chunks(layout.cols) {
        for cell in row {
            let marker = if cell.is_current && res.occurrences.contains_key(&cell.day) {
                "•"
            } else {
                " "
            };
            out.push_str(&format!(
                "{}{}{}{} ",
                color_for_cell(cell.is_current),
                pad_left(&cell.day.to_string(), CELL_WIDTH - 2),
                marker,
                RESET
            ));
        }
        out.push('\n');
    }

    out
}

pub fn render_events(res: &MonthResolution) -> String {
    let mut out = String::new();

    let mut singles = Table::new(vec![
        Column::new("DAY", 4),
        Column::new("ID", 6),
        Column::new("EVENT", BODY_WIDTH),
    ]);
    for (day, events) in res.events.by_day() {
        for ev in events {
            singles.add_row(vec![day.to_string(), ev.id.to_string(), ev.body.clone()]);
        }
    }

    let mut recurring = Table::new(vec![
        Column::new("FIRST", 11),
        Column::new("ID", 6),
        Column::new("EVENT", BODY_WIDTH),
    ]);
    for ev in &res.events.recurring_events {
        recurring.add_row(vec![
            ev.date.format("%Y-%m-%d").to_string(),
            ev.id.to_string(),
            ev.body.clone(),
        ]);
    }

    out.push_str(&format!("\n{}{}\n", color_for_event(false), bold("Events")));
    if singles.is_empty() {
        out.push_str("  (none)\n");
    } else {
        out.push_str(&singles.render());
    }

    out.push_str(&format!("\n{}{}\n", color_for_event(true), bold("Recurring")));
    if recurring.is_empty() {
        out.push_str("  (none)\n");
    } else {
        out.push_str(&recurring.render());
    }

    out
}

pub fn render_month(res: &MonthResolution, layout: GridLayout) -> String {
    let mut out = header(month_title(res));
    out.push('\n');
    out.push_str(&render_grid(res, layout));
    out.push_str(&render_events(res));

    let today = crate::utils::date::today();
    if today.year() == res.month.year() && today.month0() == res.month.month0() {
        out.push_str(&format!("\nToday: {}\n", today.format("%A %d")));
    }
    out
}
