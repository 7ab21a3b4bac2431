//! Month grid layout: the fixed rows×cols block of day cells shown for a month,
//! including the tail of the previous month and the head of the next one.

use super::month::YearMonth;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

pub const ROWS: usize = 5;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    pub rows: usize,
    pub cols: usize,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            rows: ROWS,
            cols: COLS,
        }
    }
}

impl GridLayout {
    pub fn new(rows: usize, cols: usize) -> AppResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(AppError::Config(format!(
                "Grid layout must have at least one row and one column (got {}x{})",
                rows, cols
            )));
        }
        Ok(Self { rows, cols })
    }

    pub fn cells(&self) -> usize {
        self.rows * self.cols
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayInfo {
    pub day: u32,
    pub is_current: bool,
}

/// Build the grid for `month`, earliest to latest, left to right, top to bottom.
///
/// The grid holds `layout.cells()` cells, padded with a plain `1, 2, 3, ...`
/// sequence for the next month. A month that does not fit (a 31-day month
/// starting on a Friday or Saturday in a 5×7 layout) keeps all of its days and
/// gets no padding, leaving a partial last row.
pub fn build_grid(month: YearMonth, layout: GridLayout) -> Vec<DayInfo> {
    let leading = month.first_weekday();
    let prev_days = month.previous().days_in_month();
    let total_days = month.days_in_month();

    let mut cells = Vec::with_capacity(layout.cells().max(37));

    // previous month
    for day in (prev_days - leading + 1)..=prev_days {
        cells.push(DayInfo {
            day,
            is_current: false,
        });
    }

    // current month
    for day in 1..=total_days {
        cells.push(DayInfo {
            day,
            is_current: true,
        });
    }

    // next month
    let mut next = 1;
    while cells.len() < layout.cells() {
        cells.push(DayInfo {
            day: next,
            is_current: false,
        });
        next += 1;
    }

    cells
}

/// Number of rows used by a grid built with `layout`, counting a partial
/// last row.
pub fn row_count(cells: &[DayInfo], layout: GridLayout) -> usize {
    cells.len().div_ceil(layout.cols)
}
