/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Grey for cells outside the displayed month, plain otherwise.
pub fn color_for_cell(is_current: bool) -> &'static str {
    if is_current { RESET } else { GREY }
}

/// Recurring events are shown in magenta, one-off events in cyan.
pub fn color_for_event(recurring: bool) -> &'static str {
    if recurring { MAGENTA } else { CYAN }
}
