/// ANSI color helper utilities for terminal output.
use crate::models::screen::Screen;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Screen colour:
/// public screens → cyan
/// gated screens  → green
pub fn color_for_screen(screen: Screen) -> &'static str {
    if screen.is_public() { CYAN } else { GREEN }
}

/// Weekly hours colour: zero is greyed out, above `warn_at` is yellow.
pub fn color_for_hours(value: f64, warn_at: f64) -> &'static str {
    if value <= 0.0 {
        GREY
    } else if value > warn_at {
        YELLOW
    } else {
        RESET
    }
}

pub fn colorize_screen(screen: Screen) -> String {
    format!("{}{}{}", color_for_screen(screen), screen, RESET)
}
