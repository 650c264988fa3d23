/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Wrap `value` in `color` when `enabled`, otherwise return it untouched.
pub fn paint(value: &str, color: &str, enabled: bool) -> String {
    if enabled && !value.is_empty() {
        format!("{color}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Colors are off when NO_COLOR is set (https://no-color.org).
pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}
