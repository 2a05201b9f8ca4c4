//! Terminal presentation helpers: ANSI palette, card banners, timestamp
//! formatting. Everything here formats; nothing here touches the store.

use chrono::{DateTime, Local, Utc};
use terminal_size::{terminal_size, Width};

// ANSI color codes
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const RED: &str = "\x1b[31m";
pub const GRAY: &str = "\x1b[90m";

const DEFAULT_TERMINAL_WIDTH: usize = 80;
const MIN_BANNER_WIDTH: usize = 20;
const MAX_BANNER_WIDTH: usize = 80;

fn banner_width() -> usize {
    terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
        .clamp(MIN_BANNER_WIDTH, MAX_BANNER_WIDTH)
}

/// Banner line: `━━━ TITLE ━━━`, centered, clamped to terminal width.
pub fn banner(title: &str) -> String {
    let width = banner_width();
    let titled = format!(" {} ", title);
    let len = titled.chars().count();
    let remaining = width.saturating_sub(len);
    let left = remaining / 2;
    let right = remaining - left;

    format!(
        "{CYAN}{BOLD}{}{}{}{RESET}",
        "━".repeat(left),
        titled,
        "━".repeat(right)
    )
}

/// One card: banner title, dim subtitle, body.
pub fn card(title: &str, subtitle: Option<&str>, body: &str) -> String {
    let mut out = String::new();
    out.push_str(&banner(title));
    out.push('\n');
    if let Some(subtitle) = subtitle {
        out.push_str(&format!("{DIM}{}{RESET}\n", subtitle));
    }
    if !body.is_empty() {
        out.push('\n');
        out.push_str(body);
        if !body.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}

/// Inline tag: `[ text ]`.
pub fn pill(text: &str) -> String {
    format!("{GRAY}[{RESET} {} {GRAY}]{RESET}", text)
}

/// Human timestamp for display. Storage stays ISO 8601; this is the only
/// place the format diverges.
pub fn human_time(at: &DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%b %d, %Y %H:%M").to_string()
}

pub fn print_error(message: &str) {
    eprintln!("{RED}{BOLD}Error:{RESET} {}", message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_contains_title_and_rules() {
        let line = banner("HOME");
        assert!(line.contains(" HOME "));
        assert!(line.contains("━"));
    }

    #[test]
    fn card_includes_subtitle_and_body() {
        let rendered = card("Continue", Some("Where you left off."), "body line");
        assert!(rendered.contains("Continue"));
        assert!(rendered.contains("Where you left off."));
        assert!(rendered.contains("body line"));
        assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn card_without_body_has_no_trailing_blank() {
        let rendered = card("Reset", Some("Complete."), "");
        assert!(rendered.contains("Reset"));
        assert!(!rendered.contains("\n\n\n"));
    }
}
