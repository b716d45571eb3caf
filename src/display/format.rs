//! Formatting helpers shared by tables, the summary panel and reports

use crate::analytics::StressLevel;
use crate::models::Money;

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Wrap text in an ANSI color when `enabled`
pub fn paint(text: &str, code: &str, enabled: bool) -> String {
    if enabled {
        format!("{}{}{}", code, text, RESET)
    } else {
        text.to_string()
    }
}

pub fn bold(text: &str, enabled: bool) -> String {
    paint(text, BOLD, enabled)
}

/// Red when negative, green otherwise
pub fn format_money_colored(amount: Money, currency: &str, color: bool) -> String {
    let text = amount.format_with_symbol(currency);
    if amount.is_negative() {
        paint(&text, RED, color)
    } else {
        paint(&text, GREEN, color)
    }
}

pub fn format_stress(level: StressLevel, color: bool) -> String {
    let code = match level {
        StressLevel::Low => GREEN,
        StressLevel::Medium => YELLOW,
        StressLevel::High => RED,
    };
    paint(&level.to_string(), code, color)
}

pub fn warning(text: &str, color: bool) -> String {
    paint(text, YELLOW, color)
}

/// A day count with one decimal, or `∞` / `-∞`
pub fn format_days(days: f64) -> String {
    if days.is_nan() {
        "n/a".to_string()
    } else if days == f64::INFINITY {
        "∞".to_string()
    } else if days == f64::NEG_INFINITY {
        "-∞".to_string()
    } else {
        format!("{:.1}", days)
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Horizontal bar scaled against `max_value`
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Truncate to `max_len` characters with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}
