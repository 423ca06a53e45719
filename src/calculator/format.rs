//! Result formatting for the display and the clipboard.

use crate::config::DisplayConfig;

/// Format a number for display.
///
/// Whole numbers render without a fractional part; anything else is rounded
/// to `config.precision` places with trailing zeros dropped.
pub fn format_display(value: f64, config: &DisplayConfig) -> String {
    if let Some(text) = format_non_finite(value) {
        return text;
    }

    let plain = format_plain(value, config.precision);
    if config.thousands_separator {
        group_thousands(&plain)
    } else {
        plain
    }
}

/// Format a number for clipboard (raw number, no separators).
pub fn format_clipboard(value: f64, config: &DisplayConfig) -> String {
    format_non_finite(value).unwrap_or_else(|| format_plain(value, config.precision))
}

fn format_non_finite(value: f64) -> Option<String> {
    if value.is_nan() {
        Some("Not a Number".to_string())
    } else if value.is_infinite() {
        let text = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        Some(text.to_string())
    } else {
        None
    }
}

fn format_plain(value: f64, precision: usize) -> String {
    let text = if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        let formatted = format!("{:.*}", precision, value);
        if formatted.contains('.') {
            formatted
                .trim_end_matches('0')
                .trim_end_matches('.')
                .to_string()
        } else {
            formatted
        }
    };

    // Rounding can leave "-0" behind.
    if text == "-0" { "0".to_string() } else { text }
}

/// Insert `,` every three digits of the integer part.
fn group_thousands(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(dot) => unsigned.split_at(dot),
        None => (unsigned, ""),
    };

    let mut grouped = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let int_part: String = grouped.chars().rev().collect();
    format!("{}{}{}", sign, int_part, frac_part)
}
