//! Formatting utilities used for CLI and export outputs.

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Decimal hours → "08h 45m" (or "+08h 45m" / "-01h 10m" with `want_sign`).
pub fn hours2readable(hours: f64, want_sign: bool) -> String {
    let mins = (hours * 60.0).round() as i64;
    let abs_m = mins.abs();

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 {
        "-"
    } else {
        ""
    };

    format!("{}{:02}h {:02}m", sign, abs_m / 60, abs_m % 60)
}

/// Decimal hours with two decimals, as stored.
pub fn fmt_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readable_hours() {
        assert_eq!(hours2readable(8.75, false), "08h 45m");
        assert_eq!(hours2readable(2.5, true), "+02h 30m");
        assert_eq!(hours2readable(-1.25, true), "-01h 15m");
        assert_eq!(hours2readable(0.0, true), "00h 00m");
    }
}
