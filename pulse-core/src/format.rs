//! Display formatting for metric values.
//!
//! Matches the dashboard's compact-number conventions: values at or above a
//! thousand collapse to one decimal with a K/M suffix, smaller values are
//! thousands-grouped.

/// Compact number: `1.2M`, `8.4K`, or a grouped integer below 1000.
pub fn compact_number(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        group_thousands(value.round() as i64)
    }
}

/// Currency: `$` followed by the compact form.
pub fn currency(value: f64) -> String {
    format!("${}", compact_number(value))
}

/// Percentage with two decimals: `3.24%`.
pub fn percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Signed change with one decimal: `+12.5%` / `-2.1%`.
pub fn signed_percent(value: f64) -> String {
    if value >= 0.0 {
        format!("+{:.1}%", value)
    } else {
        format!("{:.1}%", value)
    }
}

/// Duration as minutes and seconds: `4m 32s`.
pub fn duration_minutes(total_secs: u32) -> String {
    format!("{}m {}s", total_secs / 60, total_secs % 60)
}

/// Integer with `,` thousands separators.
pub fn group_thousands(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if negative {
        format!("-{}", out)
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_number_cutoffs() {
        assert_eq!(compact_number(999.0), "999");
        assert_eq!(compact_number(1000.0), "1.0K");
        assert_eq!(compact_number(8429.0), "8.4K");
        assert_eq!(compact_number(999_999.0), "1000.0K");
        assert_eq!(compact_number(1_000_000.0), "1.0M");
        assert_eq!(compact_number(1_234_567.0), "1.2M");
    }

    #[test]
    fn currency_prefixes_dollar() {
        assert_eq!(currency(124_562.0), "$124.6K");
        assert_eq!(currency(89.0), "$89");
    }

    #[test]
    fn percent_formats() {
        assert_eq!(percent(3.24), "3.24%");
        assert_eq!(signed_percent(12.5), "+12.5%");
        assert_eq!(signed_percent(-2.1), "-2.1%");
        assert_eq!(signed_percent(0.0), "+0.0%");
    }

    #[test]
    fn duration_splits_minutes_and_seconds() {
        assert_eq!(duration_minutes(272), "4m 32s");
        assert_eq!(duration_minutes(60), "1m 0s");
        assert_eq!(duration_minutes(59), "0m 59s");
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(12_547), "12,547");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(-8_429), "-8,429");
    }
}
