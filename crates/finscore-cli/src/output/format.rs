pub fn key_value_rows(entries: &[(&str, String)], indent: usize) -> Vec<String> {
    if entries.is_empty() {
        return Vec::new();
    }

    let label_width = entries
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0);
    let padding = " ".repeat(indent);

    entries
        .iter()
        .map(|(label, value)| format!("{padding}{label:<label_width$}  {value}"))
        .collect()
}

/// Renders a monetary value as `KES 1,234.56` with grouped thousands.
pub fn format_kes(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}KES {grouped}.{fraction:02}")
}

/// Feature values are ratios or day counts; four decimals is enough
/// precision without drowning the report in float noise.
pub fn format_feature(value: f64) -> String {
    let rendered = format!("{value:.4}");
    let trimmed = rendered.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        return "0".to_string();
    }
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::{format_feature, format_kes, key_value_rows};

    #[test]
    fn key_value_rows_align_labels() {
        let rows = key_value_rows(
            &[
                ("Rows scored:", "28".to_string()),
                ("Net flow:", "KES 1,000.00".to_string()),
            ],
            2,
        );

        assert_eq!(rows[0], "  Rows scored:  28");
        assert_eq!(rows[1], "  Net flow:     KES 1,000.00");
    }

    #[test]
    fn kes_formatting_groups_thousands() {
        assert_eq!(format_kes(0.0), "KES 0.00");
        assert_eq!(format_kes(250.0), "KES 250.00");
        assert_eq!(format_kes(35_000.0), "KES 35,000.00");
        assert_eq!(format_kes(1_861_645.5), "KES 1,861,645.50");
        assert_eq!(format_kes(-1_450.75), "-KES 1,450.75");
    }

    #[test]
    fn feature_formatting_trims_trailing_zeroes() {
        assert_eq!(format_feature(0.0), "0");
        assert_eq!(format_feature(0.5), "0.5");
        assert_eq!(format_feature(0.142857), "0.1429");
        assert_eq!(format_feature(999.0), "999");
        assert_eq!(format_feature(80941.5435), "80941.5435");
    }
}
