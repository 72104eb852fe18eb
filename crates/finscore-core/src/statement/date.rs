use chrono::NaiveDate;

use crate::statement::types::StatementFilter;
use crate::{ScoreError, ScoreResult};

/// Rows with no usable time-of-day land on noon.
pub const DEFAULT_HOUR: u32 = 12;

pub fn build_filter(
    from: Option<&str>,
    to: Option<&str>,
    command: &str,
) -> ScoreResult<StatementFilter> {
    let parsed_from = match from {
        Some(value) => Some(parse_iso_date_strict(value, "from", command)?),
        None => None,
    };
    let parsed_to = match to {
        Some(value) => Some(parse_iso_date_strict(value, "to", command)?),
        None => None,
    };

    if let (Some(start), Some(end)) = (parsed_from, parsed_to)
        && start > end
    {
        return Err(ScoreError::invalid_argument_for_command(
            "Invalid date range: `from` must be on or before `to`.",
            Some(command),
        ));
    }

    Ok(StatementFilter {
        from: parsed_from,
        to: parsed_to,
    })
}

pub fn format_iso_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Statement dates arrive as strict ISO or the DD/MM/YYYY form common in
/// mobile-money exports. Anything else is unparseable.
pub fn parse_statement_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if looks_like_iso_date(trimmed) {
        return NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok();
    }
    if looks_like_slash_date(trimmed) {
        return NaiveDate::parse_from_str(trimmed, "%d/%m/%Y").ok();
    }
    None
}

/// Parses `HH:MM` into the hour component. Out-of-range clock values are
/// rejected rather than clamped.
pub fn parse_clock_hour(value: &str) -> Option<u32> {
    let (hour_part, minute_part) = value.trim().split_once(':')?;
    if hour_part.is_empty() || !hour_part.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    if minute_part.is_empty() || !minute_part.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    let hour = hour_part.parse::<u32>().ok()?;
    let minute = minute_part.parse::<u32>().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some(hour)
}

fn parse_iso_date_strict(value: &str, field_name: &str, command: &str) -> ScoreResult<NaiveDate> {
    if !looks_like_iso_date(value) {
        return Err(ScoreError::invalid_argument_for_command(
            &format!("`{field_name}` must use YYYY-MM-DD format with a real calendar date."),
            Some(command),
        ));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        ScoreError::invalid_argument_for_command(
            &format!("`{field_name}` must use YYYY-MM-DD format with valid calendar values."),
            Some(command),
        )
    })
}

fn looks_like_iso_date(value: &str) -> bool {
    if value.len() != 10 {
        return false;
    }
    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return false;
        }
    }
    true
}

fn looks_like_slash_date(value: &str) -> bool {
    if value.len() != 10 {
        return false;
    }
    let bytes = value.as_bytes();
    if bytes[2] != b'/' || bytes[5] != b'/' {
        return false;
    }

    for index in [0usize, 1, 3, 4, 6, 7, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::{build_filter, format_iso_date, parse_clock_hour, parse_statement_date};

    #[test]
    fn iso_and_slash_date_forms_both_parse() {
        let iso = parse_statement_date("2026-01-15");
        let slash = parse_statement_date("15/01/2026");
        assert!(iso.is_some());
        assert_eq!(iso, slash);
    }

    #[test]
    fn invalid_calendar_values_are_rejected() {
        assert!(parse_statement_date("2026-02-30").is_none());
        assert!(parse_statement_date("31/13/2026").is_none());
        assert!(parse_statement_date("Jan 15 2026").is_none());
        assert!(parse_statement_date("").is_none());
    }

    #[test]
    fn clock_hours_parse_and_reject_out_of_range_values() {
        assert_eq!(parse_clock_hour("09:15"), Some(9));
        assert_eq!(parse_clock_hour("23:59"), Some(23));
        assert_eq!(parse_clock_hour("0:05"), Some(0));
        assert_eq!(parse_clock_hour("24:00"), None);
        assert_eq!(parse_clock_hour("12:60"), None);
        assert_eq!(parse_clock_hour("noon"), None);
        assert_eq!(parse_clock_hour(""), None);
    }

    #[test]
    fn build_filter_rejects_inverted_ranges() {
        let result = build_filter(Some("2026-03-01"), Some("2026-02-01"), "score");
        assert!(result.is_err());
    }

    #[test]
    fn build_filter_accepts_open_ended_ranges() {
        let result = build_filter(Some("2026-01-01"), None, "score");
        assert!(result.is_ok());
        if let Ok(filter) = result {
            assert!(filter.from.is_some());
            assert!(filter.to.is_none());
            if let Some(from) = filter.from {
                assert_eq!(format_iso_date(&from), "2026-01-01");
            }
        }
    }
}
