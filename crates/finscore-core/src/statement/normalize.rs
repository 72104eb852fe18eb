use crate::ScoreResult;
use crate::error::ScoreError;
use crate::statement::date::{DEFAULT_HOUR, parse_clock_hour, parse_statement_date};
use crate::statement::parse::ParsedRow;
use crate::statement::types::{Category, StatementRecord};

/// Priority-ordered keyword table for category inference. Matching is
/// case-insensitive containment; the first matching entry wins.
pub(crate) const CATEGORY_KEYWORDS: [(Category, &[&str]); 5] = [
    (Category::Airtime, &["airtime"]),
    (Category::Send, &["send", "sent", "transfer"]),
    (Category::Withdraw, &["withdraw", "cash"]),
    (Category::Payment, &["pay", "payment", "till"]),
    (Category::Income, &["salary", "income", "deposit"]),
];

pub(crate) fn normalize_rows(rows: &[ParsedRow]) -> ScoreResult<Vec<StatementRecord>> {
    let mut records = Vec::with_capacity(rows.len());
    for raw in rows {
        let date_value = raw.date.as_deref().map(str::trim).unwrap_or("");
        let Some(date) = parse_statement_date(date_value) else {
            return Err(ScoreError::statement_date_invalid(raw.row, date_value));
        };

        let hour = raw
            .time
            .as_deref()
            .and_then(parse_clock_hour)
            .unwrap_or(DEFAULT_HOUR);

        records.push(StatementRecord {
            row: raw.row,
            date,
            hour,
            amount: raw.amount.as_deref().and_then(parse_money),
            balance: raw.balance.as_deref().and_then(parse_money),
            category: resolve_category(raw.category.as_deref(), raw.description.as_deref()),
        });
    }
    Ok(records)
}

/// Strips the fixed cleanup class (the `KSh` currency marker characters,
/// thousands separators, and whitespace), then parses the remainder.
/// Values that still fail numeric parsing become missing, not errors.
pub fn parse_money(value: &str) -> Option<f64> {
    let cleaned = value
        .chars()
        .filter(|character| {
            !matches!(character, 'K' | 'S' | 'h' | ',') && !character.is_whitespace()
        })
        .collect::<String>();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

pub fn resolve_category(label: Option<&str>, description: Option<&str>) -> Category {
    if let Some(value) = label
        && !value.trim().is_empty()
    {
        return Category::from_label(value);
    }

    let Some(text) = description else {
        return Category::Unknown;
    };
    let lowered = text.to_lowercase();
    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            return category;
        }
    }
    Category::Unknown
}
