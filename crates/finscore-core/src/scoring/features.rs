use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::statement::types::{Category, StatementRecord};

/// Stands in for "maximally irregular" when too few income rows exist to
/// measure a real gap statistic.
pub const INCOME_REGULARITY_SENTINEL: f64 = 999.0;

pub const LOW_BALANCE_THRESHOLD: f64 = 500.0;

/// The seven behavioral indicators, computed once per analysis and
/// immutable afterwards. Field names are the feature-map keys.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureSet {
    pub avg_daily_balance: f64,
    pub income_regularity: f64,
    pub night_ratio: f64,
    pub airtime_ratio: f64,
    pub rounded_ratio: f64,
    pub txns_per_day: f64,
    pub low_balance_ratio: f64,
}

impl FeatureSet {
    pub fn neutral() -> Self {
        Self {
            avg_daily_balance: 0.0,
            income_regularity: INCOME_REGULARITY_SENTINEL,
            night_ratio: 0.0,
            airtime_ratio: 0.0,
            rounded_ratio: 0.0,
            txns_per_day: 0.0,
            low_balance_ratio: 0.0,
        }
    }
}

pub fn extract_features(records: &[StatementRecord]) -> FeatureSet {
    if records.is_empty() {
        return FeatureSet::neutral();
    }

    let row_count = records.len() as f64;
    let ratio_of = |matched: usize| (matched as f64) / row_count;

    FeatureSet {
        avg_daily_balance: average_daily_balance(records),
        income_regularity: income_regularity(records),
        night_ratio: ratio_of(records.iter().filter(|record| record.is_night()).count()),
        airtime_ratio: ratio_of(
            records
                .iter()
                .filter(|record| record.category == Category::Airtime)
                .count(),
        ),
        rounded_ratio: ratio_of(records.iter().filter(|record| record.is_rounded()).count()),
        txns_per_day: transactions_per_day(records),
        low_balance_ratio: ratio_of(
            records
                .iter()
                .filter(|record| {
                    record
                        .balance
                        .is_some_and(|balance| balance < LOW_BALANCE_THRESHOLD)
                })
                .count(),
        ),
    }
}

/// Mean over calendar days of the last balance observed that day, in row
/// order. Days without any balance value do not dilute the mean.
fn average_daily_balance(records: &[StatementRecord]) -> f64 {
    let mut last_by_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for record in records {
        if let Some(balance) = record.balance {
            last_by_day.insert(record.date, balance);
        }
    }

    if last_by_day.is_empty() {
        return 0.0;
    }
    last_by_day.values().sum::<f64>() / (last_by_day.len() as f64)
}

/// Sample standard deviation of the day gaps between consecutive income
/// transactions, sorted by date. Fewer than two income rows yields the
/// sentinel, as does a single gap, where the sample statistic is undefined.
fn income_regularity(records: &[StatementRecord]) -> f64 {
    let mut income_dates = records
        .iter()
        .filter(|record| record.category == Category::Income)
        .map(|record| record.date)
        .collect::<Vec<NaiveDate>>();
    if income_dates.len() < 2 {
        return INCOME_REGULARITY_SENTINEL;
    }

    income_dates.sort_unstable();
    let gaps = income_dates
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).num_days() as f64)
        .collect::<Vec<f64>>();

    sample_std_dev(&gaps).unwrap_or(INCOME_REGULARITY_SENTINEL)
}

fn transactions_per_day(records: &[StatementRecord]) -> f64 {
    let earliest = records.iter().map(|record| record.date).min();
    let latest = records.iter().map(|record| record.date).max();
    let (Some(earliest), Some(latest)) = (earliest, latest) else {
        return 0.0;
    };

    let span_days = (latest - earliest).num_days().max(1);
    (records.len() as f64) / (span_days as f64)
}

fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }

    let mean = values.iter().sum::<f64>() / (values.len() as f64);
    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / ((values.len() as f64) - 1.0);
    Some(variance.sqrt())
}
