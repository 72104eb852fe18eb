use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct StatementFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Airtime,
    Send,
    Withdraw,
    Payment,
    Income,
    Unknown,
}

impl Category {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Airtime => "Airtime",
            Self::Send => "Send",
            Self::Withdraw => "Withdraw",
            Self::Payment => "Payment",
            Self::Income => "Income",
            Self::Unknown => "Unknown",
        }
    }

    pub fn from_label(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "airtime" => Self::Airtime,
            "send" => Self::Send,
            "withdraw" => Self::Withdraw,
            "payment" => Self::Payment,
            "income" => Self::Income,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatementRecord {
    pub row: i64,
    pub date: NaiveDate,
    pub hour: u32,
    pub amount: Option<f64>,
    pub balance: Option<f64>,
    pub category: Category,
}

impl StatementRecord {
    /// Night window: 22:00-23:59 and 00:00-05:59.
    pub fn is_night(&self) -> bool {
        matches!(self.hour, 22 | 23) || self.hour <= 5
    }

    /// An amount of exactly 0 counts as rounded (0 mod 100 == 0); missing
    /// amounts never do.
    pub fn is_rounded(&self) -> bool {
        match self.amount {
            Some(value) => value.abs() % 100.0 == 0.0,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{Category, StatementRecord};

    fn record(hour: u32, amount: Option<f64>) -> StatementRecord {
        let date = NaiveDate::from_ymd_opt(2026, 1, 15);
        assert!(date.is_some());
        StatementRecord {
            row: 1,
            date: date.unwrap_or(NaiveDate::MIN),
            hour,
            amount,
            balance: None,
            category: Category::Unknown,
        }
    }

    #[test]
    fn night_window_covers_late_evening_and_early_morning() {
        assert!(record(22, None).is_night());
        assert!(record(23, None).is_night());
        assert!(record(0, None).is_night());
        assert!(record(5, None).is_night());
        assert!(!record(6, None).is_night());
        assert!(!record(21, None).is_night());
        assert!(!record(12, None).is_night());
    }

    #[test]
    fn rounded_check_uses_absolute_amount_and_treats_zero_as_rounded() {
        assert!(record(12, Some(1200.0)).is_rounded());
        assert!(record(12, Some(-200.0)).is_rounded());
        assert!(record(12, Some(0.0)).is_rounded());
        assert!(!record(12, Some(250.0)).is_rounded());
        assert!(!record(12, Some(-85.5)).is_rounded());
        assert!(!record(12, None).is_rounded());
    }

    #[test]
    fn category_labels_match_case_insensitively() {
        assert_eq!(Category::from_label("Airtime"), Category::Airtime);
        assert_eq!(Category::from_label("INCOME"), Category::Income);
        assert_eq!(Category::from_label(" send "), Category::Send);
        assert_eq!(Category::from_label("loan"), Category::Unknown);
    }
}
