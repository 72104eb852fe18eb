use crate::ScoreResult;
use crate::commands::common::{analysis_data, statement_summary};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::ScoreData;
use crate::scoring::analyze;
use crate::scoring::policy::SCORING_POLICY_VERSION;
use crate::statement::normalize::normalize_rows;
use crate::statement::parse::parse_source;

/// One month of plausible mobile-money activity: weekly salary, airtime
/// top-ups, till payments, agent withdrawals.
const DEMO_STATEMENT: &str = include_str!("demo_statement.csv");

pub fn run() -> ScoreResult<SuccessEnvelope> {
    let rows = parse_source(DEMO_STATEMENT)?;
    let records = normalize_rows(&rows)?;
    let analysis = analyze(&records);

    let data = ScoreData {
        policy_version: SCORING_POLICY_VERSION.to_string(),
        source: Some("bundled sample statement".to_string()),
        from: None,
        to: None,
        summary: statement_summary(&records),
        analysis: analysis_data(&analysis),
    };

    success("demo", data)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn bundled_statement_scores_into_the_top_band() {
        let envelope = run();
        assert!(envelope.is_ok());
        if let Ok(success) = envelope {
            assert_eq!(success.command, "demo");
            assert_eq!(success.data["analysis"]["score"], 90.0);
            assert_eq!(
                success.data["analysis"]["recommendation"]["decision"],
                "APPROVE"
            );
            assert_eq!(
                success.data["analysis"]["recommendation"]["amount"],
                "KES 50,000"
            );
            assert_eq!(success.data["summary"]["rows_scored"], 28);
        }
    }

    #[test]
    fn bundled_statement_reasons_follow_rule_order() {
        let envelope = run();
        assert!(envelope.is_ok());
        if let Ok(success) = envelope {
            let reasons = success.data["analysis"]["reasons"]
                .as_array()
                .cloned()
                .unwrap_or_default();
            assert_eq!(reasons.len(), 3);
            assert_eq!(reasons[0], "Very regular income pattern");
            assert_eq!(reasons[1], "Regular airtime purchases - stable behavior");
            assert_eq!(reasons[2], "Some rounded amounts");
        }
    }
}
