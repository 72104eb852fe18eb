use crate::contracts::types::{
    AnalysisData, CategoryRuleSpec, ColumnSpec, DecisionBandSpec, RecommendationData,
    StatementSummary,
};
use crate::scoring::Analysis;
use crate::scoring::decision::LOAN_TIERS;
use crate::scoring::policy::round_to;
use crate::statement::date::format_iso_date;
use crate::statement::normalize::CATEGORY_KEYWORDS;
use crate::statement::types::StatementRecord;

const REQUIRED_STATEMENT_FIELDS: [(&str, &str); 1] = [("date", "date")];

const OPTIONAL_STATEMENT_FIELDS: [(&str, &str); 5] = [
    ("time", "HH:MM"),
    ("amount", "number|currency string"),
    ("balance", "number|currency string"),
    ("category", "string"),
    ("description", "string"),
];

pub(crate) fn required_statement_field_names() -> Vec<&'static str> {
    REQUIRED_STATEMENT_FIELDS
        .iter()
        .map(|(name, _)| *name)
        .collect()
}

pub(crate) fn optional_statement_field_names() -> Vec<&'static str> {
    OPTIONAL_STATEMENT_FIELDS
        .iter()
        .map(|(name, _)| *name)
        .collect()
}

pub fn statement_summary(records: &[StatementRecord]) -> StatementSummary {
    let total_inflow = records
        .iter()
        .filter_map(|record| record.amount)
        .filter(|amount| *amount > 0.0)
        .sum::<f64>();
    let total_outflow = records
        .iter()
        .filter_map(|record| record.amount)
        .filter(|amount| *amount < 0.0)
        .map(f64::abs)
        .sum::<f64>();

    StatementSummary {
        rows_scored: records.len() as i64,
        earliest: records
            .iter()
            .map(|record| record.date)
            .min()
            .as_ref()
            .map(format_iso_date),
        latest: records
            .iter()
            .map(|record| record.date)
            .max()
            .as_ref()
            .map(format_iso_date),
        total_inflow: round_to(total_inflow, 2),
        total_outflow: round_to(total_outflow, 2),
        net_flow: round_to(total_inflow - total_outflow, 2),
    }
}

pub fn analysis_data(analysis: &Analysis) -> AnalysisData {
    AnalysisData {
        score: analysis.score,
        recommendation: RecommendationData {
            decision: analysis.recommendation.decision.as_str().to_string(),
            grade: analysis.recommendation.grade.as_str().to_string(),
            amount: analysis.recommendation.amount.to_string(),
            interest: analysis.recommendation.interest.to_string(),
            message: analysis.recommendation.message.to_string(),
        },
        features: analysis.features,
        reasons: analysis.reasons.clone(),
    }
}

pub(crate) fn column_specs() -> Vec<ColumnSpec> {
    let mut columns = REQUIRED_STATEMENT_FIELDS
        .iter()
        .map(|(name, column_type)| column_spec(name, column_type, true))
        .collect::<Vec<ColumnSpec>>();
    columns.extend(
        OPTIONAL_STATEMENT_FIELDS
            .iter()
            .map(|(name, column_type)| column_spec(name, column_type, false)),
    );
    columns
}

pub(crate) fn category_rule_specs() -> Vec<CategoryRuleSpec> {
    CATEGORY_KEYWORDS
        .iter()
        .map(|(category, keywords)| CategoryRuleSpec {
            category: category.as_str().to_string(),
            keywords: keywords.iter().map(|keyword| keyword.to_string()).collect(),
        })
        .collect()
}

pub(crate) fn decision_band_specs() -> Vec<DecisionBandSpec> {
    LOAN_TIERS
        .iter()
        .map(|tier| DecisionBandSpec {
            min_score: tier.min_score.is_finite().then_some(tier.min_score),
            decision: tier.decision.as_str().to_string(),
            amount: tier.amount.to_string(),
            interest: tier.interest.to_string(),
        })
        .collect()
}

fn column_spec(name: &str, column_type: &str, required: bool) -> ColumnSpec {
    ColumnSpec {
        name: name.to_string(),
        column_type: column_type.to_string(),
        required,
    }
}
