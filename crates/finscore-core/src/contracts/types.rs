use serde::Serialize;

use crate::scoring::features::FeatureSet;

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationData {
    pub decision: String,
    pub grade: String,
    pub amount: String,
    pub interest: String,
    pub message: String,
}

/// The analysis result contract: exactly these four fields, nothing else.
/// Presentation layers depend on the field set and the verbatim strings.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisData {
    pub score: f64,
    pub recommendation: RecommendationData,
    pub features: FeatureSet,
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatementSummary {
    pub rows_scored: i64,
    pub earliest: Option<String>,
    pub latest: Option<String>,
    pub total_inflow: f64,
    pub total_outflow: f64,
    pub net_flow: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreData {
    pub policy_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub summary: StatementSummary,
    pub analysis: AnalysisData,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: String,
    pub required: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryRuleSpec {
    pub category: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DecisionBandSpec {
    pub min_score: Option<f64>,
    pub decision: String,
    pub amount: String,
    pub interest: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SchemaData {
    pub columns: Vec<ColumnSpec>,
    pub category_rules: Vec<CategoryRuleSpec>,
    pub decision_bands: Vec<DecisionBandSpec>,
}
