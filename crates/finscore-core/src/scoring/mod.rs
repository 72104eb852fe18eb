pub mod decision;
pub mod features;
pub mod policy;
pub mod rules;

use crate::scoring::decision::{LoanTier, recommend};
use crate::scoring::features::{FeatureSet, extract_features};
use crate::scoring::policy::SCORING_POLICY_V1;
use crate::scoring::rules::score_features;
use crate::statement::types::StatementRecord;

#[derive(Debug, Clone)]
pub struct Analysis {
    pub score: f64,
    pub recommendation: &'static LoanTier,
    pub features: FeatureSet,
    pub reasons: Vec<String>,
}

/// Pure end-to-end analysis of a normalized statement. An empty table
/// short-circuits to the neutral result instead of running the rule
/// blocks: score 50, sentinel income regularity, zero ratios, no reasons.
pub fn analyze(records: &[StatementRecord]) -> Analysis {
    if records.is_empty() {
        let score = SCORING_POLICY_V1.base_score;
        return Analysis {
            score,
            recommendation: recommend(score),
            features: FeatureSet::neutral(),
            reasons: Vec::new(),
        };
    }

    let features = extract_features(records);
    let (score, reasons) = score_features(&features);
    Analysis {
        score,
        recommendation: recommend(score),
        features,
        reasons,
    }
}
