/// Deterministic scoring policy identifier.
///
/// Emitted with every score result so future threshold changes remain
/// auditable and easy to reason about in diffs and support sessions.
pub const SCORING_POLICY_VERSION: &str = "score/v1";

/// v1 scoring policy.
///
/// Notes:
/// - The rule-block thresholds themselves live with the rule table; this
///   struct freezes the accumulator frame around them.
/// - `base_score` is the neutral starting point every analysis begins from
///   and the exact score an empty statement reports.
#[derive(Debug, Clone, Copy)]
pub struct ScoringPolicy {
    pub base_score: f64,
    pub min_score: f64,
    pub max_score: f64,
    pub score_decimals: u32,
}

impl ScoringPolicy {
    /// Terminal score shaping: round first, then clamp.
    pub fn finalize(self, raw: f64) -> f64 {
        round_to(raw, self.score_decimals).clamp(self.min_score, self.max_score)
    }
}

pub const SCORING_POLICY_V1: ScoringPolicy = ScoringPolicy {
    base_score: 50.0,
    min_score: 0.0,
    max_score: 100.0,
    score_decimals: 1,
};

pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let exponent = i32::try_from(decimals).unwrap_or(2);
    let factor = 10_f64.powi(exponent);
    (value * factor).round() / factor
}
