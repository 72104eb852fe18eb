use crate::scoring::features::FeatureSet;
use crate::scoring::policy::{SCORING_POLICY_V1, ScoringPolicy};

#[derive(Debug, Clone, Copy)]
pub struct RuleOutcome {
    pub delta: f64,
    pub reason: Option<&'static str>,
}

impl RuleOutcome {
    const fn silent(delta: f64) -> Self {
        Self {
            delta,
            reason: None,
        }
    }
}

/// One threshold-ladder evaluation over the feature map. Blocks are
/// independent: no block reads another block's output.
#[derive(Debug, Clone, Copy)]
pub struct RuleBlock {
    pub feature: &'static str,
    pub evaluate: fn(&FeatureSet) -> RuleOutcome,
}

/// Evaluation order is part of the contract: reasons append in this order.
pub const RULE_BLOCKS: [RuleBlock; 7] = [
    RuleBlock {
        feature: "avg_daily_balance",
        evaluate: balance_rule,
    },
    RuleBlock {
        feature: "income_regularity",
        evaluate: income_regularity_rule,
    },
    RuleBlock {
        feature: "night_ratio",
        evaluate: night_rule,
    },
    RuleBlock {
        feature: "airtime_ratio",
        evaluate: airtime_rule,
    },
    RuleBlock {
        feature: "rounded_ratio",
        evaluate: rounded_rule,
    },
    RuleBlock {
        feature: "low_balance_ratio",
        evaluate: low_balance_rule,
    },
    RuleBlock {
        feature: "txns_per_day",
        evaluate: activity_rule,
    },
];

#[derive(Debug, Clone, Copy)]
struct Band {
    threshold: f64,
    delta: f64,
    reason: Option<&'static str>,
}

const BALANCE_BANDS: [Band; 5] = [
    Band {
        threshold: 50_000.0,
        delta: 20.0,
        reason: None,
    },
    Band {
        threshold: 20_000.0,
        delta: 15.0,
        reason: None,
    },
    Band {
        threshold: 10_000.0,
        delta: 10.0,
        reason: None,
    },
    Band {
        threshold: 5_000.0,
        delta: 5.0,
        reason: None,
    },
    Band {
        threshold: 1_000.0,
        delta: 2.0,
        reason: None,
    },
];

const NIGHT_BANDS: [Band; 3] = [
    Band {
        threshold: 0.3,
        delta: -20.0,
        reason: Some("High night activity - potential risk"),
    },
    Band {
        threshold: 0.15,
        delta: -10.0,
        reason: Some("Moderate night activity"),
    },
    Band {
        threshold: 0.05,
        delta: -5.0,
        reason: None,
    },
];

const AIRTIME_BANDS: [Band; 2] = [
    Band {
        threshold: 0.1,
        delta: 10.0,
        reason: Some("Regular airtime purchases - stable behavior"),
    },
    Band {
        threshold: 0.05,
        delta: 5.0,
        reason: None,
    },
];

const ROUNDED_BANDS: [Band; 2] = [
    Band {
        threshold: 0.4,
        delta: -15.0,
        reason: Some("Many rounded amounts - possible gambling"),
    },
    Band {
        threshold: 0.2,
        delta: -10.0,
        reason: Some("Some rounded amounts"),
    },
];

const LOW_BALANCE_BANDS: [Band; 2] = [
    Band {
        threshold: 0.3,
        delta: -15.0,
        reason: Some("Frequently low balance - cash flow issues"),
    },
    Band {
        threshold: 0.15,
        delta: -8.0,
        reason: None,
    },
];

/// Lower spread means steadier income, so these bands match downwards.
/// Exactly one of the four outcomes always fires.
const INCOME_REGULARITY_BANDS: [Band; 3] = [
    Band {
        threshold: 3.0,
        delta: 20.0,
        reason: Some("Very regular income pattern"),
    },
    Band {
        threshold: 7.0,
        delta: 15.0,
        reason: Some("Regular income pattern"),
    },
    Band {
        threshold: 15.0,
        delta: 5.0,
        reason: Some("Somewhat regular income"),
    },
];

const IRREGULAR_INCOME_OUTCOME: RuleOutcome = RuleOutcome {
    delta: -10.0,
    reason: Some("Irregular income - risk factor"),
};

pub fn score_features(features: &FeatureSet) -> (f64, Vec<String>) {
    score_features_with_policy(features, SCORING_POLICY_V1)
}

fn score_features_with_policy(features: &FeatureSet, policy: ScoringPolicy) -> (f64, Vec<String>) {
    let mut score = policy.base_score;
    let mut reasons = Vec::new();

    for block in RULE_BLOCKS {
        let outcome = (block.evaluate)(features);
        score += outcome.delta;
        if let Some(reason) = outcome.reason {
            reasons.push(reason.to_string());
        }
    }

    (policy.finalize(score), reasons)
}

fn ladder_above(value: f64, bands: &[Band]) -> RuleOutcome {
    for band in bands {
        if value > band.threshold {
            return RuleOutcome {
                delta: band.delta,
                reason: band.reason,
            };
        }
    }
    RuleOutcome::silent(0.0)
}

fn ladder_below(value: f64, bands: &[Band], fallback: RuleOutcome) -> RuleOutcome {
    for band in bands {
        if value < band.threshold {
            return RuleOutcome {
                delta: band.delta,
                reason: band.reason,
            };
        }
    }
    fallback
}

fn balance_rule(features: &FeatureSet) -> RuleOutcome {
    ladder_above(features.avg_daily_balance, &BALANCE_BANDS)
}

fn income_regularity_rule(features: &FeatureSet) -> RuleOutcome {
    ladder_below(
        features.income_regularity,
        &INCOME_REGULARITY_BANDS,
        IRREGULAR_INCOME_OUTCOME,
    )
}

fn night_rule(features: &FeatureSet) -> RuleOutcome {
    ladder_above(features.night_ratio, &NIGHT_BANDS)
}

fn airtime_rule(features: &FeatureSet) -> RuleOutcome {
    ladder_above(features.airtime_ratio, &AIRTIME_BANDS)
}

fn rounded_rule(features: &FeatureSet) -> RuleOutcome {
    ladder_above(features.rounded_ratio, &ROUNDED_BANDS)
}

fn low_balance_rule(features: &FeatureSet) -> RuleOutcome {
    ladder_above(features.low_balance_ratio, &LOW_BALANCE_BANDS)
}

fn activity_rule(features: &FeatureSet) -> RuleOutcome {
    let value = features.txns_per_day;
    if (3.0..=8.0).contains(&value) {
        return RuleOutcome {
            delta: 10.0,
            reason: Some("Healthy transaction activity"),
        };
    }
    if value > 15.0 {
        return RuleOutcome {
            delta: -10.0,
            reason: Some("Very high transaction volume - business?"),
        };
    }
    if value < 0.5 {
        return RuleOutcome {
            delta: -5.0,
            reason: Some("Low account activity"),
        };
    }
    RuleOutcome::silent(0.0)
}
