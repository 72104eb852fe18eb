use chrono::NaiveDate;
use finscore_core::scoring::analyze;
use finscore_core::scoring::decision::{ApprovalGrade, DecisionTag, recommend};
use finscore_core::scoring::features::{INCOME_REGULARITY_SENTINEL, extract_features};
use finscore_core::statement::types::{Category, StatementRecord};

fn day(offset: u32) -> NaiveDate {
    let base = NaiveDate::from_ymd_opt(2026, 1, 1);
    assert!(base.is_some());
    base.unwrap_or(NaiveDate::MIN) + chrono::Duration::days(i64::from(offset))
}

fn record(offset: u32, hour: u32, amount: Option<f64>, balance: Option<f64>) -> StatementRecord {
    StatementRecord {
        row: i64::from(offset) + 1,
        date: day(offset),
        hour,
        amount,
        balance,
        category: Category::Unknown,
    }
}

fn with_category(mut built: StatementRecord, category: Category) -> StatementRecord {
    built.category = category;
    built
}

#[test]
fn every_synthetic_table_scores_inside_the_unit_range_with_one_decimal() {
    // Sweep a grid of hour/amount/balance shapes; none may escape [0,100].
    for hour in [0u32, 3, 5, 6, 11, 21, 22, 23] {
        for amount in [Some(-35_000.0), Some(-250.5), Some(0.0), Some(100.0), None] {
            for balance in [Some(120.0), Some(499.9), Some(80_000.0), None] {
                let records = (0..10)
                    .map(|offset| record(offset, hour, amount, balance))
                    .collect::<Vec<StatementRecord>>();
                let analysis = analyze(&records);
                assert!(analysis.score >= 0.0, "hour {hour} amount {amount:?}");
                assert!(analysis.score <= 100.0, "hour {hour} amount {amount:?}");
                let tenths = analysis.score * 10.0;
                assert!((tenths - tenths.round()).abs() < 1e-9);
            }
        }
    }
}

#[test]
fn all_low_balances_hit_the_full_penalty_with_its_reason() {
    let records = (0..6)
        .map(|offset| record(offset, 12, Some(-45.5), Some(123.0)))
        .collect::<Vec<StatementRecord>>();
    let analysis = analyze(&records);
    assert_eq!(analysis.features.low_balance_ratio, 1.0);
    assert!(
        analysis
            .reasons
            .contains(&"Frequently low balance - cash flow issues".to_string())
    );
}

#[test]
fn rounded_ratio_extremes_hit_one_and_zero() {
    let all_rounded = (0..5)
        .map(|offset| record(offset, 12, Some(-100.0 * f64::from(offset + 1)), None))
        .collect::<Vec<StatementRecord>>();
    assert_eq!(extract_features(&all_rounded).rounded_ratio, 1.0);

    let none_rounded = (0..5)
        .map(|offset| record(offset, 12, Some(-150.5 - f64::from(offset)), None))
        .collect::<Vec<StatementRecord>>();
    assert_eq!(extract_features(&none_rounded).rounded_ratio, 0.0);
}

#[test]
fn income_sentinel_holds_regardless_of_other_columns() {
    // Rich table, but only one income row: the sentinel must still apply.
    let mut records = (0..20)
        .map(|offset| record(offset, 10, Some(-520.5), Some(60_000.0)))
        .collect::<Vec<StatementRecord>>();
    records[3] = with_category(records[3].clone(), Category::Income);

    let features = extract_features(&records);
    assert_eq!(features.income_regularity, INCOME_REGULARITY_SENTINEL);

    let analysis = analyze(&records);
    assert!(
        analysis
            .reasons
            .contains(&"Irregular income - risk factor".to_string())
    );
}

#[test]
fn steady_weekly_income_earns_the_top_income_bonus() {
    let records = (0..5)
        .map(|offset| {
            with_category(
                record(offset * 7, 9, Some(35_000.0), Some(40_000.0)),
                Category::Income,
            )
        })
        .collect::<Vec<StatementRecord>>();
    let analysis = analyze(&records);
    assert_eq!(analysis.features.income_regularity, 0.0);
    assert!(
        analysis
            .reasons
            .contains(&"Very regular income pattern".to_string())
    );
}

#[test]
fn decision_tier_is_a_pure_function_of_the_score() {
    let boundaries = [
        (80.0, DecisionTag::Approve, ApprovalGrade::FullApprove),
        (79.9, DecisionTag::Approve, ApprovalGrade::FullApprove),
        (65.0, DecisionTag::Approve, ApprovalGrade::FullApprove),
        (64.9, DecisionTag::Approve, ApprovalGrade::ConditionalApprove),
        (50.0, DecisionTag::Approve, ApprovalGrade::ConditionalApprove),
        (49.9, DecisionTag::Conditional, ApprovalGrade::ConditionalApprove),
        (35.0, DecisionTag::Conditional, ApprovalGrade::ConditionalApprove),
        (34.9, DecisionTag::Decline, ApprovalGrade::Decline),
    ];
    for (score, decision, grade) in boundaries {
        let tier = recommend(score);
        assert_eq!(tier.decision, decision, "score {score}");
        assert_eq!(tier.grade, grade, "score {score}");
    }

    // 79.9 and 65.0 share a tier but 80.0 does not.
    assert_eq!(recommend(79.9).amount, recommend(65.0).amount);
    assert_ne!(recommend(80.0).amount, recommend(79.9).amount);
}

#[test]
fn empty_table_maps_to_the_fair_approval_tier() {
    let analysis = analyze(&[]);
    assert_eq!(analysis.score, 50.0);
    assert_eq!(analysis.recommendation.decision, DecisionTag::Approve);
    assert_eq!(analysis.recommendation.grade, ApprovalGrade::ConditionalApprove);
    assert_eq!(analysis.recommendation.amount, "KES 10,000");
    assert_eq!(analysis.recommendation.interest, "15%");
    assert!(analysis.reasons.is_empty());
}

#[test]
fn reason_order_tracks_rule_evaluation_order_for_a_fully_firing_table() {
    // Every reason-bearing block fires: nocturnal, airtime-heavy, rounded,
    // low-balance rows at a healthy daily rate with steady income.
    let mut records = Vec::new();
    for offset in 0..10 {
        for slot in 0..4 {
            let mut built = record(offset, 23, Some(-300.0), Some(120.0));
            built.row = i64::from(offset * 4 + slot) + 1;
            built.category = if slot == 0 {
                Category::Airtime
            } else {
                Category::Unknown
            };
            records.push(built);
        }
    }
    records[0].category = Category::Income;
    records[4].category = Category::Income;
    records[8].category = Category::Income;

    let analysis = analyze(&records);
    let expected = vec![
        "Very regular income pattern".to_string(),
        "High night activity - potential risk".to_string(),
        "Regular airtime purchases - stable behavior".to_string(),
        "Many rounded amounts - possible gambling".to_string(),
        "Frequently low balance - cash flow issues".to_string(),
        "Healthy transaction activity".to_string(),
    ];
    assert_eq!(analysis.reasons, expected);
}
