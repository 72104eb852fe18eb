#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionTag {
    Approve,
    Conditional,
    Decline,
}

impl DecisionTag {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approve => "APPROVE",
            Self::Conditional => "CONDITIONAL",
            Self::Decline => "DECLINE",
        }
    }
}

/// Internal three-way grade. The [50,65) tier approves with conditional
/// wording; presentation layers may collapse it into the approve badge,
/// but the distinction is preserved here rather than unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalGrade {
    FullApprove,
    ConditionalApprove,
    Decline,
}

impl ApprovalGrade {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FullApprove => "full_approve",
            Self::ConditionalApprove => "conditional_approve",
            Self::Decline => "decline",
        }
    }
}

/// One fixed loan-decision bundle. Amount, interest, and message strings
/// are load-bearing: downstream consumers match on the exact wording.
#[derive(Debug, Clone, Copy)]
pub struct LoanTier {
    pub min_score: f64,
    pub decision: DecisionTag,
    pub grade: ApprovalGrade,
    pub amount: &'static str,
    pub interest: &'static str,
    pub message: &'static str,
}

/// Highest band first; the final tier catches everything below 35.
pub const LOAN_TIERS: [LoanTier; 5] = [
    LoanTier {
        min_score: 80.0,
        decision: DecisionTag::Approve,
        grade: ApprovalGrade::FullApprove,
        amount: "KES 50,000",
        interest: "8%",
        message: "Excellent credit behavior. Low risk borrower.",
    },
    LoanTier {
        min_score: 65.0,
        decision: DecisionTag::Approve,
        grade: ApprovalGrade::FullApprove,
        amount: "KES 25,000",
        interest: "12%",
        message: "Good credit behavior. Moderate risk.",
    },
    LoanTier {
        min_score: 50.0,
        decision: DecisionTag::Approve,
        grade: ApprovalGrade::ConditionalApprove,
        amount: "KES 10,000",
        interest: "15%",
        message: "Fair credit behavior. Higher interest rate.",
    },
    LoanTier {
        min_score: 35.0,
        decision: DecisionTag::Conditional,
        grade: ApprovalGrade::ConditionalApprove,
        amount: "KES 3,000",
        interest: "20%",
        message: "High risk. Small loan only.",
    },
    LoanTier {
        min_score: f64::NEG_INFINITY,
        decision: DecisionTag::Decline,
        grade: ApprovalGrade::Decline,
        amount: "KES 0",
        interest: "N/A",
        message: "Unable to offer loan at this time.",
    },
];

pub fn recommend(score: f64) -> &'static LoanTier {
    for tier in &LOAN_TIERS {
        if score >= tier.min_score {
            return tier;
        }
    }
    &LOAN_TIERS[LOAN_TIERS.len() - 1]
}
