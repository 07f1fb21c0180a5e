//! Recommendation engine
//!
//! Derives an ordered list of advisories from a score set and the profile
//! that produced it. Rules are evaluated in fixed declaration order —
//! Financial Basis, then Risk Protection, then Asset Base — and each rule
//! fires at most once. The list is rebuilt from scratch on every call;
//! nothing is stored.

use serde::{Deserialize, Serialize};

use crate::profile::Profile;
use crate::scoring::checklist::{missing_essentials, PERSONAL_INSURANCE, PROPERTY_INSURANCE};
use crate::scoring::ScoreSet;
use crate::status::Pillar;

/// Sub-score thresholds below which the corresponding rule fires
const EMERGENCY_FUND_THRESHOLD: f64 = 60.0;
const DEBT_THRESHOLD: f64 = 70.0;
const SAVINGS_RATE_THRESHOLD: f64 = 50.0;
const PERSONAL_INSURANCE_THRESHOLD: f64 = 70.0;
const PROPERTY_INSURANCE_THRESHOLD: f64 = 60.0;
const EMERGENCY_DOCUMENTS_THRESHOLD: f64 = 50.0;
const INVESTMENT_QUALITY_THRESHOLD: f64 = 60.0;
const RETIREMENT_ADEQUACY_THRESHOLD: f64 = 70.0;

/// A single prioritized advisory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub pillar: Pillar,
    pub title: String,
    pub description: String,
}

impl Recommendation {
    fn new(pillar: Pillar, title: &str, description: impl Into<String>) -> Self {
        Self {
            pillar,
            title: title.to_string(),
            description: description.into(),
        }
    }
}

/// Derive recommendations from scores and the underlying profile
///
/// Returns an empty list when every guard passes; presenting a "no action
/// needed" fallback is the caller's concern.
pub fn recommend(scores: &ScoreSet, profile: &Profile) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    // Financial Basis
    if scores.emergency_fund < EMERGENCY_FUND_THRESHOLD {
        recommendations.push(Recommendation::new(
            Pillar::FinancialBasis,
            "Build up your emergency fund",
            "Raise your emergency fund to at least three months of expenses to bridge financial shortfalls.",
        ));
    }

    if scores.debt < DEBT_THRESHOLD {
        recommendations.push(Recommendation::new(
            Pillar::FinancialBasis,
            "Reduce debt",
            "Focus on paying down your outstanding debt, especially expensive overdraft credit.",
        ));
    }

    if scores.savings_rate < SAVINGS_RATE_THRESHOLD {
        recommendations.push(Recommendation::new(
            Pillar::FinancialBasis,
            "Increase your savings rate",
            "Review your variable spending and try to raise your monthly savings rate.",
        ));
    }

    // Risk Protection
    if scores.personal_insurance < PERSONAL_INSURANCE_THRESHOLD {
        let missing = missing_essentials(PERSONAL_INSURANCE, profile);
        if !missing.is_empty() {
            recommendations.push(Recommendation::new(
                Pillar::RiskProtection,
                "Close personal insurance gaps",
                format!(
                    "Consider taking out the following important policies: {}.",
                    missing.join(", ")
                ),
            ));
        }
    }

    if scores.property_insurance < PROPERTY_INSURANCE_THRESHOLD {
        let missing = missing_essentials(PROPERTY_INSURANCE, profile);
        if !missing.is_empty() {
            recommendations.push(Recommendation::new(
                Pillar::RiskProtection,
                "Close property insurance gaps",
                format!(
                    "Review whether the following policies make sense for you: {}.",
                    missing.join(", ")
                ),
            ));
        }
    }

    if scores.emergency_documents < EMERGENCY_DOCUMENTS_THRESHOLD {
        recommendations.push(Recommendation::new(
            Pillar::RiskProtection,
            "Complete your emergency folder",
            "Prepare key documents such as a power of attorney and a living will for emergencies.",
        ));
    }

    // Asset Base; at most one of the two investment rules fires
    if scores.investment_quality < INVESTMENT_QUALITY_THRESHOLD {
        if !profile.portfolio.equities.held {
            recommendations.push(Recommendation::new(
                Pillar::AssetBase,
                "Improve diversification",
                "Consider investing in equities or ETFs to raise returns and spread risk more broadly.",
            ));
        } else if !profile.portfolio.real_estate.held && !profile.portfolio.bonds.held {
            recommendations.push(Recommendation::new(
                Pillar::AssetBase,
                "Broaden your asset classes",
                "Add further asset classes such as real estate or bonds to your portfolio.",
            ));
        }
    }

    if scores.retirement_adequacy < RETIREMENT_ADEQUACY_THRESHOLD {
        recommendations.push(Recommendation::new(
            Pillar::AssetBase,
            "Expand your retirement provision",
            "Increase your retirement savings to maintain your standard of living in retirement.",
        ));
    }

    tracing::debug!(count = recommendations.len(), "Recommendations derived");

    recommendations
}
