//! Status classifier
//!
//! Maps raw scores to qualitative tiers and resolves display colors.
//! Pillar identity dominates numeric severity: a score tagged with a
//! category is colored by its pillar's fixed theme, while an untagged
//! score falls back to the tier color.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three top-level wellbeing dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pillar {
    FinancialBasis,
    RiskProtection,
    AssetBase,
}

impl Pillar {
    pub const ALL: [Pillar; 3] = [
        Pillar::FinancialBasis,
        Pillar::RiskProtection,
        Pillar::AssetBase,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Pillar::FinancialBasis => "financial_basis",
            Pillar::RiskProtection => "risk_protection",
            Pillar::AssetBase => "asset_base",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Pillar::FinancialBasis => "Financial Basis",
            Pillar::RiskProtection => "Risk Protection",
            Pillar::AssetBase => "Asset & Retirement Base",
        }
    }

    /// Fixed theme color used for this pillar and all its sub-scores
    pub fn theme_color(&self) -> &'static str {
        match self {
            Pillar::FinancialBasis => "#0088FE",
            Pillar::RiskProtection => "#00C49F",
            Pillar::AssetBase => "#FFBB28",
        }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Pillar {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "financial_basis" => Ok(Pillar::FinancialBasis),
            "risk_protection" => Ok(Pillar::RiskProtection),
            "asset_base" => Ok(Pillar::AssetBase),
            _ => Err(format!("Unknown pillar: {}", s)),
        }
    }
}

/// Every scored category: eight sub-scores plus the three pillars
///
/// Each sub-score belongs to exactly one pillar; this mapping is the single
/// source of the grouping used for coloring and report layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    SavingsRate,
    EmergencyFund,
    Debt,
    FinancialBasis,
    PersonalInsurance,
    PropertyInsurance,
    EmergencyDocuments,
    RiskProtection,
    InvestmentQuality,
    RetirementAdequacy,
    AssetBase,
}

impl ScoreCategory {
    /// Sub-scores in fixed display order, grouped by pillar
    pub const SUB_SCORES: [ScoreCategory; 8] = [
        ScoreCategory::EmergencyFund,
        ScoreCategory::Debt,
        ScoreCategory::SavingsRate,
        ScoreCategory::PersonalInsurance,
        ScoreCategory::PropertyInsurance,
        ScoreCategory::EmergencyDocuments,
        ScoreCategory::InvestmentQuality,
        ScoreCategory::RetirementAdequacy,
    ];

    /// The pillar this category belongs to (pillars map to themselves)
    pub fn pillar(&self) -> Pillar {
        match self {
            ScoreCategory::SavingsRate
            | ScoreCategory::EmergencyFund
            | ScoreCategory::Debt
            | ScoreCategory::FinancialBasis => Pillar::FinancialBasis,
            ScoreCategory::PersonalInsurance
            | ScoreCategory::PropertyInsurance
            | ScoreCategory::EmergencyDocuments
            | ScoreCategory::RiskProtection => Pillar::RiskProtection,
            ScoreCategory::InvestmentQuality
            | ScoreCategory::RetirementAdequacy
            | ScoreCategory::AssetBase => Pillar::AssetBase,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreCategory::SavingsRate => "savings_rate",
            ScoreCategory::EmergencyFund => "emergency_fund",
            ScoreCategory::Debt => "debt",
            ScoreCategory::FinancialBasis => "financial_basis",
            ScoreCategory::PersonalInsurance => "personal_insurance",
            ScoreCategory::PropertyInsurance => "property_insurance",
            ScoreCategory::EmergencyDocuments => "emergency_documents",
            ScoreCategory::RiskProtection => "risk_protection",
            ScoreCategory::InvestmentQuality => "investment_quality",
            ScoreCategory::RetirementAdequacy => "retirement_adequacy",
            ScoreCategory::AssetBase => "asset_base",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ScoreCategory::SavingsRate => "Savings rate",
            ScoreCategory::EmergencyFund => "Emergency fund",
            ScoreCategory::Debt => "Debt",
            ScoreCategory::FinancialBasis => "Financial Basis",
            ScoreCategory::PersonalInsurance => "Personal insurance",
            ScoreCategory::PropertyInsurance => "Property insurance",
            ScoreCategory::EmergencyDocuments => "Emergency documents",
            ScoreCategory::RiskProtection => "Risk Protection",
            ScoreCategory::InvestmentQuality => "Investment quality",
            ScoreCategory::RetirementAdequacy => "Retirement adequacy",
            ScoreCategory::AssetBase => "Asset & Retirement Base",
        }
    }
}

impl fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScoreCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "savings_rate" => Ok(ScoreCategory::SavingsRate),
            "emergency_fund" => Ok(ScoreCategory::EmergencyFund),
            "debt" => Ok(ScoreCategory::Debt),
            "financial_basis" => Ok(ScoreCategory::FinancialBasis),
            "personal_insurance" => Ok(ScoreCategory::PersonalInsurance),
            "property_insurance" => Ok(ScoreCategory::PropertyInsurance),
            "emergency_documents" => Ok(ScoreCategory::EmergencyDocuments),
            "risk_protection" => Ok(ScoreCategory::RiskProtection),
            "investment_quality" => Ok(ScoreCategory::InvestmentQuality),
            "retirement_adequacy" => Ok(ScoreCategory::RetirementAdequacy),
            "asset_base" => Ok(ScoreCategory::AssetBase),
            _ => Err(format!("Unknown score category: {}", s)),
        }
    }
}

/// Qualitative tier for a raw score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Excellent,
    Good,
    Average,
    Poor,
    Critical,
}

impl Tier {
    /// Classify a raw score by the fixed breakpoints
    pub fn from_score(score: f64) -> Tier {
        if score >= 90.0 {
            Tier::Excellent
        } else if score >= 75.0 {
            Tier::Good
        } else if score >= 60.0 {
            Tier::Average
        } else if score >= 40.0 {
            Tier::Poor
        } else {
            Tier::Critical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Excellent => "excellent",
            Tier::Good => "good",
            Tier::Average => "average",
            Tier::Poor => "poor",
            Tier::Critical => "critical",
        }
    }

    /// Severity color for scores displayed without a category
    pub fn color(&self) -> &'static str {
        match self {
            Tier::Excellent => "#4CAF50",
            Tier::Good => "#8BC34A",
            Tier::Average => "#FFC107",
            Tier::Poor => "#FF9800",
            Tier::Critical => "#F44336",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "excellent" => Ok(Tier::Excellent),
            "good" => Ok(Tier::Good),
            "average" => Ok(Tier::Average),
            "poor" => Ok(Tier::Poor),
            "critical" => Ok(Tier::Critical),
            _ => Err(format!("Unknown tier: {}", s)),
        }
    }
}

/// Resolve the display color for a score
///
/// A categorized score takes its pillar's theme color regardless of the
/// numeric value; an uncategorized score (e.g. the overall score) is
/// colored by tier.
pub fn status_color(score: f64, category: Option<ScoreCategory>) -> &'static str {
    match category {
        Some(category) => category.pillar().theme_color(),
        None => Tier::from_score(score).color(),
    }
}
