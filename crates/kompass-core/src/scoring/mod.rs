//! Score calculator
//!
//! Pure transformation from a [`Profile`] to a [`ScoreSet`]: eight
//! sub-scores, three pillar scores, and the overall score, all normalized
//! to 0–100. Deterministic, no I/O, and total over finite numeric input;
//! division-by-zero cases degrade to worst-case or convention scores
//! instead of producing NaN or infinity.

pub mod checklist;

use serde::{Deserialize, Serialize};

use crate::profile::{AssetClass, CashFlow, Debt, Liquidity, PersonalData, Profile, RetirementIncome};
use crate::status::ScoreCategory;

use self::checklist::{checklist_score, EMERGENCY_DOCUMENTS, PERSONAL_INSURANCE, PROPERTY_INSURANCE};

/// Savings rate that earns full marks
const SAVINGS_RATE_TARGET: f64 = 0.2;

/// Months of expenses the emergency fund should cover
const EMERGENCY_FUND_MONTHS: f64 = 3.0;

/// Debt-to-annual-income ratio below which debt scores full marks
const DEBT_RATIO_GOOD: f64 = 0.2;

/// Ratio at which the debt score has fallen to 50
const DEBT_RATIO_ELEVATED: f64 = 0.35;

/// Overdraft balance (€) above which a flat penalty applies
const OVERDRAFT_PENALTY_THRESHOLD: f64 = 500.0;

/// Flat penalty for an elevated overdraft balance
const OVERDRAFT_PENALTY: f64 = 5.0;

/// Minimum share of the portfolio for an asset class to count as diversified
const DIVERSIFICATION_MIN_SHARE: f64 = 0.1;

/// Diversification points per qualifying asset class (4+ classes = 100)
const POINTS_PER_ASSET_CLASS: f64 = 25.0;

/// Years of expenses the portfolio should cover for full marks
const INVESTMENT_COVERAGE_YEARS: f64 = 5.0;

/// Statutory retirement age
const RETIREMENT_AGE: u32 = 67;

/// Assumed yearly inflation factor for projecting expenses
const ANNUAL_INFLATION: f64 = 1.02;

/// Pension-to-expenses replacement ratio that earns full marks
const REPLACEMENT_RATIO_TARGET: f64 = 0.8;

/// All scores derived from one profile snapshot, each in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSet {
    pub savings_rate: f64,
    pub emergency_fund: f64,
    pub debt: f64,
    pub financial_basis: f64,
    pub personal_insurance: f64,
    pub property_insurance: f64,
    pub emergency_documents: f64,
    pub risk_protection: f64,
    pub investment_quality: f64,
    pub retirement_adequacy: f64,
    pub asset_base: f64,
    pub overall: f64,
}

impl ScoreSet {
    /// Look up a score by category
    pub fn get(&self, category: ScoreCategory) -> f64 {
        match category {
            ScoreCategory::SavingsRate => self.savings_rate,
            ScoreCategory::EmergencyFund => self.emergency_fund,
            ScoreCategory::Debt => self.debt,
            ScoreCategory::FinancialBasis => self.financial_basis,
            ScoreCategory::PersonalInsurance => self.personal_insurance,
            ScoreCategory::PropertyInsurance => self.property_insurance,
            ScoreCategory::EmergencyDocuments => self.emergency_documents,
            ScoreCategory::RiskProtection => self.risk_protection,
            ScoreCategory::InvestmentQuality => self.investment_quality,
            ScoreCategory::RetirementAdequacy => self.retirement_adequacy,
            ScoreCategory::AssetBase => self.asset_base,
        }
    }
}

/// Compute the full score set for a profile
pub fn compute_scores(profile: &Profile) -> ScoreSet {
    let savings_rate = savings_rate_score(&profile.cash_flow);
    let emergency_fund = emergency_fund_score(&profile.cash_flow, &profile.liquidity);
    let debt = debt_score(&profile.cash_flow, &profile.debt);
    let financial_basis = 0.4 * emergency_fund + 0.35 * debt + 0.25 * savings_rate;

    let personal_insurance = checklist_score(PERSONAL_INSURANCE, profile);
    let property_insurance = checklist_score(PROPERTY_INSURANCE, profile);
    let emergency_documents = checklist_score(EMERGENCY_DOCUMENTS, profile);
    let risk_protection =
        0.5 * personal_insurance + 0.3 * property_insurance + 0.2 * emergency_documents;

    let investment_quality = investment_quality_score(profile);
    let retirement_adequacy =
        retirement_adequacy_score(&profile.personal, &profile.cash_flow, &profile.retirement);
    let asset_base = 0.5 * retirement_adequacy + 0.5 * investment_quality;

    let overall = (financial_basis + risk_protection + asset_base) / 3.0;

    tracing::debug!(
        financial_basis,
        risk_protection,
        asset_base,
        overall,
        "Score computation complete"
    );

    ScoreSet {
        savings_rate,
        emergency_fund,
        debt,
        financial_basis,
        personal_insurance,
        property_insurance,
        emergency_documents,
        risk_protection,
        investment_quality,
        retirement_adequacy,
        asset_base,
        overall,
    }
}

/// Share of income left after expenses, scaled against the target rate
fn savings_rate_score(cash_flow: &CashFlow) -> f64 {
    // Zero income makes the rate undefined; score worst-case instead
    if cash_flow.monthly_income <= 0.0 {
        return 0.0;
    }

    let surplus = cash_flow.monthly_income - cash_flow.monthly_expenses();
    let rate = surplus / cash_flow.monthly_income;
    (rate / SAVINGS_RATE_TARGET * 100.0).clamp(0.0, 100.0)
}

/// Emergency fund measured against three months of expenses
fn emergency_fund_score(cash_flow: &CashFlow, liquidity: &Liquidity) -> f64 {
    let target = EMERGENCY_FUND_MONTHS * cash_flow.monthly_expenses();
    if target <= 0.0 {
        // Zero expenses: any reserve at all fully covers them
        return if liquidity.emergency_fund > 0.0 {
            100.0
        } else {
            0.0
        };
    }

    (liquidity.emergency_fund / target * 100.0).min(100.0)
}

/// Total debt against annual income, piecewise by ratio band
fn debt_score(cash_flow: &CashFlow, debt: &Debt) -> f64 {
    if cash_flow.monthly_income <= 0.0 {
        return 0.0;
    }

    let ratio = debt.total() / (cash_flow.monthly_income * 12.0);
    let mut score = if ratio < DEBT_RATIO_GOOD {
        100.0
    } else if ratio <= DEBT_RATIO_ELEVATED {
        100.0 - (ratio - DEBT_RATIO_GOOD) / (DEBT_RATIO_ELEVATED - DEBT_RATIO_GOOD) * 50.0
    } else {
        50.0 - (ratio - DEBT_RATIO_ELEVATED) / (1.0 - DEBT_RATIO_ELEVATED) * 50.0
    };

    if debt.overdraft_balance > OVERDRAFT_PENALTY_THRESHOLD {
        score -= OVERDRAFT_PENALTY;
    }

    score.max(0.0)
}

/// Diversification (30%) plus expense coverage (70%)
fn investment_quality_score(profile: &Profile) -> f64 {
    let total = profile.portfolio.total_invested();

    let diversification = if total > 0.0 {
        let qualifying = AssetClass::ALL
            .iter()
            .filter(|class| {
                profile.portfolio.holding(**class).effective_amount() / total
                    >= DIVERSIFICATION_MIN_SHARE
            })
            .count();
        (qualifying as f64 * POINTS_PER_ASSET_CLASS).min(100.0)
    } else {
        0.0
    };

    let coverage = if total <= 0.0 {
        0.0
    } else {
        let target = profile.cash_flow.monthly_expenses() * 12.0 * INVESTMENT_COVERAGE_YEARS;
        if target <= 0.0 {
            // Zero expenses: any invested amount fully covers them
            100.0
        } else {
            (total / target * 100.0).min(100.0)
        }
    };

    0.3 * diversification + 0.7 * coverage
}

/// Projected pension income against inflation-adjusted future expenses
fn retirement_adequacy_score(
    personal: &PersonalData,
    cash_flow: &CashFlow,
    retirement: &RetirementIncome,
) -> f64 {
    let years_to_retirement = RETIREMENT_AGE.saturating_sub(personal.age);
    let inflation_factor = ANNUAL_INFLATION.powi(years_to_retirement as i32);
    let future_monthly_expenses = cash_flow.monthly_expenses() * inflation_factor;
    let total_pension = retirement.total();

    if future_monthly_expenses <= 0.0 {
        return if total_pension > 0.0 { 100.0 } else { 0.0 };
    }

    let replacement_ratio = total_pension / future_monthly_expenses;
    (replacement_ratio / REPLACEMENT_RATIO_TARGET * 100.0).min(100.0)
}
