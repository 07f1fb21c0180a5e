//! Financial profile snapshot
//!
//! The profile is the engine's only input: an immutable snapshot of a
//! person's financial, insurance, and retirement situation, produced by an
//! external form layer on every edit. The engine never mutates it and holds
//! no state between computations.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A complete financial profile snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub personal: PersonalData,
    pub cash_flow: CashFlow,
    pub liquidity: Liquidity,
    pub debt: Debt,
    pub insurance: InsuranceCoverage,
    pub documents: EmergencyDocuments,
    pub portfolio: InvestmentPortfolio,
    pub retirement: RetirementIncome,
}

impl Profile {
    /// Load a profile from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// A representative profile, used by `kompass sample` and the test suite
    pub fn sample() -> Self {
        Self {
            personal: PersonalData {
                age: 46,
                is_single: false,
                owns_property: true,
                owns_car: true,
            },
            cash_flow: CashFlow {
                monthly_income: 2200.0,
                fixed_costs: 1050.0,
                variable_costs: 650.0,
            },
            liquidity: Liquidity {
                emergency_fund: 5100.0,
            },
            debt: Debt {
                overdraft_balance: 100.0,
                installment_loan_balance: 12000.0,
            },
            insurance: InsuranceCoverage {
                health: true,
                disability: false,
                personal_liability: true,
                term_life: false,
                accident: true,
                household_contents: true,
                buildings: true,
                legal_protection: true,
                motor_liability: true,
            },
            documents: EmergencyDocuments {
                power_of_attorney: true,
                living_will: true,
                care_directive: false,
                bank_documents_organized: true,
                will: false,
                emergency_contact_list: true,
            },
            portfolio: InvestmentPortfolio {
                equities: AssetHolding::default(),
                real_estate: AssetHolding {
                    held: true,
                    amount: 25000.0,
                },
                bonds: AssetHolding::default(),
                insurance_based: AssetHolding {
                    held: true,
                    amount: 18000.0,
                },
                bank_deposits: AssetHolding {
                    held: true,
                    amount: 12000.0,
                },
            },
            retirement: RetirementIncome {
                statutory_pension: 850.0,
                occupational_pension: 150.0,
                private_pension: 100.0,
            },
        }
    }
}

/// Personal circumstances that gate which checklist items apply
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PersonalData {
    /// Age in years
    pub age: u32,
    pub is_single: bool,
    pub owns_property: bool,
    pub owns_car: bool,
}

/// Monthly cash flow in € per month
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CashFlow {
    pub monthly_income: f64,
    pub fixed_costs: f64,
    pub variable_costs: f64,
}

impl CashFlow {
    /// Total monthly expenses (fixed + variable)
    pub fn monthly_expenses(&self) -> f64 {
        self.fixed_costs + self.variable_costs
    }
}

/// Liquid reserves in €
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Liquidity {
    pub emergency_fund: f64,
}

/// Outstanding debt balances in €
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Debt {
    pub overdraft_balance: f64,
    pub installment_loan_balance: f64,
}

impl Debt {
    pub fn total(&self) -> f64 {
        self.overdraft_balance + self.installment_loan_balance
    }
}

/// Which insurance policies are in place
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct InsuranceCoverage {
    pub health: bool,
    pub disability: bool,
    pub personal_liability: bool,
    pub term_life: bool,
    pub accident: bool,
    pub household_contents: bool,
    pub buildings: bool,
    pub legal_protection: bool,
    pub motor_liability: bool,
}

/// Which emergency documents are prepared
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EmergencyDocuments {
    pub power_of_attorney: bool,
    pub living_will: bool,
    pub care_directive: bool,
    pub bank_documents_organized: bool,
    pub will: bool,
    pub emergency_contact_list: bool,
}

/// Asset classes tracked in the investment portfolio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetClass {
    Equities,
    RealEstate,
    Bonds,
    InsuranceBased,
    BankDeposits,
}

impl AssetClass {
    pub const ALL: [AssetClass; 5] = [
        AssetClass::Equities,
        AssetClass::RealEstate,
        AssetClass::Bonds,
        AssetClass::InsuranceBased,
        AssetClass::BankDeposits,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equities => "equities",
            Self::RealEstate => "real_estate",
            Self::Bonds => "bonds",
            Self::InsuranceBased => "insurance_based",
            Self::BankDeposits => "bank_deposits",
        }
    }

    /// Human-readable name for reports and recommendations
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Equities => "Equities/ETFs",
            Self::RealEstate => "Real estate",
            Self::Bonds => "Bonds",
            Self::InsuranceBased => "Insurance-based products",
            Self::BankDeposits => "Bank deposits",
        }
    }
}

impl std::str::FromStr for AssetClass {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "equities" => Ok(Self::Equities),
            "real_estate" => Ok(Self::RealEstate),
            "bonds" => Ok(Self::Bonds),
            "insurance_based" => Ok(Self::InsuranceBased),
            "bank_deposits" => Ok(Self::BankDeposits),
            _ => Err(format!("Unknown asset class: {}", s)),
        }
    }
}

impl std::fmt::Display for AssetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One slot in the investment portfolio
///
/// `amount` is meaningless while `held` is false and counts as zero.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AssetHolding {
    pub held: bool,
    pub amount: f64,
}

impl AssetHolding {
    /// The amount that actually counts toward the portfolio total
    pub fn effective_amount(&self) -> f64 {
        if self.held {
            self.amount
        } else {
            0.0
        }
    }
}

/// Amounts held per asset class
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct InvestmentPortfolio {
    pub equities: AssetHolding,
    pub real_estate: AssetHolding,
    pub bonds: AssetHolding,
    pub insurance_based: AssetHolding,
    pub bank_deposits: AssetHolding,
}

impl InvestmentPortfolio {
    pub fn holding(&self, class: AssetClass) -> AssetHolding {
        match class {
            AssetClass::Equities => self.equities,
            AssetClass::RealEstate => self.real_estate,
            AssetClass::Bonds => self.bonds,
            AssetClass::InsuranceBased => self.insurance_based,
            AssetClass::BankDeposits => self.bank_deposits,
        }
    }

    /// Sum of effective amounts across all asset classes
    pub fn total_invested(&self) -> f64 {
        AssetClass::ALL
            .iter()
            .map(|class| self.holding(*class).effective_amount())
            .sum()
    }
}

/// Expected monthly retirement income in € per month
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RetirementIncome {
    pub statutory_pension: f64,
    pub occupational_pension: f64,
    pub private_pension: f64,
}

impl RetirementIncome {
    pub fn total(&self) -> f64 {
        self.statutory_pension + self.occupational_pension + self.private_pension
    }
}

/// A personal circumstance that gates whether a field applies
///
/// The same gates drive the scoring checklists (applicability predicates)
/// and the form layer's cascading resets, so the two cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gate {
    /// Applies only to people who are not single
    NotSingle,
    OwnsProperty,
    OwnsCar,
}

impl Gate {
    pub fn holds(&self, personal: &PersonalData) -> bool {
        match self {
            Gate::NotSingle => !personal.is_single,
            Gate::OwnsProperty => personal.owns_property,
            Gate::OwnsCar => personal.owns_car,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gate::NotSingle => "not_single",
            Gate::OwnsProperty => "owns_property",
            Gate::OwnsCar => "owns_car",
        }
    }
}

impl std::fmt::Display for Gate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fields a form layer must clear when the gating circumstance is unchecked
///
/// Field names are the serialized profile paths. Asset amounts are gated by
/// their own `held` flag and zeroed via [`AssetHolding::effective_amount`],
/// so they need no entry here.
pub fn dependent_resets() -> &'static [(Gate, &'static str)] {
    &[
        (Gate::NotSingle, "insurance.term_life"),
        (Gate::OwnsProperty, "insurance.buildings"),
        (Gate::OwnsCar, "insurance.motor_liability"),
    ]
}
