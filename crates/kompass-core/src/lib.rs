//! Kompass Core Library
//!
//! Shared functionality for the Kompass financial wellbeing tool:
//! - Financial profile data model (the immutable input snapshot)
//! - Score calculator for sub-scores, pillar scores, and the overall score
//! - Status classifier mapping scores to qualitative tiers and theme colors
//! - Recommendation engine deriving prioritized advisories
//!
//! The whole engine is pure: identical profile in, identical scores and
//! recommendations out, with no state held between calls.

pub mod error;
pub mod profile;
pub mod recommend;
pub mod scoring;
pub mod status;

pub use error::{Error, Result};
pub use profile::{
    dependent_resets, AssetClass, AssetHolding, CashFlow, Debt, EmergencyDocuments, Gate,
    InsuranceCoverage, InvestmentPortfolio, Liquidity, PersonalData, Profile, RetirementIncome,
};
pub use recommend::{recommend, Recommendation};
pub use scoring::{compute_scores, ScoreSet};
pub use status::{status_color, Pillar, ScoreCategory, Tier};
