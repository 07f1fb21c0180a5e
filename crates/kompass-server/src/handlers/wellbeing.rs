//! Wellbeing scoring handlers

use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

use crate::AppError;
use kompass_core::{
    compute_scores, recommend, status_color, Pillar, Profile, Recommendation, ScoreCategory,
    ScoreSet, Tier,
};

/// Query parameters for status classification
#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    /// Raw score to classify
    pub score: f64,
    /// Optional category tag; pillar identity overrides tier coloring
    pub category: Option<String>,
}

/// Classification result for a single score
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub score: f64,
    pub tier: Tier,
    pub color: &'static str,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// One pillar gauge for the dashboard
#[derive(Debug, Serialize)]
pub struct PillarEntry {
    pub pillar: Pillar,
    pub label: &'static str,
    pub score: f64,
    pub tier: Tier,
    pub color: &'static str,
}

/// One sub-score bar for the detail chart
#[derive(Debug, Serialize)]
pub struct BreakdownEntry {
    pub category: ScoreCategory,
    pub label: &'static str,
    pub pillar: Pillar,
    pub score: f64,
    pub tier: Tier,
    pub color: &'static str,
}

/// Chart-ready wellbeing report
#[derive(Debug, Serialize)]
pub struct WellbeingReport {
    pub scores: ScoreSet,
    pub overall_tier: Tier,
    pub overall_color: &'static str,
    pub pillars: Vec<PillarEntry>,
    pub breakdown: Vec<BreakdownEntry>,
    pub recommendations: Vec<Recommendation>,
}

/// GET /api/health - Liveness probe
pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// GET /api/status - Classify a raw score
///
/// With a category tag, the color is the owning pillar's fixed theme color;
/// without one, the color follows the tier breakpoints.
pub async fn get_status(
    Query(params): Query<StatusQuery>,
) -> Result<Json<StatusResponse>, AppError> {
    let category = params
        .category
        .as_deref()
        .map(|s| s.parse::<ScoreCategory>())
        .transpose()
        .map_err(|e| AppError::bad_request(&e))?;

    Ok(Json(StatusResponse {
        score: params.score,
        tier: Tier::from_score(params.score),
        color: status_color(params.score, category),
    }))
}

/// POST /api/score - Compute the raw score set for a profile
pub async fn compute_score(Json(profile): Json<Profile>) -> Json<ScoreSet> {
    Json(compute_scores(&profile))
}

/// POST /api/recommendations - Derive advisories for a profile
pub async fn compute_recommendations(Json(profile): Json<Profile>) -> Json<Vec<Recommendation>> {
    let scores = compute_scores(&profile);
    Json(recommend(&scores, &profile))
}

/// POST /api/report - Full chart-ready report for a profile
///
/// Bundles the score set with gauge and bar-chart entries (theme colors,
/// tiers) and the recommendation list, so a frontend needs one round trip
/// per profile edit.
pub async fn compute_report(Json(profile): Json<Profile>) -> Json<WellbeingReport> {
    let scores = compute_scores(&profile);
    let recommendations = recommend(&scores, &profile);

    let pillars = Pillar::ALL
        .iter()
        .map(|pillar| {
            let category = match pillar {
                Pillar::FinancialBasis => ScoreCategory::FinancialBasis,
                Pillar::RiskProtection => ScoreCategory::RiskProtection,
                Pillar::AssetBase => ScoreCategory::AssetBase,
            };
            let score = scores.get(category);
            PillarEntry {
                pillar: *pillar,
                label: pillar.display_name(),
                score,
                tier: Tier::from_score(score),
                color: pillar.theme_color(),
            }
        })
        .collect();

    let breakdown = ScoreCategory::SUB_SCORES
        .iter()
        .map(|category| {
            let score = scores.get(*category);
            BreakdownEntry {
                category: *category,
                label: category.display_name(),
                pillar: category.pillar(),
                score,
                tier: Tier::from_score(score),
                color: status_color(score, Some(*category)),
            }
        })
        .collect();

    Json(WellbeingReport {
        scores,
        overall_tier: Tier::from_score(scores.overall),
        overall_color: status_color(scores.overall, None),
        pillars,
        breakdown,
        recommendations,
    })
}
