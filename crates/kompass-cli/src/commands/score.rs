//! Scoring command implementations (score, recommend, sample)

use std::path::Path;

use anyhow::{Context, Result};

use kompass_core::{
    compute_scores, recommend, Pillar, Profile, ScoreCategory, Tier,
};

pub fn cmd_score(file: &Path, json: bool) -> Result<()> {
    let profile = Profile::from_json_file(file)
        .with_context(|| format!("Failed to load profile from {}", file.display()))?;
    let scores = compute_scores(&profile);

    if json {
        println!("{}", serde_json::to_string_pretty(&scores)?);
        return Ok(());
    }

    println!();
    println!("📊 Wellbeing Scores");
    println!("   ─────────────────────────────────────────────");
    println!(
        "   Overall: {:>3.0}/100 ({})",
        scores.overall,
        Tier::from_score(scores.overall)
    );
    println!();

    for pillar in Pillar::ALL {
        let pillar_category = match pillar {
            Pillar::FinancialBasis => ScoreCategory::FinancialBasis,
            Pillar::RiskProtection => ScoreCategory::RiskProtection,
            Pillar::AssetBase => ScoreCategory::AssetBase,
        };
        let pillar_score = scores.get(pillar_category);
        println!(
            "   {} ({:.0}/100, {})",
            pillar.display_name(),
            pillar_score,
            Tier::from_score(pillar_score)
        );

        for category in ScoreCategory::SUB_SCORES {
            if category.pillar() != pillar {
                continue;
            }
            let score = scores.get(category);
            println!(
                "     {:<22} {:>3.0}  ({})",
                category.display_name(),
                score,
                Tier::from_score(score)
            );
        }
        println!();
    }

    Ok(())
}

pub fn cmd_recommend(file: &Path, json: bool) -> Result<()> {
    let profile = Profile::from_json_file(file)
        .with_context(|| format!("Failed to load profile from {}", file.display()))?;
    let scores = compute_scores(&profile);
    let recommendations = recommend(&scores, &profile);

    if json {
        println!("{}", serde_json::to_string_pretty(&recommendations)?);
        return Ok(());
    }

    println!();
    println!("💡 Recommendations");
    println!("   ─────────────────────────────────────────────");

    if recommendations.is_empty() {
        println!("   ✅ Nothing to do — your financial situation looks excellent.");
        println!();
        return Ok(());
    }

    for rec in &recommendations {
        println!("   [{}] {}", rec.pillar.display_name(), rec.title);
        println!("       {}", rec.description);
        println!();
    }

    Ok(())
}

pub fn cmd_sample() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&Profile::sample())?);
    Ok(())
}
