//! Declarative coverage checklists
//!
//! Each checklist item carries its weight, an optional applicability gate,
//! and a predicate reading the profile. The score calculator and the
//! recommendation engine both consume these tables, so an item's
//! applicability can never differ between the two.

use crate::profile::{Gate, Profile};

/// One row of a coverage checklist
pub struct ChecklistItem {
    /// Human-readable name, used when itemizing gaps in recommendations
    pub label: &'static str,
    /// Contribution to the achievable maximum when the item applies
    pub weight: u32,
    /// Circumstance gating the item; `None` means it always applies
    pub gate: Option<Gate>,
    /// Whether a missing item is itemized in recommendations
    pub essential: bool,
    /// Whether the profile covers this item
    pub covered: fn(&Profile) -> bool,
}

impl ChecklistItem {
    /// Whether this item counts toward numerator and denominator
    pub fn applies(&self, profile: &Profile) -> bool {
        self.gate
            .map_or(true, |gate| gate.holds(&profile.personal))
    }
}

/// Personal insurance checklist (health, income, liability, survivors)
pub const PERSONAL_INSURANCE: &[ChecklistItem] = &[
    ChecklistItem {
        label: "Health insurance",
        weight: 30,
        gate: None,
        essential: true,
        covered: |p| p.insurance.health,
    },
    ChecklistItem {
        label: "Disability insurance",
        weight: 30,
        gate: None,
        essential: true,
        covered: |p| p.insurance.disability,
    },
    ChecklistItem {
        label: "Personal liability insurance",
        weight: 20,
        gate: None,
        essential: true,
        covered: |p| p.insurance.personal_liability,
    },
    ChecklistItem {
        label: "Term life insurance",
        weight: 15,
        gate: Some(Gate::NotSingle),
        essential: true,
        covered: |p| p.insurance.term_life,
    },
    ChecklistItem {
        label: "Accident insurance",
        weight: 5,
        gate: None,
        essential: false,
        covered: |p| p.insurance.accident,
    },
];

/// Property insurance checklist (possessions and legal exposure)
pub const PROPERTY_INSURANCE: &[ChecklistItem] = &[
    ChecklistItem {
        label: "Personal liability insurance",
        weight: 35,
        gate: None,
        essential: true,
        covered: |p| p.insurance.personal_liability,
    },
    ChecklistItem {
        label: "Household contents insurance",
        weight: 20,
        gate: None,
        essential: true,
        covered: |p| p.insurance.household_contents,
    },
    ChecklistItem {
        label: "Buildings insurance",
        weight: 20,
        gate: Some(Gate::OwnsProperty),
        essential: true,
        covered: |p| p.insurance.buildings,
    },
    ChecklistItem {
        label: "Legal protection insurance",
        weight: 15,
        gate: None,
        essential: false,
        covered: |p| p.insurance.legal_protection,
    },
    ChecklistItem {
        label: "Motor liability insurance",
        weight: 10,
        gate: Some(Gate::OwnsCar),
        essential: true,
        covered: |p| p.insurance.motor_liability,
    },
];

/// Emergency document checklist; no gates, weights always sum to 100
pub const EMERGENCY_DOCUMENTS: &[ChecklistItem] = &[
    ChecklistItem {
        label: "Power of attorney",
        weight: 25,
        gate: None,
        essential: true,
        covered: |p| p.documents.power_of_attorney,
    },
    ChecklistItem {
        label: "Living will",
        weight: 20,
        gate: None,
        essential: true,
        covered: |p| p.documents.living_will,
    },
    ChecklistItem {
        label: "Care directive",
        weight: 20,
        gate: None,
        essential: true,
        covered: |p| p.documents.care_directive,
    },
    ChecklistItem {
        label: "Organized bank and insurance documents",
        weight: 20,
        gate: None,
        essential: true,
        covered: |p| p.documents.bank_documents_organized,
    },
    ChecklistItem {
        label: "Will or inheritance contract",
        weight: 10,
        gate: None,
        essential: true,
        covered: |p| p.documents.will,
    },
    ChecklistItem {
        label: "Emergency contact list",
        weight: 5,
        gate: None,
        essential: true,
        covered: |p| p.documents.emergency_contact_list,
    },
];

/// Normalized checklist score: achieved weight / applicable weight * 100
///
/// Items whose gate does not hold drop out of numerator and denominator
/// alike, so an inapplicable item never penalizes the score.
pub fn checklist_score(items: &[ChecklistItem], profile: &Profile) -> f64 {
    let mut achieved = 0u32;
    let mut applicable_max = 0u32;

    for item in items {
        if !item.applies(profile) {
            continue;
        }
        applicable_max += item.weight;
        if (item.covered)(profile) {
            achieved += item.weight;
        }
    }

    if applicable_max == 0 {
        0.0
    } else {
        f64::from(achieved) / f64::from(applicable_max) * 100.0
    }
}

/// Labels of applicable, essential items the profile does not cover
pub fn missing_essentials(items: &[ChecklistItem], profile: &Profile) -> Vec<&'static str> {
    items
        .iter()
        .filter(|item| item.essential && item.applies(profile) && !(item.covered)(profile))
        .map(|item| item.label)
        .collect()
}
