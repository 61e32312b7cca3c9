//! Rehab plan selection
//!
//! A plan is looked up by care pathway and risk tier, then overlaid with guidance for
//! the current recovery phase. Unknown pathways use the General Discharge plans.

pub mod phase;
pub mod plans;

use serde::{Deserialize, Serialize};

pub use phase::RecoveryPhase;

use crate::models::{CarePathway, RiskLevel};

/// Rehab plan for one patient on one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RehabPlan {
    pub exercises: Vec<String>,
    pub restrictions: Vec<String>,
    pub goals: String,
    pub monitoring: Vec<String>,
    pub diet: Vec<String>,
    pub lifestyle: Vec<String>,
    pub recovery_phase: String,
    pub phase_note: String,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// Select the plan for a pathway, tier and day count
#[must_use]
pub fn rehab_plan(care_pathway: &str, risk_level: RiskLevel, days_post: i64) -> RehabPlan {
    let pathway = CarePathway::resolve(care_pathway);
    let base = plans::template(pathway, risk_level);
    let phase = RecoveryPhase::from_days(days_post);

    RehabPlan {
        exercises: owned(base.exercises),
        restrictions: owned(base.restrictions),
        goals: base.goals.to_string(),
        monitoring: owned(plans::monitoring(risk_level)),
        diet: owned(phase.diet()),
        lifestyle: owned(phase.lifestyle()),
        recovery_phase: phase.label().to_string(),
        phase_note: phase.note().to_string(),
    }
}

/// Same as [`rehab_plan`] with the tier given as a label; unknown labels mean Low
#[must_use]
pub fn rehab_plan_for_label(care_pathway: &str, risk_label: &str, days_post: i64) -> RehabPlan {
    rehab_plan(care_pathway, RiskLevel::parse_or_low(risk_label), days_post)
}
