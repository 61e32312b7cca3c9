//! Static rehab plan table: five care pathways by four risk tiers

use crate::models::{CarePathway, N_RISK_LEVELS, RiskLevel};

/// One cell of the plan table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanTemplate {
    pub exercises: &'static [&'static str],
    pub restrictions: &'static [&'static str],
    pub goals: &'static str,
}

const fn cell(
    exercises: &'static [&'static str],
    restrictions: &'static [&'static str],
    goals: &'static str,
) -> PlanTemplate {
    PlanTemplate {
        exercises,
        restrictions,
        goals,
    }
}

/// Indexed by [`CarePathway::index`] then [`RiskLevel::index`]
static REHAB_PLANS: [[PlanTemplate; N_RISK_LEVELS]; 5] = [
    // Minor Surgery
    [
        cell(
            &[
                "Deep breathing exercises — 10 reps × 3 sets",
                "Gentle ankle circles — 15 reps each side",
                "Seated leg raises — 10 reps × 2 sets",
                "Short walks (5-10 minutes) twice daily",
            ],
            &["Avoid heavy lifting > 5kg", "No strenuous activity"],
            "Regain baseline mobility within 1–2 weeks",
        ),
        cell(
            &[
                "Bed-based breathing exercises only",
                "Gentle foot pumps — 20 reps hourly",
                "Passive range of motion with assistance",
            ],
            &["Rest primarily", "Elevate affected area", "Ice packs 20min every 2hrs"],
            "Reduce inflammation before progressing",
        ),
        cell(
            &["Rest only — consult physiotherapist before any exercise"],
            &["Strict rest", "No movement of affected area without guidance"],
            "Stabilize condition — contact your doctor",
        ),
        cell(
            &["STOP all exercise — seek emergency medical attention"],
            &["Immediate medical consultation required"],
            "Emergency evaluation needed",
        ),
    ],
    // Orthopedic Surgery
    [
        cell(
            &[
                "Quadriceps sets — 10 reps × 3 sets",
                "Straight leg raises — 10 reps × 3 sets",
                "Heel slides — 15 reps × 2 sets",
                "Standing balance (with support) — 30 sec × 3",
                "Stair climbing practice with railing",
            ],
            &[
                "Weight bear as tolerated",
                "No deep bending > 90°",
                "Use walker/crutches as prescribed",
            ],
            "Restore joint range of motion and strength",
        ),
        cell(
            &[
                "Isometric quad contractions only",
                "Ankle pumps — 20 reps every hour",
                "Gentle ROM within pain-free range only",
            ],
            &["Elevate limb", "Ice 20min/2hrs", "Limit weight bearing"],
            "Control pain and swelling before progressing",
        ),
        cell(
            &["Pause exercise program — reassess with physiotherapist"],
            &["Non-weight bearing", "Splint/brace if available"],
            "Medical review required within 24 hours",
        ),
        cell(
            &["IMMEDIATE medical attention required"],
            &["Call emergency services or go to ER"],
            "Possible complication — do not delay",
        ),
    ],
    // General Discharge
    [
        cell(
            &[
                "Breathing exercises — 5 min, 3× daily",
                "Gentle walks increasing by 5 min each day",
                "Light stretching of major muscle groups",
                "Posture correction exercises",
            ],
            &["Avoid fatigue", "Stay hydrated", "Follow dietary guidelines"],
            "Gradual return to daily activities over 2–4 weeks",
        ),
        cell(
            &[
                "Seated breathing exercises only",
                "Gentle range of motion while seated",
            ],
            &["Rest primarily", "Monitor vitals", "Increase fluids"],
            "Stabilize and monitor closely",
        ),
        cell(
            &["Bed rest — no exercise"],
            &["Contact primary care physician today"],
            "Urgent medical review",
        ),
        cell(
            &["Seek emergency care immediately"],
            &["Call ambulance or go to nearest ER"],
            "Emergency evaluation",
        ),
    ],
    // Injury Recovery
    [
        cell(
            &[
                "RICE protocol (Rest, Ice, Compression, Elevation)",
                "Gentle ROM exercises within pain-free range",
                "Progressive strengthening — resistance band exercises",
                "Proprioception training — balance board (week 2+)",
            ],
            &["Avoid re-injury", "Tape/brace support", "Gradual return to sport"],
            "Full functional recovery in 3–8 weeks",
        ),
        cell(
            &[
                "Continue RICE protocol",
                "Gentle stretching only",
                "No strengthening until pain reduces",
            ],
            &["Complete rest from activity", "Ice every 2 hours"],
            "Reduce acute inflammation",
        ),
        cell(
            &["Rest — possible re-injury or complication"],
            &["Imaging may be required — visit clinic"],
            "Rule out fracture or tendon damage",
        ),
        cell(
            &["Immediate medical evaluation"],
            &["Do not move injury — immobilize and seek ER"],
            "Emergency assessment required",
        ),
    ],
    // Stroke Rehab
    [
        cell(
            &[
                "Mirror therapy — 15 min daily",
                "Hand grip exercises with therapy putty",
                "Seated marching — 2 min × 3 sets",
                "Speech and word recall exercises",
                "Fine motor tasks — buttoning, picking objects",
            ],
            &[
                "Supervision required for all exercises",
                "Avoid fatigue",
                "Fall prevention protocol",
            ],
            "Neuroplasticity training — rebuild motor pathways",
        ),
        cell(
            &[
                "Passive ROM only with caregiver assistance",
                "Breathing exercises",
                "Visual tracking exercises",
            ],
            &["Bed rest", "Supervision at all times"],
            "Stabilize before progressing rehab",
        ),
        cell(
            &["Pause rehab program"],
            &["Neurologist review required urgently"],
            "Reassess neurological status",
        ),
        cell(
            &["Emergency services — possible secondary stroke"],
            &["FAST protocol: Face drooping, Arm weakness, Speech difficulty, Time to call emergency"],
            "Immediate emergency evaluation",
        ),
    ],
];

/// Monitoring checklist per risk tier
static MONITORING: [&[&str]; N_RISK_LEVELS] = [
    &[
        "Log symptoms once daily",
        "Check temperature each morning",
        "Inspect the wound when changing dressings",
    ],
    &[
        "Check temperature twice daily",
        "Track pain and swelling every evening",
        "Call your doctor if symptoms persist beyond 48 hours",
    ],
    &[
        "Check temperature every 4 hours",
        "Have someone stay with you today",
        "Arrange a medical review within 24 hours",
    ],
    &[
        "Do not wait for the next daily log",
        "Keep your phone within reach",
        "Bring your medication list to the emergency department",
    ],
];

/// Plan cell for a pathway and tier
#[must_use]
pub fn template(pathway: CarePathway, level: RiskLevel) -> &'static PlanTemplate {
    &REHAB_PLANS[pathway.index()][level.index()]
}

/// Monitoring checklist for a tier
#[must_use]
pub fn monitoring(level: RiskLevel) -> &'static [&'static str] {
    MONITORING[level.index()]
}
