//! Daily health tip rotation
//!
//! Each pathway has seven tips; the tip shown on a given day is picked by the number
//! of days since the intervention, so the same day always yields the same tip.

use serde::{Deserialize, Serialize};

use crate::models::{CarePathway, RiskLevel};

/// Tip for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTipResult {
    pub icon: String,
    pub title: String,
    pub content: String,
    /// Empty unless the patient is at High or Critical risk
    pub urgency_note: String,
    pub day_number: i64,
    pub tip_category: String,
}

type Tip = (&'static str, &'static str, &'static str);

static HEALTH_TIPS: [[Tip; 7]; 5] = [
    // Minor Surgery
    [
        ("💧", "Hydration Tip", "Drink at least 8 glasses of water daily. Proper hydration speeds up wound healing and tissue repair by up to 30%."),
        ("🛌", "Rest Position", "Elevate the operated area above heart level when resting. This reduces swelling and improves blood circulation."),
        ("🥗", "Nutrition", "Eat protein-rich foods like eggs, dal, and chicken. Protein is the building block for tissue healing."),
        ("🌬️", "Breathing", "Practice deep belly breathing 5 times every hour. This prevents lung complications common after surgery."),
        ("🚶", "Walking", "Short walks of 5-10 minutes, 2-3 times daily, prevent blood clots and improve circulation."),
        ("🧴", "Wound Care", "Keep your wound clean and dry. Change dressings as instructed. Never touch wound with unwashed hands."),
        ("😴", "Sleep", "Sleep 7-9 hours nightly. Growth hormone released during sleep accelerates tissue repair."),
    ],
    // Orthopedic Surgery
    [
        ("🦵", "Leg Exercises", "Do ankle pumps every hour while resting — 20 pumps per session. This prevents dangerous blood clots (DVT)."),
        ("❄️", "Ice Therapy", "Apply ice pack for 20 minutes every 2 hours on swollen areas. Never apply directly on skin — use a cloth."),
        ("🔄", "Range of Motion", "Gently move your joint within pain-free range daily. Stiffness is the enemy of orthopedic recovery."),
        ("⚖️", "Weight Bearing", "Follow your doctor's weight-bearing instructions strictly. Premature loading can damage the repair."),
        ("💊", "Medication Timing", "Take anti-inflammatory medications with food, on schedule. Missing doses allows inflammation to return rapidly."),
        ("🪑", "Seating", "Avoid sitting in low chairs or soft sofas. Keep your hips at 90° or higher to protect joint repairs."),
        ("🧘", "Isometrics", "Tighten thigh muscles without moving the joint, hold 5 seconds, repeat 10 times. Maintains muscle tone safely."),
    ],
    // General Discharge
    [
        ("📋", "Follow-up", "Attend all scheduled follow-up appointments. 80% of complications are caught at routine check-ups."),
        ("🩺", "Vital Signs", "Monitor temperature daily. Temperature above 100.4°F for 2+ days needs immediate medical attention."),
        ("💊", "Medications", "Set phone alarms for every medication. Stopping antibiotics early creates antibiotic-resistant bacteria."),
        ("🥦", "Diet", "Eat colorful fruits and vegetables rich in Vitamin C and zinc — essential minerals for immune function and healing."),
        ("🚿", "Hygiene", "Shower instead of bathing to keep wounds dry. Pat — don't rub — the area dry after washing."),
        ("📞", "Emergency Signs", "Call your doctor immediately for: high fever, increasing pain, unusual discharge, or difficulty breathing."),
        ("🧠", "Mental Health", "Recovery affects mood. Talk to family, maintain a daily routine, and celebrate small improvements."),
    ],
    // Injury Recovery
    [
        ("🧊", "RICE Protocol", "Rest, Ice, Compression, Elevation — follow this for the first 48-72 hours after any activity-related pain spike."),
        ("🎽", "Compression", "Wear your compression bandage or brace as prescribed. It reduces swelling and provides joint stability."),
        ("⚡", "No Pain No Gain — MYTH", "During injury recovery, pain is a STOP signal, not motivation. Exercise within comfortable limits only."),
        ("🔥", "Heat vs Ice", "Use ice for first 72 hours (reduces swelling). Use heat after 72 hours (improves flexibility and blood flow)."),
        ("👟", "Footwear", "Wear supportive shoes even at home. Poor footwear puts extra stress on healing tendons and joints."),
        ("📐", "Posture", "Compensating for an injury changes your posture and creates new problems. Be conscious of how you move."),
        ("🏊", "Pool Therapy", "Swimming and water exercises are excellent for injury recovery — water reduces joint load by 90%."),
    ],
    // Stroke Rehab
    [
        ("🧠", "Neuroplasticity", "Your brain can rewire itself. Repeat movements 300-400 times daily — repetition builds new neural pathways."),
        ("🖐️", "Hand Exercises", "Squeeze a soft ball 20 times every hour. Fine motor recovery requires consistent, frequent stimulation."),
        ("🗣️", "Speech Practice", "Read aloud for 10 minutes daily. Narrate what you're doing. Speech recovery requires daily practice."),
        ("👁️", "Visual Exercises", "Track a moving object with your eyes for 2 minutes. Visual field recovery responds well to targeted exercise."),
        ("🎵", "Music Therapy", "Listen to rhythmic music while doing exercises. Music activates multiple brain regions and aids motor recovery."),
        ("🤝", "Family Support", "Include family in your rehab sessions. Emotional support is proven to improve stroke recovery outcomes."),
        ("⏰", "Consistency", "Short sessions 3-4 times daily beat one long session. Frequency matters more than duration in neuro-rehab."),
    ],
];

fn urgency_note(level: RiskLevel) -> &'static str {
    if !level.is_elevated() {
        ""
    } else if level == RiskLevel::Critical {
        "⚠️ Given your current critical status — please consult your doctor before attempting any activity."
    } else {
        "⚠️ Due to high risk status — take extra caution and rest more than usual today."
    }
}

/// Tip for `days_post` days into recovery
///
/// Unknown pathways rotate through the General Discharge tips. Negative day counts
/// wrap around instead of failing.
#[must_use]
pub fn daily_tip(care_pathway: &str, days_post: i64, risk_level: RiskLevel) -> DailyTipResult {
    let tips = &HEALTH_TIPS[CarePathway::resolve(care_pathway).index()];
    let index = days_post.rem_euclid(tips.len() as i64) as usize;
    let (icon, title, content) = tips[index];

    DailyTipResult {
        icon: icon.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        urgency_note: urgency_note(risk_level).to_string(),
        day_number: days_post,
        tip_category: care_pathway.to_string(),
    }
}
