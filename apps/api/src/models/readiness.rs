//! Output of the readiness scoring pipeline for one target field.

use serde::{Deserialize, Serialize};

use crate::models::category::CategoryMap;

/// Qualitative readiness band derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadinessLevel {
    Beginner,
    Developing,
    AlmostReady,
    Ready,
}

impl ReadinessLevel {
    /// Thresholds are inclusive on the upper level: exactly 40 is
    /// Developing, exactly 60 is AlmostReady, exactly 80 is Ready.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ReadinessLevel::Ready
        } else if score >= 60.0 {
            ReadinessLevel::AlmostReady
        } else if score >= 40.0 {
            ReadinessLevel::Developing
        } else {
            ReadinessLevel::Beginner
        }
    }

    /// Fixed next-step guidance per level, rendered by the UI as-is.
    pub fn action_needed(&self) -> &'static str {
        match self {
            ReadinessLevel::Beginner => {
                "Build foundational skills first: start with the core skills list before anything else."
            }
            ReadinessLevel::Developing => {
                "Follow a structured learning plan to close the largest category gaps."
            }
            ReadinessLevel::AlmostReady => {
                "Close the remaining gaps and start applying to transitional roles."
            }
            ReadinessLevel::Ready => "Start applying and interviewing now.",
        }
    }
}

/// One result per (profile, target field) pair. Results for multiple
/// fields are independent; callers must not rely on their order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessResult {
    pub field: String,
    /// Final 0-100 score, rounded to one decimal.
    pub overall_score: f64,
    /// Pre-bonus weighted category average. Also drives the timeline.
    pub base_score: f64,
    pub category_scores: CategoryMap<f64>,
    pub matched_skills: CategoryMap<Vec<String>>,
    pub missing_skills: CategoryMap<Vec<String>>,
    pub readiness_level: ReadinessLevel,
    pub action_needed: String,
    /// Estimated months to transition, floored at 2.0.
    pub estimated_timeline_months: f64,
    pub experience_bonus: f64,
    pub role_relevance_bonus: f64,
    pub learning_factor: f64,
    /// Share of all required skills (across categories) with any match.
    pub completion_percentage: f64,
}
