//! User profile for a single readiness request. Constructed fresh per
//! request and discarded after the response is returned.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::category::CategoryMap;

/// How urgently the user wants to switch careers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CareerUrgency {
    NoRush,
    SixToTwelveMonths,
    ThreeToSixMonths,
    #[serde(rename = "ASAP")]
    Asap,
}

impl CareerUrgency {
    /// Multiplier applied to the bonus-adjusted score (via the learning
    /// factor). Higher urgency amplifies stated learning commitment.
    pub fn willingness_factor(&self) -> f64 {
        match self {
            CareerUrgency::NoRush => 0.8,
            CareerUrgency::SixToTwelveMonths => 1.0,
            CareerUrgency::ThreeToSixMonths => 1.2,
            CareerUrgency::Asap => 1.5,
        }
    }

    /// Multiplier applied to the estimated timeline. Deliberately a second,
    /// separate map from `willingness_factor`: urgency both amplifies the
    /// score and independently compresses the timeline. Do not collapse the
    /// two into one constant.
    pub fn timeline_adjustment(&self) -> f64 {
        match self {
            CareerUrgency::Asap => 0.7,
            CareerUrgency::ThreeToSixMonths => 0.8,
            CareerUrgency::SixToTwelveMonths => 1.0,
            CareerUrgency::NoRush => 1.3,
        }
    }
}

impl FromStr for CareerUrgency {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "NoRush" => Ok(CareerUrgency::NoRush),
            "SixToTwelveMonths" => Ok(CareerUrgency::SixToTwelveMonths),
            "ThreeToSixMonths" => Ok(CareerUrgency::ThreeToSixMonths),
            "ASAP" => Ok(CareerUrgency::Asap),
            other => Err(AppError::Validation(format!(
                "unknown career_urgency '{other}' (expected NoRush, SixToTwelveMonths, ThreeToSixMonths or ASAP)"
            ))),
        }
    }
}

/// Self-reported skills and context for one scoring request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Free-text skill strings, grouped into the four categories. Case and
    /// whitespace are normalized inside the matcher, not here.
    pub skills_by_category: CategoryMap<Vec<String>>,
    pub years_experience: u32,
    pub weekly_learning_hours: u32,
    pub career_urgency: CareerUrgency,
    /// Free-text current role, possibly empty. Used only for the
    /// role-relevance bonus.
    pub current_role: String,
}
