//! Skill Catalog — the static, per-field table of required skills,
//! category weights and difficulty. Built once at startup, shared via
//! `Arc` in `AppState`, never mutated afterwards.

pub mod data;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::category::CategoryMap;

/// How hard a field is to break into. Scales the experience bonus
/// inversely: harder fields discount the same years of experience more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    VeryHard,
}

impl Difficulty {
    /// Divisor applied to the capped raw experience bonus.
    pub fn experience_divisor(&self) -> f64 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Medium => 1.2,
            Difficulty::Hard => 1.5,
            Difficulty::VeryHard => 2.0,
        }
    }
}

impl FromStr for Difficulty {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Easy" => Ok(Difficulty::Easy),
            "Medium" => Ok(Difficulty::Medium),
            "Hard" => Ok(Difficulty::Hard),
            "VeryHard" => Ok(Difficulty::VeryHard),
            other => Err(AppError::Validation(format!(
                "unknown difficulty '{other}' (expected Easy, Medium, Hard or VeryHard)"
            ))),
        }
    }
}

/// One career field's requirements. All four category lists are always
/// present; an empty list simply contributes zero to the weighted base.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCatalogEntry {
    pub field: String,
    pub required_skills: CategoryMap<Vec<String>>,
    /// Per-category multiplier in (0, 1], applied to the raw match
    /// percentage before aggregation.
    pub category_weights: CategoryMap<f64>,
    pub difficulty: Difficulty,
    /// Short keyword list checked against the user's current role for the
    /// flat role-relevance bonus.
    pub role_keywords: Vec<String>,
    /// Entry-point job titles surfaced by the recommender.
    pub example_jobs: Vec<String>,
}

/// Default per-category weights used by every field unless overridden.
pub fn default_category_weights() -> CategoryMap<f64> {
    CategoryMap {
        core_skills: 1.0,
        tools: 0.8,
        soft_skills: 0.6,
        certifications: 0.9,
    }
}

/// Immutable lookup table over all supported career fields.
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    entries: Vec<SkillCatalogEntry>,
}

impl SkillCatalog {
    pub fn new(entries: Vec<SkillCatalogEntry>) -> Self {
        Self { entries }
    }

    /// Case-insensitive field lookup. An empty name is a validation error;
    /// an unknown name is surfaced as NotFound, never silently defaulted.
    pub fn lookup(&self, field: &str) -> Result<&SkillCatalogEntry, AppError> {
        let field = field.trim();
        if field.is_empty() {
            return Err(AppError::Validation(
                "field name cannot be empty".to_string(),
            ));
        }
        self.entries
            .iter()
            .find(|e| e.field.eq_ignore_ascii_case(field))
            .ok_or_else(|| AppError::NotFound(format!("career field '{field}' is not recognized")))
    }

    pub fn entries(&self) -> &[SkillCatalogEntry] {
        &self.entries
    }
}
