//! Job recommender: per target field, suggests entry-point job titles
//! when at least one user skill appears in the field's requirements.

use serde::{Deserialize, Serialize};

use crate::catalog::SkillCatalog;
use crate::errors::AppError;
use crate::models::category::SkillCategory;

/// Marker returned instead of job titles when no skill matched.
pub const TRAINING_NEEDED: &str = "Further training recommended (skill gap detected)";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldRecommendation {
    pub field: String,
    pub matched: bool,
    pub suggested_jobs: Vec<String>,
}

/// Recommends jobs for each requested field. Unlike the legacy simple
/// score, unknown fields fail the whole call.
pub fn recommend_jobs(
    user_skills: &[String],
    target_fields: &[String],
    catalog: &SkillCatalog,
) -> Result<Vec<FieldRecommendation>, AppError> {
    let user_norm: Vec<String> = user_skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    let mut recommendations = Vec::with_capacity(target_fields.len());

    for field in target_fields {
        let entry = catalog.lookup(field)?;
        let matched = SkillCategory::ALL.iter().any(|cat| {
            entry
                .required_skills
                .get(*cat)
                .iter()
                .any(|req| user_norm.iter().any(|u| *u == req.trim().to_lowercase()))
        });

        recommendations.push(FieldRecommendation {
            field: entry.field.clone(),
            matched,
            suggested_jobs: if matched {
                entry.example_jobs.clone()
            } else {
                vec![TRAINING_NEEDED.to_string()]
            },
        });
    }

    Ok(recommendations)
}
