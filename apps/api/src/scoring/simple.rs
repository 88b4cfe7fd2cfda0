//! Legacy single-number readiness score, kept for backward compatibility
//! with the original dashboard widget. Ignores categories entirely:
//! `round((0.7 * match_ratio + 0.3 * min(hours/20, 1)) * 100)` over the
//! flattened required skills of all requested fields combined.

use crate::catalog::SkillCatalog;
use crate::models::category::SkillCategory;

/// Computes the legacy 0-100 score. Unknown fields contribute an empty
/// requirement list, matching the original behavior (this entry point
/// predates the NotFound-surfacing contract of the full scorer).
pub fn simple_score(
    user_skills: &[String],
    target_fields: &[String],
    weekly_learning_hours: u32,
    catalog: &SkillCatalog,
) -> u32 {
    let user_norm: Vec<String> = user_skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    let mut required_total = 0usize;
    let mut matched = 0usize;

    for field in target_fields {
        let Ok(entry) = catalog.lookup(field) else {
            continue;
        };
        for cat in SkillCategory::ALL {
            for req in entry.required_skills.get(cat) {
                required_total += 1;
                let req_norm = req.trim().to_lowercase();
                if user_norm
                    .iter()
                    .any(|u| u.contains(&req_norm) || req_norm.contains(u))
                {
                    matched += 1;
                }
            }
        }
    }

    let match_ratio = if required_total == 0 {
        0.0
    } else {
        matched as f64 / required_total as f64
    };
    let hours_boost = (weekly_learning_hours as f64 / 20.0).min(1.0);

    ((0.7 * match_ratio + 0.3 * hours_boost) * 100.0).round() as u32
}
