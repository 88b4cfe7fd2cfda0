//! Score Aggregator — combines the four category matches into the final
//! readiness score, level and timeline. Pure function of its inputs; each
//! step's output is fixed before the next runs.

use crate::catalog::SkillCatalogEntry;
use crate::models::category::{CategoryMap, SkillCategory};
use crate::models::profile::UserProfile;
use crate::models::readiness::{ReadinessLevel, ReadinessResult};
use crate::scoring::matcher::match_category;

/// Fixed weights combining the four category scores into the base score.
/// Independent of the per-field catalog weights; the two compose
/// multiplicatively. Must sum to 1.0.
const AGGREGATION_WEIGHTS: CategoryMap<f64> = CategoryMap {
    core_skills: 0.4,
    tools: 0.25,
    soft_skills: 0.15,
    certifications: 0.2,
};

/// Raw experience bonus cap, applied before the difficulty divisor.
const EXPERIENCE_BONUS_CAP: f64 = 20.0;
const EXPERIENCE_POINTS_PER_YEAR: f64 = 3.0;
const ROLE_RELEVANCE_BONUS: f64 = 10.0;
const HOURS_FACTOR_DENOMINATOR: f64 = 20.0;
const HOURS_FACTOR_CAP: f64 = 1.5;

/// Floor applied to the learning factor only when dividing for the
/// timeline, so zero commitment yields a long-but-finite estimate.
const MIN_TIMELINE_PACE: f64 = 0.1;
const MIN_TIMELINE_MONTHS: f64 = 2.0;
const MIN_BASE_MONTHS: f64 = 3.0;
const SKILL_GAP_MONTHS_DIVISOR: f64 = 15.0;

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Scores one user profile against one catalog field.
pub fn score_readiness(profile: &UserProfile, entry: &SkillCatalogEntry) -> ReadinessResult {
    // Step 1: per-category matching, with the catalog weight applied. The
    // weight is in (0, 1] so it can only reduce the raw match percentage.
    let mut category_scores = CategoryMap::<f64>::default();
    let mut matched_skills = CategoryMap::<Vec<String>>::default();
    let mut missing_skills = CategoryMap::<Vec<String>>::default();
    let mut total_required = 0usize;
    let mut total_matched = 0usize;

    for cat in SkillCategory::ALL {
        let outcome = match_category(
            profile.skills_by_category.get(cat),
            entry.required_skills.get(cat),
        );
        *category_scores.get_mut(cat) = outcome.score * entry.category_weights.get(cat);
        total_required += entry.required_skills.get(cat).len();
        total_matched += outcome.matched.len();
        *matched_skills.get_mut(cat) = outcome.matched;
        *missing_skills.get_mut(cat) = outcome.missing;
    }

    // Step 2: weighted base score.
    let base: f64 = SkillCategory::ALL
        .iter()
        .map(|cat| category_scores.get(*cat) * AGGREGATION_WEIGHTS.get(*cat))
        .sum();

    // Step 3: experience bonus, capped before the difficulty divisor so
    // harder fields always yield a smaller bonus for the same experience.
    let experience_bonus = (profile.years_experience as f64 * EXPERIENCE_POINTS_PER_YEAR)
        .min(EXPERIENCE_BONUS_CAP)
        / entry.difficulty.experience_divisor();

    // Step 4: flat role-relevance bonus, at most once per field.
    let current_role = profile.current_role.to_lowercase();
    let role_relevance_bonus = if entry
        .role_keywords
        .iter()
        .any(|kw| current_role.contains(&kw.to_lowercase()))
    {
        ROLE_RELEVANCE_BONUS
    } else {
        0.0
    };

    // Step 5: learning factor = hours factor * urgency willingness.
    let hours_factor =
        (profile.weekly_learning_hours as f64 / HOURS_FACTOR_DENOMINATOR).min(HOURS_FACTOR_CAP);
    let learning_factor = hours_factor * profile.career_urgency.willingness_factor();

    // Step 6: the learning factor multiplies the bonus-adjusted score, not
    // just the base. Low commitment pulls a high base down; high commitment
    // pushes a low base up. Clamped to 100.
    let adjusted = base + experience_bonus + role_relevance_bonus;
    let final_score = (adjusted * learning_factor).min(100.0);

    // Step 7: readiness level from the final score.
    let readiness_level = ReadinessLevel::from_score(final_score);

    // Step 8: timeline from the pre-bonus base, compressed by the second
    // urgency map. The pace floor keeps a zero learning factor from
    // producing an infinite estimate.
    let skill_gap = 100.0 - base;
    let base_months = (skill_gap / SKILL_GAP_MONTHS_DIVISOR).max(MIN_BASE_MONTHS);
    let pace = learning_factor.max(MIN_TIMELINE_PACE);
    let estimated_timeline_months = ((base_months / pace)
        * profile.career_urgency.timeline_adjustment())
    .max(MIN_TIMELINE_MONTHS);

    let completion_percentage = if total_required == 0 {
        0.0
    } else {
        total_matched as f64 / total_required as f64 * 100.0
    };

    ReadinessResult {
        field: entry.field.clone(),
        overall_score: round1(final_score),
        base_score: round1(base),
        category_scores,
        matched_skills,
        missing_skills,
        readiness_level,
        action_needed: readiness_level.action_needed().to_string(),
        estimated_timeline_months: round1(estimated_timeline_months),
        experience_bonus: round1(experience_bonus),
        role_relevance_bonus,
        learning_factor: round1(learning_factor),
        completion_percentage: round1(completion_percentage),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{default_category_weights, Difficulty};
    use crate::models::profile::CareerUrgency;

    fn v(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn test_entry(difficulty: Difficulty) -> SkillCatalogEntry {
        SkillCatalogEntry {
            field: "Artificial Intelligence".to_string(),
            required_skills: CategoryMap {
                core_skills: v(&["Python", "SQL", "Machine Learning"]),
                tools: v(&["TensorFlow", "Pandas"]),
                soft_skills: v(&["Communication"]),
                certifications: v(&["AWS Machine Learning Specialty"]),
            },
            category_weights: default_category_weights(),
            difficulty,
            role_keywords: v(&["data", "research"]),
            example_jobs: v(&["Data Analyst"]),
        }
    }

    fn profile_with_all_core() -> UserProfile {
        UserProfile {
            skills_by_category: CategoryMap {
                core_skills: v(&["python", "sql", "machine learning"]),
                tools: vec![],
                soft_skills: vec![],
                certifications: vec![],
            },
            years_experience: 0,
            weekly_learning_hours: 20,
            career_urgency: CareerUrgency::SixToTwelveMonths,
            current_role: String::new(),
        }
    }

    #[test]
    fn test_scenario_a_full_core_only() {
        let result = score_readiness(&profile_with_all_core(), &test_entry(Difficulty::Hard));
        assert_eq!(result.category_scores.core_skills, 100.0);
        assert!((result.base_score - 40.0).abs() < 0.2, "base {}", result.base_score);
        assert_eq!(result.experience_bonus, 0.0);
        assert_eq!(result.role_relevance_bonus, 0.0);
        assert_eq!(result.learning_factor, 1.0);
        assert!((result.overall_score - 40.0).abs() < 0.2);
        assert_eq!(result.readiness_level, ReadinessLevel::Developing);
    }

    #[test]
    fn test_scenario_b_experience_bonus_on_easy_field() {
        let mut profile = profile_with_all_core();
        profile.years_experience = 10;
        let result = score_readiness(&profile, &test_entry(Difficulty::Easy));
        assert_eq!(result.experience_bonus, 20.0); // min(30, 20) / 1.0
        assert!((result.overall_score - 60.0).abs() < 0.2);
        assert_eq!(result.readiness_level, ReadinessLevel::AlmostReady);
    }

    #[test]
    fn test_scenario_c_zero_learning_factor_zeroes_score() {
        let mut profile = profile_with_all_core();
        profile.weekly_learning_hours = 0;
        profile.career_urgency = CareerUrgency::NoRush;
        let result = score_readiness(&profile, &test_entry(Difficulty::Hard));
        assert_eq!(result.learning_factor, 0.0);
        assert_eq!(result.overall_score, 0.0);
        // The timeline stays finite and above the floor.
        assert!(result.estimated_timeline_months >= 2.0);
        assert!(result.estimated_timeline_months.is_finite());
    }

    #[test]
    fn test_difficulty_discounts_experience_bonus() {
        let mut profile = profile_with_all_core();
        profile.years_experience = 10;
        let easy = score_readiness(&profile, &test_entry(Difficulty::Easy));
        let very_hard = score_readiness(&profile, &test_entry(Difficulty::VeryHard));
        assert_eq!(easy.experience_bonus, 20.0);
        assert_eq!(very_hard.experience_bonus, 10.0);
    }

    #[test]
    fn test_role_relevance_bonus_is_flat_ten() {
        let mut profile = profile_with_all_core();
        // Two keywords match; the bonus is still added once.
        profile.current_role = "Data Research Assistant".to_string();
        let result = score_readiness(&profile, &test_entry(Difficulty::Hard));
        assert_eq!(result.role_relevance_bonus, 10.0);
    }

    #[test]
    fn test_empty_category_contributes_zero_regardless_of_weight() {
        let mut entry = test_entry(Difficulty::Hard);
        entry.required_skills.certifications = vec![];
        let result = score_readiness(&profile_with_all_core(), &entry);
        assert_eq!(result.category_scores.certifications, 0.0);
        // Base is unchanged from scenario A: certifications contributed 0
        // there too (no user certs), and an empty list cannot contribute.
        assert!((result.base_score - 40.0).abs() < 0.2);
    }

    #[test]
    fn test_bounds_hold_for_a_maximal_profile() {
        let entry = test_entry(Difficulty::Easy);
        let profile = UserProfile {
            skills_by_category: entry.required_skills.clone(),
            years_experience: 40,
            weekly_learning_hours: 60,
            career_urgency: CareerUrgency::Asap,
            current_role: "Senior Data Engineer".to_string(),
        };
        let result = score_readiness(&profile, &entry);
        assert!(result.overall_score <= 100.0);
        assert!(result.overall_score >= 0.0);
        assert!(result.estimated_timeline_months >= 2.0);
        assert_eq!(result.readiness_level, ReadinessLevel::Ready);
        assert_eq!(result.completion_percentage, 100.0);
    }

    #[test]
    fn test_timeline_floor_at_two_months() {
        let entry = test_entry(Difficulty::Easy);
        let profile = UserProfile {
            skills_by_category: entry.required_skills.clone(),
            years_experience: 10,
            weekly_learning_hours: 40,
            career_urgency: CareerUrgency::Asap,
            current_role: String::new(),
        };
        // base_months bottoms out at 3; 3 / 2.25 * 0.7 < 2.
        let result = score_readiness(&profile, &entry);
        assert_eq!(result.estimated_timeline_months, 2.0);
    }

    #[test]
    fn test_adding_a_missing_skill_never_decreases_score() {
        let entry = test_entry(Difficulty::Hard);
        let mut profile = profile_with_all_core();
        profile.skills_by_category.core_skills = v(&["python", "sql"]);
        let before = score_readiness(&profile, &entry);
        assert!(before
            .missing_skills
            .core_skills
            .contains(&"Machine Learning".to_string()));

        profile
            .skills_by_category
            .core_skills
            .push("machine learning".to_string());
        let after = score_readiness(&profile, &entry);
        assert!(after.overall_score >= before.overall_score);
    }

    #[test]
    fn test_identical_inputs_yield_identical_results() {
        let entry = test_entry(Difficulty::Hard);
        let profile = profile_with_all_core();
        let first = score_readiness(&profile, &entry);
        let second = score_readiness(&profile, &entry);
        assert_eq!(first, second);
    }

    #[test]
    fn test_urgency_compresses_timeline_independently_of_factor() {
        let entry = test_entry(Difficulty::Hard);
        let mut asap = profile_with_all_core();
        asap.career_urgency = CareerUrgency::Asap;
        let mut no_rush = profile_with_all_core();
        no_rush.career_urgency = CareerUrgency::NoRush;

        let fast = score_readiness(&asap, &entry);
        let slow = score_readiness(&no_rush, &entry);
        assert!(fast.estimated_timeline_months < slow.estimated_timeline_months);
    }

    #[test]
    fn test_learning_factor_multiplies_bonuses_too() {
        // With 40 hours and ASAP the factor is 1.5 * 1.5 = 2.25; a modest
        // base plus bonuses lands well above the unscaled sum.
        let entry = test_entry(Difficulty::Easy);
        let profile = UserProfile {
            skills_by_category: CategoryMap {
                core_skills: v(&["python"]),
                tools: vec![],
                soft_skills: vec![],
                certifications: vec![],
            },
            years_experience: 7,
            weekly_learning_hours: 40,
            career_urgency: CareerUrgency::Asap,
            current_role: "data analyst".to_string(),
        };
        let result = score_readiness(&profile, &entry);
        // base = (100/3) * 0.4 ≈ 13.3; bonuses = 20 + 10; 43.3 * 2.25 ≈ 97.5
        assert!((result.overall_score - 97.5).abs() < 0.5, "{}", result.overall_score);
    }
}
