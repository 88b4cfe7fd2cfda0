//! Category Matcher — compares the user's skills in one category against
//! a field's required skills for the same category.
//!
//! A required skill is a direct match (weight 1.0) when its normalized
//! form is exactly present in the user's list, and a partial match
//! (weight 0.5) when either normalized form is a substring of the other
//! and the user skill was not already claimed by a direct match. Partial
//! matching is a deliberately blunt heuristic: short skills can match
//! unrelated longer ones. Kept as-is rather than swapping in a smarter
//! similarity measure.

/// Outcome of matching one category. `matched`/`missing` carry the
/// catalog's original spelling for display fidelity.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryMatch {
    /// 0-100 match percentage.
    pub score: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl CategoryMatch {
    fn empty() -> Self {
        CategoryMatch {
            score: 0.0,
            matched: Vec::new(),
            missing: Vec::new(),
        }
    }
}

fn normalize(skill: &str) -> String {
    skill.trim().to_lowercase()
}

/// Matches user skills against required skills for one category.
///
/// An empty requirement list scores 0, not 100: absence of a requirement
/// means the category is inapplicable and contributes nothing upstream.
/// Each required skill contributes at most once.
pub fn match_category(user_skills: &[String], required: &[String]) -> CategoryMatch {
    if required.is_empty() {
        return CategoryMatch::empty();
    }

    let user_norm: Vec<String> = user_skills.iter().map(|s| normalize(s)).collect();
    let mut consumed = vec![false; user_norm.len()];

    let mut direct_hit = vec![false; required.len()];
    let mut direct_count = 0usize;
    let mut partial_count = 0usize;
    let mut matched = Vec::new();
    let mut missing = Vec::new();

    // Pass 1: direct matches claim user skills so a partial match cannot
    // reuse them.
    for (ri, req) in required.iter().enumerate() {
        let req_norm = normalize(req);
        if req_norm.is_empty() {
            continue;
        }
        if let Some(ui) = user_norm
            .iter()
            .enumerate()
            .position(|(ui, u)| !consumed[ui] && *u == req_norm)
        {
            consumed[ui] = true;
            direct_hit[ri] = true;
            direct_count += 1;
            matched.push(req.clone());
        }
    }

    // Pass 2: partial (substring) matches over what is left. Empty strings
    // are skipped so a stray "" from comma splitting never matches
    // everything.
    for (ri, req) in required.iter().enumerate() {
        if direct_hit[ri] {
            continue;
        }
        let req_norm = normalize(req);
        let hit = !req_norm.is_empty()
            && user_norm.iter().enumerate().any(|(ui, u)| {
                !consumed[ui] && !u.is_empty() && (u.contains(&req_norm) || req_norm.contains(u))
            });
        if hit {
            partial_count += 1;
            matched.push(req.clone());
        } else {
            missing.push(req.clone());
        }
    }

    let score = ((direct_count as f64 + 0.5 * partial_count as f64) / required.len() as f64
        * 100.0)
        .min(100.0);

    CategoryMatch {
        score,
        matched,
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_requirements_score_zero_not_hundred() {
        let result = match_category(&v(&["python", "sql"]), &[]);
        assert_eq!(result.score, 0.0);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_all_direct_matches_score_hundred() {
        let result = match_category(&v(&["Python", "SQL"]), &v(&["python", "sql"]));
        assert_eq!(result.score, 100.0);
        assert_eq!(result.matched.len(), 2);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_normalization_trims_and_lowercases() {
        let result = match_category(&v(&["  PyThOn  "]), &v(&["Python"]));
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn test_matched_reports_catalog_spelling() {
        let result = match_category(&v(&["python"]), &v(&["Python", "SQL"]));
        assert_eq!(result.matched, v(&["Python"]));
        assert_eq!(result.missing, v(&["SQL"]));
    }

    #[test]
    fn test_partial_match_counts_half() {
        // "machine learning" is a substring of the user's longer phrase.
        let result = match_category(
            &v(&["applied machine learning"]),
            &v(&["Machine Learning", "SQL"]),
        );
        assert_eq!(result.score, 25.0); // 0.5 of 2 requirements
        assert_eq!(result.matched, v(&["Machine Learning"]));
    }

    #[test]
    fn test_partial_match_works_both_directions() {
        // User skill is a substring of the requirement.
        let result = match_category(&v(&["solar"]), &v(&["Solar PV Design"]));
        assert_eq!(result.score, 50.0);
    }

    #[test]
    fn test_direct_match_consumes_user_skill() {
        // One user skill cannot serve a direct match and then feed an
        // additional partial match.
        let result = match_category(&v(&["sql"]), &v(&["SQL", "NoSQL"]));
        assert_eq!(result.score, 50.0); // direct only; "sql" was consumed
        assert_eq!(result.missing, v(&["NoSQL"]));
    }

    #[test]
    fn test_required_skill_counted_at_most_once() {
        // Two user skills both partially match the same requirement; it
        // still contributes only 0.5.
        let result = match_category(
            &v(&["deep learning ops", "deep learning theory"]),
            &v(&["Deep Learning"]),
        );
        assert_eq!(result.score, 50.0);
    }

    #[test]
    fn test_empty_user_strings_never_match() {
        let result = match_category(&v(&["", "  "]), &v(&["Python"]));
        assert_eq!(result.score, 0.0);
        assert_eq!(result.missing, v(&["Python"]));
    }

    #[test]
    fn test_score_clamped_to_hundred() {
        let result = match_category(&v(&["rust"]), &v(&["rust"]));
        assert!(result.score <= 100.0);
    }

    #[test]
    fn test_no_match_lists_all_missing() {
        let result = match_category(&v(&["knitting"]), &v(&["Python", "SQL"]));
        assert_eq!(result.score, 0.0);
        assert_eq!(result.missing.len(), 2);
    }
}
