//! The four skill categories used throughout the scoring pipeline, plus a
//! small fixed-shape map keyed by them.
//!
//! Every category field is always present (possibly empty), so a missing
//! category is a compile-time concern rather than a runtime `.get` fallback.

use serde::{Deserialize, Serialize};

/// One of the four skill groupings a career field requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    CoreSkills,
    Tools,
    SoftSkills,
    Certifications,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::CoreSkills,
        SkillCategory::Tools,
        SkillCategory::SoftSkills,
        SkillCategory::Certifications,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SkillCategory::CoreSkills => "core_skills",
            SkillCategory::Tools => "tools",
            SkillCategory::SoftSkills => "soft_skills",
            SkillCategory::Certifications => "certifications",
        }
    }
}

/// A value per skill category. Serializes as an object with the four
/// category names as keys, matching the wire shape the dashboard expects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de> + Default"))]
pub struct CategoryMap<T> {
    #[serde(default)]
    pub core_skills: T,
    #[serde(default)]
    pub tools: T,
    #[serde(default)]
    pub soft_skills: T,
    #[serde(default)]
    pub certifications: T,
}

impl<T> CategoryMap<T> {
    pub fn get(&self, category: SkillCategory) -> &T {
        match category {
            SkillCategory::CoreSkills => &self.core_skills,
            SkillCategory::Tools => &self.tools,
            SkillCategory::SoftSkills => &self.soft_skills,
            SkillCategory::Certifications => &self.certifications,
        }
    }

    pub fn get_mut(&mut self, category: SkillCategory) -> &mut T {
        match category {
            SkillCategory::CoreSkills => &mut self.core_skills,
            SkillCategory::Tools => &mut self.tools,
            SkillCategory::SoftSkills => &mut self.soft_skills,
            SkillCategory::Certifications => &mut self.certifications,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_four_categories() {
        assert_eq!(SkillCategory::ALL.len(), 4);
    }

    #[test]
    fn test_get_mut_writes_through() {
        let mut map = CategoryMap::<Vec<String>>::default();
        map.get_mut(SkillCategory::Tools).push("git".to_string());
        assert_eq!(map.get(SkillCategory::Tools), &vec!["git".to_string()]);
        assert!(map.get(SkillCategory::CoreSkills).is_empty());
    }

    #[test]
    fn test_serde_uses_snake_case_keys() {
        let map = CategoryMap::<f64> {
            core_skills: 1.0,
            tools: 0.8,
            soft_skills: 0.6,
            certifications: 0.9,
        };
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json["core_skills"], 1.0);
        assert_eq!(json["certifications"], 0.9);
    }

    #[test]
    fn test_missing_keys_default_on_deserialize() {
        let map: CategoryMap<Vec<String>> =
            serde_json::from_str(r#"{"core_skills": ["python"]}"#).unwrap();
        assert_eq!(map.core_skills, vec!["python".to_string()]);
        assert!(map.tools.is_empty());
    }
}
