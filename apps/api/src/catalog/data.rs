//! Embedded catalog for the five emerging-industry fields the dashboard
//! covers. Data is a curated table, not a claim of market research rigor.

use crate::catalog::{default_category_weights, Difficulty, SkillCatalog, SkillCatalogEntry};
use crate::models::category::CategoryMap;

fn skills(
    core: &[&str],
    tools: &[&str],
    soft: &[&str],
    certs: &[&str],
) -> CategoryMap<Vec<String>> {
    CategoryMap {
        core_skills: to_owned(core),
        tools: to_owned(tools),
        soft_skills: to_owned(soft),
        certifications: to_owned(certs),
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Builds the full startup catalog. Called once from `main`.
pub fn default_catalog() -> SkillCatalog {
    SkillCatalog::new(vec![
        SkillCatalogEntry {
            field: "Artificial Intelligence".to_string(),
            required_skills: skills(
                &["Python", "SQL", "Machine Learning", "Statistics", "Deep Learning"],
                &["TensorFlow", "PyTorch", "Pandas", "Jupyter"],
                &["Problem Solving", "Communication", "Critical Thinking"],
                &["TensorFlow Developer Certificate", "AWS Machine Learning Specialty"],
            ),
            category_weights: default_category_weights(),
            difficulty: Difficulty::Hard,
            role_keywords: to_owned(&["data", "research", "analyst", "engineer"]),
            example_jobs: to_owned(&["Data Analyst", "AI Research Assistant", "Prompt Engineer"]),
        },
        SkillCatalogEntry {
            field: "Blockchain".to_string(),
            required_skills: skills(
                &["Solidity", "Smart Contract", "Cryptography", "JavaScript", "Crypto"],
                &["Hardhat", "Ethers.js", "Ganache", "MetaMask"],
                &["Attention to Detail", "Security Mindset", "Communication"],
                &["Certified Blockchain Developer"],
            ),
            category_weights: default_category_weights(),
            difficulty: Difficulty::Hard,
            role_keywords: to_owned(&["developer", "security", "finance", "crypto"]),
            example_jobs: to_owned(&["Blockchain Auditor", "Smart Contract Developer"]),
        },
        SkillCatalogEntry {
            field: "Renewable Energy".to_string(),
            required_skills: skills(
                &["Electrical Engineering", "Solar PV Design", "Sustainability", "Energy Storage"],
                &["AutoCAD", "PVsyst", "MATLAB"],
                &["Project Management", "Teamwork", "Communication"],
                &["NABCEP PV Associate"],
            ),
            category_weights: default_category_weights(),
            difficulty: Difficulty::Medium,
            role_keywords: to_owned(&["engineer", "energy", "electrical", "technician"]),
            example_jobs: to_owned(&["Solar Energy Technician", "Green Finance Analyst"]),
        },
        SkillCatalogEntry {
            field: "Biotechnology".to_string(),
            required_skills: skills(
                &["Biology", "Genetics", "Bioinformatics", "Lab Techniques"],
                &["Python", "R", "BLAST", "LIMS"],
                &["Research Discipline", "Documentation", "Collaboration"],
                &["Clinical Research Certification"],
            ),
            category_weights: default_category_weights(),
            difficulty: Difficulty::VeryHard,
            role_keywords: to_owned(&["lab", "research", "biology", "clinical"]),
            example_jobs: to_owned(&["Bioinformatics Analyst", "Lab Research Assistant"]),
        },
        SkillCatalogEntry {
            field: "Space Exploration".to_string(),
            required_skills: skills(
                &["Physics", "Aerospace Engineering", "Orbital Mechanics", "Navigation"],
                &["MATLAB", "Simulink", "STK", "C++"],
                &["Systems Thinking", "Teamwork", "Precision"],
                &["Systems Engineering Certification"],
            ),
            category_weights: default_category_weights(),
            difficulty: Difficulty::VeryHard,
            role_keywords: to_owned(&["aerospace", "engineer", "physics", "defense"]),
            example_jobs: to_owned(&["Aerospace Data Engineer", "Space Operations Analyst"]),
        },
    ])
}
