//! Chat assistant passthrough: forwards user text to the LLM, optionally
//! prefixed with a readiness-result summary so the model can give advice
//! grounded in the user's actual gaps. No session state is kept.

pub mod prompts;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::category::SkillCategory;
use crate::models::readiness::ReadinessResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Optional readiness result from a previous scoring call, appended to
    /// the prompt as context. The engine never calls the LLM itself.
    #[serde(default)]
    pub readiness_context: Option<ReadinessResult>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// POST /api/v1/chat
///
/// Thin passthrough: prompt string in, assistant reply out.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let prompt = build_prompt(&request.message, request.readiness_context.as_ref());

    let reply = state
        .llm
        .chat(&prompt, prompts::CAREER_ADVISOR_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("chat completion failed: {e}")))?;

    Ok(Json(ChatResponse { reply }))
}

fn build_prompt(message: &str, context: Option<&ReadinessResult>) -> String {
    let Some(result) = context else {
        return message.to_string();
    };

    let mut missing_parts = Vec::new();
    for cat in SkillCategory::ALL {
        let skills = result.missing_skills.get(cat);
        if !skills.is_empty() {
            missing_parts.push(format!("{}: {}", cat.name(), skills.join(", ")));
        }
    }
    let missing = if missing_parts.is_empty() {
        "none".to_string()
    } else {
        missing_parts.join("; ")
    };

    format!(
        "{message}\n\n---\nReadiness context for {field}: overall score {score}/100 ({level:?}), \
         estimated transition timeline {timeline} months. Missing skills: {missing}.",
        field = result.field,
        score = result.overall_score,
        level = result.readiness_level,
        timeline = result.estimated_timeline_months,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category::CategoryMap;
    use crate::models::readiness::ReadinessLevel;

    fn sample_result() -> ReadinessResult {
        ReadinessResult {
            field: "Blockchain".to_string(),
            overall_score: 42.5,
            base_score: 38.0,
            category_scores: CategoryMap::default(),
            matched_skills: CategoryMap::default(),
            missing_skills: CategoryMap {
                core_skills: vec!["Solidity".to_string()],
                tools: vec!["Hardhat".to_string()],
                soft_skills: vec![],
                certifications: vec![],
            },
            readiness_level: ReadinessLevel::Developing,
            action_needed: String::new(),
            estimated_timeline_months: 6.0,
            experience_bonus: 0.0,
            role_relevance_bonus: 0.0,
            learning_factor: 1.0,
            completion_percentage: 30.0,
        }
    }

    #[test]
    fn test_prompt_without_context_is_message_verbatim() {
        assert_eq!(build_prompt("How do I start?", None), "How do I start?");
    }

    #[test]
    fn test_prompt_with_context_appends_summary() {
        let prompt = build_prompt("How do I start?", Some(&sample_result()));
        assert!(prompt.starts_with("How do I start?"));
        assert!(prompt.contains("Blockchain"));
        assert!(prompt.contains("42.5/100"));
        assert!(prompt.contains("core_skills: Solidity"));
        assert!(prompt.contains("tools: Hardhat"));
    }
}
