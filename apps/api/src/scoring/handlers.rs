//! Axum route handlers for the readiness scoring API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::{Difficulty, SkillCatalogEntry};
use crate::errors::AppError;
use crate::models::category::CategoryMap;
use crate::models::profile::{CareerUrgency, UserProfile};
use crate::models::readiness::ReadinessResult;
use crate::scoring::aggregator::score_readiness;
use crate::scoring::recommender::{recommend_jobs, FieldRecommendation};
use crate::scoring::simple::simple_score;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Wire-level profile. Numbers arrive as signed integers and urgency as a
/// plain string so bad input surfaces as a VALIDATION_ERROR body instead
/// of an opaque deserialization failure.
#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    #[serde(default)]
    pub skills_by_category: CategoryMap<Vec<String>>,
    pub years_experience: i64,
    pub weekly_learning_hours: i64,
    pub career_urgency: String,
    #[serde(default)]
    pub current_role: String,
}

impl ProfileRequest {
    /// Validates raw wire values into a typed profile. Negative numbers
    /// are rejected, never clamped to zero.
    pub fn into_profile(self) -> Result<UserProfile, AppError> {
        let years_experience = non_negative(self.years_experience, "years_experience")?;
        let weekly_learning_hours =
            non_negative(self.weekly_learning_hours, "weekly_learning_hours")?;
        let career_urgency: CareerUrgency = self.career_urgency.parse()?;

        Ok(UserProfile {
            skills_by_category: self.skills_by_category,
            years_experience,
            weekly_learning_hours,
            career_urgency,
            current_role: self.current_role,
        })
    }
}

fn non_negative(value: i64, field: &str) -> Result<u32, AppError> {
    u32::try_from(value)
        .map_err(|_| AppError::Validation(format!("{field} must be a non-negative integer")))
}

#[derive(Debug, Deserialize)]
pub struct ReadinessRequest {
    pub profile: ProfileRequest,
    pub target_fields: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    /// One result per requested field. Independent computations; clients
    /// must not rely on ordering.
    pub results: Vec<ReadinessResult>,
}

#[derive(Debug, Deserialize)]
pub struct SimpleScoreRequest {
    #[serde(default)]
    pub skills: Vec<String>,
    pub target_fields: Vec<String>,
    pub weekly_learning_hours: i64,
}

#[derive(Debug, Serialize)]
pub struct SimpleScoreResponse {
    pub score: u32,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationsRequest {
    #[serde(default)]
    pub skills: Vec<String>,
    pub target_fields: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<FieldRecommendation>,
}

#[derive(Debug, Serialize)]
pub struct FieldSummary {
    pub field: String,
    pub difficulty: Difficulty,
    pub example_jobs: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct FieldsResponse {
    pub fields: Vec<FieldSummary>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/fields
///
/// Lists the career fields the catalog supports.
pub async fn handle_list_fields(State(state): State<AppState>) -> Json<FieldsResponse> {
    let fields = state
        .catalog
        .entries()
        .iter()
        .map(|entry| FieldSummary {
            field: entry.field.clone(),
            difficulty: entry.difficulty,
            example_jobs: entry.example_jobs.clone(),
        })
        .collect();
    Json(FieldsResponse { fields })
}

/// GET /api/v1/fields/:field
///
/// Full catalog entry for one field; 404 on unknown names.
pub async fn handle_get_field(
    State(state): State<AppState>,
    Path(field): Path<String>,
) -> Result<Json<SkillCatalogEntry>, AppError> {
    let entry = state.catalog.lookup(&field)?;
    Ok(Json(entry.clone()))
}

/// POST /api/v1/readiness
///
/// Scores the profile against every requested field. Fails the whole call
/// on invalid input or an unrecognized field — no partial results, and
/// never a silently wrong number.
pub async fn handle_readiness(
    State(state): State<AppState>,
    Json(request): Json<ReadinessRequest>,
) -> Result<Json<ReadinessResponse>, AppError> {
    if request.target_fields.is_empty() {
        return Err(AppError::Validation(
            "target_fields cannot be empty".to_string(),
        ));
    }

    let profile = request.profile.into_profile()?;

    // Resolve every field before scoring so an unknown field fails fast.
    let entries = request
        .target_fields
        .iter()
        .map(|field| state.catalog.lookup(field))
        .collect::<Result<Vec<_>, _>>()?;

    let results = entries
        .into_iter()
        .map(|entry| score_readiness(&profile, entry))
        .collect();

    Ok(Json(ReadinessResponse { results }))
}

/// POST /api/v1/readiness/simple
///
/// Legacy single-number score kept for the old dashboard widget.
pub async fn handle_simple_score(
    State(state): State<AppState>,
    Json(request): Json<SimpleScoreRequest>,
) -> Result<Json<SimpleScoreResponse>, AppError> {
    let hours = non_negative(request.weekly_learning_hours, "weekly_learning_hours")?;
    let score = simple_score(
        &request.skills,
        &request.target_fields,
        hours,
        &state.catalog,
    );
    Ok(Json(SimpleScoreResponse { score }))
}

/// POST /api/v1/recommendations
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Json(request): Json<RecommendationsRequest>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let recommendations = recommend_jobs(&request.skills, &request.target_fields, &state.catalog)?;
    Ok(Json(RecommendationsResponse { recommendations }))
}
