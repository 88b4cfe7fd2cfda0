pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat;
use crate::insights;
use crate::scoring;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog
        .route("/api/v1/fields", get(scoring::handlers::handle_list_fields))
        .route(
            "/api/v1/fields/:field",
            get(scoring::handlers::handle_get_field),
        )
        // Readiness scoring
        .route(
            "/api/v1/readiness",
            post(scoring::handlers::handle_readiness),
        )
        .route(
            "/api/v1/readiness/simple",
            post(scoring::handlers::handle_simple_score),
        )
        .route(
            "/api/v1/recommendations",
            post(scoring::handlers::handle_recommendations),
        )
        // Market insights
        .route(
            "/api/v1/insights/salaries",
            get(insights::handlers::handle_salaries),
        )
        .route(
            "/api/v1/insights/cities",
            get(insights::handlers::handle_cities),
        )
        .route(
            "/api/v1/insights/companies",
            get(insights::handlers::handle_companies),
        )
        .route(
            "/api/v1/insights/learning",
            get(insights::handlers::handle_learning),
        )
        .route(
            "/api/v1/insights/stories",
            get(insights::handlers::handle_stories),
        )
        .route(
            "/api/v1/insights/programs",
            get(insights::handlers::handle_programs),
        )
        .route("/api/v1/insights/tax", get(insights::handlers::handle_tax))
        // Chat assistant
        .route("/api/v1/chat", post(chat::handle_chat))
        .with_state(state)
}
