use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// GET /health
/// Returns a simple status object with service version and the date of
/// the embedded market-data snapshot.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "career-api",
        "data_snapshot": "2024-2025",
        "checked_at": Utc::now().to_rfc3339(),
    }))
}
