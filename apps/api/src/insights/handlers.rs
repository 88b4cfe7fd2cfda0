//! Axum route handlers for the read-only market-insight tables.

use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::insights::{self, data, SalaryBand, TaxBreakdown};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SalaryQuery {
    /// Optional city to scale bands by; defaults to Jakarta (multiplier 1.0).
    pub city: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SalaryResponse {
    pub city: &'static str,
    pub fields: Vec<FieldSalaryView>,
}

#[derive(Debug, Serialize)]
pub struct FieldSalaryView {
    pub field: &'static str,
    pub entry_level: SalaryBandView,
    pub mid_level: SalaryBandView,
    pub senior_level: SalaryBandView,
    pub expert_level: SalaryBandView,
    /// Mid-level average divided by the city's cost-of-living index, so a
    /// lower nominal salary in a cheap city compares fairly with Jakarta.
    pub mid_level_purchasing_power: f64,
}

/// A band plus its display strings, so the UI never re-implements the
/// IDR formatting rules.
#[derive(Debug, Serialize)]
pub struct SalaryBandView {
    pub min: u64,
    pub max: u64,
    pub min_display: String,
    pub max_display: String,
}

impl SalaryBandView {
    fn from_band(band: SalaryBand) -> Self {
        SalaryBandView {
            min: band.min,
            max: band.max,
            min_display: insights::format_idr(band.min as f64),
            max_display: insights::format_idr(band.max as f64),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TaxQuery {
    pub annual_salary: f64,
}

#[derive(Debug, Serialize)]
pub struct TaxResponse {
    pub gross_annual: f64,
    #[serde(flatten)]
    pub breakdown: TaxBreakdown,
    pub net_monthly_display: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/insights/salaries?city=Bandung
///
/// Salary bands per field, scaled to the requested city's multiplier.
pub async fn handle_salaries(
    Query(query): Query<SalaryQuery>,
) -> Result<Json<SalaryResponse>, AppError> {
    let city = match query.city.as_deref() {
        Some(name) => data::find_city(name)
            .ok_or_else(|| AppError::NotFound(format!("city '{name}' is not recognized")))?,
        None => data::find_city("Jakarta")
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("baseline city missing from table")))?,
    };

    let fields = data::SALARY_DATA
        .iter()
        .map(|f| {
            let mid = insights::adjusted_salary(f.mid_level, city);
            let mid_avg = (mid.min + mid.max) as f64 / 2.0;
            FieldSalaryView {
                field: f.field,
                entry_level: SalaryBandView::from_band(insights::adjusted_salary(
                    f.entry_level,
                    city,
                )),
                mid_level: SalaryBandView::from_band(mid),
                senior_level: SalaryBandView::from_band(insights::adjusted_salary(
                    f.senior_level,
                    city,
                )),
                expert_level: SalaryBandView::from_band(insights::adjusted_salary(
                    f.expert_level,
                    city,
                )),
                mid_level_purchasing_power: insights::cost_of_living_ratio(mid_avg, city),
            }
        })
        .collect();

    Ok(Json(SalaryResponse {
        city: city.name,
        fields,
    }))
}

/// GET /api/v1/insights/cities
pub async fn handle_cities() -> Json<Value> {
    Json(json!({ "cities": data::TECH_CITIES }))
}

/// GET /api/v1/insights/companies
pub async fn handle_companies() -> Json<Value> {
    Json(json!({ "tiers": data::COMPANY_TIERS }))
}

/// GET /api/v1/insights/learning
pub async fn handle_learning() -> Json<Value> {
    Json(json!(data::LEARNING_RESOURCES))
}

/// GET /api/v1/insights/stories
pub async fn handle_stories() -> Json<Value> {
    Json(json!({ "stories": data::SUCCESS_STORIES }))
}

/// GET /api/v1/insights/programs
pub async fn handle_programs() -> Json<Value> {
    Json(json!({ "programs": data::GOVERNMENT_PROGRAMS }))
}

/// GET /api/v1/insights/tax?annual_salary=120000000
pub async fn handle_tax(Query(query): Query<TaxQuery>) -> Result<Json<TaxResponse>, AppError> {
    if query.annual_salary < 0.0 || !query.annual_salary.is_finite() {
        return Err(AppError::Validation(
            "annual_salary must be a non-negative number".to_string(),
        ));
    }

    let breakdown = insights::pph21(query.annual_salary);
    let net_monthly_display = insights::format_idr(breakdown.net_monthly);

    Ok(Json(TaxResponse {
        gross_annual: query.annual_salary,
        breakdown,
        net_monthly_display,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_salaries_default_to_jakarta() {
        let response = handle_salaries(Query(SalaryQuery { city: None }))
            .await
            .unwrap();
        assert_eq!(response.0.city, "Jakarta");
        // Jakarta multiplier is 1.0, so the AI entry band is unscaled.
        let ai = &response.0.fields[0];
        assert_eq!(ai.field, "Artificial Intelligence");
        assert_eq!(ai.entry_level.min, 8_000_000);
        assert_eq!(ai.entry_level.min_display, "Rp 8 juta");
    }

    #[tokio::test]
    async fn test_salaries_scale_by_city_multiplier() {
        let response = handle_salaries(Query(SalaryQuery {
            city: Some("Bandung".to_string()),
        }))
        .await
        .unwrap();
        let ai = &response.0.fields[0];
        assert_eq!(ai.entry_level.min, 6_400_000); // 8M * 0.8
    }

    #[tokio::test]
    async fn test_salaries_unknown_city_is_not_found() {
        let err = handle_salaries(Query(SalaryQuery {
            city: Some("Gotham".to_string()),
        }))
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
