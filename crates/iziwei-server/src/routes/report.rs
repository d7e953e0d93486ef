//! Report Routes
//!
//! HTTP handlers that delegate to ReportService for business logic.

use std::sync::Arc;

use axum::{http::StatusCode, routing::post, Json, Router};
use chrono::Datelike;

use iziwei::{error_line, ChartAnalysis, PrecomputedChartProvider, ReportService};

use crate::models::{Gender, ReportRequest, ReportResponse};
use crate::AppState;

/// Convert DTO Gender to domain Gender
fn to_domain_gender(g: Gender) -> iziwei::Gender {
    match g {
        Gender::Male => iziwei::Gender::Male,
        Gender::Female => iziwei::Gender::Female,
    }
}

fn today_lunar_year(requested: Option<i32>) -> i32 {
    requested.unwrap_or_else(|| {
        let year = chrono::Local::now().year();
        tracing::warn!("No today_lunar_year given, using calendar year {}", year);
        year
    })
}

/// Split a request into the service and its call arguments
fn prepare(
    payload: ReportRequest,
) -> (
    ReportService<PrecomputedChartProvider>,
    String,
    iziwei::Gender,
    i32,
) {
    let service = ReportService::new(Arc::new(PrecomputedChartProvider::new(payload.chart)));
    (
        service,
        payload.birth,
        to_domain_gender(payload.gender),
        today_lunar_year(payload.today_lunar_year),
    )
}

/// Generate text report
#[utoipa::path(
    post,
    path = "/iziwei/report",
    request_body = ReportRequest,
    responses(
        (status = 200, description = "Report generated", body = ReportResponse),
        (status = 401, description = "Missing or invalid API key"),
        (status = 422, description = "Birth moment or chart rejected")
    ),
    tag = "Report"
)]
pub async fn create_report(
    Json(payload): Json<ReportRequest>,
) -> Result<Json<ReportResponse>, (StatusCode, String)> {
    let (service, birth, gender, today) = prepare(payload);
    let report = service
        .try_generate(&birth, gender, today)
        .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, error_line(&e)))?;

    Ok(Json(ReportResponse { report }))
}

/// Generate structured analysis
#[utoipa::path(
    post,
    path = "/iziwei/analysis",
    request_body = ReportRequest,
    responses(
        (status = 200, description = "Annotated chart analysis as JSON"),
        (status = 401, description = "Missing or invalid API key"),
        (status = 422, description = "Birth moment or chart rejected")
    ),
    tag = "Report"
)]
pub async fn create_analysis(
    Json(payload): Json<ReportRequest>,
) -> Result<Json<ChartAnalysis>, (StatusCode, String)> {
    let (service, birth, gender, today) = prepare(payload);
    let analysis = service
        .analyze(&birth, gender, today)
        .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, error_line(&e)))?;

    Ok(Json(analysis))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/iziwei/report", post(create_report))
        .route("/iziwei/analysis", post(create_analysis))
}
