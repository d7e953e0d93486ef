use anyhow::Context;
use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod auth;
mod config;
mod models;
mod routes;

use config::{ServerConfig, DEFAULT_LOG_FILTER};

/// Application state shared across all routes
#[derive(Clone, Default)]
pub struct AppState {
    pub api_key: Option<Arc<str>>,
}

impl AppState {
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            api_key: config.api_key.as_deref().map(Arc::from),
        }
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "iZiwei API is running - the twelve palaces are open".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the full router
pub fn app(state: AppState) -> Router {
    // Protected routes (require authentication)
    let protected_routes = Router::new()
        .merge(routes::report::router())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::auth_middleware,
        ));

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    tracing::info!("🔮 iZiwei API initializing...");

    let config = ServerConfig::from_env()?;
    if config.api_key.is_some() {
        tracing::info!("🔐 API key authentication enabled");
    } else {
        tracing::warn!("⚠️  No IZIWEI_API_KEY set - authentication disabled");
    }

    let router = app(AppState::from_config(&config));

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ iZiwei API ready on {}", config.bind);

    axum::serve(listener, router)
        .await
        .context("Server terminated unexpectedly")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    const FIXTURE: &str = include_str!("../../iziwei/tests/fixtures/chart_1990.json");

    fn report_body(birth: &str) -> Body {
        let chart: serde_json::Value = serde_json::from_str(FIXTURE).unwrap();
        let body = serde_json::json!({
            "birth": birth,
            "gender": "男",
            "today_lunar_year": 2026,
            "chart": chart,
        });
        Body::from(body.to_string())
    }

    fn post(uri: &str, body: Body, key: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(key) = key {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", key));
        }
        builder.body(body).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(AppState::default())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_report_endpoint() {
        let response = app(AppState::default())
            .oneshot(post("/iziwei/report", report_body("1990-05-17T08:30"), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let report = json["report"].as_str().unwrap();
        assert!(report.starts_with("【命理深度分析报告 (八字+紫微)】"));
        assert!(report.contains("### 官禄宫 [壬午] ★身宫 ★流年"));
    }

    #[tokio::test]
    async fn test_analysis_endpoint() {
        let response = app(AppState::default())
            .oneshot(post("/iziwei/analysis", report_body("1990-05-17T08:30"), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["temporal"]["virtual_age"], 37);
        assert_eq!(json["palaces"].as_array().unwrap().len(), 12);
    }

    #[tokio::test]
    async fn test_bad_birth_is_unprocessable() {
        let response = app(AppState::default())
            .oneshot(post("/iziwei/report", report_body("someday"), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.starts_with(iziwei::ERROR_PREFIX));
    }

    #[tokio::test]
    async fn test_auth_required_when_key_set() {
        let state = AppState {
            api_key: Some(Arc::from("secret")),
        };

        let denied = app(state.clone())
            .oneshot(post("/iziwei/report", report_body("1990-05-17T08:30"), None))
            .await
            .unwrap();
        assert_eq!(denied.status(), StatusCode::UNAUTHORIZED);

        let wrong = app(state.clone())
            .oneshot(post(
                "/iziwei/report",
                report_body("1990-05-17T08:30"),
                Some("guess"),
            ))
            .await
            .unwrap();
        assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);

        let allowed = app(state)
            .oneshot(post(
                "/iziwei/report",
                report_body("1990-05-17T08:30"),
                Some("secret"),
            ))
            .await
            .unwrap();
        assert_eq!(allowed.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_skips_auth() {
        let state = AppState {
            api_key: Some(Arc::from("secret")),
        };
        let response = app(state)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
