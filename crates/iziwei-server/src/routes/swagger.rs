//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{Gender, ReportRequest, ReportResponse};

#[derive(OpenApi)]
#[openapi(
    paths(super::report::create_report, super::report::create_analysis),
    components(schemas(Gender, ReportRequest, ReportResponse)),
    tags(
        (name = "Report", description = "Chart report generation")
    ),
    info(
        title = "iZiwei API",
        description = "Eight-Character and Zi Wei chart annotation"
    )
)]
pub struct ApiDoc;
