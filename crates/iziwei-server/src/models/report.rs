//! Report request / response DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use iziwei::ChartBundle;

/// Gender, selecting the Da Yun direction upstream
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub enum Gender {
    #[serde(rename = "男", alias = "male")]
    Male,
    #[serde(rename = "女", alias = "female")]
    Female,
}

/// Request body for /iziwei/report and /iziwei/analysis
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ReportRequest {
    /// Civil birth moment, e.g. "1990-05-17T08:30"
    #[schema(example = "1990-05-17T08:30")]
    pub birth: String,
    pub gender: Gender,
    /// Current lunar year; defaults to the server's calendar year
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub today_lunar_year: Option<i32>,
    /// Chart bundle exported by the calendar library
    #[schema(value_type = Object)]
    pub chart: ChartBundle,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportResponse {
    pub report: String,
}
