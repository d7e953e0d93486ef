//! Report Application Service (Use Case)
//!
//! Orchestrates one report: parse the birth moment, fetch the raw chart from
//! the provider, validate it, annotate it and render it. Any failure before
//! rendering produces a single terminal error line instead of a partial
//! report.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};

use crate::adapters::PrecomputedChartProvider;
use crate::domain::entities::{check_lunar_year, ChartBundle};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::Gender;
use crate::ports::ChartProvider;
use crate::report::{render_report, ChartAnalysis};

/// Prefix of the terminal error line
pub const ERROR_PREFIX: &str = "排盘出错: ";

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse a civil birth moment (`YYYY-MM-DDTHH:MM`, optional seconds, `T` or
/// space separator). A bare date means midnight.
pub fn parse_birth_moment(input: &str) -> Result<NaiveDateTime, DomainError> {
    let input = input.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| DomainError::InvalidBirthMoment(input.to_string()))
}

/// Format an error as the single-line report replacement
pub fn error_line(err: &DomainError) -> String {
    format!("{}{}", ERROR_PREFIX, err)
}

/// Application service for report generation
pub struct ReportService<P: ChartProvider> {
    provider: Arc<P>,
}

impl<P: ChartProvider> ReportService<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Build the annotated analysis
    pub fn analyze(
        &self,
        birth: &str,
        gender: Gender,
        today_lunar_year: i32,
    ) -> Result<ChartAnalysis, DomainError> {
        let birth = parse_birth_moment(birth)?;
        check_lunar_year("today", today_lunar_year)?;
        let bundle = self.provider.compute(birth, gender)?;
        bundle.validate()?;

        tracing::debug!(
            "Chart from {} provider: lunar year {}, {} palaces",
            self.provider.name(),
            bundle.lunar.year,
            bundle.chart.palaces.len()
        );

        Ok(ChartAnalysis::build(birth, gender, &bundle, today_lunar_year))
    }

    /// Generate the report, propagating errors
    pub fn try_generate(
        &self,
        birth: &str,
        gender: Gender,
        today_lunar_year: i32,
    ) -> Result<String, DomainError> {
        let analysis = self.analyze(birth, gender, today_lunar_year)?;
        let report = render_report(&analysis);

        tracing::info!(
            "Generated report: {} ({}) virtual age {}, {} lines",
            analysis.subject.birth,
            gender,
            analysis.temporal.virtual_age,
            report.lines().count()
        );

        Ok(report)
    }

    /// Generate the report, or the terminal error line on failure
    pub fn generate(&self, birth: &str, gender: Gender, today_lunar_year: i32) -> String {
        self.try_generate(birth, gender, today_lunar_year)
            .unwrap_or_else(|err| {
                tracing::warn!("Report generation failed: {}", err);
                error_line(&err)
            })
    }
}

/// One-shot report over an already computed bundle
pub fn generate_report(
    birth: &str,
    gender: Gender,
    bundle: ChartBundle,
    today_lunar_year: i32,
) -> String {
    ReportService::new(Arc::new(PrecomputedChartProvider::new(bundle))).generate(
        birth,
        gender,
        today_lunar_year,
    )
}
