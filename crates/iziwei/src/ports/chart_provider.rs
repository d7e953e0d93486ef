//! Chart Provider Port
//!
//! Abstract interface for the external calendar / astrology library that
//! converts a civil birth moment into lunar data, pillars, Da Yun periods
//! and the twelve-palace chart.

use chrono::NaiveDateTime;

use crate::domain::entities::ChartBundle;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::Gender;

/// Source of raw charts
///
/// The call is synchronous; a failure aborts the whole report.
pub trait ChartProvider: Send + Sync {
    /// Build the raw chart for a birth moment
    fn compute(&self, birth: NaiveDateTime, gender: Gender) -> Result<ChartBundle, DomainError>;

    /// Provider name for logging (e.g., "precomputed")
    fn name(&self) -> &str;
}
