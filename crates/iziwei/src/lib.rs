//! iZiwei Domain Library
//!
//! Annotation engine for Eight-Character (八字) and Zi Wei Dou Shu (紫微斗数)
//! charts. The raw chart comes from an external calendar library; this crate
//! adds Ten-God roles, hidden stems, Sihua flows and current-period markers,
//! then renders a deterministic text report.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure types and derivations
//!   - `value_objects/`: Stem, Branch, TenGod, TransformationKind, Gender
//!   - `entities/`: Pillar, Star, Palace, DaYunPeriod, ChartBundle
//!   - `tables`: static relation tables
//!   - `services/`: ten_god, hidden_stems, sihua, temporal
//!   - `errors`: Domain-specific error types
//!
//! - **Ports** (`ports/`): `ChartProvider`, the external chart source
//! - **Adapters** (`adapters/`): `PrecomputedChartProvider`
//! - **Report** (`report/`): annotated analysis and text rendering
//! - **Application** (`application/`): `ReportService` use case
//!
//! # Usage
//!
//! ```rust,ignore
//! use iziwei::{generate_report, ChartBundle, Gender};
//!
//! let bundle: ChartBundle = serde_json::from_str(&json)?;
//! let report = generate_report("1990-05-17T08:30", Gender::Male, bundle, 2026);
//! ```

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
pub mod report;

// Re-export commonly used types
pub use adapters::PrecomputedChartProvider;
pub use application::{
    error_line, generate_report, parse_birth_moment, ReportService, ERROR_PREFIX,
};
pub use domain::{
    annotated_hidden_stems, hidden_stems, incoming_transformation, self_transformation, ten_god,
    transformation_targets, virtual_age, AgeRange, BirthPillars, Branch, Chart, ChartBundle,
    DaYunPeriod, DaYunStatus, DomainError, Gender, HiddenStem, LunarBirth, Palace, Pillar,
    SihuaTargets, Star, Stem, TemporalContext, TenGod, TransformationKind, TransformationTags,
    TwelveStages,
};
pub use ports::ChartProvider;
pub use report::{render_report, ChartAnalysis, PalaceFlag};
