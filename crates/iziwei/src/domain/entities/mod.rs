//! Domain Entities
//!
//! Read-only chart data as supplied by the external calendar library.
//! - Pillar: stem/branch pair
//! - Star, Palace: the twelve-palace Zi Wei chart
//! - DaYunPeriod: decade major periods
//! - ChartBundle: everything needed for one report

mod chart;
mod da_yun;
mod palace;
mod pillar;
mod star;

pub use chart::*;
pub use da_yun::*;
pub use palace::*;
pub use pillar::*;
pub use star::*;
