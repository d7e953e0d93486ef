//! Report Assembly
//!
//! - analysis: annotated, structured view of a chart
//! - render: line-oriented text report

pub mod analysis;
pub mod render;

pub use analysis::*;
pub use render::*;
