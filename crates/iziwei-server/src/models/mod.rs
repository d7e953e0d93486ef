//! iZiwei API Data Models
//!
//! - Report: text report and structured analysis requests

mod report;

pub use report::*;
