//! iZiwei API Routes
//!
//! - /iziwei/report - Plain-text report (命理报告)
//! - /iziwei/analysis - Structured annotations as JSON

pub mod report;
pub mod swagger;
