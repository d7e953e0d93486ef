//! Application Layer (Use Cases)

mod report_service;

pub use report_service::*;
