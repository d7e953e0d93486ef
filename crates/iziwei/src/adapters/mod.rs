//! Adapters
//!
//! Implementations of the ports.

mod precomputed;

pub use precomputed::*;
