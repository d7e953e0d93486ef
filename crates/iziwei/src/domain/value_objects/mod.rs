//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod branch;
mod gender;
mod stem;
mod ten_god;
mod transformation;

pub use branch::*;
pub use gender::*;
pub use stem::*;
pub use ten_god::*;
pub use transformation::*;
