//! Domain Services
//!
//! Stateless derivations over chart data:
//! - ten_god: 十神 classification
//! - hidden_stems: 藏干 decomposition
//! - sihua: 四化 targets and palace flows
//! - temporal: virtual age and active periods

pub mod hidden_stems;
pub mod sihua;
pub mod temporal;
pub mod ten_god;

pub use hidden_stems::*;
pub use sihua::*;
pub use temporal::*;
pub use ten_god::*;
