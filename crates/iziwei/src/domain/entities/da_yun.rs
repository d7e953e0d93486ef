//! DaYun (大运) - Decade-long major periods

use serde::{Deserialize, Serialize};

use super::{AgeRange, Pillar};

/// One decade window and the pillar that governs it
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DaYunPeriod {
    pub range: AgeRange,
    pub pillar: Pillar,
}

impl DaYunPeriod {
    pub fn new(start_age: i32, end_age: i32, pillar: Pillar) -> Self {
        Self {
            range: AgeRange::new(start_age, end_age),
            pillar,
        }
    }

    pub fn start_age(&self) -> i32 {
        self.range.start
    }

    pub fn end_age(&self) -> i32 {
        self.range.end
    }
}
