//! Palace (宫) - One of the twelve life-aspect slots of a chart

use serde::{Deserialize, Serialize};

use super::Star;
use crate::domain::value_objects::{Branch, Stem};

/// Inclusive age window, serialized as `[start, end]`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct AgeRange {
    pub start: i32,
    pub end: i32,
}

impl AgeRange {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, age: i32) -> bool {
        self.start <= age && age <= self.end
    }
}

impl From<[i32; 2]> for AgeRange {
    fn from([start, end]: [i32; 2]) -> Self {
        Self { start, end }
    }
}

impl From<AgeRange> for [i32; 2] {
    fn from(range: AgeRange) -> Self {
        [range.start, range.end]
    }
}

/// The four 12-stage cyclic markers a chart may carry per palace
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TwelveStages {
    /// 长生12神
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changsheng12: Option<String>,
    /// 博士12神
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boshi12: Option<String>,
    /// 将前12神
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jiangqian12: Option<String>,
    /// 岁前12神
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suiqian12: Option<String>,
}

impl TwelveStages {
    /// Markers that are present, in fixed order
    pub fn markers(&self) -> Vec<&str> {
        [
            &self.changsheng12,
            &self.boshi12,
            &self.jiangqian12,
            &self.suiqian12,
        ]
        .into_iter()
        .filter_map(|m| m.as_deref())
        .filter(|m| !m.is_empty())
        .collect()
    }
}

/// Palace as delivered by the external chart library
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Palace {
    /// Life-aspect name, e.g. 命宫
    pub name: String,
    pub stem: Stem,
    pub branch: Branch,
    #[serde(default)]
    pub major_stars: Vec<Star>,
    #[serde(default)]
    pub minor_stars: Vec<Star>,
    #[serde(default)]
    pub adhoc_stars: Vec<Star>,
    #[serde(default)]
    pub is_body_palace: bool,
    #[serde(default)]
    pub is_original_palace: bool,
    /// 大限 window
    pub decadal: AgeRange,
    #[serde(default)]
    pub stages: TwelveStages,
}

impl Palace {
    pub fn new(name: impl Into<String>, stem: Stem, branch: Branch, decadal: AgeRange) -> Self {
        Self {
            name: name.into(),
            stem,
            branch,
            major_stars: Vec::new(),
            minor_stars: Vec::new(),
            adhoc_stars: Vec::new(),
            is_body_palace: false,
            is_original_palace: false,
            decadal,
            stages: TwelveStages::default(),
        }
    }

    /// All resident stars: major, then minor, then adhoc
    pub fn stars(&self) -> impl Iterator<Item = &Star> {
        self.major_stars
            .iter()
            .chain(self.minor_stars.iter())
            .chain(self.adhoc_stars.iter())
    }
}
