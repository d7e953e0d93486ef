//! Pillar (柱) - A stem/branch pair

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Branch, Stem};

/// One calendrical unit (year, month, day, hour or a decade period).
///
/// Serialized as its two characters, e.g. `"甲子"`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Sexagenary pillar of a lunar year
    pub fn of_year(year: i32) -> Self {
        Self::new(Stem::of_year(year), Branch::of_year(year))
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

impl std::str::FromStr for Pillar {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(stem), Some(branch), None) => Ok(Self::new(
                stem.to_string().parse()?,
                branch.to_string().parse()?,
            )),
            _ => Err(format!("Pillar must be exactly two characters: {}", s)),
        }
    }
}

impl TryFrom<String> for Pillar {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Pillar> for String {
    fn from(pillar: Pillar) -> Self {
        pillar.to_string()
    }
}
