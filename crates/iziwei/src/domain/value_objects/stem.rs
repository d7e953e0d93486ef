//! Stem (天干) - The ten heavenly stems

use serde::{Deserialize, Serialize};

/// Heavenly stem
///
/// Serialized as the stem's character (`"甲"`); parsing additionally
/// accepts the pinyin name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Stem {
    #[serde(rename = "甲")]
    Jia,
    #[serde(rename = "乙")]
    Yi,
    #[serde(rename = "丙")]
    Bing,
    #[serde(rename = "丁")]
    Ding,
    #[serde(rename = "戊")]
    Wu,
    #[serde(rename = "己")]
    Ji,
    #[serde(rename = "庚")]
    Geng,
    #[serde(rename = "辛")]
    Xin,
    #[serde(rename = "壬")]
    Ren,
    #[serde(rename = "癸")]
    Gui,
}

impl Stem {
    /// All stems in cycle order
    pub const ALL: [Stem; 10] = [
        Stem::Jia,
        Stem::Yi,
        Stem::Bing,
        Stem::Ding,
        Stem::Wu,
        Stem::Ji,
        Stem::Geng,
        Stem::Xin,
        Stem::Ren,
        Stem::Gui,
    ];

    /// Position in the ten-stem cycle (甲 = 0)
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_char(self) -> char {
        match self {
            Stem::Jia => '甲',
            Stem::Yi => '乙',
            Stem::Bing => '丙',
            Stem::Ding => '丁',
            Stem::Wu => '戊',
            Stem::Ji => '己',
            Stem::Geng => '庚',
            Stem::Xin => '辛',
            Stem::Ren => '壬',
            Stem::Gui => '癸',
        }
    }

    /// Stem of a lunar year in the sexagenary cycle (1984 = 甲子)
    pub fn of_year(year: i32) -> Self {
        Self::ALL[((year.rem_euclid(10) + 6) % 10) as usize]
    }
}

impl std::fmt::Display for Stem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl std::str::FromStr for Stem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "甲" | "jia" => Ok(Stem::Jia),
            "乙" | "yi" => Ok(Stem::Yi),
            "丙" | "bing" => Ok(Stem::Bing),
            "丁" | "ding" => Ok(Stem::Ding),
            "戊" | "wu" => Ok(Stem::Wu),
            "己" | "ji" => Ok(Stem::Ji),
            "庚" | "geng" => Ok(Stem::Geng),
            "辛" | "xin" => Ok(Stem::Xin),
            "壬" | "ren" => Ok(Stem::Ren),
            "癸" | "gui" => Ok(Stem::Gui),
            _ => Err(format!("Unknown stem: {}", s)),
        }
    }
}
