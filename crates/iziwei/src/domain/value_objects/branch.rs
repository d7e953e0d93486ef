//! Branch (地支) - The twelve earthly branches

use serde::{Deserialize, Serialize};

/// Earthly branch, arranged in the fixed 12-step cycle starting at 子
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Branch {
    #[serde(rename = "子")]
    Zi,
    #[serde(rename = "丑")]
    Chou,
    #[serde(rename = "寅")]
    Yin,
    #[serde(rename = "卯")]
    Mao,
    #[serde(rename = "辰")]
    Chen,
    #[serde(rename = "巳")]
    Si,
    #[serde(rename = "午")]
    Wu,
    #[serde(rename = "未")]
    Wei,
    #[serde(rename = "申")]
    Shen,
    #[serde(rename = "酉")]
    You,
    #[serde(rename = "戌")]
    Xu,
    #[serde(rename = "亥")]
    Hai,
}

impl Branch {
    /// All branches in cycle order
    pub const ALL: [Branch; 12] = [
        Branch::Zi,
        Branch::Chou,
        Branch::Yin,
        Branch::Mao,
        Branch::Chen,
        Branch::Si,
        Branch::Wu,
        Branch::Wei,
        Branch::Shen,
        Branch::You,
        Branch::Xu,
        Branch::Hai,
    ];

    /// Position in the cycle (子 = 0)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Branch `steps` positions further along the cycle (mod 12)
    pub fn offset(self, steps: i32) -> Self {
        Self::ALL[(self.index() as i32 + steps).rem_euclid(12) as usize]
    }

    /// Opposite branch across the chart (six steps away)
    pub fn opposite(self) -> Self {
        self.offset(6)
    }

    pub fn as_char(self) -> char {
        match self {
            Branch::Zi => '子',
            Branch::Chou => '丑',
            Branch::Yin => '寅',
            Branch::Mao => '卯',
            Branch::Chen => '辰',
            Branch::Si => '巳',
            Branch::Wu => '午',
            Branch::Wei => '未',
            Branch::Shen => '申',
            Branch::You => '酉',
            Branch::Xu => '戌',
            Branch::Hai => '亥',
        }
    }

    /// Branch of a lunar year in the sexagenary cycle (1984 = 甲子)
    pub fn of_year(year: i32) -> Self {
        Self::ALL[((year.rem_euclid(12) + 8) % 12) as usize]
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl std::str::FromStr for Branch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "子" | "zi" => Ok(Branch::Zi),
            "丑" | "chou" => Ok(Branch::Chou),
            "寅" | "yin" => Ok(Branch::Yin),
            "卯" | "mao" => Ok(Branch::Mao),
            "辰" | "chen" => Ok(Branch::Chen),
            "巳" | "si" => Ok(Branch::Si),
            "午" | "wu" => Ok(Branch::Wu),
            "未" | "wei" => Ok(Branch::Wei),
            "申" | "shen" => Ok(Branch::Shen),
            "酉" | "you" => Ok(Branch::You),
            "戌" | "xu" => Ok(Branch::Xu),
            "亥" | "hai" => Ok(Branch::Hai),
            _ => Err(format!("Unknown branch: {}", s)),
        }
    }
}
