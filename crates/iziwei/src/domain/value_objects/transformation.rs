//! TransformationKind (四化) - The four Sihua categories

use serde::{Deserialize, Serialize};

/// One of the four transformations a stem assigns to a star
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransformationKind {
    /// 化禄
    #[serde(rename = "禄")]
    Abundance,
    /// 化权
    #[serde(rename = "权")]
    Power,
    /// 化科
    #[serde(rename = "科")]
    Status,
    /// 化忌
    #[serde(rename = "忌")]
    Taboo,
}

impl TransformationKind {
    /// Canonical order 禄 权 科 忌
    pub const ALL: [TransformationKind; 4] = [
        TransformationKind::Abundance,
        TransformationKind::Power,
        TransformationKind::Status,
        TransformationKind::Taboo,
    ];

    pub fn as_char(self) -> char {
        match self {
            TransformationKind::Abundance => '禄',
            TransformationKind::Power => '权',
            TransformationKind::Status => '科',
            TransformationKind::Taboo => '忌',
        }
    }
}

impl std::fmt::Display for TransformationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl std::str::FromStr for TransformationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "禄" | "abundance" => Ok(TransformationKind::Abundance),
            "权" | "power" => Ok(TransformationKind::Power),
            "科" | "status" => Ok(TransformationKind::Status),
            "忌" | "taboo" => Ok(TransformationKind::Taboo),
            _ => Err(format!("Unknown transformation: {}", s)),
        }
    }
}
