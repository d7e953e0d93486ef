//! Star (星曜) - A star placed in a palace by the external chart

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::TransformationKind;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Star {
    pub name: String,
    /// Brightness label such as 庙 / 旺 / 陷
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<String>,
    /// Birth-year transformation already assigned by the chart
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mutagen: Option<TransformationKind>,
}

impl Star {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            brightness: None,
            mutagen: None,
        }
    }

    pub fn with_brightness(mut self, brightness: impl Into<String>) -> Self {
        self.brightness = Some(brightness.into());
        self
    }

    pub fn with_mutagen(mut self, mutagen: TransformationKind) -> Self {
        self.mutagen = Some(mutagen);
        self
    }
}
