//! Hidden-Stem Decomposer

use serde::{Deserialize, Serialize};

use super::ten_god::ten_god;
use crate::domain::tables::HIDDEN_STEMS;
use crate::domain::value_objects::{Branch, Stem, TenGod};

/// A hidden stem tagged with its role against the day master
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HiddenStem {
    pub stem: Stem,
    pub ten_god: TenGod,
}

/// Hidden stems of a branch, primary first
pub fn hidden_stems(branch: Branch) -> &'static [Stem] {
    HIDDEN_STEMS[branch.index()]
}

/// Hidden stems of a branch annotated against `day_master`, table order kept
pub fn annotated_hidden_stems(day_master: Stem, branch: Branch) -> Vec<HiddenStem> {
    hidden_stems(branch)
        .iter()
        .map(|&stem| HiddenStem {
            stem,
            ten_god: ten_god(day_master, stem),
        })
        .collect()
}
