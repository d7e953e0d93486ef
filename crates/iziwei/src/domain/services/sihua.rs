//! Transformation (四化) Resolver
//!
//! A palace stem transforms four stars. When the star sits in that same
//! palace it is a self (离心) transformation; when the stem belongs to the
//! opposite palace it is an incoming (向心) transformation. The two checks
//! are independent and may tag the same star.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::entities::{Chart, Palace};
use crate::domain::tables::SIHUA;
use crate::domain::value_objects::{Stem, TransformationKind};

/// Star name -> transformation kind, for stars resident in one palace
pub type TransformationTags = BTreeMap<String, TransformationKind>;

/// The four stars a stem transforms
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SihuaTargets {
    pub stem: Stem,
    pub abundance: &'static str,
    pub power: &'static str,
    pub status: &'static str,
    pub taboo: &'static str,
}

impl SihuaTargets {
    pub fn star(&self, kind: TransformationKind) -> &'static str {
        match kind {
            TransformationKind::Abundance => self.abundance,
            TransformationKind::Power => self.power,
            TransformationKind::Status => self.status,
            TransformationKind::Taboo => self.taboo,
        }
    }

    /// Pairs in 禄 权 科 忌 order
    pub fn pairs(&self) -> [(TransformationKind, &'static str); 4] {
        TransformationKind::ALL.map(|kind| (kind, self.star(kind)))
    }

    /// Which transformation, if any, this stem gives the named star
    pub fn kind_of(&self, star_name: &str) -> Option<TransformationKind> {
        self.pairs()
            .into_iter()
            .find(|(_, name)| *name == star_name)
            .map(|(kind, _)| kind)
    }
}

pub fn transformation_targets(stem: Stem) -> SihuaTargets {
    let [abundance, power, status, taboo] = SIHUA[stem.index()];
    SihuaTargets {
        stem,
        abundance,
        power,
        status,
        taboo,
    }
}

/// Tag the stars of `palace` that `stem` transforms
fn tag_resident_stars(palace: &Palace, stem: Stem) -> TransformationTags {
    let targets = transformation_targets(stem);
    palace
        .stars()
        .filter_map(|star| {
            targets
                .kind_of(&star.name)
                .map(|kind| (star.name.clone(), kind))
        })
        .collect()
}

/// 离心: stars transformed by their own palace's stem
pub fn self_transformation(palace: &Palace) -> TransformationTags {
    tag_resident_stars(palace, palace.stem)
}

/// 向心: stars transformed by the opposite palace's stem.
///
/// Empty when the chart has no opposite palace.
pub fn incoming_transformation(palace: &Palace, chart: &Chart) -> TransformationTags {
    match chart.opposite_of(palace) {
        Some(opposite) => tag_resident_stars(palace, opposite.stem),
        None => {
            tracing::debug!(
                "No palace opposite {} ({}), skipping incoming transformations",
                palace.name,
                palace.branch
            );
            TransformationTags::new()
        }
    }
}
