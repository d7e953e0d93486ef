//! Chart Analysis - the annotated view of one chart
//!
//! Built fresh per request from a validated [`ChartBundle`]. Input facts are
//! copied through unchanged; only Ten-God, hidden-stem, transformation and
//! period markers are added.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::entities::{AgeRange, ChartBundle, DaYunPeriod, Palace, Pillar, Star};
use crate::domain::services::{
    annotated_hidden_stems, incoming_transformation, self_transformation, ten_god,
    transformation_targets, HiddenStem, SihuaTargets, TemporalContext,
};
use crate::domain::value_objects::{Branch, Gender, Stem, TenGod, TransformationKind};

/// Position of a birth pillar
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

impl PillarPosition {
    pub const ALL: [PillarPosition; 4] = [
        PillarPosition::Year,
        PillarPosition::Month,
        PillarPosition::Day,
        PillarPosition::Hour,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PillarPosition::Year => "年",
            PillarPosition::Month => "月",
            PillarPosition::Day => "日",
            PillarPosition::Hour => "时",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PillarAnalysis {
    pub position: PillarPosition,
    pub pillar: Pillar,
    /// None for the day pillar, whose stem is the day master itself
    pub ten_god: Option<TenGod>,
    pub hidden_stems: Vec<HiddenStem>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DaYunAnalysis {
    pub period: DaYunPeriod,
    pub ten_god: TenGod,
    pub is_active: bool,
}

/// Marker printed after a palace header
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PalaceFlag {
    Body,
    Original,
    MajorPeriod,
    AnnualPeriod,
}

impl PalaceFlag {
    pub fn label(self) -> &'static str {
        match self {
            PalaceFlag::Body => "★身宫",
            PalaceFlag::Original => "★来因宫",
            PalaceFlag::MajorPeriod => "★大限",
            PalaceFlag::AnnualPeriod => "★流年",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AnnotatedStar {
    #[serde(flatten)]
    pub star: Star,
    /// 离心: transformed by the palace's own stem
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_transformation: Option<TransformationKind>,
    /// 向心: transformed by the opposite palace's stem
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incoming_transformation: Option<TransformationKind>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PalaceAnalysis {
    pub name: String,
    pub stem: Stem,
    pub branch: Branch,
    pub flags: Vec<PalaceFlag>,
    pub stars: Vec<AnnotatedStar>,
    pub stages: Vec<String>,
    pub sihua: SihuaTargets,
    pub decadal: AgeRange,
}

impl PalaceAnalysis {
    fn build(palace: &Palace, bundle: &ChartBundle, temporal: &TemporalContext) -> Self {
        let own = self_transformation(palace);
        let incoming = incoming_transformation(palace, &bundle.chart);

        let mut flags = Vec::new();
        if palace.is_body_palace {
            flags.push(PalaceFlag::Body);
        }
        if palace.is_original_palace {
            flags.push(PalaceFlag::Original);
        }
        if temporal.is_major_palace(palace) {
            flags.push(PalaceFlag::MajorPeriod);
        }
        if temporal.is_annual_palace(palace) {
            flags.push(PalaceFlag::AnnualPeriod);
        }

        let stars = palace
            .stars()
            .map(|star| AnnotatedStar {
                star: star.clone(),
                self_transformation: own.get(&star.name).copied(),
                incoming_transformation: incoming.get(&star.name).copied(),
            })
            .collect();

        Self {
            name: palace.name.clone(),
            stem: palace.stem,
            branch: palace.branch,
            flags,
            stars,
            stages: palace
                .stages
                .markers()
                .into_iter()
                .map(str::to_string)
                .collect(),
            sihua: transformation_targets(palace.stem),
            decadal: palace.decadal,
        }
    }

    pub fn pillar(&self) -> Pillar {
        Pillar::new(self.stem, self.branch)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Subject {
    pub birth: NaiveDateTime,
    pub gender: Gender,
    pub lunar_text: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChartSummary {
    pub five_elements_class: Option<String>,
    pub soul: Option<String>,
    pub body: Option<String>,
}

/// Everything the report prints, in print order
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChartAnalysis {
    pub subject: Subject,
    pub day_master: Stem,
    pub pillars: Vec<PillarAnalysis>,
    pub da_yun: Vec<DaYunAnalysis>,
    pub temporal: TemporalContext,
    pub summary: ChartSummary,
    pub palaces: Vec<PalaceAnalysis>,
}

impl ChartAnalysis {
    /// Annotate a bundle. The bundle is expected to be validated.
    pub fn build(
        birth: NaiveDateTime,
        gender: Gender,
        bundle: &ChartBundle,
        today_lunar_year: i32,
    ) -> Self {
        let day_master = bundle.pillars.day_master();
        let temporal = TemporalContext::resolve(bundle, today_lunar_year);

        let pillars = PillarPosition::ALL
            .iter()
            .map(|&position| {
                let pillar = match position {
                    PillarPosition::Year => bundle.pillars.year,
                    PillarPosition::Month => bundle.pillars.month,
                    PillarPosition::Day => bundle.pillars.day,
                    PillarPosition::Hour => bundle.pillars.hour,
                };
                PillarAnalysis {
                    position,
                    pillar,
                    ten_god: (position != PillarPosition::Day)
                        .then(|| ten_god(day_master, pillar.stem)),
                    hidden_stems: annotated_hidden_stems(day_master, pillar.branch),
                }
            })
            .collect();

        let active = temporal.da_yun.active_index();
        let da_yun = bundle
            .da_yun
            .iter()
            .enumerate()
            .map(|(i, period)| DaYunAnalysis {
                period: *period,
                ten_god: ten_god(day_master, period.pillar.stem),
                is_active: active == Some(i),
            })
            .collect();

        let palaces = bundle
            .chart
            .palaces
            .iter()
            .map(|palace| PalaceAnalysis::build(palace, bundle, &temporal))
            .collect();

        Self {
            subject: Subject {
                birth,
                gender,
                lunar_text: bundle.lunar.text.clone(),
            },
            day_master,
            pillars,
            da_yun,
            temporal,
            summary: ChartSummary {
                five_elements_class: bundle.chart.five_elements_class.clone(),
                soul: bundle.chart.soul.clone(),
                body: bundle.chart.body.clone(),
            },
            palaces,
        }
    }

    pub fn active_da_yun(&self) -> Option<&DaYunAnalysis> {
        self.da_yun.iter().find(|d| d.is_active)
    }
}
