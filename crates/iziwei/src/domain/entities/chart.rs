//! Chart - Everything the external calendar/chart library hands over

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::{AgeRange, DaYunPeriod, Palace, Pillar};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{Branch, Stem};

pub const PALACE_COUNT: usize = 12;
pub const DA_YUN_COUNT: usize = 8;

/// Lunar years the engine accepts, for the birth year and for today
pub const LUNAR_YEAR_RANGE: RangeInclusive<i32> = 1..=9999;

/// The four birth pillars (八字)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BirthPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl BirthPillars {
    /// Day master (日元): the stem of the day pillar
    pub fn day_master(&self) -> Stem {
        self.day.stem
    }
}

/// Birth moment on the lunar calendar, as converted externally
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LunarBirth {
    pub year: i32,
    /// Human-readable lunar date, e.g. 一九九〇年四月廿三
    #[serde(default)]
    pub text: String,
}

/// Zi Wei chart: summary fields plus the twelve palaces in source order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chart {
    /// 五行局
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub five_elements_class: Option<String>,
    /// 命主
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soul: Option<String>,
    /// 身主
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub palaces: Vec<Palace>,
}

impl Chart {
    pub fn palace_by_branch(&self, branch: Branch) -> Option<&Palace> {
        self.palaces.iter().find(|p| p.branch == branch)
    }

    /// Palace across the chart from `palace`
    pub fn opposite_of(&self, palace: &Palace) -> Option<&Palace> {
        self.palace_by_branch(palace.branch.opposite())
    }
}

/// Complete raw input for one report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChartBundle {
    pub lunar: LunarBirth,
    pub pillars: BirthPillars,
    pub da_yun: Vec<DaYunPeriod>,
    pub chart: Chart,
}

impl ChartBundle {
    /// Check the structural invariants the engine relies on
    pub fn validate(&self) -> Result<(), DomainError> {
        check_lunar_year("birth", self.lunar.year)?;

        let palaces = &self.chart.palaces;
        if palaces.len() != PALACE_COUNT {
            return Err(DomainError::Validation(format!(
                "expected {} palaces, got {}",
                PALACE_COUNT,
                palaces.len()
            )));
        }

        for branch in Branch::ALL {
            let count = palaces.iter().filter(|p| p.branch == branch).count();
            if count != 1 {
                return Err(DomainError::Validation(format!(
                    "branch {} occupied by {} palaces",
                    branch, count
                )));
            }
        }

        let mut decades: Vec<AgeRange> = palaces.iter().map(|p| p.decadal).collect();
        decades.sort_by_key(|r| r.start);
        for range in &decades {
            if range.end.checked_sub(range.start) != Some(9) {
                return Err(DomainError::Validation(format!(
                    "decade range {}-{} is not ten years wide",
                    range.start, range.end
                )));
            }
        }
        check_contiguous("palace decade", &decades)?;

        if self.da_yun.len() != DA_YUN_COUNT {
            return Err(DomainError::Validation(format!(
                "expected {} Da Yun periods, got {}",
                DA_YUN_COUNT,
                self.da_yun.len()
            )));
        }
        for period in &self.da_yun {
            if period.start_age() > period.end_age() {
                return Err(DomainError::Validation(format!(
                    "Da Yun period {}-{} is reversed",
                    period.start_age(),
                    period.end_age()
                )));
            }
        }
        let ranges: Vec<AgeRange> = self.da_yun.iter().map(|p| p.range).collect();
        check_contiguous("Da Yun", &ranges)?;

        Ok(())
    }
}

/// Reject lunar years outside [`LUNAR_YEAR_RANGE`]
pub fn check_lunar_year(what: &str, year: i32) -> Result<(), DomainError> {
    if LUNAR_YEAR_RANGE.contains(&year) {
        Ok(())
    } else {
        Err(DomainError::Validation(format!(
            "{} lunar year {} outside {}..={}",
            what,
            year,
            LUNAR_YEAR_RANGE.start(),
            LUNAR_YEAR_RANGE.end()
        )))
    }
}

/// Ranges must follow each other with no gap and no overlap
fn check_contiguous(what: &str, ranges: &[AgeRange]) -> Result<(), DomainError> {
    for pair in ranges.windows(2) {
        if pair[0].end.checked_add(1) != Some(pair[1].start) {
            return Err(DomainError::Validation(format!(
                "{} ranges {}-{} and {}-{} are not contiguous",
                what, pair[0].start, pair[0].end, pair[1].start, pair[1].end
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_bundle() -> ChartBundle {
        let palaces = (0..12)
            .map(|i| {
                let branch = Branch::Yin.offset(i);
                let start = 2 + i * 10;
                Palace::new(
                    format!("宫{}", i),
                    Stem::ALL[(i as usize + 4) % 10],
                    branch,
                    AgeRange::new(start, start + 9),
                )
            })
            .collect();
        let da_yun = (0..8)
            .map(|i| {
                let start = 3 + i * 10;
                DaYunPeriod::new(
                    start,
                    start + 9,
                    Pillar::new(Stem::ALL[i as usize], Branch::ALL[i as usize]),
                )
            })
            .collect();

        ChartBundle {
            lunar: LunarBirth {
                year: 1990,
                text: String::new(),
            },
            pillars: BirthPillars {
                year: "庚午".parse().unwrap(),
                month: "辛巳".parse().unwrap(),
                day: "甲子".parse().unwrap(),
                hour: "戊辰".parse().unwrap(),
            },
            da_yun,
            chart: Chart {
                five_elements_class: None,
                soul: None,
                body: None,
                palaces,
            },
        }
    }

    #[test]
    fn test_valid_bundle_passes() {
        assert!(mock_bundle().validate().is_ok());
    }

    #[test]
    fn test_day_master_is_day_stem() {
        assert_eq!(mock_bundle().pillars.day_master(), Stem::Jia);
    }

    #[test]
    fn test_rejects_missing_palace() {
        let mut bundle = mock_bundle();
        bundle.chart.palaces.pop();
        assert!(matches!(bundle.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_rejects_duplicate_branch() {
        let mut bundle = mock_bundle();
        bundle.chart.palaces[1].branch = bundle.chart.palaces[0].branch;
        assert!(bundle.validate().is_err());
    }

    #[test]
    fn test_rejects_gap_between_da_yun() {
        let mut bundle = mock_bundle();
        bundle.da_yun[3].range = AgeRange::new(34, 42);
        assert!(bundle.validate().is_err());
    }

    #[test]
    fn test_rejects_wrong_da_yun_count() {
        let mut bundle = mock_bundle();
        bundle.da_yun.pop();
        assert!(bundle.validate().is_err());
    }

    #[test]
    fn test_rejects_overlapping_decades() {
        let mut bundle = mock_bundle();
        bundle.chart.palaces[5].decadal = AgeRange::new(51, 60);
        assert!(bundle.validate().is_err());
    }

    #[test]
    fn test_rejects_da_yun_at_integer_limit() {
        let mut bundle = mock_bundle();
        bundle.da_yun[0].range = AgeRange::new(i32::MAX - 9, i32::MAX);
        assert!(matches!(bundle.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_rejects_decade_spanning_integer_range() {
        let mut bundle = mock_bundle();
        bundle.chart.palaces[0].decadal = AgeRange::new(i32::MIN, i32::MAX);
        assert!(matches!(bundle.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_rejects_out_of_range_lunar_year() {
        for year in [i32::MIN, 0, 10000, i32::MAX] {
            let mut bundle = mock_bundle();
            bundle.lunar.year = year;
            assert!(
                matches!(bundle.validate(), Err(DomainError::Validation(_))),
                "year {}",
                year
            );
        }
    }

    #[test]
    fn test_opposite_palace_lookup() {
        let bundle = mock_bundle();
        let ming = &bundle.chart.palaces[0];
        let opposite = bundle.chart.opposite_of(ming).unwrap();
        assert_eq!(opposite.branch, Branch::Shen);
    }
}
