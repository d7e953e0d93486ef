//! Temporal Locator
//!
//! Resolves where "today" falls in the chart: virtual age, the active Da Yun
//! period, the active decade (大限) palace and the annual (流年) palace.

use serde::Serialize;

use crate::domain::entities::{ChartBundle, DaYunPeriod, Palace, Pillar};
use crate::domain::value_objects::Branch;

/// Nominal age (虚岁): the birth year counts as one.
///
/// Saturates at the `i32` bounds; reports only see validated years.
pub fn virtual_age(birth_lunar_year: i32, today_lunar_year: i32) -> i32 {
    today_lunar_year
        .saturating_sub(birth_lunar_year)
        .saturating_add(1)
}

/// Where the virtual age falls among the Da Yun periods
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "status", content = "index", rename_all = "snake_case")]
pub enum DaYunStatus {
    /// Younger than the first period's start age (未起运)
    NotStarted,
    /// Index into the period list
    Active(usize),
    /// Older than the last period's end age
    Beyond,
}

impl DaYunStatus {
    pub fn active_index(&self) -> Option<usize> {
        match self {
            DaYunStatus::Active(index) => Some(*index),
            _ => None,
        }
    }
}

pub fn locate_da_yun(periods: &[DaYunPeriod], age: i32) -> DaYunStatus {
    if let Some(index) = periods.iter().position(|p| p.range.contains(age)) {
        return DaYunStatus::Active(index);
    }
    match periods.first() {
        Some(first) if age < first.start_age() => DaYunStatus::NotStarted,
        Some(_) => DaYunStatus::Beyond,
        None => DaYunStatus::NotStarted,
    }
}

/// Palace whose decade range equals the active Da Yun range.
///
/// None when no period is active or no palace carries that exact range.
pub fn locate_major_palace(
    palaces: &[Palace],
    periods: &[DaYunPeriod],
    status: DaYunStatus,
) -> Option<Branch> {
    let active = status.active_index().and_then(|i| periods.get(i))?;
    palaces
        .iter()
        .find(|p| p.decadal == active.range)
        .map(|p| p.branch)
}

/// Palace sitting on the branch of the current lunar year
pub fn locate_annual_palace(palaces: &[Palace], year_branch: Branch) -> Option<Branch> {
    palaces
        .iter()
        .find(|p| p.branch == year_branch)
        .map(|p| p.branch)
}

/// Temporal markers for one report, computed once
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct TemporalContext {
    pub today_lunar_year: i32,
    /// Sexagenary pillar of the current lunar year (流年)
    pub annual_pillar: Pillar,
    pub virtual_age: i32,
    pub da_yun: DaYunStatus,
    pub major_palace: Option<Branch>,
    pub annual_palace: Option<Branch>,
}

impl TemporalContext {
    pub fn resolve(bundle: &ChartBundle, today_lunar_year: i32) -> Self {
        let age = virtual_age(bundle.lunar.year, today_lunar_year);
        let annual_pillar = Pillar::of_year(today_lunar_year);
        let palaces = &bundle.chart.palaces;
        let da_yun = locate_da_yun(&bundle.da_yun, age);

        let context = Self {
            today_lunar_year,
            annual_pillar,
            virtual_age: age,
            da_yun,
            major_palace: locate_major_palace(palaces, &bundle.da_yun, da_yun),
            annual_palace: locate_annual_palace(palaces, annual_pillar.branch),
        };

        tracing::debug!(
            "Temporal context: age {} | da yun {:?} | 大限 {:?} | 流年 {:?}",
            context.virtual_age,
            context.da_yun,
            context.major_palace,
            context.annual_palace
        );

        context
    }

    pub fn is_major_palace(&self, palace: &Palace) -> bool {
        self.major_palace == Some(palace.branch)
    }

    pub fn is_annual_palace(&self, palace: &Palace) -> bool {
        self.annual_palace == Some(palace.branch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::AgeRange;
    use crate::domain::value_objects::Stem;

    fn periods() -> Vec<DaYunPeriod> {
        (0..8)
            .map(|i| {
                let start = 3 + i * 10;
                DaYunPeriod::new(start, start + 9, Pillar::of_year(2000 + i))
            })
            .collect()
    }

    /// Twelve palaces from 寅 with decades starting at `first_start`
    fn palaces(first_start: i32) -> Vec<Palace> {
        (0..12)
            .map(|i| {
                let start = first_start + i * 10;
                Palace::new(
                    "宫",
                    Stem::Jia,
                    Branch::Yin.offset(i),
                    AgeRange::new(start, start + 9),
                )
            })
            .collect()
    }

    #[test]
    fn test_virtual_age_adds_one() {
        assert_eq!(virtual_age(1990, 2026), 37);
        assert_eq!(virtual_age(2026, 2026), 1);
    }

    #[test]
    fn test_virtual_age_saturates() {
        assert_eq!(virtual_age(i32::MIN, 2026), i32::MAX);
        assert_eq!(virtual_age(i32::MAX, i32::MIN), i32::MIN + 1);
    }

    #[test]
    fn test_periods_are_contiguous() {
        let periods = periods();
        for i in 0..7 {
            assert_eq!(periods[i].end_age() + 1, periods[i + 1].start_age());
        }
    }

    #[test]
    fn test_locate_active_da_yun() {
        let periods = periods();
        assert_eq!(locate_da_yun(&periods, 3), DaYunStatus::Active(0));
        assert_eq!(locate_da_yun(&periods, 37), DaYunStatus::Active(3));
        assert_eq!(locate_da_yun(&periods, 82), DaYunStatus::Active(7));
    }

    #[test]
    fn test_before_first_period_is_not_started() {
        assert_eq!(locate_da_yun(&periods(), 2), DaYunStatus::NotStarted);
        assert_eq!(locate_da_yun(&periods(), 0), DaYunStatus::NotStarted);
    }

    #[test]
    fn test_after_last_period_is_beyond() {
        assert_eq!(locate_da_yun(&periods(), 83), DaYunStatus::Beyond);
    }

    #[test]
    fn test_major_palace_matches_active_range() {
        let palaces = palaces(3);
        let periods = periods();
        assert_eq!(
            locate_major_palace(&palaces, &periods, DaYunStatus::Active(3)),
            Some(Branch::Si)
        );
        assert_eq!(
            locate_major_palace(&palaces, &periods, DaYunStatus::Active(0)),
            Some(Branch::Yin)
        );
    }

    #[test]
    fn test_offset_ranges_mark_no_major_palace() {
        // Palace decades 2-11, 12-21.. against Da Yun 3-12, 13-22..
        let palaces = palaces(2);
        let periods = periods();
        for i in 0..8 {
            assert_eq!(
                locate_major_palace(&palaces, &periods, DaYunStatus::Active(i)),
                None
            );
        }
    }

    #[test]
    fn test_no_major_palace_outside_da_yun() {
        let palaces = palaces(3);
        let periods = periods();
        assert_eq!(
            locate_major_palace(&palaces, &periods, DaYunStatus::NotStarted),
            None
        );
        assert_eq!(
            locate_major_palace(&palaces, &periods, DaYunStatus::Beyond),
            None
        );
    }

    #[test]
    fn test_annual_palace_by_branch() {
        let palaces = palaces(2);
        assert_eq!(
            locate_annual_palace(&palaces, Branch::of_year(2026)),
            Some(Branch::Wu)
        );
    }

    #[test]
    fn test_annual_palace_independent_of_age() {
        let palaces = palaces(2);
        let a = locate_annual_palace(&palaces, Branch::of_year(2026));
        let b = locate_annual_palace(&palaces, Branch::of_year(2038));
        assert_eq!(a, b);
    }
}
