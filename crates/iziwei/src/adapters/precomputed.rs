//! Precomputed Chart Provider
//!
//! Serves a chart bundle that the external library already produced and
//! exported as JSON.

use chrono::NaiveDateTime;

use crate::domain::entities::ChartBundle;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::Gender;
use crate::ports::ChartProvider;

#[derive(Debug, Clone)]
pub struct PrecomputedChartProvider {
    bundle: ChartBundle,
}

impl PrecomputedChartProvider {
    pub fn new(bundle: ChartBundle) -> Self {
        Self { bundle }
    }

    /// Parse a bundle exported as JSON
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let bundle: ChartBundle = serde_json::from_str(json)?;
        Ok(Self::new(bundle))
    }

    pub fn bundle(&self) -> &ChartBundle {
        &self.bundle
    }
}

impl ChartProvider for PrecomputedChartProvider {
    fn compute(&self, birth: NaiveDateTime, gender: Gender) -> Result<ChartBundle, DomainError> {
        tracing::debug!("Serving precomputed chart for {} ({})", birth, gender);
        Ok(self.bundle.clone())
    }

    fn name(&self) -> &str {
        "precomputed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = PrecomputedChartProvider::from_json("{\"lunar\": 1}").unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn test_from_json_rejects_unknown_stem() {
        let json = r#"{
            "lunar": {"year": 1990},
            "pillars": {"year": "庚午", "month": "辛巳", "day": "X子", "hour": "戊辰"},
            "da_yun": [],
            "chart": {"palaces": []}
        }"#;
        assert!(PrecomputedChartProvider::from_json(json).is_err());
    }

    #[test]
    fn test_compute_returns_bundle() {
        let json = r#"{
            "lunar": {"year": 1990, "text": "一九九〇年四月廿三"},
            "pillars": {"year": "庚午", "month": "辛巳", "day": "甲子", "hour": "戊辰"},
            "da_yun": [],
            "chart": {"palaces": []}
        }"#;
        let provider = PrecomputedChartProvider::from_json(json).unwrap();
        let birth = chrono::NaiveDate::from_ymd_opt(1990, 5, 17)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        let bundle = provider.compute(birth, Gender::Male).unwrap();
        assert_eq!(bundle.lunar.year, 1990);
        assert_eq!(bundle.pillars.day.to_string(), "甲子");
        assert_eq!(provider.name(), "precomputed");
    }
}
