use super::{PolicyColumn, ScenarioError};
use crate::model::survey::SurveyDataset;

/// A multiplicative perturbation of one survey column, applied to every
/// respondent. Ephemeral: scenarios are built per simulation point.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    column: PolicyColumn,
    multiplier: f64,
}

impl Scenario {
    /// rejects out-of-domain multipliers before any scoring happens; a
    /// non-positive factor would produce negative times or costs.
    pub fn new(column: PolicyColumn, multiplier: f64) -> Result<Self, ScenarioError> {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(ScenarioError::InvalidMultiplier(multiplier));
        }
        Ok(Self { column, multiplier })
    }

    pub fn column(&self) -> PolicyColumn {
        self.column
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// builds the perturbed dataset, leaving the input untouched.
    pub fn apply(&self, dataset: &SurveyDataset) -> Result<SurveyDataset, ScenarioError> {
        let records = dataset
            .records()
            .iter()
            .map(|record| {
                let mut perturbed = record.clone();
                match self.column {
                    PolicyColumn::Cost(mode) => *perturbed.cost_mut(mode) *= self.multiplier,
                    PolicyColumn::Time(mode) => *perturbed.time_mut(mode) *= self.multiplier,
                    PolicyColumn::Income => perturbed.income *= self.multiplier,
                }
                perturbed
            })
            .collect();
        Ok(SurveyDataset::new(records)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::mode::Mode;
    use crate::model::survey::SurveyRecord;

    fn dataset() -> SurveyDataset {
        let records = vec![SurveyRecord {
            mode: Mode::Bus,
            cost_bike: 0.5,
            cost_walk: 0.0,
            cost_bus: 1.75,
            cost_car: 4.0,
            time_bike: 20.0,
            time_walk: 40.0,
            time_bus: 30.0,
            time_car: 15.0,
            income: 42.0,
        }];
        SurveyDataset::new(records).expect("test records should be valid")
    }

    #[test]
    fn test_scales_only_target_column() {
        let dataset = dataset();
        let scenario = Scenario::new(PolicyColumn::Time(Mode::Bus), 0.8)
            .expect("multiplier 0.8 should be valid");
        let perturbed = scenario.apply(&dataset).expect("apply should succeed");
        let original = &dataset.records()[0];
        let scaled = &perturbed.records()[0];
        assert!((scaled.time_bus - 24.0).abs() < 1e-12);
        assert_eq!(scaled.time_car, original.time_car);
        assert_eq!(scaled.cost_bus, original.cost_bus);
        assert_eq!(scaled.income, original.income);
        // input untouched
        assert_eq!(original.time_bus, 30.0);
    }

    #[test]
    fn test_income_scaling() {
        let scenario =
            Scenario::new(PolicyColumn::Income, 1.5).expect("multiplier 1.5 should be valid");
        let perturbed = scenario.apply(&dataset()).expect("apply should succeed");
        assert!((perturbed.records()[0].income - 63.0).abs() < 1e-12);
    }

    #[test]
    fn test_non_positive_multiplier_rejected() {
        for bad in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            let result = Scenario::new(PolicyColumn::Time(Mode::Bus), bad);
            assert!(matches!(result, Err(ScenarioError::InvalidMultiplier(_))));
        }
    }
}
