use super::{PolicyColumn, Scenario, ScenarioError};
use crate::model::choice::ChoiceTable;
use crate::model::logit::LogitModel;
use crate::model::mode::Mode;
use crate::model::survey::SurveyDataset;
use rayon::prelude::*;
use serde::Serialize;

/// Aggregate prediction for one scenario: the sum of choice probabilities
/// across respondents, one expected count per alternative.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScenarioOutcome {
    pub multiplier: f64,
    expected: [f64; Mode::ALL.len()],
}

impl ScenarioOutcome {
    pub fn expected_count(&self, mode: Mode) -> f64 {
        self.expected[mode.index()]
    }

    pub fn share(&self, mode: Mode) -> f64 {
        let total: f64 = self.expected.iter().sum();
        self.expected[mode.index()] / total
    }
}

/// Aggregate predicted counts on the unperturbed dataset.
pub fn baseline(model: &LogitModel, dataset: &SurveyDataset) -> ScenarioOutcome {
    aggregate(model, &ChoiceTable::from_dataset(dataset), 1.0)
}

/// Re-scores a perturbed copy of the dataset with frozen coefficients.
/// Pure in (model, data, scenario): no re-estimation, no randomness.
pub fn simulate(
    model: &LogitModel,
    dataset: &SurveyDataset,
    scenario: &Scenario,
) -> Result<ScenarioOutcome, ScenarioError> {
    let perturbed = scenario.apply(dataset)?;
    let table = ChoiceTable::from_dataset(&perturbed);
    Ok(aggregate(model, &table, scenario.multiplier()))
}

/// Evaluates one scenario per grid point. Points are independent, so they
/// run in parallel over the shared immutable model and dataset; the
/// baseline point (multiplier 1.0) reuses the precomputed aggregate.
/// `progress` is invoked once per completed point.
pub fn sweep<F>(
    model: &LogitModel,
    dataset: &SurveyDataset,
    column: PolicyColumn,
    multipliers: &[f64],
    progress: F,
) -> Result<Vec<ScenarioOutcome>, ScenarioError>
where
    F: Fn() + Sync,
{
    if multipliers.is_empty() {
        return Err(ScenarioError::EmptyGrid);
    }
    let base = baseline(model, dataset);
    multipliers
        .par_iter()
        .map(|&multiplier| {
            let outcome = if multiplier == 1.0 {
                base
            } else {
                simulate(model, dataset, &Scenario::new(column, multiplier)?)?
            };
            progress();
            Ok(outcome)
        })
        .collect()
}

fn aggregate(model: &LogitModel, table: &ChoiceTable, multiplier: f64) -> ScenarioOutcome {
    let mut expected = [0.0; Mode::ALL.len()];
    for group in table.respondents() {
        let probs = model.probabilities(group);
        for (slot, p) in expected.iter_mut().zip(probs.iter()) {
            *slot += p;
        }
    }
    ScenarioOutcome {
        multiplier,
        expected,
    }
}
