use super::ElasticityError;
use crate::model::choice::ChoiceTable;
use crate::model::logit::LogitModel;
use crate::model::mode::Mode;
use crate::util::stats;
use serde::Serialize;

/// Per-respondent price elasticities of the target alternative.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ElasticityRecord {
    pub respondent: usize,
    /// % change in the target's own choice probability per % change in its
    /// own cost.
    pub own: f64,
    /// % change in every competing alternative's probability per % change
    /// in the target's cost.
    pub cross: f64,
}

/// Own- and cross-price cost elasticities from the fitted probabilities.
/// The closed forms follow from the shared cost/income coefficient:
///
///   e_own   =  beta_cost * (cost_t / income) * (1 - P(t))
///   e_cross = -beta_cost * (cost_t / income) * P(t)
pub fn cost_elasticities(
    model: &LogitModel,
    table: &ChoiceTable,
    target: Mode,
) -> Vec<ElasticityRecord> {
    let beta_cost = model.cost_coefficient();
    table
        .respondents()
        .enumerate()
        .map(|(respondent, group)| {
            let probs = model.probabilities(group);
            let row = &group[target.index()];
            let ratio = row.cost / row.income;
            let p = probs[target.index()];
            ElasticityRecord {
                respondent,
                own: beta_cost * ratio * (1.0 - p),
                cross: -beta_cost * ratio * p,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ElasticitySummary {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

pub fn summarize(values: &[f64]) -> Result<ElasticitySummary, ElasticityError> {
    if values.is_empty() {
        return Err(ElasticityError::EmptySample);
    }
    Ok(ElasticitySummary {
        mean: stats::mean(values),
        std_dev: stats::std_dev(values),
        min: stats::quantile(values, 0.0),
        q25: stats::quantile(values, 0.25),
        median: stats::quantile(values, 0.5),
        q75: stats::quantile(values, 0.75),
        max: stats::quantile(values, 1.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::logit::UtilitySpec;
    use crate::model::survey::{SurveyDataset, SurveyRecord};

    fn table() -> ChoiceTable {
        let records = vec![
            SurveyRecord {
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
            },
            SurveyRecord {
                mode: Mode::Car,
                cost_bike: 0.6,
                cost_walk: 0.0,
                cost_bus: 1.75,
                cost_car: 3.5,
                time_bike: 25.0,
                time_walk: 50.0,
                time_bus: 35.0,
                time_car: 10.0,
                income: 55.0,
            },
        ];
        let dataset = SurveyDataset::new(records).expect("test records should be valid");
        ChoiceTable::from_dataset(&dataset)
    }

    fn model() -> LogitModel {
        LogitModel::from_coefficients(
            UtilitySpec::new(Mode::Car),
            &[-0.5, -1.0, 0.2, -12.0, -0.05, -0.06, -0.04, -0.03],
        )
        .expect("coefficient vector should match the spec")
    }

    #[test]
    fn test_elasticity_signs_with_negative_cost_coefficient() {
        let records = cost_elasticities(&model(), &table(), Mode::Car);
        assert_eq!(records.len(), 2);
        for record in records {
            assert!(record.own < 0.0);
            assert!(record.cross > 0.0);
        }
    }

    #[test]
    fn test_elasticity_magnitudes_decompose() {
        // own and cross components reassemble to beta * cost/income
        let model = model();
        let table = table();
        let beta = model.cost_coefficient();
        for (record, group) in cost_elasticities(&model, &table, Mode::Car)
            .iter()
            .zip(table.respondents())
        {
            let row = &group[Mode::Car.index()];
            let expected = beta * row.cost / row.income;
            assert!((record.own - record.cross - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_summary_orders_quantiles() {
        let values = vec![-0.9, -0.1, -0.5, -0.3, -0.7];
        let summary = summarize(&values).expect("non-empty sample should summarize");
        assert!(summary.min <= summary.q25);
        assert!(summary.q25 <= summary.median);
        assert!(summary.median <= summary.q75);
        assert!(summary.q75 <= summary.max);
        assert!((summary.median - (-0.5)).abs() < 1e-12);
    }

    #[test]
    fn test_empty_sample_rejected() {
        assert!(matches!(
            summarize(&[]),
            Err(ElasticityError::EmptySample)
        ));
    }
}
