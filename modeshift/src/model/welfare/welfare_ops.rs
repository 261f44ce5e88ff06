use super::WelfareError;
use crate::model::choice::ChoiceTable;
use crate::model::logit::LogitModel;
use serde::Serialize;

/// Consumer-surplus change between two scenarios. Positive totals are
/// welfare gains.
#[derive(Debug, Clone, Serialize)]
pub struct WelfareChange {
    /// compensating variation per respondent, in income units.
    pub per_respondent: Vec<f64>,
    pub total: f64,
}

impl WelfareChange {
    pub fn mean(&self) -> f64 {
        self.total / self.per_respondent.len() as f64
    }
}

/// Log-sum consumer surplus: each respondent's compensating variation is
/// the log-sum change divided by their marginal utility of income. With
/// cost entering utility as cost/income, that marginal utility is
/// -beta_cost / income, so the per-person change is
///
///   cv_i = (logsum_new_i - logsum_old_i) * income_i / (-beta_cost)
pub fn consumer_surplus(
    model: &LogitModel,
    base: &ChoiceTable,
    counterfactual: &ChoiceTable,
) -> Result<WelfareChange, WelfareError> {
    if base.respondent_count() != counterfactual.respondent_count() {
        return Err(WelfareError::DimensionMismatch(
            base.respondent_count(),
            counterfactual.respondent_count(),
        ));
    }
    let beta_cost = model.cost_coefficient();
    if beta_cost == 0.0 {
        return Err(WelfareError::ZeroCostCoefficient);
    }
    let per_respondent: Vec<f64> = base
        .respondents()
        .zip(counterfactual.respondents())
        .map(|(old_group, new_group)| {
            let delta = model.logsum(new_group) - model.logsum(old_group);
            delta * old_group[0].income / (-beta_cost)
        })
        .collect();
    let total = per_respondent.iter().sum();
    Ok(WelfareChange {
        per_respondent,
        total,
    })
}
