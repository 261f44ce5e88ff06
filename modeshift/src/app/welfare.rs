use super::AppError;
use crate::model::choice::ChoiceTable;
use crate::model::mode::Mode;
use crate::model::policy::{PolicyColumn, Scenario};
use crate::model::welfare;

/// Reports the consumer-surplus change of a single scenario against the
/// baseline. Positive values are welfare gains.
pub fn run(
    survey_filename: &str,
    reference: Mode,
    column: PolicyColumn,
    multiplier: f64,
) -> Result<(), AppError> {
    let (dataset, fitted) = super::estimate::estimate(survey_filename, reference)?;
    let scenario = Scenario::new(column, multiplier)?;
    let base = ChoiceTable::from_dataset(&dataset);
    let perturbed = scenario.apply(&dataset)?;
    let counterfactual = ChoiceTable::from_dataset(&perturbed);

    let change = welfare::consumer_surplus(&fitted.model, &base, &counterfactual)?;
    println!("scenario: {} x {}", column, multiplier);
    println!("aggregate consumer surplus change {:>12.4}", change.total);
    println!("mean per respondent               {:>12.4}", change.mean());
    Ok(())
}
