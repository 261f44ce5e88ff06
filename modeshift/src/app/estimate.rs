use super::AppError;
use crate::model::choice::ChoiceTable;
use crate::model::logit::{self, FittedLogit, LogitOptions, UtilitySpec};
use crate::model::mode::Mode;
use crate::model::survey::SurveyDataset;
use std::fs::File;

/// Loads the survey, fits the mode choice model, and prints the coefficient
/// table. Optionally writes the full fitted model as JSON.
pub fn run(
    survey_filename: &str,
    reference: Mode,
    model_output: Option<&String>,
) -> Result<(), AppError> {
    let (_, fitted) = estimate(survey_filename, reference)?;
    print_report(&fitted);
    if let Some(path) = model_output {
        serde_json::to_writer_pretty(File::create(path)?, &fitted)?;
        log::info!("wrote fitted model to {}", path);
    }
    Ok(())
}

/// Shared estimation entry for the other subcommands: every analysis
/// loads and fits once, so downstream results always refer to one model.
pub fn estimate(
    survey_filename: &str,
    reference: Mode,
) -> Result<(SurveyDataset, FittedLogit), AppError> {
    let dataset = SurveyDataset::from_csv_path(survey_filename)?;
    log::info!(
        "loaded {} respondents from {}",
        dataset.len(),
        survey_filename
    );
    let table = ChoiceTable::from_dataset(&dataset);
    let spec = UtilitySpec::new(reference);
    let fitted = logit::fit(&table, &spec, &LogitOptions::default())?;
    log::info!(
        "estimation converged in {} iterations, log-likelihood {:.4}",
        fitted.iterations,
        fitted.log_likelihood
    );
    Ok((dataset, fitted))
}

fn print_report(fitted: &FittedLogit) {
    println!(
        "{:<14} {:>12} {:>12} {:>9} {:>9}",
        "coefficient", "estimate", "std error", "z", "p"
    );
    for c in &fitted.coefficients {
        println!(
            "{:<14} {:>12.6} {:>12.6} {:>9.3} {:>9.4}",
            c.name, c.estimate, c.std_error, c.z_value, c.p_value
        );
    }
    println!();
    println!("log-likelihood      {:>12.4}", fitted.log_likelihood);
    println!("null log-likelihood {:>12.4}", fitted.null_log_likelihood);
    println!("mcfadden pseudo-r2  {:>12.4}", fitted.mcfadden_r2);
    println!(
        "reference mode      {:>12}",
        fitted.model.spec().reference().label()
    );
}
