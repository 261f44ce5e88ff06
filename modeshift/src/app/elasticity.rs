use super::AppError;
use crate::model::choice::ChoiceTable;
use crate::model::elasticity::{self, ElasticitySummary};
use crate::model::mode::Mode;
use itertools::Itertools;

/// Computes per-respondent own- and cross-price elasticities for the target
/// alternative, prints summary statistics, and optionally writes the
/// own-elasticity density curve as CSV.
pub fn run(
    survey_filename: &str,
    reference: Mode,
    target: Mode,
    grid_points: usize,
    density_output: Option<&String>,
) -> Result<(), AppError> {
    let (dataset, fitted) = super::estimate::estimate(survey_filename, reference)?;
    let table = ChoiceTable::from_dataset(&dataset);

    let records = elasticity::cost_elasticities(&fitted.model, &table, target);
    let own = records.iter().map(|r| r.own).collect_vec();
    let cross = records.iter().map(|r| r.cross).collect_vec();

    println!(
        "{:<6} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "", "mean", "std dev", "min", "q25", "median", "q75", "max"
    );
    print_summary("own", &elasticity::summarize(&own)?);
    print_summary("cross", &elasticity::summarize(&cross)?);

    if let Some(path) = density_output {
        let curve = elasticity::gaussian_kde(&own, grid_points)?;
        let mut writer = csv::Writer::from_path(path)?;
        for point in curve {
            writer.serialize(point)?;
        }
        writer.flush()?;
        log::info!("wrote own-elasticity density curve to {}", path);
    }
    Ok(())
}

fn print_summary(label: &str, summary: &ElasticitySummary) {
    println!(
        "{:<6} {:>10.4} {:>10.4} {:>10.4} {:>10.4} {:>10.4} {:>10.4} {:>10.4}",
        label,
        summary.mean,
        summary.std_dev,
        summary.min,
        summary.q25,
        summary.median,
        summary.q75,
        summary.max
    );
}
