use super::AppError;
use crate::model::mode::Mode;
use crate::model::policy::{self, MultiplierGrid, PolicyColumn};
use itertools::Itertools;
use kdam::{Bar, BarExt};
use std::sync::{Arc, Mutex};

/// Fits the model, sweeps the multiplier grid over the target column with
/// frozen coefficients, and writes one response-curve row per grid point.
pub fn run(
    survey_filename: &str,
    reference: Mode,
    column: PolicyColumn,
    grid: MultiplierGrid,
    output_filename: &str,
) -> Result<(), AppError> {
    let (dataset, fitted) = super::estimate::estimate(survey_filename, reference)?;
    let multipliers = grid.values()?;
    log::info!(
        "sweeping {} over {} multipliers in [{}, {}]",
        column,
        multipliers.len(),
        grid.start,
        grid.stop
    );

    let bar = Arc::new(Mutex::new(
        Bar::builder()
            .total(multipliers.len())
            .desc("scenario sweep")
            .build()
            .map_err(|e| AppError::Progress(e.to_string()))?,
    ));
    let outcomes = policy::sweep(&fitted.model, &dataset, column, &multipliers, || {
        if let Ok(mut b) = bar.lock() {
            let _ = b.update(1);
        }
    })?;
    eprintln!();

    let mut writer = csv::Writer::from_path(output_filename)?;
    let header = std::iter::once("multiplier")
        .chain(Mode::ALL.iter().map(|mode| mode.label()))
        .collect_vec();
    writer.write_record(&header)?;
    for outcome in &outcomes {
        let mut record = vec![outcome.multiplier.to_string()];
        record.extend(
            Mode::ALL
                .iter()
                .map(|mode| outcome.expected_count(*mode).to_string()),
        );
        writer.write_record(&record)?;
    }
    writer.flush()?;
    log::info!(
        "wrote {} scenario rows to {}",
        outcomes.len(),
        output_filename
    );
    Ok(())
}
