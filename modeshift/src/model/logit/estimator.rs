use super::{Coefficient, FittedLogit, LogitError, LogitModel, LogitOptions, UtilitySpec};
use crate::model::choice::ChoiceTable;
use crate::model::mode::Mode;
use nalgebra::{Cholesky, DMatrix, DVector};
use statrs::distribution::{ContinuousCDF, Normal};

const PARAMS: usize = UtilitySpec::PARAM_COUNT;
const ALTS: usize = Mode::ALL.len();

/// Fits the multinomial logit by maximum likelihood using Newton-Raphson
/// with the analytic gradient and information matrix. The log-likelihood is
/// globally concave, so from the zero start vector the search either
/// converges to the unique stationary point or surfaces an identification
/// or separation failure. Fully deterministic: re-running on the same data
/// reproduces the coefficients bit for bit.
pub fn fit(
    table: &ChoiceTable,
    spec: &UtilitySpec,
    options: &LogitOptions,
) -> Result<FittedLogit, LogitError> {
    let mut theta = DVector::zeros(spec.param_count());
    for iteration in 0..options.max_iterations {
        let (ll, grad, info) = score(table, spec, &theta)?;
        if !ll.is_finite() {
            return Err(LogitError::NonFiniteLikelihood(iteration));
        }
        log::debug!(
            "newton iteration {}: log-likelihood {:.6}, max gradient {:.3e}",
            iteration,
            ll,
            grad.amax()
        );
        if grad.amax() < options.tolerance {
            return finalize(table, spec, theta, ll, info, iteration);
        }
        let step = Cholesky::new(info)
            .ok_or(LogitError::Identification)?
            .solve(&grad);

        // full Newton step, halved until the log-likelihood improves
        let mut scale = 1.0;
        loop {
            let candidate = &theta + &step * scale;
            let ll_candidate = log_likelihood(table, spec, &candidate)?;
            if (ll_candidate.is_finite() && ll_candidate >= ll) || scale < 1.0 / 1024.0 {
                theta = candidate;
                break;
            }
            scale *= 0.5;
        }
        if theta.amax() > options.divergence_bound {
            return Err(LogitError::Separation);
        }
    }
    Err(LogitError::NotConverged(options.max_iterations))
}

/// log-likelihood, gradient, and information matrix at `theta`.
fn score(
    table: &ChoiceTable,
    spec: &UtilitySpec,
    theta: &DVector<f64>,
) -> Result<(f64, DVector<f64>, DMatrix<f64>), LogitError> {
    let mut ll = 0.0;
    let mut grad = DVector::zeros(PARAMS);
    let mut info = DMatrix::zeros(PARAMS, PARAMS);
    for (respondent, group) in table.respondents().enumerate() {
        let mut designs = [[0.0; PARAMS]; ALTS];
        let mut v = [0.0; ALTS];
        for (j, row) in group.iter().enumerate() {
            designs[j] = spec.design_vector(row);
            v[j] = dot(&designs[j], theta);
        }
        let chosen = group
            .iter()
            .position(|row| row.chosen)
            .ok_or(LogitError::MissingChoice(respondent))?;

        let v_max = v.iter().fold(f64::NEG_INFINITY, |a, b| a.max(*b));
        let mut p = [0.0; ALTS];
        let mut denom = 0.0;
        for (slot, value) in p.iter_mut().zip(v.iter()) {
            *slot = (value - v_max).exp();
            denom += *slot;
        }
        for slot in p.iter_mut() {
            *slot /= denom;
        }
        ll += v[chosen] - v_max - denom.ln();

        let mut xbar = [0.0; PARAMS];
        for j in 0..ALTS {
            for a in 0..PARAMS {
                xbar[a] += p[j] * designs[j][a];
            }
        }
        for a in 0..PARAMS {
            grad[a] += designs[chosen][a] - xbar[a];
        }
        for j in 0..ALTS {
            for a in 0..PARAMS {
                if designs[j][a] == 0.0 {
                    continue;
                }
                for b in 0..PARAMS {
                    info[(a, b)] += p[j] * designs[j][a] * designs[j][b];
                }
            }
        }
        for a in 0..PARAMS {
            for b in 0..PARAMS {
                info[(a, b)] -= xbar[a] * xbar[b];
            }
        }
    }
    Ok((ll, grad, info))
}

fn log_likelihood(
    table: &ChoiceTable,
    spec: &UtilitySpec,
    theta: &DVector<f64>,
) -> Result<f64, LogitError> {
    let mut ll = 0.0;
    for (respondent, group) in table.respondents().enumerate() {
        let mut v = [0.0; ALTS];
        for (j, row) in group.iter().enumerate() {
            v[j] = dot(&spec.design_vector(row), theta);
        }
        let chosen = group
            .iter()
            .position(|row| row.chosen)
            .ok_or(LogitError::MissingChoice(respondent))?;
        let v_max = v.iter().fold(f64::NEG_INFINITY, |a, b| a.max(*b));
        let denom: f64 = v.iter().map(|value| (value - v_max).exp()).sum();
        ll += v[chosen] - v_max - denom.ln();
    }
    Ok(ll)
}

fn dot(x: &[f64], theta: &DVector<f64>) -> f64 {
    x.iter().zip(theta.iter()).map(|(a, b)| a * b).sum()
}

fn finalize(
    table: &ChoiceTable,
    spec: &UtilitySpec,
    theta: DVector<f64>,
    ll: f64,
    info: DMatrix<f64>,
    iterations: usize,
) -> Result<FittedLogit, LogitError> {
    let covariance = Cholesky::new(info)
        .ok_or(LogitError::Identification)?
        .inverse();
    let model = LogitModel::new(*spec, theta)?;
    let probabilities = model.predict(table);

    // a stationary point where every chosen alternative is predicted with
    // certainty is the separation symptom, not a usable fit
    let perfectly_predicted = table
        .respondents()
        .zip(probabilities.iter())
        .all(|(group, probs)| {
            group
                .iter()
                .zip(probs.iter())
                .filter(|(row, _)| row.chosen)
                .all(|(_, p)| *p > 1.0 - 1e-6)
        });
    if perfectly_predicted {
        return Err(LogitError::Separation);
    }

    let normal = Normal::new(0.0, 1.0).map_err(|e| LogitError::Numeric(e.to_string()))?;
    let coefficients = spec
        .coefficient_names()
        .into_iter()
        .enumerate()
        .map(|(idx, name)| {
            let estimate = model.coefficients()[idx];
            let std_error = covariance[(idx, idx)].sqrt();
            let z_value = estimate / std_error;
            let p_value = 2.0 * (1.0 - normal.cdf(z_value.abs()));
            Coefficient {
                name,
                estimate,
                std_error,
                z_value,
                p_value,
            }
        })
        .collect();

    let n = table.respondent_count() as f64;
    let null_log_likelihood = -n * (ALTS as f64).ln();
    Ok(FittedLogit {
        model,
        coefficients,
        log_likelihood: ll,
        null_log_likelihood,
        mcfadden_r2: 1.0 - ll / null_log_likelihood,
        iterations,
        probabilities,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::choice::ChoiceRow;
    use crate::model::survey::{SurveyDataset, SurveyRecord};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    /// draws choices from a known model so the estimator has a recoverable
    /// signal with realistic noise.
    fn synthetic_dataset(n: usize, seed: u64) -> SurveyDataset {
        let spec = UtilitySpec::new(Mode::Car);
        let truth = LogitModel::from_coefficients(
            spec,
            &[0.4, -0.3, 0.6, -15.0, -0.06, -0.07, -0.05, -0.04],
        )
        .expect("true coefficient vector should match the spec");
        let mut rng = StdRng::seed_from_u64(seed);
        let mut records = Vec::with_capacity(n);
        for respondent in 0..n {
            let income = rng.random_range(20.0..80.0);
            let mut record = SurveyRecord {
                mode: Mode::Car,
                cost_bike: rng.random_range(0.1..1.0),
                cost_walk: 0.0,
                cost_bus: rng.random_range(1.0..3.0),
                cost_car: rng.random_range(2.0..6.0),
                time_bike: rng.random_range(10.0..40.0),
                time_walk: rng.random_range(20.0..60.0),
                time_bus: rng.random_range(15.0..50.0),
                time_car: rng.random_range(5.0..30.0),
                income,
            };
            let group: Vec<ChoiceRow> = Mode::ALL
                .iter()
                .map(|mode| ChoiceRow {
                    respondent,
                    mode: *mode,
                    cost: record.cost(*mode),
                    time: record.time(*mode),
                    income,
                    chosen: false,
                })
                .collect();
            let p = truth.probabilities(&group);
            let draw: f64 = rng.random_range(0.0..1.0);
            let mut cumulative = 0.0;
            for (mode, prob) in Mode::ALL.iter().zip(p.iter()) {
                cumulative += prob;
                if draw < cumulative {
                    record.mode = *mode;
                    break;
                }
            }
            records.push(record);
        }
        SurveyDataset::new(records).expect("synthetic records should be valid")
    }

    #[test]
    fn test_fit_converges_on_synthetic_data() {
        let dataset = synthetic_dataset(400, 42);
        let table = ChoiceTable::from_dataset(&dataset);
        let spec = UtilitySpec::new(Mode::Car);
        let fitted = fit(&table, &spec, &LogitOptions::default())
            .expect("estimation should converge on clean synthetic data");

        assert!(fitted.iterations < LogitOptions::default().max_iterations);
        assert!(fitted.log_likelihood >= fitted.null_log_likelihood);
        assert!(fitted.model.cost_coefficient() < 0.0);
        for probs in &fitted.probabilities {
            let total: f64 = probs.iter().sum();
            assert!((total - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_standard_errors_are_finite_and_positive() {
        let dataset = synthetic_dataset(400, 42);
        let table = ChoiceTable::from_dataset(&dataset);
        let spec = UtilitySpec::new(Mode::Car);
        let fitted = fit(&table, &spec, &LogitOptions::default())
            .expect("estimation should converge on clean synthetic data");
        for coefficient in &fitted.coefficients {
            assert!(coefficient.std_error.is_finite());
            assert!(coefficient.std_error > 0.0);
            assert!(coefficient.p_value >= 0.0 && coefficient.p_value <= 1.0);
        }
    }

    #[test]
    fn test_refit_is_deterministic() {
        let dataset = synthetic_dataset(150, 7);
        let table = ChoiceTable::from_dataset(&dataset);
        let spec = UtilitySpec::new(Mode::Car);
        let options = LogitOptions::default();
        let first = fit(&table, &spec, &options).expect("first fit should converge");
        let second = fit(&table, &spec, &options).expect("second fit should converge");
        assert_eq!(first.model.coefficients(), second.model.coefficients());
        assert_eq!(first.log_likelihood, second.log_likelihood);
        assert_eq!(first.iterations, second.iterations);
    }

    #[test]
    fn test_identical_rows_fail_identification() {
        let record = SurveyRecord {
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
        };
        let dataset = SurveyDataset::new(vec![record; 20]).expect("records should be valid");
        let table = ChoiceTable::from_dataset(&dataset);
        let spec = UtilitySpec::new(Mode::Car);
        let err = fit(&table, &spec, &LogitOptions::default())
            .expect_err("identical covariate rows cannot identify eight parameters");
        assert!(matches!(err, LogitError::Identification));
    }

    #[test]
    fn test_unanimous_choice_is_not_a_usable_fit() {
        // varied covariates, but everyone chooses bike: the bike constant
        // is unbounded and estimation must not return quietly
        let mut dataset = synthetic_dataset(60, 11);
        let records: Vec<SurveyRecord> = dataset
            .records()
            .iter()
            .map(|record| {
                let mut r = record.clone();
                r.mode = Mode::Bike;
                r
            })
            .collect();
        dataset = SurveyDataset::new(records).expect("records should be valid");
        let table = ChoiceTable::from_dataset(&dataset);
        let spec = UtilitySpec::new(Mode::Car);
        assert!(fit(&table, &spec, &LogitOptions::default()).is_err());
    }
}
