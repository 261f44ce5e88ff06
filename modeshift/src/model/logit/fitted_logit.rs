use super::LogitModel;
use crate::model::mode::Mode;
use serde::Serialize;

/// One named coefficient with its sampling diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct Coefficient {
    pub name: String,
    pub estimate: f64,
    pub std_error: f64,
    pub z_value: f64,
    pub p_value: f64,
}

/// The estimation result: the scoring model plus the diagnostics a report
/// needs. Created once by `fit` and immutable thereafter.
#[derive(Debug, Clone, Serialize)]
pub struct FittedLogit {
    pub model: LogitModel,
    pub coefficients: Vec<Coefficient>,
    pub log_likelihood: f64,
    /// log-likelihood of the equal-shares model, the pseudo-R² baseline.
    pub null_log_likelihood: f64,
    pub mcfadden_r2: f64,
    pub iterations: usize,
    /// fitted choice probabilities for the estimation sample, one entry per
    /// respondent in `Mode::ALL` order.
    pub probabilities: Vec<[f64; Mode::ALL.len()]>,
}
