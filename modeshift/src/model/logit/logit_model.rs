use super::{LogitError, UtilitySpec};
use crate::model::choice::{ChoiceRow, ChoiceTable};
use crate::model::mode::Mode;
use nalgebra::DVector;
use serde::Serialize;

/// A utility specification paired with a fixed coefficient vector. This is
/// the object every downstream computation consumes: elasticities, policy
/// re-scoring, and welfare all score data against frozen coefficients.
#[derive(Debug, Clone, Serialize)]
pub struct LogitModel {
    spec: UtilitySpec,
    theta: DVector<f64>,
}

impl LogitModel {
    pub fn new(spec: UtilitySpec, theta: DVector<f64>) -> Result<Self, LogitError> {
        if theta.len() != spec.param_count() {
            return Err(LogitError::DimensionMismatch(spec.param_count(), theta.len()));
        }
        Ok(Self { spec, theta })
    }

    /// convenience constructor for scoring with published coefficients.
    pub fn from_coefficients(spec: UtilitySpec, values: &[f64]) -> Result<Self, LogitError> {
        Self::new(spec, DVector::from_column_slice(values))
    }

    pub fn spec(&self) -> &UtilitySpec {
        &self.spec
    }

    pub fn coefficients(&self) -> &DVector<f64> {
        &self.theta
    }

    pub fn constant(&self, mode: Mode) -> f64 {
        self.spec
            .asc_index(mode)
            .map(|idx| self.theta[idx])
            .unwrap_or(0.0)
    }

    pub fn cost_coefficient(&self) -> f64 {
        self.theta[self.spec.cost_index()]
    }

    pub fn time_coefficient(&self, mode: Mode) -> f64 {
        self.theta[self.spec.time_index(mode)]
    }

    /// systematic utilities for one respondent group.
    pub fn utilities(&self, group: &[ChoiceRow]) -> [f64; Mode::ALL.len()] {
        let mut v = [0.0; Mode::ALL.len()];
        for (slot, row) in v.iter_mut().zip(group.iter()) {
            let x = self.spec.design_vector(row);
            *slot = x.iter().zip(self.theta.iter()).map(|(a, b)| a * b).sum();
        }
        v
    }

    /// choice probabilities for one respondent group, computed with the
    /// max-shifted softmax for numerical stability.
    pub fn probabilities(&self, group: &[ChoiceRow]) -> [f64; Mode::ALL.len()] {
        let v = self.utilities(group);
        let v_max = v.iter().fold(f64::NEG_INFINITY, |a, b| a.max(*b));
        let mut p = [0.0; Mode::ALL.len()];
        let mut denom = 0.0;
        for (slot, value) in p.iter_mut().zip(v.iter()) {
            *slot = (value - v_max).exp();
            denom += *slot;
        }
        for slot in p.iter_mut() {
            *slot /= denom;
        }
        p
    }

    /// the log of the denominator of the logit probability, proportional to
    /// the respondent's expected maximum utility.
    pub fn logsum(&self, group: &[ChoiceRow]) -> f64 {
        let v = self.utilities(group);
        let v_max = v.iter().fold(f64::NEG_INFINITY, |a, b| a.max(*b));
        let sum: f64 = v.iter().map(|value| (value - v_max).exp()).sum();
        v_max + sum.ln()
    }

    pub fn predict(&self, table: &ChoiceTable) -> Vec<[f64; Mode::ALL.len()]> {
        table
            .respondents()
            .map(|group| self.probabilities(group))
            .collect()
    }

    pub fn logsums(&self, table: &ChoiceTable) -> Vec<f64> {
        table.respondents().map(|group| self.logsum(group)).collect()
    }
}
