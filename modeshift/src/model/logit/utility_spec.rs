use crate::model::choice::ChoiceRow;
use crate::model::mode::Mode;
use serde::{Deserialize, Serialize};

/// The linear-in-parameters utility specification:
///
///   V(i, j) = asc(j) + beta_cost * cost(i, j) / income(i) + beta_time(j) * time(i, j)
///
/// with asc(reference) fixed at zero. The cost/income coefficient is shared
/// across alternatives while time coefficients are alternative-specific;
/// downstream elasticity and welfare formulas depend on this asymmetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilitySpec {
    reference: Mode,
}

impl UtilitySpec {
    /// three constants, one shared cost/income slope, four time slopes.
    pub const PARAM_COUNT: usize = 2 * Mode::ALL.len();

    pub fn new(reference: Mode) -> Self {
        Self { reference }
    }

    pub fn reference(&self) -> Mode {
        self.reference
    }

    pub fn param_count(&self) -> usize {
        Self::PARAM_COUNT
    }

    /// parameter slot of the alternative-specific constant, `None` for the
    /// reference alternative.
    pub fn asc_index(&self, mode: Mode) -> Option<usize> {
        if mode == self.reference {
            return None;
        }
        Mode::ALL
            .iter()
            .filter(|m| **m != self.reference)
            .position(|m| *m == mode)
    }

    pub fn cost_index(&self) -> usize {
        Mode::ALL.len() - 1
    }

    pub fn time_index(&self, mode: Mode) -> usize {
        Mode::ALL.len() + mode.index()
    }

    pub fn design_vector(&self, row: &ChoiceRow) -> [f64; Self::PARAM_COUNT] {
        let mut x = [0.0; Self::PARAM_COUNT];
        if let Some(idx) = self.asc_index(row.mode) {
            x[idx] = 1.0;
        }
        x[self.cost_index()] = row.cost / row.income;
        x[self.time_index(row.mode)] = row.time;
        x
    }

    pub fn coefficient_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Mode::ALL
            .iter()
            .filter(|m| **m != self.reference)
            .map(|m| format!("asc:{}", m))
            .collect();
        names.push(String::from("cost/income"));
        names.extend(Mode::ALL.iter().map(|m| format!("time:{}", m)));
        names
    }
}

impl Default for UtilitySpec {
    fn default() -> Self {
        Self::new(Mode::Car)
    }
}
