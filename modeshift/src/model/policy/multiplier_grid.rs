use super::ScenarioError;
use serde::Deserialize;

/// An inclusive, evenly spaced multiplier sweep, e.g. 0.5 to 1.5 in 11
/// steps. Deserializable so simulation runs can be configured from TOML.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MultiplierGrid {
    pub start: f64,
    pub stop: f64,
    pub steps: usize,
}

impl MultiplierGrid {
    pub fn values(&self) -> Result<Vec<f64>, ScenarioError> {
        if self.steps == 0 {
            return Err(ScenarioError::EmptyGrid);
        }
        if self.steps == 1 {
            return Ok(vec![self.start]);
        }
        let span = self.stop - self.start;
        let last = (self.steps - 1) as f64;
        Ok((0..self.steps)
            .map(|idx| self.start + span * idx as f64 / last)
            .collect())
    }
}

impl Default for MultiplierGrid {
    fn default() -> Self {
        Self {
            start: 0.5,
            stop: 1.5,
            steps: 11,
        }
    }
}
