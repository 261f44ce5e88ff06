use super::SurveyError;
use crate::model::mode::Mode;
use serde::Deserialize;

/// One wide survey row: the chosen mode, a contiguous block of
/// alternative-specific cost and time columns, and the respondent's income.
#[derive(Debug, Clone, Deserialize)]
pub struct SurveyRecord {
    pub mode: Mode,
    #[serde(rename = "cost.bike")]
    pub cost_bike: f64,
    #[serde(rename = "cost.walk")]
    pub cost_walk: f64,
    #[serde(rename = "cost.bus")]
    pub cost_bus: f64,
    #[serde(rename = "cost.car")]
    pub cost_car: f64,
    #[serde(rename = "time.bike")]
    pub time_bike: f64,
    #[serde(rename = "time.walk")]
    pub time_walk: f64,
    #[serde(rename = "time.bus")]
    pub time_bus: f64,
    #[serde(rename = "time.car")]
    pub time_car: f64,
    pub income: f64,
}

impl SurveyRecord {
    pub fn cost(&self, mode: Mode) -> f64 {
        match mode {
            Mode::Bike => self.cost_bike,
            Mode::Walk => self.cost_walk,
            Mode::Bus => self.cost_bus,
            Mode::Car => self.cost_car,
        }
    }

    pub fn time(&self, mode: Mode) -> f64 {
        match mode {
            Mode::Bike => self.time_bike,
            Mode::Walk => self.time_walk,
            Mode::Bus => self.time_bus,
            Mode::Car => self.time_car,
        }
    }

    pub fn cost_mut(&mut self, mode: Mode) -> &mut f64 {
        match mode {
            Mode::Bike => &mut self.cost_bike,
            Mode::Walk => &mut self.cost_walk,
            Mode::Bus => &mut self.cost_bus,
            Mode::Car => &mut self.cost_car,
        }
    }

    pub fn time_mut(&mut self, mode: Mode) -> &mut f64 {
        match mode {
            Mode::Bike => &mut self.time_bike,
            Mode::Walk => &mut self.time_walk,
            Mode::Bus => &mut self.time_bus,
            Mode::Car => &mut self.time_car,
        }
    }

    /// fail fast on values that break the utility specification. `row` is
    /// the 1-based position in the source table, used for error reporting.
    pub fn validate(&self, row: usize) -> Result<(), SurveyError> {
        if !self.income.is_finite() || self.income <= 0.0 {
            return Err(SurveyError::NonPositiveIncome(row, self.income));
        }
        for mode in Mode::ALL {
            let cost = self.cost(mode);
            if !cost.is_finite() || cost < 0.0 {
                return Err(SurveyError::NegativeAttribute(row, "cost", mode, cost));
            }
            let time = self.time(mode);
            if !time.is_finite() || time < 0.0 {
                return Err(SurveyError::NegativeAttribute(row, "time", mode, time));
            }
        }
        Ok(())
    }
}
