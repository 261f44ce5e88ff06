use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Commute alternatives available to every respondent, in survey column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Bike,
    Walk,
    Bus,
    Car,
}

impl Mode {
    /// alternative ordering shared by the survey column block, the choice
    /// table, and all aggregate outputs.
    pub const ALL: [Mode; 4] = [Mode::Bike, Mode::Walk, Mode::Bus, Mode::Car];

    pub fn index(&self) -> usize {
        match self {
            Mode::Bike => 0,
            Mode::Walk => 1,
            Mode::Bus => 2,
            Mode::Car => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Bike => "bike",
            Mode::Walk => "walk",
            Mode::Bus => "bus",
            Mode::Car => "car",
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bike" => Ok(Mode::Bike),
            "walk" => Ok(Mode::Walk),
            "bus" => Ok(Mode::Bus),
            "car" => Ok(Mode::Car),
            other => Err(format!(
                "unknown mode '{}', expected one of bike, walk, bus, car",
                other
            )),
        }
    }
}
