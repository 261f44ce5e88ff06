mod multiplier_grid;
mod policy_column;
mod scenario;
mod scenario_error;
mod simulator;

pub use multiplier_grid::MultiplierGrid;
pub use policy_column::PolicyColumn;
pub use scenario::Scenario;
pub use scenario_error::ScenarioError;
pub use simulator::{baseline, simulate, sweep, ScenarioOutcome};
