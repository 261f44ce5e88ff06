use crate::model::survey::SurveyError;

#[derive(thiserror::Error, Debug)]
pub enum ScenarioError {
    #[error("scenario multiplier must be positive and finite, found {0}")]
    InvalidMultiplier(f64),
    #[error("multiplier grid requires at least one step")]
    EmptyGrid,
    #[error("perturbed dataset failed validation: {0}")]
    PerturbedDataset(#[from] SurveyError),
}
