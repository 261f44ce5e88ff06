#[derive(thiserror::Error, Debug)]
pub enum ElasticityError {
    #[error("cannot summarize an empty sample")]
    EmptySample,
    #[error("sample has no spread; density bandwidth would be zero")]
    DegenerateSample,
    #[error("density grid needs at least two points, found {0}")]
    InvalidGrid(usize),
    #[error("numerical failure: {0}")]
    Numeric(String),
}
