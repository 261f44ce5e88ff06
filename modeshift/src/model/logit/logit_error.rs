#[derive(thiserror::Error, Debug)]
pub enum LogitError {
    #[error("estimation did not converge within {0} iterations")]
    NotConverged(usize),
    #[error("information matrix is singular; covariates are collinear or the model is not identified")]
    Identification,
    #[error("a covariate perfectly predicts choice (separation); estimates are unbounded")]
    Separation,
    #[error("log-likelihood became non-finite at iteration {0}")]
    NonFiniteLikelihood(usize),
    #[error("coefficient vector has length {1}, expected {0}")]
    DimensionMismatch(usize, usize),
    #[error("respondent group {0} has no chosen alternative")]
    MissingChoice(usize),
    #[error("numerical failure: {0}")]
    Numeric(String),
}
