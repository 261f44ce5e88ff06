#[derive(thiserror::Error, Debug)]
pub enum WelfareError {
    #[error("scenario tables cover different samples: {0} vs {1} respondents")]
    DimensionMismatch(usize, usize),
    #[error("cost coefficient is zero; marginal utility of income is undefined")]
    ZeroCostCoefficient,
}
