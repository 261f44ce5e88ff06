use crate::model::mode::Mode;

#[derive(thiserror::Error, Debug)]
pub enum SurveyError {
    #[error("unable to read survey data from {0}: {1}")]
    ReadFailure(String, csv::Error),
    #[error("malformed survey row {0}: {1}")]
    MalformedRow(usize, csv::Error),
    #[error("survey row {0}: income must be positive, found {1}")]
    NonPositiveIncome(usize, f64),
    #[error("survey row {0}: negative {1} for alternative {2}, found {3}")]
    NegativeAttribute(usize, &'static str, Mode, f64),
    #[error("survey dataset contains no respondents")]
    EmptyDataset,
}
