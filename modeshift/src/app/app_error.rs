use crate::model::elasticity::ElasticityError;
use crate::model::logit::LogitError;
use crate::model::policy::ScenarioError;
use crate::model::survey::SurveyError;
use crate::model::welfare::WelfareError;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Survey(#[from] SurveyError),
    #[error(transparent)]
    Estimation(#[from] LogitError),
    #[error(transparent)]
    Scenario(#[from] ScenarioError),
    #[error(transparent)]
    Welfare(#[from] WelfareError),
    #[error(transparent)]
    Elasticity(#[from] ElasticityError),
    #[error("failed writing output: {0}")]
    OutputCsv(#[from] csv::Error),
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed serializing fitted model: {0}")]
    OutputJson(#[from] serde_json::Error),
    #[error("unable to parse sweep config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("unable to build progress bar: {0}")]
    Progress(String),
}
