mod estimator;
mod fitted_logit;
mod logit_error;
mod logit_model;
mod logit_options;
mod utility_spec;

pub use estimator::fit;
pub use fitted_logit::{Coefficient, FittedLogit};
pub use logit_error::LogitError;
pub use logit_model::LogitModel;
pub use logit_options::LogitOptions;
pub use utility_spec::UtilitySpec;
