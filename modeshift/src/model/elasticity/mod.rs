mod density;
mod elasticity_error;
mod elasticity_ops;

pub use density::{gaussian_kde, DensityPoint};
pub use elasticity_error::ElasticityError;
pub use elasticity_ops::{cost_elasticities, summarize, ElasticityRecord, ElasticitySummary};
