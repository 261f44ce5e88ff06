pub mod app_error;
pub mod elasticity;
pub mod estimate;
pub mod simulate;
pub mod welfare;

pub use app_error::AppError;
