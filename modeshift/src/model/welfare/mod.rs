mod welfare_error;
mod welfare_ops;

pub use welfare_error::WelfareError;
pub use welfare_ops::{consumer_surplus, WelfareChange};
