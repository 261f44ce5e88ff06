pub mod choice;
pub mod elasticity;
pub mod logit;
pub mod mode;
pub mod policy;
pub mod survey;
pub mod welfare;
