mod survey_dataset;
mod survey_error;
mod survey_record;

pub use survey_dataset::SurveyDataset;
pub use survey_error::SurveyError;
pub use survey_record::SurveyRecord;
