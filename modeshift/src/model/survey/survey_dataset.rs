use super::{SurveyError, SurveyRecord};
use std::path::Path;

/// The full survey table, one validated record per respondent. Immutable
/// once constructed; scenario perturbations build new datasets.
#[derive(Debug, Clone)]
pub struct SurveyDataset {
    records: Vec<SurveyRecord>,
}

impl SurveyDataset {
    /// builds a dataset from already-deserialized records, failing on the
    /// first invalid row.
    pub fn new(records: Vec<SurveyRecord>) -> Result<Self, SurveyError> {
        if records.is_empty() {
            return Err(SurveyError::EmptyDataset);
        }
        for (idx, record) in records.iter().enumerate() {
            record.validate(idx + 1)?;
        }
        Ok(Self { records })
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, SurveyError> {
        let path_str = path.as_ref().to_string_lossy().to_string();
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path.as_ref())
            .map_err(|e| SurveyError::ReadFailure(path_str, e))?;
        Self::from_reader(reader)
    }

    pub fn from_reader<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Self, SurveyError> {
        let mut records: Vec<SurveyRecord> = vec![];
        for (idx, row) in reader.deserialize().enumerate() {
            let record: SurveyRecord = row.map_err(|e| SurveyError::MalformedRow(idx + 1, e))?;
            records.push(record);
        }
        Self::new(records)
    }

    pub fn records(&self) -> &[SurveyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
