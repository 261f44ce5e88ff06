use super::ChoiceRow;
use crate::model::mode::Mode;
use crate::model::survey::SurveyDataset;

/// Long-format view of the survey: four rows per respondent in `Mode::ALL`
/// order, exactly one of which carries the chosen indicator. This is the
/// shape the estimator and all re-scoring operations consume.
#[derive(Debug, Clone)]
pub struct ChoiceTable {
    rows: Vec<ChoiceRow>,
}

impl ChoiceTable {
    pub fn from_dataset(dataset: &SurveyDataset) -> Self {
        let mut rows = Vec::with_capacity(dataset.len() * Mode::ALL.len());
        for (respondent, record) in dataset.records().iter().enumerate() {
            for mode in Mode::ALL {
                rows.push(ChoiceRow {
                    respondent,
                    mode,
                    cost: record.cost(mode),
                    time: record.time(mode),
                    income: record.income,
                    chosen: record.mode == mode,
                });
            }
        }
        Self { rows }
    }

    pub fn rows(&self) -> &[ChoiceRow] {
        &self.rows
    }

    pub fn respondent_count(&self) -> usize {
        self.rows.len() / Mode::ALL.len()
    }

    /// iterates respondent groups, each a slice of one row per alternative.
    pub fn respondents(&self) -> impl Iterator<Item = &[ChoiceRow]> {
        self.rows.chunks_exact(Mode::ALL.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::survey::SurveyRecord;

    fn dataset() -> SurveyDataset {
        let records = vec![
            SurveyRecord {
                mode: Mode::Bus,
                cost_bike: 0.5,
                cost_walk: 0.0,
                cost_bus: 1.75,
                cost_car: 4.0,
                time_bike: 20.0,
                time_walk: 40.0,
                time_bus: 30.0,
                time_car: 15.0,
                income: 42.0,
            },
            SurveyRecord {
                mode: Mode::Car,
                cost_bike: 0.6,
                cost_walk: 0.0,
                cost_bus: 1.75,
                cost_car: 3.5,
                time_bike: 25.0,
                time_walk: 50.0,
                time_bus: 35.0,
                time_car: 10.0,
                income: 55.0,
            },
        ];
        SurveyDataset::new(records).expect("test records should be valid")
    }

    #[test]
    fn test_four_rows_per_respondent() {
        let table = ChoiceTable::from_dataset(&dataset());
        assert_eq!(table.rows().len(), 8);
        assert_eq!(table.respondent_count(), 2);
        for group in table.respondents() {
            assert_eq!(group.len(), Mode::ALL.len());
        }
    }

    #[test]
    fn test_exactly_one_chosen_per_group() {
        let table = ChoiceTable::from_dataset(&dataset());
        for group in table.respondents() {
            let chosen = group.iter().filter(|row| row.chosen).count();
            assert_eq!(chosen, 1);
        }
    }

    #[test]
    fn test_alternative_order_and_attributes() {
        let table = ChoiceTable::from_dataset(&dataset());
        let first = table.respondents().next().expect("table has respondents");
        for (row, mode) in first.iter().zip(Mode::ALL) {
            assert_eq!(row.mode, mode);
            assert_eq!(row.respondent, 0);
            assert_eq!(row.income, 42.0);
        }
        assert_eq!(first[Mode::Bus.index()].cost, 1.75);
        assert!(first[Mode::Bus.index()].chosen);
        assert!(!first[Mode::Car.index()].chosen);
    }
}
