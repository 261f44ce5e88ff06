use crate::model::mode::Mode;

/// One (respondent, alternative) observation in the long-format table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChoiceRow {
    pub respondent: usize,
    pub mode: Mode,
    pub cost: f64,
    pub time: f64,
    /// respondent income, repeated across the four alternatives.
    pub income: f64,
    pub chosen: bool,
}
