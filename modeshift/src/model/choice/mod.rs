mod choice_row;
mod choice_table;

pub use choice_row::ChoiceRow;
pub use choice_table::ChoiceTable;
