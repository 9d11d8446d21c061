mod reader;
mod types;
mod writer;

pub use reader::{parse_table, read_table};
pub use types::{DecisionTable, Row};
pub use writer::{to_csv, write_table, RANK_HEADER, SCORE_HEADER};
