//! TOPSIS multi-criteria ranking: validated decision tables in, scores and
//! ranks out. The `scoring` module is the pure core; `table` and `output`
//! are the I/O shells around it.

pub mod output;
pub mod scoring;
pub mod table;
