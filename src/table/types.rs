/// A decision table as read from disk: a header row plus data rows of raw
/// string cells. Column 0 is the alternative identifier; the remaining
/// columns are criterion values, kept as strings until the validator
/// parses them.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTable {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

/// One alternative: its identifier and its raw criterion cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: String,
    pub cells: Vec<String>,
}

impl DecisionTable {
    /// Total column count, identifier included.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of criterion columns (everything after the identifier).
    pub fn criteria_count(&self) -> usize {
        self.headers.len().saturating_sub(1)
    }
}
