//! Store module
//!
//! Row-store abstraction for the persisted task sheet:
//! - RowStore: the external positional contract (read all rows, write one
//!   cell by 1-based sheet coordinates)
//! - TaskSheet: keyed adapter hiding the positional convention
//!
//! Note: Implementations are in the shiftboard-stores crate.

mod sheet;

pub use sheet::TaskSheet;

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Read error: {0}")]
    Read(String),

    #[error("Write error: {0}")]
    Write(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// A row as the store hands it back: named string/number cells.
pub type RawRow = HashMap<String, Value>;

/// Sheet rows are 1-based and row 1 is the header, so logical row `i`
/// lives at sheet row `i + 2`.
pub const HEADER_ROW_OFFSET: usize = 2;

/// Fixed positional column layout of the task sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Task,
    Urgency,
    Importance,
    DaysUntilDue,
    Priority,
    Quantity,
    PeopleNeeded,
}

impl Column {
    /// All columns in sheet order.
    pub const ALL: [Column; 7] = [
        Column::Task,
        Column::Urgency,
        Column::Importance,
        Column::DaysUntilDue,
        Column::Priority,
        Column::Quantity,
        Column::PeopleNeeded,
    ];

    /// 1-based sheet column index.
    pub fn index(self) -> usize {
        match self {
            Column::Task => 1,
            Column::Urgency => 2,
            Column::Importance => 3,
            Column::DaysUntilDue => 4,
            Column::Priority => 5,
            Column::Quantity => 6,
            Column::PeopleNeeded => 7,
        }
    }

    /// Header cell text, also the field name in a [`RawRow`].
    pub fn header(self) -> &'static str {
        match self {
            Column::Task => "Task",
            Column::Urgency => "Urgency",
            Column::Importance => "Importance",
            Column::DaysUntilDue => "Days Until Due",
            Column::Priority => "Priority",
            Column::Quantity => "Quantity",
            Column::PeopleNeeded => "People Needed",
        }
    }
}

/// The positional row-store contract the external sheet backend exposes.
///
/// No transactional guarantees: each cell write is its own round trip, and a
/// failure between writes leaves whatever was already written in place.
#[async_trait]
pub trait RowStore: Send + Sync {
    /// Read every data row (header excluded) as named cells.
    async fn get_all_rows(&self) -> Result<Vec<RawRow>, StoreError>;

    /// Write one cell. `row_index` and `column_index` are 1-based sheet
    /// coordinates; row 1 is the header.
    async fn update_cell(
        &self,
        row_index: usize,
        column_index: usize,
        value: Value,
    ) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_indices_match_sheet_layout() {
        let indices: Vec<usize> = Column::ALL.iter().map(|c| c.index()).collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(Column::DaysUntilDue.header(), "Days Until Due");
        assert_eq!(Column::PeopleNeeded.header(), "People Needed");
    }
}
