//! In-memory sheet store implementation.

use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value;

use shiftboard_core::catalog::TaskCatalog;
use shiftboard_core::store::{Column, RawRow, RowStore, StoreError, HEADER_ROW_OFFSET};
use shiftboard_core::types::TaskRecord;

/// Cells of one record in sheet column order.
pub(crate) fn record_cells(record: &TaskRecord) -> Vec<Value> {
    vec![
        Value::from(record.name.clone()),
        Value::from(record.urgency),
        Value::from(record.importance),
        Value::from(record.days_until_due),
        Value::from(record.priority),
        Value::from(record.quantity),
        Value::from(record.people_needed),
    ]
}

pub(crate) fn standard_header() -> Vec<String> {
    Column::ALL.iter().map(|c| c.header().to_string()).collect()
}

/// In-memory implementation for development and testing. Models the sheet
/// as a header row plus a cell grid addressed by the same 1-based
/// coordinates the external backend uses.
pub struct InMemorySheetStore {
    header: Vec<String>,
    rows: RwLock<Vec<Vec<Value>>>,
}

impl InMemorySheetStore {
    /// Create an empty sheet with the standard task header.
    pub fn new() -> Self {
        Self {
            header: standard_header(),
            rows: RwLock::new(Vec::new()),
        }
    }

    /// Create a sheet holding one baseline row per catalog task, in name
    /// order.
    pub fn seeded(catalog: &TaskCatalog) -> Self {
        let mut names: Vec<&str> = catalog.task_names().collect();
        names.sort_unstable();

        let rows = names
            .into_iter()
            .map(|name| record_cells(&TaskRecord::baseline(name)))
            .collect();

        Self {
            header: standard_header(),
            rows: RwLock::new(rows),
        }
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.read().map(|rows| rows.len()).unwrap_or(0)
    }
}

impl Default for InMemorySheetStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RowStore for InMemorySheetStore {
    async fn get_all_rows(&self) -> Result<Vec<RawRow>, StoreError> {
        let rows = self
            .rows
            .read()
            .map_err(|e| StoreError::Read(e.to_string()))?;

        Ok(rows
            .iter()
            .map(|cells| {
                self.header
                    .iter()
                    .cloned()
                    .zip(cells.iter().cloned())
                    .collect()
            })
            .collect())
    }

    async fn update_cell(
        &self,
        row_index: usize,
        column_index: usize,
        value: Value,
    ) -> Result<(), StoreError> {
        if row_index < HEADER_ROW_OFFSET {
            return Err(StoreError::Write(format!(
                "row {} is the header or out of range",
                row_index
            )));
        }
        if column_index == 0 || column_index > self.header.len() {
            return Err(StoreError::Write(format!(
                "column {} out of range",
                column_index
            )));
        }

        let mut rows = self
            .rows
            .write()
            .map_err(|e| StoreError::Write(e.to_string()))?;
        let row = rows
            .get_mut(row_index - HEADER_ROW_OFFSET)
            .ok_or_else(|| StoreError::Write(format!("row {} out of range", row_index)))?;
        row[column_index - 1] = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_seeded_store_exposes_baseline_rows() {
        tokio_test::block_on(async {
            let catalog = TaskCatalog::warehouse_default();
            let store = InMemorySheetStore::seeded(&catalog);
            assert_eq!(store.row_count(), 16);

            let rows = store.get_all_rows().await.unwrap();
            assert_eq!(rows.len(), 16);
            let record = TaskRecord::from_raw(&rows[0]);
            assert_eq!(record.urgency, 5);
            assert_eq!(record.people_needed, 1);
            assert!(catalog.contains(&record.name));
        });
    }

    #[test]
    fn test_update_cell_uses_sheet_coordinates() {
        tokio_test::block_on(async {
            let store = InMemorySheetStore::seeded(&TaskCatalog::warehouse_default());

            // First data row, Urgency column.
            store.update_cell(2, 2, json!(9)).await.unwrap();

            let rows = store.get_all_rows().await.unwrap();
            assert_eq!(rows[0].get("Urgency"), Some(&json!(9)));
            assert_eq!(rows[1].get("Urgency"), Some(&json!(5)));
        });
    }

    #[test]
    fn test_board_cycle_over_in_memory_store() {
        tokio_test::block_on(async {
            use shiftboard_core::board::TaskBoard;
            use shiftboard_core::types::TaskInputs;
            use std::sync::Arc;

            let catalog = TaskCatalog::warehouse_default();
            let store = Arc::new(InMemorySheetStore::seeded(&catalog));
            let board = TaskBoard::new(store, catalog);

            let found = board
                .update(
                    "LTL Picks Same Day",
                    TaskInputs {
                        urgency: 7,
                        importance: 6,
                        days_until_due: 0,
                        quantity: 30,
                    },
                )
                .await
                .unwrap();
            assert!(found);

            let table = board.load().await;
            let record = table
                .iter()
                .find(|r| r.name == "LTL Picks Same Day")
                .unwrap();
            // 7*1.5 + 6*2 = 22.5; 30 units * 15 min = 450 min, factor 2.25,
            // ceil((450/420) * 2.25) = 3.
            assert_eq!(record.priority, 22.5);
            assert_eq!(record.people_needed, 3);

            board.reset().await.unwrap();
            assert!(board.load().await.iter().all(|r| r.quantity == 0));
        });
    }

    #[test]
    fn test_update_cell_rejects_header_and_out_of_range() {
        tokio_test::block_on(async {
            let store = InMemorySheetStore::new();
            assert!(matches!(
                store.update_cell(1, 2, json!(9)).await,
                Err(StoreError::Write(_))
            ));
            assert!(matches!(
                store.update_cell(2, 2, json!(9)).await,
                Err(StoreError::Write(_))
            ));
            assert!(matches!(
                store.update_cell(2, 8, json!(9)).await,
                Err(StoreError::Write(_))
            ));
        });
    }
}
