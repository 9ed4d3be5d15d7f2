//! TaskSheet — keyed access over the positional row-store contract.

use std::sync::Arc;

use serde_json::Value;

use super::{Column, RawRow, RowStore, StoreError, HEADER_ROW_OFFSET};

/// Keyed adapter over a [`RowStore`]. The 1-based, header-offset sheet
/// coordinates live only here; callers address rows by logical index and
/// columns by name.
#[derive(Clone)]
pub struct TaskSheet {
    store: Arc<dyn RowStore>,
}

impl TaskSheet {
    /// Wrap a row store.
    pub fn new(store: Arc<dyn RowStore>) -> Self {
        Self { store }
    }

    /// Read all data rows.
    pub async fn rows(&self) -> Result<Vec<RawRow>, StoreError> {
        self.store.get_all_rows().await
    }

    /// Write a batch of cells to one logical row, in the given order.
    ///
    /// The batch degrades to sequential per-cell writes at the store
    /// boundary, so a failure partway leaves the earlier cells written and
    /// surfaces the error with no rollback or retry.
    pub async fn put_fields(
        &self,
        logical_row: usize,
        fields: &[(Column, Value)],
    ) -> Result<(), StoreError> {
        let row_index = logical_row + HEADER_ROW_OFFSET;
        for (column, value) in fields {
            self.store
                .update_cell(row_index, column.index(), value.clone())
                .await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    /// Records the raw coordinates each write lands on.
    #[derive(Default)]
    struct RecordingStore {
        writes: Mutex<Vec<(usize, usize, Value)>>,
    }

    #[async_trait]
    impl RowStore for RecordingStore {
        async fn get_all_rows(&self) -> Result<Vec<RawRow>, StoreError> {
            Ok(Vec::new())
        }

        async fn update_cell(
            &self,
            row_index: usize,
            column_index: usize,
            value: Value,
        ) -> Result<(), StoreError> {
            self.writes
                .lock()
                .expect("lock")
                .push((row_index, column_index, value));
            Ok(())
        }
    }

    #[test]
    fn test_put_fields_translates_to_sheet_coordinates() {
        tokio_test::block_on(async {
            let store = Arc::new(RecordingStore::default());
            let sheet = TaskSheet::new(store.clone());

            sheet
                .put_fields(0, &[(Column::Urgency, json!(8)), (Column::Priority, json!(29.5))])
                .await
                .expect("put");

            let writes = store.writes.lock().expect("lock").clone();
            // Logical row 0 is sheet row 2; urgency is column 2, priority 5.
            assert_eq!(writes, vec![(2, 2, json!(8)), (2, 5, json!(29.5))]);
        });
    }
}
