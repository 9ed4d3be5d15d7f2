//! JSON-file-backed sheet store implementation.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::Mutex;

use shiftboard_core::store::{RawRow, RowStore, StoreError, HEADER_ROW_OFFSET};
use shiftboard_core::types::TaskRecord;

use crate::memory::{record_cells, standard_header};

/// On-disk sheet layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SheetFile {
    header: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl SheetFile {
    fn empty() -> Self {
        Self {
            header: standard_header(),
            rows: Vec::new(),
        }
    }
}

/// Whole-sheet JSON persistence. Each cell update is a read-modify-write of
/// the full file; a missing file reads as an empty sheet with the standard
/// header. Writers within this process are serialized by a mutex; the file
/// itself carries no cross-process locking.
pub struct JsonSheetStore {
    path: PathBuf,
    write_guard: Mutex<()>,
}

impl JsonSheetStore {
    /// Create a store backed by the given file path. The file is created
    /// lazily on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_guard: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the sheet with one row per record.
    pub async fn seed(&self, records: &[TaskRecord]) -> Result<(), StoreError> {
        let _guard = self.write_guard.lock().await;
        let sheet = SheetFile {
            header: standard_header(),
            rows: records.iter().map(record_cells).collect(),
        };
        self.write_sheet(&sheet).await
    }

    async fn read_sheet(&self) -> Result<SheetFile, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(SheetFile::empty());
            }
            Err(err) => return Err(StoreError::Io(err.to_string())),
        };

        serde_json::from_slice(&bytes).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    async fn write_sheet(&self, sheet: &SheetFile) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| StoreError::Io(e.to_string()))?;
            }
        }

        let bytes =
            serde_json::to_vec_pretty(sheet).map_err(|e| StoreError::Serialization(e.to_string()))?;
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))
    }
}

#[async_trait]
impl RowStore for JsonSheetStore {
    async fn get_all_rows(&self) -> Result<Vec<RawRow>, StoreError> {
        let sheet = self.read_sheet().await?;
        Ok(sheet
            .rows
            .iter()
            .map(|cells| {
                sheet
                    .header
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
        let _guard = self.write_guard.lock().await;
        let mut sheet = self.read_sheet().await?;

        if row_index < HEADER_ROW_OFFSET {
            return Err(StoreError::Write(format!(
                "row {} is the header or out of range",
                row_index
            )));
        }
        if column_index == 0 || column_index > sheet.header.len() {
            return Err(StoreError::Write(format!(
                "column {} out of range",
                column_index
            )));
        }

        let row = sheet
            .rows
            .get_mut(row_index - HEADER_ROW_OFFSET)
            .ok_or_else(|| StoreError::Write(format!("row {} out of range", row_index)))?;
        row[column_index - 1] = value;

        self.write_sheet(&sheet).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    use serde_json::json;

    fn temp_sheet_path() -> PathBuf {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        std::env::temp_dir().join(format!("shiftboard-sheet-{}/sheet.json", suffix))
    }

    #[test]
    fn test_missing_file_reads_as_empty_sheet() {
        tokio_test::block_on(async {
            let store = JsonSheetStore::new(temp_sheet_path());
            assert!(store.get_all_rows().await.unwrap().is_empty());
        });
    }

    #[test]
    fn test_seed_then_update_cell_round_trips() {
        tokio_test::block_on(async {
            let path = temp_sheet_path();
            let store = JsonSheetStore::new(path.clone());

            store
                .seed(&[
                    TaskRecord::baseline("Putaway 3002"),
                    TaskRecord::baseline("Unload Shuttles"),
                ])
                .await
                .expect("seed");

            // Second data row, Quantity column.
            store.update_cell(3, 6, json!(40)).await.expect("update");

            let rows = store.get_all_rows().await.expect("read");
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0].get("Quantity"), Some(&json!(0)));
            assert_eq!(rows[1].get("Quantity"), Some(&json!(40)));

            let _ = tokio::fs::remove_dir_all(path.parent().expect("parent")).await;
        });
    }

    #[test]
    fn test_update_cell_on_missing_row_fails() {
        tokio_test::block_on(async {
            let store = JsonSheetStore::new(temp_sheet_path());
            let err = store.update_cell(2, 2, json!(1)).await.expect_err("fail");
            assert!(matches!(err, StoreError::Write(_)));
        });
    }
}
