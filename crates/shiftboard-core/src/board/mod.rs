//! Task board — the load/update/reset state machine
//!
//! All task state lives in the persisted sheet; the board holds nothing
//! between calls beyond its injected store handle and catalog. Each
//! operation is a standalone sequence of store round trips with no
//! isolation: there is no locking, versioning, or rollback, and racing
//! operations interleave per-cell writes non-deterministically.

use std::sync::Arc;

use serde_json::json;

use crate::catalog::TaskCatalog;
use crate::scoring;
use crate::store::{Column, RowStore, StoreError, TaskSheet};
use crate::types::{
    TaskInputs, TaskRecord, BASELINE_DAYS_UNTIL_DUE, BASELINE_IMPORTANCE, BASELINE_PEOPLE_NEEDED,
    BASELINE_PRIORITY, BASELINE_QUANTITY, BASELINE_URGENCY,
};

/// Orchestrates the three row operations against an injected store.
pub struct TaskBoard {
    sheet: TaskSheet,
    catalog: TaskCatalog,
}

impl TaskBoard {
    /// Create a board over a row store and task catalog.
    pub fn new(store: Arc<dyn RowStore>, catalog: TaskCatalog) -> Self {
        Self {
            sheet: TaskSheet::new(store),
            catalog,
        }
    }

    /// The catalog this board allocates against.
    pub fn catalog(&self) -> &TaskCatalog {
        &self.catalog
    }

    /// Read the full task table, coercing every numeric cell to its field
    /// type. A store read error is not surfaced: the caller gets a valid
    /// empty table and the failure is logged.
    pub async fn load(&self) -> Vec<TaskRecord> {
        match self.sheet.rows().await {
            Ok(rows) => rows.iter().map(TaskRecord::from_raw).collect(),
            Err(err) => {
                tracing::warn!(error = %err, "task sheet read failed, returning empty table");
                Vec::new()
            }
        }
    }

    /// Recompute and persist one task's row from fresh inputs.
    ///
    /// Binds to the first row whose Task cell equals `name`; duplicates are
    /// neither detected nor reported. Returns `Ok(false)` without writing
    /// anything when no row matches. A write error propagates as-is and may
    /// leave the row holding a mix of old and new cells.
    pub async fn update(&self, name: &str, inputs: TaskInputs) -> Result<bool, StoreError> {
        let rows = self.sheet.rows().await?;

        let Some(logical_row) = rows
            .iter()
            .position(|row| row.get(Column::Task.header()).and_then(|v| v.as_str()) == Some(name))
        else {
            return Ok(false);
        };

        let priority =
            scoring::priority_score(inputs.urgency, inputs.importance, inputs.days_until_due);
        let people_needed = scoring::staff_needed(
            &self.catalog,
            name,
            inputs.quantity,
            inputs.urgency,
            inputs.importance,
        );

        tracing::info!(
            task = name,
            urgency = inputs.urgency,
            importance = inputs.importance,
            days_until_due = inputs.days_until_due,
            quantity = inputs.quantity,
            priority,
            people_needed,
            "updating task row"
        );

        self.sheet
            .put_fields(
                logical_row,
                &[
                    (Column::Urgency, json!(inputs.urgency)),
                    (Column::Importance, json!(inputs.importance)),
                    (Column::DaysUntilDue, json!(inputs.days_until_due)),
                    (Column::Priority, json!(priority)),
                    (Column::Quantity, json!(inputs.quantity)),
                    (Column::PeopleNeeded, json!(people_needed)),
                ],
            )
            .await?;

        Ok(true)
    }

    /// Overwrite every row with the baseline values, regardless of current
    /// content or task identity. No cross-row atomicity: a failure after
    /// row k leaves rows 0..k reset and the rest untouched.
    pub async fn reset(&self) -> Result<(), StoreError> {
        let rows = self.sheet.rows().await?;

        for logical_row in 0..rows.len() {
            self.sheet
                .put_fields(
                    logical_row,
                    &[
                        (Column::Urgency, json!(BASELINE_URGENCY)),
                        (Column::Importance, json!(BASELINE_IMPORTANCE)),
                        (Column::DaysUntilDue, json!(BASELINE_DAYS_UNTIL_DUE)),
                        (Column::Priority, json!(BASELINE_PRIORITY)),
                        (Column::Quantity, json!(BASELINE_QUANTITY)),
                        (Column::PeopleNeeded, json!(BASELINE_PEOPLE_NEEDED)),
                    ],
                )
                .await?;
        }

        tracing::info!(rows = rows.len(), "task sheet reset to baseline");
        Ok(())
    }
}
