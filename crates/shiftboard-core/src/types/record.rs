//! Task record definitions
//!
//! A TaskRecord mirrors one persisted sheet row: the task name, the four
//! user-supplied inputs, and the two derived fields. Rows are only ever
//! rewritten field-by-field through the board's update/reset operations;
//! they are never deleted.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::store::{Column, RawRow};

/// Baseline urgency written by a reset.
pub const BASELINE_URGENCY: u32 = 5;
/// Baseline importance written by a reset.
pub const BASELINE_IMPORTANCE: u32 = 5;
/// Baseline days-until-due written by a reset (0 = due today).
pub const BASELINE_DAYS_UNTIL_DUE: u32 = 0;
/// Baseline priority written by a reset.
pub const BASELINE_PRIORITY: f64 = 0.0;
/// Baseline quantity written by a reset.
pub const BASELINE_QUANTITY: u32 = 0;
/// Baseline worker count written by a reset. Keeps the ≥ 1 floor.
pub const BASELINE_PEOPLE_NEEDED: u32 = 1;

/// One persisted task row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Task name; primary key into the catalog.
    #[serde(rename = "Task")]
    pub name: String,
    /// Urgency on a 1–10 scale.
    #[serde(rename = "Urgency")]
    pub urgency: u32,
    /// Importance on a 1–10 scale.
    #[serde(rename = "Importance")]
    pub importance: u32,
    /// Days until the task is due, 0–5.
    #[serde(rename = "Days Until Due")]
    pub days_until_due: u32,
    /// Derived priority score; may be negative.
    #[serde(rename = "Priority")]
    pub priority: f64,
    /// Units of work outstanding.
    #[serde(rename = "Quantity")]
    pub quantity: u32,
    /// Derived worker count, always at least 1.
    #[serde(rename = "People Needed")]
    pub people_needed: u32,
}

impl TaskRecord {
    /// A record holding the reset baseline for the given task name.
    pub fn baseline(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            urgency: BASELINE_URGENCY,
            importance: BASELINE_IMPORTANCE,
            days_until_due: BASELINE_DAYS_UNTIL_DUE,
            priority: BASELINE_PRIORITY,
            quantity: BASELINE_QUANTITY,
            people_needed: BASELINE_PEOPLE_NEEDED,
        }
    }

    /// Build a record from a raw store row, coercing each numeric field and
    /// substituting the field default when a cell is missing or non-numeric.
    pub fn from_raw(row: &RawRow) -> Self {
        Self {
            name: cell_string(row, Column::Task),
            urgency: cell_u32(row, Column::Urgency, 0),
            importance: cell_u32(row, Column::Importance, 0),
            days_until_due: cell_u32(row, Column::DaysUntilDue, 0),
            priority: cell_f64(row, Column::Priority).unwrap_or(0.0),
            quantity: cell_u32(row, Column::Quantity, 0),
            people_needed: cell_u32(row, Column::PeopleNeeded, 1),
        }
    }
}

/// The user-supplied fields of an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskInputs {
    pub urgency: u32,
    pub importance: u32,
    pub days_until_due: u32,
    pub quantity: u32,
}

fn cell_string(row: &RawRow, column: Column) -> String {
    match row.get(column.header()) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn cell_f64(row: &RawRow, column: Column) -> Option<f64> {
    match row.get(column.header())? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn cell_u32(row: &RawRow, column: Column, default: u32) -> u32 {
    match cell_f64(row, column) {
        Some(value) if value.is_finite() && value >= 0.0 => value as u32,
        _ => default,
    }
}
