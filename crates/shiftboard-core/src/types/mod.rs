//! Core type definitions for Shiftboard
//!
//! - TaskRecord: one persisted row per task, inputs plus derived fields
//! - TaskInputs: the user-supplied fields of an update

mod record;

pub use record::{
    TaskInputs, TaskRecord, BASELINE_DAYS_UNTIL_DUE, BASELINE_IMPORTANCE, BASELINE_PEOPLE_NEEDED,
    BASELINE_PRIORITY, BASELINE_QUANTITY, BASELINE_URGENCY,
};
