//! # Shiftboard Core
//!
//! Scoring, staffing, and row-state logic for the warehouse task tracker.
//!
//! This crate contains:
//! - TaskCatalog: the fixed task-type registry with per-unit minutes
//! - scoring: priority score and shift-staffing math
//! - RowStore / TaskSheet: the persisted-sheet abstraction
//! - TaskBoard: the Load / Update / Reset state machine
//!
//! This crate does NOT care about:
//! - How the sheet backend is implemented (see shiftboard-stores)
//! - How input is collected or the table is displayed
//! - Authentication against the backing service

pub mod board;
pub mod catalog;
pub mod scoring;
pub mod store;
pub mod types;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::board::TaskBoard;
    pub use crate::catalog::{load_catalog, CatalogError, TaskCatalog};
    pub use crate::scoring::{
        priority_factor, priority_score, staff_needed, DUE_DATE_WEIGHT, IMPORTANCE_WEIGHT,
        SHIFT_MINUTES, URGENCY_WEIGHT,
    };
    pub use crate::store::{Column, RawRow, RowStore, StoreError, TaskSheet, HEADER_ROW_OFFSET};
    pub use crate::types::{TaskInputs, TaskRecord};
}

// Re-export key types at crate root
pub use board::TaskBoard;
pub use catalog::TaskCatalog;
pub use scoring::{priority_factor, priority_score, staff_needed, SHIFT_MINUTES};
pub use store::{Column, RawRow, RowStore, StoreError, TaskSheet};
pub use types::{TaskInputs, TaskRecord};
