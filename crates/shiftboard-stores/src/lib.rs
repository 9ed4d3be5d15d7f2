//! # Shiftboard Stores
//!
//! Minimal sheet store implementations for Shiftboard.
//!
//! This crate provides:
//! - InMemory sheet store
//! - JSON-file-backed sheet store

mod json;
mod memory;

pub use json::JsonSheetStore;
pub use memory::InMemorySheetStore;

// Re-export core store types for convenience
pub use shiftboard_core::store::{Column, RawRow, RowStore, StoreError, TaskSheet};
