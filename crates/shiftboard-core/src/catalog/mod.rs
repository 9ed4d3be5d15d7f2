//! Task catalog
//!
//! The catalog is the fixed registry of known warehouse task types and the
//! per-unit time cost of each. It is built once at startup (either the
//! built-in warehouse set or a YAML file via [`loader`]) and never mutated
//! afterwards.

mod loader;

pub use loader::{load_catalog, CatalogError};

use std::collections::HashMap;

/// Immutable mapping from task name to estimated minutes per unit.
#[derive(Debug, Clone, Default)]
pub struct TaskCatalog {
    minutes: HashMap<String, u32>,
}

impl TaskCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a task type with its per-unit minutes. Replaces any
    /// previous entry with the same name.
    pub fn with_task(mut self, name: impl Into<String>, minutes_per_unit: u32) -> Self {
        self.minutes.insert(name.into(), minutes_per_unit);
        self
    }

    /// The built-in warehouse task set.
    pub fn warehouse_default() -> Self {
        Self::new()
            .with_task("Putaway 3002", 20)
            .with_task("Putaway 3043", 15)
            .with_task("Unload Shuttles", 20)
            .with_task("Unload 3002 Inbound", 20)
            .with_task("Unload 3043 Inbound", 20)
            .with_task("Load 3043 Outbound", 20)
            .with_task("Load 3002 Outbound", 20)
            .with_task("Load LTL Outbound", 20)
            .with_task("LTL Picks Same Day", 15)
            .with_task("LTL Picks Next Day", 15)
            .with_task("FTL Picks Same Day", 25)
            .with_task("FTL Picks Next Day", 25)
            .with_task("Export Live Loads Same Day", 25)
            .with_task("Export Live Loads Next Day", 25)
            .with_task("Export Drop Same Day", 25)
            .with_task("Export Drop Next Day", 25)
    }

    /// Look up the per-unit minutes for a task name.
    pub fn minutes_per_unit(&self, name: &str) -> Option<u32> {
        self.minutes.get(name).copied()
    }

    /// Check whether a task name is known.
    pub fn contains(&self, name: &str) -> bool {
        self.minutes.contains_key(name)
    }

    /// Iterate over the known task names.
    pub fn task_names(&self) -> impl Iterator<Item = &str> {
        self.minutes.keys().map(String::as_str)
    }

    /// Number of registered task types.
    pub fn len(&self) -> usize {
        self.minutes.len()
    }

    /// Returns true when no task types are registered.
    pub fn is_empty(&self) -> bool {
        self.minutes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warehouse_default_lookup() {
        let catalog = TaskCatalog::warehouse_default();
        assert_eq!(catalog.len(), 16);
        assert_eq!(catalog.minutes_per_unit("Putaway 3002"), Some(20));
        assert_eq!(catalog.minutes_per_unit("FTL Picks Same Day"), Some(25));
        assert_eq!(catalog.minutes_per_unit("Sweep The Dock"), None);
    }

    #[test]
    fn test_with_task_replaces_existing_entry() {
        let catalog = TaskCatalog::new()
            .with_task("Cycle Count", 10)
            .with_task("Cycle Count", 12);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.minutes_per_unit("Cycle Count"), Some(12));
    }
}
