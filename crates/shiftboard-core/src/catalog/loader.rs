//! Catalog loading from YAML.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

use super::TaskCatalog;

/// Catalog loading errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

/// Load a task catalog from a YAML file mapping task name to minutes per unit.
pub fn load_catalog(path: &Path) -> Result<TaskCatalog, CatalogError> {
    let content = fs::read_to_string(path)?;
    let entries: HashMap<String, u32> = serde_yaml::from_str(&content)?;
    validate_entries(&entries)?;

    let mut catalog = TaskCatalog::new();
    for (name, minutes) in entries {
        catalog = catalog.with_task(name, minutes);
    }
    Ok(catalog)
}

fn validate_entries(entries: &HashMap<String, u32>) -> Result<(), CatalogError> {
    if entries.is_empty() {
        return Err(CatalogError::Invalid(
            "catalog must define at least one task".to_string(),
        ));
    }

    for (name, minutes) in entries {
        if name.trim().is_empty() {
            return Err(CatalogError::Invalid(
                "task name must not be empty".to_string(),
            ));
        }
        if *minutes == 0 {
            return Err(CatalogError::Invalid(format!(
                "task '{}' must have minutes_per_unit > 0",
                name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_catalog_file(content: &str) -> std::path::PathBuf {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        let path = std::env::temp_dir().join(format!("shiftboard-catalog-{}.yaml", suffix));
        fs::write(&path, content).expect("write catalog");
        path
    }

    #[test]
    fn test_load_catalog_from_yaml() {
        let path = temp_catalog_file("Putaway 3002: 20\nCycle Count: 10\n");
        let catalog = load_catalog(&path).expect("load");
        assert_eq!(catalog.minutes_per_unit("Putaway 3002"), Some(20));
        assert_eq!(catalog.minutes_per_unit("Cycle Count"), Some(10));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_load_catalog_rejects_zero_minutes() {
        let path = temp_catalog_file("Cycle Count: 0\n");
        let err = load_catalog(&path).expect_err("should reject");
        assert!(matches!(err, CatalogError::Invalid(_)));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_load_catalog_rejects_empty_map() {
        let path = temp_catalog_file("{}\n");
        let err = load_catalog(&path).expect_err("should reject");
        assert!(matches!(err, CatalogError::Invalid(_)));
        let _ = fs::remove_file(path);
    }
}
