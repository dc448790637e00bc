use std::path::Path;

use gms_harmonize_core::{Catalog, HookError};
use tokio::fs::read_to_string;

/// Read the release catalog, a JSON array of `{ "version", "dependencies" }` records.
///
/// # Errors
/// Returns error if the file cannot be read or is not a valid catalog.
pub async fn load_catalog(path: &Path) -> Result<Catalog, HookError> {
    let content = read_to_string(path)
        .await
        .map_err(|e| HookError::io(path, e))?;
    let catalog: Catalog = serde_json::from_str(&content).map_err(|source| HookError::Catalog {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "loaded {} release bundles from {}",
        catalog.bundles().len(),
        path.display()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_catalog() {
        let temp_dir = TempDir::new().unwrap();
        let catalog_path = temp_dir.path().join("dependencies.json");
        fs::write(
            &catalog_path,
            r#"[{"version": "11.8.0", "dependencies": ["com.google.firebase:firebase-core"]}]"#,
        )
        .unwrap();

        let catalog = load_catalog(&catalog_path).await.unwrap();
        assert_eq!(catalog.bundles().len(), 1);

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_load_catalog_missing() {
        let temp_dir = TempDir::new().unwrap();

        let result = load_catalog(&temp_dir.path().join("dependencies.json")).await;
        assert!(matches!(result, Err(HookError::Io { .. })));

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_load_catalog_invalid() {
        let temp_dir = TempDir::new().unwrap();
        let catalog_path = temp_dir.path().join("dependencies.json");
        fs::write(&catalog_path, r#"{"version": "11.8.0"}"#).unwrap();

        let result = load_catalog(&catalog_path).await;
        assert!(matches!(result, Err(HookError::Catalog { .. })));

        temp_dir.close().unwrap();
    }
}
