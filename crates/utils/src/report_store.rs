use std::path::Path;

use gms_harmonize_core::{HookError, HookReport};
use tokio::fs::{create_dir_all, read_to_string, remove_file, write};

/// Persist the harmonize-phase report for a later report phase.
///
/// # Errors
/// Returns error if the file or its parent directory cannot be written.
pub async fn save_report(path: &Path, report: &HookReport) -> Result<(), HookError> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)
            .await
            .map_err(|e| HookError::io(parent, e))?;
    }
    let content = serde_json::to_string_pretty(report).map_err(|source| HookError::Report {
        path: path.to_path_buf(),
        source,
    })?;
    write(path, content).await.map_err(|e| HookError::io(path, e))
}

/// Load and delete the stored report, so each report is shown once.
///
/// A missing file yields an empty report.
///
/// # Errors
/// Returns error if the file exists but cannot be read, parsed or removed.
pub async fn take_report(path: &Path) -> Result<HookReport, HookError> {
    if !path.exists() {
        return Ok(HookReport::default());
    }
    let content = read_to_string(path)
        .await
        .map_err(|e| HookError::io(path, e))?;
    let report = serde_json::from_str(&content).map_err(|source| HookError::Report {
        path: path.to_path_buf(),
        source,
    })?;
    remove_file(path).await.map_err(|e| HookError::io(path, e))?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gms_harmonize_core::Report;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_save_then_take_consumes_report() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".gms-harmonize").join("report.json");

        let mut report = HookReport::default();
        report.push(Report::Success {
            version: "11.8.0".to_string(),
            changes: vec!["com.google.firebase:firebase-core:11.0.4".to_string()],
        });
        save_report(&path, &report).await.unwrap();
        assert!(path.exists());

        let taken = take_report(&path).await.unwrap();
        assert_eq!(taken, report);
        assert!(!path.exists());

        // Second read finds nothing
        let taken = take_report(&path).await.unwrap();
        assert!(taken.is_empty());

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_take_report_invalid() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.json");
        std::fs::write(&path, "[{\"kind\": \"unknown\"}]").unwrap();

        let result = take_report(&path).await;
        assert!(matches!(result, Err(HookError::Report { .. })));

        temp_dir.close().unwrap();
    }
}
