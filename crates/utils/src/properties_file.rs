use std::path::Path;

use gms_harmonize_core::HookError;
use tokio::fs::{read_to_string, write};

/// # Errors
/// Returns error if the file cannot be read.
pub async fn read_properties(path: &Path) -> Result<String, HookError> {
    read_to_string(path).await.map_err(|e| HookError::io(path, e))
}

/// # Errors
/// Returns error if the file cannot be written.
pub async fn write_properties(path: &Path, content: &str) -> Result<(), HookError> {
    write(path, content).await.map_err(|e| HookError::io(path, e))
}
