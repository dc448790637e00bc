use std::path::{Path, PathBuf};

use gms_harmonize_core::{Config, HookError};
use tokio::fs::read_to_string;

pub fn get_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".gms-harmonize").join("config.json")
}

/// Load `.gms-harmonize/config.json`, falling back to defaults when it does not exist.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub async fn load_config(project_root: &Path) -> Result<Config, HookError> {
    let config_path = get_config_path(project_root);
    if !config_path.exists() {
        return Ok(Config::default());
    }
    let content = read_to_string(&config_path)
        .await
        .map_err(|e| HookError::io(&config_path, e))?;
    serde_json::from_str(&content).map_err(|source| HookError::Config {
        path: config_path,
        source,
    })
}
