use gms_harmonize_core::{Config, HookError};
use gms_harmonize_utils::{load_config, project_path};
use std::path::{Path, PathBuf};

/// Project root plus the configuration loaded from it.
pub struct CommandContext {
    pub project_root: PathBuf,
    pub config: Config,
}

impl CommandContext {
    /// # Errors
    /// Returns error if the current directory is unavailable or the configuration is invalid.
    pub async fn new(project_root: Option<&Path>) -> Result<Self, HookError> {
        let project_root = match project_root {
            Some(path) => path.to_path_buf(),
            None => Self::current_dir()?,
        };
        let config = load_config(&project_root).await?;
        Ok(Self {
            project_root,
            config,
        })
    }

    /// # Errors
    /// Returns error if retrieving the current directory fails.
    pub fn current_dir() -> Result<PathBuf, HookError> {
        std::env::current_dir().map_err(|e| HookError::io(".", e))
    }

    #[must_use]
    pub fn properties_path(&self) -> PathBuf {
        project_path(&self.project_root, &self.config.properties_file)
    }

    #[must_use]
    pub fn catalog_path(&self) -> PathBuf {
        project_path(&self.project_root, &self.config.catalog_file)
    }

    #[must_use]
    pub fn report_path(&self) -> PathBuf {
        project_path(&self.project_root, &self.config.report_file)
    }
}
