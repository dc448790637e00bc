use std::path::{Path, PathBuf};

/// Resolve a configured path against the project root; absolute paths are kept.
#[must_use]
pub fn project_path(project_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    }
}
