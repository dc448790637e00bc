use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a harmonization run.
///
/// An unsatisfiable version set is not one of them: it is reported through
/// [`crate::Report::Error`] and the build carries on.
#[derive(Debug, Error)]
pub enum HookError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed library declaration: {line:?}")]
    MalformedDeclaration { line: String },

    #[error("malformed component identifier: {0:?} (expected <group>:<component>)")]
    MalformedComponent(String),

    #[error("invalid release catalog {}: {source}", path.display())]
    Catalog {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid report file {}: {source}", path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl HookError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
