use std::fmt::Display;

use crate::{component_key::ComponentKey, version_label::VersionLabel};

/// One `<key>=<group>:<component>:<version>` declaration read from the properties file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryEntry {
    declaration_key: String,
    component: ComponentKey,
    version: VersionLabel,
    harmonizable: bool,
}

impl LibraryEntry {
    #[must_use]
    pub fn new(
        declaration_key: &str,
        component: ComponentKey,
        version: VersionLabel,
        harmonizable: bool,
    ) -> Self {
        Self {
            declaration_key: declaration_key.to_string(),
            component,
            version,
            harmonizable,
        }
    }

    #[must_use]
    pub fn declaration_key(&self) -> &str {
        &self.declaration_key
    }

    #[must_use]
    pub const fn component(&self) -> &ComponentKey {
        &self.component
    }

    #[must_use]
    pub const fn version(&self) -> &VersionLabel {
        &self.version
    }

    #[must_use]
    pub const fn is_harmonizable(&self) -> bool {
        self.harmonizable
    }

    /// Render the declaration line, optionally with a replacement version.
    #[must_use]
    pub fn to_line(&self, version: Option<&VersionLabel>) -> String {
        format!(
            "{}={}:{}",
            self.declaration_key,
            self.component,
            version.unwrap_or(&self.version)
        )
    }
}

/// `<group>:<component>:<version>`
impl Display for LibraryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.component, self.version)
    }
}
