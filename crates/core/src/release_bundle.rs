use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{component_key::ComponentKey, version_label::VersionLabel};

/// A vendor release: one version and every component shipped at that version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseBundle {
    version: VersionLabel,
    #[serde(rename = "dependencies")]
    components: BTreeSet<ComponentKey>,
}

impl ReleaseBundle {
    #[must_use]
    pub fn new(version: &str, components: impl IntoIterator<Item = ComponentKey>) -> Self {
        Self {
            version: VersionLabel::parse(version),
            components: components.into_iter().collect(),
        }
    }

    #[must_use]
    pub const fn version(&self) -> &VersionLabel {
        &self.version
    }

    /// Whether every required component ships in this bundle.
    #[must_use]
    pub fn bundles_all(&self, required: &BTreeSet<ComponentKey>) -> bool {
        required.is_subset(&self.components)
    }
}

/// Known release bundles, ascending by version as listed in the catalog file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    bundles: Vec<ReleaseBundle>,
}

impl Catalog {
    #[must_use]
    pub const fn new(bundles: Vec<ReleaseBundle>) -> Self {
        Self { bundles }
    }

    #[must_use]
    pub fn bundles(&self) -> &[ReleaseBundle] {
        &self.bundles
    }
}
