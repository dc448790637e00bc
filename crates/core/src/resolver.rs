use std::collections::BTreeSet;

use crate::{
    component_key::ComponentKey,
    library_entry::LibraryEntry,
    release_bundle::{Catalog, ReleaseBundle},
    version_label::VersionLabel,
};

/// What the harmonizable declarations of one run need from a release.
#[derive(Debug, Clone)]
pub struct Requirements {
    required: BTreeSet<ComponentKey>,
    floor: VersionLabel,
    floor_component: ComponentKey,
}

impl Requirements {
    /// Collect the required components and the floor version from the harmonizable entries.
    ///
    /// Returns `None` when no entry is harmonizable. The floor only moves when a later
    /// entry is strictly greater, so the first of several equal versions names it.
    #[must_use]
    pub fn from_entries(entries: &[LibraryEntry]) -> Option<Self> {
        let mut harmonizable = entries.iter().filter(|e| e.is_harmonizable());
        let first = harmonizable.next()?;
        let mut requirements = Self {
            required: BTreeSet::from([first.component().clone()]),
            floor: first.version().clone(),
            floor_component: first.component().clone(),
        };
        for entry in harmonizable {
            requirements.required.insert(entry.component().clone());
            if entry.version().compare(&requirements.floor).is_gt() {
                requirements.floor = entry.version().clone();
                requirements.floor_component = entry.component().clone();
            }
        }
        Some(requirements)
    }

    #[must_use]
    pub fn new(
        required: impl IntoIterator<Item = ComponentKey>,
        floor: &str,
        floor_component: ComponentKey,
    ) -> Self {
        Self {
            required: required.into_iter().collect(),
            floor: VersionLabel::parse(floor),
            floor_component,
        }
    }

    #[must_use]
    pub const fn required(&self) -> &BTreeSet<ComponentKey> {
        &self.required
    }

    #[must_use]
    pub const fn floor(&self) -> &VersionLabel {
        &self.floor
    }

    #[must_use]
    pub const fn floor_component(&self) -> &ComponentKey {
        &self.floor_component
    }
}

/// Direction of the primary scan over the candidates at or above the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOrder {
    /// Highest version first. Used when the floor has no numeric major version.
    PreferNewest,
    /// Lowest version first, keeping the upgrade as small as possible.
    PreferSmallestUpgrade,
}

impl ScanOrder {
    #[must_use]
    pub fn for_floor(floor: &VersionLabel) -> Self {
        if floor.has_numeric_lead() {
            Self::PreferSmallestUpgrade
        } else {
            Self::PreferNewest
        }
    }

    fn pick<'a>(
        self,
        candidates: Vec<&'a ReleaseBundle>,
        required: &BTreeSet<ComponentKey>,
    ) -> Option<&'a ReleaseBundle> {
        match self {
            Self::PreferSmallestUpgrade => candidates.into_iter().find(|b| b.bundles_all(required)),
            Self::PreferNewest => candidates
                .into_iter()
                .rev()
                .find(|b| b.bundles_all(required)),
        }
    }
}

/// Which search produced the version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPass {
    /// A bundle at or above the floor.
    Primary,
    /// A bundle below the floor but inside the floor's major line.
    Relaxed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub version: VersionLabel,
    pub pass: SearchPass,
}

/// Pick the single release version every harmonizable declaration should use.
///
/// `None` means no bundle in the catalog ships all required components together,
/// neither at or above the floor nor, for numeric floors, lower in the same major line.
#[must_use]
pub fn resolve(requirements: &Requirements, catalog: &Catalog) -> Option<Resolution> {
    let floor = requirements.floor();
    let order = ScanOrder::for_floor(floor);
    log::debug!(
        "resolving {} components from floor {floor} ({order:?})",
        requirements.required().len()
    );

    let candidates = catalog
        .bundles()
        .iter()
        .filter(|b| b.version().is_at_least(floor))
        .collect::<Vec<_>>();
    if let Some(bundle) = order.pick(candidates, requirements.required()) {
        return Some(Resolution {
            version: bundle.version().clone(),
            pass: SearchPass::Primary,
        });
    }

    let ceiling = floor.major_line_floor()?;
    log::debug!("no bundle at or above {floor}, searching down to {ceiling}");
    let candidates = catalog
        .bundles()
        .iter()
        .filter(|b| b.version().is_at_least(&ceiling) && b.version().is_below(floor))
        .collect::<Vec<_>>();
    ScanOrder::PreferNewest
        .pick(candidates, requirements.required())
        .map(|bundle| Resolution {
            version: bundle.version().clone(),
            pass: SearchPass::Relaxed,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> ComponentKey {
        s.parse().unwrap()
    }

    fn bundle(version: &str, components: &[&str]) -> ReleaseBundle {
        ReleaseBundle::new(version, components.iter().map(|c| key(c)))
    }

    fn entry(component: &str, version: &str, harmonizable: bool) -> LibraryEntry {
        LibraryEntry::new(
            "cordova.system.library.1",
            key(component),
            VersionLabel::parse(version),
            harmonizable,
        )
    }

    #[test]
    fn test_prefers_smallest_sufficient_upgrade() {
        let catalog = Catalog::new(vec![
            bundle("1.0.0", &["A:x"]),
            bundle("1.2.0", &["A:x", "A:y"]),
            bundle("2.0.0", &["A:x"]),
        ]);
        let requirements = Requirements::new([key("A:x"), key("A:y")], "1.0.0", key("A:x"));
        let resolution = resolve(&requirements, &catalog).unwrap();
        assert_eq!(resolution.version.as_str(), "1.2.0");
        assert_eq!(resolution.pass, SearchPass::Primary);
    }

    #[test]
    fn test_smallest_upgrade_skips_newer_bundles_that_also_qualify() {
        let catalog = Catalog::new(vec![
            bundle("1.2.0", &["A:x", "A:y"]),
            bundle("1.4.0", &["A:x", "A:y"]),
        ]);
        let requirements = Requirements::new([key("A:x"), key("A:y")], "1.1.0", key("A:y"));
        assert_eq!(
            resolve(&requirements, &catalog).unwrap().version.as_str(),
            "1.2.0"
        );
    }

    #[test]
    fn test_non_numeric_floor_prefers_newest() {
        let catalog = Catalog::new(vec![
            bundle("1.0.0", &["A:x", "A:y"]),
            bundle("1.2.0", &["A:x", "A:y"]),
            bundle("2.0.0", &["A:x"]),
        ]);
        let requirements = Requirements::new([key("A:x"), key("A:y")], "beta.1", key("A:x"));
        assert_eq!(
            ScanOrder::for_floor(requirements.floor()),
            ScanOrder::PreferNewest
        );
        assert_eq!(
            resolve(&requirements, &catalog).unwrap().version.as_str(),
            "1.2.0"
        );
    }

    #[test]
    fn test_non_numeric_floor_never_relaxes() {
        let catalog = Catalog::new(vec![
            bundle("1.0.0", &["A:x"]),
            bundle("1.2.0", &["A:y"]),
            bundle("2.0.0", &["A:x"]),
        ]);
        let requirements = Requirements::new([key("A:x"), key("A:y")], "beta.1", key("A:x"));
        assert!(resolve(&requirements, &catalog).is_none());
    }

    #[test]
    fn test_relaxed_search_within_major_line() {
        let catalog = Catalog::new(vec![
            bundle("4.9.0", &["A:x", "A:y"]),
            bundle("5.0.0", &["A:x", "A:y"]),
            bundle("5.1.0", &["A:x", "A:y"]),
            bundle("5.4.0", &["A:x"]),
            bundle("5.6.0", &["A:y"]),
        ]);
        let requirements = Requirements::new([key("A:x"), key("A:y")], "5.4.0", key("A:x"));
        let resolution = resolve(&requirements, &catalog).unwrap();
        assert_eq!(resolution.version.as_str(), "5.1.0");
        assert_eq!(resolution.pass, SearchPass::Relaxed);
    }

    #[test]
    fn test_relaxed_search_does_not_leave_major_line() {
        let catalog = Catalog::new(vec![
            bundle("4.9.0", &["A:x", "A:y"]),
            bundle("5.4.0", &["A:x"]),
        ]);
        let requirements = Requirements::new([key("A:x"), key("A:y")], "5.4.0", key("A:x"));
        assert!(resolve(&requirements, &catalog).is_none());
    }

    #[test]
    fn test_empty_catalog_resolves_nothing() {
        let requirements = Requirements::new([key("A:x")], "1.0.0", key("A:x"));
        assert!(resolve(&requirements, &Catalog::default()).is_none());
    }

    #[test]
    fn test_requirements_from_entries() {
        let entries = vec![
            entry("com.google.firebase:firebase-core", "11.0.4", true),
            entry("com.android.support:support-v4", "27.0.0", false),
            entry("com.google.android.gms:play-services-maps", "11.8.0", true),
            entry("com.google.firebase:firebase-core", "11.8.0", true),
        ];
        let requirements = Requirements::from_entries(&entries).unwrap();
        assert_eq!(requirements.required().len(), 2);
        assert_eq!(requirements.floor().as_str(), "11.8.0");
        assert_eq!(
            requirements.floor_component().to_string(),
            "com.google.android.gms:play-services-maps"
        );
    }

    #[test]
    fn test_requirements_from_entries_without_harmonizable() {
        let entries = vec![entry("com.android.support:support-v4", "27.0.0", false)];
        assert!(Requirements::from_entries(&entries).is_none());
    }
}
