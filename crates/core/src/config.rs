use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Loaded from `.gms-harmonize/config.json`, controls which declarations are harmonized and where files live.
///
/// Every field has a default matching a stock Cordova Android project, so the file is optional.
/// Relative paths are resolved against the project root.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Substring that marks a library declaration line in the properties file
    pub declaration_marker: String,

    /// Group prefixes of the vendor family to harmonize
    pub vendor_groups: Vec<String>,

    /// Group of the component that is only harmonized alongside a compatible plugin
    pub excluded_group: String,

    /// The pinned component itself
    pub excluded_component: String,

    /// Plugins whose presence makes the excluded component safe to harmonize
    pub compat_plugins: Vec<String>,

    /// Android properties file holding the declarations
    pub properties_file: PathBuf,

    /// JSON release catalog: `[{ "version": ..., "dependencies": ["<group>:<component>", ...] }]`
    pub catalog_file: PathBuf,

    /// Where the harmonize phase leaves its report for the report phase
    pub report_file: PathBuf,

    /// Command-line phrase during which harmonization is skipped
    pub skip_phrase: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            declaration_marker: "cordova.system.library".to_string(),
            vendor_groups: vec![
                "com.google.android.gms".to_string(),
                "com.google.firebase".to_string(),
            ],
            excluded_group: "com.google.android.gms".to_string(),
            excluded_component: "play-services-ads".to_string(),
            compat_plugins: vec!["cordova-admob".to_string()],
            properties_file: PathBuf::from("platforms/android/project.properties"),
            catalog_file: PathBuf::from(
                "plugins/cordova-play-services-version-adapter/scripts/dependencies.json",
            ),
            report_file: PathBuf::from(".gms-harmonize/report.json"),
            skip_phrase: "platform add".to_string(),
        }
    }
}

impl Config {
    #[must_use]
    pub fn is_vendor_group(&self, group: &str) -> bool {
        self.vendor_groups.iter().any(|prefix| group.contains(prefix.as_str()))
    }

    #[must_use]
    pub fn is_excluded(&self, group: &str, component: &str) -> bool {
        group == self.excluded_group && component == self.excluded_component
    }

    /// Whether any installed plugin declares compatibility with the excluded component.
    #[must_use]
    pub fn is_compatible(&self, installed_plugins: &[String]) -> bool {
        installed_plugins
            .iter()
            .any(|plugin| self.compat_plugins.contains(plugin))
    }
}
