use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::version_label::VersionLabel;

const TOOL_NAME: &str = "Play Services Version Harmonizer";

/// One message produced by the harmonize phase for the report phase to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Report {
    /// Declarations were moved to `version`. `changes` lists each one as it was before.
    Success { version: String, changes: Vec<String> },
    /// The excluded component was declared but no compatible companion plugin is installed.
    Warning {
        component: String,
        compat_plugins: Vec<String>,
    },
    /// No release bundles every declared component.
    Error {
        floor: String,
        floor_component: String,
        conflicts: Vec<String>,
    },
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success { version, changes } => {
                write!(
                    f,
                    "'{TOOL_NAME}' has successfully applied the following changes:"
                )?;
                for change in changes {
                    write!(f, "\n    - '{change}' => {version}")?;
                }
                Ok(())
            }
            Self::Warning {
                component,
                compat_plugins,
            } => {
                writeln!(f, "WARNING: some plugins are using '{component}'")?;
                write!(
                    f,
                    "It is not possible to find the required version of '{component}' together with the other Play Services libraries."
                )?;
                if !compat_plugins.is_empty() {
                    write!(
                        f,
                        "\n\nInstall a compatible plugin to use it: {}",
                        compat_plugins.join(", ")
                    )?;
                }
                Ok(())
            }
            Self::Error {
                floor,
                floor_component,
                conflicts,
            } => {
                writeln!(
                    f,
                    "'{TOOL_NAME}' has detected an error. The following dependencies of 'Google Play Services' are not compatible:"
                )?;
                for conflict in conflicts {
                    writeln!(f, "    - '{conflict}'")?;
                }
                // numeric floors were also searched downwards inside their major line
                let searched = match VersionLabel::parse(floor).major_line_floor() {
                    Some(line_floor) => format!("from {line_floor} upwards"),
                    None => format!("at or above {floor}"),
                };
                writeln!(
                    f,
                    "\nThere is no version of 'Google Play Services' {searched} that includes all these dependencies (highest required: {floor} by '{floor_component}')."
                )?;
                writeln!(
                    f,
                    "All dependencies of 'Google Play Services' must have the same version."
                )?;
                write!(f, "The application may not compile.")
            }
        }
    }
}

/// Everything the harmonize phase hands over to the report phase, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HookReport {
    entries: Vec<Report>,
}

impl HookReport {
    pub fn push(&mut self, report: Report) {
        self.entries.push(report);
    }

    #[must_use]
    pub fn entries(&self) -> &[Report] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
