use gms_harmonize_core::{
    Catalog, Config, HookError, HookReport, Report, Requirements, Resolution, resolve,
};

use crate::{
    extractor::{Extraction, extract},
    rewriter::{changed_entries, rewrite},
};

/// Outcome of one harmonization pass over a properties file.
#[derive(Debug, Clone, Default)]
pub struct Harmonization {
    /// New file content; `None` leaves the file as it was
    pub rewritten: Option<String>,
    pub resolution: Option<Resolution>,
    pub report: HookReport,
}

/// Run extraction, resolution and rewriting over `content` without touching the disk.
///
/// Fewer than two harmonizable declarations is a no-op: there is nothing to align.
///
/// # Errors
/// Returns error if a declaration line is malformed.
pub fn harmonize_properties(
    content: &str,
    catalog: &Catalog,
    config: &Config,
    compatible: bool,
) -> Result<Harmonization, HookError> {
    let extraction = extract(content, config, compatible)?;
    let mut harmonization = Harmonization::default();

    if extraction.harmonizable().count() > 1 {
        if let Some(requirements) = Requirements::from_entries(&extraction.entries) {
            match resolve(&requirements, catalog) {
                Some(resolution) => {
                    apply(&extraction, &resolution, &mut harmonization);
                    harmonization.resolution = Some(resolution);
                }
                None => harmonization
                    .report
                    .push(unresolvable(&extraction, &requirements)),
            }
        }
    } else {
        log::debug!("fewer than two harmonizable declarations, nothing to do");
    }

    if extraction.has_excluded_component && !compatible {
        let component = format!("{}:{}", config.excluded_group, config.excluded_component);
        log::warn!("{component} is declared without a compatible plugin, left untouched");
        harmonization.report.push(Report::Warning {
            component,
            compat_plugins: config.compat_plugins.clone(),
        });
    }
    Ok(harmonization)
}

fn apply(extraction: &Extraction, resolution: &Resolution, harmonization: &mut Harmonization) {
    let version = &resolution.version;
    log::debug!("resolved {version} ({:?} search)", resolution.pass);
    let changes = changed_entries(extraction, version)
        .map(ToString::to_string)
        .collect::<Vec<_>>();
    if !changes.is_empty() {
        harmonization.report.push(Report::Success {
            version: version.to_string(),
            changes,
        });
    }
    harmonization.rewritten = Some(rewrite(extraction, version));
}

fn unresolvable(extraction: &Extraction, requirements: &Requirements) -> Report {
    Report::Error {
        floor: requirements.floor().to_string(),
        floor_component: requirements.floor_component().to_string(),
        conflicts: extraction
            .harmonizable()
            .map(ToString::to_string)
            .collect(),
    }
}
