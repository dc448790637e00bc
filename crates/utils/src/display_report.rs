use colored::Colorize;
use gms_harmonize_core::Report;

/// Render one report entry for the terminal: green for success, red for errors.
#[must_use]
pub fn display_report(report: &Report) -> String {
    let text = format!("\n{report}");
    match report {
        Report::Success { .. } => format!("{}\n", text.green()),
        Report::Error { .. } => format!("{}\n", text.red()),
        Report::Warning { .. } => format!("{text}\n"),
    }
}
