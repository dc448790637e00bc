use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use gms_harmonize_utils::{display_report, take_report};

use crate::{context::CommandContext, options::FormatOptions};

#[derive(Args, Debug)]
#[command(about = "Show the result of the last harmonize run")]
pub struct ReportArgs {
    /// Cordova project root (defaults to the current directory)
    #[arg(long)]
    pub project_root: Option<PathBuf>,

    #[arg(long, default_value = "stdout")]
    pub format: FormatOptions,
}

/// Phase two of the hook: print the stored report once and discard it.
///
/// # Errors
/// Returns error if the configuration or the stored report cannot be read.
pub async fn handle_report(args: &ReportArgs) -> Result<()> {
    let context = CommandContext::new(args.project_root.as_deref()).await?;
    let report = take_report(&context.report_path()).await?;
    let stdout_msg = report
        .entries()
        .iter()
        .map(display_report)
        .collect::<String>();
    args.format
        .print(&stdout_msg, &serde_json::to_string_pretty(&report)?);
    Ok(())
}
