use std::path::PathBuf;

use gms_harmonize_core::StaticHookContext;
use napi::{Error, Result};
use napi_derive::napi;

#[napi]
/// # Errors
///
/// Returns an error if the CLI command execution fails.
pub async fn main() -> Result<()> {
  gms_harmonize_cli::main(&std::env::args().skip(1).collect::<Vec<String>>())
    .await
    .map_err(|e| Error::from_reason(e.to_string()))
}

#[napi]
/// Harmonize phase for a Cordova hook: pass `ctx.opts.projectRoot`, `ctx.cmdLine`
/// and `ctx.opts.cordova.plugins`.
///
/// Resolves to the stored report as JSON, or `null` when the run was skipped.
///
/// # Errors
///
/// Returns an error if harmonization fails; the hook script decides whether to abort.
pub async fn harmonize(
  project_root: String,
  cmd_line: String,
  plugins: Vec<String>,
) -> Result<Option<String>> {
  let hook_context = StaticHookContext::new(cmd_line, plugins);
  let report = gms_harmonize_cli::run_harmonize(Some(PathBuf::from(project_root)), &hook_context, false)
    .await
    .map_err(|e| Error::from_reason(e.to_string()))?;
  report
    .map(|report| serde_json::to_string(&report))
    .transpose()
    .map_err(|e| Error::from_reason(e.to_string()))
}

#[napi]
/// Report phase for a Cordova hook.
///
/// # Errors
///
/// Returns an error if the stored report cannot be read.
pub async fn show_result(project_root: String) -> Result<()> {
  let args = ["gms-harmonize", "report", "--project-root", project_root.as_str()]
    .iter()
    .map(ToString::to_string)
    .collect::<Vec<_>>();
  gms_harmonize_cli::main(&args)
    .await
    .map_err(|e| Error::from_reason(e.to_string()))
}
