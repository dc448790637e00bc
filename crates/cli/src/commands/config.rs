use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::context::CommandContext;

#[derive(Args, Debug)]
#[command(about = "Show the effective gms-harmonize configuration")]
pub struct ConfigArgs {
    /// Cordova project root (defaults to the current directory)
    #[arg(long)]
    pub project_root: Option<PathBuf>,
}

/// Display gms-harmonize configuration
///
/// # Errors
/// Returns error if reading the configuration fails.
pub async fn handle_config(args: &ConfigArgs) -> Result<()> {
    let context = CommandContext::new(args.project_root.as_deref()).await?;
    println!("{}", serde_json::to_string_pretty(&context.config)?);
    Ok(())
}
