use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{
    ConfigArgs, HarmonizeArgs, ReportArgs, handle_config, handle_harmonize, handle_report,
};
pub mod commands;
pub mod context;
pub mod options;

pub use commands::run_harmonize;

#[derive(Parser, Debug)]
#[command(
    name = "gms-harmonize",
    author,
    version,
    about = "Aligns Google Play Services / Firebase library versions in Cordova Android builds",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Harmonize(HarmonizeArgs),
    Report(ReportArgs),
    Config(ConfigArgs),
}

/// # Errors
/// Returns error if the selected command fails.
pub async fn main(args: &[String]) -> Result<()> {
    let cli = Cli::parse_from(args);
    match cli.command {
        Commands::Harmonize(args) => handle_harmonize(&args).await?,
        Commands::Report(args) => handle_report(&args).await?,
        Commands::Config(args) => handle_config(&args).await?,
    }
    Ok(())
}
