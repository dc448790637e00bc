use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use gms_harmonize_core::{HookContext, HookError, HookReport, StaticHookContext};
use gms_harmonize_gradle::harmonize_properties;
use gms_harmonize_utils::{
    display_report, load_catalog, read_properties, save_report, write_properties,
};

use crate::{context::CommandContext, options::FormatOptions};

#[derive(Args, Debug)]
#[command(about = "Align Play Services / Firebase versions in project.properties")]
pub struct HarmonizeArgs {
    /// Cordova project root (defaults to the current directory)
    #[arg(long)]
    pub project_root: Option<PathBuf>,

    /// Command line the build tool was invoked with
    #[arg(long, default_value = "")]
    pub cmd_line: String,

    /// Installed plugin id, repeatable
    #[arg(long = "plugin")]
    pub plugins: Vec<String>,

    /// Print the report without writing any file
    #[arg(short, long)]
    pub dry_run: bool,

    /// Fail the command when harmonization fails instead of logging and continuing
    #[arg(long)]
    pub strict: bool,

    #[arg(long, default_value = "stdout")]
    pub format: FormatOptions,
}

/// Harmonize the project and apply the host policy for failures.
///
/// Unless `strict` is set a failed run is logged and swallowed: the build goes on with the
/// properties file as it was.
///
/// # Errors
/// Returns error only in strict mode, if harmonization fails.
pub async fn handle_harmonize(args: &HarmonizeArgs) -> Result<()> {
    let hook_context = StaticHookContext::new(args.cmd_line.clone(), args.plugins.clone());
    match run_harmonize(args.project_root.clone(), &hook_context, args.dry_run).await {
        Ok(Some(report)) if args.dry_run => {
            let stdout_msg = report
                .entries()
                .iter()
                .map(display_report)
                .collect::<String>();
            args.format
                .print(&stdout_msg, &serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Ok(_) => Ok(()),
        Err(e) if args.strict => Err(e.into()),
        Err(e) => {
            log::error!("harmonization failed: {e}");
            println!("EXCEPTION: {e}");
            Ok(())
        }
    }
}

/// Phase one of the hook: rewrite the properties file and store the report.
///
/// Returns `None` when the command line says the run must be skipped.
///
/// # Errors
/// Returns error if the configuration, catalog or properties file cannot be used.
pub async fn run_harmonize(
    project_root: Option<PathBuf>,
    hook_context: &dyn HookContext,
    dry_run: bool,
) -> Result<Option<HookReport>, HookError> {
    let context = CommandContext::new(project_root.as_deref()).await?;
    let config = &context.config;
    if hook_context.command_line().contains(config.skip_phrase.as_str()) {
        log::debug!("'{}' in command line, skipping", config.skip_phrase);
        return Ok(None);
    }
    if !dry_run {
        // a failure below must not leave the previous run's report behind
        save_report(&context.report_path(), &HookReport::default()).await?;
    }
    let compatible = config.is_compatible(hook_context.installed_plugins());

    let properties_path = context.properties_path();
    let content = read_properties(&properties_path).await?;
    let catalog = load_catalog(&context.catalog_path()).await?;
    let harmonization = harmonize_properties(&content, &catalog, config, compatible)?;

    if !dry_run {
        if let Some(rewritten) = &harmonization.rewritten {
            write_properties(&properties_path, rewritten).await?;
            log::info!("rewrote {}", properties_path.display());
        }
        save_report(&context.report_path(), &harmonization.report).await?;
    }
    Ok(Some(harmonization.report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        harmonize: HarmonizeArgs,
    }

    #[test]
    fn test_harmonize_args_parsing() {
        let cli = TestCli::parse_from([
            "test",
            "--cmd-line",
            "cordova build android",
            "--plugin",
            "cordova-admob",
            "--plugin",
            "cordova-plugin-device",
            "--dry-run",
        ]);
        assert_eq!(cli.harmonize.cmd_line, "cordova build android");
        assert_eq!(cli.harmonize.plugins.len(), 2);
        assert!(cli.harmonize.dry_run);
        assert!(!cli.harmonize.strict);
        assert!(matches!(cli.harmonize.format, FormatOptions::Stdout));
    }

    fn write_project(root: &std::path::Path, properties: &str) {
        let android = root.join("platforms/android");
        fs::create_dir_all(&android).unwrap();
        fs::write(android.join("project.properties"), properties).unwrap();
        let scripts = root.join("plugins/cordova-play-services-version-adapter/scripts");
        fs::create_dir_all(&scripts).unwrap();
        fs::write(
            scripts.join("dependencies.json"),
            r#"[
                {"version": "11.0.4", "dependencies": ["com.google.firebase:firebase-core"]},
                {"version": "11.8.0", "dependencies": [
                    "com.google.firebase:firebase-core",
                    "com.google.android.gms:play-services-maps"
                ]}
            ]"#,
        )
        .unwrap();
    }

    const PROPERTIES: &str = "target=android-26
cordova.system.library.1=com.google.firebase:firebase-core:11.0.4
cordova.system.library.2=com.google.android.gms:play-services-maps:11.8.0
";

    #[tokio::test]
    async fn test_run_harmonize_skips_platform_add() {
        let temp_dir = TempDir::new().unwrap();
        write_project(temp_dir.path(), PROPERTIES);

        let hook_context =
            StaticHookContext::new("cordova platform add android".to_string(), vec![]);
        let result = run_harmonize(Some(temp_dir.path().to_path_buf()), &hook_context, false)
            .await
            .unwrap();
        assert!(result.is_none());
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("platforms/android/project.properties"))
                .unwrap(),
            PROPERTIES
        );
        assert!(!temp_dir.path().join(".gms-harmonize/report.json").exists());

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_run_harmonize_dry_run_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        write_project(temp_dir.path(), PROPERTIES);

        let hook_context = StaticHookContext::new("cordova build android".to_string(), vec![]);
        let report = run_harmonize(Some(temp_dir.path().to_path_buf()), &hook_context, true)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(report.entries().len(), 1);
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("platforms/android/project.properties"))
                .unwrap(),
            PROPERTIES
        );
        assert!(!temp_dir.path().join(".gms-harmonize/report.json").exists());

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_run_harmonize_missing_catalog() {
        let temp_dir = TempDir::new().unwrap();
        let android = temp_dir.path().join("platforms/android");
        fs::create_dir_all(&android).unwrap();
        fs::write(android.join("project.properties"), PROPERTIES).unwrap();

        let hook_context = StaticHookContext::default();
        let result =
            run_harmonize(Some(temp_dir.path().to_path_buf()), &hook_context, false).await;
        assert!(matches!(result, Err(HookError::Io { .. })));

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_handle_harmonize_swallows_failure_unless_strict() {
        let temp_dir = TempDir::new().unwrap();

        let mut args = HarmonizeArgs {
            project_root: Some(temp_dir.path().to_path_buf()),
            cmd_line: "cordova build android".to_string(),
            plugins: vec![],
            dry_run: false,
            strict: false,
            format: FormatOptions::Stdout,
        };
        assert!(handle_harmonize(&args).await.is_ok());

        args.strict = true;
        assert!(handle_harmonize(&args).await.is_err());

        temp_dir.close().unwrap();
    }
}
