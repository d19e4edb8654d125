//! Implementation of the `stagehand create` command.
//!
//! Responsibility: translate CLI arguments into `CreateOptions`, call the
//! core create pipeline, and display results. No business logic lives here.

use tracing::{debug, info, instrument};

use stagehand_adapters::{LocalFilesystem, TermConsole, templates};
use stagehand_core::{
    application::{
        CreateService,
        ports::Console as _,
        services::{ENV_FILE, HANDLER_FILE, MANIFEST_FILE, PACKAGE_FILE},
    },
    domain::CreateOptions,
};

use crate::{
    cli::{CreateArgs, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `stagehand create` command.
///
/// Dispatch sequence:
/// 1. Build `CreateOptions` from args + config defaults
/// 2. Collect missing identifiers interactively (interactive sessions only)
/// 3. Early-exit if `--dry-run`
/// 4. Confirm overwriting an existing directory unless `--yes`
/// 5. Wire adapters and run the core pipeline
/// 6. List the written artifacts
#[instrument(skip_all, fields(service = args.name.as_deref().unwrap_or("<none>")))]
pub fn execute(
    args: CreateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let working_dir = std::env::current_dir()?;

    // 1. Args win over config-file defaults; validation happens in the core.
    let mut options = CreateOptions {
        name: args.name,
        stage: args.stage.or(config.defaults.stage.clone()),
        region: args.region.or(config.defaults.region.clone()),
        working_dir,
    };

    let console = TermConsole::new(global.quiet);
    let interactive = console.is_interactive();

    // 2. Interactive sessions may fill in missing identifiers before the
    //    pipeline validates them; non-interactive sessions fail validation.
    if interactive {
        collect_missing(&mut options)?;
    }

    debug!(
        service = options.name.as_deref().unwrap_or("<none>"),
        stage = options.stage.as_deref().unwrap_or("<none>"),
        region = options.region.as_deref().unwrap_or("<none>"),
        "Options resolved"
    );

    let service = CreateService::new(
        Box::new(console),
        Box::new(LocalFilesystem::new()),
        templates::resolve_source(config.templates.local_path.as_deref()),
    );

    // 3. Dry run: describe but do not write.
    if args.dry_run {
        let resolved = service.validate(&options)?;
        output.info(&format!(
            "Dry run: would create '{}' at {}",
            resolved.name(),
            resolved.root().display(),
        ))?;
        for file in [HANDLER_FILE, MANIFEST_FILE, PACKAGE_FILE, ENV_FILE] {
            output.print(&format!("  {file}"))?;
        }
        return Ok(());
    }

    // 4. Re-scaffolding overwrites in place; in an interactive session give
    //    the user a chance to back out first.
    if let Some(name) = &options.name {
        let target = options.working_dir.join(name);
        if target.exists() && interactive && !args.yes {
            output.warning(&format!(
                "Directory {} already exists; artifacts will be overwritten",
                target.display()
            ))?;
            if !confirm()? {
                return Err(CliError::Cancelled);
            }
        }
    }

    // 5. Run the pipeline.
    info!("Create started");
    let report = service.run(&options)?;
    info!(files = report.files.len(), "Create completed");

    // 6. The pipeline's finish step has already printed the summary; add the
    //    artifact list for scripting-friendly output.
    if !global.quiet {
        output.print("")?;
        for file in &report.files {
            output.print(&format!("  {}", file.display()))?;
        }
    }

    Ok(())
}

/// Prompt for any missing identifier.
#[cfg(feature = "interactive")]
fn collect_missing(options: &mut CreateOptions) -> CliResult<()> {
    if options.name.is_none() {
        options.name = Some(prompt_for("Service name")?);
    }
    if options.stage.is_none() {
        options.stage = Some(prompt_for("Stage")?);
    }
    if options.region.is_none() {
        options.region = Some(prompt_for("Region")?);
    }
    Ok(())
}

#[cfg(feature = "interactive")]
fn prompt_for(label: &str) -> CliResult<String> {
    dialoguer::Input::new()
        .with_prompt(label)
        .interact_text()
        .map_err(|e| CliError::IoError {
            message: format!("failed to read {label}"),
            source: std::io::Error::other(e),
        })
}

/// Without the `interactive` feature missing fields go straight to
/// validation, which rejects them with an actionable message.
#[cfg(not(feature = "interactive"))]
fn collect_missing(_options: &mut CreateOptions) -> CliResult<()> {
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}
