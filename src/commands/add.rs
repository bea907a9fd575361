//! Add command
//!
//! Loads the project configuration and the registry, resolves the requested
//! components, then plans and applies the install.

use inquire::MultiSelect;

use crate::cli::AddArgs;
use crate::config::ProjectConfig;
use crate::error::{self, Result};
use crate::installer::{
    ConfirmOverwrite, DeclineAll, InquireConfirm, Installer, OverwritePolicy,
};
use crate::package_manager::PackageManager;
use crate::registry::RegistryIndex;
use crate::resolver::{expand_names, resolve};
use crate::ui::{
    InteractiveProgressReporter, ProgressReporter, SilentProgressReporter, display,
};

use super::CommandContext;
use super::helpers::{is_interactive, load_registry, resolve_project_root};

/// Run add command
pub fn run(ctx: &CommandContext, args: AddArgs) -> Result<()> {
    let project_root = resolve_project_root(ctx.cwd.as_deref())?;
    let config = ProjectConfig::load(&project_root)?;
    let index = load_registry(ctx, &project_root)?;

    let interactive = is_interactive();
    let names = select_names(&args, &index, interactive)?;
    let resolution = resolve(&names, &index)?;

    tracing::info!(
        components = ?resolution.names(),
        files = resolution.file_count(),
        "installing"
    );

    let policy = overwrite_policy(&args, interactive);
    let installer = Installer::new(&project_root, &config)
        .with_policy(policy)
        .with_path_override(args.path.clone())?
        .with_dry_run(args.dry_run);

    let mut confirm: Box<dyn ConfirmOverwrite> = match policy {
        OverwritePolicy::Prompt => Box::new(InquireConfirm::new(&project_root)),
        OverwritePolicy::Never | OverwritePolicy::Always => Box::new(DeclineAll),
    };
    let mut progress: Box<dyn ProgressReporter> = if ctx.quiet || args.dry_run {
        Box::new(SilentProgressReporter)
    } else {
        Box::new(InteractiveProgressReporter::new())
    };

    let mut report = installer.install(&resolution, confirm.as_mut(), progress.as_mut())?;
    tracing::debug!(
        success = report.is_success(),
        written = report.files_written.len(),
        skipped = report.files_skipped.len(),
        "install finished"
    );

    if !ctx.quiet {
        display::print_install_report(
            &report,
            &project_root,
            PackageManager::detect(&project_root),
        );
    }

    match report.error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Overwrite policy implied by the flags
///
/// `--overwrite` wins over `--yes`; without either, prompting is only
/// possible on a terminal and never happens during a dry run.
pub fn overwrite_policy(args: &AddArgs, interactive: bool) -> OverwritePolicy {
    if args.overwrite {
        OverwritePolicy::Always
    } else if args.yes || args.dry_run || !interactive {
        OverwritePolicy::Never
    } else {
        OverwritePolicy::Prompt
    }
}

fn select_names(args: &AddArgs, index: &RegistryIndex, interactive: bool) -> Result<Vec<String>> {
    if args.all {
        return Ok(index.all_names().into_iter().collect());
    }

    if !args.components.is_empty() {
        return expand_names(&args.components, index);
    }

    if !interactive || args.yes {
        return Err(error::registry::no_components());
    }

    let items: Vec<String> = index.all_names().into_iter().collect();
    let selection = MultiSelect::new("Select components to add", items)
        .with_page_size(10)
        .with_help_message("  ↑↓ navigate  space select  enter confirm  type to filter  esc cancel")
        .prompt_skippable()?
        .unwrap_or_default();

    if selection.is_empty() {
        return Err(error::registry::no_components());
    }
    Ok(selection)
}
