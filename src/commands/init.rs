//! Init command
//!
//! Writes `components.json` and the `cn` class name helper the components
//! import from `<lib>/utils`.

use std::path::{Path, PathBuf};

use console::Style;
use inquire::{Select, Text};

use crate::cli::InitArgs;
use crate::config::ProjectConfig;
use crate::config::project::STYLES;
use crate::error::{self, Result};
use crate::installer::file_ops;
use crate::package_manager::PackageManager;
use crate::registry::{RegistryEntry, RegistrySource};
use crate::ui::display::relative_display;

use super::CommandContext;
use super::helpers::{is_interactive, resolve_project_root};

/// Base colors offered by the interactive setup
const BASE_COLORS: &[&str] = &["slate", "gray", "zinc", "neutral", "stone"];

/// Name of the registry entry holding the `cn` helper
const UTILS_ENTRY: &str = "utils";

/// Run init command
pub fn run(ctx: &CommandContext, args: InitArgs) -> Result<()> {
    let project_root = resolve_project_root(ctx.cwd.as_deref())?;

    if ProjectConfig::exists(&project_root) && !args.force {
        return Err(error::config::exists(
            ProjectConfig::path(&project_root).display().to_string(),
        ));
    }

    let mut config = ProjectConfig::detect(&project_root);
    if let Some(style) = args.style.clone() {
        config.style = style;
    }
    if !args.yes && is_interactive() {
        prompt_config(&mut config, args.style.is_none())?;
    }

    let config_path = config.save(&project_root)?;
    tracing::debug!(path = %config_path.display(), "wrote configuration");

    let builtin = RegistrySource::Builtin.load(&project_root, false)?;
    let utils = builtin.lookup(UTILS_ENTRY)?;
    let utils_written = write_utils(&project_root, &config, utils)?;

    if !ctx.quiet {
        print_summary(&project_root, &config_path, &utils_written, utils);
    }

    Ok(())
}

fn prompt_config(config: &mut ProjectConfig, ask_style: bool) -> Result<()> {
    if ask_style {
        config.style = Select::new("Which style would you like to use?", STYLES.to_vec())
            .prompt()?
            .to_string();
    }

    config.tailwind.base_color =
        Select::new("Which color would you like to use as base color?", BASE_COLORS.to_vec())
            .prompt()?
            .to_string();

    config.tailwind.css = ask("Where is your global CSS file?", &config.tailwind.css)?;
    config.tailwind.config = ask(
        "Where is your tailwind.config located?",
        &config.tailwind.config,
    )?;
    config.aliases.components = ask(
        "Where should components be placed?",
        &config.aliases.components,
    )?;
    config.aliases.lib = ask("Where should utilities be placed?", &config.aliases.lib)?;

    Ok(())
}

fn ask(message: &str, default: &str) -> Result<String> {
    Ok(Text::new(message).with_default(default).prompt()?)
}

/// Outcome of writing the `cn` helper
enum UtilsOutcome {
    Written(PathBuf),
    Kept(PathBuf),
}

/// Write the helper into the lib alias unless a file is already there
fn write_utils(
    project_root: &Path,
    config: &ProjectConfig,
    utils: &RegistryEntry,
) -> Result<UtilsOutcome> {
    let file = utils
        .files
        .first()
        .ok_or_else(|| error::registry::invalid("entry 'utils' has no files"))?;

    let target = project_root
        .join(config.base_dir(utils.kind))
        .join(&file.target);

    if target.exists() {
        return Ok(UtilsOutcome::Kept(target));
    }

    file_ops::write_atomic(&target, &file.content.load()?)?;
    Ok(UtilsOutcome::Written(target))
}

fn print_summary(
    project_root: &Path,
    config_path: &Path,
    utils: &UtilsOutcome,
    entry: &RegistryEntry,
) {
    let green = Style::new().green();
    println!(
        "{} {}",
        green.apply_to("Wrote"),
        relative_display(project_root, config_path)
    );

    match utils {
        UtilsOutcome::Written(path) => println!(
            "{} {}",
            green.apply_to("Wrote"),
            relative_display(project_root, path)
        ),
        UtilsOutcome::Kept(path) => println!(
            "{} {}",
            Style::new().dim().apply_to("Kept existing"),
            relative_display(project_root, path)
        ),
    }

    if let Some(cmd) =
        PackageManager::detect(project_root).install_command(&entry.package_dependencies)
    {
        println!();
        println!("Install the packages the components need:");
        println!("  {}", Style::new().cyan().apply_to(cmd));
    }
}
