//! List command implementation

use console::Style;

use crate::cli::ListArgs;
use crate::error::Result;
use crate::registry::RegistryEntry;
use crate::ui::display;

use super::CommandContext;
use super::helpers::{load_registry, resolve_project_root};

/// Run list command
pub fn run(ctx: &CommandContext, args: ListArgs) -> Result<()> {
    let project_root = resolve_project_root(ctx.cwd.as_deref())?;
    let index = load_registry(ctx, &project_root)?;

    if index.is_empty() {
        println!("{} has no components", index.name());
        return Ok(());
    }

    let mut entries: Vec<&RegistryEntry> = index.entries().iter().collect();
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    println!(
        "{} ({} components):",
        Style::new().bold().apply_to(index.name()),
        entries.len()
    );
    for entry in entries {
        display::print_registry_entry(entry);
        if args.detailed {
            print_details(entry);
        }
    }

    Ok(())
}

fn print_details(entry: &RegistryEntry) {
    for file in &entry.files {
        println!("      {}", Style::new().dim().apply_to(&file.path));
    }
    let packages: Vec<String> = entry
        .package_dependencies
        .iter()
        .chain(&entry.dev_dependencies)
        .map(ToString::to_string)
        .collect();
    if !packages.is_empty() {
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Packages:"),
            packages.join(", ")
        );
    }
}
