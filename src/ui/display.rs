//! Display functions for install reports and registry entries

use std::path::{Path, PathBuf};

use console::Style;

use crate::installer::InstallReport;
use crate::package_manager::PackageManager;
use crate::registry::{PackageDependency, RegistryEntry};

/// Path shown to the user, relative to the project root when possible
pub fn relative_display(project_root: &Path, path: &Path) -> String {
    path.strip_prefix(project_root)
        .unwrap_or(path)
        .display()
        .to_string()
        .replace('\\', "/")
}

/// Print install report summary
pub fn print_install_report(
    report: &InstallReport,
    project_root: &Path,
    package_manager: PackageManager,
) {
    let heading = Style::new().bold();

    if report.dry_run {
        println!(
            "[DRY RUN] Would write {} file(s), skip {} file(s)",
            report.files_written.len(),
            report.files_skipped.len()
        );
    }

    print_paths(
        &heading.apply_to("filesWritten:").to_string(),
        &report.files_written,
        project_root,
        Style::new().green(),
    );
    print_paths(
        &heading.apply_to("filesSkipped:").to_string(),
        &report.files_skipped,
        project_root,
        Style::new().dim(),
    );

    if report.has_packages() {
        if !report.package_dependencies_to_install.is_empty() {
            println!("{}", heading.apply_to("packages:"));
            print_packages(&report.package_dependencies_to_install);
        }
        if !report.dev_dependencies_to_install.is_empty() {
            println!("{}", heading.apply_to("devPackages:"));
            print_packages(&report.dev_dependencies_to_install);
        }

        println!();
        println!("Install them with:");
        if let Some(cmd) = package_manager.install_command(&report.package_dependencies_to_install)
        {
            println!("  {}", Style::new().cyan().apply_to(cmd));
        }
        if let Some(cmd) =
            package_manager.install_dev_command(&report.dev_dependencies_to_install)
        {
            println!("  {}", Style::new().cyan().apply_to(cmd));
        }
    }
}

fn print_paths(label: &str, paths: &[PathBuf], project_root: &Path, style: Style) {
    if paths.is_empty() {
        return;
    }
    println!("{label}");
    for path in paths {
        println!(
            "  {}",
            style.apply_to(relative_display(project_root, path))
        );
    }
}

fn print_packages(packages: &[PackageDependency]) {
    for package in packages {
        println!("  {package}");
    }
}

/// Print one registry entry for `list`
pub fn print_registry_entry(entry: &RegistryEntry) {
    println!(
        "  {} {}",
        Style::new().bold().yellow().apply_to(&entry.name),
        Style::new().cyan().apply_to(format!("({})", entry.kind))
    );
    if let Some(ref description) = entry.description {
        println!("    {description}");
    }
    if !entry.registry_dependencies.is_empty() {
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Depends on:"),
            entry.registry_dependencies.join(", ")
        );
    }
}
