//! Outcome of applying an install plan

use std::path::PathBuf;

use crate::error::ShadcnError;
use crate::registry::PackageDependency;

/// What an install run did
#[derive(Debug, Default)]
pub struct InstallReport {
    /// Files created or replaced, in write order
    pub files_written: Vec<PathBuf>,

    /// Existing files left untouched
    pub files_skipped: Vec<PathBuf>,

    pub package_dependencies_to_install: Vec<PackageDependency>,

    pub dev_dependencies_to_install: Vec<PackageDependency>,

    /// First failure; nothing after it was attempted
    pub error: Option<ShadcnError>,

    /// Nothing was written to disk
    pub dry_run: bool,
}

impl InstallReport {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Whether any package needs installing afterwards
    pub fn has_packages(&self) -> bool {
        !self.package_dependencies_to_install.is_empty()
            || !self.dev_dependencies_to_install.is_empty()
    }
}
