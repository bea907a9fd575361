//! Package manager detection for a consumer project
//!
//! Only used to print the command that installs the npm packages the copied
//! components need; nothing is ever executed.

use std::fmt;
use std::path::Path;

use crate::registry::PackageDependency;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

/// Lockfiles, checked in order
const LOCKFILES: &[(&str, PackageManager)] = &[
    ("pnpm-lock.yaml", PackageManager::Pnpm),
    ("yarn.lock", PackageManager::Yarn),
    ("bun.lockb", PackageManager::Bun),
    ("bun.lock", PackageManager::Bun),
];

impl PackageManager {
    /// Detect the package manager from the lockfile present in `root`
    pub fn detect(root: &Path) -> Self {
        LOCKFILES
            .iter()
            .find(|(file, _)| root.join(file).is_file())
            .map_or(PackageManager::Npm, |(_, pm)| *pm)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
        }
    }

    fn add_verb(self) -> &'static str {
        match self {
            PackageManager::Npm => "install",
            _ => "add",
        }
    }

    fn dev_flag(self) -> &'static str {
        match self {
            PackageManager::Bun => "-d",
            _ => "-D",
        }
    }

    /// Command installing runtime packages, `None` when there are none
    pub fn install_command(self, packages: &[PackageDependency]) -> Option<String> {
        self.command(packages, None)
    }

    /// Command installing development packages, `None` when there are none
    pub fn install_dev_command(self, packages: &[PackageDependency]) -> Option<String> {
        self.command(packages, Some(self.dev_flag()))
    }

    fn command(self, packages: &[PackageDependency], flag: Option<&str>) -> Option<String> {
        if packages.is_empty() {
            return None;
        }

        let mut parts = vec![self.as_str().to_string(), self.add_verb().to_string()];
        if let Some(flag) = flag {
            parts.push(flag.to_string());
        }
        parts.extend(packages.iter().map(ToString::to_string));
        Some(parts.join(" "))
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
