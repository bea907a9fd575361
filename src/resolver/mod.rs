//! Dependency resolution for registry components
//!
//! This module handles:
//! - Expanding requested names (globs) against the registry
//! - Computing the transitive closure of registry dependencies
//! - Topological ordering (dependencies before dependents)
//! - Circular dependency detection
//! - Merging npm package dependencies across the closure
//!
//! Resolution is pure: it reads the index and never touches the filesystem.

pub mod names;
pub mod packages;
pub mod sort;

use crate::error::Result;
use crate::registry::{PackageDependency, RegistryEntry, RegistryIndex};

pub use names::expand_names;
pub use sort::topological_sort;

/// Output of resolving a set of requested components
#[derive(Debug, Clone)]
pub struct ResolutionResult<'a> {
    /// Entries to install, dependencies before dependents, each exactly once
    pub install_order: Vec<&'a RegistryEntry>,

    /// Merged runtime package dependencies, sorted by name
    pub package_dependencies: Vec<PackageDependency>,

    /// Merged development package dependencies, sorted by name
    pub dev_dependencies: Vec<PackageDependency>,
}

impl ResolutionResult<'_> {
    /// Names in install order
    pub fn names(&self) -> Vec<&str> {
        self.install_order.iter().map(|e| e.name.as_str()).collect()
    }

    /// Total number of files across the closure
    pub fn file_count(&self) -> usize {
        self.install_order.iter().map(|e| e.files.len()).sum()
    }
}

/// Resolve requested names into a dependency-ordered install set
///
/// # Errors
///
/// - `UnknownComponent` if a requested name or a registry dependency is missing
/// - `CyclicDependency` if a cycle is reachable from a requested name
pub fn resolve<'a, S: AsRef<str>>(
    names: &[S],
    index: &'a RegistryIndex,
) -> Result<ResolutionResult<'a>> {
    // Fail on unknown roots before walking anything
    for name in names {
        index.lookup(name.as_ref())?;
    }

    let install_order = topological_sort(index, names)?;

    let package_dependencies = packages::merge_dependencies(
        install_order
            .iter()
            .flat_map(|e| e.package_dependencies.iter()),
    );
    let dev_dependencies =
        packages::merge_dependencies(install_order.iter().flat_map(|e| e.dev_dependencies.iter()));

    tracing::debug!(
        requested = names.len(),
        resolved = install_order.len(),
        packages = package_dependencies.len(),
        "resolved components"
    );

    Ok(ResolutionResult {
        install_order,
        package_dependencies,
        dev_dependencies,
    })
}
