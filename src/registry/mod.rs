//! Component registry index
//!
//! This module handles:
//! - Registry entry data structures (files, package and registry dependencies)
//! - Parsing registry documents from JSON or YAML
//! - Loading the index from the built-in registry, a local file or a URL
//! - Validating the index (duplicates, dangling references, missing files)
//!
//! The index is loaded once per process and is immutable afterwards.

pub mod document;
pub mod entry;
pub mod fetch;
pub mod source;

use std::collections::{BTreeSet, HashMap};

pub use entry::{ContentSource, EntryKind, PackageDependency, RegistryEntry, RegistryFile};
pub use source::RegistrySource;

use crate::error::{self, Result};

/// Immutable catalog of registry entries keyed by name
#[derive(Debug, Clone)]
pub struct RegistryIndex {
    name: String,
    entries: Vec<RegistryEntry>,
    by_name: HashMap<String, usize>,
}

impl RegistryIndex {
    /// Build an index, rejecting duplicate entry names
    pub fn new(name: impl Into<String>, entries: Vec<RegistryEntry>) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(error::registry::invalid("entry with an empty name"));
            }
            if by_name.insert(entry.name.clone(), idx).is_some() {
                return Err(error::registry::invalid(format!(
                    "duplicate entry '{}'",
                    entry.name
                )));
            }
        }

        Ok(Self {
            name: name.into(),
            entries,
            by_name,
        })
    }

    /// Registry name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up an entry by name
    pub fn lookup(&self, name: &str) -> Result<&RegistryEntry> {
        self.get(name)
            .ok_or_else(|| error::registry::unknown_component(name))
    }

    pub fn get(&self, name: &str) -> Option<&RegistryEntry> {
        self.by_name.get(name).map(|&idx| &self.entries[idx])
    }

    /// All entry names, sorted
    pub fn all_names(&self) -> BTreeSet<String> {
        self.by_name.keys().cloned().collect()
    }

    /// Entries in document order
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check the index invariants that can be verified without resolving
    ///
    /// Cycles are left to the resolver, which reports the offending path.
    pub fn validate(&self) -> Result<()> {
        for entry in &self.entries {
            if entry.files.is_empty() {
                return Err(error::registry::invalid(format!(
                    "entry '{}' has no files",
                    entry.name
                )));
            }

            for dep in &entry.registry_dependencies {
                if !self.by_name.contains_key(dep) {
                    return Err(error::registry::invalid(format!(
                        "entry '{}' depends on unknown entry '{}'",
                        entry.name, dep
                    )));
                }
            }

            for file in &entry.files {
                if let ContentSource::File(path) = &file.content {
                    if !path.is_file() {
                        return Err(error::registry::invalid(format!(
                            "file '{}' of entry '{}' does not exist at {}",
                            file.path,
                            entry.name,
                            path.display()
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}
