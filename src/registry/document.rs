//! Serialized registry index format
//!
//! The same document shape is accepted as JSON and YAML:
//!
//! ```yaml
//! name: shadcn-extension
//! items:
//!   - name: multi-select
//!     type: extension
//!     dependencies: ["cmdk@^1.0.0"]
//!     registryDependencies: [badge, command, popover]
//!     files:
//!       - path: extension/multi-select.tsx
//!         content: |
//!           ...
//! ```
//!
//! A file without `content` is read from `path` relative to the directory
//! holding the index, which is only available for local registries.

use std::path::Path;

use serde::Deserialize;

use super::RegistryIndex;
use super::entry::{
    ContentSource, EntryKind, PackageDependency, RegistryEntry, RegistryFile, default_target,
};
use crate::error::{self, Result};

/// Top-level registry document
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryDocument {
    /// Registry name, used in listings
    #[serde(default)]
    pub name: Option<String>,

    pub items: Vec<ItemDocument>,
}

/// A registry item as written in the document
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDocument {
    pub name: String,

    #[serde(rename = "type", default)]
    pub kind: EntryKind,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub dependencies: Vec<PackageDependency>,

    #[serde(default)]
    pub dev_dependencies: Vec<PackageDependency>,

    #[serde(default)]
    pub registry_dependencies: Vec<String>,

    #[serde(default)]
    pub files: Vec<FileDocument>,
}

/// A registry file as written in the document
#[derive(Debug, Clone, Deserialize)]
pub struct FileDocument {
    pub path: String,

    #[serde(default)]
    pub target: Option<String>,

    #[serde(default)]
    pub content: Option<String>,
}

impl RegistryDocument {
    pub fn from_json(json: &str, source_name: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| error::registry::parse_failed(source_name, e))
    }

    pub fn from_yaml(yaml: &str, source_name: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| error::registry::parse_failed(source_name, e))
    }

    /// Convert into an index
    ///
    /// `base_dir` is the directory file paths are relative to; `None` means
    /// every file must carry inline content.
    pub fn into_index(self, base_dir: Option<&Path>, source_name: &str) -> Result<RegistryIndex> {
        let entries = self
            .items
            .into_iter()
            .map(|item| item.into_entry(base_dir, source_name))
            .collect::<Result<Vec<_>>>()?;

        let name = self.name.unwrap_or_else(|| source_name.to_string());
        RegistryIndex::new(name, entries)
    }
}

impl ItemDocument {
    fn into_entry(self, base_dir: Option<&Path>, source_name: &str) -> Result<RegistryEntry> {
        let files = self
            .files
            .into_iter()
            .map(|file| file.into_file(&self.name, base_dir, source_name))
            .collect::<Result<Vec<_>>>()?;

        Ok(RegistryEntry {
            name: self.name,
            kind: self.kind,
            description: self.description,
            files,
            registry_dependencies: self.registry_dependencies,
            package_dependencies: self.dependencies,
            dev_dependencies: self.dev_dependencies,
        })
    }
}

impl FileDocument {
    fn into_file(
        self,
        entry_name: &str,
        base_dir: Option<&Path>,
        source_name: &str,
    ) -> Result<RegistryFile> {
        let content = match (self.content, base_dir) {
            (Some(content), _) => ContentSource::Inline(content),
            (None, Some(dir)) => ContentSource::File(dir.join(&self.path)),
            (None, None) => {
                return Err(error::registry::invalid(format!(
                    "file '{}' of '{}' in {} has no inline content",
                    self.path, entry_name, source_name
                )));
            }
        };

        let target = self
            .target
            .map_or_else(|| default_target(&self.path), Into::into);

        Ok(RegistryFile {
            path: self.path,
            target,
            content,
        })
    }
}
