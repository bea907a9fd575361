//! Registry entry data structures
//!
//! A registry entry is one installable unit: the source files of a component
//! plus the npm packages and other registry entries it needs.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{self, Result, ShadcnError};

/// Kind of a registry entry, selecting where its files land in a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Base shadcn/ui component (`components/ui`)
    #[serde(alias = "components:ui", alias = "registry:ui")]
    Ui,

    /// shadcn-extension component (`components/extension`)
    #[default]
    #[serde(alias = "components:extension", alias = "registry:extension")]
    Extension,

    /// Shared library code (`lib`)
    #[serde(alias = "components:lib", alias = "registry:lib")]
    Lib,

    /// React hook (`hooks`)
    #[serde(alias = "components:hook", alias = "registry:hook")]
    Hook,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Ui => "ui",
            EntryKind::Extension => "extension",
            EntryKind::Lib => "lib",
            EntryKind::Hook => "hook",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the text of a registry file comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Content embedded in the index itself
    Inline(String),
    /// Content read from a file next to the index
    File(PathBuf),
}

impl ContentSource {
    /// Load the file content
    pub fn load(&self) -> Result<String> {
        match self {
            ContentSource::Inline(content) => Ok(content.clone()),
            ContentSource::File(path) => {
                std::fs::read_to_string(path).map_err(|e| error::fs::read_failed(path, e))
            }
        }
    }
}

/// One file of a registry entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryFile {
    /// Path of the file inside the registry (e.g. "extension/multi-select.tsx")
    pub path: String,

    /// Target path relative to the entry's base directory
    pub target: PathBuf,

    /// Content source
    pub content: ContentSource,
}

#[cfg(test)]
impl RegistryFile {
    /// Create a file with inline content, targeting the registry path's file name
    pub fn inline(path: impl Into<String>, content: impl Into<String>) -> Self {
        let path = path.into();
        let target = default_target(&path);
        Self {
            path,
            target,
            content: ContentSource::Inline(content.into()),
        }
    }
}

/// Default target of a registry path: its file name
pub fn default_target(path: &str) -> PathBuf {
    Path::new(path)
        .file_name()
        .map_or_else(|| PathBuf::from(path), PathBuf::from)
}

/// An npm package required by a registry entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub struct PackageDependency {
    /// Package name (e.g. "@radix-ui/react-popover")
    pub name: String,

    /// Version range (e.g. "^1.0.0"); "*" when unspecified
    pub version_range: String,
}

impl PackageDependency {
    pub fn new(name: impl Into<String>, version_range: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version_range: version_range.into(),
        }
    }

    /// Whether the range accepts any version
    pub fn is_unversioned(&self) -> bool {
        matches!(self.version_range.trim(), "" | "*" | "latest")
    }
}

impl FromStr for PackageDependency {
    type Err = ShadcnError;

    /// Parse `name`, `name@range`, `@scope/name` or `@scope/name@range`
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        // Skip the scope marker so "@scope/pkg" is not split at index 0
        let search_from = usize::from(s.starts_with('@'));
        let split = s[search_from..].find('@').map(|i| i + search_from);

        let (name, range) = match split {
            Some(idx) => (&s[..idx], s[idx + 1..].trim()),
            None => (s, ""),
        };

        let bad_scope = name.starts_with('@') && !name.contains('/');
        if name.is_empty() || bad_scope || name.ends_with('/') {
            return Err(error::registry::invalid(format!(
                "invalid package dependency '{s}'"
            )));
        }

        let range = if range.is_empty() { "*" } else { range };
        Ok(Self::new(name, range))
    }
}

impl TryFrom<String> for PackageDependency {
    type Error = ShadcnError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for PackageDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unversioned() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}@{}", self.name, self.version_range)
        }
    }
}

/// One installable unit of the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    /// Unique entry name
    pub name: String,

    pub kind: EntryKind,

    pub description: Option<String>,

    /// Files in installation order
    pub files: Vec<RegistryFile>,

    /// Names of other registry entries this entry needs
    pub registry_dependencies: Vec<String>,

    /// npm packages needed at runtime
    pub package_dependencies: Vec<PackageDependency>,

    /// npm packages needed at development time only
    pub dev_dependencies: Vec<PackageDependency>,
}

#[cfg(test)]
impl RegistryEntry {
    /// Create an entry with no files or dependencies
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
            description: None,
            files: Vec::new(),
            registry_dependencies: Vec::new(),
            package_dependencies: Vec::new(),
            dev_dependencies: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_file(mut self, file: RegistryFile) -> Self {
        self.files.push(file);
        self
    }

    #[must_use]
    pub fn with_registry_dependency(mut self, name: impl Into<String>) -> Self {
        self.registry_dependencies.push(name.into());
        self
    }

    #[must_use]
    pub fn with_package(mut self, dependency: PackageDependency) -> Self {
        self.package_dependencies.push(dependency);
        self
    }
}
