//! Registry sources
//!
//! The registry index is loaded from one of:
//! - the built-in shadcn-extension registry compiled into the binary
//! - a local `.json`, `.yaml` or `.yml` file
//! - an `http://` or `https://` URL serving a JSON or YAML document

use std::path::{Path, PathBuf};

use super::RegistryIndex;
use super::document::RegistryDocument;
use super::fetch;
use crate::error::{self, Result};

/// Built-in registry document
const BUILTIN_REGISTRY: &str = include_str!("../../registry/index.yaml");

/// Where to load the registry index from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrySource {
    Builtin,
    File(PathBuf),
    Remote(String),
}

impl RegistrySource {
    /// Parse a `--registry` argument; `None` selects the built-in registry
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("" | "builtin") => RegistrySource::Builtin,
            Some(v) if v.starts_with("http://") || v.starts_with("https://") => {
                RegistrySource::Remote(v.to_string())
            }
            Some(v) => RegistrySource::File(PathBuf::from(v)),
        }
    }

    /// Load and validate the index
    ///
    /// Relative file paths are resolved against `cwd`.
    pub fn load(&self, cwd: &Path, show_progress: bool) -> Result<RegistryIndex> {
        let index = match self {
            RegistrySource::Builtin => {
                RegistryDocument::from_yaml(BUILTIN_REGISTRY, "builtin")?
                    .into_index(None, "builtin")?
            }
            RegistrySource::File(path) => load_file(&cwd.join(path))?,
            RegistrySource::Remote(url) => {
                let body = fetch::fetch_text(url, show_progress)?;
                parse_document(&body, url)?.into_index(None, url)?
            }
        };

        index.validate()?;
        tracing::debug!(
            registry = index.name(),
            entries = index.len(),
            "loaded registry index"
        );
        Ok(index)
    }
}

fn load_file(path: &Path) -> Result<RegistryIndex> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            error::fs::not_found(path)
        } else {
            error::fs::read_failed(path, e)
        }
    })?;

    let source_name = path.display().to_string();
    let doc = match path.extension().and_then(|e| e.to_str()) {
        Some("yaml" | "yml") => RegistryDocument::from_yaml(&content, &source_name)?,
        Some("json") => RegistryDocument::from_json(&content, &source_name)?,
        _ => parse_document(&content, &source_name)?,
    };

    doc.into_index(path.parent(), &source_name)
}

/// Parse a document of unknown format: JSON first, then YAML
fn parse_document(content: &str, source_name: &str) -> Result<RegistryDocument> {
    if content.trim_start().starts_with('{') {
        RegistryDocument::from_json(content, source_name)
    } else {
        RegistryDocument::from_yaml(content, source_name)
    }
}
