//! Command helper utilities

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use crate::error::{self, Result};
use crate::registry::{RegistryIndex, RegistrySource};

use super::CommandContext;

/// Resolve the project root from the optional `--cwd` argument
///
/// If a directory is provided, use it. Otherwise, resolve to the current
/// directory. The result is canonical and must exist.
pub fn resolve_project_root(cwd: Option<&Path>) -> Result<PathBuf> {
    let path = match cwd {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().map_err(|e| error::ShadcnError::IoError {
            message: format!("Failed to get current directory: {e}"),
            source: Some(Box::new(e)),
        })?,
    };

    if !path.is_dir() {
        return Err(error::fs::not_found(&path));
    }

    dunce::canonicalize(&path).map_err(|e| error::fs::read_failed(&path, e))
}

/// Load the registry selected by `--registry` or `SHADCN_EXT_REGISTRY`
///
/// A relative registry path is taken from the directory the command was
/// started in, not from `--cwd`.
pub fn load_registry(ctx: &CommandContext, project_root: &Path) -> Result<RegistryIndex> {
    let source = RegistrySource::parse(ctx.registry.as_deref());
    tracing::debug!(?source, "loading registry");

    let base = std::env::current_dir().unwrap_or_else(|_| project_root.to_path_buf());
    source.load(&base, !ctx.quiet)
}

/// Whether prompts can be shown
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal()
}
