//! Command implementations for shadcn-ext CLI

pub mod add;
pub mod completions;
pub mod hello_world;
pub mod helpers;
pub mod init;
pub mod list;
pub mod version;

use std::path::PathBuf;

/// Global options shared by every command
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    /// `--cwd`
    pub cwd: Option<PathBuf>,

    /// `--registry` or `SHADCN_EXT_REGISTRY`
    pub registry: Option<String>,

    pub quiet: bool,
}
