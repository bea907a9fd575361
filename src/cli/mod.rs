//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - init: Init command arguments
//! - add: Add command arguments
//! - list: List command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

pub mod add;
pub mod completions;
pub mod init;
pub mod list;

pub use add::AddArgs;
pub use completions::CompletionsArgs;
pub use init::InitArgs;
pub use list::ListArgs;

/// shadcn-ext - add shadcn-extension components to your project
#[derive(Parser, Debug)]
#[command(
    name = "shadcn-ext",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Add shadcn-extension components and their dependencies to your project",
    long_about = "shadcn-ext copies shadcn-extension components into your project as source code. \
                  It resolves the other registry components they need, writes their files into \
                  the directories configured in components.json, and tells you which npm \
                  packages to install.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  shadcn-ext init                        \x1b[90m# Create components.json\x1b[0m\n   \
                  shadcn-ext add multi-select            \x1b[90m# Add a component and its dependencies\x1b[0m\n   \
                  shadcn-ext add 'date*' --overwrite     \x1b[90m# Add every match, replacing existing files\x1b[0m\n   \
                  shadcn-ext add --all --dry-run         \x1b[90m# Show what adding everything would do\x1b[0m\n   \
                  shadcn-ext list                        \x1b[90m# List available components\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project directory (defaults to current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Registry index: "builtin", a .json/.yaml file or an http(s) URL
    #[arg(
        long,
        short = 'r',
        global = true,
        env = "SHADCN_EXT_REGISTRY",
        value_name = "PATH|URL"
    )]
    pub registry: Option<String>,

    /// Enable verbose output (-v debug, -vv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only print errors
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create components.json and the cn utility
    Init(InitArgs),

    /// Add components to your project
    Add(AddArgs),

    /// List components available in the registry
    List(ListArgs),

    /// Print a greeting
    HelloWorld,

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
