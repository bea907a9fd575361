use clap::Parser;
use std::path::PathBuf;

/// Arguments for the add command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Add a component and everything it depends on:\n    shadcn-ext add multi-select\n\n\
                   Add several components, glob patterns allowed:\n    shadcn-ext add button 'date*'\n\n\
                   Replace files that already exist:\n    shadcn-ext add tree-view --overwrite\n\n\
                   Install into a custom directory:\n    shadcn-ext add otp-input --path src/widgets\n\n\
                   Preview without writing:\n    shadcn-ext add --all --dry-run")]
pub struct AddArgs {
    /// Components to add (names or glob patterns such as "date*")
    #[arg(value_name = "COMPONENT")]
    pub components: Vec<String>,

    /// Add every component in the registry
    #[arg(long, short = 'a', conflicts_with = "components")]
    pub all: bool,

    /// Overwrite existing files without asking
    #[arg(long, short = 'o')]
    pub overwrite: bool,

    /// Skip prompts; existing files are kept unless --overwrite is given
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Install every file under this directory instead of the configured aliases
    #[arg(long, short = 'p', value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Show what would be written without writing anything
    #[arg(long)]
    pub dry_run: bool,
}
