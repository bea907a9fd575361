use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List all components:\n    shadcn-ext list\n\n\
                  Show the files of each component:\n    shadcn-ext list --detailed\n\n\
                  List a local registry:\n    shadcn-ext list --registry ./registry.yaml")]
pub struct ListArgs {
    /// Show the files and packages of each component
    #[arg(long)]
    pub detailed: bool,
}
