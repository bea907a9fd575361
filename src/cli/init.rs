use clap::Parser;

/// Arguments for the init command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Answer the setup questions interactively:\n    shadcn-ext init\n\n\
                   Accept the detected defaults:\n    shadcn-ext init --yes\n\n\
                   Pick a style and replace an existing components.json:\n    shadcn-ext init --style new-york --force")]
pub struct InitArgs {
    /// Accept detected defaults without prompting
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Component style
    #[arg(long, short = 's', value_parser = ["default", "new-york"])]
    pub style: Option<String>,

    /// Overwrite an existing components.json
    #[arg(long, short = 'f')]
    pub force: bool,
}
