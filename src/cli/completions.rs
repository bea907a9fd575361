use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    shadcn-ext completions --shell bash > ~/.bash_completion.d/shadcn-ext\n\n\
                  Generate zsh completions:\n    shadcn-ext completions --shell zsh > ~/.zfunc/_shadcn-ext\n\n\
                  Generate fish completions:\n    shadcn-ext completions --shell fish > ~/.config/fish/completions/shadcn-ext.fish")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(long, value_enum)]
    pub shell: Shell,
}
