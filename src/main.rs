//! shadcn-ext - shadcn-extension component installer
//!
//! Copies shadcn-extension components, and the registry components they
//! depend on, into a project as source code.

use clap::Parser;
use miette::Diagnostic;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

mod cli;
mod commands;
mod config;
mod error;
mod hash;
mod installer;
mod package_manager;
mod registry;
mod resolver;
#[cfg(test)]
mod temp;
mod ui;

use cli::{Cli, Commands};
use commands::CommandContext;

/// Initialize logging to stderr; `RUST_LOG` overrides the `-v` level
fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info,shadcn_ext=debug",
        2 => "debug,shadcn_ext=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    let ctx = CommandContext {
        cwd: cli.cwd,
        registry: cli.registry,
        quiet: cli.quiet,
    };

    let result = match cli.command {
        Commands::Init(args) => commands::init::run(&ctx, args),
        Commands::Add(args) => commands::add::run(&ctx, args),
        Commands::List(args) => commands::list::run(&ctx, args),
        Commands::HelloWorld => commands::hello_world::run(),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if let Some(help) = e.help() {
            eprintln!("  help: {help}");
        }
        std::process::exit(1);
    }
}
