//! Version command

use crate::error::Result;
use crate::registry::RegistrySource;

pub fn run() -> Result<()> {
    let builtin = RegistrySource::Builtin.load(std::path::Path::new("."), false)?;

    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    println!(
        "  builtin registry: {} ({} components)",
        builtin.name(),
        builtin.len()
    );
    println!("  rust: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!(
        "  profile: {}",
        if cfg!(debug_assertions) { "debug" } else { "release" }
    );

    Ok(())
}
