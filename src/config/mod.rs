//! Configuration file handling for shadcn-ext
//!
//! This module contains data structures for:
//! - `components.json` - Project configuration (style, tailwind paths, aliases)

pub mod project;

pub use project::{CONFIG_FILE, ProjectConfig};
