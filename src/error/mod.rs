//! Error types and handling for shadcn-ext
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`registry`]: Registry index errors
//! - [`deps`]: Dependency errors
//! - [`fs`]: File system errors
//! - [`config`]: Project configuration errors
//! - [`prompt`]: Interactive prompt errors

pub mod config;
pub mod deps;
pub mod fs;
pub mod prompt;
pub mod registry;

#[cfg(test)]
mod tests;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for shadcn-ext operations
#[derive(Error, Diagnostic, Debug)]
pub enum ShadcnError {
    // Registry errors
    #[error("Component '{name}' not found in registry")]
    #[diagnostic(
        code(shadcn_ext::registry::unknown_component),
        help("Run 'shadcn-ext list' to see the available components")
    )]
    UnknownComponent { name: String },

    #[error("Invalid registry: {message}")]
    #[diagnostic(code(shadcn_ext::registry::invalid))]
    RegistryInvalid { message: String },

    #[error("Failed to parse registry '{source_name}': {reason}")]
    #[diagnostic(code(shadcn_ext::registry::parse_failed))]
    RegistryParseFailed { source_name: String, reason: String },

    #[error("Failed to fetch registry from {url}: {reason}")]
    #[diagnostic(
        code(shadcn_ext::registry::fetch_failed),
        help("Check your network connection or pass a local registry with --registry <path>")
    )]
    RegistryFetchFailed { url: String, reason: String },

    #[error("No components selected")]
    #[diagnostic(
        code(shadcn_ext::registry::no_components),
        help("Pass component names, a glob pattern or --all")
    )]
    NoComponentsSelected,

    // Dependency errors
    #[error("Circular dependency detected: {chain}")]
    #[diagnostic(
        code(shadcn_ext::deps::circular),
        help("Remove the circular dependency from the registry index")
    )]
    CyclicDependency { chain: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(shadcn_ext::config::missing),
        help("Run 'shadcn-ext init' to create components.json")
    )]
    ConfigMissing { path: String },

    #[error("Configuration file already exists: {path}")]
    #[diagnostic(
        code(shadcn_ext::config::exists),
        help("Pass --force to overwrite the existing configuration")
    )]
    ConfigExists { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(shadcn_ext::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(shadcn_ext::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(shadcn_ext::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(shadcn_ext::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(shadcn_ext::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Target path escapes the project root: {path}")]
    #[diagnostic(
        code(shadcn_ext::fs::invalid_target),
        help("Registry file targets must be relative paths without '..'")
    )]
    InvalidTargetPath { path: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(shadcn_ext::fs::io_error))]
    IoError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // Prompt errors
    #[error("Prompt failed: {message}")]
    #[diagnostic(code(shadcn_ext::prompt::failed))]
    PromptFailed { message: String },
}

impl From<std::io::Error> for ShadcnError {
    fn from(err: std::io::Error) -> Self {
        ShadcnError::IoError {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<inquire::InquireError> for ShadcnError {
    fn from(err: inquire::InquireError) -> Self {
        ShadcnError::PromptFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ShadcnError>;
