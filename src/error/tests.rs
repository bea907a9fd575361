//! Error type tests
//!
//! Tests for ShadcnError and its conversions.

#![allow(clippy::unwrap_used)]

use std::path::Path;

use miette::Diagnostic;

use super::ShadcnError;
use super::{config, deps, fs, prompt, registry};

macro_rules! test_error_contains {
    ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
        #[test]
        fn $test_name() {
            let err = $err;
            let error_string = err.to_string();
            $(
                assert!(error_string.contains($contains),
                    "Error message should contain '{}', got: {}",
                    $contains,
                    error_string
                );
            )+
        }
    };
}

#[test]
fn test_error_display() {
    let err = ShadcnError::UnknownComponent {
        name: "multi-select".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Component 'multi-select' not found in registry"
    );
}

#[test]
fn test_error_code() {
    let err = registry::unknown_component("x");
    assert_eq!(
        err.code().map(|c| c.to_string()),
        Some("shadcn_ext::registry::unknown_component".to_string())
    );
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: ShadcnError = io_err.into();
    assert!(matches!(err, ShadcnError::IoError { source: Some(_), .. }));
}

#[test]
fn test_cyclic_chain_closes_loop() {
    let err = deps::cyclic(&["a", "b", "c"]);
    match err {
        ShadcnError::CyclicDependency { chain } => assert_eq!(chain, "a -> b -> c -> a"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_cyclic_self_loop() {
    let err = deps::cyclic(&["a"]);
    assert_eq!(err.to_string(), "Circular dependency detected: a -> a");
}

test_error_contains!(
    test_config_missing,
    config::missing("/tmp/project/components.json"),
    "Configuration file not found",
    "components.json"
);

test_error_contains!(
    test_config_exists,
    config::exists("components.json"),
    "already exists"
);

test_error_contains!(
    test_config_invalid,
    config::invalid("alias 'ui' is empty"),
    "Invalid configuration",
    "alias 'ui'"
);

test_error_contains!(
    test_config_parse_failed,
    config::parse_failed("components.json", "expected value"),
    "Failed to parse configuration file"
);

test_error_contains!(
    test_file_write_failed,
    fs::write_failed(Path::new("/ro/button.tsx"), "permission denied"),
    "Failed to write file",
    "/ro/button.tsx",
    "permission denied"
);

test_error_contains!(
    test_file_read_failed,
    fs::read_failed(Path::new("/registry/button.tsx"), "is a directory"),
    "Failed to read file"
);

test_error_contains!(
    test_file_not_found,
    fs::not_found(Path::new("/missing.tsx")),
    "File not found"
);

test_error_contains!(
    test_invalid_target,
    fs::invalid_target("../outside.tsx"),
    "escapes the project root"
);


test_error_contains!(
    test_registry_invalid,
    registry::invalid("duplicate entry 'button'"),
    "Invalid registry",
    "button"
);

test_error_contains!(
    test_registry_parse_failed,
    registry::parse_failed("index.json", "trailing comma"),
    "index.json",
    "trailing comma"
);

test_error_contains!(
    test_registry_fetch_failed,
    registry::fetch_failed("https://example.invalid/r.json", "timed out"),
    "Failed to fetch registry",
    "timed out"
);

test_error_contains!(
    test_prompt_failed,
    prompt::failed("operation interrupted"),
    "Prompt failed"
);

test_error_contains!(
    test_no_components,
    registry::no_components(),
    "No components selected"
);
