//! Configuration errors

use super::ShadcnError;

/// Creates a config missing error
pub fn missing(path: impl Into<String>) -> ShadcnError {
    ShadcnError::ConfigMissing { path: path.into() }
}

/// Creates a config already exists error
pub fn exists(path: impl Into<String>) -> ShadcnError {
    ShadcnError::ConfigExists { path: path.into() }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> ShadcnError {
    ShadcnError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> ShadcnError {
    ShadcnError::ConfigInvalid {
        message: message.into(),
    }
}
