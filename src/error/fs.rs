//! File system errors

use std::path::Path;

use super::ShadcnError;

/// Creates a file not found error
pub fn not_found(path: &Path) -> ShadcnError {
    ShadcnError::FileNotFound {
        path: path.display().to_string(),
    }
}

/// Creates a file read failed error
pub fn read_failed(path: &Path, reason: impl ToString) -> ShadcnError {
    ShadcnError::FileReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: &Path, reason: impl ToString) -> ShadcnError {
    ShadcnError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an invalid target path error
pub fn invalid_target(path: impl Into<String>) -> ShadcnError {
    ShadcnError::InvalidTargetPath { path: path.into() }
}
