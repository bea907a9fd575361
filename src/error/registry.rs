//! Registry index errors

use super::ShadcnError;

/// Creates an unknown component error
pub fn unknown_component(name: impl Into<String>) -> ShadcnError {
    ShadcnError::UnknownComponent { name: name.into() }
}

/// Creates an invalid registry error
pub fn invalid(message: impl Into<String>) -> ShadcnError {
    ShadcnError::RegistryInvalid {
        message: message.into(),
    }
}

/// Creates a registry parse failed error
pub fn parse_failed(source_name: impl Into<String>, reason: impl ToString) -> ShadcnError {
    ShadcnError::RegistryParseFailed {
        source_name: source_name.into(),
        reason: reason.to_string(),
    }
}

/// Creates a registry fetch failed error
pub fn fetch_failed(url: impl Into<String>, reason: impl ToString) -> ShadcnError {
    ShadcnError::RegistryFetchFailed {
        url: url.into(),
        reason: reason.to_string(),
    }
}

/// Creates a no components selected error
pub fn no_components() -> ShadcnError {
    ShadcnError::NoComponentsSelected
}
