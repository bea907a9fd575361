//! Interactive prompt errors

use super::ShadcnError;

/// Creates a prompt failed error
pub fn failed(message: impl Into<String>) -> ShadcnError {
    ShadcnError::PromptFailed {
        message: message.into(),
    }
}
