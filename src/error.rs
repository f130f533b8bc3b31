use thiserror::Error;

use crate::i18n::Strings;

/// A required input was missing or malformed. Raised before any request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title is required")]
    MissingTitle,

    #[error("technical effect is required")]
    MissingEffect,

    #[error("description text is required")]
    MissingText,

    #[error("formula is required")]
    MissingFormula,

    #[error("variants must be a positive integer, got '{0}'")]
    InvalidVariants(String),

    #[error("max_keywords must be a non-negative integer, got '{0}'")]
    InvalidMaxKeywords(String),
}

/// The single HTTP round trip failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("server responded with status {0}")]
    Status(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error("could not encode request: {0}")]
    Encode(String),

    #[error("could not decode response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Request(#[from] RequestError),
}

impl DispatchError {
    /// User-facing message in the language of `s`.
    pub fn localized(&self, s: &Strings) -> String {
        match self {
            DispatchError::Validation(err) => match err {
                ValidationError::MissingTitle => s.error_missing_title.to_string(),
                ValidationError::MissingEffect => s.error_missing_effect.to_string(),
                ValidationError::MissingText => s.error_missing_text.to_string(),
                ValidationError::MissingFormula => s.error_missing_formula.to_string(),
                ValidationError::InvalidVariants(raw) => {
                    format!("{}: '{}'", s.error_invalid_variants, raw)
                }
                ValidationError::InvalidMaxKeywords(raw) => {
                    format!("{}: '{}'", s.error_invalid_max_keywords, raw)
                }
            },
            DispatchError::Request(err) => match err {
                RequestError::Status(code) => format!("{} {}", s.error_status, code),
                RequestError::Network(detail) => format!("{}: {}", s.error_network, detail),
                RequestError::Encode(detail) => format!("{}: {}", s.error_encode, detail),
                RequestError::Decode(detail) => format!("{}: {}", s.error_decode, detail),
            },
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, DispatchError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{strings, Language};

    #[test]
    fn test_status_message_contains_code_in_both_languages() {
        let err = DispatchError::from(RequestError::Status(503));
        for lang in Language::ALL {
            let msg = err.localized(strings(lang));
            assert!(msg.contains("503"), "Message '{}' should carry the status", msg);
        }
    }

    #[test]
    fn test_validation_message_follows_language() {
        let err = DispatchError::from(ValidationError::MissingText);
        assert_eq!(err.localized(strings(Language::En)), "Please enter a description.");
        assert_eq!(err.localized(strings(Language::Ru)), "Пожалуйста, введите описание.");
        assert!(err.is_validation());
    }
}
