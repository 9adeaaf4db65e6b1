//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unsupported language tag: {0}")]
    UnsupportedLanguage(String),

    #[error("Unknown {field} value: {value}")]
    UnknownFilterValue { field: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = DomainError::UnsupportedLanguage("xx-XX".to_string());
        assert_eq!(error.to_string(), "Unsupported language tag: xx-XX");

        let error = DomainError::UnknownFilterValue {
            field: "branch",
            value: "Astrology".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown branch value: Astrology");
    }
}
