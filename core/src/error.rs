//! Error types shared by the romanization crates.

use thiserror::Error;

/// Errors surfaced by scheme lookup, scheme construction and configuration.
///
/// Transliterating a string never fails per character: characters without a
/// mapping pass through unchanged, so there is no "untransliterable" variant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A scheme identifier did not match any registered scheme.
    #[error("unknown transliteration scheme: {0}")]
    SchemeNotFound(String),

    /// The value handed to the engine could not be read as text.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A rule table was rejected while building a scheme.
    #[error("invalid scheme {scheme}: {reason}")]
    InvalidScheme { scheme: String, reason: String },

    /// Configuration could not be read, parsed or written.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        let err = Error::SchemeNotFound("Klingon".into());
        assert_eq!(err.to_string(), "unknown transliteration scheme: Klingon");

        let err = Error::InvalidScheme {
            scheme: "Broken".into(),
            reason: "empty key".into(),
        };
        assert_eq!(err.to_string(), "invalid scheme Broken: empty key");
    }
}
