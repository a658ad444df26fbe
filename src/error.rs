//! Error types for DIGIPIN operations.

use crate::types::Bounds;
use thiserror::Error;

/// Errors raised by encoding, decoding, and validation.
///
/// All failure conditions are deterministic validation failures; none are
/// transient, and none are recovered from internally.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DigiPinError {
    /// A coordinate lies outside the addressable region.
    #[error("coordinates ({latitude}, {longitude}) out of supported bounds {bounds}")]
    OutOfBounds {
        latitude: f64,
        longitude: f64,
        bounds: Bounds,
    },

    /// The input does not normalize to a 10-symbol pin.
    #[error("invalid DIGIPIN format: {0:?}")]
    PinFormat(String),

    /// A symbol is not part of the DIGIPIN alphabet.
    #[error("invalid character '{character}' in DIGIPIN{}", suggestion_suffix(.suggestion))]
    InvalidCharacter {
        character: char,
        /// Best-effort correction from the confusables table, advisory only.
        suggestion: Option<char>,
    },
}

fn suggestion_suffix(suggestion: &Option<char>) -> String {
    match suggestion {
        Some(s) => format!(", did you mean '{}'?", s),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, DigiPinError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BOUNDS;

    #[test]
    fn test_invalid_character_message_with_suggestion() {
        let err = DigiPinError::InvalidCharacter {
            character: '1',
            suggestion: Some('J'),
        };
        let message = err.to_string();
        assert!(message.contains("invalid character '1'"));
        assert!(message.contains("did you mean 'J'?"));
    }

    #[test]
    fn test_invalid_character_message_without_suggestion() {
        let err = DigiPinError::InvalidCharacter {
            character: 'X',
            suggestion: None,
        };
        let message = err.to_string();
        assert!(message.contains("invalid character 'X'"));
        assert!(!message.contains("did you mean"));
    }

    #[test]
    fn test_out_of_bounds_names_the_region() {
        let err = DigiPinError::OutOfBounds {
            latitude: 1.0,
            longitude: 77.0,
            bounds: BOUNDS,
        };
        let message = err.to_string();
        assert!(message.contains("(1, 77)"));
        assert!(message.contains("2.5"));
        assert!(message.contains("99.5"));
    }
}
