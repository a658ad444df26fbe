//! Pin normalization, validation, and presentation formatting.
//!
//! The canonical internal form is the compact, uppercase 10-symbol sequence;
//! it is the only representation handed to the codec or placed in the decode
//! cache. Hyphenation is applied on output only.

use crate::codec::{GRID_INDEX, PIN_LENGTH};
use crate::error::{DigiPinError, Result};
use crate::types::PinFormat;

/// Normalize a raw pin to canonical compact form.
///
/// Trims surrounding whitespace, strips hyphens, and uppercases. Fails with
/// [`DigiPinError::PinFormat`] when the result is not exactly 10 symbols, or
/// with [`DigiPinError::InvalidCharacter`] at the first symbol outside the
/// alphabet, scanning left to right.
pub fn normalize(pin: &str) -> Result<String> {
    let compact: String = pin
        .trim()
        .chars()
        .filter(|&c| c != '-')
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if compact.chars().count() != PIN_LENGTH {
        return Err(DigiPinError::PinFormat(pin.to_string()));
    }

    if let Some(character) = compact.chars().find(|c| !GRID_INDEX.contains_key(c)) {
        return Err(DigiPinError::InvalidCharacter {
            character,
            suggestion: suggestion_for(character),
        });
    }

    Ok(compact)
}

/// Validate a raw pin without keeping the normalized form.
pub fn validate(pin: &str) -> Result<()> {
    normalize(pin).map(|_| ())
}

/// Render a compact pin in the requested presentation form.
pub(crate) fn format_pin(compact: &str, format: PinFormat) -> String {
    match format {
        PinFormat::Compact => compact.to_string(),
        PinFormat::Hyphenated => {
            format!("{}-{}-{}", &compact[..3], &compact[3..6], &compact[6..])
        }
    }
}

/// Best-effort correction for symbols commonly confused with alphabet
/// members. Advisory only; absence means no suggestion.
pub(crate) fn suggestion_for(character: char) -> Option<char> {
    match character.to_ascii_uppercase() {
        '0' => Some('C'),
        '1' => Some('J'),
        'O' => Some('0'),
        'I' => Some('J'),
        'Q' => Some('9'),
        'Z' => Some('2'),
        'S' => Some('5'),
        'B' => Some('8'),
        'G' => Some('6'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_hyphenated() {
        assert_eq!(normalize("K4P-9C6-LMPT").unwrap(), "K4P9C6LMPT");
    }

    #[test]
    fn test_normalize_compact() {
        assert_eq!(normalize("K4P9C6LMPT").unwrap(), "K4P9C6LMPT");
    }

    #[test]
    fn test_normalize_lowercase_and_whitespace() {
        assert_eq!(normalize("  k4p-9c6-lmpt\n").unwrap(), "K4P9C6LMPT");
    }

    #[test]
    fn test_normalize_rejects_short_input() {
        assert!(matches!(
            normalize("K4P-9C6"),
            Err(DigiPinError::PinFormat(original)) if original == "K4P-9C6"
        ));
    }

    #[test]
    fn test_normalize_rejects_long_input() {
        assert!(matches!(
            normalize("K4P9C6LMPTT"),
            Err(DigiPinError::PinFormat(_))
        ));
    }

    #[test]
    fn test_normalize_rejects_empty() {
        assert!(matches!(normalize(""), Err(DigiPinError::PinFormat(_))));
    }

    #[test]
    fn test_normalize_reports_first_invalid_character() {
        assert!(matches!(
            normalize("K4X-9Y6-LMPT"),
            Err(DigiPinError::InvalidCharacter {
                character: 'X',
                suggestion: None,
            })
        ));
    }

    #[test]
    fn test_suggestions() {
        assert_eq!(suggestion_for('1'), Some('J'));
        assert_eq!(suggestion_for('O'), Some('0'));
        assert_eq!(suggestion_for('o'), Some('0'));
        assert_eq!(suggestion_for('G'), Some('6'));
        assert_eq!(suggestion_for('X'), None);
    }

    #[test]
    fn test_validate() {
        assert!(validate("K4P-9C6-LMPT").is_ok());
        assert!(validate("K4P9C6LMPT").is_ok());
        assert!(validate("K4P-9C6").is_err());
        assert!(validate("K4P-9C6-LMP1").is_err());
    }

    #[test]
    fn test_format_pin() {
        assert_eq!(
            format_pin("39J438TJC7", PinFormat::Hyphenated),
            "39J-438-TJC7"
        );
        assert_eq!(format_pin("39J438TJC7", PinFormat::Compact), "39J438TJC7");
    }
}
