//! Element-wise batch application of encode and decode.

use crate::codec;
use crate::error::Result;
use crate::types::{Coordinate, DecodeOptions, EncodeOptions};

/// Encode a sequence of `(latitude, longitude)` pairs in order.
///
/// The first failing element fails the whole batch; there is no
/// partial-success aggregation.
pub fn batch_encode(
    coordinates: &[(f64, f64)],
    options: Option<&EncodeOptions>,
) -> Result<Vec<String>> {
    coordinates
        .iter()
        .map(|&(latitude, longitude)| codec::encode(latitude, longitude, options))
        .collect()
}

/// Decode a sequence of pins in order, first failure propagating.
pub fn batch_decode<S: AsRef<str>>(
    pins: &[S],
    options: Option<&DecodeOptions>,
) -> Result<Vec<Coordinate>> {
    pins.iter()
        .map(|pin| codec::decode(pin.as_ref(), options))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DigiPinError;

    #[test]
    fn test_batch_encode() {
        let opts = EncodeOptions::default().without_cache();
        let pins = batch_encode(
            &[(28.6139, 77.2090), (12.9716, 77.5946)],
            Some(&opts),
        )
        .unwrap();
        assert_eq!(pins.len(), 2);
        assert_eq!(pins[0], "39J-438-TJC7");
    }

    #[test]
    fn test_batch_encode_first_failure_wins() {
        let opts = EncodeOptions::default().without_cache();
        let result = batch_encode(&[(28.6139, 77.2090), (1.0, 77.0)], Some(&opts));
        assert!(matches!(result, Err(DigiPinError::OutOfBounds { .. })));
    }

    #[test]
    fn test_batch_decode() {
        let opts = DecodeOptions::default().without_cache();
        let coords = batch_decode(&["39J-438-TJC7", "39J438TJC7"], Some(&opts)).unwrap();
        assert_eq!(coords[0], coords[1]);
    }

    #[test]
    fn test_batch_decode_propagates_format_error() {
        let opts = DecodeOptions::default().without_cache();
        let result = batch_decode(&["39J-438-TJC7", "K4P-9C6"], Some(&opts));
        assert!(matches!(result, Err(DigiPinError::PinFormat(_))));
    }

    #[test]
    fn test_empty_batches() {
        assert!(batch_encode(&[], None).unwrap().is_empty());
        let pins: [&str; 0] = [];
        assert!(batch_decode(&pins, None).unwrap().is_empty());
    }
}
