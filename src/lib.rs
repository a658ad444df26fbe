//! Deterministic, reversible DIGIPIN encoding over India's bounding region,
//! with bounded result caches and distance utilities on decoded coordinates.
//!
//! ```rust
//! use digipin::{decode, distance, encode};
//!
//! let pin = encode(28.6139, 77.2090, None)?;
//! assert_eq!(pin, "39J-438-TJC7");
//!
//! let center = decode(&pin, None)?;
//! assert!((center.latitude - 28.6139).abs() < 0.1);
//!
//! let meters = distance("422-35T-M8JT", "422-36L-P6J9", 1.0)?;
//! assert!(meters > 0.0);
//! # Ok::<(), digipin::DigiPinError>(())
//! ```

pub mod batch;
pub mod cache;
pub mod codec;
pub mod error;
pub mod geo;
pub mod pin;
pub mod reverse;
pub mod types;

#[cfg(feature = "geojson")]
pub mod geojson;

pub use batch::{batch_decode, batch_encode};
pub use cache::{
    decode_cache_entries, encode_cache_entries, reset_caches, reset_decode_cache,
    reset_encode_cache,
};
pub use codec::{GRID, PIN_LENGTH, decode, encode};
pub use error::{DigiPinError, Result};
pub use crate::geo::{
    DistanceMetric, DistanceOrderOptions, PinInput, distance, find_nearest, order_by_distance,
    precise_distance,
};
pub use pin::{normalize, validate};
pub use reverse::{
    ReverseGeocodeResolver, ReverseGeocodeResult, clear_reverse_geocode_resolver,
    reverse_geocode, reverse_geocode_async, set_reverse_geocode_resolver,
};
pub use types::{BOUNDS, Bounds, Coordinate, DecodeOptions, EncodeOptions, PinFormat};

#[cfg(feature = "geojson")]
pub use crate::geojson::to_feature;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{DigiPinError, Result, decode, encode};

    pub use crate::{BOUNDS, Bounds, Coordinate, DecodeOptions, EncodeOptions, PinFormat};

    pub use crate::{distance, find_nearest, order_by_distance, precise_distance};

    pub use crate::{reset_caches, reset_decode_cache, reset_encode_cache};
}
