//! Core value types and operation options.

use geo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic coordinate in degrees.
///
/// Decoded coordinates are cell centers; longitude is never wrapped, and
/// values outside [`BOUNDS`] are rejected by the encoder rather than
/// normalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Convert into a `geo::Point` (x = longitude, y = latitude).
    pub fn to_point(self) -> Point {
        Point::new(self.longitude, self.latitude)
    }
}

impl From<Point> for Coordinate {
    fn from(point: Point) -> Self {
        Self {
            latitude: point.y(),
            longitude: point.x(),
        }
    }
}

/// A latitude/longitude rectangle in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

/// The single addressable region for the whole scheme. Fixed at build time.
pub const BOUNDS: Bounds = Bounds {
    min_lat: 2.5,
    max_lat: 38.5,
    min_lon: 63.5,
    max_lon: 99.5,
};

impl Bounds {
    /// Whether a coordinate lies inside the rectangle, edges included.
    ///
    /// Non-finite values are never contained.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&latitude)
            && (self.min_lon..=self.max_lon).contains(&longitude)
    }

    /// The center point of the rectangle.
    pub fn center(&self) -> Coordinate {
        Coordinate {
            latitude: (self.min_lat + self.max_lat) / 2.0,
            longitude: (self.min_lon + self.max_lon) / 2.0,
        }
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lat [{}, {}], lon [{}, {}]",
            self.min_lat, self.max_lat, self.min_lon, self.max_lon
        )
    }
}

/// Presentation form of an encoded pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PinFormat {
    /// `XXX-XXX-XXXX`, hyphens after positions 3 and 6.
    #[default]
    Hyphenated,
    /// The raw 10-character sequence.
    Compact,
}

/// Options for [`encode`](crate::encode).
///
/// # Example
///
/// ```rust
/// use digipin::{EncodeOptions, PinFormat, encode};
///
/// let opts = EncodeOptions::default().with_format(PinFormat::Compact);
/// let pin = encode(28.6139, 77.2090, Some(&opts))?;
/// assert_eq!(pin, "39J438TJC7");
/// # Ok::<(), digipin::DigiPinError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EncodeOptions {
    /// Presentation form of the returned pin.
    #[serde(default)]
    pub format: PinFormat,

    /// Decimal places both coordinates are rounded to before encoding and
    /// before cache keying. `None` disables rounding.
    #[serde(default = "EncodeOptions::default_round_to")]
    pub round_to: Option<u32>,

    /// Consult and populate the encode cache.
    #[serde(default = "EncodeOptions::default_use_cache")]
    pub use_cache: bool,
}

impl EncodeOptions {
    const fn default_round_to() -> Option<u32> {
        Some(6)
    }

    const fn default_use_cache() -> bool {
        true
    }

    pub fn with_format(mut self, format: PinFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_round_to(mut self, digits: u32) -> Self {
        self.round_to = Some(digits);
        self
    }

    /// Pass coordinates through unrounded.
    pub fn without_rounding(mut self) -> Self {
        self.round_to = None;
        self
    }

    pub fn without_cache(mut self) -> Self {
        self.use_cache = false;
        self
    }
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            format: PinFormat::default(),
            round_to: Self::default_round_to(),
            use_cache: Self::default_use_cache(),
        }
    }
}

/// Options for [`decode`](crate::decode).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecodeOptions {
    /// Consult and populate the decode cache.
    #[serde(default = "DecodeOptions::default_use_cache")]
    pub use_cache: bool,
}

impl DecodeOptions {
    const fn default_use_cache() -> bool {
        true
    }

    pub fn without_cache(mut self) -> Self {
        self.use_cache = false;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            use_cache: Self::default_use_cache(),
        }
    }
}
