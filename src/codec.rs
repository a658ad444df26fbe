//! The DIGIPIN grid codec.
//!
//! A pin is 10 levels of recursive 4×4 subdivision of the fixed bounding
//! region, one alphabet symbol per level. Encode and decode walk the same
//! narrowing arithmetic; the round-trip property (re-encoding a decoded cell
//! center reproduces the pin) depends on the two directions staying identical.

use crate::cache;
use crate::error::{DigiPinError, Result};
use crate::pin;
use crate::types::{BOUNDS, Bounds, Coordinate, DecodeOptions, EncodeOptions};
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// Number of subdivision levels, and therefore symbols in a compact pin.
pub const PIN_LENGTH: usize = 10;

/// The 4×4 symbol matrix. Row 0 is the northernmost quarter of a cell.
pub const GRID: [[char; 4]; 4] = [
    ['F', 'C', '9', '8'],
    ['J', '3', '2', '7'],
    ['K', '4', '5', '6'],
    ['L', 'M', 'P', 'T'],
];

/// Reverse lookup from symbol to (row, col), derived from [`GRID`] once.
pub(crate) static GRID_INDEX: Lazy<FxHashMap<char, (usize, usize)>> = Lazy::new(|| {
    let mut index = FxHashMap::default();
    for (row, symbols) in GRID.iter().enumerate() {
        for (col, &symbol) in symbols.iter().enumerate() {
            index.insert(symbol, (row, col));
        }
    }
    index
});

/// Round to `digits` decimal places, half away from zero. `None` passes the
/// value through.
pub(crate) fn round_coordinate(value: f64, round_to: Option<u32>) -> f64 {
    match round_to {
        Some(digits) => {
            let scale = 10f64.powi(digits as i32);
            (value * scale).round() / scale
        }
        None => value,
    }
}

/// Shrink `cell` to the quarter selected by (row, col).
///
/// Both the encode and decode walks go through this function; do not fork the
/// arithmetic.
fn narrow(cell: &Bounds, row: usize, col: usize) -> Bounds {
    let lat_step = (cell.max_lat - cell.min_lat) / 4.0;
    let lon_step = (cell.max_lon - cell.min_lon) / 4.0;
    let max_lat = cell.min_lat + lat_step * (4 - row) as f64;
    let min_lat = cell.min_lat + lat_step * (3 - row) as f64;
    let min_lon = cell.min_lon + lon_step * col as f64;
    let max_lon = min_lon + lon_step;
    Bounds {
        min_lat,
        max_lat,
        min_lon,
        max_lon,
    }
}

/// Walk the grid for an in-bounds, already-rounded coordinate and produce the
/// compact 10-symbol sequence.
fn encode_cells(latitude: f64, longitude: f64) -> String {
    let mut cell = BOUNDS;
    let mut code = String::with_capacity(PIN_LENGTH);
    for _ in 0..PIN_LENGTH {
        let lat_step = (cell.max_lat - cell.min_lat) / 4.0;
        let lon_step = (cell.max_lon - cell.min_lon) / 4.0;
        // Row 0 is the northernmost quarter: latitude grows upward while row
        // indices grow downward, hence the inversion. The clamp keeps points
        // sitting exactly on the outer boundary at index 3 rather than 4.
        let row = (3 - ((latitude - cell.min_lat) / lat_step).floor() as i64).clamp(0, 3) as usize;
        let col = (((longitude - cell.min_lon) / lon_step).floor() as i64).clamp(0, 3) as usize;
        code.push(GRID[row][col]);
        cell = narrow(&cell, row, col);
    }
    code
}

/// Decode a canonical compact pin into the center of its level-10 cell.
///
/// Callers hand in normalized input; length errors have already been raised
/// as [`DigiPinError::PinFormat`] by that point.
pub(crate) fn decode_cells(compact: &str) -> Result<Coordinate> {
    debug_assert_eq!(compact.chars().count(), PIN_LENGTH);
    let mut cell = BOUNDS;
    for character in compact.chars() {
        let (row, col) =
            GRID_INDEX
                .get(&character)
                .copied()
                .ok_or(DigiPinError::InvalidCharacter {
                    character,
                    suggestion: pin::suggestion_for(character),
                })?;
        cell = narrow(&cell, row, col);
    }
    Ok(cell.center())
}

/// Encode a coordinate into a DIGIPIN.
///
/// Bounds are checked on the raw inputs, then both coordinates are rounded
/// per `options.round_to` before the grid walk and before cache keying.
///
/// # Example
///
/// ```rust
/// let pin = digipin::encode(28.6139, 77.2090, None)?;
/// assert_eq!(pin, "39J-438-TJC7");
/// # Ok::<(), digipin::DigiPinError>(())
/// ```
pub fn encode(latitude: f64, longitude: f64, options: Option<&EncodeOptions>) -> Result<String> {
    let opts = options.copied().unwrap_or_default();

    if !BOUNDS.contains(latitude, longitude) {
        return Err(DigiPinError::OutOfBounds {
            latitude,
            longitude,
            bounds: BOUNDS,
        });
    }

    let latitude = round_coordinate(latitude, opts.round_to);
    let longitude = round_coordinate(longitude, opts.round_to);

    if opts.use_cache {
        if let Some(pin) = cache::lookup_encode(latitude, longitude, opts.format) {
            return Ok(pin);
        }
    }

    let pin = pin::format_pin(&encode_cells(latitude, longitude), opts.format);
    if opts.use_cache {
        cache::store_encode(latitude, longitude, opts.format, &pin);
    }
    Ok(pin)
}

/// Decode a DIGIPIN into the center of the cell it identifies.
///
/// Accepts either presentation form; the input is normalized first, so format
/// and character errors surface before any cache interaction.
///
/// # Example
///
/// ```rust
/// let center = digipin::decode("39J-438-TJC7", None)?;
/// assert!((center.latitude - 28.6139).abs() < 0.1);
/// assert!((center.longitude - 77.2090).abs() < 0.1);
/// # Ok::<(), digipin::DigiPinError>(())
/// ```
pub fn decode(pin: &str, options: Option<&DecodeOptions>) -> Result<Coordinate> {
    let opts = options.copied().unwrap_or_default();
    let compact = pin::normalize(pin)?;

    if opts.use_cache {
        if let Some(coordinate) = cache::lookup_decode(&compact) {
            return Ok(coordinate);
        }
    }

    let coordinate = decode_cells(&compact)?;
    if opts.use_cache {
        cache::store_decode(&compact, coordinate);
    }
    Ok(coordinate)
}
