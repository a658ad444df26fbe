//! Bounded memoization for encode and decode results.
//!
//! Two independent caches sit in front of the codec: encode results keyed by
//! (rounded latitude, rounded longitude, format) and decode results keyed by
//! the canonical compact pin. Both are capped at [`CACHE_CAPACITY`] entries
//! with recency-based eviction, populated lazily, and cleared only by the
//! explicit reset operations. A hit must be value-equal to what a miss would
//! have computed; the caches are never observable through results, only
//! through timing.

use crate::types::{Coordinate, PinFormat};
use moka::sync::Cache;
use once_cell::sync::Lazy;

/// Maximum number of entries held by each cache.
pub const CACHE_CAPACITY: u64 = 10_000;

/// Encode cache key. Coordinates are keyed by bit pattern; they have already
/// been rounded, so equal rounded values share an entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct EncodeKey {
    lat_bits: u64,
    lon_bits: u64,
    format: PinFormat,
}

impl EncodeKey {
    fn new(latitude: f64, longitude: f64, format: PinFormat) -> Self {
        Self {
            lat_bits: latitude.to_bits(),
            lon_bits: longitude.to_bits(),
            format,
        }
    }
}

static ENCODE_CACHE: Lazy<Cache<EncodeKey, String>> =
    Lazy::new(|| Cache::new(CACHE_CAPACITY));

static DECODE_CACHE: Lazy<Cache<String, Coordinate>> =
    Lazy::new(|| Cache::new(CACHE_CAPACITY));

pub(crate) fn lookup_encode(latitude: f64, longitude: f64, format: PinFormat) -> Option<String> {
    ENCODE_CACHE.get(&EncodeKey::new(latitude, longitude, format))
}

pub(crate) fn store_encode(latitude: f64, longitude: f64, format: PinFormat, pin: &str) {
    ENCODE_CACHE.insert(EncodeKey::new(latitude, longitude, format), pin.to_string());
}

pub(crate) fn lookup_decode(compact: &str) -> Option<Coordinate> {
    DECODE_CACHE.get(compact)
}

pub(crate) fn store_decode(compact: &str, coordinate: Coordinate) {
    DECODE_CACHE.insert(compact.to_string(), coordinate);
}

/// Drop every entry from the encode cache.
pub fn reset_encode_cache() {
    ENCODE_CACHE.invalidate_all();
    log::debug!("encode cache cleared");
}

/// Drop every entry from the decode cache.
pub fn reset_decode_cache() {
    DECODE_CACHE.invalidate_all();
    log::debug!("decode cache cleared");
}

/// Drop every entry from both caches.
pub fn reset_caches() {
    reset_encode_cache();
    reset_decode_cache();
}

/// Settled entry count of the encode cache.
pub fn encode_cache_entries() -> u64 {
    ENCODE_CACHE.run_pending_tasks();
    ENCODE_CACHE.entry_count()
}

/// Settled entry count of the decode cache.
pub fn decode_cache_entries() -> u64 {
    DECODE_CACHE.run_pending_tasks();
    DECODE_CACHE.entry_count()
}
