//! Pluggable reverse-geocode resolution.
//!
//! A resolver installed process-wide may short-circuit lookups with richer
//! data (a street address, a label); without one, or when the resolver
//! declines, lookups fall back to the decoded cell center. Resolvers see the
//! canonical compact pin.

use crate::codec;
use crate::error::Result;
use crate::pin;
use crate::types::DecodeOptions;
use futures::future::{self, BoxFuture, FutureExt};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A resolved location, either from an installed resolver or from the
/// decode fallback (in which case `label` is `None`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReverseGeocodeResult {
    /// Canonical compact pin the lookup resolved.
    pub pin: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Human-readable place description supplied by a resolver.
    pub label: Option<String>,
}

/// A reverse-geocode backend.
///
/// Implementors answer with `Some` to short-circuit the decode fallback, or
/// `None` to decline. `resolve_async` exists for backends that need to wait
/// on I/O; its default answers with the synchronous result, so synchronous
/// backends implement `resolve` alone. The trait stays dyn-compatible by
/// returning a boxed future instead of using `async fn`.
pub trait ReverseGeocodeResolver: Send + Sync {
    fn resolve(&self, pin: &str) -> Option<ReverseGeocodeResult>;

    fn resolve_async<'a>(&'a self, pin: &'a str) -> BoxFuture<'a, Option<ReverseGeocodeResult>> {
        future::ready(self.resolve(pin)).boxed()
    }
}

impl<F> ReverseGeocodeResolver for F
where
    F: Fn(&str) -> Option<ReverseGeocodeResult> + Send + Sync,
{
    fn resolve(&self, pin: &str) -> Option<ReverseGeocodeResult> {
        self(pin)
    }
}

static RESOLVER: Lazy<RwLock<Option<Arc<dyn ReverseGeocodeResolver>>>> =
    Lazy::new(|| RwLock::new(None));

/// Install a process-wide resolver, replacing any previous one.
pub fn set_reverse_geocode_resolver(resolver: Arc<dyn ReverseGeocodeResolver>) {
    *RESOLVER.write() = Some(resolver);
}

/// Remove the installed resolver; lookups fall back to decoding.
pub fn clear_reverse_geocode_resolver() {
    *RESOLVER.write() = None;
}

fn current_resolver() -> Option<Arc<dyn ReverseGeocodeResolver>> {
    RESOLVER.read().clone()
}

fn decode_fallback(compact: &str, options: Option<&DecodeOptions>) -> Result<ReverseGeocodeResult> {
    let coordinate = codec::decode(compact, options)?;
    Ok(ReverseGeocodeResult {
        pin: compact.to_string(),
        latitude: coordinate.latitude,
        longitude: coordinate.longitude,
        label: None,
    })
}

/// Resolve a pin to a location, consulting the installed resolver first.
pub fn reverse_geocode(pin: &str, options: Option<&DecodeOptions>) -> Result<ReverseGeocodeResult> {
    let compact = pin::normalize(pin)?;
    if let Some(resolver) = current_resolver() {
        if let Some(result) = resolver.resolve(&compact) {
            return Ok(result);
        }
    }
    decode_fallback(&compact, options)
}

/// Asynchronous variant of [`reverse_geocode`] for resolvers that await I/O.
pub async fn reverse_geocode_async(
    pin: &str,
    options: Option<&DecodeOptions>,
) -> Result<ReverseGeocodeResult> {
    let compact = pin::normalize(pin)?;
    // Grab the resolver handle before awaiting; the slot lock is never held
    // across an await point.
    if let Some(resolver) = current_resolver() {
        if let Some(result) = resolver.resolve_async(&compact).await {
            return Ok(result);
        }
    }
    decode_fallback(&compact, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DigiPinError;
    use futures::executor::block_on;
    use parking_lot::Mutex;

    // The resolver slot is process-wide; serialize tests that install one.
    static RESOLVER_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn override_resolver(pin: &str) -> Option<ReverseGeocodeResult> {
        (pin == "39J438TJC7").then(|| ReverseGeocodeResult {
            pin: pin.to_string(),
            latitude: 0.0,
            longitude: 0.0,
            label: Some("Override".to_string()),
        })
    }

    #[test]
    fn test_fallback_without_resolver() {
        let _guard = RESOLVER_TEST_LOCK.lock();
        clear_reverse_geocode_resolver();

        let result = reverse_geocode("39J-438-TJC7", None).unwrap();
        assert_eq!(result.pin, "39J438TJC7");
        assert!((result.latitude - 28.6139).abs() < 0.1);
        assert!((result.longitude - 77.2090).abs() < 0.1);
        assert_eq!(result.label, None);
    }

    #[test]
    fn test_resolver_short_circuits() {
        let _guard = RESOLVER_TEST_LOCK.lock();
        set_reverse_geocode_resolver(Arc::new(override_resolver));

        let result = reverse_geocode("39J-438-TJC7", None).unwrap();
        assert_eq!(result.label.as_deref(), Some("Override"));
        assert_eq!(result.latitude, 0.0);

        // A pin the resolver declines still falls back to decode.
        let result = reverse_geocode("422-35T-M8JT", None).unwrap();
        assert_eq!(result.label, None);
        assert!(result.latitude > 0.0);

        clear_reverse_geocode_resolver();
    }

    #[test]
    fn test_async_resolver() {
        let _guard = RESOLVER_TEST_LOCK.lock();
        set_reverse_geocode_resolver(Arc::new(override_resolver));

        let result = block_on(reverse_geocode_async("39J-438-TJC7", None)).unwrap();
        assert_eq!(result.label.as_deref(), Some("Override"));

        let result = block_on(reverse_geocode_async("422-35T-M8JT", None)).unwrap();
        assert_eq!(result.label, None);

        clear_reverse_geocode_resolver();
    }

    #[test]
    fn test_normalization_errors_surface_first() {
        let _guard = RESOLVER_TEST_LOCK.lock();
        clear_reverse_geocode_resolver();

        assert!(matches!(
            reverse_geocode("K4P-9C6", None),
            Err(DigiPinError::PinFormat(_))
        ));
        assert!(matches!(
            block_on(reverse_geocode_async("K4P-9C6-LMP1", None)),
            Err(DigiPinError::InvalidCharacter { character: '1', .. })
        ));
    }
}
