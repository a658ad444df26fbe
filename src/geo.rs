//! Great-circle distance and ordering utilities over decoded coordinates.

use crate::codec;
use crate::error::Result;
use crate::types::{Coordinate, DecodeOptions};
use geo::{Distance, Geodesic, Haversine, Point};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Either a raw pin or an already-resolved coordinate.
///
/// Pins are normalized and decoded before use; coordinates pass through
/// untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum PinInput {
    Pin(String),
    Coordinate(Coordinate),
}

impl PinInput {
    fn resolve(&self, options: &DecodeOptions) -> Result<Coordinate> {
        match self {
            PinInput::Pin(pin) => codec::decode(pin, Some(options)),
            PinInput::Coordinate(coordinate) => Ok(*coordinate),
        }
    }
}

impl From<&str> for PinInput {
    fn from(pin: &str) -> Self {
        PinInput::Pin(pin.to_string())
    }
}

impl From<String> for PinInput {
    fn from(pin: String) -> Self {
        PinInput::Pin(pin)
    }
}

impl From<&String> for PinInput {
    fn from(pin: &String) -> Self {
        PinInput::Pin(pin.clone())
    }
}

impl From<Coordinate> for PinInput {
    fn from(coordinate: Coordinate) -> Self {
        PinInput::Coordinate(coordinate)
    }
}

/// Distance models for [`order_by_distance`] and [`find_nearest`].
///
/// - **Haversine**: spherical distance, fast and accurate enough for most uses
/// - **Geodesic**: ellipsoidal distance (Karney 2013), more accurate, slower
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    #[default]
    Haversine,
    Geodesic,
}

/// Calculate the distance between two points using the specified metric, in
/// meters.
pub fn distance_between(point1: &Point, point2: &Point, metric: DistanceMetric) -> f64 {
    match metric {
        DistanceMetric::Haversine => Haversine.distance(*point1, *point2),
        DistanceMetric::Geodesic => Geodesic.distance(*point1, *point2),
    }
}

/// Round `meters` to the nearest multiple of `accuracy`. Non-positive
/// accuracy returns the raw value.
fn apply_accuracy(meters: f64, accuracy: f64) -> f64 {
    if accuracy > 0.0 {
        (meters / accuracy).round() * accuracy
    } else {
        meters
    }
}

fn measure(
    start: PinInput,
    end: PinInput,
    accuracy: f64,
    metric: DistanceMetric,
    decode: &DecodeOptions,
) -> Result<f64> {
    let start = start.resolve(decode)?;
    let end = end.resolve(decode)?;
    let meters = distance_between(&start.to_point(), &end.to_point(), metric);
    Ok(apply_accuracy(meters, accuracy))
}

/// Approximate great-circle distance in meters between two pins or
/// coordinates, rounded to the nearest multiple of `accuracy` meters.
///
/// # Example
///
/// ```rust
/// use digipin::distance;
///
/// let meters = distance("422-35T-M8JT", "422-36L-P6J9", 1.0)?;
/// assert!(meters > 500.0 && meters < 5000.0);
/// # Ok::<(), digipin::DigiPinError>(())
/// ```
pub fn distance(
    start: impl Into<PinInput>,
    end: impl Into<PinInput>,
    accuracy: f64,
) -> Result<f64> {
    measure(
        start.into(),
        end.into(),
        accuracy,
        DistanceMetric::Haversine,
        &DecodeOptions::default(),
    )
}

/// Geodesic (ellipsoidal) distance in meters, same accuracy contract as
/// [`distance`].
pub fn precise_distance(
    start: impl Into<PinInput>,
    end: impl Into<PinInput>,
    accuracy: f64,
) -> Result<f64> {
    measure(
        start.into(),
        end.into(),
        accuracy,
        DistanceMetric::Geodesic,
        &DecodeOptions::default(),
    )
}

/// Options for [`order_by_distance`] and [`find_nearest`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceOrderOptions {
    /// Granularity in meters applied to each distance before comparison.
    pub accuracy: f64,
    /// Distance model used for the ordering.
    pub metric: DistanceMetric,
    /// Decode options used when resolving pin inputs.
    pub decode: DecodeOptions,
}

impl Default for DistanceOrderOptions {
    fn default() -> Self {
        Self {
            accuracy: 1.0,
            metric: DistanceMetric::default(),
            decode: DecodeOptions::default(),
        }
    }
}

impl DistanceOrderOptions {
    pub fn with_accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = accuracy;
        self
    }

    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_decode(mut self, decode: DecodeOptions) -> Self {
        self.decode = decode;
        self
    }
}

/// Sort `items` ascending by distance from `reference`.
///
/// Every item is resolved exactly once. The sort is stable, so items whose
/// distances fall in the same accuracy bucket keep their input order. Any
/// item that fails to resolve fails the whole call.
pub fn order_by_distance<T>(
    reference: impl Into<PinInput>,
    items: &[T],
    options: Option<&DistanceOrderOptions>,
) -> Result<Vec<T>>
where
    T: Clone + Into<PinInput>,
{
    let opts = options.copied().unwrap_or_default();
    let reference = reference.into().resolve(&opts.decode)?.to_point();

    let mut measured: Vec<(T, f64)> = items
        .iter()
        .map(|item| {
            let coordinate = item.clone().into().resolve(&opts.decode)?;
            let meters = distance_between(&reference, &coordinate.to_point(), opts.metric);
            Ok((item.clone(), apply_accuracy(meters, opts.accuracy)))
        })
        .collect::<Result<Vec<_>>>()?;

    measured.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
    Ok(measured.into_iter().map(|(item, _)| item).collect())
}

/// The nearest of `items` to `reference`, or `None` for an empty slice.
pub fn find_nearest<T>(
    reference: impl Into<PinInput>,
    items: &[T],
    options: Option<&DistanceOrderOptions>,
) -> Result<Option<T>>
where
    T: Clone + Into<PinInput>,
{
    if items.is_empty() {
        return Ok(None);
    }
    Ok(order_by_distance(reference, items, options)?.into_iter().next())
}
