//! GeoJSON output for decoded pins.

use crate::codec;
use crate::error::Result;
use crate::pin;
use crate::types::DecodeOptions;
use geojson::{Feature, Geometry, JsonObject, Value};

/// Decode a pin into a GeoJSON Point `Feature`.
///
/// Coordinates follow GeoJSON order (`[longitude, latitude]`). Caller
/// properties are carried over and a `"pin"` property holding the canonical
/// compact form is added, overriding any caller-supplied `"pin"`.
///
/// # Example
///
/// ```rust
/// use digipin::to_feature;
///
/// let feature = to_feature("39J-438-TJC7", None, None)?;
/// assert_eq!(
///     feature.property("pin").and_then(|v| v.as_str()),
///     Some("39J438TJC7")
/// );
/// # Ok::<(), digipin::DigiPinError>(())
/// ```
pub fn to_feature(
    pin: &str,
    properties: Option<JsonObject>,
    options: Option<&DecodeOptions>,
) -> Result<Feature> {
    let compact = pin::normalize(pin)?;
    let coordinate = codec::decode(&compact, options)?;

    let mut properties = properties.unwrap_or_default();
    properties.insert("pin".to_string(), compact.into());

    Ok(Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Point(vec![
            coordinate.longitude,
            coordinate.latitude,
        ]))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    })
}
