//! Coordinate representations and the shape translation between them.
//!
//! Three shapes exist because three parties disagree about what a coordinate
//! looks like:
//!
//! - [`GeoPoint`] is the *incoming* shape: named `latitude`/`longitude`
//!   fields as delivered by the document store. The store guarantees
//!   nothing, so each component is a raw JSON scalar.
//! - [`ResolvedPoint`] is the *validated* shape: exact decimal components
//!   that passed the numeric and geographic-range checks.
//! - [`LatLng`] is the *outgoing* shape: the `lat`/`lng` literal the map
//!   provider consumes for marker and overlay placement.
//!
//! [`GeoPoint::resolve`] is the single total conversion between them. It
//! never panics and never errors; malformed input resolves to `None`.
//!
//! Grouping equality is exact decimal *value* identity, never floating-point
//! approximation: `"35.0"` and `35.00` carry the same value and share a
//! [`GroupKey`], while `35.0` and `35.0000001` never merge. Conversion to
//! `f64` happens only at the [`LatLng`] boundary, where standard double
//! rounding is acceptable to the map provider.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

/// Exact-match grouping key for one coordinate pair.
///
/// Serialized from the normalized decimal components, so two sources with
/// the same value (regardless of trailing zeros or string/number
/// representation) produce the same key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GroupKey(pub String);

impl GroupKey {
    /// Borrow the canonical key string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for GroupKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Map-consumable coordinate literal (`lat`/`lng` field names).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LatLng {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl LatLng {
    /// Create a literal from raw degree values.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether both components are finite numbers.
    ///
    /// A literal that fails this check must never be handed to the map
    /// provider; callers degrade to "render nothing" instead.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// Coordinate pair as delivered by the document store
/// (named `latitude`/`longitude` fields).
///
/// Components are raw JSON scalars because stored documents are not
/// guaranteed to carry numbers. Validation happens in [`Self::resolve`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GeoPoint {
    /// Raw latitude scalar (number or numeric string in valid documents).
    pub latitude: Value,
    /// Raw longitude scalar (number or numeric string in valid documents).
    pub longitude: Value,
}

impl GeoPoint {
    /// Build a point from plain numeric components.
    ///
    /// Non-finite inputs become JSON `null` and will fail to resolve.
    pub fn numeric(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Value::from(latitude),
            longitude: Value::from(longitude),
        }
    }

    /// Build a point from raw string components.
    pub fn text(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self {
            latitude: Value::String(latitude.into()),
            longitude: Value::String(longitude.into()),
        }
    }

    /// Validate and convert to exact decimal components.
    ///
    /// Total and pure: returns `None` for a missing, non-numeric,
    /// non-finite, or out-of-range component, and never panics. Latitude
    /// must lie in [-90, 90] and longitude in [-180, 180].
    pub fn resolve(&self) -> Option<ResolvedPoint> {
        let latitude = scalar_to_decimal(&self.latitude)?;
        let longitude = scalar_to_decimal(&self.longitude)?;

        if latitude.abs() > Decimal::from(90_i64) || longitude.abs() > Decimal::from(180_i64) {
            return None;
        }

        Some(ResolvedPoint {
            latitude,
            longitude,
        })
    }
}

/// A coordinate pair that passed validation.
///
/// Components are exact decimals carrying the source value, so equality is
/// value identity rather than floating-point approximation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPoint {
    /// Exact latitude as parsed from the source.
    pub latitude: Decimal,
    /// Exact longitude as parsed from the source.
    pub longitude: Decimal,
}

impl ResolvedPoint {
    /// Canonical exact-match key for this coordinate pair.
    ///
    /// Components are normalized first, so value-equal sources with
    /// different scales (`35.0` vs `35.00`) share a key.
    pub fn key(&self) -> GroupKey {
        GroupKey(format!(
            "{},{}",
            self.latitude.normalize(),
            self.longitude.normalize()
        ))
    }

    /// Translate to the map provider's `lat`/`lng` literal.
    ///
    /// This is the only place a coordinate becomes floating point; standard
    /// double rounding applies here and nowhere else.
    pub fn to_lat_lng(&self) -> LatLng {
        // to_f64 on an in-range decimal cannot fail; fall back to the origin
        // rather than propagate an impossible error.
        LatLng {
            lat: self.latitude.to_f64().unwrap_or_default(),
            lng: self.longitude.to_f64().unwrap_or_default(),
        }
    }
}

/// Parse one raw JSON scalar into an exact decimal.
///
/// Accepts JSON numbers (integer or float) and numeric strings (plain or
/// scientific). Anything else -- null, booleans, arrays, objects,
/// unparseable text -- yields `None`.
fn scalar_to_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .map(Decimal::from)
            .or_else(|| n.as_u64().map(Decimal::from))
            .or_else(|| n.as_f64().and_then(|f| Decimal::try_from(f).ok())),
        Value::String(s) => {
            let trimmed = s.trim();
            Decimal::from_str_exact(trimmed)
                .ok()
                .or_else(|| Decimal::from_scientific(trimmed).ok())
        }
        _ => None,
    }
}
