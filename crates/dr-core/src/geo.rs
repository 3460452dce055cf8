//! Geographic coordinate type and crow-distance utilities.
//!
//! A `GeoCoord` carries two representations of each component:
//!
//! - the **text** exactly as it appeared in the source data, which defines
//!   identity (`Eq`, `Hash`), and
//! - the parsed **degrees** as `f64`, used only for distance arithmetic.
//!
//! Two coordinates with the same numeric value but different formatting
//! (`"34.0"` vs `"34.00"`) are therefore distinct vertices.  Map data always
//! spells a shared intersection identically, so no tolerance-based merging
//! is performed.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{DrError, DrResult};

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Kilometres per statute mile.
const KM_PER_MILE: f64 = 1.609_344;

/// A latitude/longitude pair identified by its exact textual spelling.
#[derive(Clone, Debug)]
pub struct GeoCoord {
    lat_text: String,
    lon_text: String,
    lat: f64,
    lon: f64,
}

impl GeoCoord {
    /// Parse a coordinate from its latitude and longitude texts.
    ///
    /// Surrounding whitespace is trimmed before the text is stored.
    pub fn new(lat_text: &str, lon_text: &str) -> DrResult<Self> {
        let lat_text = lat_text.trim();
        let lon_text = lon_text.trim();
        Ok(Self {
            lat: parse_degrees(lat_text)?,
            lon: parse_degrees(lon_text)?,
            lat_text: lat_text.to_owned(),
            lon_text: lon_text.to_owned(),
        })
    }

    /// Build a coordinate from numeric degrees.  The stored texts are the
    /// shortest round-trip `Display` forms of the values.
    pub fn from_degrees(lat: f64, lon: f64) -> Self {
        Self {
            lat_text: lat.to_string(),
            lon_text: lon.to_string(),
            lat,
            lon,
        }
    }

    #[inline]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    #[inline]
    pub fn lon(&self) -> f64 {
        self.lon
    }

    #[inline]
    pub fn lat_text(&self) -> &str {
        &self.lat_text
    }

    #[inline]
    pub fn lon_text(&self) -> &str {
        &self.lon_text
    }

    /// Haversine great-circle distance in kilometres.
    pub fn distance_km(&self, other: &GeoCoord) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let u = ((lat2 - lat1) * 0.5).sin();
        let v = ((other.lon.to_radians() - self.lon.to_radians()) * 0.5).sin();
        2.0 * EARTH_RADIUS_KM * (u * u + lat1.cos() * lat2.cos() * v * v).sqrt().asin()
    }

    /// Crow distance in statute miles.  Every distance reported by the
    /// router and the delivery estimator uses this unit.
    #[inline]
    pub fn distance_miles(&self, other: &GeoCoord) -> f64 {
        self.distance_km(other) / KM_PER_MILE
    }
}

fn parse_degrees(text: &str) -> DrResult<f64> {
    let value: f64 = text.parse().map_err(|e: std::num::ParseFloatError| {
        DrError::InvalidCoordinate { text: text.to_owned(), reason: e.to_string() }
    })?;
    if !value.is_finite() {
        return Err(DrError::InvalidCoordinate {
            text:   text.to_owned(),
            reason: "not a finite number".to_owned(),
        });
    }
    Ok(value)
}

impl PartialEq for GeoCoord {
    fn eq(&self, other: &Self) -> bool {
        self.lat_text == other.lat_text && self.lon_text == other.lon_text
    }
}

impl Eq for GeoCoord {}

impl Hash for GeoCoord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lat_text.hash(state);
        self.lon_text.hash(state);
    }
}

impl fmt::Display for GeoCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat_text, self.lon_text)
    }
}
