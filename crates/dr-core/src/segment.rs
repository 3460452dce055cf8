//! Directed street segments.

use std::fmt;

use crate::GeoCoord;

/// A directed road link between two coordinates, carrying its street name.
///
/// Map data describes each physical segment once; the street map stores it
/// together with its [`reversed`](Self::reversed) twin so the network can be
/// traversed from either endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StreetSegment {
    pub start: GeoCoord,
    pub end:   GeoCoord,
    pub name:  String,
}

impl StreetSegment {
    pub fn new(start: GeoCoord, end: GeoCoord, name: impl Into<String>) -> Self {
        Self { start, end, name: name.into() }
    }

    /// The same segment travelled in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end.clone(),
            end:   self.start.clone(),
            name:  self.name.clone(),
        }
    }

    /// Crow distance between the endpoints, in miles.
    #[inline]
    pub fn length_miles(&self) -> f64 {
        self.start.distance_miles(&self.end)
    }
}

impl fmt::Display for StreetSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.name, self.start, self.end)
    }
}
