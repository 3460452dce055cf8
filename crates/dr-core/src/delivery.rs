//! Delivery requests.

use crate::GeoCoord;

/// One item to drop off at a location.
///
/// The estimator and planner treat a list of requests purely as a sequence
/// of coordinates; `item` is carried through for reporting.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DeliveryRequest {
    pub item:     String,
    pub location: GeoCoord,
}

impl DeliveryRequest {
    pub fn new(item: impl Into<String>, location: GeoCoord) -> Self {
        Self { item: item.into(), location }
    }
}
