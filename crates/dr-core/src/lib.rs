//! `dr-core` — foundational types for the delivery-routing workspace.
//!
//! This crate is a dependency of every other `dr-*` crate.  It has no `dr-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`geo`]        | `GeoCoord`, haversine crow distance                      |
//! | [`segment`]    | `StreetSegment`                                          |
//! | [`delivery`]   | `DeliveryRequest`                                        |
//! | [`config`]     | `MapConfig`, `ReorderPolicy`, `CourierConfig`            |
//! | [`error`]      | `DrError`, `DrResult`                                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the [`config`] types.    |

pub mod config;
pub mod delivery;
pub mod error;
pub mod geo;
pub mod segment;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{CourierConfig, MapConfig, ReorderPolicy, DEFAULT_MAX_LOAD_FACTOR};
pub use delivery::DeliveryRequest;
pub use error::{DrError, DrResult};
pub use geo::GeoCoord;
pub use segment::StreetSegment;
