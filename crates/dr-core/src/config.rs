//! Runtime configuration shared by the map, router, and delivery crates.
//!
//! Typically loaded from a JSON file by the application crate (with the
//! `serde` feature) and overridden from the command line.

use std::fmt;
use std::str::FromStr;

use crate::DrError;

/// Maximum load factor used when none (or an unusable one) is configured.
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.5;

// ── MapConfig ─────────────────────────────────────────────────────────────────

/// Settings for the coordinate index built by the street map.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MapConfig {
    /// Items per bucket allowed before the index doubles its bucket array.
    /// Negative, zero, or non-finite values fall back to
    /// [`DEFAULT_MAX_LOAD_FACTOR`]; the index raises positive values below
    /// 1/8 to 1/8.
    pub max_load_factor: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self { max_load_factor: DEFAULT_MAX_LOAD_FACTOR }
    }
}

// ── ReorderPolicy ─────────────────────────────────────────────────────────────

/// How the delivery estimator reorders stops before re-measuring the tour.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ReorderPolicy {
    /// Leave the caller's order untouched.
    Keep,
    /// Greedy tour: always visit the closest remaining stop next.
    NearestNeighbor,
    /// Nearest-neighbor tour refined by 2-opt segment reversals.
    #[default]
    TwoOpt,
}

impl ReorderPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            ReorderPolicy::Keep            => "keep",
            ReorderPolicy::NearestNeighbor => "nearest-neighbor",
            ReorderPolicy::TwoOpt          => "two-opt",
        }
    }
}

impl FromStr for ReorderPolicy {
    type Err = DrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "keep"             => Ok(ReorderPolicy::Keep),
            "nearest-neighbor" => Ok(ReorderPolicy::NearestNeighbor),
            "two-opt"          => Ok(ReorderPolicy::TwoOpt),
            other => Err(DrError::Config(format!(
                "unknown reorder policy {other:?}: expected \"keep\", \"nearest-neighbor\", or \"two-opt\""
            ))),
        }
    }
}

impl fmt::Display for ReorderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── CourierConfig ─────────────────────────────────────────────────────────────

/// Top-level configuration for an application run.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CourierConfig {
    pub map:     MapConfig,
    pub reorder: ReorderPolicy,
}
