//! The coordinate-keyed hash index.
//!
//! A coordinate hashes as the FxHash of its latitude text followed by its
//! longitude text, concatenated into one string.  Hashing works on the exact
//! spelling, so it agrees with `GeoCoord`'s textual equality.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use dr_core::GeoCoord;
use dr_index::{ExpandableMap, KeyHasher};

/// [`KeyHasher`] for [`GeoCoord`] keys (owned or borrowed).
#[derive(Copy, Clone, Debug, Default)]
pub struct CoordHasher;

impl KeyHasher<GeoCoord> for CoordHasher {
    fn hash_key(&self, coord: &GeoCoord) -> u64 {
        let mut combined = String::with_capacity(coord.lat_text().len() + coord.lon_text().len());
        combined.push_str(coord.lat_text());
        combined.push_str(coord.lon_text());

        let mut h = FxHasher::default();
        combined.hash(&mut h);
        h.finish()
    }
}

impl KeyHasher<&GeoCoord> for CoordHasher {
    #[inline]
    fn hash_key(&self, coord: &&GeoCoord) -> u64 {
        <Self as KeyHasher<GeoCoord>>::hash_key(self, coord)
    }
}

/// Resizable hash index from a coordinate to `V`.
pub type CoordIndex<V> = ExpandableMap<GeoCoord, V, CoordHasher>;
