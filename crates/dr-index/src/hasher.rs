//! Hashing capability supplied to an [`ExpandableMap`](crate::ExpandableMap).
//!
//! The map never calls `Hash` on its keys directly.  Each map instance owns a
//! `KeyHasher`, so a key type can be indexed under a domain-specific hash
//! (e.g. the concatenated text of a coordinate) without a global convention.

use std::hash::{BuildHasher, BuildHasherDefault, Hash};

use rustc_hash::FxHasher;

/// Maps a key to a 64-bit hash.  The map reduces it modulo its bucket count.
///
/// Implementations must be deterministic and consistent with the key's
/// `Eq`: equal keys must hash equally.
pub trait KeyHasher<K: ?Sized> {
    fn hash_key(&self, key: &K) -> u64;
}

/// Adapts any [`BuildHasher`] into a [`KeyHasher`] for keys that implement
/// [`Hash`].
#[derive(Clone, Debug, Default)]
pub struct StdKeyHasher<S = BuildHasherDefault<FxHasher>>(pub S);

impl<K: Hash + ?Sized, S: BuildHasher> KeyHasher<K> for StdKeyHasher<S> {
    #[inline]
    fn hash_key(&self, key: &K) -> u64 {
        self.0.hash_one(key)
    }
}

/// `StdKeyHasher` over FxHash: fast, and stable across runs.
pub type FxKeyHasher = StdKeyHasher<BuildHasherDefault<FxHasher>>;
