//! Separate-chaining hash map with lazy doubling.
//!
//! # Data layout
//!
//! ```text
//! buckets: [ [ (k, v), (k, v) ],  [],  [ (k, v) ],  … ]
//!             ^ chain, insertion order
//! ```
//!
//! A key lives in bucket `hash(key) % bucket_count`.  New keys are appended
//! to the end of their chain; updating an existing key overwrites its value
//! in place.
//!
//! # Growth
//!
//! The map holds at most `floor(max_load_factor × bucket_count)` entries.
//! Growth happens lazily, immediately before an insertion of a *new* key
//! would exceed that bound: the bucket array doubles and every entry is
//! rehashed, walking the old buckets front to back so that arrival order
//! within each new chain follows the old iteration order.

use std::fmt;

pub use dr_core::DEFAULT_MAX_LOAD_FACTOR;

use crate::hasher::{FxKeyHasher, KeyHasher};

/// Bucket count of a freshly constructed or reset map.
pub const DEFAULT_BUCKET_COUNT: usize = 8;

/// Smallest accepted load factor: one entry across the default bucket array.
/// At or above it, a single doubling always makes room for the next entry.
pub const MIN_MAX_LOAD_FACTOR: f64 = 1.0 / DEFAULT_BUCKET_COUNT as f64;

/// Resizable hash map from `K` to `V`, hashing keys through `H`.
#[derive(Clone)]
pub struct ExpandableMap<K, V, H = FxKeyHasher> {
    buckets:         Vec<Vec<(K, V)>>,
    len:             usize,
    max_load_factor: f64,
    /// Entry count that may not be exceeded at the current bucket count.
    max_items:       usize,
    hasher:          H,
}

impl<K: Eq, V, H: KeyHasher<K> + Default> ExpandableMap<K, V, H> {
    /// Empty map with the default load factor (0.5) and 8 buckets.
    pub fn new() -> Self {
        Self::with_hasher(DEFAULT_MAX_LOAD_FACTOR, H::default())
    }

    /// Empty map with a caller-chosen maximum load factor.
    pub fn with_max_load_factor(max_load_factor: f64) -> Self {
        Self::with_hasher(max_load_factor, H::default())
    }
}

impl<K: Eq, V, H: KeyHasher<K>> ExpandableMap<K, V, H> {
    /// Empty map hashing keys with `hasher`.
    ///
    /// A negative, zero, or non-finite `max_load_factor` is replaced by
    /// [`DEFAULT_MAX_LOAD_FACTOR`]; a positive one below
    /// [`MIN_MAX_LOAD_FACTOR`] is raised to it.
    pub fn with_hasher(max_load_factor: f64, hasher: H) -> Self {
        let max_load_factor = if max_load_factor.is_finite() && max_load_factor > 0.0 {
            max_load_factor.max(MIN_MAX_LOAD_FACTOR)
        } else {
            DEFAULT_MAX_LOAD_FACTOR
        };
        Self {
            buckets: empty_buckets(DEFAULT_BUCKET_COUNT),
            len: 0,
            max_load_factor,
            max_items: capacity_for(max_load_factor, DEFAULT_BUCKET_COUNT),
            hasher,
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    /// Number of associations.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    pub fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// The value associated with `key`, or `None`.  Never inserts.
    pub fn find(&self, key: &K) -> Option<&V> {
        let bucket = self.bucket_of(key, self.buckets.len());
        self.buckets[bucket]
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Mutable access to the value associated with `key`, or `None`.
    pub fn find_mut(&mut self, key: &K) -> Option<&mut V> {
        let bucket = self.bucket_of(key, self.buckets.len());
        self.buckets[bucket]
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// All associations, bucket by bucket, each chain in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.buckets.iter().flatten().map(|(k, v)| (k, v))
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Insert `key → value`, or overwrite the value if `key` is present.
    ///
    /// Overwriting never moves the entry.  Inserting a new key first doubles
    /// the bucket array if the map would otherwise exceed its load factor.
    pub fn associate(&mut self, key: K, value: V) {
        if let Some(slot) = self.find_mut(&key) {
            *slot = value;
            return;
        }

        if self.len + 1 > self.max_items {
            self.expand();
        }

        let bucket = self.bucket_of(&key, self.buckets.len());
        self.buckets[bucket].push((key, value));
        self.len += 1;
    }

    /// Drop every association and return to [`DEFAULT_BUCKET_COUNT`] buckets.
    /// The configured load factor is kept.
    pub fn reset(&mut self) {
        self.buckets = empty_buckets(DEFAULT_BUCKET_COUNT);
        self.len = 0;
        self.max_items = capacity_for(self.max_load_factor, DEFAULT_BUCKET_COUNT);
    }

    // ── Internals ─────────────────────────────────────────────────────────

    #[inline]
    fn bucket_of(&self, key: &K, bucket_count: usize) -> usize {
        (self.hasher.hash_key(key) % bucket_count as u64) as usize
    }

    /// Double the bucket array and rehash every entry into it.
    fn expand(&mut self) {
        let old_count = self.buckets.len();
        let new_count = old_count * 2;
        let old = std::mem::replace(&mut self.buckets, empty_buckets(new_count));

        for (key, value) in old.into_iter().flatten() {
            let bucket = self.bucket_of(&key, new_count);
            self.buckets[bucket].push((key, value));
        }
        self.max_items = capacity_for(self.max_load_factor, new_count);

        tracing::trace!(old_count, new_count, len = self.len, "expanded hash index");
    }
}

impl<K: Eq, V, H: KeyHasher<K> + Default> Default for ExpandableMap<K, V, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, H> fmt::Debug for ExpandableMap<K, V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.buckets.iter().flatten().map(|(k, v)| (k, v)))
            .finish()
    }
}

fn empty_buckets<K, V>(count: usize) -> Vec<Vec<(K, V)>> {
    std::iter::repeat_with(Vec::new).take(count).collect()
}

/// `floor(load_factor × bucket_count)`.
#[inline]
fn capacity_for(max_load_factor: f64, bucket_count: usize) -> usize {
    (max_load_factor * bucket_count as f64) as usize
}
