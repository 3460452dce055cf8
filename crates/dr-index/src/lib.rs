//! `dr-index` — the resizable hash index behind the street map and the
//! router's predecessor map.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`map`]      | `ExpandableMap` (bucket chains, lazy doubling)        |
//! | [`hasher`]   | `KeyHasher` trait, `StdKeyHasher` adapter             |
//!
//! The index never reports errors: lookups produce `Option`, inserts always
//! succeed, and an unusable load factor silently falls back to the default
//! (or, if merely tiny, is raised to `MIN_MAX_LOAD_FACTOR`).

pub mod hasher;
pub mod map;

#[cfg(test)]
mod tests;

pub use hasher::{FxKeyHasher, KeyHasher, StdKeyHasher};
pub use map::{ExpandableMap, DEFAULT_BUCKET_COUNT, DEFAULT_MAX_LOAD_FACTOR, MIN_MAX_LOAD_FACTOR};
