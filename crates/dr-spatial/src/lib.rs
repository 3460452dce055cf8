//! `dr-spatial` — street map, coordinate adjacency index, and routing.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`coord_index`]| `CoordHasher`, `CoordIndex<V>`                           |
//! | [`mapdata`]    | `parse_map_data`, `MapDataParser` (text map format)       |
//! | [`street_map`] | `StreetMap` (bidirectional adjacency over `CoordIndex`)   |
//! | [`router`]     | `Router` trait, `Route`, `BreadthFirstRouter`             |
//! | [`error`]      | `SpatialError`, `SpatialResult<T>`                        |
//!
//! # Lifecycle
//!
//! A `StreetMap` is loaded once and is read-only afterwards.  Routers borrow
//! it, and every query allocates its own search state, so one map can serve
//! any number of concurrent queries without locking.

pub mod coord_index;
pub mod error;
pub mod mapdata;
pub mod router;
pub mod street_map;


pub use coord_index::{CoordHasher, CoordIndex};
pub use error::{SpatialError, SpatialResult};
pub use mapdata::{parse_map_data, MapDataParser};
pub use router::{BreadthFirstRouter, Route, Router};
pub use street_map::StreetMap;
