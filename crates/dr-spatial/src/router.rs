//! Routing trait and the breadth-first point-to-point router.
//!
//! # Search
//!
//! [`BreadthFirstRouter`] finds a path with the fewest segments.  When a
//! coordinate is expanded, its outgoing segments are ranked by the crow
//! distance from their far end to the target before the unvisited ones are
//! enqueued.  Only the first discovery of a coordinate records its
//! predecessor, so the ranking decides which arrival edge wins among
//! equal-hop alternatives.  It never changes the hop count of the result.
//!
//! # Per-query state
//!
//! The visited set, FIFO frontier, and predecessor map are created inside
//! each call and dropped when it returns.  Nothing is cached on the router,
//! so a router (and its map) can be shared freely across threads.
//!
//! # Distance units
//!
//! `Route::distance_miles` is the sum of crow distances between consecutive
//! coordinates of the returned path, in statute miles.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use dr_core::{GeoCoord, StreetSegment};
use dr_index::ExpandableMap;

use crate::coord_index::CoordHasher;
use crate::street_map::StreetMap;
use crate::{SpatialError, SpatialResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: segments to travel in order, and their
/// total length.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Segments from source to destination; each one ends where the next
    /// one starts.
    pub segments: Vec<StreetSegment>,
    /// Cumulative crow distance along `segments`, in miles.
    pub distance_miles: f64,
}

impl Route {
    /// The zero-length route of a query whose start equals its end.
    pub fn empty() -> Self {
        Self { segments: Vec::new(), distance_miles: 0.0 }
    }

    /// `true` if the source and destination are the same coordinate.
    pub fn is_trivial(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn hop_count(&self) -> usize {
        self.segments.len()
    }

    /// Street names along the route, with consecutive repeats collapsed.
    pub fn street_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for seg in &self.segments {
            if names.last() != Some(&seg.name.as_str()) {
                names.push(&seg.name);
            }
        }
        names
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable point-to-point routing engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so that delivery legs can be routed
/// on Rayon worker threads.
pub trait Router: Send + Sync {
    /// Compute a route from `start` to `end`.
    ///
    /// # Errors
    ///
    /// - [`SpatialError::NotRoutable`] if either endpoint starts no segment.
    /// - [`SpatialError::NoRoute`] if both are known but disconnected.
    ///
    /// `start == end` (for a known coordinate) is an empty route.
    fn route(&self, start: &GeoCoord, end: &GeoCoord) -> SpatialResult<Route>;
}

// ── BreadthFirstRouter ────────────────────────────────────────────────────────

/// Fewest-segments router over a loaded [`StreetMap`].
#[derive(Clone, Copy)]
pub struct BreadthFirstRouter<'m> {
    map: &'m StreetMap,
}

/// Coordinate → the coordinate it was first reached from.
type PredecessorMap<'a> = ExpandableMap<&'a GeoCoord, &'a GeoCoord, CoordHasher>;

impl<'m> BreadthFirstRouter<'m> {
    pub fn new(map: &'m StreetMap) -> Self {
        Self { map }
    }

    pub fn map(&self) -> &'m StreetMap {
        self.map
    }

    /// Breadth-first search from `start` until `end` is dequeued.
    ///
    /// Returns the predecessor map on success, `None` if the frontier
    /// empties first.
    fn search<'a>(&'a self, start: &'a GeoCoord, end: &GeoCoord) -> Option<PredecessorMap<'a>> {
        let mut predecessors = PredecessorMap::new();
        let mut visited: FxHashSet<&GeoCoord> = FxHashSet::default();
        let mut frontier: VecDeque<&GeoCoord> = VecDeque::new();

        visited.insert(start);
        frontier.push_back(start);

        while let Some(curr) = frontier.pop_front() {
            if curr == end {
                return Some(predecessors);
            }
            let Some(outgoing) = self.map.segments_from(curr) else {
                continue;
            };
            for seg in rank_by_distance_to(outgoing, end) {
                if visited.insert(&seg.end) {
                    frontier.push_back(&seg.end);
                    predecessors.associate(&seg.end, curr);
                }
            }
        }
        None
    }

    /// Walk the predecessor chain back from `end` to `start`.
    ///
    /// # Panics
    ///
    /// If the chain is broken or names a hop with no matching segment in the
    /// map.  Both mean the search and the index disagree, which a correctly
    /// built map rules out.
    fn reconstruct<'a>(
        &self,
        predecessors: &PredecessorMap<'a>,
        start: &GeoCoord,
        end: &'a GeoCoord,
    ) -> Route {
        let mut segments = Vec::new();
        let mut distance_miles = 0.0;
        let mut cur = end;

        while cur != start {
            let Some(&prev) = predecessors.find(&cur) else {
                panic!("predecessor chain broken at {cur}");
            };
            let Some(name) = self
                .map
                .segments_from(prev)
                .and_then(|out| out.iter().find(|s| &s.end == cur))
                .map(|s| s.name.clone())
            else {
                panic!("no street segment from {prev} to {cur} in the map");
            };

            distance_miles += prev.distance_miles(cur);
            segments.push(StreetSegment::new(prev.clone(), cur.clone(), name));
            cur = prev;
        }

        segments.reverse();
        Route { segments, distance_miles }
    }
}

impl Router for BreadthFirstRouter<'_> {
    fn route(&self, start: &GeoCoord, end: &GeoCoord) -> SpatialResult<Route> {
        for coord in [start, end] {
            if !self.map.contains(coord) {
                return Err(SpatialError::NotRoutable { coord: coord.clone() });
            }
        }

        if start == end {
            return Ok(Route::empty());
        }

        let Some(predecessors) = self.search(start, end) else {
            tracing::debug!(%start, %end, "no route");
            return Err(SpatialError::NoRoute { from: start.clone(), to: end.clone() });
        };

        let route = self.reconstruct(&predecessors, start, end);
        tracing::debug!(
            %start,
            %end,
            hops = route.hop_count(),
            miles = route.distance_miles,
            "route found"
        );
        Ok(route)
    }
}

/// `segments` ordered by increasing crow distance from their end to
/// `target`.  The sort is stable: equidistant segments keep map order.
pub(crate) fn rank_by_distance_to<'s>(
    segments: &'s [StreetSegment],
    target: &GeoCoord,
) -> Vec<&'s StreetSegment> {
    let mut ranked: Vec<(f64, &StreetSegment)> = segments
        .iter()
        .map(|s| (s.end.distance_miles(target), s))
        .collect();
    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));
    ranked.into_iter().map(|(_, s)| s).collect()
}
