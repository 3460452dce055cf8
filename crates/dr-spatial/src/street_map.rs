//! Street map: the bidirectional adjacency index routers search over.
//!
//! # Data layout
//!
//! ```text
//! CoordIndex:  coordinate ──► [ segment, segment, … ]   (all start there)
//! ```
//!
//! Every loaded segment `a → b` is stored twice: under `a` as loaded and
//! under `b` reversed, with the same street name.  Each list keeps arrival
//! order: file order, with reverse insertions interleaved as they occur.
//! After a successful load every coordinate that appears as any segment
//! endpoint has a non-empty list.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use dr_core::{GeoCoord, MapConfig, StreetSegment};

use crate::coord_index::{CoordHasher, CoordIndex};
use crate::mapdata::parse_map_data;
use crate::SpatialResult;

/// Coordinate → outgoing-segments index built from map data.
///
/// Build with [`load`](Self::load) / [`load_reader`](Self::load_reader), or
/// segment by segment with [`add_segment`](Self::add_segment).
#[derive(Debug)]
pub struct StreetMap {
    index:         CoordIndex<Vec<StreetSegment>>,
    segment_count: usize,
}

impl StreetMap {
    /// An empty map using the default index configuration.
    pub fn new() -> Self {
        Self::with_config(&MapConfig::default())
    }

    pub fn with_config(config: &MapConfig) -> Self {
        Self {
            index:         CoordIndex::with_hasher(config.max_load_factor, CoordHasher),
            segment_count: 0,
        }
    }

    // ── Loading ───────────────────────────────────────────────────────────

    /// Reset the map, then load it from a map-data file.
    ///
    /// # Errors
    ///
    /// [`SpatialError::Io`](crate::SpatialError::Io) if the file cannot be
    /// read, [`SpatialError::Parse`](crate::SpatialError::Parse) on a
    /// malformed segment line.  On error the map is left empty.
    pub fn load(&mut self, path: &Path) -> SpatialResult<()> {
        self.clear();
        let file = File::open(path)?;
        self.load_reader(BufReader::new(file))
    }

    /// Like [`load`](Self::load) but accepts any buffered reader.
    pub fn load_reader<R: BufRead>(&mut self, reader: R) -> SpatialResult<()> {
        self.clear();
        for segment in parse_map_data(reader) {
            match segment {
                Ok(segment) => self.add_segment(segment),
                Err(e) => {
                    self.clear();
                    return Err(e);
                }
            }
        }
        tracing::info!(
            coords = self.coord_count(),
            segments = self.segment_count(),
            buckets = self.index.bucket_count(),
            "street map loaded"
        );
        Ok(())
    }

    /// Insert one segment in both directions.
    pub fn add_segment(&mut self, segment: StreetSegment) {
        let reverse = segment.reversed();
        self.push_outgoing(segment);
        self.push_outgoing(reverse);
    }

    /// Drop every segment.  The index keeps its configured load factor.
    pub fn clear(&mut self) {
        self.index.reset();
        self.segment_count = 0;
    }

    fn push_outgoing(&mut self, segment: StreetSegment) {
        match self.index.find_mut(&segment.start) {
            Some(outgoing) => outgoing.push(segment),
            None => {
                let key = segment.start.clone();
                self.index.associate(key, vec![segment]);
            }
        }
        self.segment_count += 1;
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// All segments starting at `coord`, or `None` if no segment touches it.
    #[inline]
    pub fn segments_from(&self, coord: &GeoCoord) -> Option<&[StreetSegment]> {
        self.index.find(coord).map(Vec::as_slice)
    }

    /// `true` if at least one segment starts at `coord`.
    #[inline]
    pub fn contains(&self, coord: &GeoCoord) -> bool {
        self.index.contains_key(coord)
    }

    /// Number of distinct coordinates.
    pub fn coord_count(&self) -> usize {
        self.index.len()
    }

    /// Number of directed segments (twice the number of loaded records).
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl Default for StreetMap {
    fn default() -> Self {
        Self::new()
    }
}
