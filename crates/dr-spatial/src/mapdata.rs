//! Text map-data parser.
//!
//! # Format
//!
//! Line oriented.  Each street is a name line, a segment-count line, then
//! one line per segment with four whitespace-separated coordinate
//! components:
//!
//! ```text
//! 10th Helena Drive
//! 1
//! 34.0547000 -118.4794734 34.0544590 -118.4801137
//! 12th Street
//! 2
//! 34.0158311 -118.4909753 34.0154241 -118.4914026
//! 34.0154241 -118.4914026 34.0150178 -118.4918301
//! ```
//!
//! | Line shape                         | Meaning                              |
//! |------------------------------------|--------------------------------------|
//! | contains any alphabetic character  | street name (words re-joined by " ") |
//! | fewer than four fields             | segment count or blank: skipped      |
//! | four (or more) fields              | `start-lat start-lon end-lat end-lon`|
//!
//! The count lines are not checked against the number of segment lines
//! that follow; segments simply take the most recent street name.

use std::io::{BufRead, Lines};

use dr_core::{GeoCoord, StreetSegment};

use crate::{SpatialError, SpatialResult};

/// Parse map data from `reader`, yielding segments in file order.
///
/// The parser is lazy; errors surface as the offending line is reached.
pub fn parse_map_data<R: BufRead>(reader: R) -> MapDataParser<R> {
    MapDataParser::new(reader)
}

/// Streaming iterator over the street segments of a map-data source.
pub struct MapDataParser<R> {
    lines:       Lines<R>,
    line_no:     usize,
    street_name: Option<String>,
    failed:      bool,
}

impl<R: BufRead> MapDataParser<R> {
    pub fn new(reader: R) -> Self {
        Self { lines: reader.lines(), line_no: 0, street_name: None, failed: false }
    }

    /// 1-based number of the last line read.
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    fn parse_segment(&self, fields: &[&str]) -> SpatialResult<StreetSegment> {
        let Some(name) = &self.street_name else {
            return Err(self.error("segment appears before any street name".to_owned()));
        };
        let coord = |lat: &str, lon: &str| {
            GeoCoord::new(lat, lon).map_err(|e| self.error(e.to_string()))
        };
        let start = coord(fields[0], fields[1])?;
        let end = coord(fields[2], fields[3])?;
        Ok(StreetSegment::new(start, end, name.clone()))
    }

    fn error(&self, message: String) -> SpatialError {
        SpatialError::Parse { line: self.line_no, message }
    }
}

impl<R: BufRead> Iterator for MapDataParser<R> {
    type Item = SpatialResult<StreetSegment>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(SpatialError::Io(e)));
                }
            };
            self.line_no += 1;

            if line.chars().any(char::is_alphabetic) {
                self.street_name = Some(line.split_whitespace().collect::<Vec<_>>().join(" "));
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 4 {
                continue;
            }
            if fields.len() > 4 {
                tracing::warn!(line = self.line_no, "ignoring extra fields after segment coordinates");
            }

            let segment = self.parse_segment(&fields);
            self.failed = segment.is_err();
            return Some(segment);
        }
    }
}
