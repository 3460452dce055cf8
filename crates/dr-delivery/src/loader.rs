//! Deliveries-file loader.
//!
//! # Format
//!
//! ```text
//! 34.0625329 -118.4470263
//! 34.0712323 -118.4505969:Chicken tenders
//! 34.0687443 -118.4449195:B-Plate salmon
//! ```
//!
//! The first non-blank line is the depot.  Every following non-blank line is
//! one delivery: a coordinate, a `:`, then the item name (which may be
//! empty or contain further colons).

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use dr_core::{DeliveryRequest, GeoCoord};

use crate::{DeliveryError, DeliveryResult};

/// A depot and the deliveries to make from it, in file order.
#[derive(Clone, Debug, PartialEq)]
pub struct DeliveryManifest {
    pub depot:      GeoCoord,
    pub deliveries: Vec<DeliveryRequest>,
}

/// Load a deliveries file.
pub fn load_deliveries(path: &Path) -> DeliveryResult<DeliveryManifest> {
    let file = File::open(path)?;
    load_deliveries_reader(BufReader::new(file))
}

/// Like [`load_deliveries`] but accepts any buffered reader.
pub fn load_deliveries_reader<R: BufRead>(reader: R) -> DeliveryResult<DeliveryManifest> {
    let mut depot: Option<GeoCoord> = None;
    let mut deliveries = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        match depot {
            None => depot = Some(parse_coord(&line, line_no)?),
            Some(_) => {
                let Some((coord, item)) = line.split_once(':') else {
                    return Err(DeliveryError::Parse {
                        line:    line_no,
                        message: "expected \"<lat> <lon>:<item>\"".to_owned(),
                    });
                };
                let location = parse_coord(coord, line_no)?;
                deliveries.push(DeliveryRequest::new(item.trim(), location));
            }
        }
    }

    let Some(depot) = depot else {
        return Err(DeliveryError::Parse { line: 0, message: "no depot line".to_owned() });
    };
    tracing::info!(%depot, deliveries = deliveries.len(), "deliveries loaded");
    Ok(DeliveryManifest { depot, deliveries })
}

fn parse_coord(text: &str, line: usize) -> DeliveryResult<GeoCoord> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let [lat, lon] = fields.as_slice() else {
        return Err(DeliveryError::Parse {
            line,
            message: format!("expected \"<lat> <lon>\", got {:?}", text.trim()),
        });
    };
    GeoCoord::new(lat, lon).map_err(|e| DeliveryError::Parse { line, message: e.to_string() })
}
