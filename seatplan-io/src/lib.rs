//! Seating feed I/O
//!
//! This crate decodes seating-service responses and provides the data
//! sources the rest of seatplan loads plans from.

pub mod feed;
pub mod source;
pub mod error;

pub use error::*;
pub use feed::SeatingPlanDocument;
pub use source::{JsonFileSource, SeatingDataSource, StaticSource};

use log::{info, warn};
use seatplan_core::{Result, SeatingPlan};

/// Fetch a performance's feed and build the seating plan from it
///
/// Any failure (missing feed, bad JSON, malformed seat record) is returned
/// as is; the caller keeps whatever plan it had before.
pub fn load_plan(source: &dyn SeatingDataSource, performance_id: u64) -> Result<SeatingPlan> {
    let result = source
        .fetch(performance_id)
        .and_then(SeatingPlanDocument::into_plan);

    match &result {
        Ok(plan) => info!(
            "Loaded performance {} from {} source: {} seats in {} sections",
            performance_id,
            source.source_name(),
            plan.seats.len(),
            plan.seat_map.section_count()
        ),
        Err(e) => warn!(
            "Failed to load performance {} from {} source: {}",
            performance_id,
            source.source_name(),
            e
        ),
    }

    result
}

/// Read a feed document from a file, choosing the decoder by extension
pub fn read_document<P: AsRef<std::path::Path>>(path: P) -> Result<SeatingPlanDocument> {
    let path = path.as_ref();
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => {
            let file = std::fs::File::open(path)?;
            SeatingPlanDocument::from_reader(std::io::BufReader::new(file))
        }
        _ => Err(seatplan_core::Error::UnsupportedFormat(format!(
            "Unsupported seating feed format: {:?}",
            path.extension()
        ))),
    }
}
