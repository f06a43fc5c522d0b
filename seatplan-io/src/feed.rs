//! Seating feed document model
//!
//! The seating-data service answers a performance request with a JSON
//! document holding the flat seat list, a list of shape records (the first
//! one is the stage) and the overall plan dimensions. Unknown fields are
//! ignored.

use std::io::Read;

use log::debug;
use serde::{Deserialize, Serialize};
use seatplan_core::{PlanSize, Result, Seat, SeatingPlan, StageShape};

use crate::error::IoError;

/// One seating feed response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SeatingPlanDocument {
    #[serde(default)]
    pub seats: Vec<Seat>,
    #[serde(default)]
    pub shapes: Vec<StageShape>,
    pub width: f64,
    pub height: f64,
}

impl SeatingPlanDocument {
    /// Decode a document from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: Self = serde_json::from_str(json).map_err(IoError::from)?;
        debug!("Decoded seating feed with {} seats", document.seats.len());
        Ok(document)
    }

    /// Decode a document from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let document: Self = serde_json::from_reader(reader).map_err(IoError::from)?;
        debug!("Decoded seating feed with {} seats", document.seats.len());
        Ok(document)
    }

    /// Encode the document back to JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self).map_err(IoError::from)?)
    }

    /// The stage rectangle: the first shape record, if any
    pub fn stage(&self) -> Option<StageShape> {
        self.shapes.first().copied()
    }

    pub fn size(&self) -> PlanSize {
        PlanSize::new(self.width, self.height)
    }

    /// Index the seats and derive the boundary
    pub fn into_plan(self) -> Result<SeatingPlan> {
        let stage = self.stage();
        let size = self.size();
        SeatingPlan::build(self.seats, stage, size)
    }
}
