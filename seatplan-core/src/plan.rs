//! A loaded seating plan session

use log::debug;
use serde::{Deserialize, Serialize};

use crate::boundary::BoundaryPoints;
use crate::error::Result;
use crate::placement::{place_seats, PlacementConfig, SeatPlacement, VenueFrame};
use crate::point::Point2d;
use crate::seat::{PlanSize, Seat, StageShape};
use crate::seat_map::SeatMap;

/// Everything derived from one seating feed response
///
/// Built once per load. Seats, index and boundary are never mutated
/// afterwards; a new feed produces a new plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatingPlan {
    pub seats: Vec<Seat>,
    pub seat_map: SeatMap,
    /// `None` when the feed has no seats
    pub boundary: Option<BoundaryPoints>,
    pub stage: Option<StageShape>,
    pub size: PlanSize,
}

impl SeatingPlan {
    /// Index the seats and locate the boundary
    ///
    /// Fails on the first malformed seat record; no partial plan is built.
    pub fn build(seats: Vec<Seat>, stage: Option<StageShape>, size: PlanSize) -> Result<Self> {
        let seat_map = SeatMap::index(&seats)?;
        let boundary = BoundaryPoints::locate(&seats);
        debug!(
            "Indexed {} seats into {} sections ({}x{} plan)",
            seats.len(),
            seat_map.section_count(),
            size.width,
            size.height
        );

        Ok(Self {
            seats,
            seat_map,
            boundary,
            stage,
            size,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Frame used to place seats and interpret selections
    pub fn frame(&self) -> VenueFrame {
        VenueFrame::from(self.size)
    }

    /// Point the seat-view camera faces, in feed coordinates
    ///
    /// The stage centre when the feed carries a stage record, otherwise the
    /// front centre of the plan.
    pub fn forward_anchor(&self) -> Point2d {
        match &self.stage {
            Some(stage) => stage.center(),
            None => Point2d::new(self.size.width / 2.0, 0.0),
        }
    }

    /// World placement of every seat
    pub fn placements(&self, config: &PlacementConfig) -> Vec<SeatPlacement> {
        place_seats(&self.seat_map, &self.frame(), config)
    }
}
