//! Venue frame and seat placement
//!
//! Feed coordinates are mapped into a local frame centred on the plan
//! (`local = (W/2 - X, H/2 - Y)`). Sections are stacked vertically in
//! first-seen order and the whole seating group is turned half a revolution
//! about the vertical axis, so a local point `(x, y)` at elevation `z` lands
//! at world `(-x, z, -y)`.

use serde::{Deserialize, Serialize};

use crate::point::{Point2d, Point3d};
use crate::seat::{PlanSize, StageShape};
use crate::seat_map::SeatMap;

/// Mapping between feed coordinates, the centred local frame and world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VenueFrame {
    pub width: f64,
    pub height: f64,
}

impl VenueFrame {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Feed coordinates to the centred local frame
    pub fn to_local(&self, feed: &Point2d) -> Point2d {
        Point2d::new(self.width / 2.0 - feed.x, self.height / 2.0 - feed.y)
    }

    /// Local frame back to feed coordinates
    ///
    /// The mapping is a point reflection, so it is its own inverse and
    /// preserves angles between segments.
    pub fn to_feed(&self, local: &Point2d) -> Point2d {
        Point2d::new(self.width / 2.0 - local.x, self.height / 2.0 - local.y)
    }

    /// Local point at a given elevation to world space
    pub fn to_world(&self, local: &Point2d, elevation: f64) -> Point3d {
        Point3d::new(-local.x, elevation, -local.y)
    }
}

impl From<PlanSize> for VenueFrame {
    fn from(size: PlanSize) -> Self {
        Self::new(size.width, size.height)
    }
}

/// Layout parameters for stacking sections and lifting seat models
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Vertical distance between consecutive sections
    pub section_spacing: f64,
    /// Height of a seat model above its section floor
    pub seat_lift: f64,
    /// Colour used for seats without a category tag
    pub default_color: String,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            section_spacing: 50.0,
            seat_lift: 5.0,
            default_color: "grey".to_string(),
        }
    }
}

/// Elevation of the section at `index` among `count` sections
///
/// The first section sits highest and the last one on the ground.
pub fn section_elevation(index: usize, count: usize, spacing: f64) -> f64 {
    count.saturating_sub(1).saturating_sub(index) as f64 * spacing
}

/// Where a single seat model goes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatPlacement {
    pub seat_id: String,
    pub section: String,
    pub row: String,
    /// Position in the centred local frame
    pub local: Point2d,
    /// Section floor elevation
    pub elevation: f64,
    /// Seat model position in world space
    pub world: Point3d,
    pub color: String,
}

/// Place every seat of the map, in map iteration order
pub fn place_seats(map: &SeatMap, frame: &VenueFrame, config: &PlacementConfig) -> Vec<SeatPlacement> {
    let count = map.section_count();
    let mut placements = Vec::with_capacity(map.seat_count());

    for (index, (section, rows)) in map.sections().enumerate() {
        let elevation = section_elevation(index, count, config.section_spacing);
        for (row, seats) in rows {
            for seat in seats {
                let local = frame.to_local(&Point2d::new(seat.x, seat.y));
                placements.push(SeatPlacement {
                    seat_id: seat.id.clone(),
                    section: section.to_string(),
                    row: row.clone(),
                    local,
                    elevation,
                    world: frame.to_world(&local, elevation + config.seat_lift),
                    color: seat
                        .category
                        .clone()
                        .unwrap_or_else(|| config.default_color.clone()),
                });
            }
        }
    }

    placements
}

/// World-space centre of the stage rectangle
pub fn stage_world_center(stage: &StageShape) -> Point3d {
    Point3d::new(-stage.y, stage.height / 2.0, -stage.x)
}
