//! # seatplan
//!
//! Venue seating-plan geometry and seat-view camera transitions.
//!
//! This is the umbrella crate that provides convenient access to all seatplan
//! functionality. You can use this crate to get everything in one place, or use
//! individual crates for more granular control over dependencies.
//!
//! ## Features
//!
//! - **Core**: Seats, the section/row seat map, boundary points, angles and placement
//! - **I/O**: Seating feed documents and data sources
//! - **View**: Overview / seat-view controller, azimuth limits and camera tweening
//!
//! ## Quick Start
//!
//! ```rust
//! use seatplan::prelude::*;
//!
//! let seats = vec![
//!     Seat::new("Stalls-A-1", "A", 0.0, 100.0),
//!     Seat::new("Stalls-A-2", "A", 200.0, 100.0),
//!     Seat::new("Stalls-B-1", "B", 100.0, 150.0),
//! ];
//! let plan = SeatingPlan::build(seats, None, PlanSize::new(200.0, 200.0)).unwrap();
//! assert_eq!(plan.seat_map.section_count(), 1);
//!
//! let mut controller = ViewController::new(OrbitCamera::default(), ViewConfig::default());
//! controller.load(&plan);
//!
//! let placements = plan.placements(&controller.config().placement);
//! let token = controller.select_seat(SeatSelection::from_placement(&placements[2])).unwrap();
//! assert_eq!(controller.tick(std::time::Duration::from_secs(2)), Some(token));
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: Enables core, io and view
//! - `core`: Core geometry (always enabled)
//! - `io`: Seating feed decoding and data sources
//! - `view`: Camera control
//! - `all`: Enables all features

// Re-export core functionality
pub use seatplan_core::*;

// Re-export sub-crates
#[cfg(feature = "io")]
pub use seatplan_io as io;

#[cfg(feature = "view")]
pub use seatplan_view as view;

/// Convenient imports for common use cases
pub mod prelude {
    pub use seatplan_core::*;

    #[cfg(feature = "io")]
    pub use seatplan_io::{load_plan, read_document, JsonFileSource, SeatingDataSource, SeatingPlanDocument, StaticSource};

    #[cfg(feature = "view")]
    pub use seatplan_view::*;
}
