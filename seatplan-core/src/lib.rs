//! Core data structures for seatplan
//!
//! This crate provides the fundamental types for venue seating plans:
//! seats, the section/row seat index, boundary points, the segment angle
//! calculator and the venue frame used to place seats in world space.

pub mod point;
pub mod seat;
pub mod seat_map;
pub mod boundary;
pub mod angle;
pub mod placement;
pub mod plan;
pub mod traits;
pub mod error;

pub use point::*;
pub use seat::*;
pub use seat_map::*;
pub use boundary::*;
pub use angle::*;
pub use placement::*;
pub use plan::*;
pub use traits::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point2, Point3, Vector2, Vector3};
