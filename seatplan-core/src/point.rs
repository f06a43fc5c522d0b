//! Point types and related functionality

use nalgebra::{Point2, Point3, Vector2, Vector3};

/// A point on the seating plan, in venue-local units
pub type Point2d = Point2<f64>;

/// A direction on the seating plan
pub type Vector2d = Vector2<f64>;

/// A point in render world space (y is up)
pub type Point3d = Point3<f64>;

/// A world space vector
pub type Vector3d = Vector3<f64>;
