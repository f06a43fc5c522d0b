//! Core traits for seatplan

use crate::point::Point2d;

/// Anything that occupies a single point on the seating plan
pub trait Positioned {
    /// Position in venue-local plan units
    fn position(&self) -> Point2d;
}

impl Positioned for Point2d {
    fn position(&self) -> Point2d {
        *self
    }
}

impl<T: Positioned> Positioned for &T {
    fn position(&self) -> Point2d {
        (*self).position()
    }
}
