//! Boundary points of a seating plan
//!
//! The extreme seats on each axis plus the centroid. The view controller
//! uses the left and right extremes to keep the camera from swinging past
//! the edge of the seating plan.

use serde::{Deserialize, Serialize};

use crate::point::Point2d;
use crate::seat::Seat;
use crate::traits::Positioned;

/// Extreme points and centroid of a non-empty seat set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryPoints {
    /// Seat with the smallest X (first seen wins ties)
    pub leftmost: Point2d,
    /// Seat with the largest X
    pub rightmost: Point2d,
    /// Seat with the smallest Y
    pub frontmost: Point2d,
    /// Seat with the largest Y
    pub rearmost: Point2d,
    /// Mean of all seat coordinates; not necessarily a seat
    pub centroid: Point2d,
}

impl BoundaryPoints {
    /// Scan positioned items for extremes and centroid
    ///
    /// Returns `None` for an empty slice. The first item seeds all four
    /// extremes and only strictly better candidates replace them.
    pub fn locate<T: Positioned>(items: &[T]) -> Option<Self> {
        let (first, rest) = items.split_first()?;
        let seed = first.position();

        let mut leftmost = seed;
        let mut rightmost = seed;
        let mut frontmost = seed;
        let mut rearmost = seed;
        let mut sum = seed.coords;

        for item in rest {
            let p = item.position();
            if p.x < leftmost.x {
                leftmost = p;
            }
            if p.x > rightmost.x {
                rightmost = p;
            }
            if p.y < frontmost.y {
                frontmost = p;
            }
            if p.y > rearmost.y {
                rearmost = p;
            }
            sum += p.coords;
        }

        let centroid = Point2d::from(sum / items.len() as f64);
        Some(Self {
            leftmost,
            rightmost,
            frontmost,
            rearmost,
            centroid,
        })
    }

    /// Horizontal span between the left and right extremes
    pub fn width(&self) -> f64 {
        self.rightmost.x - self.leftmost.x
    }

    /// Vertical span between the front and rear extremes
    pub fn depth(&self) -> f64 {
        self.rearmost.y - self.frontmost.y
    }

    /// Axis-aligned box spanned by the extremes as `(min, max)`
    pub fn bounding_box(&self) -> (Point2d, Point2d) {
        (
            Point2d::new(self.leftmost.x, self.frontmost.y),
            Point2d::new(self.rightmost.x, self.rearmost.y),
        )
    }
}

/// Locate the boundary points of a seat sequence
pub fn locate(seats: &[Seat]) -> Option<BoundaryPoints> {
    BoundaryPoints::locate(seats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_locate_scenario() {
        let seats = vec![
            Seat::new("A-1-1", "1", 0.0, 0.0),
            Seat::new("A-1-2", "1", 10.0, 0.0),
            Seat::new("B-1-1", "1", 0.0, 20.0),
        ];
        let b = locate(&seats).unwrap();

        // A-1-1 and B-1-1 share X = 0; the first one seen wins
        assert_eq!(b.leftmost, Point2d::new(0.0, 0.0));
        assert_eq!(b.rightmost, Point2d::new(10.0, 0.0));
        assert_eq!(b.frontmost, Point2d::new(0.0, 0.0));
        assert_eq!(b.rearmost, Point2d::new(0.0, 20.0));
        assert_relative_eq!(b.centroid.x, 10.0 / 3.0, epsilon = 1e-9);
        assert_relative_eq!(b.centroid.y, 20.0 / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_locate_empty() {
        assert!(locate(&[]).is_none());
    }

    #[test]
    fn test_single_seat_seeds_everything() {
        let seats = vec![Seat::new("A-1-1", "1", 4.0, -3.0)];
        let b = locate(&seats).unwrap();
        let p = Point2d::new(4.0, -3.0);
        assert_eq!(b.leftmost, p);
        assert_eq!(b.rightmost, p);
        assert_eq!(b.frontmost, p);
        assert_eq!(b.rearmost, p);
        assert_eq!(b.centroid, p);
        assert_eq!(b.width(), 0.0);
    }

    #[test]
    fn test_ties_keep_first_seen() {
        let seats = vec![
            Seat::new("A-1-1", "1", 5.0, 1.0),
            Seat::new("A-1-2", "1", 5.0, 2.0),
            Seat::new("A-1-3", "1", 5.0, 3.0),
        ];
        let b = locate(&seats).unwrap();
        assert_eq!(b.leftmost, Point2d::new(5.0, 1.0));
        assert_eq!(b.rightmost, Point2d::new(5.0, 1.0));
    }

    #[test]
    fn test_bounding_box_and_spans() {
        let points = vec![
            Point2d::new(-2.0, 1.0),
            Point2d::new(6.0, 3.0),
            Point2d::new(1.0, 9.0),
        ];
        let b = BoundaryPoints::locate(&points).unwrap();
        assert_eq!(b.width(), 8.0);
        assert_eq!(b.depth(), 8.0);
        assert_eq!(
            b.bounding_box(),
            (Point2d::new(-2.0, 1.0), Point2d::new(6.0, 9.0))
        );
    }
}
