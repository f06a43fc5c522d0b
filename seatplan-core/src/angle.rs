//! Angle between directed line segments

use crate::error::{Error, Result};
use crate::point::{Point2d, Vector2d};

/// Angle in degrees between segment `p1a -> p2a` and segment `p1b -> p2b`
///
/// The result lies in `[0, 180]`. Identical directions give exactly `0` and
/// opposite directions exactly `180`. A zero-length segment has no direction
/// and fails with [`Error::DegenerateGeometry`].
pub fn angle_between(p1a: &Point2d, p2a: &Point2d, p1b: &Point2d, p2b: &Point2d) -> Result<f64> {
    angle_between_vectors(&(p2a - p1a), &(p2b - p1b))
}

/// Angle in degrees between two direction vectors
pub fn angle_between_vectors(d1: &Vector2d, d2: &Vector2d) -> Result<f64> {
    let s1 = d1.amax();
    let s2 = d2.amax();
    if s1 == 0.0 || s2 == 0.0 {
        return Err(Error::DegenerateGeometry(
            "zero-length direction vector".to_string(),
        ));
    }

    // Scale by the largest component so the squared norms lie in [1, 2]
    let u1 = d1 / s1;
    let u2 = d2 / s2;
    let denom = (u1.norm_squared() * u2.norm_squared()).sqrt();
    let cos = u1.dot(&u2) / denom;
    if !cos.is_finite() {
        return Err(Error::DegenerateGeometry(format!(
            "direction vectors {:?} and {:?} have no defined angle",
            d1, d2
        )));
    }

    if cos >= 1.0 {
        Ok(0.0)
    } else if cos <= -1.0 {
        Ok(180.0)
    } else {
        Ok(cos.acos().to_degrees())
    }
}

/// Fold an obtuse angle onto its acute supplement (`a > 90 -> 180 - a`)
pub fn reflect_obtuse(angle_deg: f64) -> f64 {
    if angle_deg > 90.0 {
        180.0 - angle_deg
    } else {
        angle_deg
    }
}
