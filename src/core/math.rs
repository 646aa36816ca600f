//! Angle conversion and point-set helpers.
//!
//! Line fitting works in degrees internally (the half-angle step is stated
//! in degrees), so both conversions live here next to the centroid helper.

use std::f64::consts::PI;

use super::Point2D;

/// Convert degrees to radians.
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees.
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Compute the centroid of a set of points.
///
/// Returns `None` for an empty set.
///
/// # Example
/// ```
/// use ganita::core::{Point2D, math::compute_centroid};
///
/// let points = [Point2D::new(10.0, 10.0), Point2D::new(30.0, 30.0)];
/// let centroid = compute_centroid(points.iter()).unwrap();
/// assert_eq!(centroid, Point2D::new(20.0, 20.0));
/// ```
#[inline]
pub fn compute_centroid<'a, I>(points: I) -> Option<Point2D>
where
    I: IntoIterator<Item = &'a Point2D>,
{
    let mut sum = Point2D::ZERO;
    let mut n = 0usize;

    for &p in points {
        sum = sum + p;
        n += 1;
    }

    if n == 0 {
        return None;
    }

    let n = n as f64;
    Some(Point2D::new(sum.x / n, sum.y / n))
}
