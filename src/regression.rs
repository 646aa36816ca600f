//! Orthogonal (total least squares) line fitting.
//!
//! TLS minimizes perpendicular distances to the line rather than vertical
//! residuals, so steep and vertical point sets fit as well as flat ones.
//! The derivation works in angle space instead of slope space:
//!
//! 1. Means `x̄`, `ȳ` and the sums of squares `Sxx`, `Syy`, `Sxy`
//! 2. Rotation ratio `r = 2·Sxy / (Sxx − Syy)` (may be ±∞)
//! 3. `θ = atan(r)` in degrees
//! 4. If `f(θ) = (Syy − Sxx)·cos θ − 2·Sxy·sin θ ≤ 0`, use `θ + 180°`
//! 5. `a = cos(θ/2)`, `b = sin(θ/2)`, `c = −a·x̄ − b·ȳ`
//!
//! `(a, b)` is the unit normal of the fitted line, pointing along the
//! direction of least variance, and the line passes through `(x̄, ȳ)`.

use crate::core::Point2D;
use crate::core::math::{deg_to_rad, rad_to_deg};
use crate::error::{FitError, Result};
use crate::features::StandardLine;

/// Minimum number of points for any regression statistic.
pub const MIN_POINTS: usize = 2;

/// Centered sums of squares of a point set.
///
/// Represents the (unnormalized) scatter matrix:
/// ```text
/// | sxx  sxy |
/// | sxy  syy |
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SumsOfSquares {
    /// Σ(x − x̄)²
    pub sxx: f64,
    /// Σ(y − ȳ)²
    pub syy: f64,
    /// Σ(x − x̄)(y − ȳ)
    pub sxy: f64,
}

fn require_points(points: &[Point2D]) -> Result<()> {
    if points.len() < MIN_POINTS {
        return Err(FitError::InsufficientData {
            found: points.len(),
        });
    }
    Ok(())
}

/// Arithmetic mean of the x coordinates.
pub fn average_x(points: &[Point2D]) -> Result<f64> {
    require_points(points)?;
    Ok(points.iter().map(|p| p.x).sum::<f64>() / points.len() as f64)
}

/// Arithmetic mean of the y coordinates.
pub fn average_y(points: &[Point2D]) -> Result<f64> {
    require_points(points)?;
    Ok(points.iter().map(|p| p.y).sum::<f64>() / points.len() as f64)
}

/// Compute `Sxx`, `Syy` and `Sxy` around a precomputed mean in one pass.
///
/// # Example
/// ```
/// use ganita::core::Point2D;
/// use ganita::regression::sums_of_squares;
///
/// let points: Vec<Point2D> = (1..=9).map(|i| Point2D::new(3.0 * i as f64, 0.0)).collect();
/// let sums = sums_of_squares(&points, Point2D::new(15.0, 0.0)).unwrap();
/// assert!((sums.sxx - 540.0).abs() < 0.01);
/// ```
pub fn sums_of_squares(points: &[Point2D], mean: Point2D) -> Result<SumsOfSquares> {
    require_points(points)?;

    let mut sums = SumsOfSquares::default();
    for &p in points {
        let d = p - mean;
        sums.sxx += d.x * d.x;
        sums.syy += d.y * d.y;
        sums.sxy += d.x * d.y;
    }
    Ok(sums)
}

/// Rotation ratio `2·Sxy / (Sxx − Syy)`.
///
/// When `Sxx == Syy` the result is ±∞, which is a valid input to
/// [`principal_angle`] (it yields ±90°). It is NaN only when additionally
/// `Sxy == 0`.
#[inline]
pub fn rotation_ratio(sums: &SumsOfSquares) -> f64 {
    (2.0 * sums.sxy) / (sums.sxx - sums.syy)
}

/// `atan(ratio)` in degrees, in `[-90, 90]`.
#[inline]
pub fn principal_angle(ratio: f64) -> f64 {
    rad_to_deg(ratio.atan())
}

/// `f(θ) = (Syy − Sxx)·cos θ − 2·Sxy·sin θ`, with `θ` in degrees.
#[inline]
pub fn orientation_test(theta: f64, sums: &SumsOfSquares) -> f64 {
    let t = deg_to_rad(theta);
    (sums.syy - sums.sxx) * t.cos() - 2.0 * sums.sxy * t.sin()
}

/// Pick the candidate angle whose half-angle is the least-variance normal.
///
/// Returns `theta` if `f(θ) > 0`, otherwise `theta + 180`.
#[inline]
pub fn orient_angle(theta: f64, sums: &SumsOfSquares) -> f64 {
    if orientation_test(theta, sums) <= 0.0 {
        theta + 180.0
    } else {
        theta
    }
}

/// Build the line with normal angle `theta / 2` through `mean`.
pub fn line_through(theta: f64, mean: Point2D) -> Result<StandardLine> {
    let half = deg_to_rad(theta / 2.0);
    let a = half.cos();
    let b = half.sin();
    let c = -a * mean.x - b * mean.y;
    StandardLine::new(a, b, c)
}

/// Fit a line to a set of points by orthogonal regression.
///
/// # Errors
/// - [`FitError::InsufficientData`] for fewer than 2 points
/// - [`FitError::NoPrincipalAxis`] when the spread has no preferred
///   direction (all points coincident, or `Sxx == Syy` with `Sxy == 0`)
///
/// # Example
/// ```
/// use ganita::core::Point2D;
/// use ganita::regression::fit_line;
///
/// let points = [Point2D::new(1.0, 1.0), Point2D::new(2.0, 2.0), Point2D::new(3.0, 3.0)];
/// let line = fit_line(&points).unwrap();
/// assert!((line.y_at(5.0).unwrap() - 5.0).abs() < 1e-9);
/// ```
pub fn fit_line(points: &[Point2D]) -> Result<StandardLine> {
    let mean = Point2D::new(average_x(points)?, average_y(points)?);
    let sums = sums_of_squares(points, mean)?;

    let ratio = rotation_ratio(&sums);
    if ratio.is_nan() {
        return Err(FitError::NoPrincipalAxis);
    }

    let theta = orient_angle(principal_angle(ratio), &sums);
    line_through(theta, mean)
}
