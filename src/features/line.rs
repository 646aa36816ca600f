//! Infinite line in standard form.
//!
//! Lines are stored as the three coefficients of `a·x + b·y + c = 0`
//! exactly as given. No normalization is applied, so two lines describing
//! the same geometry with scaled coefficients are distinct values.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::core::Point2D;
use crate::error::{FitError, Result};

/// Coordinate axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis
    X,
    /// Vertical axis
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// A 2D line `a·x + b·y + c = 0`.
///
/// # Invariant
///
/// `a` and `b` are never both zero; [`StandardLine::new`] rejects such
/// coefficients with [`FitError::DegenerateLine`].
///
/// # Equality
///
/// Structural and exact: equal iff all three coefficients are equal.
/// `0.0` and `-0.0` compare equal and hash alike.
#[derive(Clone, Copy, Debug)]
pub struct StandardLine {
    a: f64,
    b: f64,
    c: f64,
}

impl StandardLine {
    /// Create a line from its standard-form coefficients.
    ///
    /// # Errors
    /// [`FitError::DegenerateLine`] if `a == 0` and `b == 0`.
    ///
    /// # Example
    /// ```
    /// use ganita::features::StandardLine;
    ///
    /// let line = StandardLine::new(2.0, 4.0, 8.0).unwrap();
    /// assert_eq!(line.y_at(0.0).unwrap(), -2.0);
    /// assert!(StandardLine::new(0.0, 0.0, 10.0).is_err());
    /// ```
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        if a == 0.0 && b == 0.0 {
            return Err(FitError::DegenerateLine);
        }
        Ok(Self { a, b, c })
    }

    /// Coefficient of x.
    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Coefficient of y.
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Constant term.
    #[inline]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Y coordinate of the line at `x`: `-(a·x + c) / b`.
    ///
    /// # Errors
    /// [`FitError::NotInvertible`] when `b` is exactly zero.
    #[inline]
    pub fn y_at(&self, x: f64) -> Result<f64> {
        if self.b == 0.0 {
            return Err(FitError::NotInvertible { axis: Axis::Y });
        }
        Ok(-((self.a * x + self.c) / self.b))
    }

    /// X coordinate of the line at `y`: `-(b·y + c) / a`.
    ///
    /// # Errors
    /// [`FitError::NotInvertible`] when `a` is exactly zero.
    #[inline]
    pub fn x_at(&self, y: f64) -> Result<f64> {
        if self.a == 0.0 {
            return Err(FitError::NotInvertible { axis: Axis::X });
        }
        Ok(-((self.b * y + self.c) / self.a))
    }

    /// Perpendicular distance from a point to the line.
    #[inline]
    pub fn distance_to_point(&self, point: Point2D) -> f64 {
        (self.a * point.x + self.b * point.y + self.c).abs() / self.a.hypot(self.b)
    }

    /// Bit patterns used for equality and hashing, with `-0.0` folded to `0.0`.
    fn key(&self) -> [u64; 3] {
        [self.a, self.b, self.c].map(|v| if v == 0.0 { 0 } else { v.to_bits() })
    }
}

impl PartialEq for StandardLine {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for StandardLine {}

impl Hash for StandardLine {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for StandardLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x + {}y + {} = 0", self.a, self.b, self.c)
    }
}
