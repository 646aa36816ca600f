//! A single k-means cluster.

use std::fmt;

use crate::core::Point2D;
use crate::core::math::compute_centroid;
use crate::error::{FitError, Result};

/// A centroid plus the points currently assigned to it.
///
/// Each assigned point is stored with its index in the data set, so the
/// final per-point report never has to match points by value.
#[derive(Clone, Debug)]
pub struct Cluster {
    index: usize,
    centroid: Point2D,
    members: Vec<usize>,
    points: Vec<Point2D>,
}

impl Cluster {
    /// Create an empty cluster seeded at `centroid`.
    pub fn new(index: usize, centroid: Point2D) -> Self {
        Self {
            index,
            centroid,
            members: Vec::new(),
            points: Vec::new(),
        }
    }

    /// Stable index of this cluster within one clustering run.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Current centroid.
    #[inline]
    pub fn centroid(&self) -> Point2D {
        self.centroid
    }

    /// Assigned points, in assignment order.
    #[inline]
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    /// Data-set indices of the assigned points, parallel to [`Cluster::points`].
    #[inline]
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Number of assigned points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if no points are assigned.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append the data point at `member` to this cluster.
    pub fn add_point(&mut self, member: usize, point: Point2D) {
        self.members.push(member);
        self.points.push(point);
    }

    /// Move the centroid to the mean of the assigned points.
    ///
    /// # Errors
    /// [`FitError::EmptyCluster`] if nothing is assigned. The previous
    /// centroid is left in place in that case.
    pub fn recompute_centroid(&mut self) -> Result<Point2D> {
        let centroid =
            compute_centroid(self.points.iter()).ok_or(FitError::EmptyCluster { index: self.index })?;
        self.centroid = centroid;
        Ok(centroid)
    }

    /// Clear the assignment list, keeping the centroid.
    pub fn reset(&mut self) {
        self.members.clear();
        self.points.clear();
    }

    /// Sum of distances from each assigned point to the centroid.
    pub fn residual(&self) -> f64 {
        self.points.iter().map(|p| p.distance(&self.centroid)).sum()
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.centroid)
    }
}
