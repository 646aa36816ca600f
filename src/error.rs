//! Error types for line fitting and clustering.
//!
//! Every variant is a local precondition violation. Nothing is retried and
//! no partial result is returned alongside an error.

use thiserror::Error;

use crate::config::ConfigError;
use crate::features::Axis;

/// Errors raised by the fitting and clustering routines.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum FitError {
    /// Line fitting needs at least two points.
    #[error("line fitting needs at least 2 points, got {found}")]
    InsufficientData {
        /// Number of points available.
        found: usize,
    },

    /// A standard-form line with `a == 0` and `b == 0` has no direction.
    #[error("line coefficients a and b cannot both be zero")]
    DegenerateLine,

    /// The line has no unique value on the requested axis.
    #[error("line has no unique {axis} coordinate (its {axis} coefficient is zero)")]
    NotInvertible {
        /// Axis whose coordinate was requested.
        axis: Axis,
    },

    /// Cluster count outside `1..=points`.
    #[error("k must be between 1 and {points}, got {k}")]
    InvalidK {
        /// Requested cluster count.
        k: usize,
        /// Number of points in the data set.
        points: usize,
    },

    /// Centroid recompute on a cluster with no assigned points.
    #[error("cluster {index} has no assigned points")]
    EmptyCluster {
        /// Index of the empty cluster.
        index: usize,
    },

    /// The point spread has no principal axis (rotation ratio is 0/0).
    #[error("point spread has no principal axis (coincident or isotropic points)")]
    NoPrincipalAxis,

    /// Clustering settings out of range.
    #[error("invalid clustering settings: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// Some points are not held by any cluster.
    #[error("{unassigned} points are not assigned to any cluster")]
    IncompleteAssignment {
        /// Number of points missing from every cluster.
        unassigned: usize,
    },
}

impl FitError {
    /// Short error code for logging.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InsufficientData { .. } => "INSUFFICIENT_DATA",
            Self::DegenerateLine => "DEGENERATE_LINE",
            Self::NotInvertible { .. } => "NOT_INVERTIBLE",
            Self::InvalidK { .. } => "INVALID_K",
            Self::EmptyCluster { .. } => "EMPTY_CLUSTER",
            Self::NoPrincipalAxis => "NO_PRINCIPAL_AXIS",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::IncompleteAssignment { .. } => "INCOMPLETE_ASSIGNMENT",
        }
    }
}

/// Result alias for fitting and clustering.
pub type Result<T> = std::result::Result<T, FitError>;
