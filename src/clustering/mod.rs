//! Multi-restart k-means clustering.
//!
//! - [`Cluster`]: centroid plus assigned points
//! - [`kmeans`]: single-round primitives and one full restart
//! - [`KmeansConfig`]: restart count, convergence threshold, safety cap
//! - [`ClusteringResult`]: the best restart of a run

mod cluster;
mod config;
pub mod kmeans;
mod result;

pub use cluster::Cluster;
pub use config::{EmptyClusterPolicy, KmeansConfig};
pub use kmeans::RestartOutcome;
pub use result::ClusteringResult;
