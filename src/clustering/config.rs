//! Configuration for multi-restart k-means.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::config::defaults;

/// What to do when a cluster ends an assignment pass with no points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyClusterPolicy {
    /// Keep the cluster's previous centroid and continue.
    #[default]
    Retain,
    /// Abort the run with `FitError::EmptyCluster`.
    Fail,
}

/// Configuration for [`DataModel::kmeans`](crate::DataModel::kmeans).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KmeansConfig {
    /// Number of independent restarts; the lowest-error one is kept.
    /// Default: 10
    #[serde(default = "defaults::kmeans_restarts")]
    pub restarts: usize,

    /// A restart stops once the relative change in mean error between
    /// two iterations drops below this.
    /// Default: 0.01 (1%)
    #[serde(default = "defaults::kmeans_convergence_threshold")]
    pub convergence_threshold: f64,

    /// Upper bound on iterations per restart. At least 2, since the first
    /// iteration has no previous error to converge against.
    /// Default: 100
    #[serde(default = "defaults::kmeans_max_iterations")]
    pub max_iterations: usize,

    /// Handling of clusters that receive no points.
    /// Default: retain previous centroid
    #[serde(default)]
    pub empty_cluster: EmptyClusterPolicy,

    /// Fixed RNG seed for reproducible runs. `None` seeds from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for KmeansConfig {
    fn default() -> Self {
        Self {
            restarts: defaults::kmeans_restarts(),
            convergence_threshold: defaults::kmeans_convergence_threshold(),
            max_iterations: defaults::kmeans_max_iterations(),
            empty_cluster: EmptyClusterPolicy::default(),
            seed: None,
        }
    }
}

impl KmeansConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the restart count.
    pub fn with_restarts(mut self, restarts: usize) -> Self {
        self.restarts = restarts;
        self
    }

    /// Builder-style setter for the convergence threshold.
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Builder-style setter for the per-restart iteration cap.
    pub fn with_max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = iterations;
        self
    }

    /// Builder-style setter for the empty-cluster policy.
    pub fn with_empty_cluster(mut self, policy: EmptyClusterPolicy) -> Self {
        self.empty_cluster = policy;
        self
    }

    /// Builder-style setter for a fixed RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that every parameter is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.restarts == 0 {
            return Err(ConfigError::invalid("kmeans.restarts", "must be at least 1"));
        }
        if self.max_iterations < 2 {
            return Err(ConfigError::invalid(
                "kmeans.max_iterations",
                "must be at least 2",
            ));
        }
        if !self.convergence_threshold.is_finite() || self.convergence_threshold < 0.0 {
            return Err(ConfigError::invalid(
                "kmeans.convergence_threshold",
                "must be a finite, non-negative number",
            ));
        }
        Ok(())
    }
}
