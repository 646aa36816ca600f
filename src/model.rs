//! Point store with line fitting and clustering queries.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::clustering::kmeans::{self, RestartOutcome};
use crate::clustering::{ClusteringResult, KmeansConfig};
use crate::config::ConfigError;
use crate::core::Point2D;
use crate::error::{FitError, Result};
use crate::features::StandardLine;
use crate::regression;

/// An append-only, insertion-ordered collection of points.
///
/// Queries never mutate the points, so a shared `&DataModel` can serve
/// several `fit_line` / `kmeans_with_rng` calls at once.
///
/// # Example
/// ```
/// use ganita::{DataModel, core::Point2D};
///
/// let mut model = DataModel::new();
/// model.add(Point2D::new(-1.0, -1.0));
/// model.add(Point2D::new(1.0, 1.0));
///
/// let line = model.fit_line().unwrap();
/// assert!((line.y_at(3.0).unwrap() - 3.0).abs() < 1e-9);
///
/// let labels = model.kmeans(2).unwrap();
/// assert_eq!(labels.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DataModel {
    points: Vec<Point2D>,
    config: KmeansConfig,
}

impl DataModel {
    /// Create an empty model with the default clustering configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty model with a custom clustering configuration.
    ///
    /// The configuration is checked when clustering runs; an invalid one
    /// makes every `kmeans*` call return [`FitError::InvalidConfig`].
    pub fn with_config(config: KmeansConfig) -> Self {
        Self {
            points: Vec::new(),
            config,
        }
    }

    /// Clustering configuration.
    pub fn config(&self) -> &KmeansConfig {
        &self.config
    }

    /// Append one point.
    pub fn add(&mut self, point: Point2D) {
        self.points.push(point);
    }

    /// All points, in insertion order.
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the model holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Orthogonal line of best fit.
    ///
    /// # Errors
    /// - [`FitError::InsufficientData`] with fewer than 2 points
    /// - [`FitError::NoPrincipalAxis`] when the points have no preferred
    ///   direction
    pub fn fit_line(&self) -> Result<StandardLine> {
        let line = regression::fit_line(&self.points)?;
        log::debug!("Fitted {} to {} points", line, self.points.len());
        Ok(line)
    }

    /// Cluster the points into `k` groups.
    ///
    /// Runs `config.restarts` independent restarts and returns the cluster
    /// index of each point from the restart with the lowest mean error.
    /// Uses a `StdRng` seeded from `config.seed` when set, otherwise the
    /// thread-local generator.
    ///
    /// # Errors
    /// - [`FitError::InvalidConfig`] for an out-of-range configuration
    /// - [`FitError::InvalidK`] unless `1 <= k <= len()`
    pub fn kmeans(&self, k: usize) -> Result<Vec<usize>> {
        Ok(self.cluster(k)?.assignments)
    }

    /// [`DataModel::kmeans`] returning the full [`ClusteringResult`].
    pub fn cluster(&self, k: usize) -> Result<ClusteringResult> {
        match self.config.seed {
            Some(seed) => self.kmeans_detailed(k, &mut StdRng::seed_from_u64(seed)),
            None => self.kmeans_detailed(k, &mut rand::rng()),
        }
    }

    /// [`DataModel::kmeans`] with an explicit randomness source.
    pub fn kmeans_with_rng<R: Rng + ?Sized>(&self, k: usize, rng: &mut R) -> Result<Vec<usize>> {
        Ok(self.kmeans_detailed(k, rng)?.assignments)
    }

    /// Full clustering run, reporting every restart's error.
    ///
    /// Restarts draw their seeds from `rng` in turn; no restart sees
    /// another's intermediate state.
    ///
    /// # Errors
    /// - [`FitError::InvalidConfig`] if the configuration fails
    ///   [`KmeansConfig::validate`]
    /// - [`FitError::InvalidK`] unless `1 <= k <= len()`
    pub fn kmeans_detailed<R: Rng + ?Sized>(
        &self,
        k: usize,
        rng: &mut R,
    ) -> Result<ClusteringResult> {
        self.config.validate()?;
        kmeans::validate_k(k, self.points.len())?;

        let restarts = self.config.restarts;
        let mut outcomes: Vec<RestartOutcome> = Vec::with_capacity(restarts);
        for restart in 0..restarts {
            let outcome = kmeans::run_restart(&self.points, k, &self.config, rng)?;
            log::debug!(
                "k-means restart {}: error {:.6} after {} iterations{}",
                restart,
                outcome.mean_error,
                outcome.iterations,
                if outcome.converged { "" } else { " (not converged)" }
            );
            outcomes.push(outcome);
        }

        let result = ClusteringResult::select_best(outcomes).ok_or(FitError::InvalidConfig(
            ConfigError::invalid("kmeans.restarts", "must be at least 1"),
        ))?;
        log::debug!(
            "k-means k={}: kept restart {} with error {:.6}",
            k,
            result.best_restart,
            result.mean_error
        );
        Ok(result)
    }
}

impl FromIterator<Point2D> for DataModel {
    fn from_iter<I: IntoIterator<Item = Point2D>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
            config: KmeansConfig::default(),
        }
    }
}

impl Extend<Point2D> for DataModel {
    fn extend<I: IntoIterator<Item = Point2D>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}
