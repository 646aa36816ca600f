//! Result of a full multi-restart clustering run.

use crate::core::Point2D;

use super::kmeans::RestartOutcome;

/// The lowest-error restart of a run, plus every restart's error.
#[derive(Clone, Debug)]
pub struct ClusteringResult {
    /// Cluster index per data point, in insertion order.
    pub assignments: Vec<usize>,
    /// Mean residual error of the chosen restart.
    pub mean_error: f64,
    /// Final centroids of the chosen restart, by cluster index.
    pub centroids: Vec<Point2D>,
    /// Position of the chosen restart in `restart_errors`.
    pub best_restart: usize,
    /// Mean residual error of every restart, in run order.
    pub restart_errors: Vec<f64>,
    /// Iterations the chosen restart took.
    pub iterations: usize,
}

impl ClusteringResult {
    /// Pick the restart with the strictly smallest error.
    ///
    /// Ties keep the earliest restart. Returns `None` for no outcomes.
    pub fn select_best(outcomes: Vec<RestartOutcome>) -> Option<Self> {
        let restart_errors: Vec<f64> = outcomes.iter().map(|o| o.mean_error).collect();

        let mut best_restart = None;
        for (i, &error) in restart_errors.iter().enumerate() {
            let better = match best_restart {
                None => true,
                Some(b) => error < restart_errors[b],
            };
            if better {
                best_restart = Some(i);
            }
        }

        let best_restart = best_restart?;
        let best = outcomes.into_iter().nth(best_restart)?;

        Some(Self {
            assignments: best.assignments,
            mean_error: best.mean_error,
            centroids: best.centroids,
            best_restart,
            restart_errors,
            iterations: best.iterations,
        })
    }

    /// Number of clusters.
    pub fn k(&self) -> usize {
        self.centroids.len()
    }
}
