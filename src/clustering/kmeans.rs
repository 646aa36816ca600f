//! Single-round k-means primitives and the per-restart loop.
//!
//! One restart is:
//!
//! ```text
//! seed k clusters from distinct random points
//! loop {
//!     reset assignments
//!     assign every point to its nearest centroid
//!     recompute centroids
//!     error = mean distance from points to their centroids
//!     stop when |error - previous| / previous < threshold
//! }
//! ```
//!
//! The first iteration has no previous error, so every restart runs at
//! least two iterations.

use rand::Rng;
use rand::seq::index;

use super::cluster::Cluster;
use super::config::{EmptyClusterPolicy, KmeansConfig};
use crate::core::Point2D;
use crate::error::{FitError, Result};

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: &Point2D, b: &Point2D) -> f64 {
    a.distance(b)
}

/// Check that `k` is in `1..=point_count`.
pub fn validate_k(k: usize, point_count: usize) -> Result<()> {
    if k == 0 || k > point_count {
        return Err(FitError::InvalidK {
            k,
            points: point_count,
        });
    }
    Ok(())
}

/// Seed `k` clusters at distinct data points chosen uniformly at random.
///
/// Sampling is without replacement over point indices, so duplicate
/// coordinates in the data may still produce coincident seeds.
///
/// # Errors
/// [`FitError::InvalidK`] if `k == 0` or `k > points.len()`.
pub fn seed_clusters<R: Rng + ?Sized>(
    points: &[Point2D],
    k: usize,
    rng: &mut R,
) -> Result<Vec<Cluster>> {
    validate_k(k, points.len())?;

    Ok(index::sample(rng, points.len(), k)
        .into_iter()
        .enumerate()
        .map(|(cluster_idx, point_idx)| Cluster::new(cluster_idx, points[point_idx]))
        .collect())
}

/// Assign a point to the cluster with the nearest centroid.
///
/// Exact ties go to the lowest cluster index. Returns the chosen cluster's
/// position, or `None` if `clusters` is empty.
pub fn assign(member: usize, point: Point2D, clusters: &mut [Cluster]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, cluster) in clusters.iter().enumerate() {
        let d = distance(&point, &cluster.centroid());
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((i, d)),
        }
    }

    let (i, _) = best?;
    clusters[i].add_point(member, point);
    Some(i)
}

/// Recompute every cluster's centroid from its assigned points.
///
/// # Errors
/// [`FitError::EmptyCluster`] for a cluster with no points when `policy`
/// is [`EmptyClusterPolicy::Fail`]. With [`EmptyClusterPolicy::Retain`]
/// such a cluster keeps its previous centroid.
pub fn recompute_centroids(clusters: &mut [Cluster], policy: EmptyClusterPolicy) -> Result<()> {
    for cluster in clusters.iter_mut() {
        if let Err(err) = cluster.recompute_centroid() {
            match policy {
                EmptyClusterPolicy::Retain => {
                    log::debug!(
                        "Cluster {} is empty, keeping centroid {}",
                        cluster.index(),
                        cluster.centroid()
                    );
                }
                EmptyClusterPolicy::Fail => return Err(err),
            }
        }
    }
    Ok(())
}

/// Mean distance from each assigned point to its cluster's centroid.
///
/// The sum runs over cluster members; `point_count` is the data-set size.
pub fn mean_error(point_count: usize, clusters: &[Cluster]) -> f64 {
    let total: f64 = clusters.iter().map(Cluster::residual).sum();
    total / point_count as f64
}

/// Clear every cluster's assignment list.
pub fn reset_assignments(clusters: &mut [Cluster]) {
    for cluster in clusters.iter_mut() {
        cluster.reset();
    }
}

/// Cluster index of every data point, in data-set order.
///
/// # Errors
/// [`FitError::IncompleteAssignment`] if some point index below
/// `point_count` is not a member of any cluster.
pub fn report_assignments(point_count: usize, clusters: &[Cluster]) -> Result<Vec<usize>> {
    let mut labels: Vec<Option<usize>> = vec![None; point_count];
    for cluster in clusters {
        for &member in cluster.members() {
            if let Some(slot) = labels.get_mut(member) {
                *slot = Some(cluster.index());
            }
        }
    }

    let unassigned = labels.iter().filter(|l| l.is_none()).count();
    if unassigned > 0 {
        return Err(FitError::IncompleteAssignment { unassigned });
    }
    Ok(labels.into_iter().flatten().collect())
}

/// Relative change `|current − previous| / previous`.
///
/// Defined as 0 when both are 0 (every point on its centroid) and +∞
/// when only `previous` is 0.
#[inline]
pub fn relative_change(previous: f64, current: f64) -> f64 {
    if previous == 0.0 {
        if current == 0.0 { 0.0 } else { f64::INFINITY }
    } else {
        (current - previous).abs() / previous
    }
}

/// Outcome of one restart.
#[derive(Clone, Debug)]
pub struct RestartOutcome {
    /// Cluster index per data point, in data-set order.
    pub assignments: Vec<usize>,
    /// Mean residual error after the last iteration.
    pub mean_error: f64,
    /// Final centroids, by cluster index.
    pub centroids: Vec<Point2D>,
    /// Iterations performed.
    pub iterations: usize,
    /// False if the iteration cap was hit before convergence.
    pub converged: bool,
}

/// Run one restart: seed, iterate to convergence, report.
///
/// # Errors
/// - [`FitError::InvalidK`] for `k` outside `1..=points.len()`
/// - [`FitError::EmptyCluster`] under [`EmptyClusterPolicy::Fail`]
/// - [`FitError::InvalidConfig`] if `config` fails [`KmeansConfig::validate`]
pub fn run_restart<R: Rng + ?Sized>(
    points: &[Point2D],
    k: usize,
    config: &KmeansConfig,
    rng: &mut R,
) -> Result<RestartOutcome> {
    config.validate()?;
    let mut clusters = seed_clusters(points, k, rng)?;

    let mut previous = f64::INFINITY;
    let mut iterations = 0;
    let (error, converged) = loop {
        iterations += 1;

        reset_assignments(&mut clusters);
        for (i, &p) in points.iter().enumerate() {
            assign(i, p, &mut clusters).ok_or(FitError::InvalidK {
                k,
                points: points.len(),
            })?;
        }
        recompute_centroids(&mut clusters, config.empty_cluster)?;
        let error = mean_error(points.len(), &clusters);

        log::trace!("k-means iteration {}: mean error {:.6}", iterations, error);

        if previous.is_finite()
            && relative_change(previous, error) < config.convergence_threshold
        {
            break (error, true);
        }
        if iterations >= config.max_iterations {
            log::warn!(
                "k-means restart stopped after {} iterations without converging (error {:.6})",
                iterations,
                error
            );
            break (error, false);
        }
        previous = error;
    };

    Ok(RestartOutcome {
        assignments: report_assignments(points.len(), &clusters)?,
        mean_error: error,
        centroids: clusters.iter().map(Cluster::centroid).collect(),
        iterations,
        converged,
    })
}
