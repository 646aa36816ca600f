//! k-means clustering on well-separated groups.

use rand::SeedableRng;
use rand::rngs::StdRng;

use ganita::clustering::kmeans;
use ganita::core::Point2D;
use ganita::{DataModel, EmptyClusterPolicy, FitError, KmeansConfig};

use super::{init_logging, model_from};

/// Points in `labels` grouped the same way as `groups` (up to renaming).
fn same_partition(labels: &[usize], groups: &[usize]) -> bool {
    labels.len() == groups.len()
        && (0..labels.len()).all(|i| {
            (0..labels.len()).all(|j| (labels[i] == labels[j]) == (groups[i] == groups[j]))
        })
}

fn model_with(config: KmeansConfig, coords: &[(f64, f64)]) -> DataModel {
    let mut model = DataModel::with_config(config);
    model.extend(coords.iter().map(|&(x, y)| Point2D::new(x, y)));
    model
}

fn seeded(coords: &[(f64, f64)], seed: u64) -> DataModel {
    model_with(KmeansConfig::new().with_restarts(50).with_seed(seed), coords)
}

#[test]
fn test_same_length_lists() {
    let model = model_from(&[(-1.0, -1.0), (-1.0, 1.0), (1.0, -1.0), (1.0, 1.0)]);
    let labels = model.kmeans(3).unwrap();
    assert_eq!(labels.len(), model.len());
    assert!(labels.iter().all(|&l| l < 3));
}

#[test]
fn test_simple_2_clusters() {
    init_logging();
    let model = seeded(
        &[
            (-50.0, -40.0),
            (-56.0, -43.0),
            (-52.0, -39.0),
            (-47.0, -41.0),
            (82.0, 77.0),
            (79.0, 90.0),
            (80.0, 84.0),
            (89.0, 85.0),
        ],
        2024,
    );
    let labels = model.kmeans(2).unwrap();
    assert!(
        labels == [0, 0, 0, 0, 1, 1, 1, 1] || labels == [1, 1, 1, 1, 0, 0, 0, 0],
        "unexpected labels {:?}",
        labels
    );
}

#[test]
fn test_simple_3_clusters() {
    init_logging();
    let model = seeded(
        &[
            (-100.0, -100.0),
            (-100.0, -99.0),
            (-100.0, -98.0),
            (99.0, 100.0),
            (99.0, 99.0),
            (99.0, 98.0),
            (-100.0, 100.0),
            (-100.0, 99.0),
            (-100.0, 98.0),
        ],
        7,
    );
    let labels = model.kmeans(3).unwrap();
    assert!(
        same_partition(&labels, &[0, 0, 0, 1, 1, 1, 2, 2, 2]),
        "unexpected labels {:?}",
        labels
    );
    let mut used = labels.clone();
    used.sort_unstable();
    used.dedup();
    assert_eq!(used, vec![0, 1, 2]);
}

#[test]
fn test_illegal_k() {
    assert_eq!(
        DataModel::new().kmeans(0),
        Err(FitError::InvalidK { k: 0, points: 0 })
    );
    let model = model_from(&[(-100.0, -100.0), (-99.0, -100.0), (-98.0, -100.0)]);
    assert_eq!(model.kmeans(0), Err(FitError::InvalidK { k: 0, points: 3 }));
    assert_eq!(model.kmeans(4), Err(FitError::InvalidK { k: 4, points: 3 }));
    assert_eq!(model.kmeans(4).unwrap_err().code(), "INVALID_K");
}

#[test]
fn test_distance() {
    let d = kmeans::distance(&Point2D::new(3.0, 4.0), &Point2D::ZERO);
    assert!((d - 5.0).abs() < 0.001);
}

#[test]
fn test_k_equals_point_count_terminates() {
    let model = seeded(&[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0), (10.0, 10.0)], 1);
    let result = model.cluster(4).unwrap();
    assert_eq!(result.mean_error, 0.0);
    let mut labels = result.assignments.clone();
    labels.sort_unstable();
    assert_eq!(labels, vec![0, 1, 2, 3]);
}

#[test]
fn test_duplicate_points_share_a_cluster() {
    let model = seeded(&[(1.0, 1.0), (1.0, 1.0), (50.0, 50.0), (1.0, 1.0)], 3);
    let labels = model.kmeans(2).unwrap();
    assert_eq!(labels.len(), 4);
    assert_eq!(labels[0], labels[1]);
    assert_eq!(labels[0], labels[3]);
    assert_ne!(labels[0], labels[2]);
}

#[test]
fn test_single_cluster() {
    let model = model_from(&[(0.0, 0.0), (2.0, 0.0), (0.0, 2.0), (2.0, 2.0)]);
    let result = model.cluster(1).unwrap();
    assert_eq!(result.assignments, vec![0, 0, 0, 0]);
    assert_eq!(result.centroids, vec![Point2D::new(1.0, 1.0)]);
    assert!((result.mean_error - 2f64.sqrt()).abs() < 1e-12);
}

#[test]
fn test_best_restart_has_lowest_error() {
    init_logging();
    let model = model_with(
        KmeansConfig::new().with_restarts(20),
        &[
            (0.0, 0.0),
            (1.0, 0.5),
            (0.5, 1.0),
            (20.0, 0.0),
            (21.0, 1.0),
            (20.5, 0.5),
            (10.0, 15.0),
            (11.0, 14.0),
            (9.0, 16.0),
            (10.0, 5.0),
        ],
    );

    let mut rng = StdRng::seed_from_u64(11);
    let result = model.kmeans_detailed(3, &mut rng).unwrap();

    assert_eq!(result.restart_errors.len(), 20);
    let min = result
        .restart_errors
        .iter()
        .copied()
        .fold(f64::INFINITY, f64::min);
    assert_eq!(result.mean_error, min);
    let first_min = result
        .restart_errors
        .iter()
        .position(|&e| e == min)
        .unwrap();
    assert_eq!(result.best_restart, first_min);
}

#[test]
fn test_same_rng_seed_same_result() {
    let model = model_from(&[
        (0.0, 0.0),
        (3.0, 1.0),
        (6.0, 2.0),
        (9.0, 3.0),
        (12.0, 4.0),
        (15.0, 5.0),
    ]);
    let a = model
        .kmeans_with_rng(3, &mut StdRng::seed_from_u64(5))
        .unwrap();
    let b = model
        .kmeans_with_rng(3, &mut StdRng::seed_from_u64(5))
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_fail_policy_is_accepted() {
    // Well-separated seeds never leave a cluster empty here.
    let config = KmeansConfig::new()
        .with_empty_cluster(EmptyClusterPolicy::Fail)
        .with_seed(9);
    let mut model = DataModel::with_config(config);
    model.extend([Point2D::new(0.0, 0.0), Point2D::new(100.0, 100.0)]);
    let labels = model.kmeans(2).unwrap();
    assert_ne!(labels[0], labels[1]);
}

#[test]
fn test_out_of_range_settings_are_rejected() {
    let config = KmeansConfig::new()
        .with_restarts(0)
        .with_max_iterations(1)
        .with_convergence_threshold(f64::NAN);
    let model = model_with(config, &[(0.0, 0.0), (1.0, 1.0), (9.0, 9.0)]);

    let err = model
        .kmeans_detailed(2, &mut StdRng::seed_from_u64(1))
        .unwrap_err();
    assert!(matches!(err, FitError::InvalidConfig(_)));
    assert_eq!(err.code(), "INVALID_CONFIG");
    assert!(matches!(model.kmeans(2), Err(FitError::InvalidConfig(_))));
}
