//! Point files, YAML config and SVG output together.

use std::fs;

use ganita::io::{self, SvgPlotConfig};
use ganita::{ConfigLoadError, EmptyClusterPolicy, GanitaConfig, KmeansConfig};

const CLUSTER_FILE: &str = "\
# two groups
-50 -40
-56 -43
-52 -39   -47 -41
82 77
79 90
80 84
89 85

ignored trailing notes
";

#[test]
fn test_load_model_and_cluster() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clusters.txt");
    fs::write(&path, CLUSTER_FILE).unwrap();

    let config = KmeansConfig::new().with_restarts(30).with_seed(12);
    let model = io::load_model(&path, config).unwrap();
    assert_eq!(model.len(), 8);
    assert_eq!(model.config().seed, Some(12));

    let result = model.cluster(2).unwrap();
    assert!(result.assignments[..4].iter().all(|&l| l == result.assignments[0]));
    assert!(result.assignments[4..].iter().all(|&l| l == result.assignments[4]));
    assert_ne!(result.assignments[0], result.assignments[4]);

    let svg_path = dir.path().join("clusters.svg");
    let doc = io::render_clusters(
        model.points(),
        &result.assignments,
        &result.centroids,
        &SvgPlotConfig::default(),
    );
    io::save(&svg_path, &doc).unwrap();
    let svg = fs::read_to_string(&svg_path).unwrap();
    assert_eq!(svg.matches("<circle").count(), 10);
}

#[test]
fn test_load_points_and_fit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("line.txt");
    fs::write(&path, "0 1\n1 3\n2 5\n3 7\n").unwrap();

    let points = io::load_points(&path).unwrap();
    assert_eq!(points.len(), 4);

    let model: ganita::DataModel = points.into_iter().collect();
    let line = model.fit_line().unwrap();
    assert!((line.y_at(4.0).unwrap() - 9.0).abs() < 1e-9);

    let doc = io::render_line_fit(model.points(), &line, &SvgPlotConfig::default());
    assert!(doc.to_string().contains("fit_line"));
}

#[test]
fn test_load_error_reports_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "1 2\n3 4 5\n").unwrap();

    let err = io::load_points(&path).unwrap_err();
    assert!(matches!(err, io::LoadError::OddCoordinateCount { line: 2 }));
    assert_eq!(err.to_string(), "line 2: odd number of coordinates");
}

#[test]
fn test_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(
        &path,
        "kmeans:\n  restarts: 5\n  empty_cluster: fail\nplot:\n  scale: 2.5\n  show_axes: false\n",
    )
    .unwrap();

    let config = GanitaConfig::load(&path).unwrap();
    assert_eq!(config.kmeans.restarts, 5);
    assert_eq!(config.kmeans.empty_cluster, EmptyClusterPolicy::Fail);
    assert_eq!(config.kmeans.convergence_threshold, 0.01);

    let plot = config.plot.to_svg_plot_config();
    assert_eq!(plot.scale, 2.5);
    assert!(!plot.show_axes);
    assert_eq!(plot.margin, SvgPlotConfig::default().margin);
}

#[test]
fn test_config_file_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "kmeans:\n  convergence_threshold: -1.0\n").unwrap();

    let err = GanitaConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigLoadError::Validation(_)));
    assert!(err.to_string().contains("kmeans.convergence_threshold"));
}

#[test]
fn test_repository_default_config_parses() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("configs/config.yaml");
    let config = GanitaConfig::load(&path).unwrap();
    assert_eq!(config.kmeans.restarts, KmeansConfig::default().restarts);
}
