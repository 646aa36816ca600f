//! # Ganita: Line Fitting and Clustering for 2D Point Sets
//!
//! A small analysis library for sets of 2D points:
//!
//! - **Line of best fit**: orthogonal (total least squares) regression,
//!   minimizing perpendicular distance, so vertical and near-vertical data
//!   fit as well as horizontal data.
//! - **k-means clustering**: multi-restart Lloyd iteration that keeps the
//!   restart with the lowest mean point-to-centroid distance.
//!
//! ## Quick Start
//!
//! ```rust
//! use ganita::{DataModel, KmeansConfig};
//! use ganita::core::Point2D;
//!
//! let mut model = DataModel::with_config(KmeansConfig::new().with_seed(7));
//! for (x, y) in [(0.0, 1.0), (1.0, 3.0), (2.0, 5.0), (3.0, 7.0)] {
//!     model.add(Point2D::new(x, y));
//! }
//!
//! // y = 2x + 1
//! let line = model.fit_line().unwrap();
//! assert!((line.y_at(10.0).unwrap() - 21.0).abs() < 1e-9);
//!
//! let labels = model.kmeans(2).unwrap();
//! assert_eq!(labels.len(), 4);
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: `Point2D` and small geometry helpers
//! - [`features`]: `StandardLine` in `ax + by + c = 0` form
//! - [`regression`]: Orthogonal regression steps and `fit_line`
//! - [`clustering`]: Clusters, k-means primitives and restart runner
//! - [`model`]: `DataModel`, the point store both analyses run on
//! - [`config`]: YAML configuration
//! - [`io`]: Point file loader and SVG plots

pub mod clustering;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod io;
pub mod model;
pub mod regression;

// Re-export main types at crate root
pub use clustering::{ClusteringResult, EmptyClusterPolicy, KmeansConfig};
pub use config::{ConfigLoadError, GanitaConfig};
pub use error::{FitError, Result};
pub use features::StandardLine;
pub use model::DataModel;
