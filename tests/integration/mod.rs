//! Integration tests for ganita
//!
//! Exercise the public API end to end: line fitting on known data sets,
//! clustering on well-separated groups, and the file and config loaders.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test integration
//!
//! # With clustering logs
//! RUST_LOG=ganita=debug cargo test --test integration -- --nocapture
//! ```

mod io;
mod kmeans;

use ganita::DataModel;
use ganita::core::Point2D;

/// Build a model from coordinate pairs.
pub fn model_from(coords: &[(f64, f64)]) -> DataModel {
    coords.iter().map(|&(x, y)| Point2D::new(x, y)).collect()
}

/// Install a logger once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
