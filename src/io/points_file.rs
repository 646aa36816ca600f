//! Plain-text point data files.
//!
//! Coordinates are whitespace-delimited numbers read in `x y` pairs. A line
//! may hold any number of complete pairs. Everything after `#` on a line is
//! a comment. Leading blank lines are skipped; the first blank line after
//! data ends the file, and anything below it is ignored.
//!
//! ```text
//! # cluster sample
//! -50 -40
//! -56 -43   82 77
//!
//! this trailing section is never read
//! ```

use std::path::Path;

use thiserror::Error;

use crate::clustering::KmeansConfig;
use crate::core::Point2D;
use crate::model::DataModel;

/// Errors from reading a point file.
#[derive(Error, Debug)]
pub enum LoadError {
    /// File could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A token is not a number.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A line holds an x without its y.
    #[error("line {line}: odd number of coordinates")]
    OddCoordinateCount { line: usize },
}

/// Parse point data from a string. Line numbers in errors are 1-based.
pub fn parse_points(text: &str) -> Result<Vec<Point2D>, LoadError> {
    let mut points = Vec::new();
    let mut started = false;

    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;

        if raw.trim().is_empty() {
            if started {
                break;
            }
            continue;
        }
        started = true;

        let data = raw.split('#').next().unwrap_or_default();
        let values = data
            .split_whitespace()
            .map(|token| {
                token.parse::<f64>().map_err(|e| LoadError::Parse {
                    line,
                    message: format!("invalid number {:?}: {}", token, e),
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        if values.len() % 2 != 0 {
            return Err(LoadError::OddCoordinateCount { line });
        }
        points.extend(values.chunks_exact(2).map(|xy| Point2D::new(xy[0], xy[1])));
    }

    Ok(points)
}

/// Read point data from a file.
pub fn load_points(path: &Path) -> Result<Vec<Point2D>, LoadError> {
    let text = std::fs::read_to_string(path)?;
    let points = parse_points(&text)?;
    log::debug!("Loaded {} points from {}", points.len(), path.display());
    Ok(points)
}

/// Read a file straight into a [`DataModel`] with the given clustering settings.
pub fn load_model(path: &Path, config: KmeansConfig) -> Result<DataModel, LoadError> {
    let mut model = DataModel::with_config(config);
    model.extend(load_points(path)?);
    Ok(model)
}
