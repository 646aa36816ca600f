//! Geometric features produced by the fitting routines.

mod line;

pub use line::{Axis, StandardLine};
