//! Core types for the ganita fitting library.
//!
//! - [`Point2D`]: plain 2D coordinate used by every component
//! - [`math`]: angle conversions and the centroid helper

pub mod math;
mod point;

pub use point::Point2D;
