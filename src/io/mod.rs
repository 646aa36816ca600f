//! File I/O: point data files in, SVG plots out.

pub mod points_file;
pub mod svg_plot;

pub use points_file::{LoadError, load_model, load_points, parse_points};
pub use svg_plot::{PlotBounds, SvgPlotConfig, render_clusters, render_line_fit, save};
