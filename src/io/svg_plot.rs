//! SVG plots of point data, fitted lines and cluster assignments.
//!
//! Data coordinates are mapped to pixels with a fixed scale and margin;
//! y points up. The plotted region always contains the origin.

use std::path::Path;

use svg::Document;
use svg::node::element::{Circle, Group, Line, Rectangle};

use crate::config::defaults;
use crate::core::Point2D;
use crate::features::StandardLine;

/// Colorblind-friendly color palette (Okabe-Ito).
mod colors {
    /// Cluster colors, by cluster index
    pub const CLUSTERS: [&str; 7] = [
        "#E69F00", // orange
        "#56B4E9", // sky blue
        "#009E73", // bluish green
        "#0072B2", // blue
        "#D55E00", // vermillion
        "#CC79A7", // reddish purple
        "#F0E442", // yellow
    ];
    /// Clusters beyond the palette - gray
    pub const OVERFLOW: &str = "#999999";
    /// Data points in a line plot - blue
    pub const POINTS: &str = "#0072B2";
    /// Fitted line - vermillion
    pub const FIT_LINE: &str = "#D55E00";
    /// Axes - light gray
    pub const AXES: &str = "#BBBBBB";
}

/// Color for a cluster index.
pub fn cluster_color(index: usize) -> &'static str {
    colors::CLUSTERS.get(index).copied().unwrap_or(colors::OVERFLOW)
}

/// Rendering parameters.
#[derive(Clone, Debug)]
pub struct SvgPlotConfig {
    /// Pixels per data unit
    pub scale: f64,
    /// Blank border around the data (pixels)
    pub margin: f64,
    /// Radius of each plotted point (pixels)
    pub point_radius: f64,
    /// How far the fitted line extends past the data (data units)
    pub line_extension: f64,
    /// Whether to draw the x and y axes
    pub show_axes: bool,
}

impl Default for SvgPlotConfig {
    fn default() -> Self {
        Self {
            scale: defaults::plot_scale(),
            margin: defaults::plot_margin(),
            point_radius: defaults::plot_point_radius(),
            line_extension: defaults::plot_line_extension(),
            show_axes: defaults::plot_show_axes(),
        }
    }
}

/// Axis-aligned data bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotBounds {
    /// Minimum X coordinate
    pub min_x: f64,
    /// Maximum X coordinate
    pub max_x: f64,
    /// Minimum Y coordinate
    pub min_y: f64,
    /// Maximum Y coordinate
    pub max_y: f64,
}

impl PlotBounds {
    /// Bounds of `points`, grown to contain the origin. Non-finite points
    /// are skipped.
    pub fn from_points(points: &[Point2D]) -> Self {
        let mut bounds = Self {
            min_x: 0.0,
            max_x: 0.0,
            min_y: 0.0,
            max_y: 0.0,
        };
        for p in points.iter().filter(|p| p.is_finite()) {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_y = bounds.max_y.max(p.y);
        }
        bounds
    }

    /// Extent along X.
    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Extent along Y.
    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Maps data coordinates to pixels.
struct Canvas<'a> {
    bounds: PlotBounds,
    config: &'a SvgPlotConfig,
}

impl<'a> Canvas<'a> {
    fn new(points: &[Point2D], config: &'a SvgPlotConfig) -> Self {
        Self {
            bounds: PlotBounds::from_points(points),
            config,
        }
    }

    fn width(&self) -> f64 {
        self.bounds.width() * self.config.scale + 2.0 * self.config.margin
    }

    fn height(&self) -> f64 {
        self.bounds.height() * self.config.scale + 2.0 * self.config.margin
    }

    fn to_px(&self, p: Point2D) -> (f64, f64) {
        (
            self.config.margin + (p.x - self.bounds.min_x) * self.config.scale,
            self.config.margin + (self.bounds.max_y - p.y) * self.config.scale,
        )
    }

    fn document(&self) -> Document {
        let (width, height) = (self.width(), self.height());
        let mut doc = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", (0.0, 0.0, width, height))
            .add(
                Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", width)
                    .set("height", height)
                    .set("fill", "white"),
            );
        if self.config.show_axes {
            doc = doc.add(self.axes());
        }
        doc
    }

    fn axes(&self) -> Group {
        let (ox, oy) = self.to_px(Point2D::ZERO);
        let (w, h) = (self.width(), self.height());
        Group::new()
            .set("id", "axes")
            .set("stroke", colors::AXES)
            .set("stroke-width", 1)
            .add(Line::new().set("x1", 0).set("y1", oy).set("x2", w).set("y2", oy))
            .add(Line::new().set("x1", ox).set("y1", 0).set("x2", ox).set("y2", h))
    }

    fn point(&self, p: Point2D, fill: &str) -> Circle {
        let (cx, cy) = self.to_px(p);
        Circle::new()
            .set("cx", cx)
            .set("cy", cy)
            .set("r", self.config.point_radius)
            .set("fill", fill)
    }

    fn segment(&self, from: Point2D, to: Point2D, stroke: &str, width: f64) -> Line {
        let (x1, y1) = self.to_px(from);
        let (x2, y2) = self.to_px(to);
        Line::new()
            .set("x1", x1)
            .set("y1", y1)
            .set("x2", x2)
            .set("y2", y2)
            .set("stroke", stroke)
            .set("stroke-width", width)
    }
}

/// End points of `line` across the plotted region plus `extension`.
///
/// Walks the x-range when the line has a y for every x, otherwise the
/// y-range.
pub fn line_segment(
    line: &StandardLine,
    bounds: &PlotBounds,
    extension: f64,
) -> Option<(Point2D, Point2D)> {
    let (x0, x1) = (bounds.min_x - extension, bounds.max_x + extension);
    if let (Ok(y0), Ok(y1)) = (line.y_at(x0), line.y_at(x1)) {
        return Some((Point2D::new(x0, y0), Point2D::new(x1, y1)));
    }
    let (y0, y1) = (bounds.min_y - extension, bounds.max_y + extension);
    match (line.x_at(y0), line.x_at(y1)) {
        (Ok(x0), Ok(x1)) => Some((Point2D::new(x0, y0), Point2D::new(x1, y1))),
        _ => None,
    }
}

/// Plot `points` with the fitted `line` drawn through them.
pub fn render_line_fit(points: &[Point2D], line: &StandardLine, config: &SvgPlotConfig) -> Document {
    let canvas = Canvas::new(points, config);
    let mut doc = canvas.document();

    let mut group = Group::new().set("id", "points");
    for &p in points.iter().filter(|p| p.is_finite()) {
        group = group.add(canvas.point(p, colors::POINTS));
    }
    doc = doc.add(group);

    if let Some((from, to)) = line_segment(line, &canvas.bounds, config.line_extension) {
        doc = doc.add(
            Group::new()
                .set("id", "fit_line")
                .add(canvas.segment(from, to, colors::FIT_LINE, 2.0)),
        );
    }
    doc
}

/// Plot `points` colored by cluster index, with each centroid ringed.
///
/// `assignments` is parallel to `points`; extra entries on either side are
/// ignored.
pub fn render_clusters(
    points: &[Point2D],
    assignments: &[usize],
    centroids: &[Point2D],
    config: &SvgPlotConfig,
) -> Document {
    let canvas = Canvas::new(points, config);
    let mut doc = canvas.document();

    let mut group = Group::new().set("id", "points");
    for (&p, &label) in points.iter().zip(assignments) {
        if p.is_finite() {
            group = group.add(canvas.point(p, cluster_color(label)));
        }
    }
    doc = doc.add(group);

    let mut group = Group::new().set("id", "centroids");
    for (index, &c) in centroids.iter().enumerate() {
        group = group.add(
            canvas
                .point(c, "none")
                .set("r", config.point_radius * 2.5)
                .set("stroke", cluster_color(index))
                .set("stroke-width", 2),
        );
    }
    doc.add(group)
}

/// Write a document to `path`.
pub fn save(path: &Path, doc: &Document) -> std::io::Result<()> {
    svg::save(path, doc)?;
    log::info!("SVG saved to: {}", path.display());
    Ok(())
}
