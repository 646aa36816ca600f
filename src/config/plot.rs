//! Plot settings section.

use serde::{Deserialize, Serialize};

use crate::io::SvgPlotConfig;

use super::ConfigError;
use super::defaults;

/// SVG rendering settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlotSection {
    /// Pixels per data unit
    #[serde(default = "defaults::plot_scale")]
    pub scale: f64,

    /// Blank border around the data (pixels)
    #[serde(default = "defaults::plot_margin")]
    pub margin: f64,

    /// Radius of each plotted point (pixels)
    #[serde(default = "defaults::plot_point_radius")]
    pub point_radius: f64,

    /// How far the fitted line extends past the data (data units)
    #[serde(default = "defaults::plot_line_extension")]
    pub line_extension: f64,

    /// Whether to draw the x and y axes
    #[serde(default = "defaults::plot_show_axes")]
    pub show_axes: bool,
}

impl Default for PlotSection {
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

impl PlotSection {
    /// Convert to SvgPlotConfig
    pub fn to_svg_plot_config(&self) -> SvgPlotConfig {
        SvgPlotConfig {
            scale: self.scale,
            margin: self.margin,
            point_radius: self.point_radius,
            line_extension: self.line_extension,
            show_axes: self.show_axes,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(ConfigError::invalid("plot.scale", "must be positive"));
        }
        if !(self.margin.is_finite() && self.margin >= 0.0) {
            return Err(ConfigError::invalid("plot.margin", "must be non-negative"));
        }
        if !(self.point_radius.is_finite() && self.point_radius > 0.0) {
            return Err(ConfigError::invalid("plot.point_radius", "must be positive"));
        }
        if !(self.line_extension.is_finite() && self.line_extension >= 0.0) {
            return Err(ConfigError::invalid(
                "plot.line_extension",
                "must be non-negative",
            ));
        }
        Ok(())
    }
}
