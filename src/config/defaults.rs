//! Default values for serde-deserialized configuration.

pub fn kmeans_restarts() -> usize {
    10
}

pub fn kmeans_convergence_threshold() -> f64 {
    0.01
}

pub fn kmeans_max_iterations() -> usize {
    100
}

pub fn plot_scale() -> f64 {
    4.0
}

pub fn plot_margin() -> f64 {
    40.0
}

pub fn plot_point_radius() -> f64 {
    3.0
}

pub fn plot_line_extension() -> f64 {
    20.0
}

pub fn plot_show_axes() -> bool {
    true
}
