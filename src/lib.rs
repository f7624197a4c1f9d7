pub mod analysis;
pub mod config;
pub mod core;

pub use analysis::{
    Analysis, BASE_POINTS, DEFAULT_POINTS, ValidationError, default_points, parse_point,
    random_points,
};
pub use config::{Config, validate_policy};
pub use crate::core::io::{read_points_file, render_json, render_report, write_report};
pub use matlib::{
    LINE_PADDING, Point, RegressionResult, ReversalPolicy, linear_regression, reversal_point,
    reversal_point_with,
};
