use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::regression::{Point, PointSums};

/// Tuning constants for reversal point synthesis.
///
/// The margins are empirical: they only need to push the new point clearly
/// past the sign boundary so rounding cannot leave it on the line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReversalPolicy {
    /// Distance of the new x from the x-centroid, in standard deviations
    #[serde(default = "default_leverage")]
    pub leverage: f64,

    /// Spread used in place of a zero standard deviation
    #[serde(default = "default_zero_spread")]
    pub zero_spread: f64,

    /// Fraction of the boundary value added to the safety margin
    #[serde(default = "default_relative_margin")]
    pub relative_margin: f64,

    /// Flat safety margin past the boundary
    #[serde(default = "default_absolute_margin")]
    pub absolute_margin: f64,

    /// Multiple of |mean y| subtracted when no boundary exists
    #[serde(default = "default_degenerate_spread")]
    pub degenerate_spread: f64,
}

fn default_leverage() -> f64 { 5.0 }
fn default_zero_spread() -> f64 { 1.0 }
fn default_relative_margin() -> f64 { 0.2 }
fn default_absolute_margin() -> f64 { 10.0 }
fn default_degenerate_spread() -> f64 { 20.0 }

impl Default for ReversalPolicy {
    fn default() -> Self {
        Self {
            leverage: default_leverage(),
            zero_spread: default_zero_spread(),
            relative_margin: default_relative_margin(),
            absolute_margin: default_absolute_margin(),
            degenerate_spread: default_degenerate_spread(),
        }
    }
}

/// Reversal point with the default policy. See [`reversal_point_with`].
pub fn reversal_point(points: &[Point]) -> Point {
    reversal_point_with(points, &ReversalPolicy::default())
}

/*
--------------------------------------------------------------------------------
   Synthesize one extra point that makes the least-squares slope negative.

   Intended for four points whose own fit has a positive slope; the sign logic
   relies on that and it is not checked here.

   With m = n + 1 points the slope numerator is
       m * (Sxy + x5*y5) - (Sx + x5) * (Sy + y5)
   which is linear in y5:
       y5 * (n*x5 - Sx)  -  (x5*Sy - (m*Sxy - Sx*Sy))
   Placing x5 far from the centroid and solving for the zero crossing gives the
   boundary; y5 is then pushed past it with a margin.
--------------------------------------------------------------------------------
*/
pub fn reversal_point_with(points: &[Point], policy: &ReversalPolicy) -> Point {
    let sums = PointSums::accumulate(points);
    let n = sums.n as f64;

    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let mean_x = stats::mean(&xs);
    let std_x = stats::population_std_dev(&xs);

    let spread = if std_x == 0.0 || std_x.is_nan() {
        policy.zero_spread
    } else {
        std_x
    };
    let x5 = mean_x + policy.leverage * spread;

    let lhs_factor = n * x5 - sums.sum_x;
    let rhs = x5 * sums.sum_y - ((n + 1.0) * sums.sum_xy - sums.sum_x * sums.sum_y);

    debug!(
        "reversal: n={} sum_x={} sum_y={} sum_xy={} std_x={} x5={} lhs_factor={} rhs={}",
        sums.n, sums.sum_x, sums.sum_y, sums.sum_xy, std_x, x5, lhs_factor, rhs
    );

    let y5 = if lhs_factor > 0.0 {
        let boundary = rhs / lhs_factor;
        boundary - (boundary * policy.relative_margin).abs() - policy.absolute_margin
    } else if lhs_factor < 0.0 {
        let boundary = rhs / lhs_factor;
        boundary + (boundary * policy.relative_margin).abs() + policy.absolute_margin
    } else {
        let mean_y = sums.sum_y / n;
        let scale = if mean_y == 0.0 || mean_y.is_nan() {
            1.0
        } else {
            mean_y.abs()
        };
        warn!("reversal: no slope boundary at x5={}, placing point far below mean y", x5);
        mean_y - policy.degenerate_spread * scale
    };

    Point::new(x5, y5)
}
