use serde::{Deserialize, Serialize};

/// Fraction of the data span added on each side when drawing a fitted line.
pub const LINE_PADDING: f64 = 0.1;

/// A 2-D data point. Equality is exact, component by component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Coefficients of the fitted line `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    pub slope: f64,
    pub intercept: f64,
}

impl RegressionResult {
    /// Value of the fitted line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Endpoints of the fitted line over the x-range of `points`, widened on
    /// both sides by `padding_frac` times the larger of the x and y spans.
    pub fn line_extent(&self, points: &[Point], padding_frac: f64) -> Option<(Point, Point)> {
        let first = points.first()?;

        let (mut min_x, mut max_x) = (first.x, first.x);
        let (mut min_y, mut max_y) = (first.y, first.y);
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }

        let padding = (max_x - min_x).abs().max((max_y - min_y).abs()) * padding_frac;
        let left = min_x - padding;
        let right = max_x + padding;

        Some((
            Point::new(left, self.predict(left)),
            Point::new(right, self.predict(right)),
        ))
    }
}

/// Running sums needed by the closed-form least-squares solution.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointSums {
    pub n: usize,
    pub sum_x: f64,
    pub sum_y: f64,
    pub sum_xy: f64,
    pub sum_xx: f64,
}

impl PointSums {
    /// Accumulate all sums in a single pass.
    pub fn accumulate(points: &[Point]) -> Self {
        let mut sums = Self::default();
        for p in points {
            sums.n += 1;
            sums.sum_x += p.x;
            sums.sum_y += p.y;
            sums.sum_xy += p.x * p.y;
            sums.sum_xx += p.x * p.x;
        }
        sums
    }

    /// `n * Σx² - (Σx)²`, zero exactly when every x is identical
    pub fn denominator(&self) -> f64 {
        self.n as f64 * self.sum_xx - self.sum_x * self.sum_x
    }

    /// `n * Σxy - Σx * Σy`, carries the sign of the slope
    pub fn numerator(&self) -> f64 {
        self.n as f64 * self.sum_xy - self.sum_x * self.sum_y
    }
}

/*
--------------------------------------------------------------------------------
   Ordinary least-squares fit of y on x.

   Fewer than two points gives (0, 0). When all x are equal the denominator
   vanishes and the best constant fit (slope 0, intercept mean y) is returned.
--------------------------------------------------------------------------------
*/
pub fn linear_regression(points: &[Point]) -> RegressionResult {
    let sums = PointSums::accumulate(points);
    let n = sums.n as f64;

    if sums.n < 2 {
        return RegressionResult { slope: 0.0, intercept: 0.0 };
    }

    let denom = sums.denominator();
    if denom == 0.0 {
        return RegressionResult {
            slope: 0.0,
            intercept: sums.sum_y / n,
        };
    }

    let slope = sums.numerator() / denom;
    let intercept = (sums.sum_y - slope * sums.sum_x) / n;

    RegressionResult { slope, intercept }
}
