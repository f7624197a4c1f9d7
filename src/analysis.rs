//! Caller-side pipeline around the core: parse, validate, fit, suggest a
//! reversal point, then refit with a fifth point.

use log::{debug, info};
use matlib::{Point, RegressionResult, ReversalPolicy, linear_regression, reversal_point_with};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use thiserror::Error;

/// Number of base points the demonstration works with.
pub const BASE_POINTS: usize = 4;

/// Points pre-filled in the input form (collinear, y = 2x + 5).
pub const DEFAULT_POINTS: [(f64, f64); BASE_POINTS] =
    [(1.0, 7.0), (2.0, 9.0), (8.0, 21.0), (10.0, 25.0)];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("All X and Y values must be valid numbers (got \"{input}\").")]
    InvalidNumber { input: String },

    #[error("Exactly four points are required (got {found}).")]
    WrongPointCount { expected: usize, found: usize },

    #[error(
        "The initial four points must result in a positive slope for this demonstration \
         (slope is {slope:.4}). Please adjust the points."
    )]
    NonPositiveSlope { slope: f64 },
}

/// Parse `"x,y"` or `"x y"` into a point. Both components must be finite.
pub fn parse_point(text: &str) -> Result<Point, ValidationError> {
    let invalid = || ValidationError::InvalidNumber {
        input: text.trim().to_string(),
    };

    let fields: Vec<&str> = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|f| !f.is_empty())
        .collect();
    if fields.len() != 2 {
        return Err(invalid());
    }

    let x: f64 = fields[0].parse().map_err(|_| invalid())?;
    let y: f64 = fields[1].parse().map_err(|_| invalid())?;
    if !x.is_finite() || !y.is_finite() {
        return Err(invalid());
    }

    Ok(Point::new(x, y))
}

pub fn default_points() -> Vec<Point> {
    DEFAULT_POINTS.iter().map(|&p| Point::from(p)).collect()
}

/// Four points rounded to two decimals whose fit has a positive slope.
pub fn random_points(seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    let round2 = |v: f64| (v * 100.0).round() / 100.0;

    loop {
        let intercept = rng.gen_range(-10.0..10.0);
        let slope = rng.gen_range(0.1..5.0);
        let points: Vec<Point> = (0..BASE_POINTS)
            .map(|_| {
                let x = rng.gen_range(0.0..20.0);
                let noise = rng.gen_range(-2.0..2.0);
                Point::new(round2(x), round2(intercept + slope * x + noise))
            })
            .collect();

        if linear_regression(&points).slope > 0.0 {
            return points;
        }
    }
}

/// Result of the demonstration for one set of base points.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub points: Vec<Point>,
    pub fit: RegressionResult,
    pub suggestion: Point,
    pub fifth: Option<Point>,
    pub combined_fit: Option<RegressionResult>,
}

impl Analysis {
    /// Fit the base points and derive the suggested reversal point.
    pub fn new(points: &[Point], policy: &ReversalPolicy) -> Result<Self, ValidationError> {
        if points.len() != BASE_POINTS {
            return Err(ValidationError::WrongPointCount {
                expected: BASE_POINTS,
                found: points.len(),
            });
        }

        let fit = linear_regression(points);
        info!("base fit: slope={} intercept={}", fit.slope, fit.intercept);
        if fit.slope <= 0.0 {
            return Err(ValidationError::NonPositiveSlope { slope: fit.slope });
        }

        let suggestion = reversal_point_with(points, policy);
        info!("suggested reversal point: ({}, {})", suggestion.x, suggestion.y);

        Ok(Self {
            points: points.to_vec(),
            fit,
            suggestion,
            fifth: None,
            combined_fit: None,
        })
    }

    /// Add a fifth point (replacing any earlier one) and refit.
    pub fn with_fifth_point(&mut self, point: Point) -> RegressionResult {
        self.fifth = Some(point);
        let combined = linear_regression(&self.combined_points());
        debug!("combined fit with ({}, {}): {:?}", point.x, point.y, combined);
        self.combined_fit = Some(combined);
        combined
    }

    pub fn use_suggestion(&mut self) -> RegressionResult {
        self.with_fifth_point(self.suggestion)
    }

    /// Base points followed by the fifth point, if any.
    pub fn combined_points(&self) -> Vec<Point> {
        let mut all = self.points.clone();
        all.extend(self.fifth);
        all
    }

    pub fn outlier(&self) -> Option<Point> {
        self.fifth
    }

    /// Combined points except those exactly equal to the fifth point.
    pub fn regular_points(&self) -> Vec<Point> {
        match self.fifth {
            Some(outlier) => self
                .combined_points()
                .into_iter()
                .filter(|p| *p != outlier)
                .collect(),
            None => self.points.clone(),
        }
    }

    /// Whether the combined fit slopes downward.
    pub fn is_reversed(&self) -> bool {
        self.combined_fit.is_some_and(|fit| fit.slope < 0.0)
    }
}
