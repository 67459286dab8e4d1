//! Lorenz curve coordinates.

use serde::{Deserialize, Serialize};

/// A point on an empirical Lorenz curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LorenzPoint {
    /// Cumulative share of items, in `(0, 1]`.
    pub x: f64,
    /// Cumulative share of cost, in `[0, 1]`.
    pub y: f64,
}

impl LorenzPoint {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An empirical Lorenz curve, one point per item in ascending-cost order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LorenzCurve {
    points: Vec<LorenzPoint>,
}

impl LorenzCurve {
    /// The line of perfect equality, drawn for comparison.
    pub const EQUALITY_LINE: [LorenzPoint; 2] =
        [LorenzPoint::new(0.0, 0.0), LorenzPoint::new(1.0, 1.0)];

    /// Wraps an ordered point sequence.
    #[must_use]
    pub fn new(points: Vec<LorenzPoint>) -> Self {
        Self { points }
    }

    /// Curve points.
    pub fn points(&self) -> &[LorenzPoint] {
        &self.points
    }

    /// The fixed equality line.
    pub fn equality_line(&self) -> [LorenzPoint; 2] {
        Self::EQUALITY_LINE
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the curve has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Final point, `(1, 1)` for any curve built from data.
    pub fn last(&self) -> Option<LorenzPoint> {
        self.points.last().copied()
    }
}
