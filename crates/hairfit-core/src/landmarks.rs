//! 68-point facial landmark set.
//!
//! Indices follow the standard iBUG 68-point convention and are positional:
//! the proportion thresholds downstream were tuned against these exact points.

use crate::error::AnalysisError;
use crate::types::Point;
use serde::{Deserialize, Serialize};

pub const LANDMARK_COUNT: usize = 68;

pub const LEFT_CHEEK: usize = 2;
pub const LEFT_JAW: usize = 3;
pub const CHIN: usize = 8;
pub const RIGHT_JAW: usize = 13;
pub const RIGHT_CHEEK: usize = 14;
pub const FOREHEAD_REFERENCE: usize = 19;
pub const NOSE_TIP: usize = 30;
pub const LEFT_EYE_CORNER: usize = 36;
pub const RIGHT_EYE_CORNER: usize = 45;

/// Exactly 68 ordered landmark points. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct LandmarkSet {
    points: Vec<Point>,
}

impl LandmarkSet {
    pub fn new(points: Vec<Point>) -> Result<Self, AnalysisError> {
        if points.len() != LANDMARK_COUNT {
            return Err(AnalysisError::InvalidLandmarkSet { got: points.len() });
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn point(&self, idx: usize) -> Point {
        self.points[idx]
    }

    /// Distance between the outer eye corners. Useful as a scale reference
    /// for overlays.
    pub fn inter_ocular_distance(&self) -> f64 {
        self.point(LEFT_EYE_CORNER).distance(&self.point(RIGHT_EYE_CORNER))
    }
}

impl TryFrom<Vec<Point>> for LandmarkSet {
    type Error = AnalysisError;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<LandmarkSet> for Vec<Point> {
    fn from(set: LandmarkSet) -> Self {
        set.points
    }
}

impl std::ops::Index<usize> for LandmarkSet {
    type Output = Point;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.points[idx]
    }
}

/// Synthetic frontal face: forehead at the top, chin 120px below,
/// cheeks 100px apart and jaw points 85px apart.
#[cfg(test)]
pub(crate) fn synthetic_points() -> Vec<Point> {
    let mut points = vec![Point::new(50.0, 50.0); LANDMARK_COUNT];
    points[FOREHEAD_REFERENCE] = Point::new(50.0, 0.0);
    points[CHIN] = Point::new(50.0, 120.0);
    points[LEFT_CHEEK] = Point::new(0.0, 40.0);
    points[RIGHT_CHEEK] = Point::new(100.0, 40.0);
    points[LEFT_JAW] = Point::new(7.5, 60.0);
    points[RIGHT_JAW] = Point::new(92.5, 60.0);
    points[NOSE_TIP] = Point::new(50.0, 30.0);
    points[LEFT_EYE_CORNER] = Point::new(20.0, 25.0);
    points[RIGHT_EYE_CORNER] = Point::new(80.0, 25.0);
    points
}

#[cfg(test)]
pub(crate) fn synthetic_face() -> LandmarkSet {
    LandmarkSet::new(synthetic_points()).unwrap()
}
