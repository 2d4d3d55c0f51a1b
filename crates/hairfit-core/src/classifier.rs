//! Face-shape classification from proportion ratios.
//!
//! Rules overlap, so they are evaluated in a fixed order and the first match
//! wins. Reordering them changes results.

use crate::error::AnalysisError;
use crate::types::{FaceShape, FacialProportions};

const LONG_MIN_LENGTH_RATIO: f64 = 1.3;
const ROUND_MAX_LENGTH_RATIO: f64 = 0.9;
const SQUARE_JAW_RATIO: f64 = 0.85;
const SQUARE_JAW_TOLERANCE: f64 = 0.1;
const HEART_MIN_FOREHEAD_RATIO: f64 = 0.35;
const DIAMOND_MAX_JAW_RATIO: f64 = 0.8;
const DIAMOND_MIN_LENGTH_RATIO: f64 = 1.1;

/// Dimensionless ratios the classifier decides on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeRatios {
    /// face_length / face_width
    pub length_width: f64,
    /// jawline_width / face_width
    pub jaw_width: f64,
    /// forehead_area / face_length
    pub forehead: f64,
}

impl ShapeRatios {
    /// Fails with `DegenerateGeometry` when a reference distance is zero
    /// (or not a positive number at all).
    pub fn from_proportions(p: &FacialProportions) -> Result<Self, AnalysisError> {
        if !(p.face_width > 0.0) {
            return Err(AnalysisError::DegenerateGeometry("face width"));
        }
        if !(p.face_length > 0.0) {
            return Err(AnalysisError::DegenerateGeometry("face length"));
        }

        Ok(Self {
            length_width: p.face_length / p.face_width,
            jaw_width: p.jawline_width / p.face_width,
            forehead: p.forehead_area / p.face_length,
        })
    }
}

/// Classify proportions into exactly one of the six face shapes.
pub fn classify_shape(p: &FacialProportions) -> Result<FaceShape, AnalysisError> {
    let ratios = ShapeRatios::from_proportions(p)?;
    let shape = classify_ratios(&ratios);
    tracing::debug!(
        length_width = ratios.length_width,
        jaw_width = ratios.jaw_width,
        forehead = ratios.forehead,
        %shape,
        "classified face shape"
    );
    Ok(shape)
}

/// Ordered threshold rules. Total: falls through to `Oval`.
pub fn classify_ratios(r: &ShapeRatios) -> FaceShape {
    if r.length_width > LONG_MIN_LENGTH_RATIO {
        FaceShape::Long
    } else if r.length_width < ROUND_MAX_LENGTH_RATIO {
        FaceShape::Round
    } else if (r.jaw_width - SQUARE_JAW_RATIO).abs() < SQUARE_JAW_TOLERANCE {
        FaceShape::Square
    } else if r.forehead > HEART_MIN_FOREHEAD_RATIO {
        FaceShape::Heart
    } else if r.jaw_width < DIAMOND_MAX_JAW_RATIO && r.length_width > DIAMOND_MIN_LENGTH_RATIO {
        FaceShape::Diamond
    } else {
        FaceShape::Oval
    }
}
