//! Simplified, model-free analysis.
//!
//! Used only when no landmark detector is available. Shape comes from the
//! aspect ratio of a fixed face box; the other metrics are jittered
//! placeholders. Results are always tagged
//! [`AnalysisSource::Simplified`] with confidence capped at
//! [`SIMPLIFIED_CONFIDENCE`].

use crate::error::AnalysisError;
use crate::types::{AnalysisSource, FaceShape, FacialAnalysis, FacialProportions, HairlinePosition};
use image::DynamicImage;
use rand::Rng;

pub const SIMPLIFIED_CONFIDENCE: u8 = 40;

const FACE_WIDTH_FRACTION: f64 = 0.6;
const FACE_HEIGHT_FRACTION: f64 = 0.7;
const JAW_WIDTH_FRACTION: f64 = 0.7;
const FOREHEAD_AREA_FRACTION: f64 = 0.2;

/// Estimate an analysis for `image` without landmarks.
pub fn simplified_from_image<R: Rng>(
    image: &DynamicImage,
    rng: &mut R,
) -> Result<FacialAnalysis, AnalysisError> {
    simplified_analysis(image.width(), image.height(), rng)
}

/// Estimate an analysis from image dimensions alone.
pub fn simplified_analysis<R: Rng>(
    width: u32,
    height: u32,
    rng: &mut R,
) -> Result<FacialAnalysis, AnalysisError> {
    if width == 0 {
        return Err(AnalysisError::DegenerateGeometry("image width"));
    }
    if height == 0 {
        return Err(AnalysisError::DegenerateGeometry("image height"));
    }

    let face_width = width as f64 * FACE_WIDTH_FRACTION;
    let face_height = height as f64 * FACE_HEIGHT_FRACTION;
    let ratio = face_height / face_width;

    let face_shape = if ratio > 1.3 {
        FaceShape::Long
    } else if ratio < 0.9 {
        FaceShape::Round
    } else if ratio > 1.1 {
        FaceShape::Diamond
    } else {
        FaceShape::Oval
    };

    let analysis = FacialAnalysis {
        face_shape,
        jawline_strength: rng.gen_range(50.0..80.0),
        forehead_width: rng.gen_range(40.0..80.0),
        hairline_position: HairlinePosition::Normal,
        facial_proportions: FacialProportions {
            face_length: face_height,
            face_width,
            jawline_width: face_width * JAW_WIDTH_FRACTION,
            forehead_area: face_width * face_height * FOREHEAD_AREA_FRACTION,
        },
        confidence: SIMPLIFIED_CONFIDENCE,
        source: AnalysisSource::Simplified,
        raw_landmarks: None,
    };

    tracing::warn!(
        width,
        height,
        shape = %analysis.face_shape,
        "using simplified analysis; results are low confidence"
    );

    Ok(analysis)
}
