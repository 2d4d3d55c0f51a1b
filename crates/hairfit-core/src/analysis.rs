//! Landmarks-to-analysis pipeline.
//!
//! detections -> best face -> LandmarkSet -> proportions -> shape + metrics.
//! Each step either succeeds fully or returns an [`AnalysisError`]; no partial
//! analysis is ever produced.

use crate::classifier::classify_shape;
use crate::error::AnalysisError;
use crate::landmarks::LandmarkSet;
use crate::metrics::{forehead_width, hairline_position, jawline_strength};
use crate::proportions::compute_proportions;
use crate::provider::{Detection, LandmarkProvider};
use crate::types::{AnalysisSource, FacialAnalysis};
use image::DynamicImage;

/// Detections scoring below this are rejected.
pub const MIN_DETECTION_SCORE: f64 = 0.5;

/// Run `provider` on `image` and analyze the first detected face.
///
/// The provider must already be loaded; this never triggers a load.
pub fn analyze<P: LandmarkProvider + ?Sized>(
    provider: &mut P,
    image: &DynamicImage,
) -> Result<FacialAnalysis, AnalysisError> {
    let detections = provider.detect(image)?;
    tracing::debug!(provider = provider.name(), faces = detections.len(), "detection complete");
    analyze_detections(&detections)
}

/// Analyze the first detection in `detections`.
pub fn analyze_detections(detections: &[Detection]) -> Result<FacialAnalysis, AnalysisError> {
    let detection = detections.first().ok_or(AnalysisError::NoFaceDetected)?;
    if detections.len() > 1 {
        tracing::warn!(ignored = detections.len() - 1, "multiple faces detected; using the first");
    }

    // NaN scores fail this check too.
    if !(detection.score >= MIN_DETECTION_SCORE) {
        return Err(AnalysisError::LowConfidenceDetection {
            score: detection.score,
            threshold: MIN_DETECTION_SCORE,
        });
    }

    let landmarks = LandmarkSet::new(detection.landmarks.clone())?;
    analyze_landmarks(landmarks, detection.score)
}

/// Analyze a validated landmark set with the given detector score [0, 1].
pub fn analyze_landmarks(landmarks: LandmarkSet, score: f64) -> Result<FacialAnalysis, AnalysisError> {
    let proportions = compute_proportions(&landmarks);
    let face_shape = classify_shape(&proportions)?;

    let analysis = FacialAnalysis {
        face_shape,
        jawline_strength: jawline_strength(&proportions),
        forehead_width: forehead_width(&proportions),
        hairline_position: hairline_position(&proportions),
        facial_proportions: proportions,
        confidence: (score * 100.0).round().clamp(0.0, 100.0) as u8,
        source: AnalysisSource::Detector,
        raw_landmarks: Some(landmarks),
    };

    tracing::info!(
        shape = %analysis.face_shape,
        jawline = analysis.jawline_strength,
        forehead = analysis.forehead_width,
        hairline = %analysis.hairline_position,
        confidence = analysis.confidence,
        "facial analysis complete"
    );

    Ok(analysis)
}
