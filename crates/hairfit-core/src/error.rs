use crate::provider::ProviderError;
use thiserror::Error;

/// Terminal failures of a single analysis attempt.
///
/// Every analysis either returns a fully populated result or one of these.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("landmark set must contain exactly 68 points, got {got}")]
    InvalidLandmarkSet { got: usize },
    #[error("degenerate face geometry: {0} is zero")]
    DegenerateGeometry(&'static str),
    #[error("no face detected in image")]
    NoFaceDetected,
    #[error("best detection score {score:.2} is below the {threshold:.2} threshold")]
    LowConfidenceDetection { score: f64, threshold: f64 },
    #[error("landmark provider: {0}")]
    Provider(#[from] ProviderError),
}
