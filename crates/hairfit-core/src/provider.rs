//! Landmark provider contract.
//!
//! Face detection and landmark inference live outside this crate. A provider
//! owns its own initialization state; it only moves between states through an
//! explicit [`LandmarkProvider::load`] call.

use crate::types::Point;
use image::DynamicImage;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("landmark provider is not ready (state: {0})")]
    NotReady(ProviderState),
    #[error("landmark file not found: {0}; run the detector and save its output next to the image")]
    LandmarksNotFound(String),
    #[error("failed to read landmarks: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed landmark file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Initialization state of a provider.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProviderState {
    #[default]
    Uninitialized,
    Loading,
    Ready,
    Failed(String),
}

impl ProviderState {
    pub fn is_ready(&self) -> bool {
        matches!(self, ProviderState::Ready)
    }
}

impl fmt::Display for ProviderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderState::Uninitialized => f.write_str("uninitialized"),
            ProviderState::Loading => f.write_str("loading"),
            ProviderState::Ready => f.write_str("ready"),
            ProviderState::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

/// One detected face as reported by a detector. Unvalidated: the landmark
/// count is checked when the detection is analyzed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Detector confidence [0, 1].
    pub score: f64,
    pub landmarks: Vec<Point>,
}

/// Source of facial landmarks for an image.
pub trait LandmarkProvider {
    fn name(&self) -> &str;

    fn state(&self) -> &ProviderState;

    /// Initialize the provider. Idempotent once `Ready`; a failed load can be
    /// retried by calling again.
    fn load(&mut self) -> Result<(), ProviderError>;

    /// Detect faces in `image`, best candidate first. Fails with `NotReady`
    /// unless a prior `load` succeeded.
    fn detect(&mut self, image: &DynamicImage) -> Result<Vec<Detection>, ProviderError>;
}

/// Reads detections precomputed by an external detector from a JSON sidecar
/// file stored next to the image (`photo.jpg` -> `photo.landmarks.json`).
pub struct SidecarProvider {
    path: PathBuf,
    state: ProviderState,
    detections: Vec<Detection>,
}

impl SidecarProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            state: ProviderState::Uninitialized,
            detections: Vec::new(),
        }
    }

    /// Provider for the sidecar of `image_path`, replacing its extension with
    /// `suffix`.
    pub fn for_image(image_path: &Path, suffix: &str) -> Self {
        Self::new(image_path.with_extension(suffix))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Vec<Detection>, ProviderError> {
        if !self.path.exists() {
            return Err(ProviderError::LandmarksNotFound(self.path.display().to_string()));
        }
        let src = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&src)?)
    }
}

impl LandmarkProvider for SidecarProvider {
    fn name(&self) -> &str {
        "sidecar"
    }

    fn state(&self) -> &ProviderState {
        &self.state
    }

    fn load(&mut self) -> Result<(), ProviderError> {
        if self.state.is_ready() {
            return Ok(());
        }

        self.state = ProviderState::Loading;
        match self.read() {
            Ok(detections) => {
                tracing::info!(
                    path = %self.path.display(),
                    faces = detections.len(),
                    "landmark sidecar loaded"
                );
                self.detections = detections;
                self.state = ProviderState::Ready;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "landmark sidecar load failed");
                self.state = ProviderState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    fn detect(&mut self, image: &DynamicImage) -> Result<Vec<Detection>, ProviderError> {
        if !self.state.is_ready() {
            return Err(ProviderError::NotReady(self.state.clone()));
        }

        let (width, height) = (image.width() as f64, image.height() as f64);
        let outside = self
            .detections
            .iter()
            .flat_map(|d| d.landmarks.iter())
            .filter(|p| p.x < 0.0 || p.y < 0.0 || p.x > width || p.y > height)
            .count();
        if outside > 0 {
            tracing::warn!(outside, width, height, "sidecar landmarks fall outside the image");
        }

        Ok(self.detections.clone())
    }
}
