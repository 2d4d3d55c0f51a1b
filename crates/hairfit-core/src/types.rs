use crate::landmarks::LandmarkSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D landmark coordinate in image space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Overall facial geometry category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceShape {
    Oval,
    Round,
    Square,
    Heart,
    Long,
    Diamond,
}

impl FaceShape {
    pub const ALL: [FaceShape; 6] = [
        FaceShape::Oval,
        FaceShape::Round,
        FaceShape::Square,
        FaceShape::Heart,
        FaceShape::Long,
        FaceShape::Diamond,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FaceShape::Oval => "oval",
            FaceShape::Round => "round",
            FaceShape::Square => "square",
            FaceShape::Heart => "heart",
            FaceShape::Long => "long",
            FaceShape::Diamond => "diamond",
        }
    }
}

impl fmt::Display for FaceShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Bucketed forehead height relative to face length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HairlinePosition {
    High,
    Normal,
    Low,
}

impl fmt::Display for HairlinePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            HairlinePosition::High => "high",
            HairlinePosition::Normal => "normal",
            HairlinePosition::Low => "low",
        })
    }
}

/// Raw distances derived from a landmark set, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FacialProportions {
    /// Forehead reference (19) to chin (8).
    pub face_length: f64,
    /// Cheek outline (2) to cheek outline (14).
    pub face_width: f64,
    /// Jaw (3) to jaw (13).
    pub jawline_width: f64,
    /// Width x height proxy: cheek span combined with the nose-to-forehead span.
    /// Not a polygon area.
    pub forehead_area: f64,
}

/// Where an analysis came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisSource {
    /// Landmarks from a face detector.
    Detector,
    /// Model-free estimate from image dimensions. Always low confidence.
    Simplified,
}

/// Complete result of analyzing one face. Sole input to the recommender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacialAnalysis {
    pub face_shape: FaceShape,
    /// Jawline strength score [0, 100].
    pub jawline_strength: f64,
    /// Forehead width score [0, 100].
    pub forehead_width: f64,
    pub hairline_position: HairlinePosition,
    pub facial_proportions: FacialProportions,
    /// Confidence [0, 100].
    pub confidence: u8,
    pub source: AnalysisSource,
    /// Kept for overlay rendering only; never read by the recommender.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_landmarks: Option<LandmarkSet>,
}

impl FacialAnalysis {
    pub fn is_simplified(&self) -> bool {
        self.source == AnalysisSource::Simplified
    }
}
