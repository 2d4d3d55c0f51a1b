//! hairfit-core — Facial proportion analysis and hairstyle recommendation.
//!
//! Turns a 68-point facial landmark set into a face-shape classification and
//! normalized metrics, then ranks a hairstyle catalog against the result.
//! Landmark detection itself is delegated to a [`LandmarkProvider`].

pub mod advice;
pub mod analysis;
pub mod catalog;
pub mod classifier;
pub mod error;
pub mod fallback;
pub mod landmarks;
pub mod metrics;
pub mod proportions;
pub mod provider;
pub mod recommender;
pub mod types;

pub use analysis::{analyze, analyze_detections, MIN_DETECTION_SCORE};
pub use catalog::{Catalog, CatalogError, ForeheadTolerance, HairstyleCatalogEntry, StyleCategory, StyleTag};
pub use error::AnalysisError;
pub use landmarks::LandmarkSet;
pub use provider::{Detection, LandmarkProvider, ProviderError, ProviderState, SidecarProvider};
pub use recommender::{recommend, HairColor, Recommendation, RecommendedStyle};
pub use types::{AnalysisSource, FaceShape, FacialAnalysis, FacialProportions, HairlinePosition, Point};
