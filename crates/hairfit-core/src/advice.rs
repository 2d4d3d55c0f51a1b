//! Human-readable text built from an analysis. Presentation only.

use crate::recommender::RecommendedStyle;
use crate::types::{AnalysisSource, FaceShape, FacialAnalysis, HairlinePosition};
use std::fmt::Write;

const STRONG_JAWLINE_MIN: f64 = 60.0;
const MODERATE_JAWLINE_MIN: f64 = 40.0;
const WIDE_FOREHEAD_MIN: f64 = 60.0;
const NORMAL_FOREHEAD_MIN: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JawlineLevel {
    Strong,
    Moderate,
    Soft,
}

impl JawlineLevel {
    pub fn from_strength(strength: f64) -> Self {
        if strength > STRONG_JAWLINE_MIN {
            JawlineLevel::Strong
        } else if strength > MODERATE_JAWLINE_MIN {
            JawlineLevel::Moderate
        } else {
            JawlineLevel::Soft
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForeheadLevel {
    Wide,
    Normal,
    Narrow,
}

impl ForeheadLevel {
    pub fn from_width(width: f64) -> Self {
        if width > WIDE_FOREHEAD_MIN {
            ForeheadLevel::Wide
        } else if width > NORMAL_FOREHEAD_MIN {
            ForeheadLevel::Normal
        } else {
            ForeheadLevel::Narrow
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ForeheadLevel::Wide => "wide",
            ForeheadLevel::Normal => "normal",
            ForeheadLevel::Narrow => "narrow",
        }
    }
}

fn shape_description(shape: FaceShape) -> &'static str {
    match shape {
        FaceShape::Oval => "a balanced oval shape, which is considered the most versatile face shape",
        FaceShape::Round => "a round face shape, which benefits from styles that add height and definition",
        FaceShape::Square => "a square face shape, which benefits from styles that soften angular features",
        FaceShape::Heart => {
            "a heart-shaped face with a wider forehead, which benefits from styles that add volume at the crown"
        }
        FaceShape::Long => "a long face shape, which benefits from styles that add width and balance",
        FaceShape::Diamond => "a diamond face shape, which benefits from styles that balance the cheekbones",
    }
}

fn jawline_description(level: JawlineLevel) -> &'static str {
    match level {
        JawlineLevel::Strong => "Your strong jawline can support more angular and minimal styles",
        JawlineLevel::Moderate => "Your moderate jawline works well with balanced styles",
        JawlineLevel::Soft => "Your softer jawline benefits from styles that add definition and structure",
    }
}

/// Paragraph explaining the ranking, anchored on the top match.
pub fn explanation(analysis: &FacialAnalysis, top: Option<&RecommendedStyle>) -> String {
    let basis = match analysis.source {
        AnalysisSource::Detector => "Based on facial landmark analysis",
        AnalysisSource::Simplified => "Based on a simplified, low-confidence estimate",
    };
    let jawline = JawlineLevel::from_strength(analysis.jawline_strength);
    let forehead = ForeheadLevel::from_width(analysis.forehead_width);

    let mut text = format!(
        "{basis}, you have {}. {}. ",
        shape_description(analysis.face_shape),
        jawline_description(jawline)
    );
    let _ = write!(
        text,
        "Your {} forehead and {} hairline position suggest styles that work with these proportions. ",
        forehead.as_str(),
        analysis.hairline_position
    );
    match top {
        Some(style) => {
            let _ = write!(
                text,
                "The top recommendation, \"{}\", scores {}% compatibility because it complements your specific facial features.",
                style.name, style.match_score
            );
        }
        None => text.push_str("No hairstyles in the catalog could be ranked."),
    }
    text
}

/// Multi-line styling tips for the analyzed face.
pub fn styling_advice(analysis: &FacialAnalysis) -> String {
    let mut advice = String::from("Personalized Styling Advice\n\n");

    let _ = writeln!(advice, "Face Shape: {}", analysis.face_shape.as_str().to_uppercase());
    advice.push_str("- This face shape pairs well with styles that emphasize your natural proportions.\n");

    if JawlineLevel::from_strength(analysis.jawline_strength) == JawlineLevel::Strong {
        advice.push_str("Strong Jawline: Consider styles that showcase this feature, like slicked-back or fades.\n");
    } else {
        advice.push_str("Softer Jawline: Styles with texture and volume add definition to your face.\n");
    }

    if ForeheadLevel::from_width(analysis.forehead_width) == ForeheadLevel::Wide {
        advice.push_str("Wide Forehead: Side parts, quiffs, and pompadours help balance proportions.\n");
    }

    match analysis.hairline_position {
        HairlinePosition::High => {
            advice.push_str("High Hairline: Styles with volume on top or longer hair help balance the forehead.\n")
        }
        HairlinePosition::Low => {
            advice.push_str("Low Hairline: Shorter styles work great and keep the look clean.\n")
        }
        HairlinePosition::Normal => {}
    }

    advice
}
