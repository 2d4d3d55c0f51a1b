//! Rule-based hairstyle ranking.
//!
//! Every catalog entry starts at a base score and collects bonuses for face
//! shape, jawline, forehead, hairline and category fit. Scores are capped at
//! 100 and ranked with a stable sort, so ties keep catalog order.

use crate::advice::explanation;
use crate::catalog::{ForeheadTolerance, HairstyleCatalogEntry, StyleCategory};
use crate::types::{FaceShape, FacialAnalysis, HairlinePosition};
use serde::{Deserialize, Serialize};

pub const MAX_RECOMMENDATIONS: usize = 5;
pub const MAX_SCORE: u32 = 100;

const BASE_SCORE: u32 = 50;
const SHAPE_MATCH_BONUS: u32 = 35;
const SHAPE_PARTIAL_BONUS: u32 = 10;
const JAWLINE_MATCH_BONUS: u32 = 25;
const JAWLINE_PARTIAL_BONUS: u32 = 15;
/// How far below the required jawline strength still earns the partial bonus.
const JAWLINE_PARTIAL_MARGIN: f64 = 15.0;
const FOREHEAD_MATCH_BONUS: u32 = 15;
const FOREHEAD_PARTIAL_BONUS: u32 = 5;
const WIDE_FOREHEAD_MIN: f64 = 50.0;
const NORMAL_FOREHEAD_RANGE: std::ops::RangeInclusive<f64> = 40.0..=60.0;
const HIGH_HAIRLINE_BONUS: u32 = 10;
const SYNERGY_BONUS: u32 = 5;
const FADE_SYNERGY_MIN_JAWLINE: f64 = 60.0;

/// Suggested hair color for a face shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HairColor {
    pub hex: &'static str,
    pub name: &'static str,
}

/// Fixed shape -> color table.
pub fn suggested_color(shape: FaceShape) -> HairColor {
    match shape {
        FaceShape::Oval => HairColor { hex: "#6b4423", name: "brown" },
        FaceShape::Round => HairColor { hex: "#3d2817", name: "dark brown" },
        FaceShape::Square => HairColor { hex: "#8b6f47", name: "light brown" },
        FaceShape::Heart => HairColor { hex: "#a0302f", name: "red" },
        FaceShape::Long => HairColor { hex: "#e6c294", name: "blonde" },
        FaceShape::Diamond => HairColor { hex: "#3d2817", name: "dark brown" },
    }
}

/// One ranked catalog match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedStyle {
    pub style_id: String,
    pub name: String,
    pub category: StyleCategory,
    /// Integer compatibility [0, 100].
    pub match_score: u8,
    pub reasons_for_match: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_color: Option<String>,
}

/// Output of [`recommend`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// At most [`MAX_RECOMMENDATIONS`], best first.
    pub top_recommendations: Vec<RecommendedStyle>,
    /// Hex color for the analyzed face shape.
    pub suggested_color: String,
    pub explanation: String,
}

/// Score of one entry before ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleScore {
    pub score: u8,
    pub reasons: Vec<String>,
}

/// Score a single catalog entry against an analysis.
pub fn score_style(analysis: &FacialAnalysis, entry: &HairstyleCatalogEntry) -> StyleScore {
    let mut score = BASE_SCORE;
    let mut reasons = Vec::new();
    let shape = analysis.face_shape;
    let jawline = analysis.jawline_strength;
    let forehead = analysis.forehead_width;

    if entry.suits_shape(shape) {
        score += SHAPE_MATCH_BONUS;
        reasons.push(format!("Ideal for {shape} face shape"));
    } else {
        score += SHAPE_PARTIAL_BONUS;
        reasons.push(format!("Moderate for {shape} face shape"));
    }

    let required = entry.jawline_required_threshold;
    if jawline >= required {
        score += JAWLINE_MATCH_BONUS;
        reasons.push("Complements your jawline strength".to_string());
    } else if jawline >= required - JAWLINE_PARTIAL_MARGIN {
        score += JAWLINE_PARTIAL_BONUS;
        reasons.push("Somewhat compatible with your jawline".to_string());
    }

    match entry.forehead_tolerance {
        ForeheadTolerance::All => {
            score += FOREHEAD_MATCH_BONUS;
            reasons.push("Works for any forehead width".to_string());
        }
        ForeheadTolerance::Wide if forehead > WIDE_FOREHEAD_MIN => {
            score += FOREHEAD_MATCH_BONUS;
            reasons.push("Excellent for your wide forehead".to_string());
        }
        ForeheadTolerance::Wide => score += FOREHEAD_PARTIAL_BONUS,
        ForeheadTolerance::Normal if NORMAL_FOREHEAD_RANGE.contains(&forehead) => {
            score += FOREHEAD_MATCH_BONUS;
            reasons.push("Perfect for your forehead proportion".to_string());
        }
        ForeheadTolerance::Normal => {}
    }

    if analysis.hairline_position == HairlinePosition::High && entry.adds_front_volume() {
        score += HIGH_HAIRLINE_BONUS;
        reasons.push("Adds volume for high hairline".to_string());
    }

    let synergy = match entry.category {
        StyleCategory::Short => shape == FaceShape::Square,
        StyleCategory::Long => shape == FaceShape::Heart,
        StyleCategory::Fade => jawline > FADE_SYNERGY_MIN_JAWLINE,
        StyleCategory::Medium | StyleCategory::Curly => false,
    };
    if synergy {
        score += SYNERGY_BONUS;
    }

    StyleScore {
        score: score.min(MAX_SCORE) as u8,
        reasons,
    }
}

/// Rank `catalog` against `analysis` and return the top matches.
///
/// Never fails: an empty catalog yields no recommendations but still a color
/// and an explanation.
pub fn recommend(analysis: &FacialAnalysis, catalog: &[HairstyleCatalogEntry]) -> Recommendation {
    let color = suggested_color(analysis.face_shape);

    let mut scored: Vec<(&HairstyleCatalogEntry, StyleScore)> = catalog
        .iter()
        .map(|entry| {
            let s = score_style(analysis, entry);
            tracing::debug!(style = %entry.id, score = s.score, "scored hairstyle");
            (entry, s)
        })
        .collect();

    // Stable: equal scores keep catalog order.
    scored.sort_by(|a, b| b.1.score.cmp(&a.1.score));

    let top_recommendations: Vec<RecommendedStyle> = scored
        .into_iter()
        .take(MAX_RECOMMENDATIONS)
        .map(|(entry, s)| RecommendedStyle {
            style_id: entry.id.clone(),
            name: entry.name.clone(),
            category: entry.category,
            match_score: s.score,
            reasons_for_match: s.reasons,
            suggested_color: Some(color.hex.to_string()),
        })
        .collect();

    tracing::info!(
        candidates = catalog.len(),
        returned = top_recommendations.len(),
        top = top_recommendations.first().map(|r| r.name.as_str()).unwrap_or("-"),
        "ranked hairstyles"
    );

    Recommendation {
        explanation: explanation(analysis, top_recommendations.first()),
        top_recommendations,
        suggested_color: color.hex.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, StyleTag};
    use crate::types::{AnalysisSource, FacialProportions};

    fn analysis(shape: FaceShape, jawline: f64, forehead: f64, hairline: HairlinePosition) -> FacialAnalysis {
        FacialAnalysis {
            face_shape: shape,
            jawline_strength: jawline,
            forehead_width: forehead,
            hairline_position: hairline,
            facial_proportions: FacialProportions::default(),
            confidence: 90,
            source: AnalysisSource::Detector,
            raw_landmarks: None,
        }
    }

    fn entry(
        id: &str,
        category: StyleCategory,
        shapes: &[FaceShape],
        jawline_required: f64,
        tolerance: ForeheadTolerance,
        tags: &[StyleTag],
    ) -> HairstyleCatalogEntry {
        HairstyleCatalogEntry {
            id: id.to_string(),
            name: format!("Style {id}"),
            category,
            compatible_shapes: shapes.to_vec(),
            jawline_required_threshold: jawline_required,
            forehead_tolerance: tolerance,
            tags: tags.to_vec(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_score_breakdown() {
        let a = analysis(FaceShape::Oval, 40.0, 45.0, HairlinePosition::Normal);

        // 50 + 10 (shape miss) + 15 (within 15 of 50) + 5 (wide, narrow forehead)
        let e = entry("x", StyleCategory::Medium, &[FaceShape::Round], 50.0, ForeheadTolerance::Wide, &[]);
        let s = score_style(&a, &e);
        assert_eq!(s.score, 80);
        assert_eq!(
            s.reasons,
            ["Moderate for oval face shape", "Somewhat compatible with your jawline"]
        );

        // 50 + 10 + 0 (jaw 40 < 60 - 15) + 15 (normal, 45 in range)
        let e = entry("y", StyleCategory::Curly, &[FaceShape::Round], 60.0, ForeheadTolerance::Normal, &[]);
        let s = score_style(&a, &e);
        assert_eq!(s.score, 75);
        assert_eq!(s.reasons.last().unwrap(), "Perfect for your forehead proportion");
    }

    #[test]
    fn test_jawline_partial_margin_is_inclusive() {
        let e = entry("j", StyleCategory::Medium, &[FaceShape::Round], 50.0, ForeheadTolerance::Normal, &[]);
        // 50 + 10 + 15, forehead 0 earns nothing
        let at_margin = analysis(FaceShape::Oval, 35.0, 0.0, HairlinePosition::Normal);
        assert_eq!(score_style(&at_margin, &e).score, 75);
        let below = analysis(FaceShape::Oval, 34.0, 0.0, HairlinePosition::Normal);
        assert_eq!(score_style(&below, &e).score, 60);
        let at_required = analysis(FaceShape::Oval, 50.0, 0.0, HairlinePosition::Normal);
        assert_eq!(score_style(&at_required, &e).score, 85);
    }

    #[test]
    fn test_normal_forehead_range_is_inclusive() {
        let e = entry("n", StyleCategory::Medium, &[FaceShape::Round], 90.0, ForeheadTolerance::Normal, &[]);
        for forehead in [40.0, 60.0] {
            let a = analysis(FaceShape::Oval, 0.0, forehead, HairlinePosition::Normal);
            assert_eq!(score_style(&a, &e).score, 75, "forehead {forehead}");
        }
        for forehead in [39.9, 60.1] {
            let a = analysis(FaceShape::Oval, 0.0, forehead, HairlinePosition::Normal);
            assert_eq!(score_style(&a, &e).score, 60, "forehead {forehead}");
        }
    }

    #[test]
    fn test_wide_forehead_threshold_is_exclusive() {
        let e = entry("w", StyleCategory::Medium, &[FaceShape::Round], 90.0, ForeheadTolerance::Wide, &[]);
        let at = analysis(FaceShape::Oval, 0.0, 50.0, HairlinePosition::Normal);
        assert_eq!(score_style(&at, &e).score, 65);
        let above = analysis(FaceShape::Oval, 0.0, 50.5, HairlinePosition::Normal);
        assert_eq!(score_style(&above, &e).score, 75);
    }

    #[test]
    fn test_fade_synergy_threshold_is_exclusive() {
        let e = entry("f", StyleCategory::Fade, &[FaceShape::Round], 100.0, ForeheadTolerance::All, &[]);
        // 50 + 10 + 15 (all), jawline far below 100 - 15
        let at = analysis(FaceShape::Oval, 60.0, 0.0, HairlinePosition::Normal);
        assert_eq!(score_style(&at, &e).score, 75);
        let above = analysis(FaceShape::Oval, 61.0, 0.0, HairlinePosition::Normal);
        assert_eq!(score_style(&above, &e).score, 80);
    }

    #[test]
    fn test_score_capped_at_100() {
        let a = analysis(FaceShape::Square, 100.0, 100.0, HairlinePosition::High);
        // 50 + 35 + 25 + 15 + 10 + 5 = 140
        let e = entry(
            "max",
            StyleCategory::Short,
            &[FaceShape::Square],
            0.0,
            ForeheadTolerance::All,
            &[StyleTag::Quiff],
        );
        assert_eq!(score_style(&a, &e).score, 100);
    }

    #[test]
    fn test_high_hairline_bonus_uses_tags_not_names() {
        let a = analysis(FaceShape::Long, 0.0, 30.0, HairlinePosition::High);
        let mut plain = entry("p", StyleCategory::Medium, &[FaceShape::Oval], 50.0, ForeheadTolerance::Normal, &[]);
        plain.name = "Side Sweep Pompadour".to_string();
        let tagged = entry(
            "t",
            StyleCategory::Medium,
            &[FaceShape::Oval],
            50.0,
            ForeheadTolerance::Normal,
            &[StyleTag::SidePart],
        );

        // 50 + 10
        assert_eq!(score_style(&a, &plain).score, 60);
        let s = score_style(&a, &tagged);
        assert_eq!(s.score, 70);
        assert!(s.reasons.iter().any(|r| r == "Adds volume for high hairline"));

        // No bonus unless the hairline is high.
        let normal = analysis(FaceShape::Long, 0.0, 30.0, HairlinePosition::Normal);
        assert_eq!(score_style(&normal, &tagged).score, 60);
    }

    #[test]
    fn test_category_synergy() {
        let a = analysis(FaceShape::Oval, 70.0, 50.0, HairlinePosition::Normal);
        // 50 + 10 + 15 (70 >= 80 - 15) + 15
        let medium = entry("m", StyleCategory::Medium, &[FaceShape::Round], 80.0, ForeheadTolerance::Normal, &[]);
        let fade = entry("f", StyleCategory::Fade, &[FaceShape::Round], 80.0, ForeheadTolerance::Normal, &[]);
        assert_eq!(score_style(&a, &medium).score, 90);
        assert_eq!(score_style(&a, &fade).score, 95);

        let heart = analysis(FaceShape::Heart, 0.0, 0.0, HairlinePosition::Low);
        let long = entry("l", StyleCategory::Long, &[], 90.0, ForeheadTolerance::Normal, &[]);
        // 50 + 10 + 5
        assert_eq!(score_style(&heart, &long).score, 65);
    }

    #[test]
    fn test_ranking_is_stable_descending() {
        let a = analysis(FaceShape::Oval, 40.0, 45.0, HairlinePosition::Normal);
        let catalog = vec![
            entry("a", StyleCategory::Medium, &[FaceShape::Round], 60.0, ForeheadTolerance::Wide, &[]), // 65
            entry("b", StyleCategory::Medium, &[FaceShape::Round], 50.0, ForeheadTolerance::Normal, &[]), // 90
            entry("c", StyleCategory::Medium, &[FaceShape::Round], 60.0, ForeheadTolerance::Wide, &[]), // 65
        ];
        let result = recommend(&a, &catalog);
        let ids: Vec<&str> = result.top_recommendations.iter().map(|r| r.style_id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
        let scores: Vec<u8> = result.top_recommendations.iter().map(|r| r.match_score).collect();
        assert_eq!(scores, [90, 65, 65]);
    }

    #[test]
    fn test_builtin_ties_keep_catalog_order() {
        let a = analysis(FaceShape::Square, 100.0, 100.0, HairlinePosition::High);
        let result = recommend(&a, Catalog::builtin().unwrap().entries());
        let ids: Vec<&str> = result.top_recommendations.iter().map(|r| r.style_id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
        assert!(result.top_recommendations.iter().all(|r| r.match_score == 100));
    }

    #[test]
    fn test_at_most_five_and_bounded() {
        let catalog = Catalog::builtin().unwrap();
        for shape in FaceShape::ALL {
            for jaw in [0.0, 35.0, 61.0, 100.0] {
                for forehead in [0.0, 45.0, 55.0, 100.0] {
                    for hairline in [HairlinePosition::High, HairlinePosition::Normal, HairlinePosition::Low] {
                        let result = recommend(&analysis(shape, jaw, forehead, hairline), catalog.entries());
                        assert_eq!(result.top_recommendations.len(), MAX_RECOMMENDATIONS);
                        assert!(result.top_recommendations.iter().all(|r| r.match_score <= 100));
                        assert!(result
                            .top_recommendations
                            .windows(2)
                            .all(|w| w[0].match_score >= w[1].match_score));
                    }
                }
            }
        }
    }

    #[test]
    fn test_small_catalog_returns_all() {
        let a = analysis(FaceShape::Round, 50.0, 50.0, HairlinePosition::Normal);
        let catalog = vec![entry("only", StyleCategory::Fade, &[FaceShape::Round], 30.0, ForeheadTolerance::All, &[])];
        let result = recommend(&a, &catalog);
        assert_eq!(result.top_recommendations.len(), 1);
        assert_eq!(result.top_recommendations[0].suggested_color.as_deref(), Some("#3d2817"));
    }

    #[test]
    fn test_empty_catalog() {
        let a = analysis(FaceShape::Heart, 50.0, 50.0, HairlinePosition::Normal);
        let result = recommend(&a, &[]);
        assert!(result.top_recommendations.is_empty());
        assert_eq!(result.suggested_color, "#a0302f");
        assert!(!result.explanation.is_empty());
    }

    #[test]
    fn test_recommend_is_idempotent() {
        let a = analysis(FaceShape::Diamond, 55.0, 62.0, HairlinePosition::High);
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(recommend(&a, catalog.entries()), recommend(&a, catalog.entries()));
    }

    #[test]
    fn test_color_table_covers_every_shape() {
        for shape in FaceShape::ALL {
            let color = suggested_color(shape);
            assert!(color.hex.starts_with('#') && color.hex.len() == 7);
        }
        assert_eq!(suggested_color(FaceShape::Long).hex, "#e6c294");
    }
}
