//! Normalized 0-100 metrics derived from raw proportions.
//!
//! The offsets and multipliers are empirical constants; recommendation
//! thresholds in the catalog were tuned against them.

use crate::types::{FacialProportions, HairlinePosition};

const JAWLINE_RATIO_FLOOR: f64 = 60.0;
const JAWLINE_GAIN: f64 = 5.0;
const HIGH_HAIRLINE_MIN: f64 = 40.0;
const LOW_HAIRLINE_MAX: f64 = 25.0;

/// Clamp to [0, 100]. NaN (0/0 ratios) maps to 0.
fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Jaw-to-cheek width as a strength score. A 60% ratio scores 0, 80% and
/// above scores 100.
pub fn jawline_strength(p: &FacialProportions) -> f64 {
    let ratio = p.jawline_width / p.face_width * 100.0;
    clamp_score((ratio - JAWLINE_RATIO_FLOOR) * JAWLINE_GAIN)
}

/// Forehead proxy as a percentage of face width.
pub fn forehead_width(p: &FacialProportions) -> f64 {
    clamp_score(p.forehead_area / p.face_width * 100.0)
}

/// Bucket the forehead proxy relative to face length.
pub fn hairline_position(p: &FacialProportions) -> HairlinePosition {
    let ratio = p.forehead_area / p.face_length * 100.0;
    if ratio > HIGH_HAIRLINE_MIN {
        HairlinePosition::High
    } else if ratio < LOW_HAIRLINE_MAX {
        HairlinePosition::Low
    } else {
        HairlinePosition::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(face_length: f64, face_width: f64, jawline_width: f64, forehead_area: f64) -> FacialProportions {
        FacialProportions { face_length, face_width, jawline_width, forehead_area }
    }

    #[test]
    fn test_strong_jawline_saturates() {
        // ratio 90 -> (90 - 60) * 5 = 150 -> 100
        assert_eq!(jawline_strength(&props(120.0, 100.0, 90.0, 30.0)), 100.0);
    }

    #[test]
    fn test_jawline_midrange() {
        // ratio 70 -> 50
        assert!((jawline_strength(&props(120.0, 100.0, 70.0, 30.0)) - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_weak_jawline_floors_at_zero() {
        assert_eq!(jawline_strength(&props(120.0, 100.0, 50.0, 30.0)), 0.0);
    }

    #[test]
    fn test_forehead_width_percent() {
        assert!((forehead_width(&props(120.0, 100.0, 85.0, 45.0)) - 45.0).abs() < 1e-3);
        assert_eq!(forehead_width(&props(120.0, 100.0, 85.0, 180.0)), 100.0);
    }

    #[test]
    fn test_hairline_buckets() {
        assert_eq!(hairline_position(&props(100.0, 100.0, 85.0, 50.0)), HairlinePosition::High);
        assert_eq!(hairline_position(&props(100.0, 100.0, 85.0, 30.0)), HairlinePosition::Normal);
        assert_eq!(hairline_position(&props(100.0, 100.0, 85.0, 20.0)), HairlinePosition::Low);
    }

    #[test]
    fn test_hairline_thresholds_are_exclusive() {
        // Ratios of exactly 40 and 25 stay normal.
        assert_eq!(hairline_position(&props(100.0, 100.0, 85.0, 40.0)), HairlinePosition::Normal);
        assert_eq!(hairline_position(&props(100.0, 100.0, 85.0, 25.0)), HairlinePosition::Normal);
        assert_eq!(hairline_position(&props(125.0, 100.0, 85.0, 50.0)), HairlinePosition::Normal);
        assert_eq!(hairline_position(&props(120.0, 100.0, 85.0, 30.0)), HairlinePosition::Normal);
    }

    #[test]
    fn test_jawline_floor_ratio_scores_zero() {
        assert_eq!(jawline_strength(&props(120.0, 100.0, 60.0, 30.0)), 0.0);
        assert_eq!(jawline_strength(&props(120.0, 100.0, 80.0, 30.0)), 100.0);
    }

    #[test]
    fn test_scores_bounded_for_extreme_inputs() {
        let extremes = [0.0f64, 1e-30, 1.0, 1e6, 1e30, f64::MAX, f64::INFINITY];
        for &length in &extremes {
            for &width in &extremes {
                for &jaw in &extremes {
                    for &forehead in &extremes {
                        let p = props(length, width, jaw, forehead);
                        let j = jawline_strength(&p);
                        let f = forehead_width(&p);
                        assert!((0.0..=100.0).contains(&j), "jawline {j} for {p:?}");
                        assert!((0.0..=100.0).contains(&f), "forehead {f} for {p:?}");
                        let _ = hairline_position(&p);
                    }
                }
            }
        }
    }
}
