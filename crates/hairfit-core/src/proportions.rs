//! Raw facial measurements from landmark positions.

use crate::landmarks::{
    LandmarkSet, CHIN, FOREHEAD_REFERENCE, LEFT_CHEEK, LEFT_JAW, NOSE_TIP, RIGHT_CHEEK, RIGHT_JAW,
};
use crate::types::FacialProportions;

/// Derive the four reference distances from a validated landmark set.
///
/// The landmark count is enforced when the [`LandmarkSet`] is built, so this
/// cannot fail.
pub fn compute_proportions(landmarks: &LandmarkSet) -> FacialProportions {
    let forehead = landmarks[FOREHEAD_REFERENCE];
    let chin = landmarks[CHIN];
    let left_cheek = landmarks[LEFT_CHEEK];
    let right_cheek = landmarks[RIGHT_CHEEK];
    let left_jaw = landmarks[LEFT_JAW];
    let right_jaw = landmarks[RIGHT_JAW];
    let nose_tip = landmarks[NOSE_TIP];

    let proportions = FacialProportions {
        face_length: chin.distance(&forehead),
        face_width: right_cheek.distance(&left_cheek),
        jawline_width: right_jaw.distance(&left_jaw),
        // Horizontal cheek span against vertical nose-to-forehead span.
        forehead_area: (right_cheek.x - left_cheek.x).hypot(nose_tip.y - forehead.y),
    };

    tracing::debug!(
        face_length = proportions.face_length,
        face_width = proportions.face_width,
        jawline_width = proportions.jawline_width,
        forehead_area = proportions.forehead_area,
        "computed facial proportions"
    );

    proportions
}
