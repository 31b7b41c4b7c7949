//! Education scoring on the ordinal degree scale.

use crate::models::resume::{DegreeLevel, EducationEntry};

/// Ordinal distance between the bottom and top of the scale; a candidate
/// with no education at all scores 0.0 against a Doctorate requirement.
const MAX_GAP: f64 = (DegreeLevel::COUNT - 1) as f64;

/// Meeting or exceeding the requirement scores 1.0; each ordinal step short
/// costs a linear share of the scale.
pub fn score_education(education: &[EducationEntry], required: DegreeLevel) -> f64 {
    let highest = education
        .iter()
        .map(|e| e.degree_level)
        .max()
        .unwrap_or(DegreeLevel::None);

    if highest >= required {
        return 1.0;
    }

    let gap = (required.rank() - highest.rank()) as f64;
    (1.0 - gap / MAX_GAP).max(0.0)
}
