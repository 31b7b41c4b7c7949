use serde::{Deserialize, Serialize};

use crate::errors::EngineError;
use crate::models::screening::{ComponentScore, ScoreBreakdown};

/// Fixed component weights: 0.5 skill, 0.3 experience, 0.2 education.
/// Must sum to 1.0; validated at config construction, not silently
/// renormalized.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skill: f64,
    pub experience: f64,
    pub education: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill: 0.5,
            experience: 0.3,
            education: 0.2,
        }
    }
}

impl ScoringWeights {
    pub fn validate(&self) -> Result<(), EngineError> {
        for (name, w) in [
            ("skill", self.skill),
            ("experience", self.experience),
            ("education", self.education),
        ] {
            if !(0.0..=1.0).contains(&w) {
                return Err(EngineError::InvalidWeights(format!(
                    "{name} weight {w} outside [0, 1]"
                )));
            }
        }

        let sum = self.skill + self.experience + self.education;
        if (sum - 1.0).abs() > 1e-6 {
            return Err(EngineError::InvalidWeights(format!(
                "weights sum to {sum}, expected 1.0"
            )));
        }
        Ok(())
    }
}

/// Combines the three component scores (each in `[0, 1]`) into an overall
/// score on the 0-100 scale plus a breakdown for explainability. Pure and
/// deterministic.
pub fn aggregate(
    skill: f64,
    experience: f64,
    education: f64,
    weights: &ScoringWeights,
) -> (f64, ScoreBreakdown) {
    let breakdown = ScoreBreakdown {
        skill: ComponentScore {
            score: skill,
            weight: weights.skill,
            weighted: skill * weights.skill,
        },
        experience: ComponentScore {
            score: experience,
            weight: weights.experience,
            weighted: experience * weights.experience,
        },
        education: ComponentScore {
            score: education,
            weight: weights.education,
            weighted: education * weights.education,
        },
    };

    let overall = (breakdown.skill.weighted
        + breakdown.experience.weighted
        + breakdown.education.weighted)
        * 100.0;

    (overall.clamp(0.0, 100.0), breakdown)
}
