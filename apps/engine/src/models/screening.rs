use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a single posting skill was credited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    Synonym,
    Fuzzy,
}

/// Per-skill credit explanation. `credit` is 1.0 for exact/synonym hits, the
/// similarity value for fuzzy hits, and 0.0 when unmatched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCredit {
    pub skill: String,
    pub credit: f64,
    pub matched_via: Option<MatchKind>,
    pub matched_candidate: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillMatchResult {
    pub matched_required: Vec<String>,
    pub missing_required: Vec<String>,
    pub matched_preferred: Vec<String>,
    pub credits: Vec<SkillCredit>,
    pub score: f64,
}

/// One weighted component of the overall score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ComponentScore {
    pub score: f64,
    pub weight: f64,
    pub weighted: f64,
}

/// Explains how the overall score was assembled from its components.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skill: ComponentScore,
    pub experience: ComponentScore,
    pub education: ComponentScore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    PhotoReference,
    GenderedLanguage,
    AgeMention,
    DateOfBirth,
    GraduationYear,
    GreekLifeAffiliation,
    ReligiousAffiliation,
    MaritalStatus,
    NationalityMention,
}

/// A detected textual signal correlated with a protected characteristic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskIndicator {
    pub category: RiskCategory,
    pub evidence: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiasReport {
    pub indicators: Vec<RiskIndicator>,
    pub risk_score: f64,
}

/// Outcome of evaluating one resume against one job posting. Immutable after
/// creation; `rank` is only populated on ranking output copies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningResult {
    pub resume_id: Uuid,
    pub job_posting_id: Uuid,
    pub skill_score: f64,
    pub experience_score: f64,
    pub education_score: f64,
    pub overall_score: f64,
    pub breakdown: ScoreBreakdown,
    pub skill_detail: SkillMatchResult,
    pub bias_report: Option<BiasReport>,
    pub anonymized_score: Option<f64>,
    pub rank: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_category_serde_snake_case() {
        let json = serde_json::to_string(&RiskCategory::GreekLifeAffiliation).unwrap();
        assert_eq!(json, r#""greek_life_affiliation""#);
    }

    #[test]
    fn test_match_kind_serde_snake_case() {
        let json = serde_json::to_string(&MatchKind::Fuzzy).unwrap();
        assert_eq!(json, r#""fuzzy""#);
        let back: MatchKind = serde_json::from_str(r#""synonym""#).unwrap();
        assert_eq!(back, MatchKind::Synonym);
    }
}
