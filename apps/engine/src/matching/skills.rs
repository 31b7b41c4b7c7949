//! Skill matching — compares a candidate's skill set against a posting's
//! required/preferred sets and produces a score plus a per-skill breakdown.
//!
//! Per posting skill, in order: exact match on the normalized form (full
//! credit), synonym-table canonical match (full credit), best fuzzy
//! similarity at or above the threshold (partial credit equal to the
//! similarity), otherwise unmatched.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ScreeningConfig;
use crate::models::screening::{MatchKind, SkillCredit, SkillMatchResult};

use super::normalize::{normalize_skill, SynonymTable};
use super::similarity::{JaroWinkler, Similarity};

/// Relative weight of required vs preferred skills in the aggregate score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SkillWeights {
    pub required: f64,
    pub preferred: f64,
}

impl Default for SkillWeights {
    fn default() -> Self {
        Self {
            required: 1.0,
            preferred: 0.5,
        }
    }
}

pub struct SkillMatcher {
    synonyms: SynonymTable,
    similarity: Box<dyn Similarity>,
    fuzzy_threshold: f64,
    weights: SkillWeights,
}

struct Candidate<'a> {
    original: &'a str,
    normalized: String,
    canonical: String,
}

impl SkillMatcher {
    pub fn from_config(config: &ScreeningConfig) -> Self {
        Self {
            synonyms: config.synonyms.clone(),
            similarity: Box::new(JaroWinkler),
            fuzzy_threshold: config.fuzzy_threshold,
            weights: config.skill_weights,
        }
    }

    /// Swaps the fuzzy metric; the threshold contract stays the same.
    pub fn with_similarity(mut self, similarity: Box<dyn Similarity>) -> Self {
        self.similarity = similarity;
        self
    }

    pub fn match_skills(
        &self,
        candidate_skills: &[String],
        required_skills: &[String],
        preferred_skills: &[String],
    ) -> SkillMatchResult {
        let candidates: Vec<Candidate> = candidate_skills
            .iter()
            .filter(|s| !s.trim().is_empty())
            .map(|s| {
                let normalized = normalize_skill(s);
                let canonical = self.synonyms.canonical(&normalized);
                Candidate {
                    original: s.as_str(),
                    normalized,
                    canonical,
                }
            })
            .collect();

        // Both posting lists carry set semantics: duplicates within a list
        // collapse, and a skill present in both lists is required only.
        let required = dedupe_by_canonical(required_skills, &self.synonyms, &[]);
        let required_canon: Vec<String> = required
            .iter()
            .map(|s| self.synonyms.canonical(&normalize_skill(s)))
            .collect();
        let preferred = dedupe_by_canonical(preferred_skills, &self.synonyms, &required_canon);

        let mut credits = Vec::with_capacity(required.len() + preferred.len());
        let mut matched_required = Vec::new();
        let mut missing_required = Vec::new();
        let mut matched_preferred = Vec::new();

        let mut required_credit = 0.0;
        for skill in &required {
            let credit = self.credit_for(skill, &candidates);
            required_credit += credit.credit;
            if credit.credit > 0.0 {
                matched_required.push(skill.clone());
            } else {
                missing_required.push(skill.clone());
            }
            credits.push(credit);
        }

        let mut preferred_credit = 0.0;
        for skill in &preferred {
            let credit = self.credit_for(skill, &candidates);
            preferred_credit += credit.credit;
            if credit.credit > 0.0 {
                matched_preferred.push(skill.clone());
            }
            credits.push(credit);
        }

        let denominator = required.len() as f64 * self.weights.required
            + preferred.len() as f64 * self.weights.preferred;
        let score = if denominator == 0.0 {
            // No requirements at all: vacuously satisfied.
            1.0
        } else {
            (required_credit * self.weights.required + preferred_credit * self.weights.preferred)
                / denominator
        };

        debug!(
            required = required.len(),
            preferred = preferred.len(),
            matched_required = matched_required.len(),
            score,
            "matched skills"
        );

        SkillMatchResult {
            matched_required,
            missing_required,
            matched_preferred,
            credits,
            score,
        }
    }

    fn credit_for(&self, posting_skill: &str, candidates: &[Candidate]) -> SkillCredit {
        let normalized = normalize_skill(posting_skill);
        let canonical = self.synonyms.canonical(&normalized);

        for candidate in candidates {
            if candidate.normalized == normalized {
                return SkillCredit {
                    skill: posting_skill.to_string(),
                    credit: 1.0,
                    matched_via: Some(MatchKind::Exact),
                    matched_candidate: Some(candidate.original.to_string()),
                };
            }
        }

        for candidate in candidates {
            if candidate.canonical == canonical {
                return SkillCredit {
                    skill: posting_skill.to_string(),
                    credit: 1.0,
                    matched_via: Some(MatchKind::Synonym),
                    matched_candidate: Some(candidate.original.to_string()),
                };
            }
        }

        let mut best: Option<(&Candidate, f64)> = None;
        for candidate in candidates {
            let sim = self.similarity.similarity(&normalized, &candidate.normalized);
            match best {
                Some((_, best_sim)) if sim <= best_sim => {}
                _ => best = Some((candidate, sim)),
            }
        }

        match best {
            Some((candidate, sim)) if sim >= self.fuzzy_threshold => SkillCredit {
                skill: posting_skill.to_string(),
                credit: sim,
                matched_via: Some(MatchKind::Fuzzy),
                matched_candidate: Some(candidate.original.to_string()),
            },
            _ => SkillCredit {
                skill: posting_skill.to_string(),
                credit: 0.0,
                matched_via: None,
                matched_candidate: None,
            },
        }
    }
}

/// Keeps the first occurrence per canonical form, skipping blanks and any
/// skill whose canonical form appears in `exclude`.
fn dedupe_by_canonical(
    skills: &[String],
    synonyms: &SynonymTable,
    exclude: &[String],
) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut kept = Vec::new();

    for skill in skills {
        if skill.trim().is_empty() {
            continue;
        }
        let canonical = synonyms.canonical(&normalize_skill(skill));
        if exclude.contains(&canonical) || seen.contains(&canonical) {
            continue;
        }
        seen.push(canonical);
        kept.push(skill.clone());
    }
    kept
}
