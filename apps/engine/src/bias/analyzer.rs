//! Bias-risk analysis over the original (non-anonymized) resume.
//!
//! Indicator categories, detection patterns, and weights are data, not
//! control flow: extending coverage means adding a table row.

use std::sync::LazyLock;

use chrono::{Datelike, Utc};
use regex::Regex;
use tracing::warn;

use crate::models::resume::ParsedResume;
use crate::models::screening::{BiasReport, RiskCategory, RiskIndicator};

/// (category, weight, detection pattern). Each category contributes its
/// weight at most once; the total is capped at 1.0.
const INDICATOR_PATTERNS: &[(RiskCategory, f64, &str)] = &[
    (
        RiskCategory::PhotoReference,
        0.15,
        r"(?i)\b(?:photo(?:graph)?|headshot|picture)\b",
    ),
    (
        RiskCategory::GenderedLanguage,
        0.10,
        r"(?i)\b(?:he|she|him|her|his|hers|male|female)\b",
    ),
    (
        RiskCategory::AgeMention,
        0.20,
        r"(?i)\b\d{1,2}\s*(?:years?[\s-]old|y\.?o\.?)\b",
    ),
    (
        RiskCategory::DateOfBirth,
        0.20,
        r"(?i)\b(?:date of birth|d\.o\.b\.?|born (?:in|on) \d{4})\b",
    ),
    (
        RiskCategory::GreekLifeAffiliation,
        0.10,
        r"(?i)\b(?:fraternity|sorority)\b",
    ),
    (
        RiskCategory::ReligiousAffiliation,
        0.15,
        r"(?i)\b(?:church|catholic|christian|muslim|islamic|hindu|jewish|buddhist|sikh|mosque|synagogue)\b",
    ),
    (
        RiskCategory::MaritalStatus,
        0.10,
        r"(?i)\b(?:married|divorced|widowed|marital status)\b",
    ),
    (
        RiskCategory::NationalityMention,
        0.10,
        r"(?i)\b(?:nationality|citizenship|visa status)\b",
    ),
];

/// A graduation year at least this far back implies the candidate's age.
const GRADUATION_AGE_YEARS: i32 = 25;
const GRADUATION_AGE_WEIGHT: f64 = 0.10;

static COMPILED_PATTERNS: LazyLock<Vec<(RiskCategory, f64, Regex)>> = LazyLock::new(|| {
    INDICATOR_PATTERNS
        .iter()
        .map(|(category, weight, pattern)| {
            (
                *category,
                *weight,
                Regex::new(pattern).expect("indicator pattern compiles"),
            )
        })
        .collect()
});

/// Scans resume content for bias-risk indicators. Read-only; never alters
/// the resume or the scoring path.
#[derive(Debug, Clone, Copy, Default)]
pub struct BiasAnalyzer;

impl BiasAnalyzer {
    pub fn analyze(&self, resume: &ParsedResume) -> BiasReport {
        self.analyze_at(resume, Utc::now().year())
    }

    fn analyze_at(&self, resume: &ParsedResume, current_year: i32) -> BiasReport {
        let mut indicators = Vec::new();
        let mut risk_score = 0.0;

        for (category, weight, pattern) in COMPILED_PATTERNS.iter() {
            if let Some(found) = pattern.find(&resume.raw_text) {
                indicators.push(RiskIndicator {
                    category: *category,
                    evidence: found.as_str().to_string(),
                });
                risk_score += weight;
            }
        }

        let earliest_graduation = resume
            .education
            .iter()
            .filter_map(|e| e.graduation_year)
            .min();
        if let Some(year) = earliest_graduation {
            if year <= current_year - GRADUATION_AGE_YEARS {
                indicators.push(RiskIndicator {
                    category: RiskCategory::GraduationYear,
                    evidence: format!("graduated {year}"),
                });
                risk_score += GRADUATION_AGE_WEIGHT;
            }
        }

        let risk_score = risk_score.min(1.0);
        if risk_score >= 0.5 {
            warn!(
                resume_id = %resume.id,
                risk_score,
                indicators = indicators.len(),
                "high bias risk detected"
            );
        }

        BiasReport {
            indicators,
            risk_score,
        }
    }
}
