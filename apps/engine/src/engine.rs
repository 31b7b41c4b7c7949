//! Top-level screening engine — composes the skill, experience, and
//! education scorers with aggregation, bias auditing, and batch ranking.
//!
//! `ScreeningEngine` is the default backend behind the `Screener` trait;
//! callers hold an `Arc<dyn Screener>` and can swap implementations without
//! touching call sites.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::task::JoinSet;
use tracing::debug;

use crate::bias::{Anonymizer, BiasAnalyzer};
use crate::config::ScreeningConfig;
use crate::errors::EngineError;
use crate::matching::education::score_education;
use crate::matching::experience::score_experience;
use crate::matching::skills::SkillMatcher;
use crate::models::job::JobPosting;
use crate::models::resume::ParsedResume;
use crate::models::screening::ScreeningResult;
use crate::ranking;
use crate::scoring::aggregate;

/// The screening backend trait. Implement this to swap scoring strategies
/// without touching caller code.
#[async_trait]
pub trait Screener: Send + Sync {
    async fn screen(
        &self,
        resume: &ParsedResume,
        posting: &JobPosting,
    ) -> Result<ScreeningResult, EngineError>;
}

/// Deterministic weighted-scoring engine. Stateless apart from its
/// configuration; evaluations never observe each other.
pub struct ScreeningEngine {
    config: ScreeningConfig,
    matcher: SkillMatcher,
    anonymizer: Anonymizer,
    analyzer: BiasAnalyzer,
}

impl ScreeningEngine {
    pub fn new(config: ScreeningConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let matcher = SkillMatcher::from_config(&config);
        Ok(Self {
            config,
            matcher,
            anonymizer: Anonymizer,
            analyzer: BiasAnalyzer,
        })
    }

    /// Evaluates one resume against one posting: component scores, weighted
    /// aggregation, and the explanatory breakdown.
    pub fn evaluate(
        &self,
        resume: &ParsedResume,
        posting: &JobPosting,
    ) -> Result<ScreeningResult, EngineError> {
        let today = Utc::now().naive_utc().date();

        let skill_match = self.matcher.match_skills(
            &resume.skills,
            &posting.required_skills,
            &posting.preferred_skills,
        );
        let experience_score =
            score_experience(&resume.work_history, posting.min_experience_years, today)?;
        let education_score = score_education(&resume.education, posting.required_education);

        let (overall_score, breakdown) = aggregate(
            skill_match.score,
            experience_score,
            education_score,
            &self.config.weights,
        );

        debug!(
            resume_id = %resume.id,
            job_posting_id = %posting.id,
            skill = skill_match.score,
            experience = experience_score,
            education = education_score,
            overall = overall_score,
            "screened resume"
        );

        Ok(ScreeningResult {
            resume_id: resume.id,
            job_posting_id: posting.id,
            skill_score: skill_match.score,
            experience_score,
            education_score,
            overall_score,
            breakdown,
            skill_detail: skill_match,
            bias_report: None,
            anonymized_score: None,
            rank: None,
        })
    }

    /// Evaluation plus the bias audit: a risk report over the original
    /// resume, and a comparison score computed against the anonymized copy.
    /// A large gap between the two scores suggests redactable signals
    /// influenced the original evaluation.
    pub fn screen_with_audit(
        &self,
        resume: &ParsedResume,
        posting: &JobPosting,
    ) -> Result<ScreeningResult, EngineError> {
        let mut result = self.evaluate(resume, posting)?;

        let report = self.analyzer.analyze(resume);
        let anonymized = self.anonymizer.anonymize(resume);
        let anonymized_result = self.evaluate(&anonymized, posting)?;

        result.bias_report = Some(report);
        result.anonymized_score = Some(anonymized_result.overall_score);
        Ok(result)
    }

    /// Screens many resumes against one posting concurrently and returns the
    /// ranked results. Evaluations are independent; any failing resume fails
    /// the batch before results are returned.
    pub async fn screen_batch(
        self: Arc<Self>,
        resumes: Vec<ParsedResume>,
        posting: &JobPosting,
    ) -> Result<Vec<ScreeningResult>, EngineError> {
        let posting = Arc::new(posting.clone());
        let mut tasks = JoinSet::new();
        for resume in resumes {
            let engine = Arc::clone(&self);
            let posting = Arc::clone(&posting);
            tasks.spawn(async move { engine.screen_with_audit(&resume, &posting) });
        }

        let mut results = Vec::with_capacity(tasks.len());
        while let Some(joined) = tasks.join_next().await {
            let result = joined.map_err(|e| EngineError::Internal(anyhow::Error::new(e)))?;
            results.push(result?);
        }

        Ok(ranking::rank(results))
    }
}

#[async_trait]
impl Screener for ScreeningEngine {
    async fn screen(
        &self,
        resume: &ParsedResume,
        posting: &JobPosting,
    ) -> Result<ScreeningResult, EngineError> {
        self.evaluate(resume, posting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{DegreeLevel, EducationEntry, WorkEntry};
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn engine() -> ScreeningEngine {
        ScreeningEngine::new(ScreeningConfig::default()).unwrap()
    }

    fn candidate() -> ParsedResume {
        ParsedResume {
            id: Uuid::from_u128(1),
            name: Some("Jane Doe".to_string()),
            email: Some("jane@example.com".to_string()),
            phone: None,
            skills: vec!["Python".to_string(), "Django".to_string()],
            work_history: vec![WorkEntry {
                title: "Backend Engineer".to_string(),
                start: date(2017, 1, 1),
                end: Some(date(2023, 1, 1)),
                description: "Built REST services.".to_string(),
            }],
            education: vec![EducationEntry {
                degree_level: DegreeLevel::Bachelor,
                field: "CS".to_string(),
                institution: "State University".to_string(),
                graduation_year: Some(2016),
            }],
            raw_text: "Jane Doe. Backend engineer, Python and Django.".to_string(),
        }
    }

    fn posting() -> JobPosting {
        JobPosting {
            id: Uuid::from_u128(100),
            title: "Python Engineer".to_string(),
            required_skills: vec!["Python".to_string(), "FastAPI".to_string()],
            preferred_skills: vec!["AWS".to_string()],
            min_experience_years: 5.0,
            required_education: DegreeLevel::Bachelor,
        }
    }

    #[test]
    fn test_end_to_end_scenario() {
        // 1 of 2 required matched, no preferred, Django is below the fuzzy
        // threshold for FastAPI: skill = 1.0 / (2 + 0.5) = 0.4.
        // 6 years vs 5 required caps experience at 1.0; Bachelor meets the
        // education bar. Overall: 100 * (0.5*0.4 + 0.3 + 0.2) = 70.
        let result = engine().evaluate(&candidate(), &posting()).unwrap();

        assert!((result.skill_score - 0.4).abs() < 1e-9, "skill was {}", result.skill_score);
        assert_eq!(result.experience_score, 1.0);
        assert_eq!(result.education_score, 1.0);
        assert!((result.overall_score - 70.0).abs() < 1e-9, "overall was {}", result.overall_score);

        assert_eq!(result.skill_detail.matched_required, vec!["Python"]);
        assert_eq!(result.skill_detail.missing_required, vec!["FastAPI"]);
        assert!(result.skill_detail.matched_preferred.is_empty());
        assert!(result.bias_report.is_none());
        assert!(result.rank.is_none());
    }

    #[test]
    fn test_component_scores_are_bounded() {
        let result = engine().evaluate(&candidate(), &posting()).unwrap();
        for score in [
            result.skill_score,
            result.experience_score,
            result.education_score,
        ] {
            assert!((0.0..=1.0).contains(&score));
        }
        assert!((0.0..=100.0).contains(&result.overall_score));
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let mut config = ScreeningConfig::default();
        config.weights.education = 0.9;
        assert!(matches!(
            ScreeningEngine::new(config),
            Err(EngineError::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_malformed_work_history_fails_fast() {
        let mut resume = candidate();
        resume.work_history[0].end = Some(date(2015, 1, 1));
        let err = engine().evaluate(&resume, &posting()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidDateRange { .. }));
    }

    #[test]
    fn test_audit_attaches_report_and_anonymized_score() {
        let result = engine()
            .screen_with_audit(&candidate(), &posting())
            .unwrap();

        let report = result.bias_report.expect("bias report attached");
        assert!((0.0..=1.0).contains(&report.risk_score));

        // Scoring inputs are structured fields, so redaction must not move
        // the comparison score for this resume.
        let anonymized = result.anonymized_score.expect("anonymized score attached");
        assert!((anonymized - result.overall_score).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_batch_returns_ranked_results() {
        let engine = Arc::new(engine());

        let strong = candidate();
        let mut weak = candidate();
        weak.id = Uuid::from_u128(2);
        weak.skills = vec!["Excel".to_string()];
        weak.education[0].degree_level = DegreeLevel::HighSchool;

        let ranked = Arc::clone(&engine)
            .screen_batch(vec![weak, strong], &posting())
            .await
            .unwrap();

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].resume_id, Uuid::from_u128(1));
        assert_eq!(ranked[0].rank, Some(1));
        assert_eq!(ranked[1].rank, Some(2));
        assert!(ranked[0].overall_score > ranked[1].overall_score);
        assert!(ranked.iter().all(|r| r.bias_report.is_some()));
    }

    #[tokio::test]
    async fn test_batch_fails_on_malformed_resume() {
        let engine = Arc::new(engine());
        let mut bad = candidate();
        bad.work_history[0].end = Some(date(2015, 1, 1));

        let outcome = engine.screen_batch(vec![candidate(), bad], &posting()).await;
        assert!(outcome.is_err());
    }

    #[tokio::test]
    async fn test_screener_trait_object_is_usable() {
        let screener: Arc<dyn Screener> = Arc::new(engine());
        let result = screener.screen(&candidate(), &posting()).await.unwrap();
        assert!((result.overall_score - 70.0).abs() < 1e-9);
    }
}
