//! Resume screening engine: skill/experience/education matching, weighted
//! aggregation, bias auditing, and deterministic ranking.
//!
//! The engine is stateless and side-effect free — it takes in-memory
//! resumes and postings and returns in-memory results. Extraction,
//! persistence, and transport belong to the caller.

pub mod bias;
pub mod config;
pub mod engine;
pub mod errors;
pub mod matching;
pub mod models;
pub mod ranking;
pub mod scoring;

pub use bias::{Anonymizer, BiasAnalyzer};
pub use config::ScreeningConfig;
pub use engine::{Screener, ScreeningEngine};
pub use errors::EngineError;
pub use matching::{SkillMatcher, SkillWeights, SynonymTable};
pub use models::{
    BiasReport, DegreeLevel, EducationEntry, JobPosting, ParsedResume, ScreeningResult,
    SkillMatchResult, WorkEntry,
};
pub use scoring::ScoringWeights;
