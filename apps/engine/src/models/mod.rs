pub mod job;
pub mod resume;
pub mod screening;

pub use job::JobPosting;
pub use resume::{DegreeLevel, EducationEntry, ParsedResume, WorkEntry};
pub use screening::{
    BiasReport, ComponentScore, MatchKind, RiskCategory, RiskIndicator, ScoreBreakdown,
    ScreeningResult, SkillCredit, SkillMatchResult,
};
