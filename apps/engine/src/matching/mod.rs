// Skill/experience/education matching against posting requirements.
// All scorers are pure functions of their inputs.

pub mod education;
pub mod experience;
pub mod normalize;
pub mod similarity;
pub mod skills;

pub use normalize::SynonymTable;
pub use similarity::{JaroWinkler, Similarity, TokenOverlap};
pub use skills::{SkillMatcher, SkillWeights};
