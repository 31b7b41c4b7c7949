use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::resume::DegreeLevel;

/// Structured requirements of a role. A skill listed in both `required_skills`
/// and `preferred_skills` is treated as required only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub min_experience_years: f64,
    pub required_education: DegreeLevel,
}

impl JobPosting {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            required_skills: Vec::new(),
            preferred_skills: Vec::new(),
            min_experience_years: 0.0,
            required_education: DegreeLevel::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_posting_has_no_requirements() {
        let posting = JobPosting::new("Backend Engineer");
        assert!(posting.required_skills.is_empty());
        assert!(posting.preferred_skills.is_empty());
        assert_eq!(posting.min_experience_years, 0.0);
        assert_eq!(posting.required_education, DegreeLevel::None);
    }
}
