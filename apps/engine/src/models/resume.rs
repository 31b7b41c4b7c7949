use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::EngineError;

/// Ordinal education levels. Variant order defines the ordering used by the
/// education scorer, so new levels must be inserted in rank position.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum DegreeLevel {
    #[default]
    None,
    HighSchool,
    Associate,
    Bachelor,
    Master,
    Doctorate,
}

impl DegreeLevel {
    pub const COUNT: usize = 6;

    /// Ordinal position on the degree scale (None = 0, Doctorate = 5).
    pub fn rank(self) -> u8 {
        match self {
            DegreeLevel::None => 0,
            DegreeLevel::HighSchool => 1,
            DegreeLevel::Associate => 2,
            DegreeLevel::Bachelor => 3,
            DegreeLevel::Master => 4,
            DegreeLevel::Doctorate => 5,
        }
    }
}

impl fmt::Display for DegreeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DegreeLevel::None => "none",
            DegreeLevel::HighSchool => "high_school",
            DegreeLevel::Associate => "associate",
            DegreeLevel::Bachelor => "bachelor",
            DegreeLevel::Master => "master",
            DegreeLevel::Doctorate => "doctorate",
        };
        f.write_str(label)
    }
}

impl FromStr for DegreeLevel {
    type Err = EngineError;

    /// Lenient parse for extractor-produced tokens ("Bachelor's", "PhD", ...).
    /// Unknown tokens are an error rather than a silent downgrade.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, '.' | '\''))
            .collect();

        match token.replace(['_', '-'], " ").as_str() {
            "none" => Ok(DegreeLevel::None),
            "high school" | "highschool" | "diploma" | "ged" => Ok(DegreeLevel::HighSchool),
            "associate" | "associates" | "associate degree" => Ok(DegreeLevel::Associate),
            "bachelor" | "bachelors" | "bachelor degree" | "bs" | "ba" | "bsc" => {
                Ok(DegreeLevel::Bachelor)
            }
            "master" | "masters" | "master degree" | "ms" | "ma" | "msc" => Ok(DegreeLevel::Master),
            "doctorate" | "doctoral" | "phd" | "dphil" => Ok(DegreeLevel::Doctorate),
            _ => Err(EngineError::UnknownDegreeLevel(s.to_string())),
        }
    }
}

/// One position in the candidate's work history. An open `end` means the
/// position is current.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkEntry {
    pub title: String,
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree_level: DegreeLevel,
    pub field: String,
    pub institution: String,
    pub graduation_year: Option<i32>,
}

/// Structured resume content as produced by the external extractor.
/// The engine never mutates a `ParsedResume`; anonymization derives a new one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedResume {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: Vec<String>,
    pub work_history: Vec<WorkEntry>,
    pub education: Vec<EducationEntry>,
    pub raw_text: String,
}

impl ParsedResume {
    /// Highest attained degree level, `DegreeLevel::None` when no education
    /// entries exist.
    pub fn highest_degree(&self) -> DegreeLevel {
        self.education
            .iter()
            .map(|e| e.degree_level)
            .max()
            .unwrap_or(DegreeLevel::None)
    }
}
