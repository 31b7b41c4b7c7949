use std::collections::HashMap;

use crate::errors::EngineError;
use crate::matching::normalize::SynonymTable;
use crate::matching::skills::SkillWeights;
use crate::scoring::ScoringWeights;

/// Engine configuration: scoring weights, fuzzy threshold, synonym table.
/// Explicit state passed in at construction time — no globals — so parallel
/// evaluations stay deterministic and reproducible.
#[derive(Debug, Clone)]
pub struct ScreeningConfig {
    pub weights: ScoringWeights,
    pub skill_weights: SkillWeights,
    pub fuzzy_threshold: f64,
    pub synonyms: SynonymTable,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            skill_weights: SkillWeights::default(),
            fuzzy_threshold: 0.85,
            synonyms: SynonymTable::default(),
        }
    }
}

impl ScreeningConfig {
    /// Defaults with optional environment overrides, validated.
    pub fn from_env() -> Result<Self, EngineError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let mut config = Self::default();
        if let Some(v) = env_f64("SCREENING_FUZZY_THRESHOLD")? {
            config.fuzzy_threshold = v;
        }
        if let Some(v) = env_f64("SCREENING_SKILL_WEIGHT")? {
            config.weights.skill = v;
        }
        if let Some(v) = env_f64("SCREENING_EXPERIENCE_WEIGHT")? {
            config.weights.experience = v;
        }
        if let Some(v) = env_f64("SCREENING_EDUCATION_WEIGHT")? {
            config.weights.education = v;
        }
        if let Some(v) = env_f64("SCREENING_PREFERRED_SKILL_WEIGHT")? {
            config.skill_weights.preferred = v;
        }
        if let Ok(path) = std::env::var("SCREENING_SYNONYMS_FILE") {
            config.synonyms = load_synonyms(&path)?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        self.weights.validate()?;

        if !(0.0..=1.0).contains(&self.fuzzy_threshold) {
            return Err(EngineError::Config(format!(
                "fuzzy threshold {} outside [0, 1]",
                self.fuzzy_threshold
            )));
        }
        if self.skill_weights.required <= 0.0 {
            return Err(EngineError::Config(
                "required skill weight must be positive".to_string(),
            ));
        }
        if self.skill_weights.preferred < 0.0 {
            return Err(EngineError::Config(
                "preferred skill weight must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

fn env_f64(key: &str) -> Result<Option<f64>, EngineError> {
    match std::env::var(key) {
        Err(_) => Ok(None),
        Ok(raw) => raw
            .parse::<f64>()
            .map(Some)
            .map_err(|_| EngineError::Config(format!("{key} must be a number, got '{raw}'"))),
    }
}

/// Custom synonym table from a JSON file: `{"canonical": ["alias", ...]}`.
fn load_synonyms(path: &str) -> Result<SynonymTable, EngineError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| EngineError::Config(format!("cannot read synonyms file '{path}': {e}")))?;
    let aliases: HashMap<String, Vec<String>> = serde_json::from_str(&raw)
        .map_err(|e| EngineError::Config(format!("malformed synonyms file '{path}': {e}")))?;

    let pairs: Vec<(String, Vec<String>)> = aliases.into_iter().collect();
    Ok(SynonymTable::with_aliases(&pairs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_validates() {
        assert!(ScreeningConfig::default().validate().is_ok());
    }

    #[test]
    fn test_out_of_range_threshold_rejected() {
        let mut config = ScreeningConfig::default();
        config.fuzzy_threshold = 1.5;
        assert!(matches!(
            config.validate(),
            Err(EngineError::Config(_))
        ));
    }

    #[test]
    fn test_zero_required_skill_weight_rejected() {
        let mut config = ScreeningConfig::default();
        config.skill_weights.required = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_synonyms_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"terraform": ["tf"]}}"#).unwrap();

        let table = load_synonyms(file.path().to_str().unwrap()).unwrap();
        assert_eq!(table.canonical("tf"), "terraform");
    }

    #[test]
    fn test_malformed_synonyms_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_synonyms(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }
}
