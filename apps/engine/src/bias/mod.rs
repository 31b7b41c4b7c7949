// Anonymization and bias-risk analysis. The analyzer reads the original
// resume; the anonymizer derives the redacted copy used for audit scoring.

pub mod analyzer;
pub mod anonymizer;

pub use analyzer::BiasAnalyzer;
pub use anonymizer::Anonymizer;
