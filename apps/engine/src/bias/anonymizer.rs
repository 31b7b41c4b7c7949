//! Best-effort redaction of identity-correlated signals. Lexical and
//! pattern-based only — the contract is suppression of known signals, not a
//! compliance guarantee.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::resume::ParsedResume;

const NAME_PLACEHOLDER: &str = "[NAME]";
const INSTITUTION_PLACEHOLDER: &str = "[INSTITUTION]";

struct RedactionRule {
    placeholder: &'static str,
    pattern: Regex,
}

/// Ordered redaction rules. No pattern matches its own or any other
/// placeholder, which keeps redaction idempotent.
static REDACTION_RULES: LazyLock<Vec<RedactionRule>> = LazyLock::new(|| {
    let rules: &[(&str, &str)] = &[
        ("[EMAIL]", r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}"),
        (
            "[PHONE]",
            r"(?:\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}",
        ),
        (
            "[NAME]",
            r"\b(?:Mr|Mrs|Ms|Dr)\.?\s+[A-Z][a-z]+(?:\s+[A-Z][a-z]+)?",
        ),
        (
            "[DOB]",
            r"(?i)\b(?:date of birth|d\.o\.b\.?|born (?:in|on) \d{4})\b",
        ),
        ("[AGE]", r"(?i)\b\d{1,2}\s*(?:years?[\s-]old|y\.?o\.?)\b"),
        ("[GENDER]", r"(?i)\b(?:he|she|him|her|his|hers)\b"),
        // placeholder deliberately avoids the word "photo" so a second pass
        // cannot re-match it
        ("[MEDIA]", r"(?i)\b(?:photo(?:graph)?|headshot)\b"),
    ];

    rules
        .iter()
        .map(|&(placeholder, pattern)| RedactionRule {
            placeholder,
            pattern: Regex::new(pattern).expect("redaction pattern compiles"),
        })
        .collect()
});

/// Institution-name markers correlated with religious affiliation.
const AFFILIATED_INSTITUTION_MARKERS: &[&str] = &[
    "saint ",
    "st. ",
    "st ",
    "holy ",
    "catholic",
    "christian",
    "islamic",
    "baptist",
    "yeshiva",
    "theological",
    "church",
];

fn is_affiliated_institution(name: &str) -> bool {
    let lowered = name.to_lowercase();
    AFFILIATED_INSTITUTION_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}

/// Produces a redacted copy of a resume. The input is never mutated.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymizer;

impl Anonymizer {
    pub fn anonymize(&self, resume: &ParsedResume) -> ParsedResume {
        let mut redacted = resume.clone();

        let name = redacted.name.take();
        redacted.email = None;
        redacted.phone = None;

        redacted.raw_text = redact_text(&redacted.raw_text, name.as_deref());
        for entry in &mut redacted.work_history {
            entry.description = redact_text(&entry.description, name.as_deref());
        }
        for entry in &mut redacted.education {
            if is_affiliated_institution(&entry.institution) {
                entry.institution = INSTITUTION_PLACEHOLDER.to_string();
            }
        }

        redacted
    }
}

fn redact_text(text: &str, name: Option<&str>) -> String {
    let mut out = text.to_string();

    if let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) {
        // Degenerate extractor output (oversized "names") falls through to
        // the static rules.
        if let Ok(pattern) = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(name))) {
            out = pattern.replace_all(&out, NAME_PLACEHOLDER).into_owned();
        }
    }

    for rule in REDACTION_RULES.iter() {
        out = rule.pattern.replace_all(&out, rule.placeholder).into_owned();
    }
    out
}
