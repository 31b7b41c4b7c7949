//! Skill-text normalization and the alias/synonym table.
//!
//! Comparison happens on normalized forms only: case-folded, trimmed, inner
//! whitespace collapsed. The synonym table additionally maps known aliases
//! onto a canonical spelling ("js" and "ECMAScript" both resolve to
//! "javascript") and tolerates separator noise through a compact key lookup
//! ("node.js", "node js" and "nodejs" share one key).

use std::collections::HashMap;

/// Canonical skill spellings and the aliases that resolve to them. Kept as
/// data so deployments can swap in their own table without code changes.
const DEFAULT_ALIASES: &[(&str, &[&str])] = &[
    ("javascript", &["js", "ecmascript", "es6", "es2015"]),
    ("typescript", &["ts"]),
    ("node.js", &["node", "nodejs"]),
    ("react", &["reactjs", "react.js"]),
    ("vue", &["vuejs", "vue.js"]),
    ("angular", &["angularjs", "angular.js"]),
    ("postgresql", &["postgres", "pg"]),
    ("mysql", &["mariadb"]),
    ("mongodb", &["mongo"]),
    ("kubernetes", &["k8s", "kube"]),
    ("docker", &["containers", "containerization"]),
    ("aws", &["amazon web services"]),
    ("gcp", &["google cloud", "google cloud platform"]),
    ("azure", &["microsoft azure"]),
    ("python", &["python3", "py"]),
    ("c#", &["csharp", "dotnet", ".net"]),
    ("c++", &["cpp"]),
    ("go", &["golang"]),
    ("machine learning", &["ml"]),
    ("ci/cd", &["cicd", "continuous integration"]),
];

/// Case-fold, trim, and collapse inner whitespace.
pub fn normalize_skill(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Separator-free key used for alias lookups tolerant of "node.js" vs
/// "node js" vs "nodejs". `+` and `#` are kept so "c++" and "c#" stay
/// distinct from "c".
fn compact_key(normalized: &str) -> String {
    normalized
        .chars()
        .filter(|c| !matches!(c, ' ' | '.' | '-' | '_' | '/'))
        .collect()
}

/// Alias → canonical skill mapping with O(1) lookups.
#[derive(Debug, Clone)]
pub struct SynonymTable {
    by_name: HashMap<String, String>,
    by_compact: HashMap<String, String>,
}

impl Default for SynonymTable {
    fn default() -> Self {
        let pairs: Vec<(String, Vec<String>)> = DEFAULT_ALIASES
            .iter()
            .map(|(canonical, aliases)| {
                (
                    (*canonical).to_string(),
                    aliases.iter().map(|a| (*a).to_string()).collect(),
                )
            })
            .collect();
        Self::with_aliases(&pairs)
    }
}

impl SynonymTable {
    /// Empty table: canonicalization falls through to the normalized form.
    pub fn empty() -> Self {
        Self {
            by_name: HashMap::new(),
            by_compact: HashMap::new(),
        }
    }

    /// Builds a table from (canonical, aliases) pairs. Canonical spellings
    /// map to themselves so posting-side skills canonicalize too.
    pub fn with_aliases(pairs: &[(String, Vec<String>)]) -> Self {
        let mut by_name = HashMap::new();
        let mut by_compact = HashMap::new();

        for (canonical, aliases) in pairs {
            let canonical = normalize_skill(canonical);
            by_name.insert(canonical.clone(), canonical.clone());
            by_compact
                .entry(compact_key(&canonical))
                .or_insert_with(|| canonical.clone());

            for alias in aliases {
                let alias = normalize_skill(alias);
                by_name.insert(alias.clone(), canonical.clone());
                by_compact
                    .entry(compact_key(&alias))
                    .or_insert_with(|| canonical.clone());
            }
        }

        Self {
            by_name,
            by_compact,
        }
    }

    /// Resolves an already-normalized skill to its canonical spelling, or
    /// returns it unchanged when no alias is known.
    pub fn canonical(&self, normalized: &str) -> String {
        if let Some(canonical) = self.by_name.get(normalized) {
            return canonical.clone();
        }
        if let Some(canonical) = self.by_compact.get(&compact_key(normalized)) {
            return canonical.clone();
        }
        normalized.to_string()
    }
}
