//! Matcher configuration.
//!
//! The similarity threshold and the short-token guard are tuning constants
//! with no derivation behind them; they are exposed here (and loadable from a
//! TOML file) instead of being hard-coded at the call sites. The defaults
//! reproduce the shipped behavior exactly.

use crate::error::Result;
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// Configuration for fuzzy token matching and answer aggregation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    /// Minimum edit-similarity ratio for two tokens to be considered the
    /// same keyword (rule 5 of the matcher).
    pub similarity_threshold: f64,
    /// Tokens shorter than this (in characters) are never fuzzy-compared.
    pub min_token_len: usize,
    /// Question particles treated as equivalent to `synonym_target`.
    pub synonyms: Vec<String>,
    /// The generic "information" term the synonyms map to.
    pub synonym_target: String,
    /// Literal question token that switches aggregation from first-match to
    /// all-matches.
    pub all_quantifier: String,
    /// Answer text when a file was selected but no section matched.
    pub no_info_message: String,
    /// Response text when no file scored above zero.
    pub fallback_message: String,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.9,
            min_token_len: 3,
            synonyms: vec!["מי".to_string(), "מה".to_string(), "תן".to_string()],
            synonym_target: "מידע".to_string(),
            all_quantifier: "כל".to_string(),
            no_info_message: "אין מידע על כך.".to_string(),
            fallback_message: "מה השאלה?.".to_string(),
        }
    }
}

impl MatchConfig {
    /// Load configuration from a TOML file. Missing keys fall back to the
    /// defaults above.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn test_defaults() {
        let config = MatchConfig::default();
        check!(config.similarity_threshold == 0.9);
        check!(config.min_token_len == 3);
        check!(config.synonyms.len() == 3);
        check!(config.all_quantifier == "כל");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: MatchConfig = toml::from_str("similarity_threshold = 0.8").unwrap();
        check!(config.similarity_threshold == 0.8);
        check!(config.min_token_len == 3);
        check!(config.synonym_target == "מידע");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let parsed: std::result::Result<MatchConfig, _> = toml::from_str("treshold = 0.8");
        check!(parsed.is_err());
    }
}
