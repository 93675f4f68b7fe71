//! Fuzzy token matching.
//!
//! Decides whether two normalized tokens count as "the same keyword" under a
//! tolerant rule set. The decision order matters: the synonym exception runs
//! before the length guard so that short question particles still match.

use crate::config::MatchConfig;
use rapidfuzz::distance::indel;

/// Tolerant token equality. First matching rule wins:
///
/// 1. synonym exception (fixed particle set vs. the generic target term)
/// 2. length guard: either token shorter than the configured minimum fails
/// 3. containment: either token is a substring of the other
/// 4. surround tolerance: `word` is `keyword` with at most one extra
///    character on each end; only `word` gets this slack, never `keyword`
/// 5. normalized edit-similarity ratio at or above the threshold
///
/// Deterministic, and symmetric except for rule 4.
pub fn similar(keyword: &str, word: &str, config: &MatchConfig) -> bool {
    let is_synonym = |t: &str| config.synonyms.iter().any(|s| s == t);
    if (is_synonym(keyword) && word == config.synonym_target)
        || (is_synonym(word) && keyword == config.synonym_target)
    {
        return true;
    }

    if keyword.chars().count() < config.min_token_len
        || word.chars().count() < config.min_token_len
    {
        return false;
    }

    if word.contains(keyword) || keyword.contains(word) {
        return true;
    }

    if surround_match(keyword, word) {
        return true;
    }

    indel::normalized_similarity(keyword.chars(), word.chars()) >= config.similarity_threshold
}

/// True when `word` equals `keyword` with at most one arbitrary character
/// prepended and at most one appended.
fn surround_match(keyword: &str, word: &str) -> bool {
    let word_chars: Vec<char> = word.chars().collect();
    let keyword_len = keyword.chars().count();

    for prefix in 0..=1usize {
        for suffix in 0..=1usize {
            if word_chars.len() != keyword_len + prefix + suffix {
                continue;
            }
            let inner: String = word_chars[prefix..word_chars.len() - suffix].iter().collect();
            if inner == keyword {
                return true;
            }
        }
    }
    false
}
