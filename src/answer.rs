//! The answer pipeline: pick one document, extract it, narrow to the most
//! relevant labeled sections.
//!
//! Everything here is request-scoped. The caller passes an explicit
//! [`DirSnapshot`]; nothing is cached or shared between questions.

use crate::config::MatchConfig;
use crate::error::DecodeError;
use crate::extract::{DocumentFormat, ExtractedContent};
use crate::markup;
use crate::matching::similar;
use crate::select::{DirSnapshot, select_best};
use crate::text::{normalize, words};
use ahash::AHashSet;

/// The unit returned to the caller: one file name, the answer text, and any
/// embedded images as data URIs. `content` is never empty: when no section
/// matched it carries the configured no-information message.
#[derive(Debug, Clone, serde::Serialize)]
pub struct MatchResult {
    pub filename: String,
    pub content: String,
    pub images: Vec<String>,
}

/// Resolve one question against a directory snapshot.
///
/// Returns `Ok(None)` when no file scores above zero, a normal empty
/// outcome, not an error. A decode failure on the selected file is terminal
/// for the request; there is no fallback to the next-best file.
pub fn select_and_answer(
    question: &str,
    snapshot: &DirSnapshot,
    config: &MatchConfig,
) -> Result<Option<MatchResult>, DecodeError> {
    let keywords = words(&normalize(question));
    let Some(entry) = select_best(&keywords, snapshot, config) else {
        tracing::info!("no file scored above zero");
        return Ok(None);
    };
    tracing::info!("selected '{}'", entry.name);

    let format = DocumentFormat::from_path(&entry.path);
    let extracted = match format {
        Some(format) => format.decode(&entry.path)?,
        // Unrecognized extensions are scored but never decoded; the empty
        // content falls through to the no-information message below.
        None => ExtractedContent::default(),
    };

    // Rich documents bypass section filtering entirely: full text plus
    // images, even with zero keyword overlap with the document body.
    if format == Some(DocumentFormat::RichDocument) {
        return Ok(Some(MatchResult {
            filename: entry.name.clone(),
            content: extracted.text,
            images: extracted.images,
        }));
    }

    // Scoring used the keyword list with duplicates; section matching uses
    // the deduplicated set.
    let keyword_set: AHashSet<&str> = keywords.iter().map(String::as_str).collect();

    let sections = markup::split_sections(&extracted.text);

    // Documents without any section markup (tables, page dumps, flat text)
    // answer with their whole extracted text.
    if sections.is_empty() && !extracted.text.trim().is_empty() {
        return Ok(Some(MatchResult {
            filename: entry.name.clone(),
            content: extracted.text,
            images: Vec::new(),
        }));
    }

    let mut units: Vec<String> = Vec::new();
    for section in sections {
        if !section_is_relevant(section, &keyword_set, config) {
            continue;
        }
        let emphasized = emphasized_lines(section, &keyword_set, config);
        if emphasized.is_empty() {
            units.push(section.trim().to_string());
        } else {
            // Each qualifying line is its own unit for aggregation.
            units.extend(emphasized.into_iter().map(str::to_string));
        }
    }

    let return_all = keywords.iter().any(|keyword| *keyword == config.all_quantifier);
    let content = if units.is_empty() {
        config.no_info_message.clone()
    } else if return_all {
        units.join("\n\n")
    } else {
        units.swap_remove(0)
    };

    Ok(Some(MatchResult {
        filename: entry.name.clone(),
        content,
        images: Vec::new(),
    }))
}

/// A section is relevant when any heading or any comment inside it contains
/// a word fuzzy-similar to any question keyword. Short-circuits on the first
/// satisfying span.
fn section_is_relevant(section: &str, keywords: &AHashSet<&str>, config: &MatchConfig) -> bool {
    markup::find_headings(section)
        .iter()
        .any(|heading| span_matches(heading, keywords, config))
        || markup::find_comments(section)
            .iter()
            .any(|comment| span_matches(comment, keywords, config))
}

fn span_matches(span: &str, keywords: &AHashSet<&str>, config: &MatchConfig) -> bool {
    let span_words = words(&normalize(span));
    keywords
        .iter()
        .any(|keyword| span_words.iter().any(|word| similar(keyword, word, config)))
}

/// Trimmed source lines containing at least one emphasized span whose
/// normalized tokens include a word fuzzy-similar to a question keyword.
fn emphasized_lines<'a>(
    section: &'a str,
    keywords: &AHashSet<&str>,
    config: &MatchConfig,
) -> Vec<&'a str> {
    let mut qualifying = Vec::new();
    for line in section.lines() {
        let mut span_words: Vec<String> = Vec::new();
        for span in markup::emphasized_spans(line) {
            span_words.extend(words(&normalize(span)));
        }
        let matches = keywords
            .iter()
            .any(|keyword| span_words.iter().any(|word| similar(keyword, word, config)));
        if matches {
            qualifying.push(line.trim());
        }
    }
    qualifying
}
