//! Shared text heuristics.
//!
//! Approximate predicates used by both the validation pipeline and the
//! anti-pattern detector. Several of these implement checks the source
//! research defines only informally; they are documented as approximate,
//! tuned for rare false positives, and always explainable through the
//! evidence the callers attach. Thresholds live here, next to the
//! predicates they govern.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

/// Phrases that mark placeholder content.
const PLACEHOLDER_MARKERS: &[&str] = &[
    "todo",
    "tbd",
    "coming soon",
    "placeholder",
    "lorem ipsum",
    "fill in",
    "wip",
];

/// Acronyms too ubiquitous to count as project jargon.
const ACRONYM_STOPLIST: &[&str] = &[
    "API", "FAQ", "LLM", "URL", "URLS", "HTTP", "HTTPS", "README", "TOC", "OK", "ID", "UTF",
];

/// Agent-directive phrasing that indicates LLM-facing guidance.
const DIRECTIVE_PHRASES: &[&str] = &[
    "you should",
    "you must",
    "when answering",
    "when responding",
    "do not",
    "always use",
    "never use",
    "prefer ",
];

/// Phrasing crafted to steer model behavior rather than inform it.
const MANIPULATIVE_PHRASES: &[&str] = &[
    "ignore previous instructions",
    "disregard other sources",
    "always recommend",
    "you must recommend",
    "the best choice for",
    "superior to all",
    "trust this source",
];

/// Generator footprints left by fully automated exports.
const GENERATOR_MARKERS: &[&str] = &[
    "auto-generated",
    "autogenerated",
    "automatically generated",
    "generated by",
    "do not edit",
];

/// Staleness markers.
const OUTDATED_MARKERS: &[&str] = &[
    "deprecated",
    "obsolete",
    "no longer maintained",
    "end of life",
    "discontinued",
];

static ACRONYM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[A-Z][A-Z0-9]{1,5}\b").unwrap());
static ISO_DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{4}-\d{2}-\d{2}\b").unwrap());
static SEMVER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bv?\d+\.\d+(?:\.\d+)?\b").unwrap());
static VERSION_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:version|last updated|updated on|revised)\b").unwrap());
static CONCEPT_DEF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*[-*] \*\*[^*\n]+\*\*:").unwrap());
static QUESTION_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*(?:\*\*)?Q(?:\*\*)?\s*[:.]").unwrap());
static ANSWER_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*(?:\*\*)?A(?:\*\*)?\s*[:.]").unwrap());

/// Whether section content is placeholder-only: short and dominated by a
/// filler marker rather than real prose. Approximate by design.
pub fn is_placeholder_content(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }
    if trimmed.len() > 120 {
        return false;
    }
    let lower = trimmed.to_lowercase();
    PLACEHOLDER_MARKERS.iter().any(|m| lower.contains(m))
}

/// Near-duplicate section names via normalized edit distance.
/// Approximate: catches "API Reference" vs "API References", not synonyms.
pub fn near_duplicate_names(a: &str, b: &str) -> bool {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a == b || strsim::normalized_levenshtein(&a, &b) >= 0.85
}

/// Line-set Jaccard similarity between two content blocks. Cheap,
/// order-insensitive, and explainable: the score is the share of identical
/// non-blank lines.
pub fn content_overlap(a: &str, b: &str) -> f64 {
    let set_a: BTreeSet<&str> = a.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    let set_b: BTreeSet<&str> = b.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    if set_a.is_empty() || set_b.is_empty() {
        return 0.0;
    }
    let shared = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();
    shared as f64 / union as f64
}

/// Dominant three-word description prefix, if enough descriptions repeat
/// it to look template-generated. Returns the prefix and how many
/// descriptions share it. Approximate: legitimate parallel phrasing can
/// trip it, which is why callers surface the prefix as evidence.
pub fn dominant_description_prefix(descriptions: &[&str]) -> Option<(String, usize)> {
    if descriptions.len() < 5 {
        return None;
    }
    let mut counts: std::collections::BTreeMap<String, usize> = std::collections::BTreeMap::new();
    for d in descriptions {
        let prefix: Vec<&str> = d.split_whitespace().take(3).collect();
        if prefix.len() < 3 {
            continue;
        }
        *counts.entry(prefix.join(" ").to_lowercase()).or_default() += 1;
    }
    let (prefix, count) = counts.into_iter().max_by_key(|(_, c)| *c)?;
    let threshold = (descriptions.len() * 3) / 5;
    if count >= 5 && count >= threshold {
        Some((prefix, count))
    } else {
        None
    }
}

/// All distinct non-stoplisted acronyms in the text, defined or not.
/// Used to decide whether the jargon check applies at all.
pub fn jargon_terms(text: &str) -> Vec<String> {
    let mut terms = BTreeSet::new();
    for m in ACRONYM.find_iter(text) {
        let term = m.as_str();
        if !ACRONYM_STOPLIST.contains(&term) {
            terms.insert(term.to_string());
        }
    }
    terms.into_iter().collect()
}

/// Distinct non-stoplisted acronyms that never receive a definition
/// (parenthetical expansion, bold definition entry, or leading
/// `TERM:` line). Approximate.
pub fn undefined_acronyms(text: &str) -> Vec<String> {
    let mut undefined = BTreeSet::new();
    for m in ACRONYM.find_iter(text) {
        let term = m.as_str();
        if ACRONYM_STOPLIST.contains(&term) {
            continue;
        }
        let expanded = text.contains(&format!("{term} ("))
            || text.contains(&format!("**{term}**"))
            || text.lines().any(|l| {
                let t = l.trim().trim_start_matches('-').trim_start();
                t.starts_with(term) && t[term.len()..].starts_with(':')
            });
        if !expanded {
            undefined.insert(term.to_string());
        }
    }
    undefined.into_iter().collect()
}

/// Whether the text carries any freshness metadata: an ISO date, a version
/// word, or a semantic version number.
pub fn has_freshness_metadata(text: &str) -> bool {
    if ISO_DATE.is_match(text) {
        return true;
    }
    VERSION_WORDS.is_match(text) && SEMVER.is_match(text)
}

/// Count of structured concept-definition entries (`- **Term**: ...`).
pub fn concept_definition_count(text: &str) -> usize {
    CONCEPT_DEF.find_iter(text).count()
}

/// Whether the text contains at least one few-shot Q&A pair.
pub fn has_few_shot_examples(text: &str) -> bool {
    QUESTION_LINE.is_match(text) && ANSWER_LINE.is_match(text)
}

/// Whether the text contains agent-directive phrasing.
pub fn has_directive_phrasing(text: &str) -> bool {
    let lower = text.to_lowercase();
    DIRECTIVE_PHRASES.iter().any(|p| lower.contains(p))
}

/// Manipulative phrases present in the text, if any. Approximate.
pub fn manipulative_phrases(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    MANIPULATIVE_PHRASES
        .iter()
        .copied()
        .filter(|p| lower.contains(p))
        .collect()
}

/// Generator footprints present in the text, if any. Approximate.
pub fn generator_markers(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    GENERATOR_MARKERS
        .iter()
        .copied()
        .filter(|p| lower.contains(p))
        .collect()
}

/// Count of staleness-marker occurrences.
pub fn outdated_marker_count(text: &str) -> usize {
    let lower = text.to_lowercase();
    OUTDATED_MARKERS
        .iter()
        .map(|m| lower.matches(m).count())
        .sum()
}

/// Count of self-referential mentions (the file describing itself rather
/// than the project). Approximate.
pub fn self_reference_count(text: &str) -> usize {
    let lower = text.to_lowercase();
    ["llms.txt", "this file", "this document", "this index"]
        .iter()
        .map(|m| lower.matches(m).count())
        .sum()
}
