//! Core data models used throughout doc-gauge.
//!
//! These types represent the raw input and the typed document tree that flow
//! through the classification, validation, and scoring pipeline. Every
//! artifact is produced once per run and read-only afterward. The tree types
//! derive serde so downstream formatters can round-trip them losslessly.

use serde::{Deserialize, Serialize};

use crate::canon::CanonicalSection;

/// Raw validation input: file bytes plus the name they were read under.
#[derive(Debug, Clone)]
pub struct RawInput {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl RawInput {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Convenience constructor for in-memory text input.
    pub fn from_text(file_name: impl Into<String>, text: &str) -> Self {
        Self::new(file_name, text.as_bytes().to_vec())
    }
}

/// The document title (first `# ` heading) with its source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
    pub line: usize,
}

/// The blockquote description directly under the title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blockquote {
    pub text: String,
    pub line: usize,
}

/// A single link entry (`- [title](url): description`) within a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub line: usize,
    /// Shape check only (scheme/host or relative path); never a network check.
    pub url_syntactically_valid: bool,
}

/// An H2 section: its name, links, and the raw text it spans.
///
/// `raw_content` keeps every line the link scanner did not consume, in
/// document order, so later passes can inspect code fences, stray headings,
/// and prose without re-reading the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    /// Canonical vocabulary match, stored but never enforced at parse time.
    pub canonical: Option<CanonicalSection>,
    pub raw_content: String,
    pub line: usize,
    pub links: Vec<Link>,
}

/// Typed document tree produced by the structural parser.
///
/// Absence is represented, never synthesized: a file without a title parses
/// to `title: None`. Section and link ordering always matches document order;
/// nothing is reordered after parsing. `preamble` holds raw lines between the
/// header area and the first section (stray extra `# ` titles land here).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDocument {
    pub title: Option<Title>,
    pub description: Option<Blockquote>,
    pub preamble: String,
    pub sections: Vec<Section>,
}

impl ParsedDocument {
    /// An empty tree, returned for input that cannot be decoded as text.
    pub fn empty() -> Self {
        Self::default()
    }

    /// All links across all sections, in document order.
    pub fn all_links(&self) -> impl Iterator<Item = &Link> {
        self.sections.iter().flat_map(|s| s.links.iter())
    }

    /// Extracted URL list, the hand-off point for an external
    /// reachability checker.
    pub fn link_urls(&self) -> Vec<&str> {
        self.all_links().map(|l| l.url.as_str()).collect()
    }

    /// Whether at least one structural token (title, section, or link)
    /// was recognized.
    pub fn has_structure(&self) -> bool {
        self.title.is_some() || !self.sections.is_empty()
    }
}
