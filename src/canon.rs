//! Canonical section vocabulary.
//!
//! The eleven standard section names observed across real-world documentation
//! index files, their common aliases, and the canonical ordering sequence.
//! Matching is attempted for every parsed section and stored on the tree;
//! enforcement is a validation concern, not a parsing concern.

use serde::{Deserialize, Serialize};

/// The eleven canonical section names.
///
/// `Optional` has no fixed position in the ordering sequence; it always
/// sorts last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanonicalSection {
    MasterIndex,
    LlmInstructions,
    GettingStarted,
    CoreConcepts,
    ApiReference,
    Examples,
    Configuration,
    AdvancedTopics,
    Troubleshooting,
    Faq,
    Optional,
}

impl CanonicalSection {
    /// All canonical sections in their canonical order.
    pub const ALL: [CanonicalSection; 11] = [
        CanonicalSection::MasterIndex,
        CanonicalSection::LlmInstructions,
        CanonicalSection::GettingStarted,
        CanonicalSection::CoreConcepts,
        CanonicalSection::ApiReference,
        CanonicalSection::Examples,
        CanonicalSection::Configuration,
        CanonicalSection::AdvancedTopics,
        CanonicalSection::Troubleshooting,
        CanonicalSection::Faq,
        CanonicalSection::Optional,
    ];

    /// The display form used in conformant documents.
    pub fn name(self) -> &'static str {
        match self {
            CanonicalSection::MasterIndex => "Master Index",
            CanonicalSection::LlmInstructions => "LLM Instructions",
            CanonicalSection::GettingStarted => "Getting Started",
            CanonicalSection::CoreConcepts => "Core Concepts",
            CanonicalSection::ApiReference => "API Reference",
            CanonicalSection::Examples => "Examples",
            CanonicalSection::Configuration => "Configuration",
            CanonicalSection::AdvancedTopics => "Advanced Topics",
            CanonicalSection::Troubleshooting => "Troubleshooting",
            CanonicalSection::Faq => "FAQ",
            CanonicalSection::Optional => "Optional",
        }
    }

    /// Position in the canonical ordering sequence. `Optional` is always
    /// last regardless of how many sections precede it.
    pub fn order(self) -> usize {
        match self {
            CanonicalSection::MasterIndex => 1,
            CanonicalSection::LlmInstructions => 2,
            CanonicalSection::GettingStarted => 3,
            CanonicalSection::CoreConcepts => 4,
            CanonicalSection::ApiReference => 5,
            CanonicalSection::Examples => 6,
            CanonicalSection::Configuration => 7,
            CanonicalSection::AdvancedTopics => 8,
            CanonicalSection::Troubleshooting => 9,
            CanonicalSection::Faq => 10,
            CanonicalSection::Optional => usize::MAX,
        }
    }
}

/// Common aliases accepted for each canonical name, lowercase.
const ALIASES: &[(&str, CanonicalSection)] = &[
    ("table of contents", CanonicalSection::MasterIndex),
    ("toc", CanonicalSection::MasterIndex),
    ("index", CanonicalSection::MasterIndex),
    ("docs", CanonicalSection::MasterIndex),
    ("documentation", CanonicalSection::MasterIndex),
    ("instructions", CanonicalSection::LlmInstructions),
    ("agent instructions", CanonicalSection::LlmInstructions),
    ("quickstart", CanonicalSection::GettingStarted),
    ("quick start", CanonicalSection::GettingStarted),
    ("installation", CanonicalSection::GettingStarted),
    ("setup", CanonicalSection::GettingStarted),
    ("concepts", CanonicalSection::CoreConcepts),
    ("key concepts", CanonicalSection::CoreConcepts),
    ("fundamentals", CanonicalSection::CoreConcepts),
    ("api", CanonicalSection::ApiReference),
    ("reference", CanonicalSection::ApiReference),
    ("endpoints", CanonicalSection::ApiReference),
    ("usage", CanonicalSection::Examples),
    ("use cases", CanonicalSection::Examples),
    ("tutorials", CanonicalSection::Examples),
    ("recipes", CanonicalSection::Examples),
    ("config", CanonicalSection::Configuration),
    ("settings", CanonicalSection::Configuration),
    ("options", CanonicalSection::Configuration),
    ("advanced", CanonicalSection::AdvancedTopics),
    ("internals", CanonicalSection::AdvancedTopics),
    ("debugging", CanonicalSection::Troubleshooting),
    ("common issues", CanonicalSection::Troubleshooting),
    ("known issues", CanonicalSection::Troubleshooting),
    ("frequently asked questions", CanonicalSection::Faq),
    ("supplementary", CanonicalSection::Optional),
    ("appendix", CanonicalSection::Optional),
    ("extras", CanonicalSection::Optional),
];

/// Match a section name against the canonical vocabulary: direct name match
/// first, then the alias table. Matching is case-insensitive and ignores
/// surrounding whitespace and a trailing colon.
pub fn match_canonical(name: &str) -> Option<CanonicalSection> {
    let needle = name.trim().trim_end_matches(':').trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    for canonical in CanonicalSection::ALL {
        if canonical.name().to_lowercase() == needle {
            return Some(canonical);
        }
    }
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == needle)
        .map(|(_, canonical)| *canonical)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_names_match_case_insensitively() {
        assert_eq!(
            match_canonical("master index"),
            Some(CanonicalSection::MasterIndex)
        );
        assert_eq!(match_canonical("FAQ"), Some(CanonicalSection::Faq));
        assert_eq!(
            match_canonical("  API Reference: "),
            Some(CanonicalSection::ApiReference)
        );
    }

    #[test]
    fn aliases_normalize_to_canonical() {
        assert_eq!(
            match_canonical("Table of Contents"),
            Some(CanonicalSection::MasterIndex)
        );
        assert_eq!(
            match_canonical("Quickstart"),
            Some(CanonicalSection::GettingStarted)
        );
        assert_eq!(
            match_canonical("appendix"),
            Some(CanonicalSection::Optional)
        );
    }

    #[test]
    fn unknown_names_do_not_match() {
        assert_eq!(match_canonical("Random Stuff"), None);
        assert_eq!(match_canonical(""), None);
    }

    #[test]
    fn optional_orders_last() {
        assert!(CanonicalSection::Optional.order() > CanonicalSection::Faq.order());
    }
}
