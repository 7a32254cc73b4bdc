//! Diagnostic code registry.
//!
//! The closed catalog of validation findings: 8 errors, 11 warnings, and
//! 7 informational codes. Code strings (`E001`..`I007`) are a durable
//! contract — downstream tooling and historical reports reference them by
//! string value, so they must never be renumbered. Severity is a pure
//! function of the code prefix; message and remediation are static data.
//! Nothing here is mutable at runtime.

use serde::{Deserialize, Serialize};

/// One rung of the cumulative conformance ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    /// L0: decoded as text, at least one structural token recognized.
    Parseable,
    /// L1: exactly one title, clean encoding, well-formed tree and links.
    Structural,
    /// L2: description present, sections and links carry real content.
    Content,
    /// L3: canonical vocabulary, ordering, size budget, code examples.
    BestPractices,
    /// L4: agent directives, concept definitions, few-shot examples.
    Extended,
}

impl Level {
    pub const ALL: [Level; 5] = [
        Level::Parseable,
        Level::Structural,
        Level::Content,
        Level::BestPractices,
        Level::Extended,
    ];

    /// Short display form (`L0`..`L4`).
    pub fn label(self) -> &'static str {
        match self {
            Level::Parseable => "L0",
            Level::Structural => "L1",
            Level::Content => "L2",
            Level::BestPractices => "L3",
            Level::Extended => "L4",
        }
    }
}

/// Diagnostic severity, derived from the code prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// Structural failure that breaks parsing or format conformance.
    Error,
    /// Deviation from best practices; degrades quality without breaking.
    Warning,
    /// Observation or enrichment suggestion; never blocking.
    Info,
}

/// The complete diagnostic catalog. Serialized as the stable code string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticCode {
    #[serde(rename = "E001")]
    NoTitle,
    #[serde(rename = "E002")]
    MultipleTitles,
    #[serde(rename = "E003")]
    InvalidEncoding,
    #[serde(rename = "E004")]
    MixedLineEndings,
    #[serde(rename = "E005")]
    UnparseableStructure,
    #[serde(rename = "E006")]
    BrokenLinks,
    #[serde(rename = "E007")]
    EmptyFile,
    #[serde(rename = "E008")]
    SizeLimitExceeded,
    #[serde(rename = "W001")]
    MissingDescription,
    #[serde(rename = "W002")]
    NonCanonicalSectionName,
    #[serde(rename = "W003")]
    LinkMissingDescription,
    #[serde(rename = "W004")]
    NoCodeExamples,
    #[serde(rename = "W005")]
    CodeBlockMissingLanguage,
    #[serde(rename = "W006")]
    FormulaicDescriptions,
    #[serde(rename = "W007")]
    MissingVersionMetadata,
    #[serde(rename = "W008")]
    NonCanonicalOrder,
    #[serde(rename = "W009")]
    NoMasterIndex,
    #[serde(rename = "W010")]
    TokenBudgetExceeded,
    #[serde(rename = "W011")]
    EmptySections,
    #[serde(rename = "I001")]
    NoAgentInstructions,
    #[serde(rename = "I002")]
    NoConceptDefinitions,
    #[serde(rename = "I003")]
    NoFewShotExamples,
    #[serde(rename = "I004")]
    RelativeUrls,
    #[serde(rename = "I005")]
    FullDumpInput,
    #[serde(rename = "I006")]
    OptionalSectionsUnmarked,
    #[serde(rename = "I007")]
    UndefinedJargon,
}

impl DiagnosticCode {
    /// The stable code string (`E001`..`I007`).
    pub fn as_str(self) -> &'static str {
        self.entry().code
    }

    /// Severity derived from the code prefix. The registry is the single
    /// source of truth; checks never choose severity ad hoc.
    pub fn severity(self) -> Severity {
        match self.entry().code.as_bytes()[0] {
            b'E' => Severity::Error,
            b'W' => Severity::Warning,
            _ => Severity::Info,
        }
    }

    /// The validation level this code belongs to.
    pub fn level(self) -> Level {
        self.entry().level
    }

    /// Human-readable finding message.
    pub fn message(self) -> &'static str {
        self.entry().message
    }

    /// How to fix the finding.
    pub fn remediation(self) -> &'static str {
        self.entry().remediation
    }

    fn entry(self) -> &'static CodeEntry {
        &REGISTRY[self as usize]
    }
}

struct CodeEntry {
    code: &'static str,
    level: Level,
    message: &'static str,
    remediation: &'static str,
}

/// Registry rows, in `DiagnosticCode` declaration order.
static REGISTRY: [CodeEntry; 26] = [
    CodeEntry {
        code: "E001",
        level: Level::Structural,
        message: "No H1 title found; the file must begin with exactly one H1 title.",
        remediation: "Add a single '# Title' as the first line of the file.",
    },
    CodeEntry {
        code: "E002",
        level: Level::Structural,
        message: "Multiple H1 titles found; exactly one is allowed.",
        remediation: "Remove all but the first H1 title; use H2 for section headers.",
    },
    CodeEntry {
        code: "E003",
        level: Level::Parseable,
        message: "File is not valid UTF-8 text.",
        remediation: "Convert the file to UTF-8 encoding and remove any BOM markers.",
    },
    CodeEntry {
        code: "E004",
        level: Level::Structural,
        message: "File uses non-LF line endings (CR or CRLF detected).",
        remediation: "Convert line endings to LF (Unix style).",
    },
    CodeEntry {
        code: "E005",
        level: Level::Structural,
        message: "File contains no parseable Markdown structure.",
        remediation: "Fix Markdown syntax; at minimum provide an H1 title or an H2 section.",
    },
    CodeEntry {
        code: "E006",
        level: Level::Structural,
        message: "One or more links have empty or malformed URLs.",
        remediation: "Fix or remove links with empty or malformed href values.",
    },
    CodeEntry {
        code: "E007",
        level: Level::Parseable,
        message: "File is empty or contains only whitespace.",
        remediation: "Add content: at minimum an H1 title, a blockquote, and one H2 section.",
    },
    CodeEntry {
        code: "E008",
        level: Level::Structural,
        message: "File exceeds the maximum recommended size.",
        remediation: "Decompose into a tiered file strategy (index + full + per-section files).",
    },
    CodeEntry {
        code: "W001",
        level: Level::Content,
        message: "No blockquote description found after the H1 title.",
        remediation: "Add a '> description' blockquote immediately after the title.",
    },
    CodeEntry {
        code: "W002",
        level: Level::BestPractices,
        message: "Section name does not match any canonical name or known alias.",
        remediation: "Use canonical section names where possible.",
    },
    CodeEntry {
        code: "W003",
        level: Level::BestPractices,
        message: "Link entries are missing description text (bare URLs).",
        remediation: "Add a description after each link: '- [Title](url): what the page covers'.",
    },
    CodeEntry {
        code: "W004",
        level: Level::BestPractices,
        message: "File contains no fenced code examples.",
        remediation: "Add code examples with language specifiers (```rust, ```bash, ...).",
    },
    CodeEntry {
        code: "W005",
        level: Level::BestPractices,
        message: "Fenced code block found without a language specifier.",
        remediation: "Add a language identifier after the opening triple backticks.",
    },
    CodeEntry {
        code: "W006",
        level: Level::BestPractices,
        message: "Multiple link descriptions follow an identical template.",
        remediation: "Write unique, specific descriptions for each entry.",
    },
    CodeEntry {
        code: "W007",
        level: Level::BestPractices,
        message: "No version or last-updated metadata found.",
        remediation: "Add freshness metadata, e.g. 'Last updated: 2026-01-15'.",
    },
    CodeEntry {
        code: "W008",
        level: Level::BestPractices,
        message: "Sections do not follow the canonical ordering.",
        remediation: "Reorder sections to match the canonical sequence.",
    },
    CodeEntry {
        code: "W009",
        level: Level::BestPractices,
        message: "No Master Index found as the first H2 section.",
        remediation: "Add a Master Index as the first section, with navigation links.",
    },
    CodeEntry {
        code: "W010",
        level: Level::BestPractices,
        message: "File exceeds the recommended token budget for its tier.",
        remediation: "Trim content to stay within the tier's token budget.",
    },
    CodeEntry {
        code: "W011",
        level: Level::Content,
        message: "One or more sections contain no meaningful content.",
        remediation: "Add content to placeholder sections or remove them.",
    },
    CodeEntry {
        code: "I001",
        level: Level::Extended,
        message: "No agent-facing instructions section found.",
        remediation: "Add an LLM Instructions section with positive and negative directives.",
    },
    CodeEntry {
        code: "I002",
        level: Level::Extended,
        message: "No structured concept definitions found.",
        remediation: "Add concept definitions as '- **Term**: definition' entries.",
    },
    CodeEntry {
        code: "I003",
        level: Level::Extended,
        message: "No few-shot Q&A examples found.",
        remediation: "Add question/answer pairs illustrating intended usage.",
    },
    CodeEntry {
        code: "I004",
        level: Level::Extended,
        message: "Relative URLs found in link entries.",
        remediation: "Convert relative URLs to absolute, or document the base URL.",
    },
    CodeEntry {
        code: "I005",
        level: Level::Extended,
        message: "File classified as an inline documentation dump, not a curated index.",
        remediation: "Consider publishing a curated index companion file.",
    },
    CodeEntry {
        code: "I006",
        level: Level::Extended,
        message: "Optional sections are not marked with token estimates.",
        remediation: "Mark optional sections so consumers can skip them to save context.",
    },
    CodeEntry {
        code: "I007",
        level: Level::Extended,
        message: "Domain jargon used without an inline definition.",
        remediation: "Define jargon inline or link to a concept definition.",
    },
];

/// Source position of a finding, 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn at_line(line: usize) -> Self {
        Self { line, column: 1 }
    }
}

/// A single validation finding. Diagnostics are values, never exceptions;
/// severity is not stored — it is always derived from the code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub message: String,
    pub remediation: String,
    pub location: Option<Location>,
    pub context_snippet: Option<String>,
    /// Level of the check that emitted this, which may differ from the
    /// code's home level when a code backs more than one check.
    pub level: Level,
    pub check_id: String,
}

impl Diagnostic {
    pub fn new(code: DiagnosticCode, level: Level, check_id: &str) -> Self {
        Self {
            code,
            message: code.message().to_string(),
            remediation: code.remediation().to_string(),
            location: None,
            context_snippet: None,
            level,
            check_id: check_id.to_string(),
        }
    }

    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.context_snippet = Some(snippet.into());
        self
    }

    pub fn severity(&self) -> Severity {
        self.code.severity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_follows_code_prefix() {
        assert_eq!(DiagnosticCode::EmptyFile.severity(), Severity::Error);
        assert_eq!(
            DiagnosticCode::MissingDescription.severity(),
            Severity::Warning
        );
        assert_eq!(DiagnosticCode::UndefinedJargon.severity(), Severity::Info);
    }

    #[test]
    fn code_strings_are_stable() {
        assert_eq!(DiagnosticCode::NoTitle.as_str(), "E001");
        assert_eq!(DiagnosticCode::SizeLimitExceeded.as_str(), "E008");
        assert_eq!(DiagnosticCode::EmptySections.as_str(), "W011");
        assert_eq!(DiagnosticCode::UndefinedJargon.as_str(), "I007");
    }

    #[test]
    fn codes_serialize_as_code_strings() {
        let json = serde_json::to_string(&DiagnosticCode::NoMasterIndex).unwrap();
        assert_eq!(json, "\"W009\"");
        let back: DiagnosticCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DiagnosticCode::NoMasterIndex);
    }

    #[test]
    fn registry_rows_align_with_declaration_order() {
        // Every code's row must carry its own string; a misaligned table
        // would silently swap messages.
        for (idx, entry) in REGISTRY.iter().enumerate() {
            let prefix = match entry.code.as_bytes()[0] {
                b'E' => 0,
                b'W' => 8,
                _ => 19,
            };
            let number: usize = entry.code[1..].parse().unwrap();
            assert_eq!(idx, prefix + number - 1, "row {} out of place", entry.code);
        }
    }

    #[test]
    fn diagnostic_builder_carries_position_and_snippet() {
        let d = Diagnostic::new(DiagnosticCode::MultipleTitles, Level::Structural, "title-unique")
            .at(Location::at_line(12))
            .with_snippet("# Second Title");
        assert_eq!(d.location.unwrap().line, 12);
        assert_eq!(d.context_snippet.as_deref(), Some("# Second Title"));
        assert_eq!(d.severity(), Severity::Error);
    }
}
