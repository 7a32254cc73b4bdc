//! Validation pipeline: the five-level cumulative conformance ladder.
//!
//! Runs 27 checks against the parsed tree, grouped by level L0 (parseable)
//! through L4 (extended). Every level is always evaluated — a failure never
//! blocks later levels, because partial diagnosis beats early abort. The
//! one exception is a document below L0 (undecodable or empty): there is no
//! structure left to judge, so exactly one diagnostic is emitted and every
//! remaining check is recorded as not applicable.
//!
//! Each failing check emits exactly one diagnostic, referencing a registry
//! code; severity always comes from the code, never from the check.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::antipattern::AntiPatternId;
use crate::canon::CanonicalSection;
use crate::classify::{Classification, DocumentKind, SizeTier};
use crate::config::Config;
use crate::diagnostics::{Diagnostic, DiagnosticCode, Level, Location, Severity};
use crate::heuristics;
use crate::models::{ParsedDocument, RawInput};
use crate::parse;

/// Identifier of a single validation check. Serialized in kebab-case; the
/// strings double as the `check_id` on emitted diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckId {
    EncodingUtf8,
    NonEmpty,
    StructureRecognized,
    TitlePresent,
    TitleUnique,
    LineEndingsLf,
    MarkdownWellFormed,
    LinkSyntax,
    SizeHardLimit,
    DescriptionPresent,
    SectionsPopulated,
    CanonicalSectionNames,
    MasterIndexFirst,
    CanonicalOrdering,
    TokenBudget,
    CodeExamplesPresent,
    CodeBlocksTagged,
    LinkDescriptions,
    DistinctDescriptions,
    FreshnessMetadata,
    AgentDirectives,
    ConceptDefinitions,
    FewShotExamples,
    RelativeUrls,
    FullDumpNotice,
    OptionalSectionsMarked,
    JargonDefined,
}

impl CheckId {
    pub fn as_str(self) -> &'static str {
        match self {
            CheckId::EncodingUtf8 => "encoding-utf8",
            CheckId::NonEmpty => "non-empty",
            CheckId::StructureRecognized => "structure-recognized",
            CheckId::TitlePresent => "title-present",
            CheckId::TitleUnique => "title-unique",
            CheckId::LineEndingsLf => "line-endings-lf",
            CheckId::MarkdownWellFormed => "markdown-well-formed",
            CheckId::LinkSyntax => "link-syntax",
            CheckId::SizeHardLimit => "size-hard-limit",
            CheckId::DescriptionPresent => "description-present",
            CheckId::SectionsPopulated => "sections-populated",
            CheckId::CanonicalSectionNames => "canonical-section-names",
            CheckId::MasterIndexFirst => "master-index-first",
            CheckId::CanonicalOrdering => "canonical-ordering",
            CheckId::TokenBudget => "token-budget",
            CheckId::CodeExamplesPresent => "code-examples-present",
            CheckId::CodeBlocksTagged => "code-blocks-tagged",
            CheckId::LinkDescriptions => "link-descriptions",
            CheckId::DistinctDescriptions => "distinct-descriptions",
            CheckId::FreshnessMetadata => "freshness-metadata",
            CheckId::AgentDirectives => "agent-directives",
            CheckId::ConceptDefinitions => "concept-definitions",
            CheckId::FewShotExamples => "few-shot-examples",
            CheckId::RelativeUrls => "relative-urls",
            CheckId::FullDumpNotice => "full-dump-notice",
            CheckId::OptionalSectionsMarked => "optional-sections-marked",
            CheckId::JargonDefined => "jargon-defined",
        }
    }
}

/// Static row of the check table: one diagnostic code per check, plus the
/// related anti-pattern ids. The table keeps the two detectors decoupled —
/// checks know nothing about pattern detection and vice versa.
pub struct CheckSpec {
    pub id: CheckId,
    pub level: Level,
    pub code: DiagnosticCode,
    /// Observational checks emit diagnostics but never affect level passes.
    pub gating: bool,
    pub related_patterns: &'static [AntiPatternId],
}

pub static CHECKS: [CheckSpec; 27] = [
    CheckSpec {
        id: CheckId::EncodingUtf8,
        level: Level::Parseable,
        code: DiagnosticCode::InvalidEncoding,
        gating: true,
        related_patterns: &[AntiPatternId::EncodingDisaster],
    },
    CheckSpec {
        id: CheckId::NonEmpty,
        level: Level::Parseable,
        code: DiagnosticCode::EmptyFile,
        gating: true,
        related_patterns: &[AntiPatternId::GhostFile],
    },
    CheckSpec {
        id: CheckId::StructureRecognized,
        level: Level::Parseable,
        code: DiagnosticCode::UnparseableStructure,
        gating: true,
        related_patterns: &[AntiPatternId::StructureChaos],
    },
    CheckSpec {
        id: CheckId::TitlePresent,
        level: Level::Structural,
        code: DiagnosticCode::NoTitle,
        gating: true,
        related_patterns: &[],
    },
    CheckSpec {
        id: CheckId::TitleUnique,
        level: Level::Structural,
        code: DiagnosticCode::MultipleTitles,
        gating: true,
        related_patterns: &[],
    },
    CheckSpec {
        id: CheckId::LineEndingsLf,
        level: Level::Structural,
        code: DiagnosticCode::MixedLineEndings,
        gating: true,
        related_patterns: &[AntiPatternId::EncodingDisaster],
    },
    CheckSpec {
        id: CheckId::MarkdownWellFormed,
        level: Level::Structural,
        code: DiagnosticCode::UnparseableStructure,
        gating: true,
        related_patterns: &[AntiPatternId::StructureChaos],
    },
    CheckSpec {
        id: CheckId::LinkSyntax,
        level: Level::Structural,
        code: DiagnosticCode::BrokenLinks,
        gating: true,
        related_patterns: &[AntiPatternId::LinkVoid],
    },
    CheckSpec {
        id: CheckId::SizeHardLimit,
        level: Level::Structural,
        code: DiagnosticCode::SizeLimitExceeded,
        gating: true,
        related_patterns: &[AntiPatternId::MonolithMonster],
    },
    CheckSpec {
        id: CheckId::DescriptionPresent,
        level: Level::Content,
        code: DiagnosticCode::MissingDescription,
        gating: true,
        related_patterns: &[],
    },
    CheckSpec {
        id: CheckId::SectionsPopulated,
        level: Level::Content,
        code: DiagnosticCode::EmptySections,
        gating: true,
        related_patterns: &[AntiPatternId::BlankCanvas, AntiPatternId::OrphanedSections],
    },
    CheckSpec {
        id: CheckId::CanonicalSectionNames,
        level: Level::BestPractices,
        code: DiagnosticCode::NonCanonicalSectionName,
        gating: true,
        related_patterns: &[AntiPatternId::NamingNebula],
    },
    CheckSpec {
        id: CheckId::MasterIndexFirst,
        level: Level::BestPractices,
        code: DiagnosticCode::NoMasterIndex,
        gating: true,
        related_patterns: &[],
    },
    CheckSpec {
        id: CheckId::CanonicalOrdering,
        level: Level::BestPractices,
        code: DiagnosticCode::NonCanonicalOrder,
        gating: true,
        related_patterns: &[AntiPatternId::SectionShuffle],
    },
    CheckSpec {
        id: CheckId::TokenBudget,
        level: Level::BestPractices,
        code: DiagnosticCode::TokenBudgetExceeded,
        gating: true,
        related_patterns: &[AntiPatternId::MonolithMonster],
    },
    CheckSpec {
        id: CheckId::CodeExamplesPresent,
        level: Level::BestPractices,
        code: DiagnosticCode::NoCodeExamples,
        gating: true,
        related_patterns: &[AntiPatternId::ExampleVoid],
    },
    CheckSpec {
        id: CheckId::CodeBlocksTagged,
        level: Level::BestPractices,
        code: DiagnosticCode::CodeBlockMissingLanguage,
        gating: true,
        related_patterns: &[],
    },
    CheckSpec {
        id: CheckId::LinkDescriptions,
        level: Level::BestPractices,
        code: DiagnosticCode::LinkMissingDescription,
        gating: true,
        related_patterns: &[AntiPatternId::LinkDesert],
    },
    CheckSpec {
        id: CheckId::DistinctDescriptions,
        level: Level::BestPractices,
        code: DiagnosticCode::FormulaicDescriptions,
        gating: true,
        related_patterns: &[AntiPatternId::FormulaicDescription],
    },
    CheckSpec {
        id: CheckId::FreshnessMetadata,
        level: Level::BestPractices,
        code: DiagnosticCode::MissingVersionMetadata,
        gating: true,
        related_patterns: &[AntiPatternId::VersionlessDrift],
    },
    CheckSpec {
        id: CheckId::AgentDirectives,
        level: Level::Extended,
        code: DiagnosticCode::NoAgentInstructions,
        gating: true,
        related_patterns: &[AntiPatternId::SilentAgent],
    },
    CheckSpec {
        id: CheckId::ConceptDefinitions,
        level: Level::Extended,
        code: DiagnosticCode::NoConceptDefinitions,
        gating: true,
        related_patterns: &[],
    },
    CheckSpec {
        id: CheckId::FewShotExamples,
        level: Level::Extended,
        code: DiagnosticCode::NoFewShotExamples,
        gating: true,
        related_patterns: &[],
    },
    CheckSpec {
        id: CheckId::RelativeUrls,
        level: Level::Extended,
        code: DiagnosticCode::RelativeUrls,
        gating: false,
        related_patterns: &[],
    },
    CheckSpec {
        id: CheckId::FullDumpNotice,
        level: Level::Extended,
        code: DiagnosticCode::FullDumpInput,
        gating: false,
        related_patterns: &[AntiPatternId::SitemapDump],
    },
    CheckSpec {
        id: CheckId::OptionalSectionsMarked,
        level: Level::Extended,
        code: DiagnosticCode::OptionalSectionsUnmarked,
        gating: false,
        related_patterns: &[],
    },
    CheckSpec {
        id: CheckId::JargonDefined,
        level: Level::Extended,
        code: DiagnosticCode::UndefinedJargon,
        gating: false,
        related_patterns: &[AntiPatternId::JargonJungle],
    },
];

/// Look up the static spec for a check.
pub fn check_spec(id: CheckId) -> &'static CheckSpec {
    // Table order matches enum declaration order.
    &CHECKS[id as usize]
}

/// Outcome of one check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckStatus {
    Pass,
    Fail,
    /// The check had nothing to judge (no links, no fences, ...). Earns no
    /// score credit and counts as neither passed nor failed.
    NotApplicable,
}

/// One slot of the fixed per-run check state. Every run carries all 27.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub id: CheckId,
    pub level: Level,
    pub status: CheckStatus,
}

/// Complete validation outcome for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Highest level L with all levels <= L passing; `None` when even L0
    /// fails.
    pub level_achieved: Option<Level>,
    pub per_level_pass: BTreeMap<Level, bool>,
    pub checks: Vec<CheckResult>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn check(&self, id: CheckId) -> CheckResult {
        // All 27 slots are always populated, in table order.
        self.checks[id as usize]
    }

    pub fn total_errors(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity() == Severity::Error)
            .count()
    }

    pub fn total_warnings(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity() == Severity::Warning)
            .count()
    }
}

/// Internal accumulator; checks are recorded in table order.
#[derive(Default)]
struct Recorder {
    checks: Vec<CheckResult>,
    diagnostics: Vec<Diagnostic>,
}

impl Recorder {
    fn record(&mut self, id: CheckId, status: CheckStatus) {
        let spec = check_spec(id);
        self.checks.push(CheckResult {
            id,
            level: spec.level,
            status,
        });
    }

    fn pass(&mut self, id: CheckId) {
        self.record(id, CheckStatus::Pass);
    }

    fn skip(&mut self, id: CheckId) {
        self.record(id, CheckStatus::NotApplicable);
    }

    fn fail(&mut self, id: CheckId, location: Option<Location>, snippet: Option<String>) {
        let spec = check_spec(id);
        let mut diagnostic = Diagnostic::new(spec.code, spec.level, id.as_str());
        diagnostic.location = location;
        diagnostic.context_snippet = snippet;
        self.diagnostics.push(diagnostic);
        self.record(id, CheckStatus::Fail);
    }
}

/// Run the full ladder. Always returns a complete result; never panics,
/// never errors.
pub fn validate(
    input: &RawInput,
    classification: &Classification,
    doc: &ParsedDocument,
    config: &Config,
) -> ValidationResult {
    let mut r = Recorder::default();

    // L0: the only place the ladder can bottom out.
    let raw_text = match std::str::from_utf8(&input.bytes) {
        Ok(t) => t,
        Err(_) => {
            r.fail(CheckId::EncodingUtf8, None, None);
            return finish_below_l0(r);
        }
    };
    r.pass(CheckId::EncodingUtf8);

    if raw_text.trim().is_empty() {
        r.fail(CheckId::NonEmpty, None, None);
        return finish_below_l0(r);
    }
    r.pass(CheckId::NonEmpty);

    if !doc.has_structure() {
        r.fail(CheckId::StructureRecognized, None, None);
        return finish_below_l0(r);
    }
    r.pass(CheckId::StructureRecognized);

    let text = parse::normalize(raw_text);
    let fences = parse::scan_fences(&text);
    let links: Vec<_> = doc.all_links().collect();

    // L1: structural soundness.
    match &doc.title {
        Some(_) => r.pass(CheckId::TitlePresent),
        None => r.fail(CheckId::TitlePresent, Some(Location::at_line(1)), None),
    }

    if doc.title.is_none() {
        r.skip(CheckId::TitleUnique);
    } else {
        let h1_lines = parse::h1_heading_lines(&text);
        if h1_lines.len() > 1 {
            // One diagnostic regardless of how many extra titles exist.
            let line = h1_lines[1];
            let snippet = text.lines().nth(line - 1).map(str::to_string);
            r.fail(CheckId::TitleUnique, Some(Location::at_line(line)), snippet);
        } else {
            r.pass(CheckId::TitleUnique);
        }
    }

    match raw_text.find('\r') {
        None => r.pass(CheckId::LineEndingsLf),
        Some(pos) => {
            let line = raw_text[..pos].matches('\n').count() + 1;
            r.fail(CheckId::LineEndingsLf, Some(Location::at_line(line)), None);
        }
    }

    if fences.unterminated {
        let line = fences.blocks.last().map(|b| b.line).unwrap_or(1);
        r.fail(
            CheckId::MarkdownWellFormed,
            Some(Location::at_line(line)),
            Some("unterminated code fence".to_string()),
        );
    } else {
        r.pass(CheckId::MarkdownWellFormed);
    }

    if links.is_empty() {
        r.skip(CheckId::LinkSyntax);
    } else {
        let bad: Vec<_> = links
            .iter()
            .filter(|l| !l.url_syntactically_valid)
            .collect();
        match bad.first() {
            None => r.pass(CheckId::LinkSyntax),
            Some(first) => {
                let snippet = format!(
                    "[{}]({}) and {} more",
                    first.title,
                    first.url,
                    bad.len().saturating_sub(1)
                );
                r.fail(
                    CheckId::LinkSyntax,
                    Some(Location::at_line(first.line)),
                    Some(snippet),
                );
            }
        }
    }

    if classification.estimated_tokens > config.budget.hard_limit_tokens {
        r.fail(CheckId::SizeHardLimit, None, None);
    } else {
        r.pass(CheckId::SizeHardLimit);
    }

    // L2: content presence.
    match &doc.description {
        Some(d) if !d.text.trim().is_empty() => r.pass(CheckId::DescriptionPresent),
        _ => r.fail(CheckId::DescriptionPresent, None, None),
    }

    if doc.sections.is_empty() {
        r.skip(CheckId::SectionsPopulated);
    } else {
        let empty = doc.sections.iter().find(|s| {
            s.links.is_empty()
                && (s.raw_content.trim().is_empty()
                    || heuristics::is_placeholder_content(&s.raw_content))
        });
        match empty {
            None => r.pass(CheckId::SectionsPopulated),
            Some(section) => r.fail(
                CheckId::SectionsPopulated,
                Some(Location::at_line(section.line)),
                Some(section.name.clone()),
            ),
        }
    }

    // L3: best practices.
    if doc.sections.is_empty() {
        r.skip(CheckId::CanonicalSectionNames);
    } else {
        let unmatched = doc.sections.iter().find(|s| s.canonical.is_none());
        match unmatched {
            None => r.pass(CheckId::CanonicalSectionNames),
            Some(section) => r.fail(
                CheckId::CanonicalSectionNames,
                Some(Location::at_line(section.line)),
                Some(section.name.clone()),
            ),
        }
    }

    match doc.sections.first() {
        Some(first) if first.canonical == Some(CanonicalSection::MasterIndex) => {
            r.pass(CheckId::MasterIndexFirst)
        }
        Some(first) => r.fail(
            CheckId::MasterIndexFirst,
            Some(Location::at_line(first.line)),
            Some(first.name.clone()),
        ),
        None => r.fail(CheckId::MasterIndexFirst, None, None),
    }

    let canonical_order: Vec<(usize, &crate::models::Section)> = doc
        .sections
        .iter()
        .filter_map(|s| s.canonical.map(|c| (c.order(), s)))
        .collect();
    if canonical_order.len() < 2 {
        r.skip(CheckId::CanonicalOrdering);
    } else {
        let inversion = canonical_order
            .windows(2)
            .find(|w| w[0].0 > w[1].0)
            .map(|w| w[1].1);
        match inversion {
            None => r.pass(CheckId::CanonicalOrdering),
            Some(section) => r.fail(
                CheckId::CanonicalOrdering,
                Some(Location::at_line(section.line)),
                Some(section.name.clone()),
            ),
        }
    }

    if classification.tier == SizeTier::Oversized {
        r.fail(
            CheckId::TokenBudget,
            None,
            Some(format!("~{} tokens", classification.estimated_tokens)),
        );
    } else {
        r.pass(CheckId::TokenBudget);
    }

    if fences.blocks.is_empty() {
        r.fail(CheckId::CodeExamplesPresent, None, None);
        r.skip(CheckId::CodeBlocksTagged);
    } else {
        r.pass(CheckId::CodeExamplesPresent);
        let untagged = fences.blocks.iter().find(|b| b.language.is_none());
        match untagged {
            None => r.pass(CheckId::CodeBlocksTagged),
            Some(block) => r.fail(
                CheckId::CodeBlocksTagged,
                Some(Location::at_line(block.line)),
                None,
            ),
        }
    }

    if links.is_empty() {
        r.skip(CheckId::LinkDescriptions);
        r.skip(CheckId::DistinctDescriptions);
        r.skip(CheckId::RelativeUrls);
    } else {
        let missing: Vec<_> = links
            .iter()
            .filter(|l| l.description.is_none())
            .collect();
        // Tolerates a quarter of entries without descriptions.
        if missing.len() * 4 > links.len() {
            let first = missing[0];
            r.fail(
                CheckId::LinkDescriptions,
                Some(Location::at_line(first.line)),
                Some(format!("{} of {} links undescribed", missing.len(), links.len())),
            );
        } else {
            r.pass(CheckId::LinkDescriptions);
        }

        let descriptions: Vec<&str> = links
            .iter()
            .filter_map(|l| l.description.as_deref())
            .collect();
        if descriptions.len() < 5 {
            r.skip(CheckId::DistinctDescriptions);
        } else {
            match heuristics::dominant_description_prefix(&descriptions) {
                Some((prefix, count)) => r.fail(
                    CheckId::DistinctDescriptions,
                    None,
                    Some(format!("{count} descriptions start \"{prefix}\"")),
                ),
                None => r.pass(CheckId::DistinctDescriptions),
            }
        }

        let relative = links
            .iter()
            .find(|l| l.url_syntactically_valid && parse::is_relative_url(&l.url));
        match relative {
            Some(link) => r.fail(
                CheckId::RelativeUrls,
                Some(Location::at_line(link.line)),
                Some(link.url.clone()),
            ),
            None => r.pass(CheckId::RelativeUrls),
        }
    }

    if heuristics::has_freshness_metadata(&text) {
        r.pass(CheckId::FreshnessMetadata);
    } else {
        r.fail(CheckId::FreshnessMetadata, None, None);
    }

    // L4: extended enrichment.
    let has_instruction_section = doc
        .sections
        .iter()
        .any(|s| s.canonical == Some(CanonicalSection::LlmInstructions));
    if has_instruction_section || heuristics::has_directive_phrasing(&text) {
        r.pass(CheckId::AgentDirectives);
    } else {
        r.fail(CheckId::AgentDirectives, None, None);
    }

    if heuristics::concept_definition_count(&text) > 0 {
        r.pass(CheckId::ConceptDefinitions);
    } else {
        r.fail(CheckId::ConceptDefinitions, None, None);
    }

    if heuristics::has_few_shot_examples(&text) {
        r.pass(CheckId::FewShotExamples);
    } else {
        r.fail(CheckId::FewShotExamples, None, None);
    }

    if classification.kind == DocumentKind::FullDump {
        r.fail(
            CheckId::FullDumpNotice,
            None,
            Some(format!("{} bytes", classification.size_bytes)),
        );
    } else {
        r.pass(CheckId::FullDumpNotice);
    }

    let optional_sections: Vec<_> = doc
        .sections
        .iter()
        .filter(|s| s.canonical == Some(CanonicalSection::Optional))
        .collect();
    if optional_sections.is_empty() {
        r.skip(CheckId::OptionalSectionsMarked);
    } else {
        let unmarked = optional_sections
            .iter()
            .find(|s| !s.name.to_lowercase().contains("token"));
        match unmarked {
            None => r.pass(CheckId::OptionalSectionsMarked),
            Some(section) => r.fail(
                CheckId::OptionalSectionsMarked,
                Some(Location::at_line(section.line)),
                Some(section.name.clone()),
            ),
        }
    }

    if heuristics::jargon_terms(&text).is_empty() {
        r.skip(CheckId::JargonDefined);
    } else {
        let undefined = heuristics::undefined_acronyms(&text);
        if undefined.len() >= 3 {
            r.fail(CheckId::JargonDefined, None, Some(undefined.join(", ")));
        } else {
            r.pass(CheckId::JargonDefined);
        }
    }

    finish(r)
}

/// Every slot not yet recorded becomes NotApplicable; a document below L0
/// passes no level at all.
fn finish_below_l0(mut r: Recorder) -> ValidationResult {
    for spec in CHECKS.iter().skip(r.checks.len()) {
        r.checks.push(CheckResult {
            id: spec.id,
            level: spec.level,
            status: CheckStatus::NotApplicable,
        });
    }
    r.checks.sort_by_key(|c| c.id as usize);
    let per_level_pass: BTreeMap<Level, bool> =
        Level::ALL.iter().map(|l| (*l, false)).collect();
    ValidationResult {
        level_achieved: None,
        per_level_pass,
        checks: r.checks,
        diagnostics: r.diagnostics,
    }
}

fn finish(mut r: Recorder) -> ValidationResult {
    r.checks.sort_by_key(|c| c.id as usize);
    let mut per_level_pass = BTreeMap::new();
    for level in Level::ALL {
        let failed = r.checks.iter().any(|c| {
            c.level == level
                && c.status == CheckStatus::Fail
                && check_spec(c.id).gating
        });
        per_level_pass.insert(level, !failed);
    }

    let mut level_achieved = None;
    for level in Level::ALL {
        if per_level_pass[&level] {
            level_achieved = Some(level);
        } else {
            break;
        }
    }

    ValidationResult {
        level_achieved,
        per_level_pass,
        checks: r.checks,
        diagnostics: r.diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify;

    fn run_bytes(bytes: &[u8]) -> ValidationResult {
        let input = RawInput::new("llms.txt", bytes.to_vec());
        let config = Config::default();
        let classification = classify::classify(&input.bytes, &config.classifier);
        let doc = match std::str::from_utf8(&input.bytes) {
            Ok(text) => parse::parse(text),
            Err(_) => ParsedDocument::empty(),
        };
        validate(&input, &classification, &doc, &config)
    }

    fn run(text: &str) -> ValidationResult {
        run_bytes(text.as_bytes())
    }

    #[test]
    fn empty_file_emits_exactly_one_diagnostic() {
        let result = run("");
        assert_eq!(result.level_achieved, None);
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].code, DiagnosticCode::EmptyFile);
        assert!(result.per_level_pass.values().all(|passed| !passed));
        assert_eq!(result.checks.len(), CHECKS.len());
    }

    #[test]
    fn binary_input_emits_exactly_one_diagnostic() {
        let result = run_bytes(&[0xff, 0xfe, 0x01]);
        assert_eq!(result.level_achieved, None);
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].code, DiagnosticCode::InvalidEncoding);
    }

    #[test]
    fn minimal_title_passes_l0_and_l1() {
        let result = run("# Title\n");
        assert_eq!(result.level_achieved, Some(Level::Structural));
        assert!(result.per_level_pass[&Level::Parseable]);
        assert!(result.per_level_pass[&Level::Structural]);
        assert!(!result.per_level_pass[&Level::Content]);
        // Missing description is a warning, not an error.
        assert!(result
            .diagnostics
            .iter()
            .any(|d| d.code == DiagnosticCode::MissingDescription));
        assert_eq!(result.total_errors(), 0);
    }

    #[test]
    fn every_check_slot_is_always_populated() {
        let result = run("# Title\n");
        assert_eq!(result.checks.len(), CHECKS.len());
        assert_eq!(
            result.check(CheckId::LinkSyntax).status,
            CheckStatus::NotApplicable
        );
        assert_eq!(
            result.check(CheckId::TitlePresent).status,
            CheckStatus::Pass
        );
    }

    #[test]
    fn multiple_h1_flagged_exactly_once() {
        let result = run("# First\n\n# Second\n\n# Third\n\n## Docs\n- [a](https://a.example/)\n");
        let dups: Vec<_> = result
            .diagnostics
            .iter()
            .filter(|d| d.code == DiagnosticCode::MultipleTitles)
            .collect();
        assert_eq!(dups.len(), 1);
        assert_eq!(dups[0].location.unwrap().line, 3);
    }

    #[test]
    fn crlf_input_fails_line_endings() {
        let result = run("# Title\r\n");
        assert_eq!(
            result.check(CheckId::LineEndingsLf).status,
            CheckStatus::Fail
        );
        assert!(!result.per_level_pass[&Level::Structural]);
    }

    #[test]
    fn empty_href_fails_link_syntax() {
        let result = run("# T\n\n## Docs\n- [broken]()\n");
        assert_eq!(result.check(CheckId::LinkSyntax).status, CheckStatus::Fail);
        assert!(result
            .diagnostics
            .iter()
            .any(|d| d.code == DiagnosticCode::BrokenLinks));
    }

    #[test]
    fn higher_levels_evaluated_even_when_lower_fail() {
        // No description (L2 fails) but L3 facts are still judged.
        let result = run(
            "# T\n\n## Master Index\n- [Guide](https://g.example/): The guide\n\n\
             ```rust\nfn x() {}\n```\nLast updated: 2026-01-10\n",
        );
        assert!(!result.per_level_pass[&Level::Content]);
        assert!(result.per_level_pass[&Level::BestPractices]);
        assert_eq!(result.level_achieved, Some(Level::Structural));
    }

    #[test]
    fn observational_findings_never_block_a_level() {
        let text = "# Tool\n\n> Curated index for Tool.\n\n\
                    ## Master Index\n- [Guide](docs/guide.md): How to use Tool\n\n\
                    ## LLM Instructions\nDo not invent endpoints. You should cite pages.\n\n\
                    ## Core Concepts\n- **Gauge**: the scoring unit\n\n\
                    ## Examples\n```rust\nfn main() {}\n```\n\n\
                    ## FAQ\nQ: Where to start?\nA: The guide.\nLast updated: 2026-01-10\n";
        let result = run(text);
        // Relative URL notice fired...
        assert!(result
            .diagnostics
            .iter()
            .any(|d| d.code == DiagnosticCode::RelativeUrls));
        // ...yet every level including L4 passes.
        assert_eq!(result.level_achieved, Some(Level::Extended));
    }

    #[test]
    fn check_table_aligns_with_enum_order() {
        for (idx, spec) in CHECKS.iter().enumerate() {
            assert_eq!(spec.id as usize, idx, "table row {} out of order", idx);
        }
    }
}
