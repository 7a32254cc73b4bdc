use doc_gauge::classify::DocumentKind;
use doc_gauge::config::Config;
use doc_gauge::diagnostics::{DiagnosticCode, Level, Severity};
use doc_gauge::models::RawInput;
use doc_gauge::parse;
use doc_gauge::pipeline::{self, ValidationReport};
use doc_gauge::score::Grade;

fn run_text(text: &str) -> ValidationReport {
    pipeline::run_text("llms.txt", text, &Config::default())
}

fn run_bytes(bytes: Vec<u8>) -> ValidationReport {
    pipeline::run(&RawInput::new("llms.txt", bytes), &Config::default())
}

/// A fixture that should satisfy every best practice: canonical ordering
/// with a Master Index first, described links, tagged code fences, concept
/// definitions, agent directives, and freshness metadata.
const GOLD: &str = r#"# Acme Toolkit

> Curated documentation index for the Acme data toolkit.

## Master Index
- [Getting Started](https://docs.acme.dev/start): Install the toolkit and run the first sync
- [Core Concepts](https://docs.acme.dev/concepts): The pipeline, stores, and budget model
- [API Reference](https://docs.acme.dev/api): Every public endpoint with parameters
- [Examples](https://docs.acme.dev/examples): Copy-ready recipes for common jobs

## LLM Instructions
When answering questions about Acme, you should cite the linked page.
Do not invent endpoints that are not listed in the API Reference.

## Getting Started
- [Install](https://docs.acme.dev/install): Platform packages and the version matrix
- [First Sync](https://docs.acme.dev/first-sync): A five-minute walkthrough

```bash
acme init && acme sync filesystem
```

## Core Concepts
- **Connector**: a source adapter that yields documents
- **Budget**: the token ceiling applied to each tier
The ACL (access control list) model gates every store.

## API Reference
- [Sync API](https://docs.acme.dev/api/sync): Start and monitor sync jobs
- [Query API](https://docs.acme.dev/api/query): Hybrid search over indexed content

## Examples
```rust
let report = acme::sync("filesystem")?;
```

Last updated: 2026-03-01. Version 2.4.0.
"#;

#[test]
fn test_empty_file_scenario() {
    let report = run_text("");
    assert_eq!(report.validation.level_achieved, None);
    assert_eq!(report.validation.diagnostics.len(), 1);
    let diagnostic = &report.validation.diagnostics[0];
    assert_eq!(diagnostic.code, DiagnosticCode::EmptyFile);
    assert_eq!(diagnostic.severity(), Severity::Error);
    assert_eq!(report.score.total, 0);
    assert_eq!(report.score.grade, Grade::Critical);
}

#[test]
fn test_minimal_valid_file_scenario() {
    let report = run_text("# Title\n");
    assert!(report.validation.per_level_pass[&Level::Parseable]);
    assert!(report.validation.per_level_pass[&Level::Structural]);
    assert!(!report.validation.per_level_pass[&Level::Content]);
    assert_eq!(report.validation.level_achieved, Some(Level::Structural));
    // Missing description degrades quality without demoting L1.
    assert_eq!(report.validation.total_errors(), 0);
    assert!(report.validation.total_warnings() > 0);
    assert!(
        (20..=40).contains(&report.score.total),
        "total {} outside expected band",
        report.score.total
    );
    assert_eq!(report.score.grade, Grade::NeedsWork);
}

#[test]
fn test_gold_standard_scenario() {
    let report = run_text(GOLD);
    assert_eq!(
        report.validation.level_achieved,
        Some(Level::BestPractices),
        "diagnostics: {:?}",
        report.validation.diagnostics
    );
    assert!(
        report.score.total >= 85,
        "total {} below gold threshold",
        report.score.total
    );
    for finding in &report.findings {
        use doc_gauge::antipattern::AntiPatternCategory::*;
        if matches!(finding.category, Critical | Structural | Content) {
            assert!(
                !finding.detected,
                "unexpected detection: {:?} ({:?})",
                finding.pattern_id, finding.evidence
            );
        }
    }
}

#[test]
fn test_duplicate_titles_scenario() {
    let report = run_text("# First\n\n# Second\n\n# Third\n\n## Docs\n- [a](https://a.example/): A\n");
    assert_eq!(report.document.title.as_ref().unwrap().text, "First");
    assert!(report.document.preamble.contains("# Second"));
    let dups = report
        .validation
        .diagnostics
        .iter()
        .filter(|d| d.code == DiagnosticCode::MultipleTitles)
        .count();
    assert_eq!(dups, 1);
}

#[test]
fn test_determinism_property() {
    for text in ["", "# T\n", GOLD, "plain prose, nothing else\n"] {
        let a = run_text(text);
        let b = run_text(text);
        assert_eq!(a.score.total, b.score.total);
        let mut codes_a: Vec<&str> = a
            .validation
            .diagnostics
            .iter()
            .map(|d| d.code.as_str())
            .collect();
        let mut codes_b: Vec<&str> = b
            .validation
            .diagnostics
            .iter()
            .map(|d| d.code.as_str())
            .collect();
        codes_a.sort_unstable();
        codes_b.sort_unstable();
        assert_eq!(codes_a, codes_b);
    }
}

#[test]
fn test_monotonic_levels_property() {
    for text in ["", "# T\n", GOLD, "## Lonely Section\ncontent\n"] {
        let report = run_text(text);
        let passes = &report.validation.per_level_pass;
        match report.validation.level_achieved {
            None => assert!(!passes[&Level::Parseable]),
            Some(achieved) => {
                for level in Level::ALL {
                    if level <= achieved {
                        assert!(passes[&level], "{:?} should pass for {:?}", level, text);
                    }
                }
                if achieved != Level::Extended {
                    assert!(Level::ALL.iter().any(|l| *l > achieved && !passes[l]));
                }
            }
        }
    }
}

#[test]
fn test_gating_property() {
    // Every link broken: Link Void is a critical detection.
    let report = run_text(
        "# T\n\n> Desc.\n\n## Master Index\n- [a]()\n- [b](#)\n- [c]()\n- [d](#)\n",
    );
    assert!(report
        .findings
        .iter()
        .any(|f| f.detected
            && f.category == doc_gauge::antipattern::AntiPatternCategory::Critical));
    assert!(report.score.total <= 29);
    assert_eq!(report.score.grade, Grade::Critical);
}

#[test]
fn test_classifier_boundary() {
    let mut at_boundary = b"# Dump\n".to_vec();
    at_boundary.resize(256_000, b'a');
    let at = run_bytes(at_boundary);
    assert_eq!(at.classification.kind, DocumentKind::IndexDocument);

    let mut over_boundary = b"# Dump\n".to_vec();
    over_boundary.resize(256_001, b'a');
    let over = run_bytes(over_boundary);
    assert_eq!(over.classification.kind, DocumentKind::FullDump);
    assert!(over
        .validation
        .diagnostics
        .iter()
        .any(|d| d.code == DiagnosticCode::FullDumpInput));
}

#[test]
fn test_markdown_round_trip() {
    let doc = parse::parse(GOLD);
    let rendered = parse::to_markdown(&doc);
    let reparsed = parse::parse(&rendered);

    assert_eq!(
        doc.title.as_ref().map(|t| t.text.as_str()),
        reparsed.title.as_ref().map(|t| t.text.as_str())
    );
    assert_eq!(doc.description.is_some(), reparsed.description.is_some());
    let names: Vec<&str> = doc.sections.iter().map(|s| s.name.as_str()).collect();
    let reparsed_names: Vec<&str> = reparsed.sections.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, reparsed_names);
    assert_eq!(doc.all_links().count(), reparsed.all_links().count());
}

#[test]
fn test_binary_garbage_is_diagnosed_not_thrown() {
    let report = run_bytes(vec![0xc3, 0x28, 0xa0, 0xa1, 0xff]);
    assert_eq!(report.classification.kind, DocumentKind::Unclassified);
    assert_eq!(report.validation.diagnostics.len(), 1);
    assert_eq!(
        report.validation.diagnostics[0].code,
        DiagnosticCode::InvalidEncoding
    );
    assert_eq!(report.score.total, 0);
}

#[test]
fn test_link_urls_exposed_for_reachability_checker() {
    let report = run_text(GOLD);
    let urls = report.document.link_urls();
    assert_eq!(urls.len(), 8);
    assert!(urls.iter().all(|u| u.starts_with("https://docs.acme.dev/")));
}
