//! End-to-end pipeline: bytes in, report out.
//!
//! Classification, parsing, validation, pattern detection, and scoring run
//! strictly in that order; each stage is pure and the whole run is
//! infallible — undecodable input degrades to an unclassified report with a
//! single fatal diagnostic instead of an error. The report envelope carries
//! a run id, content digest, and timestamp; none of those participate in
//! the deterministic scoring contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::antipattern::{self, AntiPatternFinding};
use crate::classify::{self, Classification};
use crate::config::Config;
use crate::models::{ParsedDocument, RawInput};
use crate::parse;
use crate::score::{self, QualityScore};
use crate::validate::{self, ValidationResult};

/// Complete outcome of validating one input, serializable without loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub run_id: String,
    pub file_name: String,
    pub content_sha256: String,
    pub generated_at: DateTime<Utc>,
    pub classification: Classification,
    pub document: ParsedDocument,
    pub validation: ValidationResult,
    pub findings: Vec<AntiPatternFinding>,
    pub score: QualityScore,
}

impl ValidationReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Run the full pipeline on one input. Never fails, never panics.
pub fn run(input: &RawInput, config: &Config) -> ValidationReport {
    let classification = classify::classify(&input.bytes, &config.classifier);

    let (document, text) = match std::str::from_utf8(&input.bytes) {
        Ok(text) => (parse::parse(text), text),
        // Undecodable input: empty tree, and validation surfaces the
        // encoding diagnostic.
        Err(_) => (ParsedDocument::empty(), ""),
    };

    let validation = validate::validate(input, &classification, &document, config);
    let findings = antipattern::detect(&document, &classification, text);
    let score = score::score(&validation, &findings);

    let mut hasher = Sha256::new();
    hasher.update(&input.bytes);
    let content_sha256 = format!("{:x}", hasher.finalize());

    ValidationReport {
        run_id: Uuid::new_v4().to_string(),
        file_name: input.file_name.clone(),
        content_sha256,
        generated_at: Utc::now(),
        classification,
        document,
        validation,
        findings,
        score,
    }
}

/// Convenience wrapper for in-memory text.
pub fn run_text(file_name: &str, text: &str, config: &Config) -> ValidationReport {
    run(&RawInput::from_text(file_name, text), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::DocumentKind;

    #[test]
    fn binary_input_produces_a_full_report() {
        let input = RawInput::new("garbage.bin", vec![0xff, 0xfe, 0x00, 0x01]);
        let report = run(&input, &Config::default());
        assert_eq!(report.classification.kind, DocumentKind::Unclassified);
        assert_eq!(report.validation.diagnostics.len(), 1);
        assert_eq!(report.findings.len(), 22);
        assert_eq!(report.score.total, 0);
    }

    #[test]
    fn scoring_is_deterministic_across_runs() {
        let text = "# T\n\n> Desc.\n\n## Master Index\n- [G](https://g.example/): Guide\n";
        let a = run_text("llms.txt", text, &Config::default());
        let b = run_text("llms.txt", text, &Config::default());
        // Envelope fields differ; everything validation-derived must not.
        assert_eq!(a.score, b.score);
        assert_eq!(a.validation.diagnostics, b.validation.diagnostics);
        assert_eq!(a.content_sha256, b.content_sha256);
        assert_ne!(a.run_id, b.run_id);
    }

    #[test]
    fn report_round_trips_through_json() {
        let report = run_text(
            "llms.txt",
            "# T\n\n## Docs\n- [a](https://a.example/): A\n",
            &Config::default(),
        );
        let json = report.to_json().unwrap();
        let back = ValidationReport::from_json(&json).unwrap();
        assert_eq!(report, back);
    }
}
