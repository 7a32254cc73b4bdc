//! Quality scorer: three dimensions, 100 points, one gate.
//!
//! Structural (30) and Content (50) award fixed per-check weights for every
//! passing check; the Anti-Pattern dimension (20) starts full and pays a
//! severity-weighted penalty per detection. A check that did not apply earns
//! nothing and counts as neither passed nor failed. Any critical
//! anti-pattern caps the total at 29 no matter what the dimensions say.
//!
//! Scoring is bit-deterministic: same validation result and findings, same
//! score. Timestamps live on the report envelope, never in here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::antipattern::{AntiPatternCategory, AntiPatternFinding};
use crate::validate::{CheckId, CheckStatus, ValidationResult};

pub const MAX_STRUCTURAL: u32 = 30;
pub const MAX_CONTENT: u32 = 50;
pub const MAX_ANTI_PATTERN: u32 = 20;
/// Ceiling applied when a critical anti-pattern is detected.
pub const GATED_TOTAL_CAP: u32 = 29;

/// Per-check weights for the Structural dimension (sums to 30).
const STRUCTURAL_WEIGHTS: [(CheckId, u32); 9] = [
    (CheckId::EncodingUtf8, 4),
    (CheckId::NonEmpty, 4),
    (CheckId::StructureRecognized, 4),
    (CheckId::TitlePresent, 4),
    (CheckId::TitleUnique, 2),
    (CheckId::LineEndingsLf, 2),
    (CheckId::MarkdownWellFormed, 4),
    (CheckId::LinkSyntax, 4),
    (CheckId::SizeHardLimit, 2),
];

/// Per-check weights for the Content dimension (sums to 50). Code examples,
/// link descriptions, freshness, and jargon definitions carry the most
/// weight: they are the strongest observed quality predictors.
const CONTENT_WEIGHTS: [(CheckId, u32); 12] = [
    (CheckId::CodeExamplesPresent, 8),
    (CheckId::LinkDescriptions, 7),
    (CheckId::FreshnessMetadata, 6),
    (CheckId::JargonDefined, 6),
    (CheckId::MasterIndexFirst, 4),
    (CheckId::DescriptionPresent, 3),
    (CheckId::SectionsPopulated, 3),
    (CheckId::TokenBudget, 3),
    (CheckId::CodeBlocksTagged, 3),
    (CheckId::DistinctDescriptions, 3),
    (CheckId::CanonicalSectionNames, 2),
    (CheckId::CanonicalOrdering, 2),
];

fn category_penalty(category: AntiPatternCategory) -> u32 {
    match category {
        AntiPatternCategory::Critical => 8,
        AntiPatternCategory::Structural => 5,
        AntiPatternCategory::Content => 3,
        AntiPatternCategory::Strategic => 2,
    }
}

/// One scored dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub points: u32,
    pub max_points: u32,
    pub checks_passed: u32,
    pub checks_failed: u32,
    pub is_gated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    Structural,
    Content,
    AntiPattern,
}

/// Letter-style grade over the composite total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    Exemplary,
    Strong,
    Adequate,
    NeedsWork,
    Critical,
}

impl Grade {
    pub fn from_total(total: u32) -> Self {
        match total {
            90..=u32::MAX => Grade::Exemplary,
            70..=89 => Grade::Strong,
            50..=69 => Grade::Adequate,
            30..=49 => Grade::NeedsWork,
            _ => Grade::Critical,
        }
    }
}

/// Composite quality score for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityScore {
    pub total: u32,
    pub grade: Grade,
    pub dimensions: BTreeMap<Dimension, DimensionScore>,
}

/// Combine validation results and anti-pattern findings into the composite
/// score. Pure and deterministic.
pub fn score(validation: &ValidationResult, findings: &[AntiPatternFinding]) -> QualityScore {
    let gated = findings
        .iter()
        .any(|f| f.detected && f.category == AntiPatternCategory::Critical);

    // A document below L0 has nothing worth crediting.
    if validation.level_achieved.is_none() {
        let mut dimensions = BTreeMap::new();
        dimensions.insert(Dimension::Structural, zero_dimension(MAX_STRUCTURAL, gated));
        dimensions.insert(Dimension::Content, zero_dimension(MAX_CONTENT, gated));
        dimensions.insert(
            Dimension::AntiPattern,
            zero_dimension(MAX_ANTI_PATTERN, gated),
        );
        return QualityScore {
            total: 0,
            grade: Grade::Critical,
            dimensions,
        };
    }

    let structural = weighted_dimension(validation, &STRUCTURAL_WEIGHTS, MAX_STRUCTURAL, gated);
    let content = weighted_dimension(validation, &CONTENT_WEIGHTS, MAX_CONTENT, gated);

    let mut penalty = 0u32;
    let mut detected = 0u32;
    for finding in findings {
        if finding.detected {
            penalty += category_penalty(finding.category);
            detected += 1;
        }
    }
    let anti_pattern = DimensionScore {
        points: MAX_ANTI_PATTERN.saturating_sub(penalty),
        max_points: MAX_ANTI_PATTERN,
        checks_passed: findings.len() as u32 - detected,
        checks_failed: detected,
        is_gated: gated,
    };

    let sum = structural.points + content.points + anti_pattern.points;
    let total = if gated { sum.min(GATED_TOTAL_CAP) } else { sum };

    let mut dimensions = BTreeMap::new();
    dimensions.insert(Dimension::Structural, structural);
    dimensions.insert(Dimension::Content, content);
    dimensions.insert(Dimension::AntiPattern, anti_pattern);

    QualityScore {
        total,
        grade: Grade::from_total(total),
        dimensions,
    }
}

fn zero_dimension(max_points: u32, gated: bool) -> DimensionScore {
    DimensionScore {
        points: 0,
        max_points,
        checks_passed: 0,
        checks_failed: 0,
        is_gated: gated,
    }
}

fn weighted_dimension(
    validation: &ValidationResult,
    weights: &[(CheckId, u32)],
    max_points: u32,
    gated: bool,
) -> DimensionScore {
    let mut points = 0;
    let mut passed = 0;
    let mut failed = 0;
    for (id, weight) in weights {
        match validation.check(*id).status {
            CheckStatus::Pass => {
                points += weight;
                passed += 1;
            }
            CheckStatus::Fail => failed += 1,
            CheckStatus::NotApplicable => {}
        }
    }
    DimensionScore {
        points,
        max_points,
        checks_passed: passed,
        checks_failed: failed,
        is_gated: gated,
    }
}
