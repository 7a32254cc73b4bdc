//! Document classification: kind and token-budget tier.
//!
//! Decides whether raw input is a curated index document or an oversized
//! inline dump, and assigns a size tier from a bytes-based token estimate.
//! Classification never fails; at worst it degrades to [`DocumentKind::
//! Unclassified`] (zero-length or undecodable input).

use serde::{Deserialize, Serialize};

use crate::config::ClassifierConfig;

/// Approximate chars-per-token ratio used for the token estimate.
pub const CHARS_PER_TOKEN: usize = 4;

/// Token-count zones observed across the corpus. Files above the
/// degradation zone trigger the hard size error; files above the
/// anti-pattern zone exceed every current context window.
pub const TOKEN_ZONE_OPTIMAL: usize = 20_000;
pub const TOKEN_ZONE_GOOD: usize = 50_000;
pub const TOKEN_ZONE_DEGRADATION: usize = 100_000;
pub const TOKEN_ZONE_ANTI_PATTERN: usize = 500_000;

/// Verdict on what kind of document the raw bytes hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    /// A curated, format-conformant link catalog (the common case).
    IndexDocument,
    /// An oversized inline documentation concatenation.
    FullDump,
    /// Zero-length or undecodable input; nothing to classify.
    Unclassified,
}

/// Token-budget tier, from the bytes/4 estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SizeTier {
    Minimal,
    Standard,
    Comprehensive,
    Full,
    Oversized,
}

impl SizeTier {
    /// Recommended use case for the tier.
    pub fn use_case(self) -> &'static str {
        match self {
            SizeTier::Minimal => "Stub or early-stage projects",
            SizeTier::Standard => "Small projects, <100 pages, <5 features",
            SizeTier::Comprehensive => "Medium projects, 100-500 pages, 5-20 features",
            SizeTier::Full => "Large projects, 500+ pages, 20+ features",
            SizeTier::Oversized => "Beyond any single-file budget",
        }
    }

    /// Recommended file organization for the tier.
    pub fn file_strategy(self) -> &'static str {
        match self {
            SizeTier::Minimal | SizeTier::Standard => "single",
            SizeTier::Comprehensive => "dual (index + full)",
            SizeTier::Full => "multi (master + per-service)",
            SizeTier::Oversized => "decompose",
        }
    }
}

/// Immutable classification verdict for one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub kind: DocumentKind,
    pub size_bytes: usize,
    pub estimated_tokens: usize,
    pub tier: SizeTier,
}

/// Classify raw bytes. Pure and infallible: kind is decided by a single
/// byte-size boundary, tier by a range lookup on the token estimate.
pub fn classify(bytes: &[u8], config: &ClassifierConfig) -> Classification {
    let size_bytes = bytes.len();
    let estimated_tokens = size_bytes / CHARS_PER_TOKEN;

    let kind = if size_bytes == 0 || std::str::from_utf8(bytes).is_err() {
        DocumentKind::Unclassified
    } else if size_bytes > config.full_dump_boundary_bytes {
        DocumentKind::FullDump
    } else {
        DocumentKind::IndexDocument
    };

    Classification {
        kind,
        size_bytes,
        estimated_tokens,
        tier: tier_for(estimated_tokens, config),
    }
}

fn tier_for(tokens: usize, config: &ClassifierConfig) -> SizeTier {
    if tokens < config.minimal_max_tokens {
        SizeTier::Minimal
    } else if tokens <= config.standard_max_tokens {
        SizeTier::Standard
    } else if tokens <= config.comprehensive_max_tokens {
        SizeTier::Comprehensive
    } else if tokens <= config.full_max_tokens {
        SizeTier::Full
    } else {
        SizeTier::Oversized
    }
}
