use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Engine configuration: the overridable classifier and budget constants.
///
/// Callers that need no overrides use [`Config::default`]. The loader exists
/// for the external CLI/config layer; the core itself never touches the
/// filesystem during a validation run.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub budget: BudgetConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ClassifierConfig {
    /// Byte size above which input is classified as a full dump rather than
    /// a curated index document.
    #[serde(default = "default_full_dump_boundary")]
    pub full_dump_boundary_bytes: usize,
    #[serde(default = "default_minimal_max")]
    pub minimal_max_tokens: usize,
    #[serde(default = "default_standard_max")]
    pub standard_max_tokens: usize,
    #[serde(default = "default_comprehensive_max")]
    pub comprehensive_max_tokens: usize,
    #[serde(default = "default_full_max")]
    pub full_max_tokens: usize,
}

fn default_full_dump_boundary() -> usize {
    256_000
}
fn default_minimal_max() -> usize {
    1_500
}
fn default_standard_max() -> usize {
    4_500
}
fn default_comprehensive_max() -> usize {
    12_000
}
fn default_full_max() -> usize {
    50_000
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            full_dump_boundary_bytes: default_full_dump_boundary(),
            minimal_max_tokens: default_minimal_max(),
            standard_max_tokens: default_standard_max(),
            comprehensive_max_tokens: default_comprehensive_max(),
            full_max_tokens: default_full_max(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct BudgetConfig {
    /// Estimated-token count above which the hard size error fires.
    #[serde(default = "default_hard_limit")]
    pub hard_limit_tokens: usize,
}

fn default_hard_limit() -> usize {
    crate::classify::TOKEN_ZONE_DEGRADATION
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            hard_limit_tokens: default_hard_limit(),
        }
    }
}

/// Load overrides from a TOML file and validate them.
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config = parse_config(&content).with_context(|| "Failed to parse config file")?;
    Ok(config)
}

/// Parse and validate overrides from a TOML string.
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;

    if config.classifier.full_dump_boundary_bytes == 0 {
        anyhow::bail!("classifier.full_dump_boundary_bytes must be > 0");
    }

    let tiers = [
        config.classifier.minimal_max_tokens,
        config.classifier.standard_max_tokens,
        config.classifier.comprehensive_max_tokens,
        config.classifier.full_max_tokens,
    ];
    if tiers.windows(2).any(|w| w[0] >= w[1]) {
        anyhow::bail!("classifier tier bounds must be strictly increasing");
    }

    if config.budget.hard_limit_tokens <= config.classifier.full_max_tokens {
        anyhow::bail!("budget.hard_limit_tokens must exceed classifier.full_max_tokens");
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_research_constants() {
        let config = Config::default();
        assert_eq!(config.classifier.full_dump_boundary_bytes, 256_000);
        assert_eq!(config.classifier.minimal_max_tokens, 1_500);
        assert_eq!(config.classifier.full_max_tokens, 50_000);
        assert_eq!(config.budget.hard_limit_tokens, 100_000);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = parse_config("[budget]\nhard_limit_tokens = 200000\n").unwrap();
        assert_eq!(config.budget.hard_limit_tokens, 200_000);
        assert_eq!(config.classifier.full_dump_boundary_bytes, 256_000);
    }

    #[test]
    fn rejects_non_increasing_tiers() {
        let err = parse_config("[classifier]\nstandard_max_tokens = 1000\n").unwrap_err();
        assert!(err.to_string().contains("strictly increasing"));
    }

    #[test]
    fn rejects_hard_limit_below_full_tier() {
        let err = parse_config("[budget]\nhard_limit_tokens = 10000\n").unwrap_err();
        assert!(err.to_string().contains("hard_limit_tokens"));
    }
}
