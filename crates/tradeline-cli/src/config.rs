//! Analyzer configuration loading.
//!
//! Configuration is a TOML rendering of [`AnalyzerConfig`]. Every field is
//! optional; missing ones keep their defaults.

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use tradeline_analytics::AnalyzerConfig;

use crate::error::{CliError, CliResult};

/// Environment variable that points at a config file.
pub const CONFIG_ENV: &str = "TRADELINE_CONFIG";

/// Returns the per-user config file location.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .map(|dir| dir.join("tradeline").join("config.toml"))
}

/// Loads and validates a config file.
pub fn from_file(path: &Path) -> CliResult<AnalyzerConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| CliError::config(path, e))?;
    let config = from_toml_str(&content).map_err(|e| CliError::config(path, e))?;
    debug!(path = %path.display(), "loaded analyzer config");
    Ok(config)
}

/// Parses and validates TOML config text.
pub fn from_toml_str(content: &str) -> Result<AnalyzerConfig, String> {
    let config: AnalyzerConfig = toml::from_str(content).map_err(|e| e.to_string())?;
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

/// Renders a config as TOML.
pub fn to_toml_string(config: &AnalyzerConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::Serialization(e.to_string()))
}

/// Resolves the effective configuration.
///
/// An explicit path must exist. Without one, the per-user file is used when
/// present, otherwise the built-in defaults.
pub fn resolve(explicit: Option<&Path>) -> CliResult<(AnalyzerConfig, Option<PathBuf>)> {
    if let Some(path) = explicit {
        return Ok((from_file(path)?, Some(path.to_path_buf())));
    }

    match default_config_path() {
        Some(path) if path.exists() => {
            info!(path = %path.display(), "using user config");
            Ok((from_file(&path)?, Some(path)))
        }
        _ => Ok((AnalyzerConfig::default(), None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tradeline_analytics::{CreditMixStrategy, ZeroLimitPolicy};

    #[test]
    fn test_partial_toml() {
        let config = from_toml_str(
            r#"
zero_limit_policy = "zero_utilization"

[quests]
trigger_utilization = 10
target_utilization = 9.5

[credit_mix]
strategy = "limit_proxy"
"#,
        )
        .unwrap();

        assert_eq!(config.zero_limit_policy, ZeroLimitPolicy::ZeroUtilization);
        assert_eq!(config.quests.trigger_utilization, dec!(10));
        assert_eq!(config.quests.target_utilization, dec!(9.5));
        assert_eq!(config.credit_mix.strategy, CreditMixStrategy::LimitProxy);
        assert_eq!(config.credit_mix.installment_limit_threshold, dec!(10000));
        assert_eq!(config.score, AnalyzerConfig::default().score);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(from_toml_str("").unwrap(), AnalyzerConfig::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let text = to_toml_string(&AnalyzerConfig::default()).unwrap();
        assert_eq!(from_toml_str(&text).unwrap(), AnalyzerConfig::default());
    }

    #[test]
    fn test_inconsistent_config_rejected() {
        let err = from_toml_str("[quests]\ntrigger_utilization = 20\ntarget_utilization = 25\n")
            .unwrap_err();
        assert!(err.contains("target"));
    }

    #[test]
    fn test_missing_file() {
        let err = from_file(Path::new("/nonexistent/tradeline.toml")).unwrap_err();
        assert!(matches!(err, CliError::Config { .. }));
    }
}
