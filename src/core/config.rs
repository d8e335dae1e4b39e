//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.atlas/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::view::{DEFAULT_PAGE_SIZE, PAGE_SIZES, SortMode};
use crate::source::DEFAULT_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AtlasConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub source: SourceConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub page_size: Option<usize>,
    pub sort: Option<SortMode>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SourceConfig {
    pub endpoint: Option<String>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub page_size: usize,
    pub sort: SortMode,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.atlas/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".atlas").join("config.toml"))
}

/// Load config from `~/.atlas/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `AtlasConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<AtlasConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(AtlasConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(AtlasConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: AtlasConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Atlas Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# page_size = 10                     # Countries per page: 5 to 10
# sort = "name"                      # "name", "population-asc", "population-desc"

# [source]
# endpoint = "https://restcountries.com/v2"   # Or set ATLAS_ENDPOINT env var
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env →
/// CLI.
///
/// `cli_endpoint` and `cli_page_size` come from CLI flags (None = not
/// specified). A page size outside the fixed 5–10 set is dropped with a
/// warning and the next layer down wins.
pub fn resolve(
    config: &AtlasConfig,
    cli_endpoint: Option<&str>,
    cli_page_size: Option<usize>,
) -> ResolvedConfig {
    // Endpoint: CLI → env → config → default
    let endpoint = cli_endpoint
        .map(|s| s.to_string())
        .or_else(|| std::env::var("ATLAS_ENDPOINT").ok())
        .or_else(|| config.source.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Page size: CLI → config → default, each layer validated
    let page_size = cli_page_size
        .and_then(|s| validated_page_size(s, "--page-size"))
        .or_else(|| {
            config
                .general
                .page_size
                .and_then(|s| validated_page_size(s, "config"))
        })
        .unwrap_or(DEFAULT_PAGE_SIZE);

    ResolvedConfig {
        endpoint,
        page_size,
        sort: config.general.sort.unwrap_or_default(),
    }
}

fn validated_page_size(size: usize, origin: &str) -> Option<usize> {
    if PAGE_SIZES.contains(&size) {
        Some(size)
    } else {
        warn!("Ignoring {} page size {} (valid: 5 to 10)", origin, size);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = AtlasConfig::default();
        assert!(config.general.page_size.is_none());
        assert!(config.general.sort.is_none());
        assert!(config.source.endpoint.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = AtlasConfig::default();
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.endpoint, DEFAULT_BASE_URL);
        assert_eq!(resolved.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(resolved.sort, SortMode::Name);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = AtlasConfig {
            general: GeneralConfig {
                page_size: Some(7),
                sort: Some(SortMode::PopulationDesc),
            },
            source: SourceConfig {
                endpoint: Some("http://localhost:9000/v2".to_string()),
            },
        };
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.endpoint, "http://localhost:9000/v2");
        assert_eq!(resolved.page_size, 7);
        assert_eq!(resolved.sort, SortMode::PopulationDesc);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = AtlasConfig {
            general: GeneralConfig {
                page_size: Some(6),
                sort: None,
            },
            source: SourceConfig {
                endpoint: Some("http://from-config/v2".to_string()),
            },
        };
        let resolved = resolve(&config, Some("http://from-cli/v2"), Some(9));
        assert_eq!(resolved.endpoint, "http://from-cli/v2");
        assert_eq!(resolved.page_size, 9);
    }

    #[test]
    fn test_invalid_page_size_falls_through() {
        let config = AtlasConfig {
            general: GeneralConfig {
                page_size: Some(8),
                sort: None,
            },
            ..Default::default()
        };
        // CLI value outside 5..=10: ignored, config layer wins.
        let resolved = resolve(&config, None, Some(42));
        assert_eq!(resolved.page_size, 8);

        // Both layers invalid: default wins.
        let config = AtlasConfig {
            general: GeneralConfig {
                page_size: Some(0),
                sort: None,
            },
            ..Default::default()
        };
        let resolved = resolve(&config, None, Some(3));
        assert_eq!(resolved.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
page_size = 5
sort = "population-asc"

[source]
endpoint = "http://192.168.1.100:8080/v2"
"#;
        let config: AtlasConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.page_size, Some(5));
        assert_eq!(config.general.sort, Some(SortMode::PopulationAsc));
        assert_eq!(
            config.source.endpoint.as_deref(),
            Some("http://192.168.1.100:8080/v2")
        );
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[general]
sort = "population-desc"
"#;
        let config: AtlasConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.sort, Some(SortMode::PopulationDesc));
        assert!(config.general.page_size.is_none());
        assert!(config.source.endpoint.is_none());
    }
}
