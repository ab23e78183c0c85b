//! Configuration loader (defaults + file + env merge).

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use thiserror::Error;

use crate::schema::CatalogConfig;

/// Prefix for environment overrides, e.g. `CATALOG_SERVER__PORT=9000`.
pub const ENV_PREFIX: &str = "CATALOG_";

/// Sections that may be overridden from the environment. Other `CATALOG_`
/// variables are ignored.
pub const ENV_SECTIONS: &[&str] = &["server", "http", "logging"];

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to load or merge configuration.
    #[error("configuration error: {0}")]
    Load(String),
}

/// Loads configuration by merging layers:
/// 1. Default values
/// 2. Config file (if given)
/// 3. Environment variables (`CATALOG_` prefix, `__` between nested keys),
///    limited to the sections in [`ENV_SECTIONS`]
pub fn load_config(config_path: Option<&str>) -> Result<CatalogConfig, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(CatalogConfig::default()));

    if let Some(path) = config_path {
        figment = figment.merge(Toml::file(path));
    }

    figment = figment.merge(
        Env::prefixed(ENV_PREFIX)
            .split("__")
            .filter(|key| is_env_section(key.as_str())),
    );

    figment
        .extract()
        .map_err(|e| ConfigError::Load(e.to_string()))
}

/// Matches keys whether or not `__` has already been turned into `.`.
fn is_env_section(key: &str) -> bool {
    let key = key.to_ascii_lowercase();
    ENV_SECTIONS.iter().any(|section| {
        key.strip_prefix(*section)
            .is_some_and(|rest| rest.starts_with('.') || rest.starts_with("__"))
    })
}

/// Parses configuration from a TOML string layered over the defaults.
///
/// Environment variables are not consulted.
pub fn parse_config(toml: &str) -> Result<CatalogConfig, ConfigError> {
    Figment::from(Serialized::defaults(CatalogConfig::default()))
        .merge(Toml::string(toml))
        .extract()
        .map_err(|e| ConfigError::Load(e.to_string()))
}
