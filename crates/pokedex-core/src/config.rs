//! Application Configuration
//!
//! Loaded from a TOML document (the UI embeds `config/pokedex.toml`).
//! Every key is optional and falls back to the defaults below.

use serde::Deserialize;

use crate::error::ConfigError;

const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";
const DEFAULT_PAGE_SIZE: u32 = 20;
const DEFAULT_EVOLUTION_PAGE_SIZE: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PokedexConfig {
    /// Base URL of the data API, without trailing slash
    pub api_base_url: String,
    /// Rows per page of the Pokémon table
    pub page_size: u32,
    /// Rows per page of the evolution trigger table
    pub evolution_page_size: u32,
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`)
    pub log_level: String,
}

impl Default for PokedexConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            evolution_page_size: DEFAULT_EVOLUTION_PAGE_SIZE,
            log_level: "info".to_string(),
        }
    }
}

impl PokedexConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(source)?;
        config.api_base_url = config.api_base_url.trim_end_matches('/').to_string();
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be at least 1".to_string()));
        }
        if self.evolution_page_size == 0 {
            return Err(ConfigError::Invalid(
                "evolution_page_size must be at least 1".to_string(),
            ));
        }
        if self.api_base_url.is_empty() {
            return Err(ConfigError::Invalid("api_base_url must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = PokedexConfig::from_toml_str("").unwrap();
        assert_eq!(config, PokedexConfig::default());
        assert_eq!(config.page_size, 20);
        assert_eq!(config.evolution_page_size, 5);
    }

    #[test]
    fn test_partial_override() {
        let config = PokedexConfig::from_toml_str(
            r#"
            api_base_url = "http://localhost:8080/api/v2/"
            page_size = 50
            "#,
        )
        .unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8080/api/v2");
        assert_eq!(config.page_size, 50);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = PokedexConfig::from_toml_str("page_size = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_document() {
        let err = PokedexConfig::from_toml_str("page_size = \"twenty\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
