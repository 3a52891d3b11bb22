//! Configuración de variables de entorno
//! 
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Errores de configuración
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}")]
    Invalid { key: &'static str, value: String },
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub log_level: tracing::Level,
    pub cors_origins: Vec<String>,
    pub rate_limit_requests: u32,
    pub rate_limit_window: u64,
    pub catalog_path: Option<String>,
    pub contact_webhook_url: Option<String>,
    pub contact_timeout: Duration,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            log_level: tracing::Level::INFO,
            cors_origins: Vec::new(),
            rate_limit_requests: 5,
            rate_limit_window: 60,
            catalog_path: None,
            contact_webhook_url: None,
            contact_timeout: Duration::from_secs(10),
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración del entorno; las variables ausentes toman el valor por defecto
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables arbitraria
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            environment: non_empty("ENVIRONMENT").unwrap_or(defaults.environment),
            port: parse_var(&lookup, "PORT")?.unwrap_or(defaults.port),
            host: non_empty("HOST").unwrap_or(defaults.host),
            log_level: parse_var(&lookup, "LOG_LEVEL")?.unwrap_or(defaults.log_level),
            cors_origins: non_empty("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.cors_origins),
            rate_limit_requests: parse_var(&lookup, "RATE_LIMIT_REQUESTS")?
                .unwrap_or(defaults.rate_limit_requests),
            rate_limit_window: parse_var(&lookup, "RATE_LIMIT_WINDOW")?
                .unwrap_or(defaults.rate_limit_window),
            catalog_path: non_empty("CATALOG_PATH"),
            contact_webhook_url: non_empty("CONTACT_WEBHOOK_URL"),
            contact_timeout: parse_var::<u64, _>(&lookup, "CONTACT_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.contact_timeout),
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value }),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert!(config.is_development());
        assert_eq!(config.contact_timeout, Duration::from_secs(10));
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_values_are_parsed() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[
            ("ENVIRONMENT", "production"),
            ("PORT", "8080"),
            ("LOG_LEVEL", "debug"),
            ("CORS_ORIGINS", "https://prestige.example, https://www.prestige.example"),
            ("CONTACT_TIMEOUT_SECS", "3"),
            ("CATALOG_PATH", "data/catalog.json"),
        ]))
        .unwrap();

        assert!(config.is_production());
        assert_eq!(config.server_url(), "0.0.0.0:8080");
        assert_eq!(config.log_level, tracing::Level::DEBUG);
        assert_eq!(config.cors_origins.len(), 2);
        assert_eq!(config.contact_timeout, Duration::from_secs(3));
        assert_eq!(config.catalog_path.as_deref(), Some("data/catalog.json"));
    }

    #[test]
    fn test_invalid_number_is_an_error() {
        let result = EnvironmentConfig::from_lookup(lookup_from(&[("PORT", "eighty")]));
        assert_eq!(
            result.unwrap_err(),
            ConfigError::Invalid { key: "PORT", value: "eighty".to_string() }
        );
    }
}
