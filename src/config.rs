// src/config.rs
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ConfigError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// JSON file overriding the built-in rule tables.
    pub rules_path: Option<PathBuf>,
    /// Longest accepted description title; unlimited when unset.
    pub max_title_chars: Option<usize>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            rules_path: None,
            max_title_chars: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset or empty keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let max_title_chars = get("MAX_TITLE_CHARS")
            .map(|raw| parse::<usize>(raw, "MAX_TITLE_CHARS"))
            .transpose()?;
        if max_title_chars == Some(0) {
            return Err(ConfigError::InvalidValue { key: "MAX_TITLE_CHARS", value: "0".into() });
        }

        Ok(Self {
            host: get("HOST").unwrap_or(defaults.host),
            port: parse_or(get("PORT"), "PORT", defaults.port)?,
            rules_path: get("RULES_PATH").map(PathBuf::from),
            max_title_chars,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr>(value: Option<String>, key: &'static str, default: T) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => parse(raw, key),
    }
}

fn parse<T: FromStr>(raw: String, key: &'static str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value: raw })
}
