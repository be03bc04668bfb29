use anyhow::{bail, Context, Result};

use crate::llm_client::{DEFAULT_API_BASE, DEFAULT_MODEL};

const MISSING_API_KEY: &str = "Google API key missing. Set GOOGLE_API_KEY in environment.";

/// Application configuration loaded from environment variables.
/// Startup fails if the API key is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: String,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub profile_file: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let google_api_key = match lookup("GOOGLE_API_KEY") {
            Some(key) if !key.trim().is_empty() => key,
            _ => bail!(MISSING_API_KEY),
        };
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            google_api_key,
            gemini_model: var_or("GEMINI_MODEL", DEFAULT_MODEL),
            gemini_api_base: var_or("GEMINI_API_BASE", DEFAULT_API_BASE),
            profile_file: var_or("PROFILE_FILE", "profiles.json"),
            port: var_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var_or("RUST_LOG", "info"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_missing_api_key_is_descriptive() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err.to_string(), MISSING_API_KEY);
    }

    #[test]
    fn test_blank_api_key_rejected() {
        assert!(Config::from_lookup(lookup(&[("GOOGLE_API_KEY", "   ")])).is_err());
    }

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_lookup(lookup(&[("GOOGLE_API_KEY", "k")])).unwrap();
        assert_eq!(config.gemini_model, DEFAULT_MODEL);
        assert_eq!(config.gemini_api_base, DEFAULT_API_BASE);
        assert_eq!(config.profile_file, "profiles.json");
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_invalid_port_rejected() {
        let result = Config::from_lookup(lookup(&[("GOOGLE_API_KEY", "k"), ("PORT", "http")]));
        assert!(result.is_err());
    }
}
