use anyhow::{Context, Result};

use crate::layout::{FontFamily, PageGeometry};

/// Application configuration loaded from environment variables.
/// Every variable has a default, so an empty environment is valid.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Page size for exported resumes (`RESUME_PAGE_SIZE`: `a4` or `letter`).
    pub page_geometry: PageGeometry,
    /// Body font family (`RESUME_FONT`: `helvetica` or `times`).
    pub font_family: FontFamily,
    /// Upper bound on request bodies, in bytes.
    pub max_body_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            page_geometry: parse_env("RESUME_PAGE_SIZE", "a4", PageGeometry::parse)?,
            font_family: parse_env("RESUME_FONT", "helvetica", FontFamily::parse)?,
            max_body_bytes: env_or("MAX_BODY_BYTES", "1048576")
                .parse::<usize>()
                .context("MAX_BODY_BYTES must be a byte count")?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            page_geometry: PageGeometry::a4(),
            font_family: FontFamily::Helvetica,
            max_body_bytes: 1024 * 1024,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: &str, parse: impl Fn(&str) -> Option<T>) -> Result<T> {
    let raw = env_or(key, default);
    parse(&raw).with_context(|| format!("Environment variable '{key}' has unsupported value '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_rejects_unknown_values() {
        let err = parse_env("FOLIO_TEST_UNSET_VAR", "tabloid", PageGeometry::parse).unwrap_err();
        assert!(err.to_string().contains("tabloid"), "message should name the bad value");
    }

    #[test]
    fn test_parse_env_uses_default_when_unset() {
        let family = parse_env("FOLIO_TEST_UNSET_FONT", "times", FontFamily::parse).unwrap();
        assert_eq!(family, FontFamily::Times);
    }
}
