use anyhow::{bail, Context, Result};
use tracing::warn;

use crate::i18n::DEFAULT_EXCLUDED_PREFIXES;

#[derive(Debug, Clone)]
pub struct Config {
    // Public base URL used for absolute hreflang/canonical links
    pub site_url: String,

    // Paths never redirected or localized
    pub excluded_prefixes: Vec<String>,

    // Web server
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let site_url = lookup("SITE_URL").unwrap_or_else(|| "http://localhost:8080".to_string());
        if !(site_url.starts_with("http://") || site_url.starts_with("https://")) {
            bail!("SITE_URL must start with http:// or https://, got '{}'", site_url);
        }

        let excluded_prefixes = match lookup("EXCLUDED_PREFIXES") {
            Some(raw) => parse_prefixes(&raw).context("Invalid EXCLUDED_PREFIXES")?,
            None => DEFAULT_EXCLUDED_PREFIXES
                .iter()
                .map(|prefix| prefix.to_string())
                .collect(),
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port number: '{}'", raw))?,
            None => 8080,
        };

        Ok(Self {
            site_url: site_url.trim_end_matches('/').to_string(),
            excluded_prefixes,
            port,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_url: "http://localhost:8080".to_string(),
            excluded_prefixes: DEFAULT_EXCLUDED_PREFIXES
                .iter()
                .map(|prefix| prefix.to_string())
                .collect(),
            port: 8080,
        }
    }
}

fn parse_prefixes(raw: &str) -> Result<Vec<String>> {
    let mut prefixes = Vec::new();
    for entry in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !entry.starts_with('/') {
            bail!("Excluded prefix must start with '/': '{}'", entry);
        }
        prefixes.push(entry.to_string());
    }
    if prefixes.is_empty() {
        warn!("EXCLUDED_PREFIXES is empty; only static assets will bypass locale routing");
    }
    Ok(prefixes)
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
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.site_url, "http://localhost:8080");
        assert_eq!(config.port, 8080);
        assert_eq!(config.excluded_prefixes, vec!["/api", "/_next", "/_vercel", "/static"]);
    }

    #[test]
    fn test_site_url_trailing_slash_trimmed() {
        let config = Config::from_lookup(lookup_from(&[("SITE_URL", "https://ekwip.ma/")])).unwrap();
        assert_eq!(config.site_url, "https://ekwip.ma");
    }

    #[test]
    fn test_site_url_requires_scheme() {
        let err = Config::from_lookup(lookup_from(&[("SITE_URL", "ekwip.ma")])).unwrap_err();
        assert!(err.to_string().contains("SITE_URL"));
    }

    #[test]
    fn test_custom_prefixes() {
        let config =
            Config::from_lookup(lookup_from(&[("EXCLUDED_PREFIXES", " /api, /admin ,,")])).unwrap();
        assert_eq!(config.excluded_prefixes, vec!["/api", "/admin"]);
    }

    #[test]
    fn test_prefix_without_slash_rejected() {
        let result = Config::from_lookup(lookup_from(&[("EXCLUDED_PREFIXES", "/api,admin")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_port_rejected() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_port_parsed() {
        let config = Config::from_lookup(lookup_from(&[("PORT", "3000")])).unwrap();
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_default_matches_empty_environment() {
        let from_env = Config::from_lookup(lookup_from(&[])).unwrap();
        let default = Config::default();
        assert_eq!(from_env.site_url, default.site_url);
        assert_eq!(from_env.excluded_prefixes, default.excluded_prefixes);
        assert_eq!(from_env.port, default.port);
    }
}
