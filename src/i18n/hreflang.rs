//! Hreflang alternates: the absolute URL of a page in every locale.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::Serialize;

use crate::html::escape_attr;
use crate::i18n::{Locale, LocaleRegistry};

/// Key search engines use for the fallback variant.
pub const X_DEFAULT: &str = "x-default";

/// Alternate-language URLs for one canonical path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hreflang {
    /// Locale code (plus `x-default`) to absolute URL
    pub alternates: BTreeMap<String, String>,
}

impl Hreflang {
    /// URL of the page as served in `locale`, for `<link rel="canonical">`.
    pub fn canonical(&self, locale: Locale) -> Option<&str> {
        self.alternates.get(locale.code()).map(String::as_str)
    }

    /// `<link rel="alternate">` tags, registry order first and `x-default` last.
    pub fn to_html(&self) -> String {
        let keys = LocaleRegistry::get()
            .list()
            .iter()
            .map(|config| config.code)
            .chain(std::iter::once(X_DEFAULT));

        let mut html = String::new();
        for key in keys {
            if let Some(url) = self.alternates.get(key) {
                let _ = writeln!(
                    html,
                    r#"<link rel="alternate" hreflang="{}" href="{}">"#,
                    key,
                    escape_attr(url)
                );
            }
        }
        html
    }
}

/// Builds hreflang alternates against a fixed site base URL.
#[derive(Debug, Clone)]
pub struct HreflangBuilder {
    site_url: String,
}

impl HreflangBuilder {
    /// `site_url` is the scheme and host, e.g. `https://ekwip.ma`. A trailing
    /// slash is trimmed.
    pub fn new(site_url: impl Into<String>) -> Self {
        let mut site_url = site_url.into();
        if site_url.ends_with('/') {
            site_url.pop();
        }
        Self { site_url }
    }

    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    /// Absolute URL of `canonical_path` in `locale`.
    pub fn url_for(&self, canonical_path: &str, locale: Locale) -> String {
        let suffix = if canonical_path == "/" { "" } else { canonical_path };
        format!("{}/{}{}", self.site_url, locale.code(), suffix)
    }

    /// Alternates for `canonical_path`, which must not carry a locale segment.
    /// The path is used as given; a localized path yields stacked locales.
    pub fn alternates(&self, canonical_path: &str) -> Hreflang {
        let mut alternates: BTreeMap<String, String> = LocaleRegistry::get()
            .list()
            .iter()
            .map(|config| {
                (
                    config.code.to_string(),
                    self.url_for(canonical_path, config.locale),
                )
            })
            .collect();

        alternates.insert(
            X_DEFAULT.to_string(),
            self.url_for(canonical_path, Locale::DEFAULT),
        );

        Hreflang { alternates }
    }
}
