//! Redirect decisions for incoming requests.
//!
//! Only the bare site root is redirected (to the default locale). Every other
//! unprefixed path is served as-is, since deep links are dual-served with and
//! without a locale prefix.

use tracing::debug;

use crate::i18n::path::segments;
use crate::i18n::Locale;

/// Path prefixes that are never locale-redirected.
pub const DEFAULT_EXCLUDED_PREFIXES: &[&str] = &["/api", "/_next", "/_vercel", "/static"];

/// What the HTTP layer should do with a request before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectDecision {
    /// Serve the request as-is
    None,
    /// Redirect to this localized path (query string included)
    RedirectTo(String),
}

/// Decides whether a request path must be redirected to a localized path.
#[derive(Debug, Clone)]
pub struct RedirectResolver {
    excluded_prefixes: Vec<String>,
}

impl RedirectResolver {
    pub fn new(excluded_prefixes: Vec<String>) -> Self {
        Self { excluded_prefixes }
    }

    pub fn excluded_prefixes(&self) -> &[String] {
        &self.excluded_prefixes
    }

    /// Internal paths and static assets: never redirected, never localized.
    pub fn is_excluded(&self, path: &str) -> bool {
        path_is_excluded(&self.excluded_prefixes, path)
    }

    /// Decide what to do with `path`. `query` is the raw query string, with or
    /// without its leading `?`.
    pub fn resolve_redirect(&self, path: &str, query: &str) -> RedirectDecision {
        if self.is_excluded(path) {
            return RedirectDecision::None;
        }

        // Either already localized, or an unprefixed deep link that is served
        // under the default locale without a redirect.
        if segments(path).next().is_some() {
            return RedirectDecision::None;
        }

        let query = query.strip_prefix('?').unwrap_or(query);
        let mut target = format!("/{}", Locale::DEFAULT.code());
        if !query.is_empty() {
            target.push('?');
            target.push_str(query);
        }
        debug!("Redirecting root path {:?} to {}", path, target);
        RedirectDecision::RedirectTo(target)
    }
}

impl Default for RedirectResolver {
    fn default() -> Self {
        Self::new(
            DEFAULT_EXCLUDED_PREFIXES
                .iter()
                .map(|prefix| prefix.to_string())
                .collect(),
        )
    }
}

/// `path` starts with one of `prefixes`, or names a static asset.
pub(crate) fn path_is_excluded<S: AsRef<str>>(prefixes: &[S], path: &str) -> bool {
    prefixes
        .iter()
        .any(|prefix| path.starts_with(prefix.as_ref()))
        || is_static_asset(path)
}

/// A final path segment containing a `.` is a file request (`/logo.svg`, `/robots.txt`).
fn is_static_asset(path: &str) -> bool {
    segments(path)
        .last()
        .map(|segment| segment.contains('.'))
        .unwrap_or(false)
}
