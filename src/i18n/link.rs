//! Locale-aware link building.
//!
//! Every in-app href goes through [`build_link`] (or a configured
//! [`LinkBuilder`]) so navigation stays within the locale the page is served
//! in. Rewriting an already-localized href is a no-op. Excluded paths and
//! static assets are never given a locale segment.

use std::collections::BTreeMap;

use crate::i18n::path::canonical_path;
use crate::i18n::redirect::path_is_excluded;
use crate::i18n::{Locale, DEFAULT_EXCLUDED_PREFIXES};

/// Query parameters attached to a navigation, serialized in key order.
pub type QueryParameters = BTreeMap<String, String>;

/// Build the localized href for `target_path` in `current_locale`, using the
/// default excluded prefixes.
///
/// - An existing locale segment is replaced, never stacked.
/// - Excluded targets (API routes, framework paths, static assets) keep their
///   path as given; only the query and fragment handling applies to them.
/// - The target's own `?query` is dropped unless `preserve_query` is set, in
///   which case it is merged with `query` (`query` wins on collisions).
/// - A `#fragment` on the target is kept.
///
/// # Example
/// ```
/// use ekwip_locale::i18n::{build_link, Locale, QueryParameters};
///
/// let href = build_link("/fr/catalogue", Locale::En, &QueryParameters::new(), false);
/// assert_eq!(href, "/en/catalogue");
///
/// let asset = build_link("/images/logo.svg", Locale::En, &QueryParameters::new(), false);
/// assert_eq!(asset, "/images/logo.svg");
/// ```
pub fn build_link(
    target_path: &str,
    current_locale: Locale,
    query: &QueryParameters,
    preserve_query: bool,
) -> String {
    build_href(
        DEFAULT_EXCLUDED_PREFIXES,
        target_path,
        current_locale,
        query,
        preserve_query,
    )
}

/// Link builder bound to a configured set of excluded prefixes.
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    excluded_prefixes: Vec<String>,
}

impl LinkBuilder {
    pub fn new(excluded_prefixes: Vec<String>) -> Self {
        Self { excluded_prefixes }
    }

    /// Same rules as [`build_link`], against this builder's prefixes.
    pub fn build(
        &self,
        target_path: &str,
        current_locale: Locale,
        query: &QueryParameters,
        preserve_query: bool,
    ) -> String {
        build_href(
            &self.excluded_prefixes,
            target_path,
            current_locale,
            query,
            preserve_query,
        )
    }

    /// Whether `target_path` is left without a locale segment.
    pub fn is_excluded(&self, target_path: &str) -> bool {
        let (path, _, _) = split_target(target_path);
        path_is_excluded(&self.excluded_prefixes, &with_leading_slash(path))
    }
}

impl Default for LinkBuilder {
    fn default() -> Self {
        Self::new(
            DEFAULT_EXCLUDED_PREFIXES
                .iter()
                .map(|prefix| prefix.to_string())
                .collect(),
        )
    }
}

/// Split a target into path, query and fragment.
fn split_target(target_path: &str) -> (&str, Option<&str>, Option<&str>) {
    let (without_fragment, fragment) = match target_path.split_once('#') {
        Some((head, fragment)) => (head, Some(fragment)),
        None => (target_path, None),
    };
    match without_fragment.split_once('?') {
        Some((path, target_query)) => (path, Some(target_query), fragment),
        None => (without_fragment, None, fragment),
    }
}

fn with_leading_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

fn build_href<S: AsRef<str>>(
    excluded_prefixes: &[S],
    target_path: &str,
    current_locale: Locale,
    query: &QueryParameters,
    preserve_query: bool,
) -> String {
    let (path, target_query, fragment) = split_target(target_path);

    let path = with_leading_slash(path);
    let mut href = if path_is_excluded(excluded_prefixes, &path) {
        path
    } else {
        let canonical = canonical_path(&path);
        let mut localized = String::with_capacity(canonical.len() + 3);
        localized.push('/');
        localized.push_str(current_locale.code());
        if canonical != "/" {
            localized.push_str(&canonical);
        }
        localized
    };

    if preserve_query {
        let mut merged = target_query.map(parse_query).unwrap_or_default();
        merged.extend(query.iter().map(|(k, v)| (k.clone(), v.clone())));
        let serialized = serialize_query(&merged);
        if !serialized.is_empty() {
            href.push('?');
            href.push_str(&serialized);
        }
    }

    if let Some(fragment) = fragment {
        href.push('#');
        href.push_str(fragment);
    }

    href
}

/// Parse a raw query string. Malformed input yields no parameters.
pub fn parse_query(raw: &str) -> QueryParameters {
    let raw = raw.strip_prefix('?').unwrap_or(raw);
    serde_urlencoded::from_str::<Vec<(String, String)>>(raw)
        .map(|pairs| pairs.into_iter().collect())
        .unwrap_or_default()
}

fn serialize_query(query: &QueryParameters) -> String {
    // Serializing a map of strings into a String cannot fail.
    serde_urlencoded::to_string(query).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_query() -> QueryParameters {
        QueryParameters::new()
    }

    fn query(pairs: &[(&str, &str)]) -> QueryParameters {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    // ==================== Prefixing Tests ====================

    #[test]
    fn test_prepends_current_locale() {
        assert_eq!(build_link("/marques", Locale::Fr, &no_query(), false), "/fr/marques");
        assert_eq!(build_link("/marques", Locale::Ar, &no_query(), false), "/ar/marques");
    }

    #[test]
    fn test_replaces_existing_locale() {
        assert_eq!(
            build_link("/fr/catalogue", Locale::En, &no_query(), false),
            "/en/catalogue"
        );
        assert_eq!(build_link("/ar", Locale::Fr, &no_query(), false), "/fr");
    }

    #[test]
    fn test_adds_leading_slash() {
        assert_eq!(build_link("blog/post-1", Locale::En, &no_query(), false), "/en/blog/post-1");
    }

    #[test]
    fn test_empty_target_is_root() {
        assert_eq!(build_link("", Locale::Fr, &no_query(), false), "/fr");
        assert_eq!(build_link("/", Locale::Ar, &no_query(), false), "/ar");
    }

    #[test]
    fn test_trailing_slash_is_dropped() {
        assert_eq!(build_link("/catalogue/", Locale::Fr, &no_query(), false), "/fr/catalogue");
    }

    #[test]
    fn test_only_one_locale_is_replaced() {
        assert_eq!(build_link("/fr/fr/x", Locale::En, &no_query(), false), "/en/fr/x");
    }

    // ==================== Query Tests ====================

    #[test]
    fn test_query_omitted_when_not_preserved() {
        assert_eq!(
            build_link("/catalogue?page=2", Locale::Fr, &query(&[("sort", "price")]), false),
            "/fr/catalogue"
        );
    }

    #[test]
    fn test_query_serialized_in_key_order() {
        let q = query(&[("sort", "price"), ("brand", "dell"), ("page", "2")]);
        assert_eq!(
            build_link("/catalogue", Locale::Fr, &q, true),
            "/fr/catalogue?brand=dell&page=2&sort=price"
        );
    }

    #[test]
    fn test_query_merge_explicit_wins() {
        let q = query(&[("page", "3")]);
        assert_eq!(
            build_link("/catalogue?page=2&view=grid", Locale::En, &q, true),
            "/en/catalogue?page=3&view=grid"
        );
    }

    #[test]
    fn test_query_values_are_encoded() {
        let q = query(&[("q", "écran 27\"")]);
        assert_eq!(
            build_link("/recherche", Locale::Fr, &q, true),
            "/fr/recherche?q=%C3%A9cran+27%22"
        );
    }

    #[test]
    fn test_empty_query_adds_no_question_mark() {
        assert_eq!(build_link("/blog", Locale::En, &no_query(), true), "/en/blog");
    }

    // ==================== Fragment Tests ====================

    #[test]
    fn test_fragment_is_kept() {
        assert_eq!(
            build_link("/fr/contact?x=1#form", Locale::Ar, &no_query(), true),
            "/ar/contact?x=1#form"
        );
        assert_eq!(
            build_link("/contact#form", Locale::En, &no_query(), false),
            "/en/contact#form"
        );
    }

    // ==================== Excluded Target Tests ====================

    #[test]
    fn test_excluded_targets_are_not_localized() {
        assert_eq!(
            build_link("/api/products", Locale::Fr, &no_query(), false),
            "/api/products"
        );
        assert_eq!(
            build_link("/_next/static/a.js", Locale::En, &no_query(), false),
            "/_next/static/a.js"
        );
        assert_eq!(
            build_link("/images/logo.svg", Locale::Ar, &no_query(), false),
            "/images/logo.svg"
        );
    }

    #[test]
    fn test_excluded_targets_keep_query_and_fragment_rules() {
        let q = query(&[("page", "2")]);
        assert_eq!(
            build_link("/api/products?sort=asc#top", Locale::Fr, &q, true),
            "/api/products?page=2&sort=asc#top"
        );
        assert_eq!(
            build_link("/api/products?sort=asc", Locale::Fr, &q, false),
            "/api/products"
        );
    }

    #[test]
    fn test_excluded_asset_gets_leading_slash() {
        assert_eq!(
            build_link("robots.txt", Locale::En, &no_query(), false),
            "/robots.txt"
        );
    }

    #[test]
    fn test_localized_asset_path_is_left_alone() {
        assert_eq!(
            build_link("/fr/brochure.pdf", Locale::En, &no_query(), false),
            "/fr/brochure.pdf"
        );
    }

    #[test]
    fn test_link_builder_uses_configured_prefixes() {
        let links = LinkBuilder::new(vec!["/admin".to_string()]);
        assert_eq!(
            links.build("/admin/orders", Locale::En, &no_query(), false),
            "/admin/orders"
        );
        assert_eq!(
            links.build("/api/products", Locale::En, &no_query(), false),
            "/en/api/products"
        );
        assert!(links.is_excluded("admin/orders?x=1"));
        assert!(links.is_excluded("/logo.png#a"));
        assert!(!links.is_excluded("/catalogue"));
    }

    #[test]
    fn test_default_link_builder_matches_build_link() {
        let links = LinkBuilder::default();
        for target in ["/catalogue", "/api/x", "/fr/marques?x=1", "/favicon.ico"] {
            assert_eq!(
                links.build(target, Locale::Ar, &no_query(), true),
                build_link(target, Locale::Ar, &no_query(), true)
            );
        }
    }

    // ==================== Idempotence Tests ====================

    #[test]
    fn test_rebuilding_output_is_noop() {
        let q = query(&[("page", "2"), ("q", "a b")]);
        for target in ["/", "/marques", "/en/catalogue/laptops", "blog?tag=x#top", ""] {
            for locale in Locale::ALL {
                let once = build_link(target, locale, &q, true);
                let twice = build_link(&once, locale, &q, true);
                assert_eq!(once, twice, "target {:?} locale {}", target, locale);
            }
        }
    }

    // ==================== parse_query Tests ====================

    #[test]
    fn test_parse_query() {
        let parsed = parse_query("?b=2&a=1");
        assert_eq!(parsed, query(&[("a", "1"), ("b", "2")]));
        assert!(parse_query("").is_empty());
    }
}
