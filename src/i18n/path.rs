//! Splitting a URL path into its locale segment and canonical remainder.

use crate::i18n::Locale;

/// Result of [`parse_locale`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPath {
    /// Locale named by the first path segment, if any
    pub locale: Option<Locale>,
    /// Path with the locale segment removed; the original path when there was none
    pub rest: String,
}

/// Non-empty segments of a path. Leading, trailing and doubled slashes are ignored.
pub(crate) fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// Extract the locale segment from the front of `path`.
///
/// At most one locale segment is stripped, so `/fr/fr/x` yields `fr` and
/// `/fr/x`. When the first segment is not a registry code the path is
/// returned untouched.
///
/// # Example
/// ```
/// use ekwip_locale::i18n::{parse_locale, Locale};
///
/// let parsed = parse_locale("/en/catalogue/laptops");
/// assert_eq!(parsed.locale, Some(Locale::En));
/// assert_eq!(parsed.rest, "/catalogue/laptops");
/// ```
pub fn parse_locale(path: &str) -> ParsedPath {
    let mut parts = segments(path);

    let Some(locale) = parts.next().and_then(Locale::from_code) else {
        return ParsedPath {
            locale: None,
            rest: path.to_string(),
        };
    };

    ParsedPath {
        locale: Some(locale),
        rest: join_segments(parts),
    }
}

/// Locale-independent identity of `path`: the locale segment (if any) is
/// removed and slashes are normalized, so `/fr/catalogue/` and `/catalogue`
/// both yield `/catalogue`.
pub fn canonical_path(path: &str) -> String {
    let parsed = parse_locale(path);
    match parsed.locale {
        Some(_) => parsed.rest,
        None => join_segments(segments(path)),
    }
}

/// Re-assemble segments into an absolute path; no segments is `/`.
fn join_segments<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    let mut rest = String::new();
    for part in parts {
        rest.push('/');
        rest.push_str(part);
    }
    if rest.is_empty() {
        rest.push('/');
    }
    rest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prefixed_path() {
        let parsed = parse_locale("/fr/catalogue/laptops");
        assert_eq!(parsed.locale, Some(Locale::Fr));
        assert_eq!(parsed.rest, "/catalogue/laptops");
    }

    #[test]
    fn test_parse_bare_locale_is_root() {
        let parsed = parse_locale("/ar");
        assert_eq!(parsed.locale, Some(Locale::Ar));
        assert_eq!(parsed.rest, "/");

        let parsed = parse_locale("/en/");
        assert_eq!(parsed.locale, Some(Locale::En));
        assert_eq!(parsed.rest, "/");
    }

    #[test]
    fn test_parse_unprefixed_keeps_original() {
        let parsed = parse_locale("/catalogue/");
        assert_eq!(parsed.locale, None);
        assert_eq!(parsed.rest, "/catalogue/");
    }

    #[test]
    fn test_parse_root() {
        let parsed = parse_locale("/");
        assert_eq!(parsed.locale, None);
        assert_eq!(parsed.rest, "/");
    }

    #[test]
    fn test_parse_empty() {
        let parsed = parse_locale("");
        assert_eq!(parsed.locale, None);
        assert_eq!(parsed.rest, "");
    }

    #[test]
    fn test_parse_strips_only_one_locale() {
        let parsed = parse_locale("/fr/fr/x");
        assert_eq!(parsed.locale, Some(Locale::Fr));
        assert_eq!(parsed.rest, "/fr/x");

        let again = parse_locale(&parsed.rest);
        assert_eq!(again.locale, Some(Locale::Fr));
        assert_eq!(again.rest, "/x");
    }

    #[test]
    fn test_parse_requires_exact_segment_match() {
        assert_eq!(parse_locale("/french/x").locale, None);
        assert_eq!(parse_locale("/FR/x").locale, None);
        assert_eq!(parse_locale("/fr-FR/x").locale, None);
        assert_eq!(parse_locale("/es/x").locale, None);
    }

    #[test]
    fn test_parse_collapses_extra_slashes_after_locale() {
        let parsed = parse_locale("//en//marques//");
        assert_eq!(parsed.locale, Some(Locale::En));
        assert_eq!(parsed.rest, "/marques");
    }

    #[test]
    fn test_canonical_path_normalizes() {
        assert_eq!(canonical_path("/fr/catalogue/"), "/catalogue");
        assert_eq!(canonical_path("/catalogue"), "/catalogue");
        assert_eq!(canonical_path("catalogue//laptops/"), "/catalogue/laptops");
        assert_eq!(canonical_path("/ar"), "/");
        assert_eq!(canonical_path(""), "/");
    }

    #[test]
    fn test_parse_locale_later_in_path_is_ignored() {
        let parsed = parse_locale("/blog/fr/article");
        assert_eq!(parsed.locale, None);
        assert_eq!(parsed.rest, "/blog/fr/article");
    }
}
