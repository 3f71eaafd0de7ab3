//! Locale switcher entries: the current page in every other locale.

use serde::Serialize;

use crate::i18n::{parse_locale, LinkBuilder, Locale, QueryParameters};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwitcherLink {
    pub locale: Locale,
    /// Label shown to the user, in the target language
    pub label: &'static str,
    pub href: String,
    /// Whether the current page is served in this locale
    pub active: bool,
}

/// One entry per registry locale for the page at `current_path`.
///
/// Unprefixed paths count as served in the default locale.
pub fn switcher_links(
    links: &LinkBuilder,
    current_path: &str,
    query: &QueryParameters,
) -> Vec<SwitcherLink> {
    let current = parse_locale(current_path).locale.unwrap_or(Locale::DEFAULT);

    Locale::ALL
        .iter()
        .map(|&locale| SwitcherLink {
            locale,
            label: locale.native_name(),
            href: links.build(current_path, locale, query, true),
            active: locale == current,
        })
        .collect()
}
