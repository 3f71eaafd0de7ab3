//! Locale registry: single source of truth for all supported locales.
//!
//! The registry is a constant table compiled into the binary. It is never
//! extended or mutated at runtime, so it is shared freely across requests.

use crate::i18n::{Direction, Locale};

/// Metadata for a supported locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
    /// The locale this entry describes
    pub locale: Locale,

    /// URL segment and `lang` attribute value (e.g., "fr", "ar")
    pub code: &'static str,

    /// English name of the language (e.g., "French", "Arabic")
    pub name: &'static str,

    /// Native name of the language, shown in the locale switcher
    pub native_name: &'static str,

    /// Text direction used when rendering pages in this locale
    pub direction: Direction,

    /// Whether this is the default locale (exactly one entry is)
    pub is_default: bool,
}

/// Ordered view over the supported locales.
///
/// Order matters: it drives the order of hreflang tags and of the locale
/// switcher entries.
#[derive(Debug)]
pub struct LocaleRegistry {
    locales: &'static [LocaleConfig],
}

const LOCALES: [LocaleConfig; 3] = [
    LocaleConfig {
        locale: Locale::Fr,
        code: "fr",
        name: "French",
        native_name: "Français",
        direction: Direction::Ltr,
        is_default: true,
    },
    LocaleConfig {
        locale: Locale::En,
        code: "en",
        name: "English",
        native_name: "English",
        direction: Direction::Ltr,
        is_default: false,
    },
    LocaleConfig {
        locale: Locale::Ar,
        code: "ar",
        name: "Arabic",
        native_name: "العربية",
        direction: Direction::Rtl,
        is_default: false,
    },
];

static REGISTRY: LocaleRegistry = LocaleRegistry { locales: &LOCALES };

impl LocaleRegistry {
    /// Get the built-in registry.
    pub fn get() -> &'static LocaleRegistry {
        &REGISTRY
    }

    /// Look up a locale configuration by its code.
    ///
    /// Matching is exact: `"FR"` and `"fr-FR"` are not registry codes.
    ///
    /// # Arguments
    /// * `code` - The locale code as it appears in URLs (e.g., "fr", "ar")
    ///
    /// # Returns
    /// * `Some(&LocaleConfig)` if the code names a supported locale
    /// * `None` otherwise
    pub fn get_by_code(&self, code: &str) -> Option<&'static LocaleConfig> {
        let locales: &'static [LocaleConfig] = self.locales;
        locales.iter().find(|config| config.code == code)
    }

    /// Configuration of a locale.
    ///
    /// # Returns
    /// The registry entry for `locale`. Total, since `Locale` only names
    /// registry entries.
    pub fn config(&self, locale: Locale) -> &'static LocaleConfig {
        let locales: &'static [LocaleConfig] = self.locales;
        &locales[locale.index()]
    }

    /// All locales, in registry order.
    ///
    /// # Returns
    /// The full table: French, English, Arabic.
    pub fn list(&self) -> &'static [LocaleConfig] {
        self.locales
    }

    /// The default locale configuration.
    ///
    /// # Returns
    /// The single entry whose `is_default` is true (French).
    pub fn default_locale(&self) -> &'static LocaleConfig {
        self.config(Locale::DEFAULT)
    }

    /// Check whether `code` names a supported locale.
    ///
    /// # Arguments
    /// * `code` - The locale code to check
    ///
    /// # Returns
    /// `true` if the code exactly matches a registry entry, `false` otherwise.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}
