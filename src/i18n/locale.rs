//! Locale type: the closed set of languages the site is served in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::i18n::{Direction, LocaleConfig, LocaleRegistry};

/// A supported locale.
///
/// Unrecognized codes never become a `Locale`; lookups return `None` and
/// callers fall back to [`Locale::DEFAULT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Fr,
    En,
    Ar,
}

/// Errors from strict locale parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("Unknown locale code: '{0}'")]
    Unknown(String),
}

impl Locale {
    /// All locales, in registry order.
    pub const ALL: [Locale; 3] = [Locale::Fr, Locale::En, Locale::Ar];

    /// The locale unprefixed requests fall back to.
    pub const DEFAULT: Locale = Locale::Fr;

    /// Look up a locale by its exact code.
    ///
    /// # Arguments
    /// * `code` - The locale code (e.g., "fr", "ar")
    ///
    /// # Returns
    /// * `Some(Locale)` if the code is a registry code
    /// * `None` for anything else, including other casings
    ///
    /// # Example
    /// ```
    /// use ekwip_locale::i18n::Locale;
    ///
    /// assert_eq!(Locale::from_code("ar"), Some(Locale::Ar));
    /// assert_eq!(Locale::from_code("es"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<Locale> {
        LocaleRegistry::get()
            .get_by_code(code)
            .map(|config| config.locale)
    }

    /// Resolve an optional code, falling back to the default locale when it is
    /// absent or unrecognized.
    ///
    /// # Arguments
    /// * `code` - The requested locale code, if any
    ///
    /// # Returns
    /// The matching locale, or [`Locale::DEFAULT`].
    pub fn resolve(code: Option<&str>) -> Locale {
        code.and_then(Locale::from_code).unwrap_or(Locale::DEFAULT)
    }

    /// Get the locale code.
    ///
    /// # Returns
    /// The code as used in URL segments and `lang` attributes (e.g., "fr").
    pub const fn code(self) -> &'static str {
        match self {
            Locale::Fr => "fr",
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Locale::Fr => 0,
            Locale::En => 1,
            Locale::Ar => 2,
        }
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Returns
    /// A reference to the `LocaleConfig` for this locale.
    pub fn config(self) -> &'static LocaleConfig {
        LocaleRegistry::get().config(self)
    }

    pub fn name(self) -> &'static str {
        self.config().name
    }

    /// Name of the language in itself, as shown in the locale switcher.
    pub fn native_name(self) -> &'static str {
        self.config().native_name
    }

    pub fn direction(self) -> Direction {
        self.config().direction
    }

    pub fn is_default(self) -> bool {
        self.config().is_default
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::DEFAULT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s).ok_or_else(|| LocaleError::Unknown(s.to_string()))
    }
}
