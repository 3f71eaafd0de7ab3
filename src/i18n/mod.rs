//! Locale-aware routing for the storefront.
//!
//! Pages are served under a locale prefix (`/fr/catalogue`, `/ar/marques`).
//! This module decides how incoming paths map onto locales and how outgoing
//! links and metadata carry them. Everything here is a pure function of its
//! inputs and the constant locale registry.
//!
//! # Architecture
//!
//! - `registry`: the supported locales and their metadata
//! - `locale`: the closed `Locale` enum
//! - `path`: splitting a path into locale and canonical remainder
//! - `redirect`: whether a request must be redirected before rendering
//! - `link`: locale-prefixed hrefs for in-app navigation
//! - `hreflang`: alternate-language URLs for page metadata
//! - `direction`: `lang`/`dir` attributes of the rendering root
//! - `switcher`: links to the current page in every locale
//!
//! # Example
//!
//! ```
//! use ekwip_locale::i18n::{build_link, parse_locale, Locale, QueryParameters};
//!
//! let parsed = parse_locale("/fr/catalogue");
//! assert_eq!(parsed.locale, Some(Locale::Fr));
//!
//! let href = build_link("/marques", Locale::Ar, &QueryParameters::new(), false);
//! assert_eq!(href, "/ar/marques");
//! ```

mod direction;
mod hreflang;
mod link;
mod locale;
mod path;
mod redirect;
mod registry;
mod switcher;

pub use direction::{apply_locale_attributes, Direction, DocumentRoot, LocaleAttributes, RenderRoot};
pub use hreflang::{Hreflang, HreflangBuilder, X_DEFAULT};
pub use link::{build_link, parse_query, LinkBuilder, QueryParameters};
pub use locale::{Locale, LocaleError};
pub use path::{canonical_path, parse_locale, ParsedPath};
pub use redirect::{RedirectDecision, RedirectResolver, DEFAULT_EXCLUDED_PREFIXES};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use switcher::{switcher_links, SwitcherLink};
