//! Locale-aware routing for the Ekwip storefront.
//!
//! - [`i18n`]: framework-free locale parsing, redirects, links and hreflang metadata
//! - [`server`]: axum adapter wiring those decisions into HTTP requests
//! - [`config`]: static configuration read once at startup

pub mod config;
pub mod i18n;
pub mod server;

mod html;
