//! HTTP layer: locale redirect middleware, the localized page shell and a
//! couple of JSON endpoints for external metadata emitters.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::sync::Arc;

use axum::{
    extract::{Query, Request, State},
    http::{StatusCode, Uri},
    middleware::{self, Next},
    response::{Html, IntoResponse, Json, Redirect, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::config::Config;
use crate::html::escape_attr;
use crate::i18n::{
    canonical_path, parse_locale, parse_query, switcher_links, DocumentRoot, HreflangBuilder,
    LinkBuilder, Locale, LocaleAttributes, QueryParameters, RedirectDecision, RedirectResolver,
};

/// Shared, read-only request handling state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub resolver: Arc<RedirectResolver>,
    pub hreflang: Arc<HreflangBuilder>,
    pub links: Arc<LinkBuilder>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let resolver = RedirectResolver::new(config.excluded_prefixes.clone());
        let hreflang = HreflangBuilder::new(config.site_url.clone());
        let links = LinkBuilder::new(config.excluded_prefixes.clone());
        Self {
            config: Arc::new(config),
            resolver: Arc::new(resolver),
            hreflang: Arc::new(hreflang),
            links: Arc::new(links),
        }
    }
}

/// Primary navigation of the page shell.
struct NavItem {
    path: &'static str,
    fr: &'static str,
    en: &'static str,
    ar: &'static str,
}

impl NavItem {
    fn label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Fr => self.fr,
            Locale::En => self.en,
            Locale::Ar => self.ar,
        }
    }
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem { path: "/", fr: "Accueil", en: "Home", ar: "الرئيسية" },
    NavItem { path: "/catalogue", fr: "Catalogue", en: "Catalog", ar: "الكتالوج" },
    NavItem { path: "/marques", fr: "Marques", en: "Brands", ar: "العلامات التجارية" },
    NavItem { path: "/blog", fr: "Blog", en: "Blog", ar: "المدونة" },
    NavItem { path: "/contact", fr: "Contact", en: "Contact", ar: "اتصل بنا" },
];

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/hreflang", get(hreflang))
        .fallback(render_page)
        .layer(middleware::from_fn_with_state(state.clone(), locale_redirect))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Redirect before any handler runs when the resolver asks for it.
pub async fn locale_redirect(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let decision = state.resolver.resolve_redirect(
        request.uri().path(),
        request.uri().query().unwrap_or(""),
    );

    match decision {
        RedirectDecision::RedirectTo(target) => {
            debug!("Locale redirect {} -> {}", request.uri(), target);
            Redirect::temporary(&target).into_response()
        }
        RedirectDecision::None => next.run(request).await,
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    default_locale: Locale,
    locales: Vec<Locale>,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        default_locale: Locale::DEFAULT,
        locales: Locale::ALL.to_vec(),
    })
}

#[derive(Debug, Deserialize)]
struct HreflangParams {
    path: Option<String>,
    locale: Option<String>,
}

#[derive(Debug, Serialize)]
struct HreflangResponse {
    alternates: BTreeMap<String, String>,
    canonical: String,
}

/// Alternates for `path` (localized or not) and the canonical URL in `locale`.
async fn hreflang(
    State(state): State<AppState>,
    Query(params): Query<HreflangParams>,
) -> Result<Json<HreflangResponse>, (StatusCode, String)> {
    let locale = match params.locale.as_deref() {
        Some(code) => code
            .parse::<Locale>()
            .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?,
        None => Locale::DEFAULT,
    };
    let path = canonical_path(params.path.as_deref().unwrap_or("/"));
    let hreflang = state.hreflang.alternates(&path);
    let canonical = hreflang
        .canonical(locale)
        .map(str::to_string)
        .unwrap_or_else(|| state.hreflang.url_for(&path, locale));

    Ok(Json(HreflangResponse {
        alternates: hreflang.alternates,
        canonical,
    }))
}

/// Localized page shell. Unprefixed paths are served in the default locale.
async fn render_page(State(state): State<AppState>, uri: Uri) -> Response {
    let path = uri.path();
    if state.resolver.is_excluded(path) {
        return (StatusCode::NOT_FOUND, "Not Found").into_response();
    }

    let query = uri.query().map(parse_query).unwrap_or_default();
    let locale = parse_locale(path).locale.unwrap_or(Locale::DEFAULT);
    let canonical = canonical_path(path);

    Html(render_document(&state, path, &canonical, locale, &query)).into_response()
}

fn render_document(
    state: &AppState,
    path: &str,
    canonical: &str,
    locale: Locale,
    query: &QueryParameters,
) -> String {
    let mut root = DocumentRoot::new();
    let mut attributes = LocaleAttributes::new();
    attributes.sync(&mut root, locale.code());
    debug!("Rendering {} with lang {:?}", path, attributes.current());

    let hreflang = state.hreflang.alternates(canonical);
    let canonical_url = hreflang
        .canonical(locale)
        .map(str::to_string)
        .unwrap_or_else(|| state.hreflang.url_for(canonical, locale));

    let mut html = String::from("<!DOCTYPE html>\n");
    html.push_str(&root.open_tag());
    html.push_str("\n<head>\n<meta charset=\"utf-8\">\n<title>Ekwip</title>\n");
    let _ = writeln!(
        html,
        r#"<link rel="canonical" href="{}">"#,
        escape_attr(&canonical_url)
    );
    html.push_str(&hreflang.to_html());
    html.push_str("</head>\n<body>\n<nav>\n");

    let no_query = QueryParameters::new();
    for item in NAV_ITEMS {
        let _ = writeln!(
            html,
            r#"<a href="{}">{}</a>"#,
            escape_attr(&state.links.build(item.path, locale, &no_query, false)),
            item.label(locale)
        );
    }
    html.push_str("</nav>\n<ul class=\"locale-switcher\">\n");

    for link in switcher_links(&state.links, path, query) {
        let current = if link.active { r#" aria-current="true""# } else { "" };
        let _ = writeln!(
            html,
            r#"<li><a href="{}" hreflang="{}"{}>{}</a></li>"#,
            escape_attr(&link.href),
            link.locale,
            current,
            link.label
        );
    }

    let _ = write!(
        html,
        "</ul>\n<main data-path=\"{}\"></main>\n</body>\n</html>\n",
        escape_attr(canonical)
    );
    html
}
