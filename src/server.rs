//! HTTP surface: the greeting page, a health check and the static bundles.

use crate::config::Config;
use crate::i18n::LanguageRegistry;
use crate::render::{render_document, RenderProps};
use anyhow::{Context, Result};
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{error, info};

/// Shared, read-only state of every handler.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<LanguageRegistry>,
}

/// Query parameters of `GET /`.
///
/// `unread` is kept as text so a non-numeric value degrades to 0 instead of
/// rejecting the request.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct GreetingQuery {
    pub name: Option<String>,
    pub unread: Option<String>,
}

impl GreetingQuery {
    /// Pick the parameters out of raw query pairs.
    ///
    /// Each parameter is read on its own, so a malformed one never hides the
    /// other. The first `name` wins; a repeated `unread` is a list, not a
    /// number, and is dropped.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        let mut unread_count = 0;

        for (key, value) in pairs {
            match key.as_str() {
                "name" if query.name.is_none() => query.name = Some(value),
                "unread" => {
                    unread_count += 1;
                    query.unread = Some(value);
                }
                _ => {}
            }
        }

        if unread_count > 1 {
            query.unread = None;
        }
        query
    }

    pub fn into_props(self) -> RenderProps {
        RenderProps {
            unread: parse_unread(self.unread.as_deref()),
            name: self.name,
        }
    }
}

/// Unread count from its query value.
///
/// Any numeric notation is accepted (`2`, `2.0`, `1e1`) and truncated to a
/// whole count. Absent, non-numeric, non-finite or non-positive values mean 0.
pub fn parse_unread(value: Option<&str>) -> u64 {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|count| count.is_finite() && *count > 0.0)
        .map(|count| count.trunc() as u64)
        .unwrap_or(0)
}

/// One registered catalog, as reported by `/health`.
#[derive(Debug, Serialize)]
struct CatalogSummary {
    code: &'static str,
    name: &'static str,
    native_name: &'static str,
    is_default: bool,
    distinguishes_number: bool,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    languages: Vec<&'static str>,
    catalogs: Vec<CatalogSummary>,
}

/// Build the application router.
///
/// Paths other than `/` and `/health` are served from `static_dir`.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(render_greeting))
        .route("/health", get(health))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn render_greeting(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Option<Query<Vec<(String, String)>>>,
) -> Response {
    let accept_language = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());

    let language = state.registry.resolve_header(accept_language);
    let messages = state.registry.messages(language);
    let pairs = query.map(|Query(pairs)| pairs).unwrap_or_default();
    let props = GreetingQuery::from_pairs(pairs).into_props();

    match render_document(language, messages, &props) {
        Ok(html) => (
            [
                (header::CONTENT_LANGUAGE, language.code()),
                (header::VARY, "accept-language"),
            ],
            Html(html),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to render greeting page: {:#}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let registry = &state.registry;
    let catalogs = registry
        .list_all()
        .into_iter()
        .map(|config| CatalogSummary {
            code: config.code,
            name: config.name,
            native_name: config.native_name,
            is_default: registry
                .language(config.code)
                .is_some_and(|language| language.is_default()),
            distinguishes_number: config.messages.plural_rule.distinguishes_number(),
        })
        .collect();

    Json(HealthResponse {
        status: "ok",
        languages: registry.acceptable_languages().to_vec(),
        catalogs,
    })
}

/// Bind the configured address and serve until Ctrl+C.
pub async fn serve(config: &Config, registry: Arc<LanguageRegistry>) -> Result<()> {
    let app = create_router(AppState { registry }, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr()))?;

    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}
