//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! A single Axum router serves the health probe, the built WASM/JS/CSS
//! bundle under `/pkg`, and the Leptos SSR landing page at `/`.

use std::path::{Path, PathBuf};

use axum::routing::get;
use axum::{Json, Router};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use serde::Serialize;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
}

/// Non-HTML routes.
pub fn api_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Built client assets from `<site_root>/pkg`.
pub fn asset_routes(site_root: &Path) -> Router {
    Router::new().nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
}

/// Full application router for the given Leptos options.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(kamome_client::app::App);
    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || kamome_client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    api_routes()
        .merge(asset_routes(&site_root))
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Load Leptos options from `Cargo.toml` and build the router.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn leptos_app(site_root: Option<&str>) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let mut leptos_options = conf.leptos_options;
    if let Some(root) = site_root {
        leptos_options.site_root = root.into();
    }
    tracing::info!(site_root = %leptos_options.site_root, "serving client assets");
    Ok(app(leptos_options))
}

async fn healthz() -> Json<Health> {
    Json(Health { status: "ok", version: env!("CARGO_PKG_VERSION") })
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
