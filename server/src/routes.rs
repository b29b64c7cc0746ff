//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the Leptos SSR routes, the hydration assets under
//! `/pkg`, and a health endpoint into a single Axum router with tracing and
//! gzip compression layered on top.

use std::path::PathBuf;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Router construction failures.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Missing or malformed `[[workspace.metadata.leptos]]` configuration.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
}

/// Build the site router.
///
/// # Errors
///
/// Returns [`ServerError::LeptosConfig`] if the Leptos configuration cannot
/// be loaded.
pub fn app() -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::LeptosConfig(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .with_state(leptos_options)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new());

    Ok(router)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
