//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server only hosts the portfolio document: Leptos SSR at `/`, the
//! hydration bundle under `/pkg`, and a liveness probe. The endpoints shown on
//! the page are display content and are not routed here.


use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use devfolio_ui::app::{App, shell};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;

/// Load Leptos options from Cargo metadata / `LEPTOS_*` variables.
///
/// # Errors
///
/// Returns [`ServerError::Leptos`] if the configuration is missing or
/// malformed.
pub fn leptos_options() -> Result<LeptosOptions, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    Ok(conf.leptos_options)
}

/// SSR page + static assets + health probe.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);
    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(ServeDir::new(site_root))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
