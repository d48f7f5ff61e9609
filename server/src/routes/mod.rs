//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the plain HTTP endpoints (health, legacy redirects) and stitches them
//! with Leptos SSR rendering under a single Axum router. The hydrate bundle
//! produced by `cargo leptos` is served from `/pkg`.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;

/// Route the SSR app renders the auth screen at.
const AUTH_ROUTE: &str = "/auth";

/// Plain HTTP routes that do not go through Leptos.
pub fn api_routes() -> Router {
    Router::new()
        .route("/login", get(redirect_to_auth))
        .route("/register", get(redirect_to_auth))
        .route("/healthz", get(healthz))
}

async fn redirect_to_auth() -> Redirect {
    Redirect::temporary(AUTH_ROUTE)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Full application: API routes + Leptos SSR + static `/pkg` assets.
pub fn app(config: &Config, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(orizu_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || orizu_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let mut router = api_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http());

    if config.compression {
        router = router.layer(CompressionLayer::new());
    }

    router
}
