//! Router assembly.

mod catalog;
mod common;
mod docs;

pub use catalog::catalog_routes;
pub use common::common_routes;
pub use docs::{docs_routes, ApiDoc};

use crate::config::ServerConfig;
use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full application: common, docs and catalog routes behind request tracing and a body size limit.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(docs_routes())
        .merge(catalog_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(config.body_limit_bytes)),
        )
}
