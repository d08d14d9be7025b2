// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::server::handlers;
use crate::server::state::AppState;

/// Build the full application router.
///
/// The static `filter-by-natural-language` segment takes priority over the
/// `{value}` capture: GET runs the natural-language filter, so a stored
/// string with that exact text cannot be fetched by value, while DELETE
/// still removes it. Unsupported methods on known routes get a JSON 405.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/health",
            get(handlers::health).fallback(handlers::method_not_allowed),
        )
        .route(
            "/strings",
            get(handlers::list_strings)
                .post(handlers::create_string)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/strings/filter-by-natural-language",
            get(handlers::filter_by_natural_language)
                .delete(handlers::delete_natural_language_literal)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/strings/:value",
            get(handlers::get_string)
                .delete(handlers::delete_string)
                .fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::route_not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
