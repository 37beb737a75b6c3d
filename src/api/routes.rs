use axum::http::{header, HeaderValue, Method};
use axum::{
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::{
    cors::CorsLayer, limit::RequestBodyLimitLayer, set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::api::handlers::{self, AppState};
use crate::config::ServerConfig;

/// Create the router with the tool endpoints
pub fn create_router(state: AppState, server: &ServerConfig) -> Router {
    let tool_routes = Router::new()
        .route("/tools", get(handlers::list_tools))
        .route("/tools/list_repos", post(handlers::list_repos))
        .route("/tools/get_repo_tree", post(handlers::get_repo_tree))
        .route("/tools/get_file_content", post(handlers::get_file_content))
        .route(
            "/tools/list_files_in_repos",
            post(handlers::list_files_in_repos),
        )
        .with_state(state);

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", tool_routes)
        .layer(
            // Request body size limit - tool arguments are tiny
            RequestBodyLimitLayer::new(server.max_request_body_size),
        )
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
                .allow_origin(tower_http::cors::Any)
                .max_age(Duration::from_secs(3600)),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(TraceLayer::new_for_http())
}
