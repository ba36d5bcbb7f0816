use crate::handlers::{dashboard::dashboard_page, fallback::not_found, health::health_check};
use crate::schemas::{ApiDoc, AppState};
use axum::{routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    let timeout = Duration::from_secs(state.config.request_timeout_secs);

    Router::new()
        // Dashboard page
        .route("/", get(dashboard_page))
        // Health check
        .route("/health", get(health_check))
        // Frontend bundle (wasm-pack output, styles)
        .nest_service("/static", ServeDir::new(static_dir))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(timeout))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
