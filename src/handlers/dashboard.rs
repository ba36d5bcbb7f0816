use axum::{extract::State, response::Html};
use tracing::{debug, instrument};

use crate::page::render_dashboard;
use crate::schemas::AppState;

/// Dashboard page with the four analytics forms
#[utoipa::path(
    get,
    path = "/",
    tag = "dashboard",
    responses(
        (status = 200, description = "Dashboard HTML", content_type = "text/html", body = String)
    )
)]
#[instrument(skip(state))]
pub async fn dashboard_page(State(state): State<AppState>) -> Html<String> {
    debug!("Rendering dashboard page");
    Html(render_dashboard(&state.config.api_base_url))
}
