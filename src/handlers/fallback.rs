use axum::http::Uri;

use crate::error::ServerError;

/// Answer for any route the host does not serve
pub async fn not_found(uri: Uri) -> ServerError {
    ServerError::NotFound(uri.path().to_string())
}
