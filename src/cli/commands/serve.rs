use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace, warn};

use crate::config::{ConfigOverrides, initialize_app_state};
use crate::router::create_router;

pub async fn serve(overrides: ConfigOverrides) -> Result<()> {
    trace!("Entering serve function");
    info!("Farm analytics dashboard starting up");

    // Initialize application state
    trace!("Initializing application state");
    let state = match initialize_app_state(overrides) {
        Ok(state) => {
            debug!("Application state initialized successfully");
            state
        }
        Err(e) => {
            error!("Failed to initialize application state: {}", e);
            return Err(e);
        }
    };

    let config = state.config.clone();
    debug!("Static dir: {}", config.static_dir);
    if config.api_base_url.is_empty() {
        debug!("Forms will post to the serving origin");
    } else {
        debug!("Forms will post to {}", config.api_base_url);
    }
    if !std::path::Path::new(&config.static_dir).is_dir() {
        warn!(
            "Static dir {} does not exist, the frontend bundle will 404",
            config.static_dir
        );
    }

    // Create router
    trace!("Creating application router");
    let app = create_router(state);
    debug!("Router created successfully");

    // Start server
    info!("Starting server on {}", config.bind_address);
    let listener = match TcpListener::bind(&config.bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", config.bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", config.bind_address, e);
            return Err(e.into());
        }
    };

    info!("Dashboard running on http://{}", config.bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", config.bind_address);

    trace!("Starting axum server");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
