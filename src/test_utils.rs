use crate::config::AppConfig;
use crate::router::create_router;
use crate::schemas::AppState;
use axum::Router;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Configuration pointing at a throwaway static dir
pub fn test_config(static_dir: &std::path::Path) -> AppConfig {
    AppConfig {
        bind_address: "127.0.0.1:0".to_string(),
        static_dir: static_dir.to_string_lossy().into_owned(),
        api_base_url: "http://analytics.test:5000".to_string(),
        ..AppConfig::default()
    }
}

/// Create AppState for testing
pub fn setup_test_app_state(static_dir: &std::path::Path) -> AppState {
    AppState {
        config: Arc::new(test_config(static_dir)),
    }
}

/// Initialize tracing for tests with output to STDERR.
///
/// The log level is determined by the RUST_LOG environment variable,
/// defaulting to WARN if not set. The subscriber is installed globally once;
/// later calls are no-ops.
pub fn init_test_tracing() {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| match level.to_uppercase().as_str() {
            "ERROR" => Some(Level::ERROR),
            "WARN" => Some(Level::WARN),
            "INFO" => Some(Level::INFO),
            "DEBUG" => Some(Level::DEBUG),
            "TRACE" => Some(Level::TRACE),
            _ => None,
        })
        .unwrap_or(Level::WARN);

    // Another test may have installed it already
    let _ = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr) // Output to stderr, which is captured by tests
        .try_init();
}

/// Create axum app for testing
pub fn setup_test_app(static_dir: &std::path::Path) -> Router {
    init_test_tracing();
    create_router(setup_test_app_state(static_dir))
}

/// A fresh directory under the system temp dir holding a fake bundle
pub fn fake_static_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("farmdash-test-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(dir.join("pkg")).expect("Failed to create static dir");
    std::fs::write(dir.join("pkg/frontend.js"), "export default function init() {}")
        .expect("Failed to write bundle");
    dir
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_stays_installed_after_setup() {
        let dir = fake_static_dir("tracing");
        let _app = setup_test_app(&dir);
        let _again = setup_test_app(&dir);

        assert!(tracing::dispatcher::has_been_set());
    }
}
