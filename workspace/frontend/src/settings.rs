use log::Level;
use wasm_bindgen::JsValue;
use web_sys::window;

const API_BASE_KEY: &str = "farmdash_api_base";
const LOG_LEVEL_KEY: &str = "farmdash_log_level";

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Prefix put in front of every API path. Empty means same origin.
    pub api_base: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            log_level: Level::Info,
            debug_mode: false,
        }
    }
}

impl AppSettings {
    /// Create settings from the page and window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        // The host server announces the API location on <body data-api-base>
        if let Some(api_base) = window
            .document()
            .and_then(|document| document.body())
            .and_then(|body| body.get_attribute("data-api-base"))
        {
            settings.api_base = api_base;
        }

        // localStorage wins over what the page says
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(api_base)) = storage.get_item(API_BASE_KEY) {
                settings.api_base = api_base;
            }

            if let Ok(Some(log_level)) = storage.get_item(LOG_LEVEL_KEY) {
                settings.log_level = parse_level(&log_level).unwrap_or(settings.log_level);
            }
        }

        settings.api_base = settings.api_base.trim_end_matches('/').to_string();
        settings
    }

    /// Save settings to localStorage
    pub fn save_to_storage(&self) -> Result<(), JsValue> {
        if let Some(window) = window() {
            if let Some(storage) = window.local_storage()? {
                storage.set_item(API_BASE_KEY, &self.api_base)?;
                storage.set_item(LOG_LEVEL_KEY, &self.log_level.as_str().to_lowercase())?;
            }
        }
        Ok(())
    }

    /// Get the full API URL for an endpoint path
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base, endpoint)
    }
}

fn parse_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Update the global settings
pub fn update_settings<F>(f: F)
where
    F: FnOnce(&mut AppSettings),
{
    SETTINGS.with(|s| {
        let mut settings = s.borrow_mut();
        f(&mut settings);
    });
}

/// Initialize settings (call this once the page body exists)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_joins_base_and_endpoint() {
        let mut settings = AppSettings::default();
        assert_eq!(settings.api_url("/api/detect/pest"), "/api/detect/pest");

        settings.api_base = "http://analytics.local:5000".to_string();
        assert_eq!(
            settings.api_url("/api/detect/pest"),
            "http://analytics.local:5000/api/detect/pest"
        );
    }

    #[test]
    fn log_levels_parse_case_insensitively() {
        assert_eq!(parse_level("WARN"), Some(Level::Warn));
        assert_eq!(parse_level("trace"), Some(Level::Trace));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn update_settings_changes_global_copy() {
        update_settings(|s| s.api_base = "https://farm.example".to_string());
        assert_eq!(get_settings().api_base, "https://farm.example");
    }
}
