use log::Level;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Base URL of the hosted table service (e.g. "https://xyz.example.co")
    pub data_url: String,

    /// Anonymous key sent as `apikey` and bearer token
    pub data_key: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            data_url: option_env!("CHURNLENS_DATA_URL").unwrap_or_default().to_string(),
            data_key: option_env!("CHURNLENS_DATA_KEY").unwrap_or_default().to_string(),
            log_level: Level::Info,
            debug_mode: false,
            toast_duration_ms: 5000,
        }
    }
}

impl AppSettings {
    /// Build-time defaults, then window location and localStorage overrides
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }

            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(data_url)) = storage.get_item("churnlens_data_url") {
                    settings.data_url = data_url;
                }

                if let Ok(Some(data_key)) = storage.get_item("churnlens_data_key") {
                    settings.data_key = data_key;
                }

                if let Ok(Some(log_level)) = storage.get_item("churnlens_log_level") {
                    settings.log_level = match log_level.to_lowercase().as_str() {
                        "error" => Level::Error,
                        "warn" => Level::Warn,
                        "info" => Level::Info,
                        "debug" => Level::Debug,
                        "trace" => Level::Trace,
                        _ => settings.log_level,
                    };
                }
            }
        }

        settings
    }

    pub fn is_configured(&self) -> bool {
        !self.data_url.is_empty() && !self.data_key.is_empty()
    }

    /// URL of a table endpoint, without the query string
    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.data_url.trim_end_matches('/'), table)
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
