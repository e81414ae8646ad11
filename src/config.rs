use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

pub const SETTINGS_KEY: &str = "expense_tracker.settings";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8061/api";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";
pub const DEFAULT_RECENT_LIMIT: usize = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Serialization error: {0}")]
    Serde(String),

    #[error("Browser storage is unavailable")]
    StorageUnavailable,

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Where the Analytics page gets its per-category numbers from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummarySource {
    /// Aggregate `GET /expense` in the browser.
    #[default]
    Client,
    /// Trust `GET /expense/category-summary`.
    Server,
}

impl SummarySource {
    pub fn label(self) -> &'static str {
        match self {
            SummarySource::Client => "Computed locally",
            SummarySource::Server => "From server",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SummarySource::Client => SummarySource::Server,
            SummarySource::Server => SummarySource::Client,
        }
    }
}

/// User-adjustable settings, saved as JSON in local storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub currency_symbol: String,
    pub recent_limit: usize,
    pub summary_source: SummarySource,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: Self::default_api_base_url(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            recent_limit: DEFAULT_RECENT_LIMIT,
            summary_source: SummarySource::default(),
        }
    }
}

impl AppConfig {
    /// Build-time override via `EXPENSE_API_BASE_URL`, else the local dev server.
    pub fn default_api_base_url() -> String {
        option_env!("EXPENSE_API_BASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string()
    }

    /// Parses saved settings; fields missing from `raw` keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let mut config: AppConfig =
            serde_json::from_str(raw).map_err(|err| ConfigError::Serde(err.to_string()))?;
        config.normalize();
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string(self).map_err(|err| ConfigError::Serde(err.to_string()))
    }

    fn normalize(&mut self) {
        let trimmed = self.api_base_url.trim().trim_end_matches('/');
        self.api_base_url = if trimmed.is_empty() {
            Self::default_api_base_url()
        } else {
            trimmed.to_string()
        };
        if self.currency_symbol.trim().is_empty() {
            self.currency_symbol = DEFAULT_CURRENCY_SYMBOL.to_string();
        }
        if self.recent_limit == 0 {
            self.recent_limit = DEFAULT_RECENT_LIMIT;
        }
    }

    /// Reads saved settings, falling back to defaults on any problem.
    pub fn load() -> Self {
        match read_saved_settings() {
            Ok(Some(raw)) => Self::from_json(&raw).unwrap_or_else(|err| {
                warn!(error = %err, "ignoring saved settings");
                Self::default()
            }),
            Ok(None) => Self::default(),
            Err(err) => {
                warn!(error = %err, "could not read saved settings");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let raw = self.to_json()?;
        local_storage()?
            .set_item(SETTINGS_KEY, &raw)
            .map_err(|err| ConfigError::Storage(format!("{:?}", err)))
    }
}

fn local_storage() -> Result<web_sys::Storage, ConfigError> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or(ConfigError::StorageUnavailable)
}

fn read_saved_settings() -> Result<Option<String>, ConfigError> {
    local_storage()?
        .get_item(SETTINGS_KEY)
        .map_err(|err| ConfigError::Storage(format!("{:?}", err)))
}
