//! CLI configuration file support
//!
//! Loads configuration from `<config dir>/scroller/config.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE: &str = "http://localhost:8081/api";

/// CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Default settings
    #[serde(default)]
    pub default: DefaultConfig,
    /// API key settings
    #[serde(default)]
    pub api_keys: ApiKeysConfig,
}

/// Default configuration values
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultConfig {
    /// Default database path
    pub db_path: Option<String>,
    /// Default backend API base URL
    pub api_base: Option<String>,
}

/// API key configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiKeysConfig {
    /// Gemini API key for the assist flows
    pub gemini: Option<String>,
}

impl CliConfig {
    /// Load configuration from the default path
    pub fn load() -> Self {
        Self::load_from_path(Self::default_path())
    }

    /// Load configuration from a specific path. Missing or malformed files
    /// fall back to defaults.
    pub fn load_from_path(path: Option<PathBuf>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Get the default configuration file path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("scroller").join("config.toml"))
    }

    /// Resolve the backend API base URL with the CLI flag taking priority.
    pub fn api_base(&self, flag: Option<&str>) -> String {
        flag.map(str::to_string)
            .or_else(|| self.default.api_base.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
    }

    /// Apply the configured API key to the environment
    ///
    /// # Safety
    /// This modifies environment variables which can cause issues in
    /// multi-threaded contexts. Should only be called early in main()
    /// before spawning threads.
    pub fn apply_api_key_env(&self) {
        if let Some(key) = &self.api_keys.gemini {
            if std::env::var("GEMINI_API_KEY").is_err() {
                // SAFETY: Called early in main() before spawning threads
                unsafe { std::env::set_var("GEMINI_API_KEY", key) };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = CliConfig::load_from_path(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(config.default.api_base.is_none());
        assert_eq!(config.api_base(None), DEFAULT_API_BASE);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not [valid toml").unwrap();
        let config = CliConfig::load_from_path(Some(file.path().to_path_buf()));
        assert!(config.default.db_path.is_none());
    }

    #[test]
    fn flag_overrides_configured_api_base() {
        let mut config = CliConfig::default();
        config.default.api_base = Some("http://configured/api".to_string());
        assert_eq!(config.api_base(None), "http://configured/api");
        assert_eq!(
            config.api_base(Some("http://flag/api")),
            "http://flag/api"
        );
    }
}
