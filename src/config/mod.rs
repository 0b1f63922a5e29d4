//! Configuration management
//!
//! Resolves where the BookMeHere REST API lives for the current environment,
//! and where service/master images are served from.

use serde::Deserialize;

/// API base used by `cargo run` / `dx serve` during development
pub const DEVELOPMENT_API_BASE_URL: &str = "http://localhost:3001/api";

/// Hosted backend used by release builds
pub const PRODUCTION_API_BASE_URL: &str = "https://bookmehere-backend.onrender.com/api";

/// Per-request timeout (ms)
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Environment implied by the build profile (debug = development)
    pub fn from_build() -> Self {
        if cfg!(debug_assertions) {
            Environment::Development
        } else {
            Environment::Production
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Some(Environment::Development),
            "production" | "prod" => Some(Environment::Production),
            _ => None,
        }
    }

    pub fn default_api_base_url(&self) -> &'static str {
        match self {
            Environment::Development => DEVELOPMENT_API_BASE_URL,
            Environment::Production => PRODUCTION_API_BASE_URL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub env: Environment,

    /// Base URL every endpoint path is appended to (no trailing slash)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Host serving uploaded images; derived from `api_base_url` when unset
    #[serde(default)]
    pub media_base_url: Option<String>,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_api_base_url() -> String {
    DEVELOPMENT_API_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::for_env(Environment::Development)
    }
}

impl ClientConfig {
    pub fn for_env(env: Environment) -> Self {
        Self {
            env,
            api_base_url: env.default_api_base_url().to_string(),
            media_base_url: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Config baked in at compile time (browser builds have no env or files).
    ///
    /// `BOOKME_API_BASE_URL` overrides the profile default.
    pub fn from_build_env() -> Self {
        let mut config = Self::for_env(Environment::from_build());
        if let Some(url) = option_env!("BOOKME_API_BASE_URL") {
            if !url.trim().is_empty() {
                config.api_base_url = url.trim().to_string();
            }
        }
        config.normalized()
    }

    /// Point at an explicit API base (used by tests and the probe CLI)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self.normalized()
    }

    fn normalized(mut self) -> Self {
        while self.api_base_url.ends_with('/') {
            self.api_base_url.pop();
        }
        if let Some(media) = self.media_base_url.as_mut() {
            while media.ends_with('/') {
                media.pop();
            }
        }
        self
    }

    /// Full URL for an endpoint path such as `/services`
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url, endpoint)
    }

    /// Host that image paths (e.g. `/uploads/cut.jpg`) are resolved against.
    ///
    /// Uploads live next to the API, so the `/api` suffix is stripped.
    pub fn media_base(&self) -> String {
        if let Some(media) = &self.media_base_url {
            return media.clone();
        }
        self.api_base_url
            .strip_suffix("/api")
            .unwrap_or(&self.api_base_url)
            .to_string()
    }
}

/// Get config directory (BOOKME_CONFIG_DIR, XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("BOOKME_CONFIG_DIR") {
        return std::path::PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join("Library/Application Support/bookmehere");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return std::path::PathBuf::from(xdg).join("bookmehere");
        }
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join(".config/bookmehere");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return std::path::PathBuf::from(appdata).join("bookmehere");
        }
    }

    std::path::PathBuf::from(".")
}

/// Load native configuration: defaults < `config.*` file < `BOOKME_*` env vars.
///
/// When only `BOOKME_ENV` is given, the API base follows that environment.
#[cfg(feature = "server")]
pub fn load_config() -> anyhow::Result<ClientConfig> {
    let config_dir = get_config_dir();

    let env = std::env::var("BOOKME_ENV")
        .ok()
        .and_then(|v| Environment::parse(&v))
        .unwrap_or_else(Environment::from_build);

    let builder = ::config::Config::builder()
        .set_default(
            "env",
            match env {
                Environment::Development => "development",
                Environment::Production => "production",
            },
        )?
        .set_default("api_base_url", env.default_api_base_url())?
        .set_default("timeout_ms", DEFAULT_TIMEOUT_MS as i64)?
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        .add_source(::config::Environment::with_prefix("BOOKME").try_parsing(true));

    let config: ClientConfig = builder.build()?.try_deserialize()?;
    validate_url("api_base_url", &config.api_base_url)?;
    if let Some(media) = &config.media_base_url {
        validate_url("media_base_url", media)?;
    }
    tracing::debug!(
        "Configuration loaded: env={:?} api={}",
        config.env,
        config.api_base_url
    );
    Ok(config.normalized())
}

/// Reject anything that is not an absolute http(s) URL
pub fn validate_url(key: &str, value: &str) -> anyhow::Result<()> {
    let parsed = url::Url::parse(value)
        .map_err(|e| anyhow::anyhow!("{} is not a valid URL ({}): {}", key, value, e))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        anyhow::bail!("{} must use http or https, got {}", key, parsed.scheme());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_joins_base_and_endpoint() {
        let config = ClientConfig::default().with_api_base_url("http://api.test/api/");
        assert_eq!(config.api_url("/services"), "http://api.test/api/services");
    }

    #[test]
    fn media_base_strips_api_suffix() {
        let config = ClientConfig::for_env(Environment::Production);
        assert_eq!(config.media_base(), "https://bookmehere-backend.onrender.com");

        let dev = ClientConfig::for_env(Environment::Development);
        assert_eq!(dev.media_base(), "http://localhost:3001");
    }

    #[test]
    fn explicit_media_base_wins() {
        let mut config = ClientConfig::default();
        config.media_base_url = Some("https://cdn.example.com/".to_string());
        let config = config.normalized();
        assert_eq!(config.media_base(), "https://cdn.example.com");
    }

    #[test]
    fn validate_url_rejects_relative_and_non_http() {
        assert!(validate_url("api_base_url", "http://10.0.0.5:3001/api").is_ok());
        assert!(validate_url("api_base_url", "/api").is_err());
        assert!(validate_url("api_base_url", "ftp://files.example.com").is_err());
    }

    #[test]
    fn environment_parse_accepts_short_names() {
        assert_eq!(Environment::parse("PROD"), Some(Environment::Production));
        assert_eq!(Environment::parse("dev"), Some(Environment::Development));
        assert_eq!(Environment::parse("staging"), None);
    }

    #[cfg(feature = "server")]
    mod load {
        use super::super::*;
        use serial_test::serial;
        use std::env;

        fn clear_env() {
            for key in [
                "BOOKME_ENV",
                "BOOKME_API_BASE_URL",
                "BOOKME_MEDIA_BASE_URL",
                "BOOKME_TIMEOUT_MS",
            ] {
                env::remove_var(key);
            }
        }

        #[test]
        #[serial]
        fn production_env_selects_hosted_backend() {
            clear_env();
            env::set_var("BOOKME_CONFIG_DIR", "/tmp/bookme-test-nonexistent");
            env::set_var("BOOKME_ENV", "production");

            let config = load_config().expect("config should load");

            clear_env();
            env::remove_var("BOOKME_CONFIG_DIR");

            assert_eq!(config.env, Environment::Production);
            assert_eq!(config.api_base_url, PRODUCTION_API_BASE_URL);
            assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
        }

        #[test]
        #[serial]
        fn env_vars_override_base_url_and_timeout() {
            clear_env();
            env::set_var("BOOKME_CONFIG_DIR", "/tmp/bookme-test-nonexistent");
            env::set_var("BOOKME_API_BASE_URL", "http://10.0.0.5:3001/api/");
            env::set_var("BOOKME_TIMEOUT_MS", "2500");

            let config = load_config().expect("config should load");

            clear_env();
            env::remove_var("BOOKME_CONFIG_DIR");

            assert_eq!(config.api_base_url, "http://10.0.0.5:3001/api");
            assert_eq!(config.timeout_ms, 2500);
            assert_eq!(config.media_base(), "http://10.0.0.5:3001");
        }

        #[test]
        #[serial]
        fn config_file_is_read_from_config_dir() {
            clear_env();
            let dir = tempfile::tempdir().expect("tempdir");
            std::fs::write(
                dir.path().join("config.toml"),
                "api_base_url = \"https://staging.example.com/api\"\nmedia_base_url = \"https://img.example.com\"\n",
            )
            .expect("write config");
            env::set_var("BOOKME_CONFIG_DIR", dir.path());

            let config = load_config().expect("config should load");

            env::remove_var("BOOKME_CONFIG_DIR");

            assert_eq!(config.api_base_url, "https://staging.example.com/api");
            assert_eq!(config.media_base(), "https://img.example.com");
        }
    }
}
