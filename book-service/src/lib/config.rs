use std::env;
use std::time::Duration;

use auth::TokenLocation;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub session: SessionConfig,
    #[serde(default)]
    pub gate: GateConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
    /// Upper bound for a single credential store call made on behalf of a request.
    #[serde(default = "default_store_timeout_ms")]
    pub store_timeout_ms: u64,
}

impl ServerConfig {
    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }
}

/// Credential store settings. Without a URL the service keeps credentials in memory.
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TokenTransport {
    Header,
    Cookie,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    pub token_location: TokenTransport,
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    #[serde(default)]
    pub secure_cookie: bool,
}

impl SessionConfig {
    pub fn token_location(&self) -> TokenLocation {
        match self.token_location {
            TokenTransport::Header => TokenLocation::AuthorizationHeader,
            TokenTransport::Cookie => TokenLocation::Cookie(self.cookie_name.clone()),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct GateConfig {
    /// Subjects admitted past the gate. Empty admits every authenticated subject.
    #[serde(default)]
    pub allowed_subjects: Vec<String>,
}

fn default_store_timeout_ms() -> u64 {
    5000
}

fn default_max_connections() -> u32 {
    5
}

fn default_cookie_name() -> String {
    "session".to_string()
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. `JWT_SECRET` environment variable (signing secret only)
    /// 2. Environment variables (JWT__SECRET, SERVER__HTTP_PORT, etc.)
    /// 3. Environment-specific config file (config/{environment}.toml)
    /// 4. Default config file (config/default.toml)
    ///
    /// # Errors
    /// Missing values, or an empty signing secret
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: SESSION__TOKEN_LOCATION=cookie overrides session.token_location
            .add_source(
                Environment::default()
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("gate.allowed_subjects"),
            )
            .set_override_option("jwt.secret", env::var("JWT_SECRET").ok())?
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Reject configurations the service must not start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.trim().is_empty() {
            return Err(ConfigError::Message(
                "jwt.secret is required (set JWT__SECRET or JWT_SECRET)".to_string(),
            ));
        }
        if self.session.token_location == TokenTransport::Cookie
            && self.session.cookie_name.trim().is_empty()
        {
            return Err(ConfigError::Message(
                "session.cookie_name must not be empty in cookie mode".to_string(),
            ));
        }
        Ok(())
    }
}
