use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_lifetime_seconds: u64,
    /// Adds the `Secure` attribute to the session cookie. Enable behind HTTPS.
    #[serde(default)]
    pub secure_cookie: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CalendarConfig {
    /// Number of months shown on the dashboard, starting in January.
    #[serde(default = "default_months")]
    pub months: u8,
    /// IANA timezone deciding when "today" rolls over.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            months: default_months(),
            timezone: default_timezone(),
        }
    }
}

fn default_months() -> u8 {
    12
}

fn default_timezone() -> String {
    "Europe/Berlin".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy environment variables (DATABASE_URL, JWT_SECRET)
    /// 2. Environment variables (HUTBOOK__DATABASE__URL, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("database.url", "sqlite:hutbook.db")?
            .set_default("database.max_connections", 5)?
            .set_default("auth.token_lifetime_seconds", 3600)?
            .set_default("auth.secure_cookie", false)?
            .set_default("calendar.months", 12)?
            .set_default("calendar.timezone", default_timezone())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("HUTBOOK")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }
        if let Ok(jwt_secret) = env::var("JWT_SECRET") {
            builder = builder.set_override("auth.jwt_secret", jwt_secret)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.auth.jwt_secret.len() < 32 {
            return Err("JWT secret must be at least 32 characters long".to_string());
        }
        if self.auth.token_lifetime_seconds == 0 {
            return Err("Token lifetime must be greater than 0".to_string());
        }
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if !(1..=12).contains(&self.calendar.months) {
            return Err("Calendar months must be between 1 and 12".to_string());
        }
        if !hutbook_shared::is_known_timezone(&self.calendar.timezone) {
            return Err(format!("Unknown calendar timezone `{}`", self.calendar.timezone));
        }
        Ok(())
    }
}
