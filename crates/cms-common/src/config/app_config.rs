//! Application configuration structs
//!
//! Loads configuration from environment variables (with `.env` support).
//! Connection parameters and secrets are never compiled in.

use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub storage: StorageConfig,
    /// First administrator, created at startup when no user exists
    #[serde(default)]
    pub admin: Option<AdminBootstrap>,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// MySQL configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Apply embedded migrations on startup
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

/// JWT configuration
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds
    #[serde(default = "default_token_expiry")]
    pub expiry_seconds: i64,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Static files and uploads
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Root served at `/`; uploads land in subdirectories of it
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
    #[serde(default = "default_upload_destination")]
    pub default_destination: String,
    #[serde(default = "default_max_upload_size")]
    pub max_upload_size_mb: u32,
}

impl StorageConfig {
    /// Upload size limit in bytes
    #[must_use]
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_size_mb as usize * 1024 * 1024
    }
}

/// Credentials for the initial administrator account
#[derive(Clone, Deserialize)]
pub struct AdminBootstrap {
    #[serde(default = "default_admin_name")]
    pub name: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for AdminBootstrap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminBootstrap")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl AdminBootstrap {
    /// Read `ADMIN_EMAIL` / `ADMIN_PASSWORD` (and optional `ADMIN_NAME`)
    fn from_env() -> Option<Self> {
        let email = env::var("ADMIN_EMAIL").ok().filter(|v| !v.trim().is_empty())?;
        let password = env::var("ADMIN_PASSWORD").ok().filter(|v| !v.is_empty())?;
        Some(Self {
            name: env::var("ADMIN_NAME").unwrap_or_else(|_| default_admin_name()),
            email: email.trim().to_string(),
            password,
        })
    }
}

// Default value functions
fn default_app_name() -> String {
    "cms-api".to_string()
}

fn default_admin_name() -> String {
    "Yönetici".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

fn default_token_expiry() -> i64 {
    3600 // 1 hour
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("./public")
}

fn default_upload_destination() -> String {
    "uploads".to_string()
}

fn default_max_upload_size() -> u32 {
    20
}

/// Read an optional variable and parse it, falling back to `default`
fn parse_var<T: FromStr>(name: &'static str, default: fn() -> T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(name, raw)),
        Err(_) => Ok(default()),
    }
}

fn required_var(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::MissingVar(name))
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    /// or a numeric variable cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| default_host()),
                port: parse_var("API_PORT", default_port)?,
            },
            database: DatabaseConfig {
                url: required_var("DATABASE_URL")?,
                max_connections: parse_var("DATABASE_MAX_CONNECTIONS", default_max_connections)?,
                min_connections: parse_var("DATABASE_MIN_CONNECTIONS", default_min_connections)?,
                run_migrations: parse_var("DATABASE_RUN_MIGRATIONS", default_true)?,
            },
            jwt: JwtConfig {
                secret: required_var("JWT_SECRET")?,
                expiry_seconds: parse_var("JWT_EXPIRY_SECONDS", default_token_expiry)?,
            },
            rate_limit: RateLimitConfig {
                requests_per_second: parse_var(
                    "RATE_LIMIT_REQUESTS_PER_SECOND",
                    default_requests_per_second,
                )?,
                burst: parse_var("RATE_LIMIT_BURST", default_burst)?,
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .ok()
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|o| !o.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            storage: StorageConfig {
                public_dir: env::var("PUBLIC_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| default_public_dir()),
                default_destination: env::var("DEFAULT_UPLOAD_DESTINATION")
                    .unwrap_or_else(|_| default_upload_destination()),
                max_upload_size_mb: parse_var("MAX_UPLOAD_SIZE_MB", default_max_upload_size)?,
            },
            admin: AdminBootstrap::from_env(),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_is_production() {
        assert!(!Environment::Development.is_production());
        assert!(!Environment::Staging.is_production());
        assert!(Environment::Production.is_production());
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse("PRODUCTION"), Some(Environment::Production));
        assert_eq!(Environment::parse("staging"), Some(Environment::Staging));
        assert_eq!(Environment::parse("prod"), None);
    }

    #[test]
    fn test_server_address() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 3001,
        };
        assert_eq!(config.address(), "0.0.0.0:3001");
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_app_name(), "cms-api");
        assert_eq!(default_port(), 3001);
        assert_eq!(default_token_expiry(), 3600);
        assert_eq!(default_upload_destination(), "uploads");
        assert_eq!(default_public_dir(), PathBuf::from("./public"));
    }

    #[test]
    fn test_max_upload_bytes() {
        let storage = StorageConfig {
            public_dir: default_public_dir(),
            default_destination: default_upload_destination(),
            max_upload_size_mb: 2,
        };
        assert_eq!(storage.max_upload_bytes(), 2 * 1024 * 1024);
    }

    #[test]
    fn test_parse_var_falls_back_when_unset() {
        let value = parse_var("CMS_TEST_SURELY_UNSET_VARIABLE", default_burst).unwrap();
        assert_eq!(value, 50);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingVar("JWT_SECRET");
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: JWT_SECRET"
        );

        let err = ConfigError::InvalidValue("API_PORT", "abc".to_string());
        assert_eq!(err.to_string(), "Invalid value for API_PORT: abc");
    }
}
