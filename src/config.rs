use clap::{Args, Parser, ValueEnum};

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    #[command(flatten)]
    pub database: DatabaseConfig,

    #[command(flatten)]
    pub server: ServerConfig,

    #[command(flatten)]
    pub telemetry: TelemetryConfig,

    #[command(flatten)]
    pub health: HealthConfig,
}

#[derive(Clone, Debug, Args)]
pub struct DatabaseConfig {
    /// Database connection URL
    #[arg(long = "database-url", env = "USERS_DATABASE_URL")]
    pub url: String,

    /// Maximum number of pooled connections
    #[arg(long, env = "USERS_DB_MAX_CONNECTIONS", default_value_t = 20)]
    pub max_connections: u32,

    /// Minimum number of idle connections kept open
    #[arg(long, env = "USERS_DB_MIN_CONNECTIONS", default_value_t = 1)]
    pub min_connections: u32,

    /// Seconds to wait for a free connection before failing a query
    #[arg(long, env = "USERS_DB_ACQUIRE_TIMEOUT_SECS", default_value_t = 5)]
    pub acquire_timeout_secs: u64,
}

#[derive(Clone, Debug, Args)]
pub struct ServerConfig {
    /// Host to listen on
    #[arg(long, env = "USERS_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "USERS_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Seconds to wait for in-flight requests to drain on shutdown
    #[arg(long, env = "USERS_SHUTDOWN_TIMEOUT_SECS", default_value_t = 10)]
    pub shutdown_timeout_secs: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, Args)]
pub struct TelemetryConfig {
    /// Default log filter, overridden by RUST_LOG when set
    #[arg(long, env = "USERS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log output format
    #[arg(long, env = "USERS_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// OTLP/HTTP collector base URL; traces and metrics are exported only when set
    #[arg(long, env = "USERS_OTLP_ENDPOINT")]
    pub otlp_endpoint: Option<String>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self { log_level: "info".to_string(), log_format: LogFormat::Text, otlp_endpoint: None }
    }
}

#[derive(Clone, Debug, Args)]
pub struct HealthConfig {
    /// Timeout for a single database health check
    #[arg(long, env = "USERS_HEALTH_DB_TIMEOUT_MS", default_value_t = 2000)]
    pub db_timeout_ms: u64,

    /// Number of database checks attempted at startup before giving up
    #[arg(long, env = "USERS_STARTUP_ATTEMPTS", default_value_t = 20)]
    pub startup_attempts: usize,

    /// Initial delay between startup checks
    #[arg(long, env = "USERS_STARTUP_MIN_BACKOFF_MS", default_value_t = 250)]
    pub startup_min_backoff_ms: u64,

    /// Upper bound on the delay between startup checks
    #[arg(long, env = "USERS_STARTUP_MAX_BACKOFF_MS", default_value_t = 5000)]
    pub startup_max_backoff_ms: u64,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self { db_timeout_ms: 2000, startup_attempts: 20, startup_min_backoff_ms: 250, startup_max_backoff_ms: 5000 }
    }
}

impl Config {
    #[must_use]
    pub fn load() -> Self {
        Self::parse()
    }
}
