mod auth_config;
mod config;
mod database_config;
mod error;
mod friend_request_config;
mod log_level;
mod logging_config;
mod login_throttle_config;
mod server_config;


pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult, ConfigSection};
pub use friend_request_config::FriendRequestConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use login_throttle_config::LoginThrottleConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "CIRCLE_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".circle";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "data.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
