use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, ConfigSection,
    DEFAULT_CONFIG_DIR, DatabaseConfig, FriendRequestConfig, LoggingConfig, LoginThrottleConfig,
    ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub friend_requests: FriendRequestConfig,
    pub login_throttle: LoginThrottleConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. CIRCLE_CONFIG_DIR env var, else ./.circle/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply CIRCLE_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: CIRCLE_CONFIG_DIR env var > ./.circle/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| {
                ConfigError::invalid(
                    ConfigSection::Environment,
                    "Cannot determine current working directory",
                )
            })?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.logging.validate()?;
        self.friend_requests.validate()?;
        self.login_throttle.validate()?;

        Ok(())
    }

    /// Absolute path to the database file
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Absolute path to the log file, if file logging is configured
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(file),
            )),
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  auth: HS256 (secret {}), access={}s, refresh={}s, argon2id m={}KiB t={} p={}",
            if self.auth.jwt_secret.is_some() {
                "set"
            } else {
                "missing"
            },
            self.auth.access_token_ttl_secs,
            self.auth.refresh_token_ttl_secs,
            self.auth.password_hash_memory_kib,
            self.auth.password_hash_time_cost,
            self.auth.password_hash_parallelism
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  friend_requests: {}/{}s",
            self.friend_requests.rate_limit_max_requests,
            self.friend_requests.rate_limit_window_secs
        );
        info!(
            "  login_throttle: {}/{}s",
            self.login_throttle.max_attempts, self.login_throttle.window_secs
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("CIRCLE_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("CIRCLE_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("CIRCLE_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "CIRCLE_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Auth
        Self::apply_env_option_string("CIRCLE_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse(
            "CIRCLE_AUTH_ACCESS_TOKEN_TTL_SECS",
            &mut self.auth.access_token_ttl_secs,
        );
        Self::apply_env_parse(
            "CIRCLE_AUTH_REFRESH_TOKEN_TTL_SECS",
            &mut self.auth.refresh_token_ttl_secs,
        );
        Self::apply_env_parse(
            "CIRCLE_AUTH_PASSWORD_HASH_MEMORY_KIB",
            &mut self.auth.password_hash_memory_kib,
        );
        Self::apply_env_parse(
            "CIRCLE_AUTH_PASSWORD_HASH_TIME_COST",
            &mut self.auth.password_hash_time_cost,
        );
        Self::apply_env_parse(
            "CIRCLE_AUTH_PASSWORD_HASH_PARALLELISM",
            &mut self.auth.password_hash_parallelism,
        );

        // Logging
        Self::apply_env_parse("CIRCLE_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("CIRCLE_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("CIRCLE_LOG_FILE", &mut self.logging.file);
        Self::apply_env_string("CIRCLE_LOG_DIR", &mut self.logging.dir);

        // Friend requests
        Self::apply_env_parse(
            "CIRCLE_FRIEND_REQUESTS_RATE_LIMIT_MAX_REQUESTS",
            &mut self.friend_requests.rate_limit_max_requests,
        );
        Self::apply_env_parse(
            "CIRCLE_FRIEND_REQUESTS_RATE_LIMIT_WINDOW_SECS",
            &mut self.friend_requests.rate_limit_window_secs,
        );

        // Login throttle
        Self::apply_env_parse(
            "CIRCLE_LOGIN_THROTTLE_MAX_ATTEMPTS",
            &mut self.login_throttle.max_attempts,
        );
        Self::apply_env_parse(
            "CIRCLE_LOGIN_THROTTLE_WINDOW_SECS",
            &mut self.login_throttle.window_secs,
        );
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values leave the target untouched
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
