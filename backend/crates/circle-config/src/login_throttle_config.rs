use crate::{ConfigError, ConfigErrorResult, ConfigSection};

use serde::Deserialize;

pub const MIN_LOGIN_ATTEMPTS: u32 = 1;
pub const MAX_LOGIN_ATTEMPTS: u32 = 100;
pub const DEFAULT_LOGIN_ATTEMPTS: u32 = 5;

pub const MIN_LOGIN_WINDOW_SECS: u64 = 1;
pub const MAX_LOGIN_WINDOW_SECS: u64 = 3600;
pub const DEFAULT_LOGIN_WINDOW_SECS: u64 = 60;

/// Per-email login attempt limit, held in memory
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoginThrottleConfig {
    pub max_attempts: u32,
    pub window_secs: u64,
}

impl Default for LoginThrottleConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_LOGIN_ATTEMPTS,
            window_secs: DEFAULT_LOGIN_WINDOW_SECS,
        }
    }
}

impl LoginThrottleConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_LOGIN_ATTEMPTS..=MAX_LOGIN_ATTEMPTS).contains(&self.max_attempts) {
            return Err(ConfigError::invalid(
                ConfigSection::LoginThrottle,
                format!(
                    "login_throttle.max_attempts must be {}-{}, got {}",
                    MIN_LOGIN_ATTEMPTS, MAX_LOGIN_ATTEMPTS, self.max_attempts
                ),
            ));
        }

        if !(MIN_LOGIN_WINDOW_SECS..=MAX_LOGIN_WINDOW_SECS).contains(&self.window_secs) {
            return Err(ConfigError::invalid(
                ConfigSection::LoginThrottle,
                format!(
                    "login_throttle.window_secs must be {}-{}, got {}",
                    MIN_LOGIN_WINDOW_SECS, MAX_LOGIN_WINDOW_SECS, self.window_secs
                ),
            ));
        }

        Ok(())
    }
}
