use crate::{ConfigError, ConfigErrorResult, ConfigSection};

use serde::Deserialize;

// Rate limit constraints
pub const MIN_RATE_LIMIT_REQUESTS: u32 = 1;
pub const MAX_RATE_LIMIT_REQUESTS: u32 = 1000;
pub const DEFAULT_RATE_LIMIT_REQUESTS: u32 = 3;

pub const MIN_RATE_LIMIT_WINDOW_SECS: u64 = 1;
pub const MAX_RATE_LIMIT_WINDOW_SECS: u64 = 86_400;
pub const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 60;

/// Friend request settings.
/// The rate limit is per sender and counts requests of every status.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FriendRequestConfig {
    /// Maximum requests per window
    pub rate_limit_max_requests: u32,
    /// Window duration in seconds
    pub rate_limit_window_secs: u64,
}

impl Default for FriendRequestConfig {
    fn default() -> Self {
        Self {
            rate_limit_max_requests: DEFAULT_RATE_LIMIT_REQUESTS,
            rate_limit_window_secs: DEFAULT_RATE_LIMIT_WINDOW_SECS,
        }
    }
}

impl FriendRequestConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.rate_limit_max_requests < MIN_RATE_LIMIT_REQUESTS
            || self.rate_limit_max_requests > MAX_RATE_LIMIT_REQUESTS
        {
            return Err(ConfigError::invalid(
                ConfigSection::FriendRequests,
                format!(
                    "friend_requests.rate_limit_max_requests must be {}-{}, got {}",
                    MIN_RATE_LIMIT_REQUESTS, MAX_RATE_LIMIT_REQUESTS, self.rate_limit_max_requests
                ),
            ));
        }

        if self.rate_limit_window_secs < MIN_RATE_LIMIT_WINDOW_SECS
            || self.rate_limit_window_secs > MAX_RATE_LIMIT_WINDOW_SECS
        {
            return Err(ConfigError::invalid(
                ConfigSection::FriendRequests,
                format!(
                    "friend_requests.rate_limit_window_secs must be {}-{}, got {}",
                    MIN_RATE_LIMIT_WINDOW_SECS, MAX_RATE_LIMIT_WINDOW_SECS, self.rate_limit_window_secs
                ),
            ));
        }

        Ok(())
    }
}
