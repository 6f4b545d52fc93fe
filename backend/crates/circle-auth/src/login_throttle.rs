use crate::{AuthError, LoginThrottleConfig, Result as AuthErrorResult};

use circle_core::normalize_email;

use std::num::NonZeroU32;
use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};

/// Per-email limiter on login attempts.
///
/// Allows a burst of `max_attempts`, replenished evenly over the window.
/// State lives in process memory only.
pub struct LoginThrottle {
    limiter: DefaultKeyedRateLimiter<String>,
    config: LoginThrottleConfig,
}

impl LoginThrottle {
    pub fn new(config: LoginThrottleConfig) -> Self {
        let burst = NonZeroU32::new(config.max_attempts).unwrap_or(NonZeroU32::MIN);
        let period = Duration::from_secs(config.window_secs.max(1)) / burst.get();
        let quota = Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_second(burst))
            .allow_burst(burst);

        Self {
            limiter: RateLimiter::keyed(quota),
            config,
        }
    }

    /// Record an attempt for `email`, failing once the budget is spent
    #[track_caller]
    pub fn check(&self, email: &str) -> AuthErrorResult<()> {
        let key = normalize_email(email);

        self.limiter
            .check_key(&key)
            .map_err(|_| AuthError::RateLimitExceeded {
                limit: self.config.max_attempts,
                window_secs: self.config.window_secs,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    pub fn config(&self) -> &LoginThrottleConfig {
        &self.config
    }
}

impl Default for LoginThrottle {
    fn default() -> Self {
        Self::new(LoginThrottleConfig::default())
    }
}
