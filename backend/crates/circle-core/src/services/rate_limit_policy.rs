use chrono::{DateTime, Duration, Utc};

pub const DEFAULT_MAX_REQUESTS: u32 = 3;
pub const DEFAULT_WINDOW_SECS: i64 = 60;

/// Sliding-window cap on how many friend requests one sender may create
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    pub max_requests: u32,
    pub window: Duration,
}

impl RateLimitPolicy {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
        }
    }

    /// Inclusive lower bound of the window ending at `now`
    pub fn window_start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - self.window
    }

    pub fn is_exceeded(&self, sent_in_window: u32) -> bool {
        sent_in_window >= self.max_requests
    }
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_REQUESTS, Duration::seconds(DEFAULT_WINDOW_SECS))
    }
}
