//! REST API quota status

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Core REST quota as reported by the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitStatus {
    /// Requests allowed per window
    pub limit: u64,
    /// Requests left in the current window
    pub remaining: u64,
    /// Requests used in the current window
    pub used: u64,
    /// When the window resets (epoch seconds)
    pub reset: i64,
}

impl RateLimitStatus {
    /// Reset time as a UTC timestamp
    #[must_use]
    pub fn reset_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.reset, 0)
    }

    /// One-line usage summary for logs
    #[must_use]
    pub fn summary(&self) -> String {
        let reset = self
            .reset_at()
            .map_or_else(|| self.reset.to_string(), |at| at.to_rfc3339());
        format!(
            "rate limit: used {}/{} ({} remaining), resets at {reset}",
            self.used, self.limit, self.remaining
        )
    }
}
