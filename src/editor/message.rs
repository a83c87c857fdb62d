//! Transient validation message with a clear deadline

use std::time::{Duration, Instant};

use crate::error::ValidationError;

/// How long a validation message stays up unless configured otherwise
pub const DEFAULT_ERROR_DISPLAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorMessage {
    error: ValidationError,
    expires_at: Instant,
}

impl ErrorMessage {
    pub fn new(error: ValidationError, shown_at: Instant, display_for: Duration) -> Self {
        Self {
            error,
            expires_at: shown_at + display_for,
        }
    }

    pub fn error(&self) -> ValidationError {
        self.error
    }

    pub fn text(&self) -> String {
        self.error.to_string()
    }

    pub fn expires_at(&self) -> Instant {
        self.expires_at
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
