//! Transient notification state.

use std::time::{Duration, Instant};

/// Severity of a toast, which picks its colour and title.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastType {
    Info,
    Success,
    Warning,
    Error,
}

/// A notification shown over the dashboard until it expires.
#[derive(Clone, Debug)]
pub struct Toast {
    pub message: String,
    pub toast_type: ToastType,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, toast_type: ToastType, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            toast_type,
            expires_at: Instant::now() + ttl,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expiry() {
        let toast = Toast::new("Saved", ToastType::Success, Duration::from_secs(3));
        assert!(!toast.is_expired(Instant::now()));
        assert!(toast.is_expired(toast.expires_at));
        assert!(toast.is_expired(toast.expires_at + Duration::from_millis(1)));
    }
}
