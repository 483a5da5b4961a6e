//! Transient toast messages.

use chrono::{DateTime, Duration, Utc};

/// Message shown by the `toast` action when none is supplied.
pub const DEFAULT_TOAST_MESSAGE: &str = "تمت العملية بنجاح";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastState {
    Normal,
    Danger,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub state: ToastState,
    pub shown_at: DateTime<Utc>,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, state: ToastState, duration_ms: u64) -> Self {
        Self::at(message, state, duration_ms, Utc::now())
    }

    pub fn at(
        message: impl Into<String>,
        state: ToastState,
        duration_ms: u64,
        shown_at: DateTime<Utc>,
    ) -> Self {
        Self {
            message: message.into(),
            state,
            shown_at,
            duration: Duration::milliseconds(i64::from(u32::try_from(duration_ms).unwrap_or(u32::MAX))),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.shown_at >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expires_after_duration() {
        let start = Utc::now();
        let toast = Toast::at("saved", ToastState::Normal, 1600, start);
        assert!(!toast.is_expired(start + Duration::milliseconds(1599)));
        assert!(toast.is_expired(start + Duration::milliseconds(1600)));
    }
}
