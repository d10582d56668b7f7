//! Transient notification state.
//!
//! Wall-clock based like the rest of the stores: there is no internal timer.
//! The caller asks for the state at a given instant.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// How long a toast stays visible unless told otherwise.
pub const DEFAULT_TOAST_MS: u64 = 3000;

/// What a front end renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ToastState {
    pub message: String,
    pub visible: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Toast {
    message: String,
    shown_at: Option<DateTime<Utc>>,
    duration_ms: u64,
}

impl Toast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message` for [`DEFAULT_TOAST_MS`].
    pub fn show(&mut self, message: impl Into<String>) {
        self.show_for(message, DEFAULT_TOAST_MS);
    }

    pub fn show_for(&mut self, message: impl Into<String>, duration_ms: u64) {
        self.show_at(message, duration_ms, Utc::now());
    }

    /// Show `message` starting at `now`. Replaces any current toast.
    pub fn show_at(&mut self, message: impl Into<String>, duration_ms: u64, now: DateTime<Utc>) {
        self.message = message.into();
        self.shown_at = Some(now);
        self.duration_ms = duration_ms;
    }

    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        let Some(shown_at) = self.shown_at else {
            return false;
        };
        let elapsed = (now - shown_at).num_milliseconds();
        elapsed >= 0 && (elapsed as u64) < self.duration_ms
    }

    /// State at `now`. The message is kept after the toast hides.
    pub fn state_at(&self, now: DateTime<Utc>) -> ToastState {
        ToastState {
            message: self.message.clone(),
            visible: self.is_visible_at(now),
        }
    }

    pub fn state(&self) -> ToastState {
        self.state_at(Utc::now())
    }
}
