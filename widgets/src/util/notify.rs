//! Transient in-widget notifications.
//!
//! Each widget owns an `RwSignal<Option<Notice>>` rendered by
//! [`crate::components::NoticeBar`]. A notice clears itself after
//! [`NOTICE_MS`] unless a newer one replaced it.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::sync::atomic::{AtomicU64, Ordering};

use leptos::prelude::*;
use toolkit::ToolkitError;

pub const NOTICE_MS: u32 = 3000;

/// Shown for errors that are logged rather than explained.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self { id: NEXT_ID.fetch_add(1, Ordering::Relaxed), level, message: message.into() }
    }

    /// User-facing errors keep their message; the rest are logged and
    /// replaced with [`GENERIC_FAILURE`].
    pub fn from_error(error: &ToolkitError) -> Self {
        if error.is_user_facing() {
            return Self::new(NoticeLevel::Error, error.to_string());
        }
        tracing::error!(error = %error, "widget action failed");
        Self::new(NoticeLevel::Error, GENERIC_FAILURE)
    }

    pub fn class(&self) -> String {
        format!("ebike-notification ebike-notification--{}", self.level.as_str())
    }
}

/// Show `notice` and schedule its removal.
pub fn show(slot: RwSignal<Option<Notice>>, notice: Notice) {
    let id = notice.id;
    slot.set(Some(notice));
    crate::util::timer::after(NOTICE_MS, move || {
        slot.try_update(|current| {
            if current.as_ref().is_some_and(|n| n.id == id) {
                *current = None;
            }
        });
    });
}

pub fn success(slot: RwSignal<Option<Notice>>, message: impl Into<String>) {
    show(slot, Notice::new(NoticeLevel::Success, message));
}

pub fn info(slot: RwSignal<Option<Notice>>, message: impl Into<String>) {
    show(slot, Notice::new(NoticeLevel::Info, message));
}

pub fn error(slot: RwSignal<Option<Notice>>, error: &ToolkitError) {
    show(slot, Notice::from_error(error));
}
