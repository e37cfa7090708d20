use std::time::{Duration, Instant};

pub const TOAST_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
    pub shown_at: Instant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastNotice {
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

impl ToastNotice {
    pub fn new(kind: ToastKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, title, message)
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, title, message)
    }
}

/// Notifications currently on screen, oldest first.
#[derive(Debug, Default, Clone)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, notice: ToastNotice, now: Instant) -> u64 {
        self.next_id += 1;
        self.toasts.push(Toast {
            id: self.next_id,
            kind: notice.kind,
            title: notice.title,
            message: notice.message,
            shown_at: now,
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    /// Drops toasts that have been visible for at least [`TOAST_TTL`].
    pub fn expire(&mut self, now: Instant) {
        self.toasts
            .retain(|toast| now.saturating_duration_since(toast.shown_at) < TOAST_TTL);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}
