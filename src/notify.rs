//! Toast Notifications
//!
//! Transient messages that remove themselves after a fixed delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
    Warning,
    Info,
}

impl Level {
    pub fn icon(self) -> &'static str {
        match self {
            Level::Success => "✅",
            Level::Error => "❌",
            Level::Warning => "⚠️",
            Level::Info => "ℹ️",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Level::Success => "notification notification-success",
            Level::Error => "notification notification-error",
            Level::Warning => "notification notification-warning",
            Level::Info => "notification notification-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub level: Level,
    pub message: String,
}

/// Toasts currently on screen, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u32,
}

impl ToastQueue {
    pub fn push(&mut self, level: Level, message: String) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, level, message });
        id
    }

    /// Remove a toast; a toast already closed by hand is a no-op
    pub fn remove(&mut self, id: u32) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Handle for showing toasts, provided via context
#[derive(Clone, Copy)]
pub struct Notifications {
    queue: RwSignal<ToastQueue>,
    duration_ms: u32,
}

impl Notifications {
    pub fn new(duration_ms: u32) -> Self {
        Self { queue: RwSignal::new(ToastQueue::default()), duration_ms }
    }

    pub fn show(&self, level: Level, message: impl Into<String>) {
        let mut id = 0;
        let message = message.into();
        self.queue.update(|q| id = q.push(level, message));

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(this.duration_ms).await;
            this.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u32) {
        self.queue.update(|q| q.remove(id));
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|q| q.toasts().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icons() {
        assert_eq!(Level::Success.icon(), "✅");
        assert_eq!(Level::Error.icon(), "❌");
        assert_eq!(Level::Warning.icon(), "⚠️");
        assert_eq!(Level::Info.icon(), "ℹ️");
    }

    #[test]
    fn test_queue_ids_are_unique() {
        let mut queue = ToastQueue::default();
        let a = queue.push(Level::Info, "one".into());
        let b = queue.push(Level::Error, "two".into());
        assert_ne!(a, b);
        assert_eq!(queue.toasts().len(), 2);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut queue = ToastQueue::default();
        let a = queue.push(Level::Info, "one".into());
        let b = queue.push(Level::Warning, "two".into());
        queue.remove(a);
        queue.remove(a);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, b);
    }
}
