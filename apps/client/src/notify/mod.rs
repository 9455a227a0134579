#![allow(dead_code)]

//! Notification presenter — the single channel for transient user-facing
//! messages. At most one notice is active at a time: a new notice evicts the
//! prior one immediately instead of stacking. Each notice auto-dismisses
//! after a fixed duration unless dismissed first; dismissal is idempotent.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;
use uuid::Uuid;

/// How long a notice stays visible before auto-dismissing.
const DISMISS_AFTER: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub id: Uuid,
    pub kind: NoticeKind,
    pub message: String,
    pub posted_at: DateTime<Utc>,
}

struct ActiveNotice {
    notice: Notice,
    timer: JoinHandle<()>,
}

/// Cloneable handle to the single active-notice slot.
#[derive(Clone)]
pub struct Notifier {
    slot: Arc<Mutex<Option<ActiveNotice>>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
        }
    }

    /// Posts a notice, evicting any prior one (its timer is canceled).
    /// Returns the notice id for manual dismissal.
    pub fn notify(&self, kind: NoticeKind, message: impl Into<String>) -> Uuid {
        let notice = Notice {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            posted_at: Utc::now(),
        };
        let id = notice.id;

        let slot = Arc::clone(&self.slot);
        let timer = tokio::spawn(async move {
            tokio::time::sleep(DISMISS_AFTER).await;
            let mut guard = slot.lock().expect("notice slot poisoned");
            // Only dismiss if this notice is still the active one.
            if guard.as_ref().map(|a| a.notice.id) == Some(id) {
                *guard = None;
            }
        });

        let mut guard = self.slot.lock().expect("notice slot poisoned");
        if let Some(prev) = guard.replace(ActiveNotice { notice, timer }) {
            prev.timer.abort();
        }
        id
    }

    pub fn success(&self, message: impl Into<String>) -> Uuid {
        self.notify(NoticeKind::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> Uuid {
        self.notify(NoticeKind::Error, message)
    }

    pub fn warning(&self, message: impl Into<String>) -> Uuid {
        self.notify(NoticeKind::Warning, message)
    }

    pub fn info(&self, message: impl Into<String>) -> Uuid {
        self.notify(NoticeKind::Info, message)
    }

    /// Dismisses the notice with the given id if it is still active.
    /// Dismissing an already-gone notice is a no-op.
    pub fn dismiss(&self, id: Uuid) {
        let mut guard = self.slot.lock().expect("notice slot poisoned");
        if guard.as_ref().map(|a| a.notice.id) == Some(id) {
            if let Some(active) = guard.take() {
                active.timer.abort();
            }
        }
    }

    /// The currently visible notice, if any.
    pub fn active(&self) -> Option<Notice> {
        self.slot
            .lock()
            .expect("notice slot poisoned")
            .as_ref()
            .map(|a| a.notice.clone())
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_notice_auto_dismisses() {
        let notifier = Notifier::new();
        notifier.success("Settings saved");
        assert!(notifier.active().is_some());

        tokio::time::sleep(DISMISS_AFTER + Duration::from_millis(100)).await;
        assert!(notifier.active().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_notice_evicts_prior() {
        let notifier = Notifier::new();
        let first = notifier.info("first");
        let second = notifier.error("second");
        assert_ne!(first, second);

        let active = notifier.active().expect("a notice should be active");
        assert_eq!(active.id, second);
        assert_eq!(active.message, "second");
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_is_idempotent() {
        let notifier = Notifier::new();
        let id = notifier.warning("heads up");
        notifier.dismiss(id);
        assert!(notifier.active().is_none());
        // Second dismiss of the same id must not panic or disturb anything.
        notifier.dismiss(id);
        assert!(notifier.active().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismissing_stale_id_leaves_active_notice() {
        let notifier = Notifier::new();
        let old = notifier.info("old");
        let current = notifier.info("current");
        notifier.dismiss(old);
        assert_eq!(notifier.active().map(|n| n.id), Some(current));
    }

    #[tokio::test(start_paused = true)]
    async fn test_evicted_timer_does_not_dismiss_replacement() {
        let notifier = Notifier::new();
        notifier.info("first");
        // Just before the first notice would expire, replace it.
        tokio::time::sleep(DISMISS_AFTER - Duration::from_millis(100)).await;
        notifier.info("second");
        // Past the first timer's deadline: the second must still be visible.
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(
            notifier.active().map(|n| n.message),
            Some("second".to_string())
        );
    }
}
