#![allow(dead_code)]

//! Transient "password changed" indicator: a timed state machine
//! `Idle -> Changed(expires_at) -> Idle` driven by a single scheduled task.
//! A new change before expiry re-arms the window; the stale task is both
//! aborted and generation-checked so it can never clear a newer state.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;

/// How long the indicator stays set after a successful password change.
pub const CHANGED_WINDOW: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flag {
    Idle,
    Changed { generation: u64 },
}

struct Inner {
    flag: Flag,
    generation: u64,
    expires_at: Option<Instant>,
}

/// Owned by the settings manager; shared with its timer task.
pub struct ChangedFlag {
    inner: Arc<Mutex<Inner>>,
    timer: Mutex<Option<JoinHandle<()>>>,
}

impl ChangedFlag {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                flag: Flag::Idle,
                generation: 0,
                expires_at: None,
            })),
            timer: Mutex::new(None),
        }
    }

    /// Marks the flag set and schedules the clear. Cancels any prior timer so
    /// tests never observe a leaked task clearing a re-armed flag.
    pub fn mark_changed(&self) {
        let generation = {
            let mut inner = self.inner.lock().expect("changed flag poisoned");
            inner.generation += 1;
            inner.flag = Flag::Changed {
                generation: inner.generation,
            };
            inner.expires_at = Some(Instant::now() + CHANGED_WINDOW);
            inner.generation
        };

        let inner = Arc::clone(&self.inner);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(CHANGED_WINDOW).await;
            let mut inner = inner.lock().expect("changed flag poisoned");
            if inner.flag == (Flag::Changed { generation }) {
                inner.flag = Flag::Idle;
                inner.expires_at = None;
            }
        });

        let mut timer = self.timer.lock().expect("changed flag timer poisoned");
        if let Some(prev) = timer.replace(handle) {
            prev.abort();
        }
    }

    pub fn is_changed(&self) -> bool {
        matches!(
            self.inner.lock().expect("changed flag poisoned").flag,
            Flag::Changed { .. }
        )
    }
}

impl Default for ChangedFlag {
    fn default() -> Self {
        Self::new()
    }
}
