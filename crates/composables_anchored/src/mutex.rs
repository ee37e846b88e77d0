//! Priority drag mutex
//!
//! Serializes every writer of a draggable's offset. At most one mutator is
//! active at a time:
//!
//! - A request with a priority greater than or equal to the active mutator's
//!   cancels it and takes over as soon as the old block has released the lock.
//! - A request with a lower priority waits until the active mutator finishes.
//!
//! Cancellation is cooperative: the superseded block's future is dropped at its
//! next suspension point, so anything it already wrote stays as written.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use thiserror::Error;
use tokio::sync::{watch, Notify};

/// Priority of a drag mutation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MutatePriority {
    /// Programmatic moves: settle, snap, animate
    #[default]
    Default,
    /// Moves driven by the user's pointer
    UserInput,
    /// Programmatic moves that user input must not interrupt
    PreventUserInput,
}

/// The mutation was superseded by another one before it completed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("drag mutation was superseded by a newer mutation")]
pub struct Cancelled;

struct Mutator {
    id: u64,
    priority: MutatePriority,
    cancel: Arc<watch::Sender<bool>>,
}

/// Mutual exclusion with priority preemption for drag campaigns
pub struct DragMutex {
    current: Mutex<Option<Mutator>>,
    lock: tokio::sync::Mutex<()>,
    released: Notify,
    next_id: AtomicU64,
}

impl DragMutex {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(None),
            lock: tokio::sync::Mutex::new(()),
            released: Notify::new(),
            next_id: AtomicU64::new(0),
        }
    }

    /// Whether a mutator currently owns the mutex
    pub fn is_active(&self) -> bool {
        self.slot().is_some()
    }

    /// Priority of the active mutator, if any
    pub fn active_priority(&self) -> Option<MutatePriority> {
        self.slot().as_ref().map(|mutator| mutator.priority)
    }

    /// Run `block` with exclusive access
    ///
    /// Returns `Err(Cancelled)` if a request of equal or higher priority took
    /// over before `block` completed.
    pub async fn mutate<R, F, Fut>(&self, priority: MutatePriority, block: F) -> Result<R, Cancelled>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = R>,
    {
        let (id, cancel) = self.install(priority).await;
        let _slot = SlotGuard { mutex: self, id };
        let mut cancelled = cancel.subscribe();

        tokio::select! {
            biased;
            _ = cancelled.wait_for(|cancelled| *cancelled) => {
                tracing::debug!(id, ?priority, "drag mutation superseded");
                Err(Cancelled)
            }
            output = async {
                let _guard = self.lock.lock().await;
                block().await
            } => Ok(output),
        }
    }

    /// Run `block` only if the mutex is free right now
    ///
    /// Never waits and never cancels anyone. Returns `None` without running
    /// `block` when another mutator is active.
    pub fn try_mutate<R>(&self, block: impl FnOnce() -> R) -> Option<R> {
        if self.is_active() {
            return None;
        }
        let _guard = self.lock.try_lock().ok()?;
        Some(block())
    }

    /// Claim the mutator slot, cancelling a mutator we may interrupt and
    /// waiting out one we may not.
    async fn install(&self, priority: MutatePriority) -> (u64, Arc<watch::Sender<bool>>) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (cancel, _) = watch::channel(false);
        let cancel = Arc::new(cancel);

        loop {
            let released = self.released.notified();
            tokio::pin!(released);
            released.as_mut().enable();

            {
                let mut slot = self.slot();
                let can_interrupt = slot
                    .as_ref()
                    .map_or(true, |active| priority >= active.priority);
                if can_interrupt {
                    let previous = slot.replace(Mutator {
                        id,
                        priority,
                        cancel: Arc::clone(&cancel),
                    });
                    if let Some(previous) = previous {
                        tracing::trace!(
                            id,
                            cancelled = previous.id,
                            ?priority,
                            "preempting active drag mutation"
                        );
                        previous.cancel.send_replace(true);
                    }
                    return (id, cancel);
                }
                tracing::trace!(id, ?priority, "waiting for higher priority drag mutation");
            }

            released.await;
        }
    }

    fn slot(&self) -> MutexGuard<'_, Option<Mutator>> {
        // The slot only ever holds a fully built value, so a poisoned lock is still usable
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for DragMutex {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DragMutex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragMutex")
            .field("active_priority", &self.active_priority())
            .finish()
    }
}

/// Frees the slot when its mutation ends, unless someone already took it over
struct SlotGuard<'a> {
    mutex: &'a DragMutex,
    id: u64,
}

impl Drop for SlotGuard<'_> {
    fn drop(&mut self) {
        let mut slot = self.mutex.slot();
        if slot.as_ref().is_some_and(|mutator| mutator.id == self.id) {
            *slot = None;
        }
        drop(slot);
        self.mutex.released.notify_waiters();
    }
}
