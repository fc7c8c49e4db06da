use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::{broadcast, Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info, trace};

use super::types::{DismissReason, Toast, ToastId, ToastInput};
use tradelog_core::config::NotificationConfig;

/// Read-only snapshot of the active toast list, newest first. Subscribers
/// share the allocation; they must not (and cannot) mutate it.
pub type ToastSnapshot = Arc<[Toast]>;

// --- ToastService Trait ---

/// The single source of truth for currently active toasts.
///
/// Construct one [`DefaultToastService`] at application startup and share
/// it behind an `Arc`; all mutation goes through this interface.
#[async_trait]
pub trait ToastService: Send + Sync {
    /// Builds a full [`Toast`] from the input, prepends it to the active
    /// list, publishes the new snapshot, and schedules auto-dismissal
    /// after the toast's time-to-live. Returns a handle for dismissing
    /// the toast early.
    async fn enqueue(&self, input: ToastInput) -> ToastHandle;

    /// Removes the toast with the given id, if it is still active, and
    /// publishes the updated snapshot. Unknown or already-removed ids are
    /// a no-op.
    async fn dismiss(&self, id: ToastId);

    /// Removes every active toast at once, publishing a single empty
    /// snapshot. No-op on an empty stack.
    async fn dismiss_all(&self);

    /// The current active list, newest first. Subscription does not
    /// replay state, so consumers read their initial state here.
    async fn active_toasts(&self) -> Vec<Toast>;

    /// Subscribes to list snapshots. Every mutation delivers the full
    /// updated list; dropping the receiver is the unsubscribe.
    fn subscribe(&self) -> broadcast::Receiver<ToastSnapshot>;
}

// --- DefaultToastService Implementation ---

/// State shared between the service, its expiry tasks, and the handles
/// given out by [`ToastService::enqueue`].
struct StoreShared {
    /// Active toasts, newest first.
    active: RwLock<Vec<Toast>>,
    /// Pending auto-dismissal tasks, keyed by toast id.
    expiry_tasks: Mutex<HashMap<ToastId, JoinHandle<()>>>,
    publisher: broadcast::Sender<ToastSnapshot>,
}

impl StoreShared {
    /// Publishes the current list to all subscribers. Callers must hold
    /// the active-list write lock, so snapshots map 1:1 onto mutations
    /// and arrive in mutation order.
    fn publish_locked(&self, active: &[Toast]) {
        let snapshot: ToastSnapshot = active.iter().cloned().collect();
        if self.publisher.send(snapshot).is_err() {
            debug!("Toast snapshot published with no active subscribers");
        }
    }

    async fn remove(&self, id: ToastId, reason: DismissReason) {
        // An explicit dismissal cancels the pending expiry task. The
        // expiry path only drops its own map entry: a task must not
        // abort itself while the removal is still in front of it.
        if let Some(task) = self.expiry_tasks.lock().await.remove(&id) {
            if reason != DismissReason::Expired {
                task.abort();
            }
        }

        let mut active = self.active.write().await;
        let len_before = active.len();
        active.retain(|toast| toast.id != id);
        if active.len() == len_before {
            trace!("Dismissal of unknown or already removed {} ignored", id);
            return;
        }
        debug!("Toast {} removed ({:?})", id, reason);
        self.publish_locked(&active);
    }
}

pub struct DefaultToastService {
    shared: Arc<StoreShared>,
    next_id: AtomicU64,
    config: NotificationConfig,
}

impl DefaultToastService {
    pub fn new(config: NotificationConfig) -> Self {
        // The loader rejects a zero event_buffer; guard against
        // hand-built configs, since a zero-capacity channel cannot exist.
        let (publisher, _) = broadcast::channel(config.event_buffer.max(1));
        Self {
            shared: Arc::new(StoreShared {
                active: RwLock::new(Vec::new()),
                expiry_tasks: Mutex::new(HashMap::new()),
                publisher,
            }),
            next_id: AtomicU64::new(1),
            config,
        }
    }

    fn next_id(&self) -> ToastId {
        ToastId(self.next_id.fetch_add(1, Ordering::Relaxed))
    }
}

#[async_trait]
impl ToastService for DefaultToastService {
    async fn enqueue(&self, input: ToastInput) -> ToastHandle {
        let id = self.next_id();
        let default_duration = Duration::from_millis(self.config.default_duration_ms);
        let toast = Toast::new(input, id, default_duration, Utc::now());
        let duration = toast.duration;
        let variant = toast.variant;

        // Eviction is part of the enqueue mutation: one snapshot covers
        // both the insertion and the displaced oldest entry.
        let mut evicted: Option<Toast> = None;
        {
            let mut active = self.shared.active.write().await;
            if self.config.max_active > 0 && active.len() >= self.config.max_active {
                evicted = active.pop();
            }
            active.insert(0, toast);
            self.shared.publish_locked(&active);
        }

        {
            let mut tasks = self.shared.expiry_tasks.lock().await;
            if let Some(victim) = &evicted {
                if let Some(task) = tasks.remove(&victim.id) {
                    task.abort();
                }
            }
            let shared = Arc::clone(&self.shared);
            let expiry = tokio::spawn(async move {
                tokio::time::sleep(duration).await;
                shared.remove(id, DismissReason::Expired).await;
            });
            tasks.insert(id, expiry);
        }

        if let Some(victim) = evicted {
            debug!(
                "Toast {} evicted ({:?}); stack capped at {} entries",
                victim.id,
                DismissReason::Evicted,
                self.config.max_active
            );
        }
        info!("Toast {} enqueued ({:?}, ttl {:?})", id, variant, duration);

        ToastHandle {
            id,
            shared: Arc::clone(&self.shared),
        }
    }

    async fn dismiss(&self, id: ToastId) {
        self.shared.remove(id, DismissReason::ByUser).await;
    }

    async fn dismiss_all(&self) {
        {
            let mut tasks = self.shared.expiry_tasks.lock().await;
            for (_, task) in tasks.drain() {
                task.abort();
            }
        }

        let mut active = self.shared.active.write().await;
        if active.is_empty() {
            trace!("dismiss_all on an empty toast stack ignored");
            return;
        }
        let count = active.len();
        active.clear();
        self.shared.publish_locked(&active);
        debug!("Toast stack cleared, {} toast(s) removed ({:?})", count, DismissReason::Cleared);
    }

    async fn active_toasts(&self) -> Vec<Toast> {
        self.shared.active.read().await.clone()
    }

    fn subscribe(&self) -> broadcast::Receiver<ToastSnapshot> {
        self.shared.publisher.subscribe()
    }
}

// --- ToastHandle ---

/// Handle returned by [`ToastService::enqueue`]: the generated id paired
/// with an early-dismissal hook bound to it.
#[derive(Clone)]
pub struct ToastHandle {
    id: ToastId,
    shared: Arc<StoreShared>,
}

impl ToastHandle {
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Dismisses the toast ahead of its expiry, cancelling the pending
    /// auto-dismissal. Idempotent.
    pub async fn dismiss(&self) {
        self.shared.remove(self.id, DismissReason::ByUser).await;
    }
}

impl fmt::Debug for ToastHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastHandle").field("id", &self.id).finish()
    }
}
