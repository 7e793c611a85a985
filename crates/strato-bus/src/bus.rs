// SPDX-FileCopyrightText: 2026 Strato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The event bus: explicit handler maps, no general-purpose emitter.
//!
//! Two delivery styles exist. Synchronous handlers run in registration order
//! on the emitter's call stack; an error from one aborts delivery and
//! propagates to the `emit` caller. Detached handlers are spawned on the
//! tokio runtime without being awaited; their failures are logged and
//! swallowed. The asymmetry matches the original system's observed behavior
//! and is deliberate.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use futures::future::BoxFuture;
use tracing::warn;

use strato_core::StratoError;

use crate::events::{EventKind, SystemEvent};

/// A synchronous subscriber, invoked on the emitter's call stack.
pub type SyncHandler = Arc<dyn Fn(&SystemEvent) -> Result<(), StratoError> + Send + Sync>;

/// A detached subscriber, spawned without the emitter waiting on it.
pub type DetachedHandler =
    Arc<dyn Fn(SystemEvent) -> BoxFuture<'static, Result<(), StratoError>> + Send + Sync>;

struct SyncEntry {
    handler: SyncHandler,
    once: bool,
}

/// Typed publish/subscribe dispatcher for system-wide occurrences.
///
/// Constructed explicitly and passed by reference to every consumer; there
/// is no process-wide singleton. Handler maps are guarded by mutexes, but
/// handlers themselves run outside the lock so subscribers may re-enter the
/// bus.
pub struct EventBus {
    sync: Mutex<HashMap<EventKind, Vec<SyncEntry>>>,
    detached: Mutex<HashMap<EventKind, Vec<DetachedHandler>>>,
}

fn same_sync(a: &SyncHandler, b: &SyncHandler) -> bool {
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}

fn same_detached(a: &DetachedHandler, b: &DetachedHandler) -> bool {
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}

impl EventBus {
    /// Creates a bus with no subscribers.
    pub fn new() -> Self {
        Self {
            sync: Mutex::new(HashMap::new()),
            detached: Mutex::new(HashMap::new()),
        }
    }

    /// Registers a synchronous handler called on every matching emission.
    pub fn on(&self, kind: EventKind, handler: SyncHandler) {
        self.sync
            .lock()
            .expect("event bus lock poisoned")
            .entry(kind)
            .or_default()
            .push(SyncEntry {
                handler,
                once: false,
            });
    }

    /// Registers a synchronous handler called on the next matching emission only.
    pub fn once(&self, kind: EventKind, handler: SyncHandler) {
        self.sync
            .lock()
            .expect("event bus lock poisoned")
            .entry(kind)
            .or_default()
            .push(SyncEntry {
                handler,
                once: true,
            });
    }

    /// Registers a detached handler. Duplicate registrations of the same
    /// handler (by identity) are ignored.
    pub fn on_detached(&self, kind: EventKind, handler: DetachedHandler) {
        let mut detached = self.detached.lock().expect("event bus lock poisoned");
        let handlers = detached.entry(kind).or_default();
        if handlers.iter().any(|h| same_detached(h, &handler)) {
            return;
        }
        handlers.push(handler);
    }

    /// Removes a synchronous handler (by identity) for one kind.
    pub fn off_sync(&self, kind: EventKind, handler: &SyncHandler) {
        let mut sync = self.sync.lock().expect("event bus lock poisoned");
        if let Some(entries) = sync.get_mut(&kind) {
            entries.retain(|e| !same_sync(&e.handler, handler));
        }
    }

    /// Removes a detached handler (by identity) for one kind.
    pub fn off_detached(&self, kind: EventKind, handler: &DetachedHandler) {
        let mut detached = self.detached.lock().expect("event bus lock poisoned");
        if let Some(handlers) = detached.get_mut(&kind) {
            handlers.retain(|h| !same_detached(h, handler));
        }
    }

    /// Clears all handlers for one kind, or for every kind if `None`.
    pub fn remove_all_listeners(&self, kind: Option<EventKind>) {
        let mut sync = self.sync.lock().expect("event bus lock poisoned");
        let mut detached = self.detached.lock().expect("event bus lock poisoned");
        match kind {
            Some(kind) => {
                sync.remove(&kind);
                detached.remove(&kind);
            }
            None => {
                sync.clear();
                detached.clear();
            }
        }
    }

    /// The sum of synchronous and detached handler counts for `kind`.
    pub fn listener_count(&self, kind: EventKind) -> usize {
        let sync = self
            .sync
            .lock()
            .expect("event bus lock poisoned")
            .get(&kind)
            .map_or(0, Vec::len);
        let detached = self
            .detached
            .lock()
            .expect("event bus lock poisoned")
            .get(&kind)
            .map_or(0, Vec::len);
        sync + detached
    }

    /// Delivers an event to all subscribers of its kind.
    ///
    /// Synchronous handlers run first, in registration order; the first
    /// error aborts delivery (detached handlers included) and propagates to
    /// the caller. `once` handlers are removed before invocation. Detached
    /// handlers are then spawned fire-and-forget; each failure is caught and
    /// logged. Emitting with zero subscribers is a no-op.
    ///
    /// Must be called from within a tokio runtime whenever detached
    /// handlers are registered for the kind.
    pub fn emit(&self, event: SystemEvent) -> Result<(), StratoError> {
        let kind = event.kind();

        // Snapshot the sync handlers and drop once-entries, releasing the
        // lock before any handler runs.
        let fired: Vec<SyncHandler> = {
            let mut sync = self.sync.lock().expect("event bus lock poisoned");
            match sync.get_mut(&kind) {
                Some(entries) => {
                    let fired = entries.iter().map(|e| Arc::clone(&e.handler)).collect();
                    entries.retain(|e| !e.once);
                    fired
                }
                None => Vec::new(),
            }
        };

        for handler in &fired {
            handler(&event)?;
        }

        let detached: Vec<DetachedHandler> = self
            .detached
            .lock()
            .expect("event bus lock poisoned")
            .get(&kind)
            .map(|handlers| handlers.iter().map(Arc::clone).collect())
            .unwrap_or_default();

        for handler in detached {
            let event = event.clone();
            tokio::spawn(async move {
                if let Err(error) = handler(event.clone()).await {
                    warn!(kind = %event.kind(), %error, "detached event handler failed");
                }
            });
        }

        Ok(())
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use futures::FutureExt;

    fn ready_event() -> SystemEvent {
        SystemEvent::SystemReady { plugin_count: 1 }
    }

    fn counting_handler(counter: Arc<AtomicUsize>) -> SyncHandler {
        Arc::new(move |_event| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    }

    #[tokio::test]
    async fn emit_with_no_handlers_is_a_noop() {
        let bus = EventBus::new();
        assert!(bus.emit(ready_event()).is_ok());
    }

    #[tokio::test]
    async fn sync_handlers_run_in_registration_order() {
        let bus = EventBus::new();
        let order: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));

        for label in ["first", "second", "third"] {
            let order = Arc::clone(&order);
            bus.on(
                EventKind::SystemReady,
                Arc::new(move |_| {
                    order.lock().unwrap().push(label);
                    Ok(())
                }),
            );
        }

        bus.emit(ready_event()).unwrap();
        assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn sync_handler_error_propagates_and_aborts_delivery() {
        let bus = EventBus::new();
        let later = Arc::new(AtomicUsize::new(0));

        bus.on(
            EventKind::SystemReady,
            Arc::new(|_| Err(StratoError::Internal("subscriber blew up".into()))),
        );
        bus.on(EventKind::SystemReady, counting_handler(Arc::clone(&later)));

        let err = bus.emit(ready_event()).unwrap_err();
        assert!(err.to_string().contains("subscriber blew up"));
        assert_eq!(later.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn once_handler_fires_exactly_one_time() {
        let bus = EventBus::new();
        let count = Arc::new(AtomicUsize::new(0));
        bus.once(EventKind::SystemReady, counting_handler(Arc::clone(&count)));

        bus.emit(ready_event()).unwrap();
        bus.emit(ready_event()).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(bus.listener_count(EventKind::SystemReady), 0);
    }

    #[tokio::test]
    async fn detached_handlers_are_deduplicated_by_identity() {
        let bus = EventBus::new();
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let handler: DetachedHandler = Arc::new(move |_event| {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
            .boxed()
        });

        bus.on_detached(EventKind::SystemReady, Arc::clone(&handler));
        bus.on_detached(EventKind::SystemReady, Arc::clone(&handler));
        assert_eq!(bus.listener_count(EventKind::SystemReady), 1);

        bus.emit(ready_event()).unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn detached_failure_is_swallowed_and_others_still_run() {
        let bus = EventBus::new();
        let ran = Arc::new(AtomicUsize::new(0));

        bus.on_detached(
            EventKind::SystemReady,
            Arc::new(|_event| {
                async { Err(StratoError::Internal("detached failure".into())) }.boxed()
            }),
        );
        let counter = Arc::clone(&ran);
        bus.on_detached(
            EventKind::SystemReady,
            Arc::new(move |_event| {
                let counter = Arc::clone(&counter);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                }
                .boxed()
            }),
        );
        bus.on(EventKind::SystemReady, counting_handler(Arc::clone(&ran)));

        // The emitter returns normally despite the failing detached handler.
        bus.emit(ready_event()).unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(ran.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn off_removes_handlers_by_identity() {
        let bus = EventBus::new();
        let count = Arc::new(AtomicUsize::new(0));
        let handler = counting_handler(Arc::clone(&count));

        bus.on(EventKind::SystemReady, Arc::clone(&handler));
        bus.off_sync(EventKind::SystemReady, &handler);
        bus.emit(ready_event()).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 0);

        let detached: DetachedHandler = Arc::new(|_event| async { Ok(()) }.boxed());
        bus.on_detached(EventKind::SystemReady, Arc::clone(&detached));
        assert_eq!(bus.listener_count(EventKind::SystemReady), 1);
        bus.off_detached(EventKind::SystemReady, &detached);
        assert_eq!(bus.listener_count(EventKind::SystemReady), 0);
    }

    #[tokio::test]
    async fn remove_all_listeners_for_one_kind_and_for_all() {
        let bus = EventBus::new();
        let count = Arc::new(AtomicUsize::new(0));
        bus.on(EventKind::SystemReady, counting_handler(Arc::clone(&count)));
        bus.on(EventKind::JobCreated, counting_handler(Arc::clone(&count)));

        bus.remove_all_listeners(Some(EventKind::SystemReady));
        assert_eq!(bus.listener_count(EventKind::SystemReady), 0);
        assert_eq!(bus.listener_count(EventKind::JobCreated), 1);

        bus.remove_all_listeners(None);
        assert_eq!(bus.listener_count(EventKind::JobCreated), 0);
    }

    #[tokio::test]
    async fn listener_count_sums_sync_and_detached() {
        let bus = EventBus::new();
        let count = Arc::new(AtomicUsize::new(0));
        bus.on(EventKind::TaskStarted, counting_handler(Arc::clone(&count)));
        bus.on_detached(
            EventKind::TaskStarted,
            Arc::new(|_event| async { Ok(()) }.boxed()),
        );
        assert_eq!(bus.listener_count(EventKind::TaskStarted), 2);
        assert_eq!(bus.listener_count(EventKind::TaskCompleted), 0);
    }
}
