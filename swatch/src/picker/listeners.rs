//! Screen-wide listeners a picker holds only while it is open.
//!
//! A [`ListenerRegistry`] is shared between a host and every picker it
//! shows. Opening a picker subscribes it for outside pointer presses and
//! key presses; the returned [`Subscription`]s unsubscribe on drop, so
//! closing or dropping the picker always tears them down.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock, Weak};

use crate::event::{Key, Modifiers};

/// Unique identifier for a picker instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PickerId(usize);

impl PickerId {
    pub(crate) fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for PickerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__picker_{}", self.0)
    }
}

/// An event seen by the whole screen rather than one widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalEvent {
    PointerDown { x: u16, y: u16 },
    Key { key: Key, modifiers: Modifiers },
}

impl GlobalEvent {
    fn kind(&self) -> ListenerKind {
        match self {
            Self::PointerDown { .. } => ListenerKind::PointerDown,
            Self::Key { .. } => ListenerKind::Key,
        }
    }
}

/// What a listener wants to hear about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    PointerDown,
    Key,
}

#[derive(Debug)]
struct Listener {
    id: usize,
    owner: PickerId,
    kind: ListenerKind,
}

#[derive(Debug, Default)]
struct ListenerTable {
    next_id: usize,
    listeners: Vec<Listener>,
}

/// Shared table of active screen-wide listeners.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    inner: Arc<RwLock<ListenerTable>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `owner` for events of `kind`. The listener lives as long as
    /// the returned subscription.
    ///
    /// If the registry lock is poisoned nothing is registered and the
    /// subscription is inert.
    pub fn subscribe(&self, owner: PickerId, kind: ListenerKind) -> Subscription {
        let id = match self.inner.write() {
            Ok(mut table) => {
                let id = table.next_id;
                table.next_id += 1;
                table.listeners.push(Listener { id, owner, kind });
                log::trace!("{owner} subscribed to {kind:?} (listener {id})");
                Some(id)
            }
            Err(_) => {
                log::warn!("{owner} could not subscribe to {kind:?}: registry poisoned");
                None
            }
        };
        Subscription {
            id,
            registry: Arc::downgrade(&self.inner),
        }
    }

    /// Number of live listeners.
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .map(|table| table.listeners.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pickers that should be told about `event`.
    pub fn subscribers(&self, event: &GlobalEvent) -> Vec<PickerId> {
        let kind = event.kind();
        self.inner
            .read()
            .map(|table| {
                table
                    .listeners
                    .iter()
                    .filter(|l| l.kind == kind)
                    .map(|l| l.owner)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether `owner` currently listens for `kind`.
    pub fn is_subscribed(&self, owner: PickerId, kind: ListenerKind) -> bool {
        self.inner
            .read()
            .map(|table| {
                table
                    .listeners
                    .iter()
                    .any(|l| l.owner == owner && l.kind == kind)
            })
            .unwrap_or(false)
    }
}

/// Keeps one listener registered. Dropping it unregisters the listener.
#[derive(Debug)]
pub struct Subscription {
    id: Option<usize>,
    registry: Weak<RwLock<ListenerTable>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(id) = self.id else {
            return;
        };
        let Some(inner) = self.registry.upgrade() else {
            return;
        };
        if let Ok(mut table) = inner.write() {
            table.listeners.retain(|l| l.id != id);
        }
    }
}

impl Subscription {
    /// Whether a listener was actually registered.
    pub fn is_active(&self) -> bool {
        self.id.is_some()
    }
}

/// The pair of listeners an open picker holds.
#[derive(Debug)]
pub(crate) struct DismissListeners {
    _pointer: Subscription,
    _key: Subscription,
}

impl DismissListeners {
    pub(crate) fn install(registry: &ListenerRegistry, owner: PickerId) -> Self {
        Self {
            _pointer: registry.subscribe(owner, ListenerKind::PointerDown),
            _key: registry.subscribe(owner, ListenerKind::Key),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::PoisonError;

    use super::*;

    fn poison(registry: &ListenerRegistry) {
        let inner = Arc::clone(&registry.inner);
        let _ = std::thread::spawn(move || {
            let _guard = inner.write().unwrap();
            panic!("writer panicked while holding the registry");
        })
        .join();
    }

    fn live_listeners(registry: &ListenerRegistry) -> usize {
        registry
            .inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .listeners
            .len()
    }

    #[test]
    fn test_subscription_drop_unregisters() {
        let registry = ListenerRegistry::new();
        let subscription = registry.subscribe(PickerId::new(), ListenerKind::Key);
        assert!(subscription.is_active());
        assert_eq!(registry.len(), 1);

        drop(subscription);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_poisoned_registry_gives_inert_subscription() {
        let registry = ListenerRegistry::new();
        let first = registry.subscribe(PickerId::new(), ListenerKind::PointerDown);
        assert!(first.is_active());

        poison(&registry);
        let inert = registry.subscribe(PickerId::new(), ListenerKind::PointerDown);
        assert!(!inert.is_active());

        // Dropping the inert subscription must not remove listener 0
        drop(inert);
        assert_eq!(live_listeners(&registry), 1);
    }
}
