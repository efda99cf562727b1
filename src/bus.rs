//! Synchronization bus between editors and live views.
//!
//! A typed publish/subscribe channel scoped to one process. Editors publish
//! the complete new record after storing it; live views subscribe on mount
//! and drop their [`Subscription`] on teardown.
//!
//! # Delivery
//!
//! - `publish` runs every handler of the topic before it returns, in
//!   subscription order.
//! - A panicking handler is contained and logged; its siblings still run.
//! - Handlers may subscribe or unsubscribe while a publish is in flight;
//!   the change applies from the next publish on.
//!
//! The store stays the source of truth. A view that misses a publish still
//! reads the latest value on its next mount.
//!
//! # Example
//!
//! ```ignore
//! let bus = SyncBus::new();
//! let _sub = bus.subscribe(|gallery: &Gallery| println!("{} materials", gallery.len()));
//! bus.publish(&gallery);
//! ```

use crate::{
    content::{Content, Topic},
    log,
};
use parking_lot::RwLock;
use std::{
    any::Any,
    collections::BTreeMap,
    panic::{AssertUnwindSafe, catch_unwind},
    sync::{
        Arc, Weak,
        atomic::{AtomicU64, Ordering},
    },
};

/// A unique identifier for a subscription.
pub type SubscriptionId = u64;

/// Type-erased handler; the typed wrapper downcasts the payload.
type Handler = Arc<dyn Fn(&dyn Any) + Send + Sync>;

#[derive(Default)]
struct Registry {
    /// Per topic, handlers in subscription order.
    topics: RwLock<BTreeMap<Topic, Vec<(SubscriptionId, Handler)>>>,
    next_id: AtomicU64,
}

impl Registry {
    fn remove(&self, topic: Topic, id: SubscriptionId) -> bool {
        let mut topics = self.topics.write();
        let Some(handlers) = topics.get_mut(&topic) else {
            return false;
        };
        let before = handlers.len();
        handlers.retain(|(sub_id, _)| *sub_id != id);
        before != handlers.len()
    }
}

/// Typed in-process publish/subscribe bus. Cloning shares the same bus.
#[derive(Clone, Default)]
pub struct SyncBus {
    registry: Arc<Registry>,
}

impl SyncBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for changes of record type `C`.
    ///
    /// The handler stays registered until the returned guard is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<C, F>(&self, handler: F) -> Subscription
    where
        C: Content,
        F: Fn(&C) + Send + Sync + 'static,
    {
        let id = self.registry.next_id.fetch_add(1, Ordering::SeqCst);
        let erased: Handler = Arc::new(move |payload: &dyn Any| {
            if let Some(record) = payload.downcast_ref::<C>() {
                handler(record);
            }
        });

        self.registry
            .topics
            .write()
            .entry(C::TOPIC)
            .or_default()
            .push((id, erased));

        Subscription {
            registry: Arc::downgrade(&self.registry),
            topic: C::TOPIC,
            id,
        }
    }

    /// Deliver `payload` to every current subscriber of `C::TOPIC`.
    ///
    /// Returns the number of handlers that completed without panicking.
    pub fn publish<C: Content>(&self, payload: &C) -> usize {
        // Snapshot so handlers can (un)subscribe without deadlocking
        let handlers: Vec<(SubscriptionId, Handler)> = self
            .registry
            .topics
            .read()
            .get(&C::TOPIC)
            .cloned()
            .unwrap_or_default();

        let mut delivered = 0;
        for (id, handler) in handlers {
            let outcome = catch_unwind(AssertUnwindSafe(|| handler(payload as &dyn Any)));
            match outcome {
                Ok(()) => delivered += 1,
                Err(_) => log!("error"; "handler #{id} on `{}` panicked", C::TOPIC),
            }
        }
        delivered
    }

    /// Number of active subscriptions on `topic`.
    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.registry
            .topics
            .read()
            .get(&topic)
            .map_or(0, Vec::len)
    }
}

impl std::fmt::Debug for SyncBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let topics = self.registry.topics.read();
        let counts: BTreeMap<&str, usize> = topics
            .iter()
            .map(|(topic, handlers)| (topic.as_str(), handlers.len()))
            .collect();
        f.debug_struct("SyncBus").field("subscribers", &counts).finish()
    }
}

/// Guard for an active subscription. Dropping it unsubscribes.
#[derive(Debug)]
pub struct Subscription {
    registry: Weak<Registry>,
    topic: Topic,
    id: SubscriptionId,
}

impl Subscription {
    pub const fn id(&self) -> SubscriptionId {
        self.id
    }

    pub const fn topic(&self) -> Topic {
        self.topic
    }

    /// Unsubscribe now instead of at the end of scope.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        // The bus may already be gone
        if let Some(registry) = self.registry.upgrade() {
            registry.remove(self.topic, self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{AboutContent, Gallery};
    use parking_lot::Mutex;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_fan_out_reaches_every_subscriber_once() {
        let bus = SyncBus::new();
        let seen: Arc<Mutex<Vec<(usize, usize)>>> = Arc::default();

        let subs: Vec<Subscription> = (0..5)
            .map(|n| {
                let seen = Arc::clone(&seen);
                bus.subscribe(move |about: &AboutContent| {
                    seen.lock().push((n, about as *const AboutContent as usize));
                })
            })
            .collect();

        let about = AboutContent::seed();
        assert_eq!(bus.publish(&about), 5);

        let seen = seen.lock();
        assert_eq!(seen.len(), 5);
        // Subscription order, identical payload reference
        let order: Vec<usize> = seen.iter().map(|(n, _)| *n).collect();
        assert_eq!(order, [0, 1, 2, 3, 4]);
        let addr = &about as *const AboutContent as usize;
        assert!(seen.iter().all(|(_, a)| *a == addr));
        drop(subs);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let bus = SyncBus::new();
        let counter = Arc::new(AtomicUsize::new(0));

        let c = Arc::clone(&counter);
        let sub = bus.subscribe(move |_: &Gallery| {
            c.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(bus.subscriber_count(Topic::GalleryItemsUpdated), 1);

        bus.publish(&Gallery::seed());
        sub.unsubscribe();
        bus.publish(&Gallery::seed());

        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert_eq!(bus.subscriber_count(Topic::GalleryItemsUpdated), 0);
    }

    #[test]
    fn test_topics_are_isolated() {
        let bus = SyncBus::new();
        let counter = Arc::new(AtomicUsize::new(0));

        let c = Arc::clone(&counter);
        let _sub = bus.subscribe(move |_: &Gallery| {
            c.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(bus.publish(&AboutContent::seed()), 0);
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_panicking_handler_does_not_block_siblings() {
        let bus = SyncBus::new();
        let counter = Arc::new(AtomicUsize::new(0));

        let _bad = bus.subscribe(|_: &AboutContent| panic!("render failed"));
        let c = Arc::clone(&counter);
        let _good = bus.subscribe(move |_: &AboutContent| {
            c.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(bus.publish(&AboutContent::seed()), 1);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_subscribe_during_publish() {
        let bus = SyncBus::new();
        let late: Arc<Mutex<Vec<Subscription>>> = Arc::default();

        let inner_bus = bus.clone();
        let holder = Arc::clone(&late);
        let _sub = bus.subscribe(move |_: &AboutContent| {
            holder.lock().push(inner_bus.subscribe(|_: &AboutContent| {}));
        });

        // New subscriber is not part of the running delivery
        assert_eq!(bus.publish(&AboutContent::seed()), 1);
        assert_eq!(bus.subscriber_count(Topic::AboutContentUpdated), 2);
        late.lock().clear();
        assert_eq!(bus.subscriber_count(Topic::AboutContentUpdated), 1);
    }

    #[test]
    fn test_subscription_outlives_bus() {
        let bus = SyncBus::new();
        let sub = bus.subscribe(|_: &Gallery| {});
        assert_eq!(sub.topic(), Topic::GalleryItemsUpdated);
        drop(bus);
        drop(sub);
    }
}
