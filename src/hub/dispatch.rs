//! Subscriber list management and broadcast fan-out.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{debug, trace};

use crate::hub::{InputEvent, InputSubscriber};

/// Shared, caller-owned subscriber handle the hub holds while subscribed.
pub type SubscriberRef = Rc<RefCell<dyn InputSubscriber>>;

type SubscriberList = Rc<RefCell<Vec<SubscriberRef>>>;

/// Ordered broadcast hub.
///
/// Subscribers are identity-compared (`Rc::ptr_eq`), kept in registration
/// order, and every broadcast fans out to all of them. The list is
/// snapshotted at the start of each broadcast: subscribers added or removed
/// by an in-flight handler take effect only for subsequent broadcasts.
#[derive(Default)]
pub struct EventHub {
    subscribers: SubscriberList,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `subscriber` unless it is already present. Double-subscribe
    /// is a no-op that still returns a valid handle for the registration.
    pub fn subscribe(&self, subscriber: SubscriberRef) -> Subscription {
        {
            let mut list = self.subscribers.borrow_mut();
            if list.iter().any(|entry| Rc::ptr_eq(entry, &subscriber)) {
                debug!("Subscriber already registered, handing out fresh handle");
            } else {
                list.push(Rc::clone(&subscriber));
                debug!("Subscriber registered ({} active)", list.len());
            }
        }

        Subscription {
            list: Rc::downgrade(&self.subscribers),
            subscriber: Rc::downgrade(&subscriber),
        }
    }

    /// Removes `subscriber` if present; silent no-op otherwise.
    pub fn unsubscribe(&self, subscriber: &SubscriberRef) {
        let mut list = self.subscribers.borrow_mut();
        let before = list.len();
        list.retain(|entry| !Rc::ptr_eq(entry, subscriber));
        if list.len() != before {
            debug!("Subscriber removed ({} active)", list.len());
        }
    }

    /// Fans `event` out to every subscriber in registration order.
    pub fn broadcast(&self, event: &InputEvent) {
        let snapshot: Vec<SubscriberRef> = self.subscribers.borrow().clone();
        trace!(
            "Broadcasting {} to {} subscribers",
            event.name(),
            snapshot.len()
        );
        for subscriber in snapshot {
            event.deliver(&mut *subscriber.borrow_mut());
        }
    }

    /// Drops all subscribers. Idempotent.
    pub fn clear(&self) {
        self.subscribers.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.subscribers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.borrow().is_empty()
    }
}

/// Capability token for one registration.
///
/// Holds only weak references, so it never extends the lifetime of the hub
/// or the subscriber. `unsubscribe` is idempotent and removes exactly the
/// associated subscriber.
pub struct Subscription {
    list: Weak<RefCell<Vec<SubscriberRef>>>,
    subscriber: Weak<RefCell<dyn InputSubscriber>>,
}

impl Subscription {
    pub fn unsubscribe(&self) {
        let (Some(list), Some(subscriber)) = (self.list.upgrade(), self.subscriber.upgrade())
        else {
            return;
        };
        list.borrow_mut()
            .retain(|entry| !Rc::ptr_eq(entry, &subscriber));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Appends its tag to a shared log on every mouse move.
    struct Recorder {
        tag: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl InputSubscriber for Recorder {
        fn on_mouse_move(&mut self, x: i32, y: i32) {
            self.log.borrow_mut().push(format!("{}:{},{}", self.tag, x, y));
        }
    }

    fn recorder(tag: &'static str, log: &Rc<RefCell<Vec<String>>>) -> SubscriberRef {
        Rc::new(RefCell::new(Recorder {
            tag,
            log: Rc::clone(log),
        }))
    }

    #[test]
    fn broadcast_reaches_all_subscribers_in_order() {
        let hub = EventHub::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for tag in ["a", "b", "c"] {
            hub.subscribe(recorder(tag, &log));
        }

        hub.broadcast(&InputEvent::MouseMove { x: 3, y: 7 });

        assert_eq!(*log.borrow(), vec!["a:3,7", "b:3,7", "c:3,7"]);
    }

    #[test]
    fn missing_handlers_are_silently_skipped() {
        struct Deaf;
        impl InputSubscriber for Deaf {}

        let hub = EventHub::new();
        hub.subscribe(Rc::new(RefCell::new(Deaf)));
        hub.broadcast(&InputEvent::KeyDown {
            key: "KeyW".to_owned(),
        });
    }

    #[test]
    fn double_subscribe_keeps_one_registration() {
        let hub = EventHub::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let sub = recorder("a", &log);

        let first = hub.subscribe(Rc::clone(&sub));
        let second = hub.subscribe(Rc::clone(&sub));
        assert_eq!(hub.len(), 1);

        hub.broadcast(&InputEvent::MouseMove { x: 0, y: 0 });
        assert_eq!(log.borrow().len(), 1);

        // Either handle removes the single registration.
        second.unsubscribe();
        assert!(hub.is_empty());
        first.unsubscribe();
        assert!(hub.is_empty());
    }

    #[test]
    fn unsubscribe_is_idempotent() {
        let hub = EventHub::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let sub = recorder("a", &log);

        let handle = hub.subscribe(Rc::clone(&sub));
        handle.unsubscribe();
        handle.unsubscribe();
        hub.unsubscribe(&sub);
        assert!(hub.is_empty());
    }

    #[test]
    fn unsubscribe_removes_exactly_the_associated_subscriber() {
        let hub = EventHub::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        hub.subscribe(recorder("a", &log));
        let handle = hub.subscribe(recorder("b", &log));
        hub.subscribe(recorder("c", &log));

        handle.unsubscribe();
        hub.broadcast(&InputEvent::MouseMove { x: 1, y: 1 });

        assert_eq!(*log.borrow(), vec!["a:1,1", "c:1,1"]);
    }

    #[test]
    fn removal_during_broadcast_affects_later_broadcasts_only() {
        struct SelfRemover {
            handle: Rc<RefCell<Option<Subscription>>>,
            calls: Rc<RefCell<u32>>,
        }

        impl InputSubscriber for SelfRemover {
            fn on_mouse_move(&mut self, _x: i32, _y: i32) {
                *self.calls.borrow_mut() += 1;
                if let Some(handle) = self.handle.borrow_mut().take() {
                    handle.unsubscribe();
                }
            }
        }

        let hub = EventHub::new();
        let calls = Rc::new(RefCell::new(0));
        let log = Rc::new(RefCell::new(Vec::new()));
        let handle_slot = Rc::new(RefCell::new(None));

        let remover: SubscriberRef = Rc::new(RefCell::new(SelfRemover {
            handle: Rc::clone(&handle_slot),
            calls: Rc::clone(&calls),
        }));
        // Hand the subscriber its own handle; it unsubscribes mid-broadcast.
        *handle_slot.borrow_mut() = Some(hub.subscribe(remover));
        hub.subscribe(recorder("after", &log));

        hub.broadcast(&InputEvent::MouseMove { x: 0, y: 0 });
        // The later subscriber still saw the in-flight broadcast.
        assert_eq!(log.borrow().len(), 1);

        hub.broadcast(&InputEvent::MouseMove { x: 0, y: 0 });
        assert_eq!(*calls.borrow(), 1);
        assert_eq!(hub.len(), 1);
    }
}
