//! Change subscriptions
//!
//! Stores notify subscribers synchronously after each mutation. Everything
//! runs on the caller's thread, so callbacks need not be `Send`.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    pub struct SubscriptionId;
}

/// Registry of change callbacks for a value of type `T`
pub struct Subscribers<T: ?Sized> {
    callbacks: SlotMap<SubscriptionId, Box<dyn Fn(&T)>>,
}

impl<T: ?Sized> Subscribers<T> {
    pub fn new() -> Self {
        Self {
            callbacks: SlotMap::with_key(),
        }
    }

    pub fn subscribe(&mut self, callback: impl Fn(&T) + 'static) -> SubscriptionId {
        self.callbacks.insert(Box::new(callback))
    }

    /// Remove a callback; returns false if it was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.callbacks.remove(id).is_some()
    }

    pub fn notify(&self, value: &T) {
        for callback in self.callbacks.values() {
            callback(value);
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl<T: ?Sized> Default for Subscribers<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn notify_reaches_every_subscriber() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subs: Subscribers<i32> = Subscribers::new();

        let a = seen.clone();
        subs.subscribe(move |v| a.borrow_mut().push(("a", *v)));
        let b = seen.clone();
        subs.subscribe(move |v| b.borrow_mut().push(("b", *v)));

        subs.notify(&7);
        let mut got = seen.borrow().clone();
        got.sort();
        assert_eq!(got, vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn unsubscribed_callbacks_are_not_called() {
        let count = Rc::new(RefCell::new(0));
        let mut subs: Subscribers<str> = Subscribers::new();

        let c = count.clone();
        let id = subs.subscribe(move |_| *c.borrow_mut() += 1);
        assert!(subs.unsubscribe(id));
        assert!(!subs.unsubscribe(id));

        subs.notify("ignored");
        assert_eq!(*count.borrow(), 0);
        assert!(subs.is_empty());
    }
}
