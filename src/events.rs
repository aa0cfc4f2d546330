//! Appearance change notifications.
//!
//! The controller publishes typed events after every state application so
//! that other parts of the UI can react without holding a reference to it.
//! Subscribers are plain closures; delivery is synchronous and in
//! subscription order.

use crate::appearance::ColorMode;
use crate::scheme::ColorScheme;

/// A notification published by the appearance controller.
#[derive(Debug, Clone, PartialEq)]
pub enum AppearanceEvent {
    /// The effective mode was (re)applied.
    ThemeChanged { mode: ColorMode },
    /// A new color scheme was selected and pushed to the registry.
    ColorSchemeChanged { id: String, scheme: ColorScheme },
}

type Subscriber = Box<dyn FnMut(&AppearanceEvent) + Send>;

/// Synchronous publish/subscribe fan-out for [`AppearanceEvent`]s.
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<Subscriber>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes a closure; all subscribers see every event, in order.
    pub fn subscribe<F>(&mut self, f: F)
    where
        F: FnMut(&AppearanceEvent) + Send + 'static,
    {
        self.subscribers.push(Box::new(f));
    }

    /// Delivers an event to every subscriber.
    pub fn emit(&mut self, event: &AppearanceEvent) {
        for subscriber in self.subscribers.iter_mut() {
            subscriber(event);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_subscriber_receives_event() {
        let mut bus = EventBus::new();
        let count = Arc::new(AtomicUsize::new(0));
        let count2 = count.clone();
        bus.subscribe(move |_event| {
            count2.fetch_add(1, Ordering::SeqCst);
        });

        bus.emit(&AppearanceEvent::ThemeChanged {
            mode: ColorMode::Dark,
        });
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_multiple_subscribers_all_called() {
        let mut bus = EventBus::new();
        let seen = Arc::new(AtomicUsize::new(0));
        for _ in 0..3 {
            let seen2 = seen.clone();
            bus.subscribe(move |_| {
                seen2.fetch_add(1, Ordering::SeqCst);
            });
        }

        bus.emit(&AppearanceEvent::ThemeChanged {
            mode: ColorMode::Light,
        });
        assert_eq!(seen.load(Ordering::SeqCst), 3);
        assert_eq!(bus.subscriber_count(), 3);
    }
}
