//! Application listeners that may observe or suppress map interactions.

use crate::event::ClickKind;
use parking_lot::Mutex;
use std::sync::Arc;

/// Observer for click-style gestures.
pub trait ClickListener: Send + Sync {
    /// Called when a click gesture resolves at screen position `(x, y)`.
    ///
    /// Returning `true` suppresses the engine's default click behavior,
    /// such as the double-tap zoom.
    fn on_map_click(&self, kind: ClickKind, x: f32, y: f32) -> bool;
}

/// Observer consulted before the engine commits to a continuous gesture.
pub trait InteractionListener: Send + Sync {
    /// Called with the gesture families the engine is about to start.
    ///
    /// Returning `true` consumes the gesture: the engine ignores all
    /// further moves until the next pointer down.
    fn on_map_interaction(&self, panning: bool, zooming: bool, rotating: bool, tilting: bool)
        -> bool;
}

/// Thread-safe holders for the optional application listeners.
///
/// Hosts may swap listeners from any thread. Dispatch happens on the UI
/// thread with the holder lock held, so a listener is never dropped while
/// one of its callbacks is in flight.
#[derive(Default)]
pub struct ListenerBroker {
    click: Mutex<Option<Arc<dyn ClickListener>>>,
    interaction: Mutex<Option<Arc<dyn InteractionListener>>>,
}

impl ListenerBroker {
    /// Install or clear the click listener.
    pub fn set_click_listener(&self, listener: Option<Arc<dyn ClickListener>>) {
        *self.click.lock() = listener;
    }

    /// Install or clear the interaction listener.
    pub fn set_interaction_listener(&self, listener: Option<Arc<dyn InteractionListener>>) {
        *self.interaction.lock() = listener;
    }

    /// Dispatch a click to the registered listener.
    ///
    /// Returns whether the listener consumed the click.
    pub fn dispatch_click(&self, kind: ClickKind, x: f32, y: f32) -> bool {
        match self.click.lock().as_ref() {
            Some(listener) => listener.on_map_click(kind, x, y),
            None => false,
        }
    }

    /// Dispatch a pending interaction to the registered listener.
    ///
    /// Returns whether the listener consumed the interaction.
    pub fn dispatch_interaction(
        &self,
        panning: bool,
        zooming: bool,
        rotating: bool,
        tilting: bool,
    ) -> bool {
        match self.interaction.lock().as_ref() {
            Some(listener) => listener.on_map_interaction(panning, zooming, rotating, tilting),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingClicks {
        calls: AtomicUsize,
        consume: bool,
    }

    impl ClickListener for CountingClicks {
        fn on_map_click(&self, _kind: ClickKind, _x: f32, _y: f32) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.consume
        }
    }

    #[test]
    fn test_dispatch_without_listener_is_unconsumed() {
        let broker = ListenerBroker::default();
        assert!(!broker.dispatch_click(ClickKind::Single, 0.0, 0.0));
        assert!(!broker.dispatch_interaction(true, false, false, false));
    }

    #[test]
    fn test_click_listener_swap_and_consume() {
        let broker = ListenerBroker::default();
        let listener = Arc::new(CountingClicks {
            calls: AtomicUsize::new(0),
            consume: true,
        });
        broker.set_click_listener(Some(listener.clone()));

        assert!(broker.dispatch_click(ClickKind::Double, 1.0, 2.0));
        assert_eq!(listener.calls.load(Ordering::SeqCst), 1);

        broker.set_click_listener(None);
        assert!(!broker.dispatch_click(ClickKind::Double, 1.0, 2.0));
        assert_eq!(listener.calls.load(Ordering::SeqCst), 1);
    }
}
