//! Clock service - periodic ticks that drive shell re-renders.
//!
//! The shell subscribes once at mount; each tick enqueues a re-render of the
//! last rendered location so time-relative displays stay current. Ticks never
//! touch the registries, which are sealed before any tick can fire.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

/// Callback invoked on every tick.
pub type TickCallback = Box<dyn Fn() + Send + Sync>;

/// A source of periodic ticks.
pub trait Clock {
    /// Subscribe a callback. Dropping the returned subscription unsubscribes.
    fn subscribe(&self, callback: TickCallback) -> TickSubscription;
}

/// Handle tying a subscription's lifetime to the subscriber.
pub struct TickSubscription {
    on_unsubscribe: Option<Box<dyn FnOnce() + Send>>,
}

impl TickSubscription {
    pub fn new(on_unsubscribe: impl FnOnce() + Send + 'static) -> Self {
        Self {
            on_unsubscribe: Some(Box::new(on_unsubscribe)),
        }
    }
}

impl Drop for TickSubscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.on_unsubscribe.take() {
            unsubscribe();
        }
    }
}

/// Fixed-interval clock backed by the tokio timer.
pub struct IntervalClock {
    period: Duration,
}

impl IntervalClock {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }
}

impl Clock for IntervalClock {
    fn subscribe(&self, callback: TickCallback) -> TickSubscription {
        let token = CancellationToken::new();
        let task_token = token.clone();
        let period = self.period;

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick of a tokio interval fires immediately; skip it so
            // subscribers only see ticks after one full period.
            interval.tick().await;
            loop {
                tokio::select! {
                    _ = task_token.cancelled() => break,
                    _ = interval.tick() => callback(),
                }
            }
        });

        TickSubscription::new(move || token.cancel())
    }
}

/// Test clock whose ticks are fired by hand.
#[derive(Default)]
pub struct ManualClock {
    subscribers: Arc<Mutex<HashMap<u64, Arc<TickCallback>>>>,
    next_id: AtomicU64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire one tick, invoking every live subscriber.
    pub fn fire(&self) {
        let callbacks: Vec<Arc<TickCallback>> = self.subscribers.lock().values().cloned().collect();
        for callback in callbacks {
            callback();
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }
}

impl Clock for ManualClock {
    fn subscribe(&self, callback: TickCallback) -> TickSubscription {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.subscribers.lock().insert(id, Arc::new(callback));

        let subscribers = Arc::clone(&self.subscribers);
        TickSubscription::new(move || {
            subscribers.lock().remove(&id);
        })
    }
}
