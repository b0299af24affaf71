//! Synchronous signals raised by the session after it changes the shelf.
//!
//! Observers run in registration order, on the caller's stack, before
//! [`EventBus::emit`] returns.

use crate::model::Book;
use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub enum Signal<'a> {
    /// The shelf changed; observers receive the full current collection.
    RenderRequested(&'a [Book]),
    /// The collection was written; observers receive the raw stored text.
    DataPersisted(&'a str),
}

impl Signal<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Signal::RenderRequested(_) => "render-requested",
            Signal::DataPersisted(_) => "data-persisted",
        }
    }
}

pub trait Observer {
    fn notify(&mut self, signal: &Signal<'_>);
}

impl<F: FnMut(&Signal<'_>)> Observer for F {
    fn notify(&mut self, signal: &Signal<'_>) {
        self(signal)
    }
}

#[derive(Default)]
pub struct EventBus {
    observers: Vec<Box<dyn Observer>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: impl Observer + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn emit(&mut self, signal: Signal<'_>) {
        debug!(signal = signal.name(), observers = self.observers.len(), "emit");
        for observer in self.observers.iter_mut() {
            observer.notify(&signal);
        }
    }
}

/// Logs every persisted blob at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TraceObserver;

impl Observer for TraceObserver {
    fn notify(&mut self, signal: &Signal<'_>) {
        if let Signal::DataPersisted(raw) = signal {
            debug!(target: "bookshelf::persist", stored = %raw, "data persisted");
        }
    }
}
