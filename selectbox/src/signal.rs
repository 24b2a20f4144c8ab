//! Outbound selection signals.
//!
//! A commit queues its signals while the widget is still mutating. Once the
//! event has been fully applied the queue is flushed into every subscriber's
//! channel, so observers only ever see settled state and never run inside the
//! event handler.

use log::trace;
use tokio::sync::mpsc;

/// A signal emitted on a committed selection change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal<T> {
    /// The bound value changed
    ValueChanged(T),
    /// The user confirmed a new selection
    SelectionConfirmed(T),
}

impl<T> Signal<T> {
    /// The selection carried by the signal.
    pub fn value(&self) -> &T {
        match self {
            Signal::ValueChanged(v) | Signal::SelectionConfirmed(v) => v,
        }
    }
}

/// Receiving half handed out by `SelectWidget::subscribe`.
#[derive(Debug)]
pub struct SignalReceiver<T> {
    rx: mpsc::UnboundedReceiver<Signal<T>>,
}

impl<T> SignalReceiver<T> {
    /// Wait for the next signal.
    ///
    /// Returns `None` once the widget has been dropped and the queue is empty.
    pub async fn recv(&mut self) -> Option<Signal<T>> {
        self.rx.recv().await
    }

    /// Take the next signal if one is already delivered.
    pub fn try_recv(&mut self) -> Option<Signal<T>> {
        self.rx.try_recv().ok()
    }

    /// Take every delivered signal.
    pub fn drain(&mut self) -> Vec<Signal<T>> {
        let mut signals = Vec::new();
        while let Ok(signal) = self.rx.try_recv() {
            signals.push(signal);
        }
        signals
    }
}

/// Pending signals plus the subscribers they are flushed to.
#[derive(Debug)]
pub(crate) struct SignalQueue<T> {
    pending: Vec<Signal<T>>,
    subscribers: Vec<mpsc::UnboundedSender<Signal<T>>>,
}

impl<T> Default for SignalQueue<T> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            subscribers: Vec::new(),
        }
    }
}

impl<T: Clone> SignalQueue<T> {
    pub(crate) fn subscribe(&mut self) -> SignalReceiver<T> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        SignalReceiver { rx }
    }

    /// Queue both signals for one commit, value change first.
    pub(crate) fn push_commit(&mut self, value: T) {
        self.pending.push(Signal::ValueChanged(value.clone()));
        self.pending.push(Signal::SelectionConfirmed(value));
    }

    /// Deliver queued signals to every live subscriber.
    pub(crate) fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        let pending = std::mem::take(&mut self.pending);
        trace!(
            "SignalQueue::flush signals={} subscribers={}",
            pending.len(),
            self.subscribers.len()
        );

        // Closed receivers are dropped from the list.
        self.subscribers.retain(|tx| {
            pending
                .iter()
                .all(|signal| tx.send(signal.clone()).is_ok())
        });
    }

    #[cfg(test)]
    pub(crate) fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
