//! In-process subscription table.

use std::collections::{HashMap, HashSet};

use super::{HostEvents, Signal, SubscriptionId};
use crate::error::HostError;

/// Per-signal subscriber lists kept in insertion order.
#[derive(Debug, Default, Clone)]
pub struct EventHub {
    handlers: HashMap<Signal, Vec<SubscriptionId>>,
    closed: HashSet<Signal>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes later subscriptions to `signal` fail, as a host without that
    /// callback would.
    pub fn close(&mut self, signal: Signal) {
        self.closed.insert(signal);
    }

    pub fn is_subscribed(&self, signal: Signal, subscriber: SubscriptionId) -> bool {
        self.handlers
            .get(&signal)
            .is_some_and(|list| list.contains(&subscriber))
    }

    /// Total number of attached handlers across all signals.
    pub fn len(&self) -> usize {
        self.handlers.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl HostEvents for EventHub {
    fn subscribe(&mut self, signal: Signal, subscriber: SubscriptionId) -> Result<(), HostError> {
        if self.closed.contains(&signal) {
            return Err(HostError::SubscriptionRejected { signal });
        }
        self.handlers.entry(signal).or_default().push(subscriber);
        Ok(())
    }

    fn unsubscribe(&mut self, signal: Signal, subscriber: SubscriptionId) {
        let Some(list) = self.handlers.get_mut(&signal) else {
            return;
        };
        // Detach the most recent attachment, like removing a delegate.
        if let Some(pos) = list.iter().rposition(|s| *s == subscriber) {
            list.remove(pos);
        }
    }

    fn subscribers(&self, signal: Signal) -> Vec<SubscriptionId> {
        self.handlers.get(&signal).cloned().unwrap_or_default()
    }
}
