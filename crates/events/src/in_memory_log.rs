//! In-memory event log for tests/dev.

use std::sync::{Mutex, PoisonError};

use crate::cart_event::{CartEvent, CartEventKind};
use crate::log::CartEventLog;
use crate::tracing_log::TracingCartEventLog;

/// Keeps every recorded event in insertion order.
///
/// - No IO
/// - Optionally forwards to tracing as well, so dev servers still log
#[derive(Debug, Default)]
pub struct InMemoryCartEventLog {
    events: Mutex<Vec<CartEvent>>,
    forward_to_tracing: bool,
}

impl InMemoryCartEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record in memory and also emit through [`TracingCartEventLog`].
    pub fn with_tracing() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            forward_to_tracing: true,
        }
    }

    /// Snapshot of all events recorded so far.
    pub fn events(&self) -> Vec<CartEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn kinds(&self) -> Vec<CartEventKind> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|e| e.kind)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CartEventLog for InMemoryCartEventLog {
    fn record(&self, event: CartEvent) {
        if self.forward_to_tracing {
            TracingCartEventLog.record(event.clone());
        }
        // A poisoned lock still holds a usable Vec; keep appending.
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}
