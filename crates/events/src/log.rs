//! Append-only sink for cart events.
//!
//! The cart writes to a `CartEventLog` after each successful mutation and
//! never reads from it. Implementations decide where events go (tracing,
//! memory, an external broker).

use std::sync::Arc;

use crate::cart_event::CartEvent;

/// Write-only event sink.
///
/// Recording is infallible from the caller's point of view: a sink that
/// cannot deliver an event must not fail the cart operation that produced it.
pub trait CartEventLog: Send + Sync {
    fn record(&self, event: CartEvent);
}

impl<L> CartEventLog for Arc<L>
where
    L: CartEventLog + ?Sized,
{
    fn record(&self, event: CartEvent) {
        (**self).record(event)
    }
}
