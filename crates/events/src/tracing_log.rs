use crate::cart_event::CartEvent;
use crate::event::Event;
use crate::log::CartEventLog;

/// Event log that writes each event as a structured `info` line.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingCartEventLog;

impl TracingCartEventLog {
    pub fn new() -> Self {
        Self
    }
}

impl CartEventLog for TracingCartEventLog {
    fn record(&self, event: CartEvent) {
        tracing::info!(
            event_id = %event.id,
            event_type = event.event_type(),
            kind = %event.kind,
            detail = %event.detail,
            timestamp = %event.timestamp.to_rfc3339(),
            "Cart Event: {}, Details: {}",
            event.kind,
            event.detail
        );
    }
}
