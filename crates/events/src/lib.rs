//! Cart mutation events and the append-only sinks that record them.
//!
//! Events are observational only: nothing in the core reads them back.

pub mod cart_event;
pub mod event;
pub mod in_memory_log;
pub mod log;
pub mod tracing_log;

pub use cart_event::{CartEvent, CartEventKind, EventId};
pub use event::Event;
pub use in_memory_log::InMemoryCartEventLog;
pub use log::CartEventLog;
pub use tracing_log::TracingCartEventLog;
