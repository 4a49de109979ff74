use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::event::Event;

/// Identifier of a recorded cart event.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(Uuid);

impl EventId {
    /// Uses UUIDv7 so ids sort by creation time.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for EventId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// What happened to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartEventKind {
    Added,
    UpdatedQuantity,
    Removed,
    Empty,
}

impl CartEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CartEventKind::Added => "ADDED",
            CartEventKind::UpdatedQuantity => "UPDATED_QUANTITY",
            CartEventKind::Removed => "REMOVED",
            CartEventKind::Empty => "EMPTY",
        }
    }
}

impl core::fmt::Display for CartEventKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event: one cart mutation, with a free-text detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEvent {
    pub id: EventId,
    pub timestamp: DateTime<Utc>,
    pub kind: CartEventKind,
    pub detail: String,
}

impl CartEvent {
    /// Stamp a new event with the current time.
    pub fn now(kind: CartEventKind, detail: impl Into<String>) -> Self {
        Self {
            id: EventId::new(),
            timestamp: Utc::now(),
            kind,
            detail: detail.into(),
        }
    }

    pub fn added(sku: impl core::fmt::Display, quantity: u32) -> Self {
        Self::now(
            CartEventKind::Added,
            format!("Item {sku} added with quantity {quantity}"),
        )
    }

    pub fn quantity_updated(sku: impl core::fmt::Display, quantity: u32) -> Self {
        Self::now(
            CartEventKind::UpdatedQuantity,
            format!("Item {sku} updated to quantity {quantity}"),
        )
    }

    pub fn removed(sku: impl core::fmt::Display) -> Self {
        Self::now(CartEventKind::Removed, format!("Item {sku} removed"))
    }

    pub fn emptied() -> Self {
        Self::now(CartEventKind::Empty, "All items removed from the cart")
    }
}

impl Event for CartEvent {
    fn event_type(&self) -> &'static str {
        match self.kind {
            CartEventKind::Added => "cart.item.added",
            CartEventKind::UpdatedQuantity => "cart.item.quantity_updated",
            CartEventKind::Removed => "cart.item.removed",
            CartEventKind::Empty => "cart.emptied",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
