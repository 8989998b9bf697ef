//! Telemetry Module for membuf
//!
//! Buffers emit structured JSON events through the `log` facade so that
//! whatever logger the embedding application installs can collect them.
//! Nothing here allocates unless the matching log level is enabled.

use log::{debug, log_enabled, warn, Level};
use serde::Serialize;

/// Buffer event types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BufferEventType {
    /// Storage was reallocated to a larger capacity
    Grown,
    /// Storage was released
    Cleared,
    /// A fixed-width read ran past the logical length
    OutOfBounds,
    /// An argument was rejected
    InvalidArgument,
}

impl BufferEventType {
    fn level(self) -> Level {
        match self {
            BufferEventType::InvalidArgument => Level::Warn,
            _ => Level::Debug,
        }
    }
}

/// Point-in-time view of the buffer's bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BufferSnapshot {
    pub capacity: usize,
    pub length: usize,
    pub position: usize,
}

/// Buffer event for logging
#[derive(Debug, Clone, Serialize)]
pub struct BufferEvent {
    /// Event type
    pub event_type: BufferEventType,
    /// Bookkeeping at the time of the event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<BufferSnapshot>,
    /// Size the caller asked for (capacity for growth, bytes for reads)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested: Option<usize>,
    /// Reason for the event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl BufferEvent {
    /// Create a new event
    pub fn new(event_type: BufferEventType) -> Self {
        Self {
            event_type,
            snapshot: None,
            requested: None,
            reason: None,
        }
    }

    /// Set snapshot
    pub fn with_snapshot(mut self, snapshot: BufferSnapshot) -> Self {
        self.snapshot = Some(snapshot);
        self
    }

    /// Set requested size
    pub fn with_requested(mut self, requested: usize) -> Self {
        self.requested = Some(requested);
        self
    }

    /// Set reason
    pub fn with_reason(mut self, reason: &str) -> Self {
        self.reason = Some(reason.to_string());
        self
    }

    /// Check if the event would be logged at the current level
    pub fn enabled(event_type: BufferEventType) -> bool {
        log_enabled!(event_type.level())
    }

    /// Log the event
    pub fn emit(&self) {
        if !Self::enabled(self.event_type) {
            return;
        }
        match serde_json::to_string(self) {
            Ok(json) => match self.event_type.level() {
                Level::Warn => warn!("[MEMBUF] {}", json),
                _ => debug!("[MEMBUF] {}", json),
            },
            Err(e) => {
                warn!("Failed to serialize buffer event: {}", e);
            }
        }
    }
}

/// Create a growth event
pub fn event_grown(snapshot: BufferSnapshot, requested: usize) -> BufferEvent {
    BufferEvent::new(BufferEventType::Grown)
        .with_snapshot(snapshot)
        .with_requested(requested)
}

/// Create a cleared event
pub fn event_cleared(snapshot: BufferSnapshot) -> BufferEvent {
    BufferEvent::new(BufferEventType::Cleared).with_snapshot(snapshot)
}

/// Create an out-of-bounds event
pub fn event_out_of_bounds(snapshot: BufferSnapshot, requested: usize) -> BufferEvent {
    BufferEvent::new(BufferEventType::OutOfBounds)
        .with_snapshot(snapshot)
        .with_requested(requested)
}

/// Create an invalid-argument event
pub fn event_invalid_argument(snapshot: BufferSnapshot, reason: &str) -> BufferEvent {
    BufferEvent::new(BufferEventType::InvalidArgument)
        .with_snapshot(snapshot)
        .with_reason(reason)
}
