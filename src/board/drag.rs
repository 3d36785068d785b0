//! Drag Gesture Adapter
//!
//! Translates the raw event a drag-and-drop surface emits on drop into a
//! move descriptor for the reorder engine. A gesture dropped outside any
//! valid target carries no destination and never reaches the engine.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};
use super::reorder::MoveDescriptor;

/// Where a drag gesture ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropDestination {
    pub column_id: u32,
    pub index: usize,
}

/// Raw event emitted once per completed drag gesture
///
/// `destination` is `None` when the gesture was cancelled (dropped outside
/// any valid target).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropEvent {
    pub dragged_lead_id: u32,
    pub source_column_id: u32,
    pub source_index: usize,
    #[serde(default)]
    pub destination: Option<DropDestination>,
}

impl DropEvent {
    /// Convert to a move descriptor; `None` for a cancelled gesture
    pub fn into_move(self) -> Option<MoveDescriptor> {
        let destination = self.destination?;
        Some(MoveDescriptor {
            lead_id: self.dragged_lead_id,
            from_column_id: self.source_column_id,
            to_column_id: destination.column_id,
            from_index: self.source_index,
            to_index: destination.index,
        })
    }
}

/// Parse a drop event from the JSON payload a UI layer delivers
pub fn parse_drop_event(payload: &str) -> DomainResult<DropEvent> {
    serde_json::from_str(payload)
        .map_err(|e| DomainError::InvalidInput(format!("Bad drop event payload: {}", e)))
}
