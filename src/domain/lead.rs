//! Lead Entity
//!
//! A lead is the reorderable unit of the board: it belongs to exactly one
//! column and holds a zero-based position within that column.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A lead card on the board
///
/// `column_id` and `order_index` are the ordering fields the reorder engine
/// operates on; the remaining fields are display payload and never influence
/// ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    /// Unique identifier, immutable after creation
    pub id: u32,
    /// Lead title shown on the card
    pub title: String,
    /// Contact person name
    pub contact_name: String,
    /// WhatsApp number of the contact
    pub whatsapp: String,
    /// Column this lead currently belongs to
    pub column_id: u32,
    /// Position within the column (zero-based, contiguous)
    pub order_index: i32,
    /// Creation timestamp (epoch millis)
    pub created_at: Option<i64>,
}

impl Lead {
    /// Create a new lead at the given column position
    pub fn new(id: u32, title: String, column_id: u32, order_index: i32) -> Self {
        Self {
            id,
            title,
            contact_name: String::new(),
            whatsapp: String::new(),
            column_id,
            order_index,
            created_at: None,
        }
    }

    /// Same `(column_id, order_index)` placement as another lead
    pub fn same_placement(&self, other: &Lead) -> bool {
        self.column_id == other.column_id && self.order_index == other.order_index
    }
}

impl Entity for Lead {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Mutable lead fields accepted by a new-lead form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadDraft {
    pub title: String,
    pub contact_name: String,
    pub whatsapp: String,
    /// Column the new lead is appended to
    pub column_id: u32,
}
