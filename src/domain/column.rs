//! Column Entity
//!
//! A named bucket of leads. Columns are fetched once at load time and
//! treated as static by the reorder core; their `order_index` only drives
//! display order among columns, never lead ordering.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A board column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Unique identifier
    pub id: u32,
    /// Column title
    pub title: String,
    /// Header color (hex string)
    pub color: String,
    /// Position among columns
    pub order_index: i32,
}

impl Column {
    pub fn new(id: u32, title: String, order_index: i32) -> Self {
        Self {
            id,
            title,
            color: "#0866FF".to_string(),
            order_index,
        }
    }
}

impl Entity for Column {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_creation() {
        let col = Column::new(1, "New".to_string(), 0);
        assert_eq!(col.id(), 1);
        assert_eq!(col.color, "#0866FF");
    }
}
