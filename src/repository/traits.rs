//! Repository Layer - Store Trait
//!
//! Defines the abstract interface to the remote lead store.
//! Implementations can use SQLite, in-memory, a network service, etc.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Column, DomainResult, Lead, LeadDraft};

/// Point update of a lead's mutable ordering fields
///
/// `None` means "leave unchanged". Display payload is never patched through
/// this path; reordering only ever touches placement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadPatch {
    pub column_id: Option<u32>,
    pub order_index: Option<i32>,
}

impl LeadPatch {
    /// Patch both column membership and position
    pub fn placement(column_id: u32, order_index: i32) -> Self {
        Self {
            column_id: Some(column_id),
            order_index: Some(order_index),
        }
    }

    /// Patch position only
    pub fn order(order_index: i32) -> Self {
        Self {
            column_id: None,
            order_index: Some(order_index),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.column_id.is_none() && self.order_index.is_none()
    }
}

/// Remote store for leads and columns
///
/// All operations are async to support various backends. Batch sibling
/// updates during a move are issued as N independent `update_lead` calls
/// awaited together by the caller; there is no transactional batch here.
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Create a new lead at the given position in its column
    async fn create_lead(&self, draft: &LeadDraft, order_index: i32) -> DomainResult<Lead>;

    /// Point update of one lead's placement fields
    async fn update_lead(&self, id: u32, patch: LeadPatch) -> DomainResult<()>;

    /// Delete a lead by ID
    async fn delete_lead(&self, id: u32) -> DomainResult<()>;

    /// All leads, ordered by (column_id asc, order_index asc)
    async fn fetch_leads(&self) -> DomainResult<Vec<Lead>>;

    /// All columns, ordered by order_index asc
    async fn fetch_columns(&self) -> DomainResult<Vec<Column>>;
}
