//! Lead Store - SQLite Implementation
//!
//! Row-oriented implementation of the `LeadStore` trait. Every write is a
//! point update; the commit controller is responsible for batching and for
//! rollback when a batch partially fails.

use async_trait::async_trait;
use rusqlite::{params, Connection};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{Column, DomainError, DomainResult, Lead, LeadDraft};
use super::traits::{LeadPatch, LeadStore};

/// SQLite implementation of the lead store
pub struct SqliteLeadStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteLeadStore {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// Insert a column (board setup; columns are static at runtime)
    pub async fn create_column(&self, title: &str, color: &str, order_index: i32) -> DomainResult<Column> {
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO columns (title, color, order_index) VALUES (?1, ?2, ?3)",
            params![title, color, order_index],
        )
        .map_err(|e| DomainError::Storage(e.to_string()))?;

        Ok(Column {
            id: conn.last_insert_rowid() as u32,
            title: title.to_string(),
            color: color.to_string(),
            order_index,
        })
    }
}

fn row_to_lead(row: &rusqlite::Row<'_>) -> rusqlite::Result<Lead> {
    Ok(Lead {
        id: row.get(0)?,
        title: row.get(1)?,
        contact_name: row.get(2)?,
        whatsapp: row.get(3)?,
        column_id: row.get(4)?,
        order_index: row.get(5)?,
        created_at: row.get(6)?,
    })
}

fn row_to_column(row: &rusqlite::Row<'_>) -> rusqlite::Result<Column> {
    Ok(Column {
        id: row.get(0)?,
        title: row.get(1)?,
        color: row.get(2)?,
        order_index: row.get(3)?,
    })
}

#[async_trait]
impl LeadStore for SqliteLeadStore {
    async fn create_lead(&self, draft: &LeadDraft, order_index: i32) -> DomainResult<Lead> {
        let conn = self.conn.lock().await;
        let now = chrono::Utc::now().timestamp_millis();

        conn.execute(
            "INSERT INTO leads (title, contact_name, whatsapp, column_id, order_index, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)",
            params![
                draft.title,
                draft.contact_name,
                draft.whatsapp,
                draft.column_id,
                order_index,
                now
            ],
        )
        .map_err(|e| DomainError::Storage(e.to_string()))?;

        Ok(Lead {
            id: conn.last_insert_rowid() as u32,
            title: draft.title.clone(),
            contact_name: draft.contact_name.clone(),
            whatsapp: draft.whatsapp.clone(),
            column_id: draft.column_id,
            order_index,
            created_at: Some(now),
        })
    }

    async fn update_lead(&self, id: u32, patch: LeadPatch) -> DomainResult<()> {
        if patch.is_empty() {
            return Ok(());
        }

        let conn = self.conn.lock().await;
        let now = chrono::Utc::now().timestamp_millis();

        let affected = match (patch.column_id, patch.order_index) {
            (Some(column_id), Some(order_index)) => conn.execute(
                "UPDATE leads SET column_id = ?1, order_index = ?2, updated_at = ?3 WHERE id = ?4",
                params![column_id, order_index, now, id],
            ),
            (Some(column_id), None) => conn.execute(
                "UPDATE leads SET column_id = ?1, updated_at = ?2 WHERE id = ?3",
                params![column_id, now, id],
            ),
            (None, Some(order_index)) => conn.execute(
                "UPDATE leads SET order_index = ?1, updated_at = ?2 WHERE id = ?3",
                params![order_index, now, id],
            ),
            (None, None) => Ok(0),
        }
        .map_err(|e| DomainError::Storage(e.to_string()))?;

        if affected == 0 {
            return Err(DomainError::NotFound(format!("Lead {} not found", id)));
        }
        Ok(())
    }

    async fn delete_lead(&self, id: u32) -> DomainResult<()> {
        let conn = self.conn.lock().await;
        let affected = conn
            .execute("DELETE FROM leads WHERE id = ?1", params![id])
            .map_err(|e| DomainError::Storage(e.to_string()))?;

        if affected == 0 {
            return Err(DomainError::NotFound(format!("Lead {} not found", id)));
        }
        Ok(())
    }

    async fn fetch_leads(&self) -> DomainResult<Vec<Lead>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn
            .prepare(
                "SELECT id, title, contact_name, whatsapp, column_id, order_index, created_at
                 FROM leads ORDER BY column_id ASC, order_index ASC",
            )
            .map_err(|e| DomainError::Storage(e.to_string()))?;

        let rows = stmt
            .query_map([], row_to_lead)
            .map_err(|e| DomainError::Storage(e.to_string()))?;

        let mut leads = Vec::new();
        for row in rows {
            leads.push(row.map_err(|e| DomainError::Storage(e.to_string()))?);
        }
        Ok(leads)
    }

    async fn fetch_columns(&self) -> DomainResult<Vec<Column>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn
            .prepare("SELECT id, title, color, order_index FROM columns ORDER BY order_index ASC")
            .map_err(|e| DomainError::Storage(e.to_string()))?;

        let rows = stmt
            .query_map([], row_to_column)
            .map_err(|e| DomainError::Storage(e.to_string()))?;

        let mut columns = Vec::new();
        for row in rows {
            columns.push(row.map_err(|e| DomainError::Storage(e.to_string()))?);
        }
        Ok(columns)
    }
}
