//! Database Connection and Setup
//!
//! Manages the SQLite database connection and migrations.

use rusqlite::Connection;
use std::path::Path;

use crate::domain::{DomainError, DomainResult};

/// Open (or create) the board database at the given path
pub fn open_db(db_path: &Path) -> DomainResult<Connection> {
    let conn = Connection::open(db_path)
        .map_err(|e| DomainError::Storage(format!("Failed to open db: {}", e)))?;
    run_migrations(&conn)?;
    Ok(conn)
}

/// Open an in-memory database (tests, throwaway boards)
pub fn open_in_memory() -> DomainResult<Connection> {
    let conn = Connection::open_in_memory()
        .map_err(|e| DomainError::Storage(format!("Failed to open in-memory db: {}", e)))?;
    run_migrations(&conn)?;
    Ok(conn)
}

/// Check if a column exists in a table
fn column_exists(conn: &Connection, table: &str, column: &str) -> bool {
    let query = format!("PRAGMA table_info({})", table);
    let Ok(mut stmt) = conn.prepare(&query) else {
        return false;
    };
    let Ok(mut rows) = stmt.query([]) else {
        return false;
    };
    while let Ok(Some(row)) = rows.next() {
        if let Ok(name) = row.get::<_, String>(1) {
            if name == column {
                return true;
            }
        }
    }
    false
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS columns (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            color TEXT NOT NULL DEFAULT '#0866FF',
            order_index INTEGER NOT NULL DEFAULT 0
        )",
        [],
    )
    .map_err(|e| DomainError::Storage(e.to_string()))?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS leads (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            contact_name TEXT NOT NULL DEFAULT '',
            whatsapp TEXT NOT NULL DEFAULT '',
            column_id INTEGER NOT NULL,
            order_index INTEGER NOT NULL DEFAULT 0,
            created_at INTEGER
        )",
        [],
    )
    .map_err(|e| DomainError::Storage(e.to_string()))?;

    // Added after initial release: updated_at stamp on placement writes
    if !column_exists(conn, "leads", "updated_at") {
        conn.execute("ALTER TABLE leads ADD COLUMN updated_at INTEGER", [])
            .map_err(|e| DomainError::Storage(format!("Failed to add updated_at: {}", e)))?;
    }

    // Index for the per-column ordered fetch
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_leads_column ON leads(column_id, order_index)",
        [],
    )
    .map_err(|e| DomainError::Storage(e.to_string()))?;

    Ok(())
}
