//! Lead Board Engine
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - board: Pure reorder engine, column partitioning, drag gesture adapter
//! - controller: Optimistic commit controller owning the local board state
//! - repository: Store abstractions and SQLite implementation
//!
//! One completed drag flows through the layers as:
//! drop event -> move descriptor -> reorder computation -> optimistic local
//! apply -> concurrent point updates -> commit or full rollback.

pub mod domain;
pub mod board;
pub mod controller;
pub mod repository;

pub use board::{
    column_leads, compute_reorder, parse_drop_event, DropDestination, DropEvent, MoveDescriptor,
    ReorderOutcome,
};
pub use controller::{BoardController, MoveOutcome};
pub use domain::{Column, DomainError, DomainResult, Entity, Lead, LeadDraft};
pub use repository::{open_db, open_in_memory, LeadPatch, LeadStore, SqliteLeadStore};
