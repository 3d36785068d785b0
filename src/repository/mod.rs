//! Repository Layer
//!
//! Store abstractions and the SQLite implementation.

mod traits;
mod db;
mod lead_repo;

#[cfg(test)]
mod tests;

pub use traits::{LeadPatch, LeadStore};
pub use db::{open_db, open_in_memory};
pub use lead_repo::SqliteLeadStore;
