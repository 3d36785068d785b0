//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod lead;
mod column;

pub use entity::{Entity, DomainError, DomainResult};
pub use lead::{Lead, LeadDraft};
pub use column::Column;
