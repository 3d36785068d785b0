//! Reorder Engine
//!
//! The pure transform behind every completed drag: given the full lead
//! collection and a move descriptor, compute the new collection with dense
//! zero-based indices in every affected column. No I/O, no side effects,
//! never mutates its input.

use crate::domain::{Column, Lead};
use super::partition::{column_leads, renumber};

/// Normalized description of one reorder operation
///
/// `from_index`/`to_index` are positions within the respective column's
/// sorted sub-list, not global indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveDescriptor {
    pub lead_id: u32,
    pub from_column_id: u32,
    pub to_column_id: u32,
    pub from_index: usize,
    pub to_index: usize,
}

/// Result of a reorder computation
#[derive(Debug, Clone)]
pub struct ReorderOutcome {
    /// The full post-move collection, reassembled in column display order
    pub leads: Vec<Lead>,
    /// The move with final column id and clamped indices
    pub descriptor: MoveDescriptor,
    /// False when the move was an identity or referenced an unknown lead
    pub changed: bool,
}

impl ReorderOutcome {
    fn unchanged(leads: &[Lead], descriptor: &MoveDescriptor) -> Self {
        Self {
            leads: leads.to_vec(),
            descriptor: descriptor.clone(),
            changed: false,
        }
    }
}

/// Compute the new lead collection for one move
///
/// Identity moves and moves referencing an unknown lead id return the input
/// unchanged (`changed == false`); out-of-range indices are clamped to the
/// end of the column. Only the source and destination columns are
/// renumbered; every other column keeps its leads byte-for-byte.
pub fn compute_reorder(leads: &[Lead], columns: &[Column], mv: &MoveDescriptor) -> ReorderOutcome {
    let same_column = mv.from_column_id == mv.to_column_id;

    if same_column && mv.from_index == mv.to_index {
        return ReorderOutcome::unchanged(leads, mv);
    }
    if !leads.iter().any(|lead| lead.id == mv.lead_id) {
        return ReorderOutcome::unchanged(leads, mv);
    }

    let mut source = column_leads(leads, mv.from_column_id);
    if source.is_empty() {
        // Stale gesture: the claimed source column holds nothing to move
        return ReorderOutcome::unchanged(leads, mv);
    }
    let from_index = mv.from_index.min(source.len() - 1);

    let (new_source, new_dest, descriptor) = if same_column {
        let moved = source.remove(from_index);
        let to_index = mv.to_index.min(source.len());
        if from_index == to_index {
            return ReorderOutcome::unchanged(leads, mv);
        }
        let lead_id = moved.id;
        source.insert(to_index, moved);
        renumber(&mut source);
        let descriptor = MoveDescriptor {
            lead_id,
            from_index,
            to_index,
            ..mv.clone()
        };
        (source, None, descriptor)
    } else {
        let mut moved = source.remove(from_index);
        moved.column_id = mv.to_column_id;
        let lead_id = moved.id;
        let mut dest = column_leads(leads, mv.to_column_id);
        let to_index = mv.to_index.min(dest.len());
        dest.insert(to_index, moved);
        renumber(&mut source);
        renumber(&mut dest);
        let descriptor = MoveDescriptor {
            lead_id,
            from_index,
            to_index,
            ..mv.clone()
        };
        (source, Some(dest), descriptor)
    };

    let leads = reassemble(leads, columns, mv, &new_source, new_dest.as_deref());

    ReorderOutcome {
        leads,
        descriptor,
        changed: true,
    }
}

/// Concatenate per-column sub-lists in column display order
///
/// Untouched columns contribute their leads in original input order with
/// original indices. Leads referencing a column id absent from `columns`
/// are carried through unchanged at the tail so no lead is ever dropped.
fn reassemble(
    leads: &[Lead],
    columns: &[Column],
    mv: &MoveDescriptor,
    new_source: &[Lead],
    new_dest: Option<&[Lead]>,
) -> Vec<Lead> {
    let mut ordered: Vec<&Column> = columns.iter().collect();
    ordered.sort_by_key(|col| col.order_index);

    let mut result = Vec::with_capacity(leads.len());
    let mut source_emitted = false;
    let mut dest_emitted = false;

    for col in &ordered {
        if col.id == mv.from_column_id {
            result.extend_from_slice(new_source);
            source_emitted = true;
        } else if col.id == mv.to_column_id {
            if let Some(dest) = new_dest {
                result.extend_from_slice(dest);
            }
            dest_emitted = true;
        } else {
            result.extend(leads.iter().filter(|l| l.column_id == col.id).cloned());
        }
    }

    if !source_emitted {
        result.extend_from_slice(new_source);
    }
    if !dest_emitted {
        if let Some(dest) = new_dest {
            result.extend_from_slice(dest);
        }
    }

    // Leads in columns unknown to the board and untouched by this move
    result.extend(
        leads
            .iter()
            .filter(|l| {
                l.column_id != mv.from_column_id
                    && l.column_id != mv.to_column_id
                    && !columns.iter().any(|c| c.id == l.column_id)
            })
            .cloned(),
    );

    result
}
