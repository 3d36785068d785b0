//! Column Partitioning
//!
//! Pure helpers to split the flat lead collection into per-column sub-lists
//! and to renumber a sub-list into a dense zero-based ranking.

use crate::domain::Lead;

/// Sub-list of leads belonging to one column, sorted by `order_index`
///
/// The sort is stable: leads that transiently share an index keep their
/// relative input order, so the result is a total order even while the
/// dense-index invariant is being re-established.
pub fn column_leads(leads: &[Lead], column_id: u32) -> Vec<Lead> {
    let mut sub: Vec<Lead> = leads
        .iter()
        .filter(|lead| lead.column_id == column_id)
        .cloned()
        .collect();
    sub.sort_by_key(|lead| lead.order_index);
    sub
}

/// Number of leads currently in a column
pub fn column_size(leads: &[Lead], column_id: u32) -> usize {
    leads.iter().filter(|lead| lead.column_id == column_id).count()
}

/// Renumber a column sub-list to sequential positions (0, 1, 2, ...)
pub fn renumber(sub: &mut [Lead]) {
    for (position, lead) in sub.iter_mut().enumerate() {
        lead.order_index = position as i32;
    }
}
