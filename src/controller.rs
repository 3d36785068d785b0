//! Optimistic Commit Controller
//!
//! Owns the local board state. Every completed drag goes through
//! `apply_move`: snapshot, compute, apply locally, persist, and roll back to
//! the snapshot when any write in the batch fails. Only one move may be in
//! flight at a time; overlapping gestures are rejected, not queued.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinSet;

use crate::board::{column_leads, column_size, compute_reorder, renumber, DropEvent};
use crate::domain::{Column, DomainError, DomainResult, Lead, LeadDraft};
use crate::repository::{LeadPatch, LeadStore};

/// How one `apply_move` call settled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Applied locally and all writes succeeded
    Committed,
    /// Identity move or unknown lead; nothing changed, nothing written
    NoChange,
    /// Gesture had no destination; nothing changed, nothing written
    Cancelled,
    /// Another move is still persisting; this one was dropped
    Rejected,
    /// Applied locally, a write failed, local state restored to the snapshot
    RolledBack(DomainError),
}

/// Controller for the board's lead collection
///
/// Columns are fetched once at load time and static afterwards. The lead
/// collection is the only shared mutable resource; it is read and written
/// exclusively through this controller.
pub struct BoardController {
    store: Arc<dyn LeadStore>,
    columns: Vec<Column>,
    leads: Mutex<Vec<Lead>>,
    move_in_flight: AtomicBool,
}

/// Clears the in-flight flag on every exit path
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl BoardController {
    /// Build a controller around already-fetched board data
    pub fn new(store: Arc<dyn LeadStore>, columns: Vec<Column>, leads: Vec<Lead>) -> Self {
        Self {
            store,
            columns,
            leads: Mutex::new(leads),
            move_in_flight: AtomicBool::new(false),
        }
    }

    /// Fetch columns and leads from the store and build a controller
    pub async fn load(store: Arc<dyn LeadStore>) -> DomainResult<Self> {
        let columns = store.fetch_columns().await?;
        let leads = store.fetch_leads().await?;
        log::info!("Board loaded: {} columns, {} leads", columns.len(), leads.len());
        Ok(Self::new(store, columns, leads))
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Snapshot of the current lead collection
    pub async fn leads(&self) -> Vec<Lead> {
        self.leads.lock().await.clone()
    }

    /// Leads of one column, sorted by position
    pub async fn column_leads(&self, column_id: u32) -> Vec<Lead> {
        column_leads(&self.leads.lock().await, column_id)
    }

    pub fn is_move_in_flight(&self) -> bool {
        self.move_in_flight.load(Ordering::Acquire)
    }

    /// Single-slot admission for state-mutating operations
    fn try_begin_move(&self) -> Option<InFlightGuard<'_>> {
        self.move_in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard(&self.move_in_flight))
    }

    /// Apply one completed drag gesture
    ///
    /// The optimistic apply is synchronous: local state reflects the move
    /// before any write is issued. On any write failure the whole move is
    /// rolled back locally; the remote store may briefly disagree with the
    /// rolled-back view for writes that already landed, until the next
    /// `load` reconciles it. Failures never propagate as `Err`; they settle
    /// as `MoveOutcome::RolledBack`.
    pub async fn apply_move(&self, event: DropEvent) -> DomainResult<MoveOutcome> {
        let Some(descriptor) = event.into_move() else {
            log::debug!("Drag cancelled, no destination");
            return Ok(MoveOutcome::Cancelled);
        };

        let Some(_guard) = self.try_begin_move() else {
            log::warn!(
                "Rejected move of lead {}: another move is still persisting",
                descriptor.lead_id
            );
            return Ok(MoveOutcome::Rejected);
        };

        let (snapshot, writes) = {
            let mut leads = self.leads.lock().await;
            let outcome = compute_reorder(&leads, &self.columns, &descriptor);
            if !outcome.changed {
                return Ok(MoveOutcome::NoChange);
            }
            let snapshot = std::mem::replace(&mut *leads, outcome.leads);
            let writes = placement_writes(&snapshot, &leads, outcome.descriptor.lead_id);
            (snapshot, writes)
        };

        log::debug!(
            "Persisting move of lead {}: {} point update(s)",
            descriptor.lead_id,
            writes.len()
        );

        match self.persist_batch(writes).await {
            Ok(()) => Ok(MoveOutcome::Committed),
            Err(e) => {
                *self.leads.lock().await = snapshot;
                log::warn!("Failed to persist lead move, rolled back: {}", e);
                Ok(MoveOutcome::RolledBack(e))
            }
        }
    }

    /// Create a lead appended at the end of its column
    ///
    /// The remote write happens first; local state only changes once the
    /// store confirmed, so there is nothing to roll back.
    pub async fn add_lead(&self, draft: LeadDraft) -> DomainResult<Lead> {
        let Some(_guard) = self.try_begin_move() else {
            return Err(DomainError::Conflict("A move is still persisting".to_string()));
        };

        let next_index = {
            let leads = self.leads.lock().await;
            column_size(&leads, draft.column_id) as i32
        };

        let created = self.store.create_lead(&draft, next_index).await?;
        log::debug!(
            "Lead {} appended to column {} at index {}",
            created.id,
            created.column_id,
            created.order_index
        );
        self.leads.lock().await.push(created.clone());
        Ok(created)
    }

    /// Delete a lead and close the index gap in its column
    ///
    /// Optimistic like `apply_move`: the lead disappears locally first, the
    /// delete plus sibling renumbering writes follow, and any failure
    /// restores the snapshot before the error is returned.
    pub async fn remove_lead(&self, id: u32) -> DomainResult<()> {
        let Some(_guard) = self.try_begin_move() else {
            return Err(DomainError::Conflict("A move is still persisting".to_string()));
        };

        let (snapshot, writes) = {
            let mut leads = self.leads.lock().await;
            let Some(position) = leads.iter().position(|l| l.id == id) else {
                return Err(DomainError::NotFound(format!("Lead {} not found", id)));
            };
            let column_id = leads[position].column_id;
            let snapshot = leads.clone();

            leads.remove(position);
            let mut sub = column_leads(&leads, column_id);
            renumber(&mut sub);
            for renumbered in &sub {
                if let Some(lead) = leads.iter_mut().find(|l| l.id == renumbered.id) {
                    lead.order_index = renumbered.order_index;
                }
            }

            let writes: Vec<(u32, LeadPatch)> = leads
                .iter()
                .filter_map(|lead| {
                    let prior = snapshot.iter().find(|b| b.id == lead.id)?;
                    (!prior.same_placement(lead)).then(|| (lead.id, LeadPatch::order(lead.order_index)))
                })
                .collect();
            (snapshot, writes)
        };

        let persisted = async {
            self.store.delete_lead(id).await?;
            self.persist_batch(writes).await
        }
        .await;

        match persisted {
            Ok(()) => Ok(()),
            Err(e) => {
                *self.leads.lock().await = snapshot;
                log::warn!("Failed to persist lead deletion, rolled back: {}", e);
                Err(e)
            }
        }
    }

    /// Issue all writes concurrently and await the whole batch
    ///
    /// The batch fails if any single write failed; the first failure wins,
    /// but every write is still awaited before returning.
    async fn persist_batch(&self, writes: Vec<(u32, LeadPatch)>) -> DomainResult<()> {
        let mut batch = JoinSet::new();
        for (id, patch) in writes {
            let store = Arc::clone(&self.store);
            batch.spawn(async move { store.update_lead(id, patch).await });
        }

        let mut failure: Option<DomainError> = None;
        while let Some(joined) = batch.join_next().await {
            let result = match joined {
                Ok(result) => result,
                Err(e) => Err(DomainError::Internal(format!("Write task failed: {}", e))),
            };
            if let Err(e) = result {
                if failure.is_none() {
                    failure = Some(e);
                }
            }
        }

        match failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Point updates needed to persist the difference between two board states
///
/// The moved lead always gets a full placement write; every other lead whose
/// placement changed gets a position-only write.
fn placement_writes(before: &[Lead], after: &[Lead], moved_id: u32) -> Vec<(u32, LeadPatch)> {
    let mut writes = Vec::new();
    for lead in after {
        if lead.id == moved_id {
            writes.push((lead.id, LeadPatch::placement(lead.column_id, lead.order_index)));
            continue;
        }
        let Some(prior) = before.iter().find(|b| b.id == lead.id) else {
            continue;
        };
        if !prior.same_placement(lead) {
            writes.push((lead.id, LeadPatch::order(lead.order_index)));
        }
    }
    writes
}
