//! Kanban board state: lead collection, drag token, optimistic status moves.
//!
//! SYSTEM CONTEXT
//! ==============
//! The leads page owns one `RwSignal<KanbanState>`. Columns are derived views
//! recomputed from the collection on every change; nothing else holds lead
//! data for the board.
//!
//! DESIGN
//! ======
//! The collection lives behind an `Arc`. A drop builds the next collection,
//! swaps it in, and keeps the previous `Arc` as the rollback snapshot, so the
//! UI re-renders before the request is sent and a failed request restores the
//! exact prior collection in O(1).
//!
//! A status move is a three step protocol:
//! 1. [`KanbanState::drag_end`] applies the change and returns a
//!    [`StatusChange`].
//! 2. [`commit`] sends it through a [`LeadStatusUpdater`].
//! 3. [`KanbanState::settle`] confirms it or rolls it back.
//!
//! Only one change may be in flight; drags are refused until it settles.

#[cfg(test)]
#[path = "kanban_test.rs"]
mod kanban_test;

use std::future::Future;
use std::sync::Arc;

use crate::net::types::{Lead, LeadStatus};
use crate::state::ui::LeadFilter;

/// A status move the backend rejected or never acknowledged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("could not move lead {lead_id} to {status}: {reason}")]
pub struct StatusUpdateFailed {
    pub lead_id: i64,
    pub status: LeadStatus,
    pub reason: String,
}

impl StatusUpdateFailed {
    pub fn new(lead_id: i64, status: LeadStatus, reason: impl Into<String>) -> Self {
        Self { lead_id, status, reason: reason.into() }
    }
}

/// Backend capability the board needs: persist one lead's status.
pub trait LeadStatusUpdater {
    /// On `Ok`, the persisted status equals `status`.
    fn update_lead_status(
        &self,
        lead_id: i64,
        status: LeadStatus,
    ) -> impl Future<Output = Result<(), StatusUpdateFailed>>;
}

/// An optimistically applied status move awaiting backend confirmation.
#[derive(Clone, Debug)]
pub struct StatusChange {
    pub lead_id: i64,
    pub from: LeadStatus,
    pub to: LeadStatus,
    snapshot: Arc<Vec<Lead>>,
    applied: Arc<Vec<Lead>>,
}

impl PartialEq for StatusChange {
    fn eq(&self, other: &Self) -> bool {
        self.lead_id == other.lead_id
            && self.from == other.from
            && self.to == other.to
            && Arc::ptr_eq(&self.applied, &other.applied)
    }
}

/// Result of interpreting a drop gesture.
#[derive(Clone, Debug, PartialEq)]
pub enum DropOutcome {
    /// Target is neither a column nor a known lead, or the dragged lead is gone.
    Unresolved,
    /// Lead already has the target status; nothing to write.
    Unchanged,
    /// A previous move is still awaiting the backend.
    Busy,
    /// Applied locally; send it with [`commit`] and then [`KanbanState::settle`].
    Applied(StatusChange),
}

#[derive(Clone, Debug, Default)]
pub struct KanbanState {
    leads: Arc<Vec<Lead>>,
    dragging: Option<i64>,
    in_flight: Option<StatusChange>,
    /// Lead whose detail modal is open.
    selected: Option<i64>,
    /// True while the mount-time fetch is running.
    pub loading: bool,
    /// Last fetch failure shown above the board.
    pub error: Option<String>,
}

impl KanbanState {
    pub fn new(leads: Vec<Lead>) -> Self {
        Self { leads: Arc::new(leads), ..Self::default() }
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    /// Shared handle to the current collection.
    pub fn snapshot(&self) -> Arc<Vec<Lead>> {
        Arc::clone(&self.leads)
    }

    pub fn lead(&self, lead_id: i64) -> Option<&Lead> {
        self.leads.iter().find(|l| l.id == lead_id)
    }

    /// Install a freshly fetched collection.
    pub fn replace_all(&mut self, leads: Vec<Lead>) {
        self.leads = Arc::new(leads);
        self.loading = false;
        self.error = None;
    }

    /// Swap in the backend's copy of an edited lead. Returns false if it is gone.
    ///
    /// Copy-on-write: a pending status move keeps its own snapshot, and a
    /// later rollback then only touches the moved lead.
    pub fn replace_one(&mut self, lead: Lead) -> bool {
        let Some(index) = self.leads.iter().position(|l| l.id == lead.id) else {
            return false;
        };
        Arc::make_mut(&mut self.leads)[index] = lead;
        true
    }

    /// Drop a deleted lead, closing its detail view and drag if open.
    pub fn remove(&mut self, lead_id: i64) -> bool {
        let Some(index) = self.leads.iter().position(|l| l.id == lead_id) else {
            return false;
        };
        Arc::make_mut(&mut self.leads).remove(index);
        if self.selected == Some(lead_id) {
            self.selected = None;
        }
        if self.dragging == Some(lead_id) {
            self.dragging = None;
        }
        true
    }

    /// Insert a newly created lead at the front of the collection.
    pub fn prepend(&mut self, lead: Lead) {
        Arc::make_mut(&mut self.leads).insert(0, lead);
    }

    /// Open the detail view for `lead_id`. Returns false for unknown ids.
    pub fn open_detail(&mut self, lead_id: i64) -> bool {
        if self.lead(lead_id).is_none() {
            return false;
        }
        self.selected = Some(lead_id);
        true
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    /// Lead shown in the detail view, read from the live collection.
    pub fn selected(&self) -> Option<&Lead> {
        self.selected.and_then(|id| self.lead(id))
    }

    /// Leads in `status`, in collection order.
    pub fn group_by_status(&self, status: LeadStatus) -> Vec<&Lead> {
        self.leads.iter().filter(|l| l.status == status).collect()
    }

    /// One entry per kanban column, restricted to leads matching `filter`.
    pub fn columns(&self, filter: &LeadFilter) -> Vec<(LeadStatus, Vec<&Lead>)> {
        LeadStatus::PIPELINE
            .into_iter()
            .map(|status| {
                let leads = self
                    .group_by_status(status)
                    .into_iter()
                    .filter(|l| filter.matches(l))
                    .collect();
                (status, leads)
            })
            .collect()
    }

    pub fn dragging(&self) -> Option<i64> {
        self.dragging
    }

    pub fn in_flight(&self) -> Option<&StatusChange> {
        self.in_flight.as_ref()
    }

    /// False while a move is in flight; cards render as non-draggable.
    pub fn can_drag(&self) -> bool {
        self.in_flight.is_none()
    }

    /// Record `lead_id` as being dragged. Returns false while a move is in flight.
    pub fn drag_start(&mut self, lead_id: i64) -> bool {
        if self.in_flight.is_some() {
            return false;
        }
        self.dragging = Some(lead_id);
        true
    }

    /// Forget the drag token without touching data.
    pub fn drag_cancel(&mut self) {
        self.dragging = None;
    }

    /// Finish the current drag on `target`, if a drag is active.
    pub fn drop_on(&mut self, target: Option<&str>) -> DropOutcome {
        match self.dragging.take() {
            Some(lead_id) => self.drag_end(lead_id, target),
            None => DropOutcome::Unresolved,
        }
    }

    /// Interpret a drop of `dragged_id` on `target` and apply it optimistically.
    ///
    /// `target` is either a column key or the id of the lead card dropped on.
    pub fn drag_end(&mut self, dragged_id: i64, target: Option<&str>) -> DropOutcome {
        self.dragging = None;

        let Some(to) = target.and_then(|t| self.resolve_target(t)) else {
            return DropOutcome::Unresolved;
        };
        let Some(index) = self.leads.iter().position(|l| l.id == dragged_id) else {
            return DropOutcome::Unresolved;
        };
        let from = self.leads[index].status;
        if from == to {
            return DropOutcome::Unchanged;
        }
        if self.in_flight.is_some() {
            return DropOutcome::Busy;
        }

        let mut next = Vec::clone(&self.leads);
        next[index].status = to;
        let applied = Arc::new(next);
        let snapshot = std::mem::replace(&mut self.leads, Arc::clone(&applied));

        let change = StatusChange { lead_id: dragged_id, from, to, snapshot, applied };
        self.in_flight = Some(change.clone());
        DropOutcome::Applied(change)
    }

    /// Column key first, then the status of the lead card with that id.
    fn resolve_target(&self, target: &str) -> Option<LeadStatus> {
        if let Some(status) = LeadStatus::column_from_key(target) {
            return Some(status);
        }
        let target_id = target.parse::<i64>().ok()?;
        self.lead(target_id).map(|l| l.status)
    }

    /// Reconcile `change` with the backend's answer.
    ///
    /// Returns the failure to surface to the user, once, when rolling back.
    pub fn settle(
        &mut self,
        change: &StatusChange,
        result: Result<(), StatusUpdateFailed>,
    ) -> Option<StatusUpdateFailed> {
        if self.in_flight.as_ref() == Some(change) {
            self.in_flight = None;
        }
        match result {
            Ok(()) => None,
            Err(err) => {
                self.rollback(change);
                Some(err)
            }
        }
    }

    fn rollback(&mut self, change: &StatusChange) {
        if Arc::ptr_eq(&self.leads, &change.applied) {
            self.leads = Arc::clone(&change.snapshot);
            return;
        }
        // A refetch replaced the collection after the drop; only undo this
        // lead, and only if it still shows the optimistic status.
        let leads = Arc::make_mut(&mut self.leads);
        if let Some(lead) = leads
            .iter_mut()
            .find(|l| l.id == change.lead_id && l.status == change.to)
        {
            lead.status = change.from;
        }
    }
}

/// Send `change` to the backend. No retry; any error means rollback.
///
/// # Errors
///
/// Returns the updater's failure unchanged.
pub async fn commit<U: LeadStatusUpdater>(updater: &U, change: &StatusChange) -> Result<(), StatusUpdateFailed> {
    updater.update_lead_status(change.lead_id, change.to).await
}
