//! Local UI chrome state for the leads page (view mode, filter panel).
//!
//! DESIGN
//! ======
//! Keeps presentation choices out of the kanban collection so filtering and
//! view switches never touch lead data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::net::types::{Lead, LeadStatus};

/// How the leads page renders the collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LeadsViewMode {
    /// Drag-and-drop columns by status.
    #[default]
    Kanban,
    /// Flat table.
    List,
}

/// Status/division filter applied before grouping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadFilter {
    /// `None` means all statuses.
    pub status: Option<LeadStatus>,
    /// `None` means all divisions. Compared case-insensitively.
    pub division: Option<String>,
}

impl LeadFilter {
    pub fn matches(&self, lead: &Lead) -> bool {
        let status_ok = self.status.is_none_or(|s| lead.status == s);
        let division_ok = self.division.as_deref().is_none_or(|wanted| {
            lead.details
                .division
                .as_deref()
                .is_some_and(|d| d.eq_ignore_ascii_case(wanted))
        });
        status_ok && division_ok
    }

    pub fn is_active(&self) -> bool {
        self.status.is_some() || self.division.is_some()
    }

    /// Update the status part from a `<select>` value; `"all"` clears it.
    pub fn set_status_key(&mut self, key: &str) {
        self.status = LeadStatus::from_key(key);
    }

    /// Update the division part from a `<select>` value; `"all"` clears it.
    pub fn set_division_key(&mut self, key: &str) {
        self.division = match key.trim() {
            "" | "all" => None,
            other => Some(other.to_owned()),
        };
    }
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub view_mode: LeadsViewMode,
    pub filter: LeadFilter,
    pub show_filters: bool,
    /// Whether the "New Lead" dialog is open.
    pub show_create: bool,
}
