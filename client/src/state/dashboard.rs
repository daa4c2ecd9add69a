//! Dashboard aggregates computed from the fetched lead list.
//!
//! SYSTEM CONTEXT
//! ==============
//! Counts are derived client-side from the same `GET /leads/` payload the
//! board uses, so the cards update instantly after a fetch without a
//! separate analytics round-trip.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::collections::BTreeMap;

use crate::net::types::{Lead, LeadStatus};

/// Clickable summary card on the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardCard {
    Status(LeadStatus),
    Unassigned,
    HighPriority,
    Total,
}

impl DashboardCard {
    /// Cards in display order.
    pub const ALL: [Self; 10] = [
        Self::Status(LeadStatus::Hot),
        Self::Status(LeadStatus::Qualified),
        Self::Status(LeadStatus::Proposal),
        Self::Status(LeadStatus::Negotiation),
        Self::Status(LeadStatus::Contacted),
        Self::Status(LeadStatus::Won),
        Self::Unassigned,
        Self::HighPriority,
        Self::Status(LeadStatus::Lost),
        Self::Total,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Status(LeadStatus::Hot) => "Hot Leads",
            Self::Status(LeadStatus::Qualified) => "Qualified",
            Self::Status(LeadStatus::Proposal) => "Proposals Sent",
            Self::Status(LeadStatus::Negotiation) => "In Negotiation",
            Self::Status(LeadStatus::Contacted) => "Contacted",
            Self::Status(LeadStatus::Won) => "Won Deals",
            Self::Status(LeadStatus::Lost) => "Lost Deals",
            Self::Status(other) => other.label(),
            Self::Unassigned => "Unassigned",
            Self::HighPriority => "High Priority",
            Self::Total => "All Leads",
        }
    }

    pub fn matches(self, lead: &Lead) -> bool {
        match self {
            Self::Status(status) => lead.status == status,
            Self::Unassigned => !lead.is_assigned(),
            Self::HighPriority => lead.details.priority.as_deref() == Some("high"),
            Self::Total => true,
        }
    }

    pub fn count(self, leads: &[Lead]) -> usize {
        leads.iter().filter(|l| self.matches(l)).count()
    }

    /// Matching leads in collection order, for the quick-view modal.
    pub fn select(self, leads: &[Lead]) -> Vec<Lead> {
        leads.iter().filter(|l| self.matches(l)).cloned().collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardStats {
    pub total: usize,
    /// Count per status, every status in `LeadStatus::ALL` present.
    pub by_status: BTreeMap<LeadStatus, usize>,
    /// Sum of deal values for leads still being worked (not lost or inactive).
    pub total_pipeline: f64,
    /// Mean deal value over the leads counted in `total_pipeline`.
    pub avg_deal: f64,
    /// Won leads as a percentage of all leads.
    pub conversion_rate: f64,
    pub won_value: f64,
}

impl DashboardStats {
    pub fn from_leads(leads: &[Lead]) -> Self {
        let mut by_status: BTreeMap<LeadStatus, usize> = LeadStatus::ALL.into_iter().map(|s| (s, 0)).collect();
        let mut total_pipeline = 0.0;
        let mut active = 0_u32;
        let mut won_value = 0.0;

        for lead in leads {
            *by_status.entry(lead.status).or_default() += 1;
            if lead.status == LeadStatus::Won {
                won_value += lead.deal_value();
            }
            if !matches!(lead.status, LeadStatus::Lost | LeadStatus::Inactive) {
                total_pipeline += lead.deal_value();
                active += 1;
            }
        }

        let total = leads.len();
        let won = by_status.get(&LeadStatus::Won).copied().unwrap_or(0);
        #[allow(clippy::cast_precision_loss)]
        let conversion_rate = if total == 0 { 0.0 } else { won as f64 / total as f64 * 100.0 };
        let avg_deal = if active == 0 { 0.0 } else { total_pipeline / f64::from(active) };

        Self { total, by_status, total_pipeline, avg_deal, conversion_rate, won_value }
    }

    pub fn count(&self, status: LeadStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }
}

/// Leads per division, sorted by division name. Leads without one are skipped.
pub fn division_counts(leads: &[Lead]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for division in leads.iter().filter_map(|l| l.details.division.as_deref()) {
        *counts.entry(division).or_default() += 1;
    }
    counts.into_iter().map(|(d, n)| (d.to_owned(), n)).collect()
}

/// What the quick-view modal is listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuickView {
    Card(DashboardCard),
    /// Drill-down into one division, matched exactly as listed.
    Division(String),
}

impl QuickView {
    pub fn title(&self) -> String {
        match self {
            Self::Card(card) => card.title().to_owned(),
            Self::Division(division) => format!("{division} Leads"),
        }
    }

    /// Leads behind this view, in collection order.
    pub fn select(&self, leads: &[Lead]) -> Vec<Lead> {
        match self {
            Self::Card(card) => card.select(leads),
            Self::Division(division) => leads
                .iter()
                .filter(|l| l.details.division.as_deref() == Some(division.as_str()))
                .cloned()
                .collect(),
        }
    }
}

/// Page-level state for the dashboard route.
#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub leads: Vec<Lead>,
    pub loading: bool,
    pub error: Option<String>,
    /// Quick-view modal currently open, if any.
    pub quick_view: Option<QuickView>,
}
