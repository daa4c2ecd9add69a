//! Lead wire model shared by the REST layer and client state.
//!
//! DESIGN
//! ======
//! Only `id` and `status` are structural. Everything else a lead carries is
//! descriptive payload: views read a few typed fields for display, and the
//! remainder is kept verbatim in `extra` so serde round-trips stay lossless.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Pipeline stage of a lead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Proposal,
    Negotiation,
    Won,
    Lost,
    /// Dashboard-only stage; never rendered as a kanban column.
    Hot,
    /// Dashboard-only stage; never rendered as a kanban column.
    Inactive,
}

impl LeadStatus {
    /// Kanban columns in display order.
    pub const PIPELINE: [Self; 7] = [
        Self::New,
        Self::Contacted,
        Self::Qualified,
        Self::Proposal,
        Self::Negotiation,
        Self::Won,
        Self::Lost,
    ];

    /// Every status the backend may report.
    pub const ALL: [Self; 9] = [
        Self::New,
        Self::Contacted,
        Self::Qualified,
        Self::Proposal,
        Self::Negotiation,
        Self::Won,
        Self::Lost,
        Self::Hot,
        Self::Inactive,
    ];

    /// Wire key, also used as the DOM drop-target id of a column.
    pub fn key(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::Qualified => "qualified",
            Self::Proposal => "proposal",
            Self::Negotiation => "negotiation",
            Self::Won => "won",
            Self::Lost => "lost",
            Self::Hot => "hot",
            Self::Inactive => "inactive",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Contacted => "Contacted",
            Self::Qualified => "Qualified",
            Self::Proposal => "Proposal",
            Self::Negotiation => "Negotiation",
            Self::Won => "Won",
            Self::Lost => "Lost",
            Self::Hot => "Hot",
            Self::Inactive => "Inactive",
        }
    }

    /// Column accent color.
    pub fn color(self) -> &'static str {
        match self {
            Self::New => "#3b82f6",
            Self::Contacted => "#f59e0b",
            Self::Qualified => "#8b5cf6",
            Self::Proposal => "#ec4899",
            Self::Negotiation => "#f43f5e",
            Self::Won => "#10b981",
            Self::Lost => "#64748b",
            Self::Hot => "#ef4444",
            Self::Inactive => "#94a3b8",
        }
    }

    /// Parse any known status key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Parse a key only if it names a kanban column.
    pub fn column_from_key(key: &str) -> Option<Self> {
        Self::PIPELINE.into_iter().find(|s| s.key() == key)
    }
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A sales opportunity as returned by `GET /leads/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    /// Backend primary key, stable for the session.
    pub id: i64,
    /// Current pipeline stage.
    pub status: LeadStatus,
    /// Descriptive payload; never consulted by the kanban controller.
    #[serde(flatten)]
    pub details: LeadDetails,
}

/// Descriptive lead fields used for display and dashboard aggregation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadDetails {
    pub company: Option<String>,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
    /// Deal value; the backend may send a decimal string or a number.
    #[serde(default, deserialize_with = "deserialize_lenient_amount")]
    pub deal_value: Option<f64>,
    pub division: Option<String>,
    pub priority: Option<String>,
    /// Personnel id the lead is assigned to.
    pub assigned_to: Option<i64>,
    pub assigned_to_name: Option<String>,
    /// ISO 8601 timestamp of the last backend update.
    pub updated_at: Option<String>,
    /// Fields this client does not model.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Lead {
    /// Deal value with missing or unparsable amounts treated as zero.
    pub fn deal_value(&self) -> f64 {
        self.details.deal_value.unwrap_or(0.0)
    }

    pub fn is_assigned(&self) -> bool {
        self.details.assigned_to.is_some()
    }
}

/// Body of `PUT /leads/{id}/update/` for a status move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatusUpdateRequest {
    pub status: LeadStatus,
}

/// Editable lead fields for `POST /leads/create/` and `PUT /leads/{id}/update/`.
///
/// Unset fields are omitted from the body, so an update leaves them as they are.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LeadDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deal_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub division: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LeadStatus>,
}

fn deserialize_lenient_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(number)) => number.as_f64().filter(|v| v.is_finite()),
        Some(serde_json::Value::String(raw)) => raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    })
}
