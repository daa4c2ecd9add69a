//! Editable text fields behind the lead detail and create dialogs.
//!
//! DESIGN
//! ======
//! Inputs are kept as raw strings so a half-typed amount is never lost;
//! [`LeadForm::to_draft`] validates and converts them once, on submit.

#[cfg(test)]
#[path = "lead_form_test.rs"]
mod lead_form_test;

use crate::net::types::{Lead, LeadDraft};

/// One input of the lead form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadField {
    Company,
    ContactName,
    Phone,
    DealValue,
    Division,
    Priority,
}

impl LeadField {
    /// Inputs in display order.
    pub const ALL: [Self; 6] = [
        Self::Company,
        Self::ContactName,
        Self::Phone,
        Self::DealValue,
        Self::Division,
        Self::Priority,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Company => "Company",
            Self::ContactName => "Contact Name",
            Self::Phone => "Phone",
            Self::DealValue => "Deal Value (K)",
            Self::Division => "Division",
            Self::Priority => "Priority",
        }
    }
}

/// Reasons a form cannot be submitted.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LeadFormError {
    #[error("company is required")]
    MissingCompany,
    #[error("deal value must be a non-negative number, got {0:?}")]
    InvalidDealValue(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub company: String,
    pub contact_name: String,
    pub phone: String,
    pub deal_value: String,
    pub division: String,
    pub priority: String,
}

impl LeadForm {
    /// Prefill from an existing lead for editing.
    pub fn from_lead(lead: &Lead) -> Self {
        let d = &lead.details;
        Self {
            company: d.company.clone().unwrap_or_default(),
            contact_name: d.contact_name.clone().unwrap_or_default(),
            phone: d.phone.clone().unwrap_or_default(),
            deal_value: d.deal_value.map(|v| v.to_string()).unwrap_or_default(),
            division: d.division.clone().unwrap_or_default(),
            priority: d.priority.clone().unwrap_or_default(),
        }
    }

    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::Company => &self.company,
            LeadField::ContactName => &self.contact_name,
            LeadField::Phone => &self.phone,
            LeadField::DealValue => &self.deal_value,
            LeadField::Division => &self.division,
            LeadField::Priority => &self.priority,
        }
    }

    pub fn set(&mut self, field: LeadField, value: String) {
        let slot = match field {
            LeadField::Company => &mut self.company,
            LeadField::ContactName => &mut self.contact_name,
            LeadField::Phone => &mut self.phone,
            LeadField::DealValue => &mut self.deal_value,
            LeadField::Division => &mut self.division,
            LeadField::Priority => &mut self.priority,
        };
        *slot = value;
    }

    /// Validate and convert to a request body. Blank optional fields are omitted.
    ///
    /// # Errors
    ///
    /// Returns [`LeadFormError`] if the company is blank or the deal value is
    /// not a non-negative number (thousands separators are accepted).
    pub fn to_draft(&self) -> Result<LeadDraft, LeadFormError> {
        let company = non_blank(&self.company).ok_or(LeadFormError::MissingCompany)?;
        let deal_value = match non_blank(&self.deal_value) {
            None => None,
            Some(raw) => Some(
                raw.replace(',', "")
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite() && *v >= 0.0)
                    .ok_or(LeadFormError::InvalidDealValue(raw))?,
            ),
        };
        Ok(LeadDraft {
            company: Some(company),
            contact_name: non_blank(&self.contact_name),
            phone: non_blank(&self.phone),
            deal_value,
            division: non_blank(&self.division),
            priority: non_blank(&self.priority),
            status: None,
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
