//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`kanban`, `dashboard`, `lead_form`, `ui`,
//! `notices`) so components depend on small focused models provided through
//! context.

pub mod dashboard;
pub mod kanban;
pub mod lead_form;
pub mod notices;
pub mod ui;
