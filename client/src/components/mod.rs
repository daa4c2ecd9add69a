//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the board, cards and dashboard widgets. They report user
//! intent through callbacks; pages own the state changes.

pub mod create_lead_modal;
pub mod kanban_column;
pub mod lead_card;
pub mod lead_detail_modal;
pub mod lead_form;
pub mod lead_list_modal;
pub mod leads_table;
pub mod notice_tray;
pub mod status_card;
