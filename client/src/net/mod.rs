//! Networking modules for the lead REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `config` resolves where they go, and
//! `types` defines the lead wire schema.

pub mod api;
pub mod config;
pub mod types;
