//! REST API helpers for the lead endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native builds: stubs returning
//! [`ApiError::Unavailable`], since these endpoints are only meaningful in the
//! browser session that holds the auth cookie.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Pages decide how a failure
//! degrades (error banner for the bulk fetch, rollback for a status move).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::config::ApiConfig;
use super::types::{Lead, LeadDraft, LeadStatus};
#[cfg(feature = "hydrate")]
use super::types::StatusUpdateRequest;
use crate::state::kanban::{LeadStatusUpdater, StatusUpdateFailed};

/// Transport-level failure talking to the lead API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed: {0}")]
    Status(u16),
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn leads_endpoint(config: &ApiConfig) -> String {
    config.url("/leads/")
}

#[cfg(any(test, feature = "hydrate"))]
fn lead_update_endpoint(config: &ApiConfig, lead_id: i64) -> String {
    config.url(&format!("/leads/{lead_id}/update/"))
}

#[cfg(any(test, feature = "hydrate"))]
fn lead_create_endpoint(config: &ApiConfig) -> String {
    config.url("/leads/create/")
}

#[cfg(any(test, feature = "hydrate"))]
fn lead_delete_endpoint(config: &ApiConfig, lead_id: i64) -> String {
    config.url(&format!("/leads/{lead_id}/delete/"))
}

/// Extract cookie `name` from a `document.cookie` style string.
#[cfg(any(test, feature = "hydrate"))]
fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_owned())
    })
}

#[cfg(feature = "hydrate")]
fn csrf_token(config: &ApiConfig) -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let cookies = document.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()?;
    cookie_value(&cookies, &config.csrf_cookie)
}

/// Attach the CSRF header to a mutating request when the cookie is present.
#[cfg(feature = "hydrate")]
fn with_csrf(request: gloo_net::http::RequestBuilder, config: &ApiConfig) -> gloo_net::http::RequestBuilder {
    match csrf_token(config) {
        Some(token) => request.header(super::config::CSRF_HEADER, &token),
        None => request,
    }
}

/// Send a JSON body and decode the lead the backend echoes back.
#[cfg(feature = "hydrate")]
async fn send_lead_draft(request: gloo_net::http::RequestBuilder, draft: &LeadDraft) -> Result<Lead, ApiError> {
    let resp = request
        .json(draft)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<Lead>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch every lead visible to the current session from `GET /leads/`.
///
/// # Errors
///
/// Returns an error if the request fails, the server responds with a non-OK
/// status, or the body is not a lead array.
pub async fn fetch_leads(config: &ApiConfig) -> Result<Vec<Lead>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&leads_endpoint(config))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<Vec<Lead>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(ApiError::Unavailable)
    }
}

/// Persist a status move via `PUT /leads/{id}/update/`.
///
/// # Errors
///
/// Returns an error if the request cannot be sent or the server responds with
/// a non-OK status. The response body is ignored.
pub async fn update_lead_status(config: &ApiConfig, lead_id: i64, status: LeadStatus) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = with_csrf(gloo_net::http::Request::put(&lead_update_endpoint(config, lead_id)), config);
        let resp = request
            .json(&StatusUpdateRequest { status })
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, lead_id, status);
        Err(ApiError::Unavailable)
    }
}

/// Save edited fields via `PUT /leads/{id}/update/` and return the stored lead.
///
/// # Errors
///
/// Returns an error if the request fails, the server rejects the edit, or the
/// echoed lead cannot be decoded.
pub async fn update_lead(config: &ApiConfig, lead_id: i64, draft: &LeadDraft) -> Result<Lead, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = with_csrf(gloo_net::http::Request::put(&lead_update_endpoint(config, lead_id)), config);
        send_lead_draft(request, draft).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, lead_id, draft);
        Err(ApiError::Unavailable)
    }
}

/// Create a lead via `POST /leads/create/` and return it with its new id.
///
/// # Errors
///
/// Returns an error if the request fails, the server rejects the draft, or the
/// created lead cannot be decoded.
pub async fn create_lead(config: &ApiConfig, draft: &LeadDraft) -> Result<Lead, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = with_csrf(gloo_net::http::Request::post(&lead_create_endpoint(config)), config);
        send_lead_draft(request, draft).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, draft);
        Err(ApiError::Unavailable)
    }
}

/// Delete a lead via `DELETE /leads/{id}/delete/`.
///
/// # Errors
///
/// Returns an error if the request fails or the server responds with a non-OK
/// status.
pub async fn delete_lead(config: &ApiConfig, lead_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_csrf(gloo_net::http::Request::delete(&lead_delete_endpoint(config, lead_id)), config)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, lead_id);
        Err(ApiError::Unavailable)
    }
}

/// [`LeadStatusUpdater`] backed by the REST API.
#[derive(Clone, Debug)]
pub struct RestLeadUpdater {
    config: ApiConfig,
}

impl RestLeadUpdater {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

impl LeadStatusUpdater for RestLeadUpdater {
    async fn update_lead_status(&self, lead_id: i64, status: LeadStatus) -> Result<(), StatusUpdateFailed> {
        update_lead_status(&self.config, lead_id, status)
            .await
            .map_err(|e| StatusUpdateFailed::new(lead_id, status, e.to_string()))
    }
}
