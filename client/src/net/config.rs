//! REST endpoint configuration baked in at build time.
//!
//! The WASM bundle has no process environment at runtime, so values are read
//! with `option_env!` when the crate is compiled:
//!
//! - `LEADBOARD_API_BASE`: API prefix, default `/api`
//! - `LEADBOARD_CSRF_COOKIE`: cookie holding the CSRF token, default `csrftoken`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_CSRF_COOKIE: &str = "csrftoken";

/// Header the backend expects the CSRF token in.
pub const CSRF_HEADER: &str = "X-CSRFToken";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Prefix for every REST path, without a trailing slash.
    pub base_url: String,
    /// Name of the cookie whose value is echoed as the CSRF header.
    pub csrf_cookie: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE.to_owned(), csrf_cookie: DEFAULT_CSRF_COOKIE.to_owned() }
    }
}

impl ApiConfig {
    /// Build config from variables captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("LEADBOARD_API_BASE"), option_env!("LEADBOARD_CSRF_COOKIE"))
    }

    /// Build config from optional raw values; blanks fall back to defaults.
    pub fn from_values(base_url: Option<&str>, csrf_cookie: Option<&str>) -> Self {
        let base_url = non_blank(base_url)
            .map(|raw| raw.trim_end_matches('/').to_owned())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_owned());
        let csrf_cookie = non_blank(csrf_cookie).map_or_else(|| DEFAULT_CSRF_COOKIE.to_owned(), str::to_owned);
        Self { base_url, csrf_cookie }
    }

    /// Join an endpoint path (starting with `/`) onto the base.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}
