//! HTTP client for the document backend
//!
//! One function per backend operation, grouped by resource:
//! - [`auth`]: login / register
//! - [`folders`]: folder tree fetch, create, delete
//! - [`documents`]: paged listings, upload, move, delete, download
//! - [`summary`]: AI summary CRUD + refresh
//!
//! Every call attaches the session's bearer token, enforces a fixed
//! deadline, and normalizes failures into [`ApiError`], which carries the
//! user-facing message the UI displays inline. No retries: every failure is
//! terminal for that user action.
//!
//! All request code is client-side only; under `ssr` each operation has a
//! stub that fails without touching the network.

pub mod auth;
pub mod documents;
pub mod folders;
pub mod summary;

use serde::Deserialize;

use crate::core::session::Session;

/// Base URL of the backend, baked in at build time; empty means same-origin.
pub const API_BASE_URL: &str = match option_env!("DOCUVAULT_API_BASE") {
    Some(base) => base,
    None => "",
};

/// Deadline for the full folder-tree fetch and listings.
pub const LIST_DEADLINE_MS: u32 = 15_000;
/// Deadline for small mutations (create/delete/move).
pub const MUTATION_DEADLINE_MS: u32 = 10_000;
/// Deadline for uploads, downloads and summary generation.
pub const LONG_DEADLINE_MS: u32 = 30_000;

/// Normalized failure for every backend operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No token present, or the backend rejected the token.
    #[error("Session expired. Please login again.")]
    Auth,

    /// Client-side validation failed; no request was made.
    #[error("{0}")]
    Validation(String),

    /// The resource does not exist. For listings this displays as an empty
    /// result, not as an error.
    #[error("Not found")]
    NotFound,

    /// Transport failure or deadline exceeded.
    #[error("{0}")]
    Network(String),

    /// Non-2xx response, with the backend's message when it sent one.
    #[error("{message}")]
    Server { status: u16, message: String },
}

impl ApiError {
    /// Map a non-2xx HTTP status (and optional backend message) to an error.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            401 => ApiError::Auth,
            404 => ApiError::NotFound,
            403 => ApiError::Server {
                status,
                message: message
                    .unwrap_or_else(|| "Access denied. You don't have permission.".to_string()),
            },
            _ => ApiError::Server {
                status,
                message: message.unwrap_or_else(|| format!("Server error: {}", status)),
            },
        }
    }

    /// Whether this failure should surface the session-expired banner.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Auth)
    }

    fn unavailable() -> Self {
        ApiError::Network("Not available during server rendering".to_string())
    }
}

impl From<crate::core::validation::ValidationError> for ApiError {
    fn from(err: crate::core::validation::ValidationError) -> Self {
        ApiError::Validation(err.0)
    }
}

/// Generic `{ "message": ... }` acknowledgement body.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Backend client carrying the injected session.
#[derive(Clone, Copy)]
pub struct ApiClient {
    session: Session,
}

impl ApiClient {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> Session {
        self.session
    }

    /// The session token, or [`ApiError::Auth`] when signed out.
    fn require_token(&self) -> Result<String, ApiError> {
        self.session.token().ok_or(ApiError::Auth)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", API_BASE_URL, path)
    }
}

/// Provide an [`ApiClient`] over the given session to the component tree.
pub fn provide_api_client(session: Session) -> ApiClient {
    let client = ApiClient::new(session);
    leptos::prelude::provide_context(client);
    client
}

/// Get the [`ApiClient`] from the component tree.
pub fn use_api_client() -> ApiClient {
    leptos::prelude::expect_context::<ApiClient>()
}

// ============================================================================
// Fetch plumbing (client-side only)
// ============================================================================

#[cfg(not(feature = "ssr"))]
pub(crate) mod http {
    use futures::future::{Either, select};
    use futures::pin_mut;
    use gloo_timers::future::TimeoutFuture;
    use serde::de::DeserializeOwned;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, Response};

    use super::ApiError;

    /// Request body variants the client sends.
    pub(crate) enum Payload {
        Empty,
        Json(String),
        Form(web_sys::FormData),
    }

    fn transport_error(err: impl std::fmt::Debug) -> ApiError {
        ApiError::Network(format!("Request error: {:?}", err))
    }

    /// Perform one fetch with the given deadline, returning the raw
    /// response. Non-2xx statuses are not treated as errors here; callers
    /// check via [`ensure_ok`].
    pub(crate) async fn send(
        method: &str,
        url: &str,
        token: Option<&str>,
        payload: Payload,
        deadline_ms: u32,
    ) -> Result<Response, ApiError> {
        let window =
            web_sys::window().ok_or_else(|| ApiError::Network("No window".to_string()))?;

        let opts = RequestInit::new();
        opts.set_method(method);
        match &payload {
            Payload::Empty => {}
            Payload::Json(body) => opts.set_body(&body.as_str().into()),
            Payload::Form(form) => opts.set_body(form),
        }

        let req = Request::new_with_str_and_init(url, &opts).map_err(transport_error)?;
        if matches!(payload, Payload::Json(_)) {
            req.headers()
                .set("Content-Type", "application/json")
                .map_err(transport_error)?;
        }
        if let Some(token) = token {
            req.headers()
                .set("Authorization", &format!("Bearer {}", token))
                .map_err(transport_error)?;
        }

        let fetch = JsFuture::from(window.fetch_with_request(&req));
        let deadline = TimeoutFuture::new(deadline_ms);
        pin_mut!(fetch);
        pin_mut!(deadline);

        let resp_value = match select(fetch, deadline).await {
            Either::Left((result, _)) => result.map_err(|_| {
                ApiError::Network(
                    "No response from server. Please check your connection.".to_string(),
                )
            })?,
            Either::Right(((), _)) => {
                return Err(ApiError::Network(
                    "Request timed out. Please try again.".to_string(),
                ));
            }
        };

        resp_value.dyn_into::<Response>().map_err(transport_error)
    }

    /// Read the response body as JSON.
    pub(crate) async fn json_body(resp: &Response) -> Result<serde_json::Value, ApiError> {
        let promise = resp.json().map_err(transport_error)?;
        let js = JsFuture::from(promise).await.map_err(transport_error)?;
        serde_wasm_bindgen::from_value(js)
            .map_err(|e| ApiError::Network(format!("Malformed response: {}", e)))
    }

    /// Map a non-2xx response to [`ApiError`], pulling the backend's
    /// `message` out of the body when present.
    pub(crate) async fn ensure_ok(resp: &Response) -> Result<(), ApiError> {
        if resp.ok() {
            return Ok(());
        }
        let message = match json_body(resp).await {
            Ok(value) => value
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string),
            Err(_) => None,
        };
        Err(ApiError::from_status(resp.status(), message))
    }

    /// Fetch + status check + typed JSON decode in one step.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        method: &str,
        url: &str,
        token: Option<&str>,
        payload: Payload,
        deadline_ms: u32,
    ) -> Result<T, ApiError> {
        let resp = send(method, url, token, payload, deadline_ms).await?;
        ensure_ok(&resp).await?;
        let value = json_body(&resp).await?;
        serde_json::from_value(value)
            .map_err(|e| ApiError::Network(format!("Malformed response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_status_maps_to_auth() {
        let err = ApiError::from_status(401, Some("token expired".to_string()));
        assert_eq!(err, ApiError::Auth);
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "Session expired. Please login again.");
    }

    #[test]
    fn test_not_found_status_maps_to_not_found() {
        assert_eq!(ApiError::from_status(404, None), ApiError::NotFound);
    }

    #[test]
    fn test_forbidden_has_default_message() {
        let err = ApiError::from_status(403, None);
        assert_eq!(
            err.to_string(),
            "Access denied. You don't have permission."
        );
    }

    #[test]
    fn test_server_error_prefers_backend_message() {
        let err = ApiError::from_status(500, Some("disk full".to_string()));
        assert_eq!(err.to_string(), "disk full");
        assert_eq!(
            err,
            ApiError::Server {
                status: 500,
                message: "disk full".to_string()
            }
        );
    }

    #[test]
    fn test_server_error_fallback_message_carries_status() {
        let err = ApiError::from_status(502, None);
        assert_eq!(err.to_string(), "Server error: 502");
    }

    #[test]
    fn test_validation_error_converts() {
        let err: ApiError =
            crate::core::validation::ValidationError("Folder name is required".to_string()).into();
        assert_eq!(
            err,
            ApiError::Validation("Folder name is required".to_string())
        );
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_message_response_tolerates_missing_message() {
        let resp: MessageResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.message.is_none());

        let resp: MessageResponse =
            serde_json::from_str(r#"{"message": "Folder created successfully!"}"#).unwrap();
        assert_eq!(resp.message.as_deref(), Some("Folder created successfully!"));
    }
}
