//! Session state: the bearer token and the last-viewed document snapshot
//!
//! The session is an explicit object provided through context and passed
//! into the API client, rather than a global read from everywhere. It is
//! initialized once at app start from localStorage, mutated only by the
//! login/logout handlers, and read-only everywhere else.

use leptos::prelude::*;

use crate::core::documents::DocumentSummary;

/// localStorage key holding the bearer token.
pub const STORAGE_KEY_TOKEN: &str = "docuvault_token";

/// localStorage key holding the last-viewed document snapshot.
pub const STORAGE_KEY_DOCUMENT: &str = "docuvault_current_document";

/// Process-wide session handle.
#[derive(Clone, Copy)]
pub struct Session {
    token: RwSignal<Option<String>>,
    /// False until the persisted token has been checked after hydration;
    /// guards redirect effects from firing on the pre-restore state.
    ready: RwSignal<bool>,
}

impl Session {
    /// Whether a token is present (reactive).
    pub fn is_authenticated(&self) -> bool {
        self.token.get().is_some()
    }

    /// Whether the persisted token has been restored yet (reactive).
    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }

    /// The bearer token, if any.
    ///
    /// Untracked read: API calls happen outside reactive contexts.
    pub fn token(&self) -> Option<String> {
        self.token.get_untracked()
    }

    /// Store a freshly issued token (login).
    pub fn set_token(&self, token: String) {
        persist_token(&token);
        self.token.set(Some(token));
    }

    /// Drop the session (logout or expiry): clears the token and the
    /// document snapshot from both memory and storage.
    pub fn clear(&self) {
        clear_storage();
        self.token.set(None);
    }

    /// Persist the document about to be viewed, so the viewer page can
    /// render metadata without a listing round-trip.
    pub fn store_document_snapshot(&self, document: &DocumentSummary) {
        if let Ok(json) = serde_json::to_string(document) {
            write_storage(STORAGE_KEY_DOCUMENT, &json);
        }
    }

    /// The snapshot stored by [`store_document_snapshot`], if readable.
    pub fn load_document_snapshot(&self) -> Option<DocumentSummary> {
        let json = read_storage(STORAGE_KEY_DOCUMENT)?;
        serde_json::from_str(&json).ok()
    }
}

/// Provide the session to the component tree, restoring the persisted token.
pub fn provide_session() -> Session {
    let token = RwSignal::new(None::<String>);
    let ready = RwSignal::new(false);
    let session = Session { token, ready };

    // Restore after hydration; the server render always starts signed out.
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            if let Some(stored) = read_storage(STORAGE_KEY_TOKEN) {
                if !stored.is_empty() {
                    token.set(Some(stored));
                }
            }
            ready.set(true);
        });
    }

    provide_context(session);
    session
}

/// Get the session from the component tree.
pub fn use_session() -> Session {
    expect_context::<Session>()
}

#[cfg(not(feature = "ssr"))]
fn read_storage(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(key).ok()?
}

#[cfg(not(feature = "ssr"))]
fn write_storage(key: &str, value: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

#[cfg(not(feature = "ssr"))]
fn persist_token(token: &str) {
    write_storage(STORAGE_KEY_TOKEN, token);
}

#[cfg(not(feature = "ssr"))]
fn clear_storage() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(STORAGE_KEY_TOKEN);
            let _ = storage.remove_item(STORAGE_KEY_DOCUMENT);
        }
    }
}

#[cfg(feature = "ssr")]
fn read_storage(_key: &str) -> Option<String> {
    None
}

#[cfg(feature = "ssr")]
fn write_storage(_key: &str, _value: &str) {}

#[cfg(feature = "ssr")]
fn persist_token(_token: &str) {}

#[cfg(feature = "ssr")]
fn clear_storage() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_keys_are_crate_scoped() {
        assert!(STORAGE_KEY_TOKEN.starts_with("docuvault_"));
        assert!(STORAGE_KEY_DOCUMENT.starts_with("docuvault_"));
        assert_ne!(STORAGE_KEY_TOKEN, STORAGE_KEY_DOCUMENT);
    }

    #[test]
    fn test_snapshot_round_trips_through_json() {
        let doc = DocumentSummary {
            id: Some("d1".to_string()),
            filename: Some("report.pdf".to_string()),
            size: Some(1024),
            ..Default::default()
        };

        let json = serde_json::to_string(&doc).unwrap();
        let restored: DocumentSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, doc);
    }
}
