//! Credential storage port backed by browser localStorage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The stored token is owned by the whole client: the login panel writes
//! it, authenticated views read it. Pages receive a `SessionStore` from
//! context instead of touching `web_sys` directly, so native tests can
//! substitute the in-memory store.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex};

/// localStorage key holding the signed-in credential.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Durable key-value storage for the signed-in credential.
pub trait CredentialStore {
    /// Persist `token`, replacing any previous credential.
    fn save_token(&self, token: &str);
    /// The stored credential, if any.
    fn load_token(&self) -> Option<String>;
    /// Remove the stored credential.
    fn clear_token(&self);
}

/// Cloneable handle to the app's credential store, provided via context.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<dyn CredentialStore + Send + Sync>,
}

impl SessionStore {
    /// Store backed by browser localStorage; inert outside the browser.
    #[must_use]
    pub fn browser() -> Self {
        Self {
            inner: Arc::new(BrowserCredentialStore),
        }
    }

    /// Store kept in memory, for native tests and server rendering.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(MemoryCredentialStore::default()),
        }
    }

    pub fn save_token(&self, token: &str) {
        self.inner.save_token(token);
    }

    #[must_use]
    pub fn load_token(&self) -> Option<String> {
        self.inner.load_token()
    }

    pub fn clear_token(&self) {
        self.inner.clear_token();
    }
}

/// localStorage-backed store. Access is best-effort: a browser that
/// denies storage behaves like an empty store.
struct BrowserCredentialStore;

impl CredentialStore for BrowserCredentialStore {
    fn save_token(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            let _ = storage.set_item(AUTH_TOKEN_KEY, token);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    }

    fn load_token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()?;
            storage.get_item(AUTH_TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        None
    }

    fn clear_token(&self) {
        #[cfg(feature = "hydrate")]
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(AUTH_TOKEN_KEY);
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// In-memory store sharing one slot across clones of its handle.
#[derive(Default)]
struct MemoryCredentialStore {
    token: Mutex<Option<String>>,
}

impl CredentialStore for MemoryCredentialStore {
    fn save_token(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_owned());
        }
    }

    fn load_token(&self) -> Option<String> {
        self.token.lock().ok().and_then(|slot| slot.clone())
    }

    fn clear_token(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}
