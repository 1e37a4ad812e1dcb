//! Authentication token sources
//!
//! The client never owns the token: it asks its [`TokenProvider`] on every
//! call and attaches `Authorization: Bearer <token>` only when one is
//! returned.

use crate::constants::AUTH_TOKEN_KEY;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};
use tracing::warn;

/// Source of the bearer token read at call time
pub trait TokenProvider: Send + Sync {
    /// Current token, `None` when the user is not authenticated
    fn token(&self) -> Option<String>;
}

impl<F> TokenProvider for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn token(&self) -> Option<String> {
        self()
    }
}

/// Provider that never yields a token
#[derive(Debug, Clone, Copy, Default)]
pub struct NoToken;

impl TokenProvider for NoToken {
    fn token(&self) -> Option<String> {
        None
    }
}

/// Provider that always yields the same token
#[derive(Clone)]
pub struct StaticToken(String);

impl StaticToken {
    /// Creates a provider for `token`
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl TokenProvider for StaticToken {
    fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

impl fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StaticToken").field(&"***").finish()
    }
}

/// Thread-safe client-side key-value storage
///
/// The token lives under the `auth_token` key. Clones share the same
/// storage, so a login flow can store the token while the client reads it.
#[derive(Clone, Default)]
pub struct TokenStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl TokenStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `key`
    #[must_use]
    pub fn get_item(&self, key: &str) -> Option<String> {
        match self.entries.read() {
            Ok(entries) => entries.get(key).cloned(),
            Err(_) => {
                warn!("Token store lock poisoned while reading {}", key);
                None
            }
        }
    }

    /// Writes `key`
    pub fn set_item(&self, key: impl Into<String>, value: impl Into<String>) {
        match self.entries.write() {
            Ok(mut entries) => {
                entries.insert(key.into(), value.into());
            }
            Err(_) => warn!("Token store lock poisoned while writing"),
        }
    }

    /// Removes `key`
    pub fn remove_item(&self, key: &str) {
        match self.entries.write() {
            Ok(mut entries) => {
                entries.remove(key);
            }
            Err(_) => warn!("Token store lock poisoned while removing {}", key),
        }
    }

    /// Stores the authentication token
    pub fn set_token(&self, token: impl Into<String>) {
        self.set_item(AUTH_TOKEN_KEY, token);
    }

    /// Removes the authentication token
    pub fn clear_token(&self) {
        self.remove_item(AUTH_TOKEN_KEY);
    }
}

impl TokenProvider for TokenStore {
    fn token(&self) -> Option<String> {
        self.get_item(AUTH_TOKEN_KEY)
    }
}

impl fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let has_token = self.get_item(AUTH_TOKEN_KEY).is_some();
        f.debug_struct("TokenStore")
            .field("has_token", &has_token)
            .finish()
    }
}
