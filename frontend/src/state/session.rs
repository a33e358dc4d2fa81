//! Session persistence.
//!
//! The bearer token and its client-side expiry live in two storage keys.
//! Components never touch `localStorage` directly; they receive a
//! [`SessionHandle`] through context so tests can swap in [`MemorySession`].

use chrono::{DateTime, Duration, TimeZone, Utc};
use leptos::*;
use std::{cell::RefCell, collections::HashMap, rc::Rc};
use thiserror::Error;

use crate::utils::storage as storage_utils;

pub const TOKEN_KEY: &str = "token";
pub const EXPIRES_AT_KEY: &str = "token_expires_at";

/// Client-side lifetime of a session, independent of the token's own `exp`.
pub const SESSION_TTL_MINUTES: i64 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("session storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to write '{key}' to session storage")]
    Write { key: String },
}

pub trait SessionStore {
    fn read(&self, key: &str) -> Result<Option<String>, SessionError>;
    fn write(&self, key: &str, value: &str) -> Result<(), SessionError>;
    fn remove(&self, key: &str) -> Result<(), SessionError>;
}

/// Browser `localStorage`; looked up lazily on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSession;

impl SessionStore for LocalStorageSession {
    fn read(&self, key: &str) -> Result<Option<String>, SessionError> {
        let storage = storage_utils::local_storage().map_err(SessionError::Unavailable)?;
        storage
            .get_item(key)
            .map_err(|_| SessionError::Unavailable(format!("cannot read '{}'", key)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let storage = storage_utils::local_storage().map_err(SessionError::Unavailable)?;
        storage.set_item(key, value).map_err(|_| SessionError::Write {
            key: key.to_string(),
        })
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        let storage = storage_utils::local_storage().map_err(SessionError::Unavailable)?;
        storage
            .remove_item(key)
            .map_err(|_| SessionError::Unavailable(format!("cannot remove '{}'", key)))
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySession {
    fn read(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn starting_at(token: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            token: token.into(),
            expires_at: now + Duration::minutes(SESSION_TTL_MINUTES),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

fn parse_expiry(raw: &str) -> Option<DateTime<Utc>> {
    let millis = raw.trim().parse::<i64>().ok()?;
    Utc.timestamp_millis_opt(millis).single()
}

#[derive(Clone)]
pub struct SessionHandle {
    store: Rc<dyn SessionStore>,
}

impl SessionHandle {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self {
            store: Rc::new(store),
        }
    }

    pub fn browser() -> Self {
        Self::new(LocalStorageSession)
    }

    pub fn in_memory() -> Self {
        Self::new(MemorySession::new())
    }

    /// Both keys must be present and the expiry parseable.
    pub fn get(&self) -> Option<Session> {
        let token = self
            .store
            .read(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|t| !t.trim().is_empty())?;
        let expires_at = self
            .store
            .read(EXPIRES_AT_KEY)
            .ok()
            .flatten()
            .as_deref()
            .and_then(parse_expiry)?;
        Some(Session { token, expires_at })
    }

    pub fn token(&self) -> Option<String> {
        self.store.read(TOKEN_KEY).ok().flatten()
    }

    pub fn set(&self, session: &Session) -> Result<(), SessionError> {
        self.store.write(TOKEN_KEY, &session.token)?;
        self.store.write(
            EXPIRES_AT_KEY,
            &session.expires_at.timestamp_millis().to_string(),
        )?;
        log::info!("Session stored (expires at {})", session.expires_at);
        Ok(())
    }

    pub fn clear(&self) {
        let token = self.store.remove(TOKEN_KEY);
        let expiry = self.store.remove(EXPIRES_AT_KEY);
        if let Err(err) = token.and(expiry) {
            log::warn!("Failed to clear session: {}", err);
        } else {
            log::info!("Session cleared");
        }
    }
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::browser()
    }
}

pub fn provide_session(handle: SessionHandle) {
    provide_context(handle);
}

pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().unwrap_or_else(SessionHandle::browser)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).single().unwrap()
    }

    #[test]
    fn starting_at_applies_sixty_minute_ttl() {
        let session = Session::starting_at("tok", at(1_000));
        assert_eq!(session.expires_at, at(1_000 + 3_600_000));
    }

    #[test]
    fn expiry_is_strictly_after_expires_at() {
        let session = Session::starting_at("tok", at(0));
        assert!(!session.is_expired(at(3_600_000)));
        assert!(session.is_expired(at(3_600_001)));
    }

    #[test]
    fn set_writes_token_and_epoch_millis() {
        let store = MemorySession::new();
        let handle = SessionHandle::new(store.clone());
        handle
            .set(&Session::starting_at("abc", at(10)))
            .expect("store session");
        assert_eq!(store.read(TOKEN_KEY).unwrap().as_deref(), Some("abc"));
        assert_eq!(
            store.read(EXPIRES_AT_KEY).unwrap().as_deref(),
            Some("3600010")
        );
        assert_eq!(handle.get().unwrap().expires_at, at(3_600_010));
    }

    #[test]
    fn get_requires_both_keys() {
        let store = MemorySession::new();
        let handle = SessionHandle::new(store.clone());
        store.write(TOKEN_KEY, "abc").unwrap();
        assert!(handle.get().is_none());

        store.write(EXPIRES_AT_KEY, "not-a-number").unwrap();
        assert!(handle.get().is_none());

        store.write(EXPIRES_AT_KEY, "42").unwrap();
        assert_eq!(handle.get().unwrap().token, "abc");
    }

    #[test]
    fn clear_removes_both_keys() {
        let store = MemorySession::new();
        let handle = SessionHandle::new(store.clone());
        handle.set(&Session::starting_at("abc", at(0))).unwrap();
        handle.clear();
        assert!(store.read(TOKEN_KEY).unwrap().is_none());
        assert!(store.read(EXPIRES_AT_KEY).unwrap().is_none());
        assert!(handle.get().is_none());
    }
}
