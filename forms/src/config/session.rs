// Signed-in session: created on sign-in, persisted through the device key-value
// store, removed on sign-out.
use std::collections::HashMap;

use shared::models::UserProfile;

use super::settings::ClientConfig;
use crate::error::Result;

pub const TOKEN_KEY: &str = "@token";
pub const USER_KEY: &str = "@user";

/// Key-value storage on the device (secure storage on a phone, memory in tests).
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

#[derive(Debug, Default, Clone)]
pub struct MemorySessionStore {
    values: HashMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

/// Everything a backend call needs: where to send it and who is asking.
#[derive(Debug, Clone)]
pub struct ApiContext {
    pub config: ClientConfig,
    session: Option<Session>,
}

impl ApiContext {
    pub fn new(config: ClientConfig) -> Self {
        ApiContext { config, session: None }
    }

    /// Rebuilds the context from a previous run. A partial or unreadable session is dropped.
    pub fn restore(config: ClientConfig, store: &impl SessionStore) -> Self {
        let session = match (store.get(TOKEN_KEY), store.get(USER_KEY)) {
            (Some(token), Some(user_json)) => match serde_json::from_str::<UserProfile>(&user_json) {
                Ok(user) => Some(Session { token, user }),
                Err(e) => {
                    tracing::warn!(error = %e, "Stored user profile is unreadable, starting signed out");
                    None
                }
            },
            (None, None) => None,
            _ => {
                tracing::warn!("Stored session is incomplete, starting signed out");
                None
            }
        };
        ApiContext { config, session }
    }

    pub fn sign_in(&mut self, store: &mut impl SessionStore, token: String, user: UserProfile) -> Result<()> {
        store.set(TOKEN_KEY, &token)?;
        store.set(USER_KEY, &serde_json::to_string(&user)?)?;
        tracing::info!(email = %user.email, "Signed in");
        self.session = Some(Session { token, user });
        Ok(())
    }

    pub fn sign_out(&mut self, store: &mut impl SessionStore) -> Result<()> {
        store.remove(TOKEN_KEY)?;
        store.remove(USER_KEY)?;
        if self.session.take().is_some() {
            tracing::info!("Signed out");
        }
        Ok(())
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    /// Value for the `Authorization` header of authenticated requests.
    pub fn authorization_header(&self) -> Option<String> {
        self.session.as_ref().map(|s| format!("Bearer {}", s.token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserProfile {
        UserProfile {
            id: Some(1),
            name: "Ana Paula".to_string(),
            email: "ana@exemplo.com".to_string(),
            cpf: "12345678910".to_string(),
            phone: "81999990000".to_string(),
        }
    }

    #[test]
    fn test_new_context_is_signed_out() {
        let ctx = ApiContext::new(ClientConfig::default());
        assert!(!ctx.is_signed_in());
        assert_eq!(ctx.authorization_header(), None);
    }

    #[test]
    fn test_sign_in_persists_and_sets_header() {
        let mut store = MemorySessionStore::new();
        let mut ctx = ApiContext::new(ClientConfig::default());
        ctx.sign_in(&mut store, "abc123".to_string(), user()).unwrap();

        assert_eq!(ctx.authorization_header().as_deref(), Some("Bearer abc123"));
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("abc123"));
        assert!(store.get(USER_KEY).unwrap().contains("ana@exemplo.com"));
    }

    #[test]
    fn test_restore_after_sign_in() {
        let mut store = MemorySessionStore::new();
        let mut ctx = ApiContext::new(ClientConfig::default());
        ctx.sign_in(&mut store, "abc123".to_string(), user()).unwrap();

        let restored = ApiContext::restore(ClientConfig::default(), &store);
        assert_eq!(restored.session(), ctx.session());
    }

    #[test]
    fn test_sign_out_clears_store_and_session() {
        let mut store = MemorySessionStore::new();
        let mut ctx = ApiContext::new(ClientConfig::default());
        ctx.sign_in(&mut store, "abc123".to_string(), user()).unwrap();
        ctx.sign_out(&mut store).unwrap();

        assert!(!ctx.is_signed_in());
        assert_eq!(store.get(TOKEN_KEY), None);
        assert!(!ApiContext::restore(ClientConfig::default(), &store).is_signed_in());
    }

    #[test]
    fn test_restore_drops_partial_or_corrupt_sessions() {
        let mut store = MemorySessionStore::new();
        store.set(TOKEN_KEY, "abc123").unwrap();
        assert!(!ApiContext::restore(ClientConfig::default(), &store).is_signed_in());

        store.set(USER_KEY, "{ broken").unwrap();
        assert!(!ApiContext::restore(ClientConfig::default(), &store).is_signed_in());
    }
}
