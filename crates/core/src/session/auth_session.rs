use std::sync::{Arc, RwLock};

use log::{debug, warn};

use super::session_model::{Session, SessionUser};
use super::session_storage::SessionStorage;
use crate::constants::{AUTH_TOKEN_KEY, AUTH_USER_KEY};
use crate::errors::{Error, Result};

/// The current sign-in state: an in-memory cache backed by one storage adapter.
///
/// Every authenticated request reads the token from here, and the client
/// clears it when the backend answers 401.
pub struct AuthSession {
    cache: RwLock<Option<Session>>,
    storage: Arc<dyn SessionStorage>,
}

impl AuthSession {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            cache: RwLock::new(None),
            storage,
        }
    }

    /// Loads a previously persisted session. A half-written or unreadable
    /// record is discarded.
    pub fn restore(&self) -> Result<Option<Session>> {
        let token = self.storage.get(AUTH_TOKEN_KEY)?;
        let user = self.storage.get(AUTH_USER_KEY)?;

        let session = match (token, user) {
            (Some(token), Some(user_json)) if !token.is_empty() => {
                match serde_json::from_str::<SessionUser>(&user_json) {
                    Ok(user) => Some(Session { token, user }),
                    Err(e) => {
                        warn!("Discarding unreadable stored session user: {}", e);
                        self.remove_persisted()?;
                        None
                    }
                }
            }
            (None, None) => None,
            _ => {
                warn!("Discarding incomplete stored session");
                self.remove_persisted()?;
                None
            }
        };

        debug!("Session restored: logged_in={}", session.is_some());
        *self.write_cache() = session.clone();
        Ok(session)
    }

    pub fn establish(&self, session: Session) -> Result<()> {
        let user_json = serde_json::to_string(&session.user)?;
        self.storage.set(AUTH_TOKEN_KEY, &session.token)?;
        self.storage.set(AUTH_USER_KEY, &user_json)?;
        debug!("Session established for user {}", session.user.id);
        *self.write_cache() = Some(session);
        Ok(())
    }

    /// Forgets the session in memory first, then in storage.
    pub fn clear(&self) -> Result<()> {
        let previous = self.write_cache().take();
        if let Some(session) = previous {
            debug!("Session cleared for user {}", session.user.id);
        }
        self.remove_persisted()
    }

    pub fn is_logged_in(&self) -> bool {
        self.read_cache().is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.read_cache().as_ref().map(|s| s.token.clone())
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        self.read_cache().as_ref().map(|s| s.user.clone())
    }

    pub fn current_user_id(&self) -> Option<i64> {
        self.read_cache().as_ref().map(|s| s.user.id)
    }

    /// Guard for operations that need a signed-in user.
    pub fn require_authenticated(&self) -> Result<Session> {
        self.read_cache().clone().ok_or(Error::Unauthenticated)
    }

    fn remove_persisted(&self) -> Result<()> {
        self.storage.remove(AUTH_TOKEN_KEY)?;
        self.storage.remove(AUTH_USER_KEY)
    }

    fn read_cache(&self) -> std::sync::RwLockReadGuard<'_, Option<Session>> {
        self.cache.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_cache(&self) -> std::sync::RwLockWriteGuard<'_, Option<Session>> {
        self.cache.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession")
            .field("logged_in", &self.is_logged_in())
            .finish_non_exhaustive()
    }
}
