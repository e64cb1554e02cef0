use std::sync::Arc;

use crate::domain::{User, UserRecord};
use crate::errors::Result;
use crate::storage::StorageBackend;

use super::{AuthError, AuthResult};

/// Two-state session controller: Anonymous until a login or registration
/// succeeds, Authenticated afterwards.
///
/// Owns the current-user pointer and mediates all access to the durable
/// user list. Sessions never expire and are not revalidated against the
/// user list when rehydrated.
pub struct AuthSession {
    current: Option<User>,
    storage: Arc<dyn StorageBackend>,
}

impl AuthSession {
    /// Opens the session, rehydrating a previously persisted login.
    ///
    /// An absent or unreadable session record falls back to Anonymous.
    pub fn open(storage: Arc<dyn StorageBackend>) -> Self {
        let current = match storage.load_session() {
            Ok(found) => found,
            Err(err) => {
                tracing::warn!("discarding unreadable session record: {err}");
                None
            }
        };
        Self { current, storage }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Authenticates against the persisted user list by exact email and
    /// password match.
    ///
    /// A failed attempt leaves the session state untouched, so an already
    /// authenticated session survives a wrong password.
    pub fn login(&mut self, email: &str, password: &str) -> AuthResult<User> {
        let users = self.load_user_list()?;
        let found = users
            .iter()
            .find(|record| record.email == email && record.password == password);
        match found {
            Some(record) => {
                let user = record.sanitized();
                self.persist_session(&user)?;
                tracing::info!(email, "login succeeded");
                self.current = Some(user.clone());
                Ok(user)
            }
            None => {
                tracing::info!(email, "login rejected");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Registers a new user and logs them in.
    ///
    /// The email must not already appear in the user list; the comparison
    /// is a case-sensitive exact match.
    pub fn register(&mut self, name: &str, email: &str, password: &str) -> AuthResult<User> {
        let mut users = self.load_user_list()?;
        if users.iter().any(|record| record.email == email) {
            tracing::info!(email, "registration rejected: email already registered");
            return Err(AuthError::EmailTaken);
        }
        let record = UserRecord::new(name, email, password);
        let user = record.sanitized();
        users.push(record);
        self.storage.save_users(&users).map_err(|err| {
            tracing::error!("failed to persist user list: {err}");
            AuthError::Storage(err)
        })?;
        self.persist_session(&user)?;
        tracing::info!(email, "registration succeeded");
        self.current = Some(user.clone());
        Ok(user)
    }

    /// Clears the session; a no-op when already Anonymous.
    pub fn logout(&mut self) -> Result<()> {
        self.current = None;
        self.storage.clear_session()?;
        tracing::info!("logged out");
        Ok(())
    }

    fn load_user_list(&self) -> AuthResult<Vec<UserRecord>> {
        self.storage
            .load_users()
            .map(Option::unwrap_or_default)
            .map_err(|err| {
                tracing::error!("failed to read user list: {err}");
                AuthError::Storage(err)
            })
    }

    fn persist_session(&self, user: &User) -> AuthResult<()> {
        self.storage.save_session(user).map_err(|err| {
            tracing::error!("failed to persist session: {err}");
            AuthError::Storage(err)
        })
    }
}
