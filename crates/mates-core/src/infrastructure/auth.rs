//! In-memory authentication
//!
//! Email/password accounts with uuid uids and verification tracking.
//! Stands in for the external auth service behind the `AuthPort` seam.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::domain::value_objects::{Email, Password};
use crate::ports::outbound::{AuthError, AuthPort, AuthSession, AuthUser};

struct Account {
    uid: String,
    password: String,
    verified: bool,
}

/// In-memory auth service
#[derive(Default)]
pub struct InMemoryAuth {
    accounts: RwLock<HashMap<String, Account>>,
    sessions: RwLock<HashMap<String, String>>,
}

impl InMemoryAuth {
    pub fn new() -> Self {
        Self::default()
    }

    /// Complete a pending email verification, as the external flow
    /// would when the user follows the mailed link.
    pub fn complete_verification(&self, uid: &str) -> Result<(), AuthError> {
        let mut accounts = self.accounts.write().map_err(poisoned)?;
        let account = accounts
            .values_mut()
            .find(|a| a.uid == uid)
            .ok_or(AuthError::UnknownAccount)?;
        account.verified = true;
        Ok(())
    }
}

#[async_trait]
impl AuthPort for InMemoryAuth {
    async fn sign_up(&self, email: &Email, password: &Password) -> Result<AuthUser, AuthError> {
        let mut accounts = self.accounts.write().map_err(poisoned)?;
        if accounts.contains_key(email.as_str()) {
            return Err(AuthError::EmailInUse);
        }
        let uid = Uuid::new_v4().to_string();
        accounts.insert(
            email.as_str().to_string(),
            Account {
                uid: uid.clone(),
                password: password.expose().to_string(),
                verified: false,
            },
        );
        Ok(AuthUser {
            uid,
            email: email.clone(),
            email_verified: false,
        })
    }

    async fn sign_in(&self, email: &Email, password: &str) -> Result<AuthSession, AuthError> {
        let accounts = self.accounts.read().map_err(poisoned)?;
        let account = accounts
            .get(email.as_str())
            .filter(|a| a.password == password)
            .ok_or(AuthError::InvalidCredentials)?;

        let token = Uuid::new_v4().to_string();
        let uid = account.uid.clone();
        drop(accounts);

        let mut sessions = self.sessions.write().map_err(poisoned)?;
        sessions.insert(token.clone(), uid.clone());
        Ok(AuthSession { uid, token })
    }

    async fn sign_out(&self, uid: &str) -> Result<(), AuthError> {
        let mut sessions = self.sessions.write().map_err(poisoned)?;
        sessions.retain(|_, session_uid| session_uid != uid);
        Ok(())
    }

    async fn send_verification(&self, uid: &str) -> Result<(), AuthError> {
        let accounts = self.accounts.read().map_err(poisoned)?;
        if !accounts.values().any(|a| a.uid == uid) {
            return Err(AuthError::UnknownAccount);
        }
        info!(uid, "verification mail dispatched");
        Ok(())
    }

    async fn is_verified(&self, uid: &str) -> Result<bool, AuthError> {
        let accounts = self.accounts.read().map_err(poisoned)?;
        accounts
            .values()
            .find(|a| a.uid == uid)
            .map(|a| a.verified)
            .ok_or(AuthError::UnknownAccount)
    }
}

fn poisoned<T>(_: T) -> AuthError {
    AuthError::Service("account lock poisoned".into())
}
