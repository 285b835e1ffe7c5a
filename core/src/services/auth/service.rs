//! Authentication service orchestrating the session flows.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::token::{Claims, TokenPair};
use crate::domain::entities::user::{NewUser, User};
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::repositories::{SessionStore, UserRepository};
use crate::services::token::{KeyManager, TokenIssuer, TokenServiceConfig, TokenValidator};

use super::password;

/// Orchestrates registration, login, refresh rotation, and logout revocation
///
/// Holds no mutable state: concurrency control for the single-use refresh
/// property lives entirely in the session store's atomic delete-with-count.
pub struct AuthService<S, U>
where
    S: SessionStore,
    U: UserRepository,
{
    sessions: S,
    users: U,
    issuer: TokenIssuer,
    validator: TokenValidator,
    keys: Arc<KeyManager>,
}

impl<S, U> AuthService<S, U>
where
    S: SessionStore,
    U: UserRepository,
{
    pub fn new(sessions: S, users: U, keys: Arc<KeyManager>, config: TokenServiceConfig) -> Self {
        let issuer = TokenIssuer::new(keys.clone(), config.clone());
        let validator = TokenValidator::new(config.algorithm);
        Self {
            sessions,
            users,
            issuer,
            validator,
            keys,
        }
    }

    /// Validate a bearer access token (stateless hot path)
    ///
    /// Signature and expiry only; the session ledger is deliberately not
    /// consulted here. A logged-out access token therefore keeps validating
    /// until its natural expiry - a documented property of the design, kept
    /// in exchange for a store round trip on every authenticated request.
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.validator.validate(token, self.keys.access_verifying())
    }

    /// Validate a bearer refresh token against the refresh key family
    pub fn verify_refresh_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.validator
            .validate(token, self.keys.refresh_verifying())
    }

    /// Create an account and open its first session
    pub async fn register(&self, email: &str, plain_password: &str) -> DomainResult<(User, TokenPair)> {
        if self.users.email_exists(email).await? {
            return Err(AuthError::EmailTaken.into());
        }

        let password_hash = password::hash(plain_password)?;
        let user = self
            .users
            .create(NewUser {
                email: email.to_string(),
                password_hash,
                roles: Vec::new(),
            })
            .await?;

        debug!(user_id = user.id, "registered new user");
        let pair = self.open_session(user.id, &user.roles).await?;
        Ok((user, pair))
    }

    /// Authenticate with email and password, opening a new session
    pub async fn login(&self, email: &str, plain_password: &str) -> DomainResult<TokenPair> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !password::verify(plain_password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        self.open_session(user.id, &user.roles).await
    }

    /// Rotate a refresh token: validate, revoke, reissue, persist
    ///
    /// The ledger delete is the rotation's linearization point. Exactly one
    /// of any number of concurrent calls carrying the same token observes a
    /// nonzero delete count and proceeds; the rest see the session already
    /// consumed. A failure after the delete leaves the old session revoked
    /// with no replacement - the client must authenticate again.
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<TokenPair> {
        let claims = self.verify_refresh_token(refresh_token)?;

        let deleted = self.sessions.delete(&claims.uuid).await?;
        if deleted == 0 {
            warn!(user_id = claims.user_id, "refresh token already consumed");
            return Err(DomainError::RevocationConflict);
        }

        self.open_session(claims.user_id, &claims.roles).await
    }

    /// Revoke the session behind an already-validated access token
    pub async fn logout(&self, claims: &Claims) -> DomainResult<()> {
        let deleted = self.sessions.delete(&claims.uuid).await?;
        if deleted == 0 {
            warn!(user_id = claims.user_id, "logout for absent session");
            return Err(DomainError::RevocationConflict);
        }
        Ok(())
    }

    /// Remove a user record
    pub async fn delete_user(&self, id: i64) -> DomainResult<()> {
        self.users.delete(id).await
    }

    /// Add role names to the catalogue
    pub async fn create_roles(&self, names: &[String]) -> DomainResult<()> {
        self.users.create_roles(names).await
    }

    /// Remove role names from the catalogue
    pub async fn delete_roles(&self, names: &[String]) -> DomainResult<()> {
        self.users.delete_roles(names).await
    }

    /// Issue a pair and record both session UUIDs with their remaining lifetimes
    async fn open_session(&self, subject_id: i64, roles: &[String]) -> DomainResult<TokenPair> {
        let pair = self.issuer.issue(subject_id, roles)?;

        self.sessions
            .put(&pair.access_uuid, subject_id, pair.access_ttl())
            .await?;
        self.sessions
            .put(&pair.refresh_uuid, subject_id, pair.refresh_ttl())
            .await?;

        Ok(pair)
    }
}
