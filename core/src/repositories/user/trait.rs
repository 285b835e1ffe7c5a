//! User repository trait defining the interface for user and role persistence.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::DomainResult;

/// Repository contract for user records and the role catalogue
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user and return the stored record with its assigned id
    async fn create(&self, user: NewUser) -> DomainResult<User>;

    /// Look up a user by email, roles included
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// Whether an account already exists for the email
    async fn email_exists(&self, email: &str) -> DomainResult<bool> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    /// Remove a user record; `NotFound` when no row matched
    async fn delete(&self, id: i64) -> DomainResult<()>;

    /// Add role names to the catalogue
    async fn create_roles(&self, names: &[String]) -> DomainResult<()>;

    /// Remove role names from the catalogue; `NotFound` when none matched
    async fn delete_roles(&self, names: &[String]) -> DomainResult<()>;

    /// All role names currently in the catalogue
    async fn list_roles(&self) -> DomainResult<Vec<String>>;
}

#[async_trait]
impl<T: UserRepository + ?Sized> UserRepository for Arc<T> {
    async fn create(&self, user: NewUser) -> DomainResult<User> {
        (**self).create(user).await
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        (**self).find_by_email(email).await
    }

    async fn email_exists(&self, email: &str) -> DomainResult<bool> {
        (**self).email_exists(email).await
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        (**self).delete(id).await
    }

    async fn create_roles(&self, names: &[String]) -> DomainResult<()> {
        (**self).create_roles(names).await
    }

    async fn delete_roles(&self, names: &[String]) -> DomainResult<()> {
        (**self).delete_roles(names).await
    }

    async fn list_roles(&self) -> DomainResult<Vec<String>> {
        (**self).list_roles().await
    }
}
