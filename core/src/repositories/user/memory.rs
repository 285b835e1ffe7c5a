//! In-memory user repository for tests and single-process deployments.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashSet;
use std::sync::Mutex;

use super::UserRepository;
use crate::domain::entities::user::{NewUser, User};
use crate::errors::{DomainError, DomainResult};

/// Mutex-backed user repository mirroring the relational contract
#[derive(Default)]
pub struct InMemoryUserRepository {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    users: Vec<User>,
    roles: HashSet<String>,
    next_id: i64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> DomainResult<User> {
        let mut state = self.state.lock().expect("user map poisoned");
        if state.users.iter().any(|u| u.email == user.email) {
            return Err(DomainError::Database {
                message: format!("duplicate email: {}", user.email),
            });
        }

        state.next_id += 1;
        let record = User {
            id: state.next_id,
            email: user.email,
            password_hash: user.password_hash,
            roles: user.roles,
            created_at: Utc::now(),
        };
        state.users.push(record.clone());
        Ok(record)
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let state = self.state.lock().expect("user map poisoned");
        Ok(state.users.iter().find(|u| u.email == email).cloned())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let mut state = self.state.lock().expect("user map poisoned");
        let before = state.users.len();
        state.users.retain(|u| u.id != id);
        if state.users.len() == before {
            return Err(DomainError::NotFound {
                resource: format!("user {}", id),
            });
        }
        Ok(())
    }

    async fn create_roles(&self, names: &[String]) -> DomainResult<()> {
        let mut state = self.state.lock().expect("user map poisoned");
        for name in names {
            state.roles.insert(name.clone());
        }
        Ok(())
    }

    async fn delete_roles(&self, names: &[String]) -> DomainResult<()> {
        let mut state = self.state.lock().expect("user map poisoned");
        let mut removed = 0;
        for name in names {
            if state.roles.remove(name) {
                removed += 1;
            }
        }
        if removed == 0 {
            return Err(DomainError::NotFound {
                resource: "roles".to_string(),
            });
        }
        Ok(())
    }

    async fn list_roles(&self) -> DomainResult<Vec<String>> {
        let state = self.state.lock().expect("user map poisoned");
        let mut names: Vec<String> = state.roles.iter().cloned().collect();
        names.sort();
        Ok(names)
    }
}
