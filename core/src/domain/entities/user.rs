//! User entity backed by the relational store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted user record
///
/// The serialized form doubles as the payload POSTed to the external
/// user-provisioning webhook, so the password hash is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Database-assigned identifier
    pub id: i64,

    pub email: String,

    /// bcrypt hash of the password
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Role names assigned to the user
    #[serde(default)]
    pub roles: Vec<String>,

    pub created_at: DateTime<Utc>,
}

/// Data required to create a user record
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub roles: Vec<String>,
}
