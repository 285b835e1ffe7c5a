//! Route handlers for all endpoints.

pub mod email;
pub mod internal;
pub mod session;

use std::sync::Arc;

use ag_core::repositories::{SessionStore, UserRepository};
use ag_core::services::auth::AuthService;
use ag_infra::webhook::UserWebhook;

/// Application state shared by all handlers
pub struct AppState<S, U>
where
    S: SessionStore,
    U: UserRepository,
{
    pub auth: Arc<AuthService<S, U>>,
    pub webhook: Arc<UserWebhook>,
}
