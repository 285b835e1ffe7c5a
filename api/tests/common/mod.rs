//! Shared fixtures for the API integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;

use ag_api::routes::AppState;
use ag_core::repositories::{InMemorySessionStore, InMemoryUserRepository};
use ag_core::services::auth::AuthService;
use ag_core::services::token::{KeyManager, TokenServiceConfig};
use ag_infra::webhook::UserWebhook;
use ag_shared::WebhookConfig;

pub const ACCESS_PRIVATE_PEM: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../core/keys/access_private_key.pem"));
pub const ACCESS_PUBLIC_PEM: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../core/keys/access_public_key.pem"));
pub const REFRESH_PRIVATE_PEM: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../core/keys/refresh_private_key.pem"));
pub const REFRESH_PUBLIC_PEM: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../core/keys/refresh_public_key.pem"));

pub type TestState = AppState<Arc<InMemorySessionStore>, Arc<InMemoryUserRepository>>;

pub fn key_manager() -> Arc<KeyManager> {
    Arc::new(
        KeyManager::from_pem_strings(
            ACCESS_PRIVATE_PEM,
            ACCESS_PUBLIC_PEM,
            REFRESH_PRIVATE_PEM,
            REFRESH_PUBLIC_PEM,
        )
        .expect("dev keys must parse"),
    )
}

/// App state over in-memory stores, with handles to both for inspection
pub fn test_state_with_handles() -> (
    web::Data<TestState>,
    Arc<InMemorySessionStore>,
    Arc<InMemoryUserRepository>,
) {
    let sessions = Arc::new(InMemorySessionStore::new());
    let users = Arc::new(InMemoryUserRepository::new());

    let auth = Arc::new(AuthService::new(
        sessions.clone(),
        users.clone(),
        key_manager(),
        TokenServiceConfig::default(),
    ));
    // No webhook URL configured: registration skips the external call
    let webhook = Arc::new(UserWebhook::new(WebhookConfig::default()));

    let state = web::Data::new(AppState { auth, webhook });
    (state, sessions, users)
}

pub fn test_state() -> web::Data<TestState> {
    test_state_with_handles().0
}
