use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::info;

use ag_api::app::create_app;
use ag_api::routes::AppState;
use ag_core::services::auth::AuthService;
use ag_core::services::token::{KeyManager, TokenServiceConfig};
use ag_infra::cache::{RedisClient, RedisSessionStore};
use ag_infra::database::{DatabasePool, PgUserRepository};
use ag_infra::webhook::UserWebhook;
use ag_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting AuthGate API server");

    // Load configuration
    let config = AppConfig::from_env();

    // Key material and algorithm are load-bearing: the process must not
    // serve traffic if either is unusable
    let token_config = TokenServiceConfig::from_shared(&config.tokens)?;
    let keys = Arc::new(KeyManager::from_files(&config.keys)?);

    // Relational store for user records and roles
    let database = DatabasePool::new(&config.database).await?;
    database.migrate("migrations").await?;
    let users = PgUserRepository::new(database.pool().clone());

    // Redis session ledger
    let redis = RedisClient::new(&config.cache).await?;
    let sessions = RedisSessionStore::new(redis, config.cache.clone());

    let auth = Arc::new(AuthService::new(sessions, users, keys, token_config));
    let webhook = Arc::new(UserWebhook::new(config.webhook.clone()));

    let state = web::Data::new(AppState { auth, webhook });

    let bind_address = config.server.bind_address();
    info!("Server listening on {}", bind_address);

    HttpServer::new(move || create_app(state.clone()))
        .bind(&bind_address)?
        .run()
        .await?;

    Ok(())
}
