//! Application factory
//!
//! Builds the Actix-web application around a prepared [`AppState`]. Routes
//! are registered method-agnostically; each handler's guard chain owns the
//! method check so a wrong verb answers 405 from the same pipeline that
//! checks content type and bearer auth.

use actix_web::dev::Service;
use actix_web::{middleware::Logger, web, App, HttpResponse};

use ag_core::repositories::{SessionStore, UserRepository};
use ag_shared::ErrorBody;

use crate::middleware::cors::create_cors;
use crate::routes::email::{login, register};
use crate::routes::internal::{create_roles, delete_roles, delete_user};
use crate::routes::session::{logout, refresh};
use crate::routes::AppState;

/// Maximum accepted request body size in bytes
const MAX_BODY_SIZE: usize = 1_048_576;

/// Create and configure the application with all dependencies
pub fn create_app<S, U>(
    app_state: web::Data<AppState<S, U>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    S: SessionStore + 'static,
    U: UserRepository + 'static,
{
    let cors = create_cors();

    App::new()
        .app_data(app_state)
        .app_data(web::PayloadConfig::new(MAX_BODY_SIZE))
        .wrap(Logger::default())
        .wrap(cors)
        // Erase the middleware-introduced body type back to `BoxBody` so the
        // declared return type holds; does not touch status, headers, or bytes.
        .wrap_fn(|req, srv| {
            let fut = srv.call(req);
            async move { fut.await.map(|res| res.map_into_boxed_body()) }
        })
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Public authentication endpoints
        .route("/email/register", web::route().to(register::<S, U>))
        .route("/email/login", web::route().to(login::<S, U>))
        .route("/logout", web::route().to(logout::<S, U>))
        .route("/refresh", web::route().to(refresh::<S, U>))
        // Internal administration endpoints
        .service(
            web::scope("/internal")
                .route("/users/delete", web::route().to(delete_user::<S, U>))
                .route("/roles", web::route().to(create_roles::<S, U>))
                .route("/roles/delete", web::route().to(delete_roles::<S, U>)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "authgate-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody::message("The requested resource was not found."))
}
