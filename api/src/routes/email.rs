//! Email registration and login endpoints.

use actix_web::http::Method;
use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use ag_core::repositories::{SessionStore, UserRepository};
use ag_infra::webhook::WebhookError;
use ag_shared::ErrorBody;

use crate::dto::auth::{LoginRequest, RegisterRequest};
use crate::handlers::error::{handle_domain_error, validation_failure};
use crate::middleware::guards::{Guard, GuardChain};

use super::AppState;

/// Guard pipeline for both email endpoints
pub fn email_guards() -> GuardChain {
    GuardChain::new(vec![Guard::JsonContent, Guard::Method(Method::POST)])
}

/// Handler for POST /email/register
///
/// Creates an account, opens its first session, and, when configured,
/// notifies the external user service of the new record.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "user@example.com",
///     "password": "string (min 8 chars)"
/// }
/// ```
///
/// # Responses
/// - 200: `{"access_token": ..., "refresh_token": ...}`
/// - 400: wrong content type or undecodable body
/// - 405: wrong method
/// - 422: validation failure or email already taken
/// - 502: external user service failed
pub async fn register<S, U>(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<AppState<S, U>>,
) -> HttpResponse
where
    S: SessionStore + 'static,
    U: UserRepository + 'static,
{
    if let Err(response) = email_guards().apply(&req, state.auth.as_ref()) {
        return response;
    }

    let request: RegisterRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(_) => {
            return HttpResponse::BadRequest().json(ErrorBody::message("Invalid JSON body."))
        }
    };

    if let Err(errors) = request.validate() {
        return validation_failure(&errors);
    }

    let (user, pair) = match state.auth.register(&request.email, &request.password).await {
        Ok(created) => created,
        Err(error) => return handle_domain_error(&error),
    };

    if let Err(error) = state.webhook.notify_created(&user).await {
        return match error {
            WebhookError::Rejected { errors } => {
                HttpResponse::UnprocessableEntity().json(serde_json::json!({ "errors": errors }))
            }
            WebhookError::Unavailable { message } => {
                log::error!("user webhook failed: {}", message);
                HttpResponse::BadGateway()
                    .json(ErrorBody::message("External service unavailable."))
            }
        };
    }

    HttpResponse::Ok().json(pair)
}

/// Handler for POST /email/login
///
/// Validates the email/password combination and opens a new session.
///
/// # Responses
/// - 200: `{"access_token": ..., "refresh_token": ...}`
/// - 401: unknown email or wrong password (uniform)
pub async fn login<S, U>(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<AppState<S, U>>,
) -> HttpResponse
where
    S: SessionStore + 'static,
    U: UserRepository + 'static,
{
    if let Err(response) = email_guards().apply(&req, state.auth.as_ref()) {
        return response;
    }

    let request: LoginRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(_) => {
            return HttpResponse::BadRequest().json(ErrorBody::message("Invalid JSON body."))
        }
    };

    match state.auth.login(&request.email, &request.password).await {
        Ok(pair) => HttpResponse::Ok().json(pair),
        Err(error) => handle_domain_error(&error),
    }
}
