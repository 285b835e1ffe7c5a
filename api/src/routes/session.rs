//! Session boundary endpoints: refresh rotation and logout revocation.

use actix_web::http::Method;
use actix_web::{web, HttpRequest, HttpResponse};

use ag_core::repositories::{SessionStore, UserRepository};

use crate::handlers::error::{handle_domain_error, invalid_token};
use crate::middleware::guards::{extract_bearer_token, Guard, GuardChain};

use super::AppState;

/// Guard pipeline for DELETE /logout
pub fn logout_guards() -> GuardChain {
    GuardChain::new(vec![
        Guard::JsonContent,
        Guard::Method(Method::DELETE),
        Guard::BearerAccess,
    ])
}

/// Guard pipeline for POST /refresh
///
/// No `BearerAccess` stage: the refresh token belongs to the other key
/// family, so the handler validates it against the refresh verifying key
/// itself.
pub fn refresh_guards() -> GuardChain {
    GuardChain::new(vec![Guard::JsonContent, Guard::Method(Method::POST)])
}

/// Handler for DELETE /logout
///
/// Revokes the session behind the presented access token. Deleting a session
/// that is already gone answers 401 exactly like an invalid token would.
///
/// # Responses
/// - 200: session revoked, empty body
/// - 401: invalid token or session already revoked
pub async fn logout<S, U>(req: HttpRequest, state: web::Data<AppState<S, U>>) -> HttpResponse
where
    S: SessionStore + 'static,
    U: UserRepository + 'static,
{
    let claims = match logout_guards().apply(&req, state.auth.as_ref()) {
        Ok(Some(claims)) => claims,
        Ok(None) => return invalid_token(),
        Err(response) => return response,
    };

    match state.auth.logout(&claims).await {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for POST /refresh
///
/// Rotates a refresh token: validates it against the refresh key family,
/// revokes its session record, and answers with a freshly issued pair. Each
/// refresh token rotates at most once; replays are answered with 401.
///
/// # Responses
/// - 200: `{"access_token": ..., "refresh_token": ...}`
/// - 401: invalid refresh token or token already used
pub async fn refresh<S, U>(req: HttpRequest, state: web::Data<AppState<S, U>>) -> HttpResponse
where
    S: SessionStore + 'static,
    U: UserRepository + 'static,
{
    if let Err(response) = refresh_guards().apply(&req, state.auth.as_ref()) {
        return response;
    }

    let Some(token) = extract_bearer_token(&req) else {
        return invalid_token();
    };

    match state.auth.refresh(&token).await {
        Ok(pair) => HttpResponse::Ok().json(pair),
        Err(error) => handle_domain_error(&error),
    }
}
