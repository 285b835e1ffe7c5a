//! Internal administration endpoints for user and role records.
//!
//! These routes are expected to be reachable only from the internal network;
//! the service itself applies no caller authentication to them.

use std::collections::HashMap;

use actix_web::http::Method;
use actix_web::{web, HttpRequest, HttpResponse};

use ag_core::repositories::{SessionStore, UserRepository};
use ag_shared::ErrorBody;

use crate::dto::auth::CreateRolesRequest;
use crate::handlers::error::handle_domain_error;
use crate::middleware::guards::{Guard, GuardChain};

use super::AppState;

const INVALID_USER_ID: &str = "Invalid User ID";
const BLANK_ROLES: &str = "Blank Roles";
const BLANK_ROLE: &str = "Blank Role Name";

pub fn delete_guards() -> GuardChain {
    GuardChain::new(vec![Guard::JsonContent, Guard::Method(Method::DELETE)])
}

pub fn create_guards() -> GuardChain {
    GuardChain::new(vec![Guard::JsonContent, Guard::Method(Method::POST)])
}

/// Handler for DELETE /internal/users/delete?id=
///
/// # Responses
/// - 200: user removed, empty body
/// - 422: unparsable id or no matching user
pub async fn delete_user<S, U>(
    req: HttpRequest,
    query: web::Query<HashMap<String, String>>,
    state: web::Data<AppState<S, U>>,
) -> HttpResponse
where
    S: SessionStore + 'static,
    U: UserRepository + 'static,
{
    if let Err(response) = delete_guards().apply(&req, state.auth.as_ref()) {
        return response;
    }

    let user_id: i64 = match query.get("id").and_then(|raw| raw.parse().ok()) {
        Some(id) => id,
        None => {
            return HttpResponse::UnprocessableEntity().json(ErrorBody::message(INVALID_USER_ID))
        }
    };

    match state.auth.delete_user(user_id).await {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for POST /internal/roles
///
/// # Request Body
///
/// ```json
/// {"roles": ["admin", "editor"]}
/// ```
///
/// # Responses
/// - 200: roles created, empty body
/// - 422: undecodable body, empty list, or blank role name
pub async fn create_roles<S, U>(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<AppState<S, U>>,
) -> HttpResponse
where
    S: SessionStore + 'static,
    U: UserRepository + 'static,
{
    if let Err(response) = create_guards().apply(&req, state.auth.as_ref()) {
        return response;
    }

    let request: CreateRolesRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            return HttpResponse::UnprocessableEntity().json(ErrorBody::message(e.to_string()))
        }
    };

    if let Err(response) = check_role_names(&request.roles) {
        return response;
    }

    match state.auth.create_roles(&request.roles).await {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for DELETE /internal/roles/delete?roles=a,b
///
/// # Responses
/// - 200: roles removed, empty body
/// - 422: missing or blank role names, or none matched
pub async fn delete_roles<S, U>(
    req: HttpRequest,
    query: web::Query<HashMap<String, String>>,
    state: web::Data<AppState<S, U>>,
) -> HttpResponse
where
    S: SessionStore + 'static,
    U: UserRepository + 'static,
{
    if let Err(response) = delete_guards().apply(&req, state.auth.as_ref()) {
        return response;
    }

    let roles: Vec<String> = query
        .get("roles")
        .map(|raw| raw.split(',').map(|s| s.trim().to_string()).collect())
        .unwrap_or_default();

    if let Err(response) = check_role_names(&roles) {
        return response;
    }

    match state.auth.delete_roles(&roles).await {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(error) => handle_domain_error(&error),
    }
}

fn check_role_names(roles: &[String]) -> Result<(), HttpResponse> {
    if roles.is_empty() {
        return Err(HttpResponse::UnprocessableEntity().json(ErrorBody::message(BLANK_ROLES)));
    }
    if roles.iter().any(|role| role.is_empty()) {
        return Err(HttpResponse::UnprocessableEntity().json(ErrorBody::message(BLANK_ROLE)));
    }
    Ok(())
}
