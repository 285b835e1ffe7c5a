//! Domain-error to HTTP response mapping.
//!
//! Every token validation failure and every revocation conflict becomes the
//! same 401 body: the internal kind is logged but never leaked, so response
//! differences cannot be used to probe token internals. Store and database
//! failures fail closed with a 500.

use actix_web::HttpResponse;
use validator::ValidationErrors;

use ag_core::errors::{AuthError, DomainError};
use ag_shared::ErrorBody;

/// The single message every rejected token gets
pub const INVALID_TOKEN_MSG: &str = "Invalid Authorization token.";

/// Uniform 401 for any token the service will not honor
pub fn invalid_token() -> HttpResponse {
    HttpResponse::Unauthorized().json(ErrorBody::message(INVALID_TOKEN_MSG))
}

/// 422 carrying a `{field: message}` map from request validation
pub fn validation_failure(errors: &ValidationErrors) -> HttpResponse {
    let fields = errors.field_errors().into_iter().map(|(field, errs)| {
        let message = errs
            .first()
            .and_then(|e| e.message.as_ref())
            .map(|m| m.to_string())
            .unwrap_or_else(|| "is invalid".to_string());
        (field.to_string(), message)
    });

    HttpResponse::UnprocessableEntity().json(ErrorBody::fields(fields))
}

/// Map a domain error to its HTTP response
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Token(token_error) if token_error.is_validation_failure() => {
            log::warn!("token rejected: {}", token_error);
            invalid_token()
        }
        DomainError::RevocationConflict => {
            // Already-consumed sessions answer exactly like invalid tokens
            log::warn!("revocation conflict");
            invalid_token()
        }
        DomainError::Auth(AuthError::InvalidCredentials) => {
            HttpResponse::Unauthorized().json(ErrorBody::message("Invalid email or password."))
        }
        DomainError::Auth(AuthError::EmailTaken) => HttpResponse::UnprocessableEntity()
            .json(ErrorBody::fields([("email", "is already taken")])),
        DomainError::Auth(AuthError::UserNotFound) | DomainError::NotFound { .. } => {
            HttpResponse::UnprocessableEntity().json(ErrorBody::message(error.to_string()))
        }
        DomainError::Store(store_error) => {
            log::error!("session store failure: {}", store_error);
            internal_error()
        }
        DomainError::Token(token_error) => {
            // Issuance or key failure
            log::error!("token service failure: {}", token_error);
            internal_error()
        }
        DomainError::Database { message } | DomainError::Internal { message } => {
            log::error!("internal failure: {}", message);
            internal_error()
        }
    }
}

fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorBody::message("Internal server error."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ag_core::errors::{StoreError, TokenError};
    use chrono::Duration;

    #[test]
    fn test_validation_failures_are_uniform_401() {
        let kinds = [
            TokenError::Malformed,
            TokenError::SignatureInvalid,
            TokenError::ClaimsDecode,
            TokenError::Expired {
                expired_by: Duration::seconds(5),
            },
        ];

        for kind in kinds {
            let response = handle_domain_error(&DomainError::Token(kind));
            assert_eq!(response.status(), 401);
        }
    }

    #[test]
    fn test_revocation_conflict_indistinguishable_from_invalid() {
        let response = handle_domain_error(&DomainError::RevocationConflict);
        assert_eq!(response.status(), 401);
    }

    #[test]
    fn test_store_failure_fails_closed() {
        let response = handle_domain_error(&DomainError::Store(StoreError::new("down")));
        assert_eq!(response.status(), 500);
    }

    #[test]
    fn test_issuance_failure_is_500() {
        let response = handle_domain_error(&DomainError::Token(TokenError::Signing {
            message: "bad key".to_string(),
        }));
        assert_eq!(response.status(), 500);
    }

    #[test]
    fn test_invalid_credentials_is_401() {
        let response = handle_domain_error(&DomainError::Auth(AuthError::InvalidCredentials));
        assert_eq!(response.status(), 401);
    }
}
