//! Request bodies for the authentication endpoints.

use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "has invalid format"))]
    pub email: String,
    #[validate(length(min = 8, message = "minimal length is 8 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRolesRequest {
    pub roles: Vec<String>,
}
