//! Domain layer containing entities and value objects.

pub mod entities;

pub use entities::{
    Claims, NewUser, TokenPair, User, ACCESS_TOKEN_EXPIRY_MINUTES, REFRESH_TOKEN_EXPIRY_DAYS,
};
