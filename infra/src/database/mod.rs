//! Postgres connection management and repository implementations.

pub mod connection;
pub mod postgres;

pub use connection::DatabasePool;
pub use postgres::PgUserRepository;
