//! Postgres implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use ag_core::domain::entities::user::{NewUser, User};
use ag_core::errors::{DomainError, DomainResult};
use ag_core::repositories::UserRepository;

/// Postgres implementation of UserRepository
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn roles_for_user(&self, user_id: i64) -> DomainResult<Vec<String>> {
        let rows = sqlx::query(
            r#"
            SELECT r.name
            FROM roles r
            JOIN user_roles ur ON ur.role_id = r.id
            WHERE ur.user_id = $1
            ORDER BY r.name
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        rows.iter()
            .map(|row| row.try_get::<String, _>("name").map_err(db_error))
            .collect()
    }

    async fn link_roles(&self, user_id: i64, names: &[String]) -> DomainResult<()> {
        sqlx::query(
            r#"
            INSERT INTO user_roles (user_id, role_id)
            SELECT $1, id FROM roles WHERE name = ANY($2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(names)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;
        Ok(())
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: NewUser) -> DomainResult<User> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, created_at
            "#,
        )
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error)?;

        let id: i64 = row.try_get("id").map_err(db_error)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(db_error)?;

        if !user.roles.is_empty() {
            self.link_roles(id, &user.roles).await?;
        }

        Ok(User {
            id,
            email: user.email,
            password_hash: user.password_hash,
            roles: user.roles,
            created_at,
        })
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, email, password_hash, created_at
            FROM users
            WHERE email = $1
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let id: i64 = row.try_get("id").map_err(db_error)?;
        let roles = self.roles_for_user(id).await?;

        Ok(Some(User {
            id,
            email: row.try_get("email").map_err(db_error)?,
            password_hash: row.try_get("password_hash").map_err(db_error)?,
            roles,
            created_at: row.try_get("created_at").map_err(db_error)?,
        }))
    }

    async fn email_exists(&self, email: &str) -> DomainResult<bool> {
        let row = sqlx::query("SELECT EXISTS (SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error)?;

        row.try_get::<bool, _>(0).map_err(db_error)
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: format!("user {}", id),
            });
        }
        Ok(())
    }

    async fn create_roles(&self, names: &[String]) -> DomainResult<()> {
        sqlx::query(
            r#"
            INSERT INTO roles (name)
            SELECT unnest($1::text[])
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(names)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;
        Ok(())
    }

    async fn delete_roles(&self, names: &[String]) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM roles WHERE name = ANY($1)")
            .bind(names)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "roles".to_string(),
            });
        }
        Ok(())
    }

    async fn list_roles(&self) -> DomainResult<Vec<String>> {
        let rows = sqlx::query("SELECT name FROM roles ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?;

        rows.iter()
            .map(|row| row.try_get::<String, _>("name").map_err(db_error))
            .collect()
    }
}

fn db_error(e: sqlx::Error) -> DomainError {
    DomainError::Database {
        message: e.to_string(),
    }
}
