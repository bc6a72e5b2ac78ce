use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::account::errors::AccountError;
use crate::account::models::EmailAddress;
use crate::account::models::User;
use crate::account::models::UserId;
use crate::account::ports::UserRepository;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &sqlx::postgres::PgRow) -> Result<User, AccountError> {
        let id: Uuid = row
            .try_get("id")
            .map_err(|e| AccountError::Database(e.to_string()))?;
        let email: String = row
            .try_get("email")
            .map_err(|e| AccountError::Database(e.to_string()))?;
        let password_hash: String = row
            .try_get("password_hash")
            .map_err(|e| AccountError::Database(e.to_string()))?;
        let created_at: DateTime<Utc> = row
            .try_get("created_at")
            .map_err(|e| AccountError::Database(e.to_string()))?;

        Ok(User {
            id: UserId(id),
            email: EmailAddress::new(email)?,
            password_hash,
            created_at,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> Result<User, AccountError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user.id.0)
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            // Concurrent registrations race past the service-level lookup;
            // the unique constraint on email is the authoritative check.
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AccountError::AlreadyExists;
                }
            }
            AccountError::Database(e.to_string())
        })?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AccountError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountError::Database(e.to_string()))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }
}
