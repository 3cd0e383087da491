use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor, PgPool};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, FromRow, Deserialize, Serialize)]
pub struct User {
  pub id: Uuid,
  pub username: String,
  pub email: String,
  #[serde(skip_serializing, default)]
  pub password: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// A user ready to be inserted; `password` is already hashed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
  pub username: String,
  pub email: String,
  pub password: String,
}

/// Missing fields deserialize as empty strings and are reported by validation.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct SignupRequest {
  #[validate(length(min = 1, message = "Username is required"))]
  pub username: String,
  #[validate(email(message = "Valid email is required"))]
  pub email: String,
  #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
  pub password: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SignupResponse {
  pub message: String,
  pub user_id: Uuid,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoginRequest {
  pub email: String,
  pub password: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoginResponse {
  pub message: String,
  pub jwt_token: String,
}

impl User {
  pub async fn create(db: &PgPool, new_user: &NewUser) -> Result<User, sqlx::Error> {
    Self::create_with_executor(db, new_user).await
  }

  pub async fn create_with_executor<'e, E>(executor: E, new_user: &NewUser) -> Result<User, sqlx::Error>
  where
    E: PgExecutor<'e>,
  {
    let user = sqlx::query_as::<_, User>(
      r#"
        INSERT INTO users (id, username, email, password)
        VALUES ($1, $2, $3, $4)
        RETURNING id, username, email, password, created_at, updated_at
      "#,
    )
    .bind(Uuid::new_v4())
    .bind(&new_user.username)
    .bind(&new_user.email)
    .bind(&new_user.password)
    .fetch_one(executor)
    .await?;

    Ok(user)
  }

  pub async fn find_by_email<'e, E>(executor: E, email: &str) -> Result<Option<User>, sqlx::Error>
  where
    E: PgExecutor<'e>,
  {
    let user = sqlx::query_as::<_, User>(
      r#"SELECT id, username, email, password, created_at, updated_at FROM users WHERE email = $1"#,
    )
    .bind(email)
    .fetch_optional(executor)
    .await?;

    Ok(user)
  }

  pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> Result<Option<User>, sqlx::Error>
  where
    E: PgExecutor<'e>,
  {
    let user = sqlx::query_as::<_, User>(
      r#"SELECT id, username, email, password, created_at, updated_at FROM users WHERE id = $1"#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(user)
  }
}
