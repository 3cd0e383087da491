use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::model::{NewUser, User};
use crate::db::RepositoryError;

#[async_trait]
pub trait UserRepository: Send + Sync {
  /// Fails with `RepositoryError::Conflict` when the email is already taken.
  async fn create(&self, new_user: NewUser) -> Result<User, RepositoryError>;
  async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;
}

pub struct SqlxUserRepository {
  pub pool: PgPool,
}

impl SqlxUserRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
  async fn create(&self, new_user: NewUser) -> Result<User, RepositoryError> {
    Ok(User::create(&self.pool, &new_user).await?)
  }

  async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
    Ok(User::find_by_email(&self.pool, email).await?)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
    Ok(User::find_by_id(&self.pool, id).await?)
  }
}
