use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use super::{
  model::{LoginRequest, LoginResponse, NewUser, SignupRequest, User},
  repository::UserRepository,
};
use crate::utils::{hash_password, jwt::JwtService, verify_password};

/// Returned for both an unknown email and a wrong password.
pub const INVALID_CREDENTIALS: &str = "Invalid Username and password";

#[derive(Debug, Error)]
pub enum UserServiceError {
  #[error("Unauthorized: {0}")]
  Unauthorized(String),
  #[error("Validation Error: {0}")]
  ValidationError(ValidationErrors),
  #[error("Email Already Registered: {0}")]
  EmailTaken(String),
  #[error("User Not Found: {0}")]
  UserNotFound(String),
  #[error("Bad Request: {0}")]
  BadRequest(String),
  #[error("Internal Server Error: {0}")]
  InternalServerError(String),
}

crate::impl_service_error_conversions!(UserServiceError, InternalServerError, UserNotFound, BadRequest, EmailTaken);

#[async_trait]
pub trait UserService: Send + Sync {
  async fn signup(&self, req: SignupRequest) -> Result<User, UserServiceError>;
  async fn login(&self, req: LoginRequest) -> Result<LoginResponse, UserServiceError>;
  async fn get_user_by_id(&self, user_id: Uuid) -> Result<User, UserServiceError>;
}

pub struct UserServiceImpl<U> {
  user_repository: U,
  jwt: Arc<JwtService>,
  bcrypt_cost: u32,
}

impl<U> UserServiceImpl<U>
where
  U: UserRepository,
{
  pub fn new(user_repository: U, jwt: Arc<JwtService>, bcrypt_cost: u32) -> Self {
    Self {
      user_repository,
      jwt,
      bcrypt_cost,
    }
  }
}

#[async_trait]
impl<U> UserService for UserServiceImpl<U>
where
  U: UserRepository,
{
  async fn signup(&self, req: SignupRequest) -> Result<User, UserServiceError> {
    req.validate().map_err(UserServiceError::ValidationError)?;

    // Fast path only; the unique index on users.email settles concurrent signups.
    if self.user_repository.find_by_email(&req.email).await?.is_some() {
      tracing::info!("Signup rejected, email already registered");
      return Err(UserServiceError::EmailTaken(req.email));
    }

    let SignupRequest {
      username,
      email,
      password,
    } = req;
    let cost = self.bcrypt_cost;
    let hashed_password = tokio::task::spawn_blocking(move || hash_password(&password, cost))
      .await
      .map_err(|e| UserServiceError::InternalServerError(format!("Password hashing task failed: {}", e)))?
      .map_err(|e| UserServiceError::InternalServerError(format!("Password hashing failed: {}", e)))?;

    let user = self
      .user_repository
      .create(NewUser {
        username,
        email,
        password: hashed_password,
      })
      .await?;

    tracing::info!(user_id = %user.id, "User signed up");
    Ok(user)
  }

  async fn login(&self, req: LoginRequest) -> Result<LoginResponse, UserServiceError> {
    let user = match self.user_repository.find_by_email(&req.email).await? {
      Some(user) => user,
      None => return Err(UserServiceError::Unauthorized(INVALID_CREDENTIALS.to_string())),
    };

    let password = req.password;
    let stored_hash = user.password.clone();
    let matches = tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
      .await
      .map_err(|e| UserServiceError::InternalServerError(format!("Password verification task failed: {}", e)))?;

    if !matches {
      return Err(UserServiceError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    }

    let jwt_token = self
      .jwt
      .encode_jwt(user.id)
      .map_err(|e| UserServiceError::InternalServerError(format!("JWT encoding failed: {}", e)))?;

    tracing::info!(user_id = %user.id, "User logged in");
    Ok(LoginResponse {
      message: "Login successful.".to_string(),
      jwt_token,
    })
  }

  async fn get_user_by_id(&self, user_id: Uuid) -> Result<User, UserServiceError> {
    self
      .user_repository
      .find_by_id(user_id)
      .await?
      .ok_or_else(|| UserServiceError::UserNotFound("User not found.".to_string()))
  }
}
