use axum::{
  extract::rejection::{JsonRejection, QueryRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde::Serialize;
use serde_json::json;
use validator::ValidationErrors;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
  pub field: String,
  pub message: String,
}

#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
  pub errors: Vec<FieldError>,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
      errors: Vec::new(),
    }
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }

  pub fn unauthorized(message: impl Into<String>) -> Self {
    Self::new(StatusCode::UNAUTHORIZED, message)
  }

  pub fn not_found(message: impl Into<String>) -> Self {
    Self::new(StatusCode::NOT_FOUND, message)
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }

  pub fn validation(errors: &ValidationErrors) -> Self {
    Self {
      status_code: StatusCode::BAD_REQUEST,
      message: "Validation failed".to_string(),
      errors: field_errors(errors),
    }
  }
}

/// Flattens validator output into one entry per failed rule, ordered by field
/// name so responses are stable.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
  let mut flattened: Vec<FieldError> = errors
    .field_errors()
    .into_iter()
    .flat_map(|(field, errs)| {
      let field = field.to_string();
      errs.iter().map(move |err| FieldError {
        field: field.clone(),
        message: err
          .message
          .as_ref()
          .map(|m| m.to_string())
          .unwrap_or_else(|| err.code.to_string()),
      })
    })
    .collect();
  flattened.sort_by(|a, b| a.field.cmp(&b.field));
  flattened
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let mut body = json!({
      "status": false,
      "status_code": self.status_code.as_u16(),
      "message": self.message,
    });
    if !self.errors.is_empty() {
      body["errors"] = json!(self.errors);
    }

    (self.status_code, Json(body)).into_response()
  }
}

impl From<JsonRejection> for AppError {
  fn from(rejection: JsonRejection) -> Self {
    tracing::debug!("Rejected JSON body: {}", rejection.body_text());
    AppError::bad_request(rejection.body_text())
  }
}

impl From<QueryRejection> for AppError {
  fn from(rejection: QueryRejection) -> Self {
    tracing::debug!("Rejected query string: {}", rejection.body_text());
    AppError::bad_request(rejection.body_text())
  }
}

impl From<crate::domains::user::service::UserServiceError> for AppError {
  fn from(error: crate::domains::user::service::UserServiceError) -> Self {
    use crate::domains::user::service::UserServiceError;
    match error {
      UserServiceError::ValidationError(errors) => AppError::validation(&errors),
      UserServiceError::EmailTaken(_) => AppError::bad_request("User already exists."),
      UserServiceError::Unauthorized(msg) => AppError::unauthorized(msg),
      UserServiceError::UserNotFound(msg) => AppError::not_found(msg),
      UserServiceError::BadRequest(msg) => AppError::bad_request(msg),
      UserServiceError::InternalServerError(msg) => {
        tracing::error!("User service failure: {}", msg);
        AppError::internal_server_error("Internal server error occurred")
      }
    }
  }
}

impl From<crate::domains::employee::service::EmployeeServiceError> for AppError {
  fn from(error: crate::domains::employee::service::EmployeeServiceError) -> Self {
    use crate::domains::employee::service::EmployeeServiceError;
    match error {
      EmployeeServiceError::ValidationError(errors) => AppError::validation(&errors),
      EmployeeServiceError::NotFound(msg) => AppError::not_found(msg),
      EmployeeServiceError::BadRequest(msg) => AppError::bad_request(msg),
      EmployeeServiceError::InternalServerError(msg) => {
        tracing::error!("Employee service failure: {}", msg);
        AppError::internal_server_error("Internal server error occurred")
      }
    }
  }
}
