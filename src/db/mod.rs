pub mod pool;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
  #[error("database error: {0}")]
  DatabaseError(sqlx::Error),
  #[error("not found: {0}")]
  NotFound(String),
  #[error("conflict: {0}")]
  Conflict(String),
  /// The database refused a value, e.g. a NUL byte in a TEXT column.
  #[error("invalid input: {0}")]
  InvalidInput(String),
}

impl From<sqlx::Error> for RepositoryError {
  fn from(err: sqlx::Error) -> Self {
    if let Some(db_err) = err.as_database_error() {
      if db_err.is_unique_violation() {
        let constraint = db_err.constraint().unwrap_or("unique constraint");
        return RepositoryError::Conflict(constraint.to_string());
      }
      if is_data_exception(db_err.code().as_deref()) {
        return RepositoryError::InvalidInput(db_err.message().to_string());
      }
    }

    match err {
      sqlx::Error::RowNotFound => RepositoryError::NotFound("row not found".to_string()),
      other => RepositoryError::DatabaseError(other),
    }
  }
}

/// SQLSTATE class 22 covers values Postgres rejects for their content
/// (invalid byte sequences, out-of-range numbers, bad datetimes).
fn is_data_exception(code: Option<&str>) -> bool {
  code.is_some_and(|code| code.starts_with("22"))
}
