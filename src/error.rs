/// Macro to generate the `RepositoryError` conversion for a service error enum.
///
/// Usage:
/// ```ignore
/// impl_service_error_conversions!(EmployeeServiceError, InternalServerError, NotFound, BadRequest);
/// impl_service_error_conversions!(UserServiceError, InternalServerError, UserNotFound, BadRequest, EmailTaken);
/// ```
///
/// Without a conflict variant, conflicts are reported as internal errors.
#[macro_export]
macro_rules! impl_service_error_conversions {
  ($error_type:ty, $internal_variant:ident, $not_found_variant:ident, $bad_request_variant:ident) => {
    impl From<$crate::db::RepositoryError> for $error_type {
      fn from(err: $crate::db::RepositoryError) -> Self {
        use $crate::db::RepositoryError;
        match err {
          RepositoryError::DatabaseError(e) => <$error_type>::$internal_variant(format!("Database error: {}", e)),
          RepositoryError::NotFound(msg) => <$error_type>::$not_found_variant(msg),
          RepositoryError::InvalidInput(msg) => <$error_type>::$bad_request_variant(msg),
          RepositoryError::Conflict(msg) => <$error_type>::$internal_variant(format!("Unexpected conflict: {}", msg)),
        }
      }
    }
  };

  (
    $error_type:ty,
    $internal_variant:ident,
    $not_found_variant:ident,
    $bad_request_variant:ident,
    $conflict_variant:ident
  ) => {
    impl From<$crate::db::RepositoryError> for $error_type {
      fn from(err: $crate::db::RepositoryError) -> Self {
        use $crate::db::RepositoryError;
        match err {
          RepositoryError::DatabaseError(e) => <$error_type>::$internal_variant(format!("Database error: {}", e)),
          RepositoryError::NotFound(msg) => <$error_type>::$not_found_variant(msg),
          RepositoryError::InvalidInput(msg) => <$error_type>::$bad_request_variant(msg),
          RepositoryError::Conflict(msg) => <$error_type>::$conflict_variant(msg),
        }
      }
    }
  };
}
