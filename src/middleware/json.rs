use axum::extract::{FromRequest, FromRequestParts};

use crate::utils::error::AppError;

/// `Json` extractor whose rejections come back as `AppError` (400 with the
/// usual error body) instead of axum's plain-text 415/422 responses.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `Query` extractor with the same error body as `AppJson`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
