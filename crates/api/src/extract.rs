//! Request body extractor that reports bad JSON in the error envelope.

use axum::extract::FromRequest;

use crate::error::AppError;

/// Drop-in replacement for [`axum::Json`] as an extractor.
///
/// Syntax errors, wrong field types, and a missing `Content-Type` become a
/// 400 `VALIDATION_ERROR` instead of axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);
