use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use carcare_cloud::MediaHostError;
use carcare_core::error::CoreError;
use carcare_events::MailError;
use serde_json::json;

/// Message shown when an email the caller depends on could not be sent.
pub const MAIL_FAILURE_MESSAGE: &str = "Failed to send email. Please try again later.";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors plus the persistence and
/// integration errors. Implements [`IntoResponse`] to produce the
/// `{ "success": false, "error": ..., "code": ... }` envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `carcare_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The media host failed on a path where that failure is the result.
    #[error("Media host error: {0}")]
    Media(#[from] MediaHostError),

    /// Mail delivery failed on a path where the email is the result.
    #[error("Mail error: {0}")]
    Mail(#[from] MailError),

    /// The request body was not JSON of the expected shape.
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, %id, "Entity not found");
                    (
                        StatusCode::NOT_FOUND,
                        "NOT_FOUND",
                        format!("{entity} not found"),
                    )
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Duplicate(msg) => (StatusCode::BAD_REQUEST, "DUPLICATE", msg.clone()),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Integrations ---
            AppError::Media(MediaHostError::NotConfigured) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIGURATION_ERROR",
                MediaHostError::NotConfigured.to_string(),
            ),
            AppError::Media(err) => {
                tracing::error!(error = %err, "Media host error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "MEDIA_HOST_ERROR",
                    "Failed to delete image".to_string(),
                )
            }
            AppError::Mail(err) => {
                tracing::error!(error = %err, "Mail transport error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "MAIL_ERROR",
                    MAIL_FAILURE_MESSAGE.to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::InvalidBody(rejection) => {
                tracing::debug!(error = %rejection, "Rejected request body");
                (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    rejection.body_text(),
                )
            }
        };

        let body = json!({
            "success": false,
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map
///   to 400 `DUPLICATE`, the same as a pre-checked duplicate.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        err if carcare_db::is_unique_violation(err) => {
            let constraint = match err {
                sqlx::Error::Database(db_err) => db_err.constraint().unwrap_or("unknown"),
                _ => "unknown",
            };
            (
                StatusCode::BAD_REQUEST,
                "DUPLICATE",
                duplicate_message(constraint).to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}

/// User-facing text for each named unique constraint.
fn duplicate_message(constraint: &str) -> &'static str {
    match constraint {
        "uq_vehicle_brands_slug" => "Brand already exists",
        "uq_car_brands_brand_slug" => "Brand already exists",
        "uq_car_models_brand_name" => "This model already exists for this brand",
        _ => "Duplicate value",
    }
}
