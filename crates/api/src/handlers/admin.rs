//! Admin console login.
//!
//! A single static credential compared in plain text. There is no session:
//! a successful response only tells the console to show its tabs.

use axum::extract::State;
use axum::response::IntoResponse;
use carcare_core::error::CoreError;
use serde::Deserialize;

use crate::config::AdminCredentials;
use crate::error::AppResult;
use crate::extract::Json;
use crate::response::{Message, Success};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

fn credentials_match(expected: Option<&AdminCredentials>, request: &LoginRequest) -> bool {
    match (expected, request.username.as_deref(), request.password.as_deref()) {
        (Some(admin), Some(username), Some(password)) => {
            admin.username == username.trim() && admin.password == password
        }
        _ => false,
    }
}

/// POST /api/admin/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    if !credentials_match(state.config.admin.as_ref(), &request) {
        tracing::warn!(username = request.username.as_deref().unwrap_or(""), "Admin login rejected");
        return Err(CoreError::Unauthorized("Invalid username or password".into()).into());
    }

    tracing::info!("Admin login accepted");
    Ok(Success::json(Message::new("Login successful")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> AdminCredentials {
        AdminCredentials {
            username: "admin".into(),
            password: "s3cret".into(),
        }
    }

    fn request(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    #[test]
    fn exact_password_is_required() {
        assert!(credentials_match(Some(&admin()), &request("admin", "s3cret")));
        assert!(!credentials_match(Some(&admin()), &request("admin", "S3cret")));
    }

    #[test]
    fn unconfigured_login_always_fails() {
        assert!(!credentials_match(None, &request("admin", "s3cret")));
    }
}
