//! Public contact form.
//!
//! The emails are the whole point of this endpoint, so a mail failure is
//! the response.

use axum::extract::State;
use axum::response::IntoResponse;
use carcare_core::error::CoreError;
use carcare_core::validation::{is_blank, is_valid_email, non_blank, trimmed};
use carcare_events::{ContactMessage, Notification};
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::Json;
use crate::response::{Message, Success};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

impl ContactForm {
    fn validate(self) -> Result<ContactMessage, CoreError> {
        if is_blank(self.name.as_deref())
            || is_blank(self.email.as_deref())
            || is_blank(self.message.as_deref())
        {
            return Err(CoreError::Validation(
                "Name, email, and message are required".into(),
            ));
        }
        let email = trimmed(self.email);
        if !is_valid_email(&email) {
            return Err(CoreError::Validation("Invalid email format".into()));
        }
        Ok(ContactMessage {
            name: trimmed(self.name),
            email,
            phone: non_blank(self.phone),
            message: trimmed(self.message),
        })
    }
}

/// POST /api/contact
///
/// Alerts the shop, then sends the visitor an auto-reply.
pub async fn submit(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> AppResult<impl IntoResponse> {
    let contact = form.validate()?;

    state
        .notifier
        .notify(Notification::ContactReceived(&contact))
        .await?;
    state
        .notifier
        .notify(Notification::ContactAutoReply(&contact))
        .await?;

    tracing::info!(email = %contact.email, "Contact form delivered");
    Ok(Success::json(Message::new(
        "Your message has been sent successfully!",
    )))
}
