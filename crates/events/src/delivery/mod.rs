//! Mail transport seam.

pub mod smtp;

use std::time::Duration;

use async_trait::async_trait;

pub use smtp::{EmailConfig, SmtpMailer};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// No mail account is configured for this deployment.
    #[error("Email is not configured")]
    NotConfigured,

    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The SMTP server answered the connection test negatively.
    #[error("SMTP connection could not be verified")]
    Unverified,

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),

    #[error("Email delivery timed out after {0:?}")]
    Timeout(Duration),
}

// ---------------------------------------------------------------------------
// Message + seam
// ---------------------------------------------------------------------------

/// A fully rendered message. The sender is fixed by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// A mail transport.
///
/// Implementations must be safe to share across concurrent requests; one
/// instance is built at startup and reused.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Check that the transport can reach and authenticate with its relay.
    async fn verify(&self) -> Result<(), MailError>;

    /// Deliver one message.
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError>;
}

/// Transport used when no mail account is configured. Every call fails
/// with [`MailError::NotConfigured`].
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledMailer;

#[async_trait]
impl Mailer for DisabledMailer {
    async fn verify(&self) -> Result<(), MailError> {
        Err(MailError::NotConfigured)
    }

    async fn send(&self, _email: OutgoingEmail) -> Result<(), MailError> {
        Err(MailError::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[tokio::test]
    async fn disabled_mailer_refuses_everything() {
        let mailer = DisabledMailer;
        assert_matches!(mailer.verify().await, Err(MailError::NotConfigured));
        let email = OutgoingEmail {
            to: "a@x.com".into(),
            subject: "s".into(),
            text: "t".into(),
            html: "<p>t</p>".into(),
        };
        assert_matches!(mailer.send(email).await, Err(MailError::NotConfigured));
    }

    #[test]
    fn mail_error_display_build() {
        let err = MailError::Build("missing body".to_string());
        assert_eq!(err.to_string(), "Email build error: missing body");
    }

    #[test]
    fn mail_error_display_address() {
        let addr_err: Result<lettre::Address, _> = "not-an-email".parse();
        let err = MailError::Address(addr_err.unwrap_err());
        assert!(err.to_string().contains("Email address parse error"));
    }
}
