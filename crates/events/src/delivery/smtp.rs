//! SMTP transport built on `lettre`.
//!
//! [`EmailConfig::from_env`] returns `None` unless both the mail account and
//! its app password are set; the caller then falls back to
//! [`DisabledMailer`](super::DisabledMailer).

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use super::{MailError, Mailer, OutgoingEmail};

/// Default SMTP relay (STARTTLS).
const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Display name on the From header when `MAIL_SENDER_NAME` is not set.
pub const DEFAULT_SENDER_NAME: &str = "Automotive Car Care";

// ---------------------------------------------------------------------------
// EmailConfig
// ---------------------------------------------------------------------------

/// Configuration for the SMTP transport.
#[derive(Clone)]
pub struct EmailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    /// Mail account; also the From address.
    pub user: String,
    pub app_password: String,
    pub sender_name: String,
    /// Recipient of admin alerts. Defaults to the mail account itself.
    pub admin_email: String,
}

impl std::fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailConfig")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("user", &self.user)
            .field("app_password", &"<redacted>")
            .field("sender_name", &self.sender_name)
            .field("admin_email", &self.admin_email)
            .finish()
    }
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if the account or password is missing, signalling
    /// that email delivery is disabled.
    ///
    /// | Variable            | Required | Default               |
    /// |---------------------|----------|-----------------------|
    /// | `MAIL_USER`         | yes      |                       |
    /// | `MAIL_APP_PASSWORD` | yes      |                       |
    /// | `SMTP_HOST`         | no       | `smtp.gmail.com`      |
    /// | `SMTP_PORT`         | no       | `587`                 |
    /// | `MAIL_SENDER_NAME`  | no       | `Automotive Car Care` |
    /// | `ADMIN_EMAIL`       | no       | value of `MAIL_USER`  |
    pub fn from_env() -> Option<Self> {
        let user = non_empty_var("MAIL_USER")?;
        let app_password = non_empty_var("MAIL_APP_PASSWORD")?;
        Some(Self {
            smtp_host: non_empty_var("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            sender_name: non_empty_var("MAIL_SENDER_NAME")
                .unwrap_or_else(|| DEFAULT_SENDER_NAME.to_string()),
            admin_email: non_empty_var("ADMIN_EMAIL").unwrap_or_else(|| user.clone()),
            user,
            app_password,
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

// ---------------------------------------------------------------------------
// SmtpMailer
// ---------------------------------------------------------------------------

/// Sends multipart (plain + HTML) messages through an authenticated
/// STARTTLS relay. The transport keeps its own connection pool.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &EmailConfig) -> Result<Self, MailError> {
        let from = Mailbox::new(Some(config.sender_name.clone()), config.user.parse()?);
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.user.clone(),
                config.app_password.clone(),
            ))
            .build();
        Ok(Self { transport, from })
    }
}

/// Assemble a plain + HTML alternative message.
fn compose(from: &Mailbox, email: OutgoingEmail) -> Result<Message, MailError> {
    Message::builder()
        .from(from.clone())
        .to(email.to.parse()?)
        .subject(email.subject)
        .multipart(MultiPart::alternative_plain_html(email.text, email.html))
        .map_err(|e| MailError::Build(e.to_string()))
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn verify(&self) -> Result<(), MailError> {
        if self.transport.test_connection().await? {
            Ok(())
        } else {
            Err(MailError::Unverified)
        }
    }

    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        let to = email.to.clone();
        let message = compose(&self.from, email)?;
        self.transport.send(message).await?;
        tracing::debug!(to = %to, "SMTP relay accepted message");
        Ok(())
    }
}
