//! Notification dispatch.
//!
//! [`Notifier::notify`] renders a [`Notification`], verifies the transport,
//! then sends every rendered message, all under one timeout. The first
//! failure aborts the remaining sends and is returned to the caller.

use std::sync::Arc;
use std::time::Duration;

use carcare_db::models::booking::Booking;

use crate::delivery::{MailError, Mailer, OutgoingEmail};
use crate::templates::{self, ContactMessage};

/// Upper bound for verify + send of one notification.
pub const DEFAULT_SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Shop details interpolated into every template.
#[derive(Debug, Clone)]
pub struct SiteInfo {
    pub business_name: String,
    /// Public base URL, without a trailing slash.
    pub site_url: String,
    pub support_phone: String,
    /// Recipient of booking and contact alerts.
    pub admin_email: String,
    /// Address shown to customers in footers.
    pub contact_email: String,
}

impl SiteInfo {
    pub fn dashboard_url(&self) -> String {
        format!("{}/admin/dashboard", self.site_url.trim_end_matches('/'))
    }
}

/// One transactional notification.
#[derive(Debug, Clone, Copy)]
pub enum Notification<'a> {
    /// Customer acknowledgement plus admin alert.
    BookingReceived(&'a Booking),
    BookingConfirmed(&'a Booking),
    ContactReceived(&'a ContactMessage),
    ContactAutoReply(&'a ContactMessage),
}

impl Notification<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::BookingReceived(_) => "booking-received",
            Self::BookingConfirmed(_) => "booking-confirmed",
            Self::ContactReceived(_) => "contact-received",
            Self::ContactAutoReply(_) => "contact-autoreply",
        }
    }

    /// Render the messages this notification produces.
    pub fn render(&self, site: &SiteInfo) -> Vec<OutgoingEmail> {
        match self {
            Self::BookingReceived(b) => vec![
                templates::booking_received_customer(b, site),
                templates::booking_received_admin(b, site),
            ],
            Self::BookingConfirmed(b) => vec![templates::booking_confirmed(b, site)],
            Self::ContactReceived(c) => vec![templates::contact_received(c, site)],
            Self::ContactAutoReply(c) => vec![templates::contact_autoreply(c, site)],
        }
    }
}

/// Renders and sends notifications through a shared [`Mailer`].
pub struct Notifier {
    mailer: Arc<dyn Mailer>,
    site: SiteInfo,
    timeout: Duration,
}

impl Notifier {
    pub fn new(mailer: Arc<dyn Mailer>, site: SiteInfo) -> Self {
        Self {
            mailer,
            site,
            timeout: DEFAULT_SEND_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn site(&self) -> &SiteInfo {
        &self.site
    }

    /// Verify the transport and send every message of `notification`.
    pub async fn notify(&self, notification: Notification<'_>) -> Result<(), MailError> {
        let kind = notification.kind();
        let emails = notification.render(&self.site);

        let result = tokio::time::timeout(self.timeout, async {
            self.mailer.verify().await?;
            for email in emails {
                let to = email.to.clone();
                self.mailer.send(email).await?;
                tracing::info!(kind, to = %to, "Notification email sent");
            }
            Ok(())
        })
        .await
        .unwrap_or(Err(MailError::Timeout(self.timeout)));

        if let Err(ref e) = result {
            tracing::warn!(kind, error = %e, "Notification email failed");
        }
        result
    }
}
