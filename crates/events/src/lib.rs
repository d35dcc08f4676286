//! Transactional email for bookings and the contact form.
//!
//! - [`delivery`] defines the [`Mailer`] seam, the `lettre` SMTP transport,
//!   and a disabled transport used when no mail account is configured.
//! - [`templates`] renders each [`Notification`] into outgoing messages.
//! - [`notifier`] ties the two together with a verify-then-send policy and
//!   a hard timeout.
//!
//! Sends are never retried or queued. Callers treat a failed send as a
//! secondary outcome of the operation they support.

pub mod delivery;
pub mod notifier;
pub mod templates;

pub use delivery::{DisabledMailer, MailError, Mailer, OutgoingEmail};
pub use notifier::{Notification, Notifier, SiteInfo};
pub use templates::ContactMessage;
