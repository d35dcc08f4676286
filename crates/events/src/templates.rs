//! Message templates.
//!
//! Each function renders one message as a plain-text body plus an HTML
//! alternative. User-supplied values are HTML-escaped in the HTML part.

use carcare_core::booking::reference_code;
use carcare_db::models::booking::Booking;
use serde::Deserialize;

use crate::delivery::OutgoingEmail;
use crate::notifier::SiteInfo;

/// A contact form submission.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Bookings
// ---------------------------------------------------------------------------

/// "Service: ..." plus an "Additional Services: ..." line when present.
fn services_text(booking: &Booking) -> String {
    let mut text = format!("Service: {}", booking.primary_service_label());
    if let Some(extra) = booking.additional_service_names() {
        text.push_str(&format!("\nAdditional Services: {extra}"));
    }
    text
}

fn services_rows(booking: &Booking) -> String {
    let mut rows = row("Service", booking.primary_service_label());
    if let Some(extra) = booking.additional_service_names() {
        rows.push_str(&row("Additional Services", &extra));
    }
    rows
}

/// Acknowledgement sent to the customer right after submission.
pub fn booking_received_customer(booking: &Booking, site: &SiteInfo) -> OutgoingEmail {
    let reference = reference_code(&booking.id);
    let text = format!(
        "Dear {name},\n\nThank you for your booking!\n\n{services}\nVehicle: {brand} {model}\n\
         Date: {date}\nTime: {time}\nBooking ID: #{reference}\n\nWe will confirm shortly.\n\n{footer}",
        name = booking.name,
        services = services_text(booking),
        brand = booking.vehicle_brand,
        model = booking.vehicle_model,
        date = booking.booking_date,
        time = booking.booking_time,
        footer = text_footer(site),
    );
    let rows = format!(
        "{services}{vehicle}{date}{time}{reference}",
        services = services_rows(booking),
        vehicle = row(
            "Vehicle",
            &format!("{} {}", booking.vehicle_brand, booking.vehicle_model)
        ),
        date = row("Date", &booking.booking_date),
        time = row("Time", &booking.booking_time),
        reference = row("Booking ID", &format!("#{reference}")),
    );
    let html = layout(
        site,
        "Booking Received",
        &format!(
            "<p>Dear {}, thank you for your booking! We will confirm shortly.</p>\
             <table>{rows}</table>",
            escape(&booking.name)
        ),
    );
    OutgoingEmail {
        to: booking.email.clone(),
        subject: format!("Booking Received - {}", site.business_name),
        text,
        html,
    }
}

/// Alert sent to the shop when a booking arrives.
pub fn booking_received_admin(booking: &Booking, site: &SiteInfo) -> OutgoingEmail {
    let text = format!(
        "New booking from {name}\nEmail: {email}\nPhone: {phone}\n{services}\n\
         Vehicle: {brand} {model}\nDate: {date}\nTime: {time}{notes}\n\n\
         Review it at {dashboard}",
        name = booking.name,
        email = booking.email,
        phone = booking.phone,
        services = services_text(booking),
        brand = booking.vehicle_brand,
        model = booking.vehicle_model,
        date = booking.booking_date,
        time = booking.booking_time,
        notes = if booking.notes.is_empty() {
            String::new()
        } else {
            format!("\nNotes: {}", booking.notes)
        },
        dashboard = site.dashboard_url(),
    );
    let mut rows = String::new();
    rows.push_str(&row("Customer", &booking.name));
    rows.push_str(&row("Email", &booking.email));
    rows.push_str(&row("Phone", &booking.phone));
    rows.push_str(&services_rows(booking));
    rows.push_str(&row(
        "Vehicle",
        &format!("{} {}", booking.vehicle_brand, booking.vehicle_model),
    ));
    rows.push_str(&row("Date", &booking.booking_date));
    rows.push_str(&row("Time", &booking.booking_time));
    if !booking.notes.is_empty() {
        rows.push_str(&row("Notes", &booking.notes));
    }
    let html = layout(
        site,
        "New Booking",
        &format!(
            "<table>{rows}</table>\
             <p><a href=\"{dashboard}\">Open the admin dashboard</a></p>",
            dashboard = escape(&site.dashboard_url()),
        ),
    );
    OutgoingEmail {
        to: site.admin_email.clone(),
        subject: "New Booking - Action Required".to_string(),
        text,
        html,
    }
}

/// Sent to the customer once the shop accepts the booking.
pub fn booking_confirmed(booking: &Booking, site: &SiteInfo) -> OutgoingEmail {
    let reference = reference_code(&booking.id);
    let text = format!(
        "Dear {name},\n\nYour booking has been CONFIRMED!\n\nService: {service}\n\
         Vehicle: {brand} {model}\nDate: {date}\nTime: {time}\nBooking ID: #{reference}\n\n\
         Please bring this email or your Booking ID.\n\nSee you soon!\n\n{footer}",
        name = booking.name,
        service = booking.primary_service_label(),
        brand = booking.vehicle_brand,
        model = booking.vehicle_model,
        date = booking.booking_date,
        time = booking.booking_time,
        footer = text_footer(site),
    );
    let rows = format!(
        "{service}{vehicle}{date}{time}{reference}",
        service = row("Service", booking.primary_service_label()),
        vehicle = row(
            "Vehicle",
            &format!("{} {}", booking.vehicle_brand, booking.vehicle_model)
        ),
        date = row("Date", &booking.booking_date),
        time = row("Time", &booking.booking_time),
        reference = row("Booking ID", &format!("#{reference}")),
    );
    let html = layout(
        site,
        "Booking Confirmed",
        &format!(
            "<p>Dear {}, your booking has been <strong>confirmed</strong>.</p>\
             <table>{rows}</table>\
             <p>Please bring this email or your Booking ID. See you soon!</p>",
            escape(&booking.name)
        ),
    );
    OutgoingEmail {
        to: booking.email.clone(),
        subject: format!("Booking Confirmed - {}", site.business_name),
        text,
        html,
    }
}

// ---------------------------------------------------------------------------
// Contact form
// ---------------------------------------------------------------------------

fn phone_or_placeholder(contact: &ContactMessage) -> &str {
    contact
        .phone
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .unwrap_or("Not provided")
}

/// Forward a contact form submission to the shop.
pub fn contact_received(contact: &ContactMessage, site: &SiteInfo) -> OutgoingEmail {
    let phone = phone_or_placeholder(contact);
    let text = format!(
        "New contact form submission\n\nName: {}\nEmail: {}\nPhone: {}\nMessage: {}",
        contact.name, contact.email, phone, contact.message
    );
    let rows = format!(
        "{}{}{}",
        row("Name", &contact.name),
        row("Email", &contact.email),
        row("Phone", phone)
    );
    let html = layout(
        site,
        "New Contact",
        &format!(
            "<table>{rows}</table><p style=\"white-space:pre-wrap\">{}</p>",
            escape(&contact.message)
        ),
    );
    OutgoingEmail {
        to: site.admin_email.clone(),
        subject: format!("New Contact - {}", contact.name),
        text,
        html,
    }
}

/// Auto-reply to the person who filled in the contact form.
pub fn contact_autoreply(contact: &ContactMessage, site: &SiteInfo) -> OutgoingEmail {
    let text = format!(
        "Dear {name},\n\nThank you for reaching out to us! We have received your message and \
         will get back to you shortly.\n\nFor urgent matters call us at {phone}.\n\n\
         Best regards,\n{business} Team",
        name = contact.name,
        phone = site.support_phone,
        business = site.business_name,
    );
    let html = layout(
        site,
        "Thank You",
        &format!(
            "<p>Dear {}, thank you for reaching out to us! We have received your message \
             and will get back to you shortly.</p>\
             <p>For urgent matters call us at <a href=\"tel:{phone}\">{phone}</a>.</p>",
            escape(&contact.name),
            phone = escape(&site.support_phone),
        ),
    );
    OutgoingEmail {
        to: contact.email.clone(),
        subject: format!("Thank you for contacting {}", site.business_name),
        text,
        html,
    }
}

// ---------------------------------------------------------------------------
// Layout helpers
// ---------------------------------------------------------------------------

fn text_footer(site: &SiteInfo) -> String {
    format!(
        "{}\nEmail: {}\nPhone: {}",
        site.business_name, site.contact_email, site.support_phone
    )
}

fn row(label: &str, value: &str) -> String {
    format!(
        "<tr><td style=\"padding:8px 0;color:#636e72;font-weight:600\">{}:</td>\
         <td style=\"padding:8px 0;color:#2d3436\">{}</td></tr>",
        escape(label),
        escape(value)
    )
}

fn layout(site: &SiteInfo, heading: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html><html><body style=\"font-family:Arial,sans-serif\">\
         <h2>{heading}</h2>{body}<hr>\
         <p style=\"font-size:13px;color:#636e72\">{business}<br>\
         <a href=\"mailto:{email}\">{email}</a><br>{phone}</p>\
         </body></html>",
        heading = escape(heading),
        business = escape(&site.business_name),
        email = escape(&site.contact_email),
        phone = escape(&site.support_phone),
    )
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
pub(crate) mod tests {
    use carcare_core::booking::{BookingStatus, ServiceRef, ServiceType};

    use super::*;

    pub(crate) fn site() -> SiteInfo {
        SiteInfo {
            business_name: "Automotive Car Care".into(),
            site_url: "https://carcare.example".into(),
            support_phone: "+91 98765 43210".into(),
            admin_email: "owner@carcare.example".into(),
            contact_email: "shop@carcare.example".into(),
        }
    }

    pub(crate) fn booking() -> Booking {
        let now = chrono::Utc::now();
        Booking {
            id: "0190a1b2-c3d4-7e5f-8a9b-0c1d2e3fab4c".parse().unwrap(),
            name: "Asha".into(),
            email: "a@x.com".into(),
            phone: "9999999999".into(),
            service_slug: "ac-service".into(),
            service_name: "AC Services".into(),
            service_type: ServiceType::General,
            additional_services: vec![
                ServiceRef {
                    slug: "ppf".into(),
                    name: "PPF".into(),
                    service_type: ServiceType::Special,
                },
                ServiceRef {
                    slug: "wash".into(),
                    name: "Foam Wash".into(),
                    service_type: ServiceType::General,
                },
            ],
            vehicle_brand: "Toyota".into(),
            vehicle_model: "Fortuner".into(),
            booking_date: "2025-06-01".into(),
            booking_time: "10:00 AM".into(),
            notes: String::new(),
            status: BookingStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn customer_acknowledgement_lists_all_services() {
        let email = booking_received_customer(&booking(), &site());
        assert_eq!(email.to, "a@x.com");
        assert_eq!(email.subject, "Booking Received - Automotive Car Care");
        assert!(email.text.contains("Service: AC Services\nAdditional Services: PPF, Foam Wash"));
        assert!(email.text.contains("Vehicle: Toyota Fortuner"));
        assert!(email.text.contains("Booking ID: #2E3FAB4C"));
    }

    #[test]
    fn admin_alert_goes_to_admin_with_dashboard_link() {
        let email = booking_received_admin(&booking(), &site());
        assert_eq!(email.to, "owner@carcare.example");
        assert_eq!(email.subject, "New Booking - Action Required");
        assert!(email.text.starts_with("New booking from Asha"));
        assert!(email.text.contains("https://carcare.example/admin/dashboard"));
        assert!(!email.text.contains("Notes:"));
    }

    #[test]
    fn confirmation_falls_back_to_service_slug() {
        let mut b = booking();
        b.service_name.clear();
        let email = booking_confirmed(&b, &site());
        assert!(email.text.contains("Your booking has been CONFIRMED!"));
        assert!(email.text.contains("Service: ac-service"));
        assert!(!email.text.contains("Additional Services"));
    }

    #[test]
    fn contact_alert_marks_missing_phone() {
        let contact = ContactMessage {
            name: "Ravi".into(),
            email: "ravi@x.com".into(),
            phone: None,
            message: "Do you do ceramic coating?".into(),
        };
        let email = contact_received(&contact, &site());
        assert_eq!(email.subject, "New Contact - Ravi");
        assert!(email.text.contains("Phone: Not provided"));
    }

    #[test]
    fn autoreply_goes_to_sender() {
        let contact = ContactMessage {
            name: "Ravi".into(),
            email: "ravi@x.com".into(),
            phone: Some("12345".into()),
            message: "Hi".into(),
        };
        let email = contact_autoreply(&contact, &site());
        assert_eq!(email.to, "ravi@x.com");
        assert_eq!(email.subject, "Thank you for contacting Automotive Car Care");
    }

    #[test]
    fn html_part_escapes_user_input() {
        let mut b = booking();
        b.name = "<script>alert(1)</script>".into();
        let email = booking_received_customer(&b, &site());
        assert!(!email.html.contains("<script>"));
        assert!(email.html.contains("&lt;script&gt;"));
    }
}
