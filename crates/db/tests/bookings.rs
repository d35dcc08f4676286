//! Integration tests for the bookings repository.

use carcare_core::booking::{BookingStatus, ServiceRef, ServiceType};
use carcare_db::models::booking::CreateBooking;
use carcare_db::repositories::BookingRepo;
use sqlx::PgPool;

fn asha() -> CreateBooking {
    CreateBooking {
        name: Some("Asha".into()),
        email: Some("a@x.com".into()),
        phone: Some("9999999999".into()),
        service: Some("ac-service".into()),
        service_name: Some("AC Services".into()),
        vehicle_brand: Some("Toyota".into()),
        vehicle_model: Some("Fortuner".into()),
        booking_date: Some("2025-06-01".into()),
        booking_time: Some("10:00 AM".into()),
        ..Default::default()
    }
}

#[sqlx::test]
async fn new_booking_starts_pending(pool: PgPool) {
    let input = asha().validate().unwrap();
    let booking = BookingRepo::create(&pool, &input).await.unwrap();

    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.service_type, ServiceType::General);
    assert_eq!(booking.created_at, booking.updated_at);
}

#[sqlx::test]
async fn additional_services_round_trip_through_jsonb(pool: PgPool) {
    let input = CreateBooking {
        additional_services: Some(vec![ServiceRef {
            slug: "ppf".into(),
            name: "Paint Protection Film".into(),
            service_type: ServiceType::Special,
        }]),
        ..asha()
    }
    .validate()
    .unwrap();
    let booking = BookingRepo::create(&pool, &input).await.unwrap();

    let found = BookingRepo::find_by_id(&pool, booking.id).await.unwrap().unwrap();
    assert_eq!(found.additional_services.len(), 1);
    assert_eq!(found.additional_services[0].service_type, ServiceType::Special);
    assert_eq!(
        found.additional_service_names().as_deref(),
        Some("Paint Protection Film")
    );
}

#[sqlx::test]
async fn list_is_newest_first(pool: PgPool) {
    let first = BookingRepo::create(&pool, &asha().validate().unwrap()).await.unwrap();
    let second = BookingRepo::create(
        &pool,
        &CreateBooking {
            name: Some("Ravi".into()),
            ..asha()
        }
        .validate()
        .unwrap(),
    )
    .await
    .unwrap();

    let listed = BookingRepo::list(&pool).await.unwrap();
    let ids: Vec<_> = listed.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[sqlx::test]
async fn confirming_moves_updated_at_forward(pool: PgPool) {
    let booking = BookingRepo::create(&pool, &asha().validate().unwrap()).await.unwrap();

    let confirmed = BookingRepo::update_status(
        &pool,
        booking.id,
        BookingStatus::Pending,
        BookingStatus::Confirmed,
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(confirmed.status, BookingStatus::Confirmed);
    assert_eq!(confirmed.created_at, booking.created_at);
    assert!(confirmed.updated_at > confirmed.created_at);
}

#[sqlx::test]
async fn status_update_on_missing_booking_returns_none(pool: PgPool) {
    let result = BookingRepo::update_status(
        &pool,
        uuid::Uuid::new_v4(),
        BookingStatus::Pending,
        BookingStatus::Confirmed,
    )
    .await
    .unwrap();
    assert!(result.is_none());
}

#[sqlx::test]
async fn status_update_from_stale_status_changes_nothing(pool: PgPool) {
    let booking = BookingRepo::create(&pool, &asha().validate().unwrap()).await.unwrap();
    BookingRepo::update_status(&pool, booking.id, BookingStatus::Pending, BookingStatus::Confirmed)
        .await
        .unwrap()
        .unwrap();

    let again = BookingRepo::update_status(
        &pool,
        booking.id,
        BookingStatus::Pending,
        BookingStatus::Confirmed,
    )
    .await
    .unwrap();
    assert!(again.is_none());

    let stored = BookingRepo::find_by_id(&pool, booking.id).await.unwrap().unwrap();
    assert_eq!(stored.status, BookingStatus::Confirmed);
}

#[sqlx::test]
async fn delete_is_hard(pool: PgPool) {
    let booking = BookingRepo::create(&pool, &asha().validate().unwrap()).await.unwrap();
    assert!(BookingRepo::delete(&pool, booking.id).await.unwrap());
    assert!(BookingRepo::find_by_id(&pool, booking.id).await.unwrap().is_none());
    assert!(!BookingRepo::delete(&pool, booking.id).await.unwrap());
}
