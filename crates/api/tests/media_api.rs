//! HTTP-level tests for upload signatures and the hosted image folder.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use carcare_cloud::signing::sign_params;
use carcare_cloud::{MediaAsset, SignatureAlgorithm};
use common::{body_json, get, post_json, FakeMailer, FakeMediaHost};
use serde_json::json;
use sqlx::PgPool;

fn asset(id: &str) -> MediaAsset {
    MediaAsset {
        asset_id: id.to_string(),
        url: format!("https://img.test/{id}.jpg"),
        byte_size: 2048,
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_signature_covers_folder_and_timestamp(pool: PgPool) {
    let response = get(
        common::build_test_app(pool),
        "/api/upload-signature?folder=banners",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["folder"], "banners");
    assert_eq!(json["apiKey"], "1234");
    assert_eq!(json["cloudName"], "demo");

    let timestamp = json["timestamp"].as_i64().unwrap().to_string();
    let expected = sign_params(
        &[("folder", "banners"), ("timestamp", timestamp.as_str())],
        "abcd",
        SignatureAlgorithm::Sha1,
    );
    assert_eq!(json["signature"], expected);
    assert!(json.get("apiSecret").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_signature_defaults_folder(pool: PgPool) {
    let json = body_json(get(common::build_test_app(pool), "/api/upload-signature").await).await;
    assert_eq!(json["folder"], "automotive-carcare/hero-images");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_signature_without_credentials_is_configuration_error(pool: PgPool) {
    let response = get(
        common::build_unconfigured_media_app(pool),
        "/api/upload-signature",
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFIGURATION_ERROR");
    assert_eq!(json["error"], "Media host credentials missing");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn listing_returns_only_the_requested_folder(pool: PgPool) {
    let host = Arc::new(FakeMediaHost::with_images(vec![
        asset("automotive-carcare/hero-images/one"),
        asset("automotive-carcare/hero-images/two"),
        asset("brands/toyota"),
    ]));
    let app = common::build_test_app_with(pool, Arc::new(FakeMailer::default()), host);

    let json = body_json(get(app, "/api/media").await).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["count"], 2);
    assert_eq!(json["images"][0]["assetId"], "automotive-carcare/hero-images/one");
    assert_eq!(json["images"][0]["byteSize"], 2048);
    assert!(json.get("error").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn listing_fails_soft_when_host_is_down(pool: PgPool) {
    let app = common::build_test_app_with(
        pool,
        Arc::new(FakeMailer::default()),
        Arc::new(FakeMediaHost::failing()),
    );

    let response = get(app, "/api/media?folder=banners").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["images"], json!([]));
    assert_eq!(json["count"], 0);
    assert!(json["error"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deleting_the_same_asset_twice_succeeds(pool: PgPool) {
    let host = Arc::new(FakeMediaHost::default());
    let app = || {
        common::build_test_app_with(pool.clone(), Arc::new(FakeMailer::default()), host.clone())
    };

    for _ in 0..2 {
        let response =
            post_json(app(), "/api/media/delete", json!({"assetId": "banners/old"})).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["success"], true);
    }
    assert_eq!(host.delete_calls().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_without_asset_id_is_400(pool: PgPool) {
    let response = post_json(common::build_test_app(pool), "/api/media/delete", json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "assetId is required");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn host_rejection_is_500(pool: PgPool) {
    let app = common::build_test_app_with(
        pool,
        Arc::new(FakeMailer::default()),
        Arc::new(FakeMediaHost::failing()),
    );
    let response = post_json(app, "/api/media/delete", json!({"assetId": "banners/old"})).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["code"], "MEDIA_HOST_ERROR");
}
