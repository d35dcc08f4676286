#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use carcare_api::config::{AdminCredentials, ServerConfig, DEFAULT_MEDIA_FOLDER};
use carcare_api::router::build_app_router;
use carcare_api::state::AppState;
use carcare_cloud::{MediaAsset, MediaCredentials, MediaHost, MediaHostError, SignatureAlgorithm};
use carcare_events::{MailError, Mailer, Notifier, OutgoingEmail, SiteInfo};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "garage-2025";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        site_url: "https://carcare.test".to_string(),
        support_phone: "+91 11111 11111".to_string(),
        media_default_folder: DEFAULT_MEDIA_FOLDER.to_string(),
        admin: Some(AdminCredentials {
            username: ADMIN_USERNAME.to_string(),
            password: ADMIN_PASSWORD.to_string(),
        }),
    }
}

pub fn test_site() -> SiteInfo {
    SiteInfo {
        business_name: "Automotive Car Care".to_string(),
        site_url: "https://carcare.test".to_string(),
        support_phone: "+91 11111 11111".to_string(),
        admin_email: "owner@carcare.test".to_string(),
        contact_email: "desk@carcare.test".to_string(),
    }
}

pub fn test_media_credentials() -> MediaCredentials {
    MediaCredentials {
        cloud_name: "demo".to_string(),
        api_key: "1234".to_string(),
        api_secret: "abcd".to_string(),
        algorithm: SignatureAlgorithm::Sha1,
    }
}

// ---------------------------------------------------------------------------
// Fakes
// ---------------------------------------------------------------------------

/// Mailer that records every message, or refuses to connect when `failing`.
#[derive(Default)]
pub struct FakeMailer {
    pub failing: bool,
    pub sent: Mutex<Vec<OutgoingEmail>>,
}

impl FakeMailer {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn recipients(&self) -> Vec<String> {
        self.sent.lock().unwrap().iter().map(|e| e.to.clone()).collect()
    }
}

#[async_trait]
impl Mailer for FakeMailer {
    async fn verify(&self) -> Result<(), MailError> {
        if self.failing {
            Err(MailError::Unverified)
        } else {
            Ok(())
        }
    }

    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}

/// Media host that records delete calls and serves a fixed listing.
#[derive(Default)]
pub struct FakeMediaHost {
    pub failing: bool,
    pub images: Vec<MediaAsset>,
    pub deleted: Mutex<Vec<String>>,
}

impl FakeMediaHost {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn with_images(images: Vec<MediaAsset>) -> Self {
        Self {
            images,
            ..Self::default()
        }
    }

    pub fn delete_calls(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaHost for FakeMediaHost {
    async fn list_by_folder(&self, folder: &str) -> Result<Vec<MediaAsset>, MediaHostError> {
        if self.failing {
            return Err(MediaHostError::ApiError {
                status: 503,
                body: "unavailable".to_string(),
            });
        }
        Ok(self
            .images
            .iter()
            .filter(|a| a.asset_id.starts_with(folder))
            .cloned()
            .collect())
    }

    async fn delete_asset(&self, asset_id: &str) -> Result<(), MediaHostError> {
        self.deleted.lock().unwrap().push(asset_id.to_string());
        if self.failing {
            Err(MediaHostError::Rejected("error".to_string()))
        } else {
            Ok(())
        }
    }
}

// ---------------------------------------------------------------------------
// App builders
// ---------------------------------------------------------------------------

/// Build the full application router with recording fakes for mail and
/// media, using the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(
        pool,
        Arc::new(FakeMailer::default()),
        Arc::new(FakeMediaHost::default()),
    )
}

/// Build the router around caller-provided fakes so the test can inspect
/// them afterwards.
pub fn build_test_app_with(
    pool: PgPool,
    mailer: Arc<dyn Mailer>,
    media: Arc<dyn MediaHost>,
) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        media,
        media_credentials: Some(Arc::new(test_media_credentials())),
        notifier: Arc::new(Notifier::new(mailer, test_site())),
    };
    build_app_router(state, &config)
}

/// Same as [`build_test_app`] but with no media credentials configured.
pub fn build_unconfigured_media_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        media: Arc::new(FakeMediaHost::default()),
        media_credentials: None,
        notifier: Arc::new(Notifier::new(Arc::new(FakeMailer::default()), test_site())),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

/// POST a body verbatim with a JSON content type, for malformed payloads.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}
