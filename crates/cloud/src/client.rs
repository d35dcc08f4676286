//! Media host REST client.
//!
//! [`MediaHost`] is the seam the API depends on. [`CloudinaryClient`] talks
//! to the hosted image service's admin and upload APIs; [`DisabledMediaHost`]
//! stands in when no credentials are configured.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::MediaCredentials;
use crate::signing::sign_params;

/// Public API root of the hosted image service.
const API_BASE: &str = "https://api.cloudinary.com/v1_1";

/// Most assets returned by one listing call.
pub const MAX_LIST_RESULTS: u32 = 50;

/// Listing is a read path and fails soft after this long.
pub const LIST_TIMEOUT: Duration = Duration::from_secs(5);

/// Deletion is a write path and fails hard after this long.
pub const DELETE_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Errors from the media host layer.
#[derive(Debug, thiserror::Error)]
pub enum MediaHostError {
    #[error("Media host credentials missing")]
    NotConfigured,

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Media host request timed out")]
    Timeout,

    /// The host returned a non-2xx status code.
    #[error("Media host API error ({status}): {body}")]
    ApiError { status: u16, body: String },

    /// The host answered 2xx but refused the operation.
    #[error("Media host rejected the request: {0}")]
    Rejected(String),
}

impl From<reqwest::Error> for MediaHostError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Request(err)
        }
    }
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// An image stored on the media host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAsset {
    pub asset_id: String,
    pub url: String,
    pub byte_size: u64,
}

/// Result of a soft-failing listing: whatever was found, plus the reason
/// the list is empty when the host could not be reached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaListing {
    pub images: Vec<MediaAsset>,
    pub error: Option<String>,
}

/// The hosted image store.
#[async_trait]
pub trait MediaHost: Send + Sync {
    /// Every asset whose id starts with `folder`.
    async fn list_by_folder(&self, folder: &str) -> Result<Vec<MediaAsset>, MediaHostError>;

    /// Delete one asset. Deleting an asset that no longer exists succeeds.
    async fn delete_asset(&self, asset_id: &str) -> Result<(), MediaHostError>;
}

/// List a folder, turning any failure into an empty list plus an error marker.
pub async fn list_or_empty(host: &dyn MediaHost, folder: &str) -> MediaListing {
    match host.list_by_folder(folder).await {
        Ok(images) => MediaListing {
            images,
            error: None,
        },
        Err(e) => {
            tracing::warn!(folder, error = %e, "Media listing failed, returning empty list");
            MediaListing {
                images: Vec::new(),
                error: Some(e.to_string()),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// DisabledMediaHost
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledMediaHost;

#[async_trait]
impl MediaHost for DisabledMediaHost {
    async fn list_by_folder(&self, _folder: &str) -> Result<Vec<MediaAsset>, MediaHostError> {
        Err(MediaHostError::NotConfigured)
    }

    async fn delete_asset(&self, _asset_id: &str) -> Result<(), MediaHostError> {
        Err(MediaHostError::NotConfigured)
    }
}

// ---------------------------------------------------------------------------
// CloudinaryClient
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ResourcesResponse {
    #[serde(default)]
    resources: Vec<Resource>,
}

#[derive(Debug, Deserialize)]
struct Resource {
    public_id: String,
    secure_url: String,
    #[serde(default)]
    bytes: u64,
}

impl From<Resource> for MediaAsset {
    fn from(r: Resource) -> Self {
        Self {
            asset_id: r.public_id,
            url: r.secure_url,
            byte_size: r.bytes,
        }
    }
}

#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

/// HTTP client for one media host account.
pub struct CloudinaryClient {
    client: reqwest::Client,
    credentials: MediaCredentials,
    api_base: String,
}

impl CloudinaryClient {
    pub fn new(credentials: MediaCredentials) -> Self {
        Self::with_client(reqwest::Client::new(), credentials)
    }

    /// Reuse an existing [`reqwest::Client`] (shared connection pool).
    pub fn with_client(client: reqwest::Client, credentials: MediaCredentials) -> Self {
        Self {
            client,
            credentials,
            api_base: API_BASE.to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}/{}", self.api_base, self.credentials.cloud_name, path)
    }

    /// Return the response unchanged on 2xx, or an [`MediaHostError::ApiError`].
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, MediaHostError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(MediaHostError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl MediaHost for CloudinaryClient {
    async fn list_by_folder(&self, folder: &str) -> Result<Vec<MediaAsset>, MediaHostError> {
        let max_results = MAX_LIST_RESULTS.to_string();
        let response = self
            .client
            .get(self.endpoint("resources/image/upload"))
            .basic_auth(&self.credentials.api_key, Some(&self.credentials.api_secret))
            .query(&[("prefix", folder), ("max_results", max_results.as_str())])
            .timeout(LIST_TIMEOUT)
            .send()
            .await?;

        let parsed: ResourcesResponse = Self::ensure_success(response).await?.json().await?;
        tracing::debug!(folder, count = parsed.resources.len(), "Listed media assets");
        Ok(parsed.resources.into_iter().map(MediaAsset::from).collect())
    }

    async fn delete_asset(&self, asset_id: &str) -> Result<(), MediaHostError> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default()
            .to_string();
        let signature = sign_params(
            &[("public_id", asset_id), ("timestamp", timestamp.as_str())],
            &self.credentials.api_secret,
            self.credentials.algorithm,
        );

        let response = self
            .client
            .post(self.endpoint("image/destroy"))
            .form(&[
                ("public_id", asset_id),
                ("timestamp", timestamp.as_str()),
                ("api_key", self.credentials.api_key.as_str()),
                ("signature", signature.as_str()),
                ("signature_algorithm", self.credentials.algorithm.as_str()),
            ])
            .timeout(DELETE_TIMEOUT)
            .send()
            .await?;

        let parsed: DestroyResponse = Self::ensure_success(response).await?.json().await?;
        interpret_destroy(asset_id, &parsed.result)
    }
}

/// `"ok"` and `"not found"` both mean the asset is gone.
fn interpret_destroy(asset_id: &str, result: &str) -> Result<(), MediaHostError> {
    match result {
        "ok" => {
            tracing::info!(asset_id, "Media asset deleted");
            Ok(())
        }
        "not found" => {
            tracing::info!(asset_id, "Media asset already absent");
            Ok(())
        }
        other => Err(MediaHostError::Rejected(other.to_string())),
    }
}
