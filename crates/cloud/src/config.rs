//! Media host credentials.

use std::str::FromStr;

/// Digest used for request signatures. The host defaults to SHA-1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignatureAlgorithm {
    #[default]
    Sha1,
    Sha256,
}

impl SignatureAlgorithm {
    /// Value of the host's `signature_algorithm` parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
        }
    }
}

impl FromStr for SignatureAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha1" => Ok(Self::Sha1),
            "sha256" => Ok(Self::Sha256),
            other => Err(format!("unknown signature algorithm '{other}'")),
        }
    }
}

/// Account credentials for the media host. The secret never leaves the server.
#[derive(Clone)]
pub struct MediaCredentials {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub algorithm: SignatureAlgorithm,
}

impl std::fmt::Debug for MediaCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaCredentials")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

impl MediaCredentials {
    /// Load credentials from environment variables.
    ///
    /// Returns `None` if any of the three credentials is missing, which
    /// disables signing, listing, and deletion.
    ///
    /// | Variable                    | Required | Default |
    /// |-----------------------------|----------|---------|
    /// | `MEDIA_CLOUD_NAME`          | yes      |         |
    /// | `MEDIA_API_KEY`             | yes      |         |
    /// | `MEDIA_API_SECRET`          | yes      |         |
    /// | `MEDIA_SIGNATURE_ALGORITHM` | no       | `sha1`  |
    pub fn from_env() -> Option<Self> {
        let var = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());
        let algorithm = match var("MEDIA_SIGNATURE_ALGORITHM") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to sha1 signatures");
                SignatureAlgorithm::Sha1
            }),
            None => SignatureAlgorithm::Sha1,
        };
        Some(Self {
            cloud_name: var("MEDIA_CLOUD_NAME")?,
            api_key: var("MEDIA_API_KEY")?,
            api_secret: var("MEDIA_API_SECRET")?,
            algorithm,
        })
    }
}
