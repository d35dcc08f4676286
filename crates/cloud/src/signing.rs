//! Request signing for the media host.
//!
//! The host's scheme: sort the parameters by name, join them as
//! `k1=v1&k2=v2`, append the API secret, and hex-encode the digest.
//! Empty values are left out.

use serde::Serialize;
use sha1::{Digest, Sha1};
use sha2::Sha256;

use crate::client::MediaHostError;
use crate::config::{MediaCredentials, SignatureAlgorithm};

/// Sign a parameter set with the account secret.
pub fn sign_params(params: &[(&str, &str)], secret: &str, algorithm: SignatureAlgorithm) -> String {
    let mut sorted: Vec<_> = params.iter().filter(|(_, v)| !v.is_empty()).collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));
    let joined = sorted
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");
    let payload = format!("{joined}{secret}");

    match algorithm {
        SignatureAlgorithm::Sha1 => format!("{:x}", Sha1::digest(payload.as_bytes())),
        SignatureAlgorithm::Sha256 => format!("{:x}", Sha256::digest(payload.as_bytes())),
    }
}

/// Parameters a browser needs to upload one file directly to the host.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UploadSignature {
    /// Unix seconds at issuance. The host rejects stale timestamps.
    pub timestamp: i64,
    pub signature: String,
    pub folder: String,
    pub api_key: String,
    pub cloud_name: String,
}

/// Issue upload parameters for `folder`, signed over `{folder, timestamp}`.
///
/// Fails with [`MediaHostError::NotConfigured`] when no credentials are set.
pub fn issue_upload_signature(
    credentials: Option<&MediaCredentials>,
    folder: &str,
    timestamp: i64,
) -> Result<UploadSignature, MediaHostError> {
    let creds = credentials.ok_or(MediaHostError::NotConfigured)?;
    let ts = timestamp.to_string();
    let signature = sign_params(
        &[("folder", folder), ("timestamp", ts.as_str())],
        &creds.api_secret,
        creds.algorithm,
    );
    Ok(UploadSignature {
        timestamp,
        signature,
        folder: folder.to_string(),
        api_key: creds.api_key.clone(),
        cloud_name: creds.cloud_name.clone(),
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn creds(algorithm: SignatureAlgorithm) -> MediaCredentials {
        MediaCredentials {
            cloud_name: "demo".into(),
            api_key: "1234".into(),
            api_secret: "abcd".into(),
            algorithm,
        }
    }

    #[test]
    fn signature_matches_known_sha1_digest() {
        // sha1("public_id=sample_image&timestamp=1315060510abcd")
        let sig = sign_params(
            &[("timestamp", "1315060510"), ("public_id", "sample_image")],
            "abcd",
            SignatureAlgorithm::Sha1,
        );
        assert_eq!(sig, "b4ad47fb4e25c7bf5f92a20089f9db59bc302313");
    }

    #[test]
    fn parameter_order_does_not_matter() {
        let a = sign_params(&[("a", "1"), ("b", "2")], "s", SignatureAlgorithm::Sha1);
        let b = sign_params(&[("b", "2"), ("a", "1")], "s", SignatureAlgorithm::Sha1);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_values_are_skipped() {
        let a = sign_params(&[("a", "1"), ("b", "")], "s", SignatureAlgorithm::Sha1);
        let b = sign_params(&[("a", "1")], "s", SignatureAlgorithm::Sha1);
        assert_eq!(a, b);
    }

    #[test]
    fn sha256_digest_is_64_hex_chars() {
        let sig = sign_params(&[("a", "1")], "s", SignatureAlgorithm::Sha256);
        assert_eq!(sig.len(), 64);
        assert!(sig.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn issued_signature_carries_public_fields_only() {
        let sig = issue_upload_signature(
            Some(&creds(SignatureAlgorithm::Sha1)),
            "automotive-carcare/hero-images",
            1_700_000_000,
        )
        .unwrap();
        assert_eq!(sig.folder, "automotive-carcare/hero-images");
        assert_eq!(sig.api_key, "1234");
        assert_eq!(sig.cloud_name, "demo");
        assert_eq!(
            sig.signature,
            sign_params(
                &[
                    ("folder", "automotive-carcare/hero-images"),
                    ("timestamp", "1700000000")
                ],
                "abcd",
                SignatureAlgorithm::Sha1,
            )
        );

        let json = serde_json::to_value(&sig).unwrap();
        assert!(json.get("apiKey").is_some());
        assert!(!json.to_string().contains("abcd"));
    }

    #[test]
    fn missing_credentials_is_a_configuration_error() {
        assert_matches!(
            issue_upload_signature(None, "x", 0),
            Err(MediaHostError::NotConfigured)
        );
    }
}
