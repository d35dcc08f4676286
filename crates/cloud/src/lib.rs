//! Hosted image storage.
//!
//! Images never pass through this server. The browser uploads straight to
//! the media host using parameters from [`signing::issue_upload_signature`];
//! the server only lists and deletes assets afterwards through the
//! [`MediaHost`] seam.

pub mod client;
pub mod config;
pub mod signing;

pub use client::{
    list_or_empty, CloudinaryClient, DisabledMediaHost, MediaAsset, MediaHost, MediaHostError,
    MediaListing,
};
pub use config::{MediaCredentials, SignatureAlgorithm};
pub use signing::{issue_upload_signature, UploadSignature};
