//! Read models assembled for the public site.
//!
//! - [`brand_directory`] groups car models under their car brand for the
//!   brand browsing page.
//! - [`merge_catalog`] combines general and special services into the
//!   single list the booking form offers.

use std::collections::HashMap;

use serde::Serialize;

use crate::booking::ServiceType;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Brand directory
// ---------------------------------------------------------------------------

/// A car brand as seen by the directory builder.
#[derive(Debug, Clone, Copy)]
pub struct BrandInput<'a> {
    pub name: &'a str,
    pub brand_slug: &'a str,
    pub logo_url: &'a str,
}

/// A car model as seen by the directory builder.
#[derive(Debug, Clone, Copy)]
pub struct ModelInput<'a> {
    pub brand_slug: &'a str,
    pub name: &'a str,
}

/// One brand with the names of its models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryEntry {
    pub name: String,
    pub brand_slug: String,
    pub logo_url: String,
    pub models: Vec<String>,
    pub model_count: usize,
}

/// Group models under their brand, sorted by brand name (case-insensitive).
///
/// Model order within a brand follows the input order. Models whose brand
/// slug matches no brand are dropped.
pub fn brand_directory(brands: &[BrandInput<'_>], models: &[ModelInput<'_>]) -> Vec<DirectoryEntry> {
    let mut by_slug: HashMap<&str, DirectoryEntry> = brands
        .iter()
        .map(|b| {
            (
                b.brand_slug,
                DirectoryEntry {
                    name: b.name.to_string(),
                    brand_slug: b.brand_slug.to_string(),
                    logo_url: b.logo_url.to_string(),
                    models: Vec::new(),
                    model_count: 0,
                },
            )
        })
        .collect();

    for model in models {
        if let Some(entry) = by_slug.get_mut(model.brand_slug) {
            entry.models.push(model.name.to_string());
            entry.model_count += 1;
        }
    }

    let mut entries: Vec<DirectoryEntry> = by_slug.into_values().collect();
    entries.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.brand_slug.cmp(&b.brand_slug))
    });
    entries
}

// ---------------------------------------------------------------------------
// Service catalog
// ---------------------------------------------------------------------------

/// A bookable service, tagged with the collection it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: DbId,
    pub slug: String,
    pub name: String,
    pub tagline: String,
    pub order: i32,
    pub hero_image_url: String,
    #[serde(rename = "type")]
    pub service_type: ServiceType,
}

/// General services first, then special services, each group by `order`.
///
/// The sort is stable so services sharing an `order` keep their input order.
pub fn merge_catalog(
    mut general: Vec<CatalogEntry>,
    mut special: Vec<CatalogEntry>,
) -> Vec<CatalogEntry> {
    general.sort_by_key(|e| e.order);
    special.sort_by_key(|e| e.order);
    general.extend(special);
    general
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
