//! Car model entity model and DTOs.
//!
//! A car model references its brand by free-text name plus the slug
//! derived from it. Duplicates are detected on the exact `(brand, name)`
//! pair, so "Toyota / Fortuner" and "toyota / Fortuner" are distinct.

use carcare_core::error::CoreError;
use carcare_core::slug::{renamed, require_slug};
use carcare_core::types::{DbId, Timestamp};
use carcare_core::validation::{non_blank, require_fields, trimmed};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Services listed on a model page when the admin does not say otherwise.
pub const DEFAULT_SERVICE_COUNT: i32 = 6;

/// A row from the `car_models` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarModel {
    pub id: DbId,
    pub brand: String,
    pub brand_slug: String,
    pub name: String,
    pub slug: String,
    pub image_url: String,
    pub image_asset_id: String,
    pub service_count: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CarModel {
    /// The stored image asset, if one was recorded.
    pub fn asset_ids(&self) -> Vec<String> {
        if self.image_asset_id.is_empty() {
            Vec::new()
        } else {
            vec![self.image_asset_id.clone()]
        }
    }
}

/// DTO for creating a car model. The image must already be uploaded.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCarModel {
    pub brand: Option<String>,
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub image_asset_id: Option<String>,
    pub service_count: Option<i32>,
}

/// A validated car model with derived slugs.
#[derive(Debug, Clone)]
pub struct NewCarModel {
    pub brand: String,
    pub brand_slug: String,
    pub name: String,
    pub slug: String,
    pub image_url: String,
    pub image_asset_id: String,
    pub service_count: i32,
}

impl CreateCarModel {
    pub fn validate(self) -> Result<NewCarModel, CoreError> {
        require_fields(&[
            ("brand", self.brand.as_deref()),
            ("name", self.name.as_deref()),
            ("imageUrl", self.image_url.as_deref()),
            ("imageAssetId", self.image_asset_id.as_deref()),
        ])?;
        let service_count = validate_service_count(self.service_count)?;
        let brand = trimmed(self.brand);
        let name = trimmed(self.name);
        let brand_slug = require_slug("brand", &brand)?;
        let slug = require_slug("name", &name)?;
        Ok(NewCarModel {
            brand,
            brand_slug,
            name,
            slug,
            image_url: trimmed(self.image_url),
            image_asset_id: trimmed(self.image_asset_id),
            service_count: service_count.unwrap_or(DEFAULT_SERVICE_COUNT),
        })
    }
}

/// DTO for updating a car model. Omitted fields are preserved.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCarModel {
    pub brand: Option<String>,
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub image_asset_id: Option<String>,
    pub service_count: Option<i32>,
}

/// A validated car model patch. Each slug is set whenever its source is.
#[derive(Debug, Clone, Default)]
pub struct CarModelChanges {
    pub brand: Option<String>,
    pub brand_slug: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub image_url: Option<String>,
    pub image_asset_id: Option<String>,
    pub service_count: Option<i32>,
}

impl UpdateCarModel {
    pub fn validate(self) -> Result<CarModelChanges, CoreError> {
        let (brand, brand_slug) = renamed("brand", self.brand)?.unzip();
        let (name, slug) = renamed("name", self.name)?.unzip();
        Ok(CarModelChanges {
            brand,
            brand_slug,
            name,
            slug,
            image_url: non_blank(self.image_url),
            image_asset_id: non_blank(self.image_asset_id),
            service_count: validate_service_count(self.service_count)?,
        })
    }
}

fn validate_service_count(count: Option<i32>) -> Result<Option<i32>, CoreError> {
    match count {
        Some(n) if n < 0 => Err(CoreError::Validation(
            "serviceCount cannot be negative".into(),
        )),
        other => Ok(other),
    }
}
