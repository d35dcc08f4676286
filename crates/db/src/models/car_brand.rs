//! Car brand entity model and DTOs.

use carcare_core::error::CoreError;
use carcare_core::slug::{renamed, require_slug};
use carcare_core::types::{DbId, Timestamp};
use carcare_core::validation::{non_blank, require_fields, trimmed};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `car_brands` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarBrand {
    pub id: DbId,
    pub name: String,
    pub brand_slug: String,
    pub logo_url: String,
    pub logo_asset_id: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CarBrand {
    pub fn asset_ids(&self) -> Vec<String> {
        if self.logo_asset_id.is_empty() {
            Vec::new()
        } else {
            vec![self.logo_asset_id.clone()]
        }
    }
}

/// DTO for creating a car brand. The logo must already be uploaded.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCarBrand {
    pub name: Option<String>,
    pub logo_url: Option<String>,
    pub logo_asset_id: Option<String>,
}

/// A validated car brand with its derived slug.
#[derive(Debug, Clone)]
pub struct NewCarBrand {
    pub name: String,
    pub brand_slug: String,
    pub logo_url: String,
    pub logo_asset_id: String,
}

impl CreateCarBrand {
    pub fn validate(self) -> Result<NewCarBrand, CoreError> {
        require_fields(&[
            ("name", self.name.as_deref()),
            ("logoUrl", self.logo_url.as_deref()),
            ("logoAssetId", self.logo_asset_id.as_deref()),
        ])?;
        let name = trimmed(self.name);
        let brand_slug = require_slug("name", &name)?;
        Ok(NewCarBrand {
            name,
            brand_slug,
            logo_url: trimmed(self.logo_url),
            logo_asset_id: trimmed(self.logo_asset_id),
        })
    }
}

/// DTO for updating a car brand. A new logo replaces both URL and asset id.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCarBrand {
    pub name: Option<String>,
    pub logo_url: Option<String>,
    pub logo_asset_id: Option<String>,
}

/// A validated car brand patch.
#[derive(Debug, Clone, Default)]
pub struct CarBrandChanges {
    pub name: Option<String>,
    pub brand_slug: Option<String>,
    pub logo_url: Option<String>,
    pub logo_asset_id: Option<String>,
}

impl UpdateCarBrand {
    pub fn validate(self) -> Result<CarBrandChanges, CoreError> {
        let (name, brand_slug) = renamed("name", self.name)?.unzip();
        Ok(CarBrandChanges {
            name,
            brand_slug,
            logo_url: non_blank(self.logo_url),
            logo_asset_id: non_blank(self.logo_asset_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_logo() {
        let err = CreateCarBrand {
            name: Some("Toyota".into()),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: Missing required fields: logoUrl, logoAssetId"
        );
    }

    #[test]
    fn create_derives_brand_slug() {
        let new = CreateCarBrand {
            name: Some("Land Rover".into()),
            logo_url: Some("https://img/lr.png".into()),
            logo_asset_id: Some("brands/lr".into()),
        }
        .validate()
        .unwrap();
        assert_eq!(new.brand_slug, "land-rover");
    }

    #[test]
    fn update_ignores_blank_logo() {
        let changes = UpdateCarBrand {
            name: None,
            logo_url: Some("".into()),
            logo_asset_id: None,
        }
        .validate()
        .unwrap();
        assert!(changes.logo_url.is_none());
        assert!(changes.brand_slug.is_none());
    }
}
