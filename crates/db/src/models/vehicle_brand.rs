//! Vehicle brand entity model and DTOs.
//!
//! Vehicle brands feed the brand/model dropdowns of the booking form. The
//! model list is free text and keeps the order the admin entered.

use carcare_core::error::CoreError;
use carcare_core::slug::{renamed, require_slug};
use carcare_core::types::{DbId, Timestamp};
use carcare_core::validation::{require_fields, trimmed};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `vehicle_brands` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleBrand {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub models: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a vehicle brand.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateVehicleBrand {
    pub name: Option<String>,
    pub models: Option<Vec<String>>,
}

/// A validated vehicle brand with its derived slug.
#[derive(Debug, Clone)]
pub struct NewVehicleBrand {
    pub name: String,
    pub slug: String,
    pub models: Vec<String>,
}

impl CreateVehicleBrand {
    pub fn validate(self) -> Result<NewVehicleBrand, CoreError> {
        require_fields(&[("name", self.name.as_deref())])?;
        let name = trimmed(self.name);
        let slug = require_slug("name", &name)?;
        Ok(NewVehicleBrand {
            name,
            slug,
            models: clean_models(self.models.unwrap_or_default()),
        })
    }
}

/// DTO for updating a vehicle brand. Omitted fields are preserved.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateVehicleBrand {
    pub name: Option<String>,
    pub models: Option<Vec<String>>,
}

/// A validated vehicle brand patch. `slug` is set whenever `name` is.
#[derive(Debug, Clone, Default)]
pub struct VehicleBrandChanges {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub models: Option<Vec<String>>,
}

impl UpdateVehicleBrand {
    pub fn validate(self) -> Result<VehicleBrandChanges, CoreError> {
        let (name, slug) = renamed("name", self.name)?.unzip();
        Ok(VehicleBrandChanges {
            name,
            slug,
            models: self.models.map(clean_models),
        })
    }
}

/// Trim model names and drop blanks, keeping order.
fn clean_models(models: Vec<String>) -> Vec<String> {
    models
        .into_iter()
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .collect()
}
