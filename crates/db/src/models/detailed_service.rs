//! General ("detailed") service entity model and DTOs.
//!
//! The admin may supply an explicit slug; otherwise it is derived from the
//! name. Service slugs are not unique.

use carcare_core::error::CoreError;
use carcare_core::slug::{explicit_or_derived, require_slug};
use carcare_core::types::{DbId, Timestamp};
use carcare_core::validation::{non_blank, require_fields, trimmed};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `detailed_services` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralService {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub tagline: String,
    pub description: String,
    pub content: String,
    /// Comma-joined feature list, rendered as bullets by the site.
    pub features: String,
    #[sqlx(rename = "sort_order")]
    pub order: i32,
    pub hero_image_url: String,
    pub hero_image_asset_id: String,
    pub content_image_url: String,
    pub content_image_asset_id: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl GeneralService {
    /// Every media asset owned by this service.
    pub fn asset_ids(&self) -> Vec<String> {
        [&self.hero_image_asset_id, &self.content_image_asset_id]
            .into_iter()
            .filter(|id| !id.is_empty())
            .cloned()
            .collect()
    }
}

/// DTO for creating a general service. Both images must already be uploaded.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGeneralService {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub features: Option<String>,
    pub order: Option<i32>,
    pub hero_image_url: Option<String>,
    pub hero_image_asset_id: Option<String>,
    pub content_image_url: Option<String>,
    pub content_image_asset_id: Option<String>,
}

/// A validated general service ready to insert.
#[derive(Debug, Clone)]
pub struct NewGeneralService {
    pub name: String,
    pub slug: String,
    pub tagline: String,
    pub description: String,
    pub content: String,
    pub features: String,
    pub order: i32,
    pub hero_image_url: String,
    pub hero_image_asset_id: String,
    pub content_image_url: String,
    pub content_image_asset_id: String,
}

impl CreateGeneralService {
    pub fn validate(self) -> Result<NewGeneralService, CoreError> {
        require_fields(&[
            ("name", self.name.as_deref()),
            ("heroImageUrl", self.hero_image_url.as_deref()),
            ("contentImageUrl", self.content_image_url.as_deref()),
        ])?;
        let name = trimmed(self.name);
        let slug = explicit_or_derived(self.slug.as_deref(), &name)?;
        Ok(NewGeneralService {
            name,
            slug,
            tagline: trimmed(self.tagline),
            description: trimmed(self.description),
            content: trimmed(self.content),
            features: trimmed(self.features),
            order: self.order.unwrap_or(0),
            hero_image_url: trimmed(self.hero_image_url),
            hero_image_asset_id: trimmed(self.hero_image_asset_id),
            content_image_url: trimmed(self.content_image_url),
            content_image_asset_id: trimmed(self.content_image_asset_id),
        })
    }
}

/// DTO for updating a general service. Omitted fields are preserved.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGeneralService {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub features: Option<String>,
    pub order: Option<i32>,
    pub hero_image_url: Option<String>,
    pub hero_image_asset_id: Option<String>,
    pub content_image_url: Option<String>,
    pub content_image_asset_id: Option<String>,
}

/// A validated general service patch.
#[derive(Debug, Clone, Default)]
pub struct GeneralServiceChanges {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub features: Option<String>,
    pub order: Option<i32>,
    pub hero_image_url: Option<String>,
    pub hero_image_asset_id: Option<String>,
    pub content_image_url: Option<String>,
    pub content_image_asset_id: Option<String>,
}

impl UpdateGeneralService {
    pub fn validate(self) -> Result<GeneralServiceChanges, CoreError> {
        let (name, slug) = service_rename(self.name, self.slug)?;
        Ok(GeneralServiceChanges {
            name,
            slug,
            // Text bodies may legitimately be cleared, so they are not
            // filtered through `non_blank`.
            tagline: self.tagline.map(|s| s.trim().to_string()),
            description: self.description.map(|s| s.trim().to_string()),
            content: self.content.map(|s| s.trim().to_string()),
            features: self.features.map(|s| s.trim().to_string()),
            order: self.order,
            hero_image_url: non_blank(self.hero_image_url),
            hero_image_asset_id: non_blank(self.hero_image_asset_id),
            content_image_url: non_blank(self.content_image_url),
            content_image_asset_id: non_blank(self.content_image_asset_id),
        })
    }
}

/// Resolve the name/slug pair of a service update.
///
/// An explicit slug always wins. Otherwise a rename re-derives the slug and
/// an untouched name leaves it alone.
pub(crate) fn service_rename(
    name: Option<String>,
    slug: Option<String>,
) -> Result<(Option<String>, Option<String>), CoreError> {
    let name = match name.map(|n| n.trim().to_string()) {
        Some(n) if n.is_empty() => {
            return Err(CoreError::Validation("name cannot be empty".into()));
        }
        other => other,
    };
    let slug = match (non_blank(slug), &name) {
        (Some(explicit), _) => Some(require_slug("slug", &explicit)?),
        (None, Some(n)) => Some(require_slug("name", n)?),
        (None, None) => None,
    };
    Ok((name, slug))
}
