//! Special service entity model and DTOs.

use carcare_core::error::CoreError;
use carcare_core::slug::explicit_or_derived;
use carcare_core::types::{DbId, Timestamp};
use carcare_core::validation::{non_blank, require_fields, trimmed};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::detailed_service::service_rename;

/// A row from the `special_services` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialService {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub tagline: String,
    pub description: String,
    pub content: String,
    #[sqlx(rename = "sort_order")]
    pub order: i32,
    pub hero_image_url: String,
    pub hero_image_asset_id: String,
    pub content_image_url: String,
    pub content_image_asset_id: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl SpecialService {
    pub fn asset_ids(&self) -> Vec<String> {
        [&self.hero_image_asset_id, &self.content_image_asset_id]
            .into_iter()
            .filter(|id| !id.is_empty())
            .cloned()
            .collect()
    }
}

/// DTO for creating a special service. All copy and both images are required.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSpecialService {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub order: Option<i32>,
    pub hero_image_url: Option<String>,
    pub hero_image_asset_id: Option<String>,
    pub content_image_url: Option<String>,
    pub content_image_asset_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewSpecialService {
    pub name: String,
    pub slug: String,
    pub tagline: String,
    pub description: String,
    pub content: String,
    pub order: i32,
    pub hero_image_url: String,
    pub hero_image_asset_id: String,
    pub content_image_url: String,
    pub content_image_asset_id: String,
}

impl CreateSpecialService {
    pub fn validate(self) -> Result<NewSpecialService, CoreError> {
        require_fields(&[
            ("name", self.name.as_deref()),
            ("tagline", self.tagline.as_deref()),
            ("description", self.description.as_deref()),
            ("content", self.content.as_deref()),
            ("heroImageUrl", self.hero_image_url.as_deref()),
            ("contentImageUrl", self.content_image_url.as_deref()),
        ])?;
        let name = trimmed(self.name);
        let slug = explicit_or_derived(self.slug.as_deref(), &name)?;
        Ok(NewSpecialService {
            name,
            slug,
            tagline: trimmed(self.tagline),
            description: trimmed(self.description),
            content: trimmed(self.content),
            order: self.order.unwrap_or(0),
            hero_image_url: trimmed(self.hero_image_url),
            hero_image_asset_id: trimmed(self.hero_image_asset_id),
            content_image_url: trimmed(self.content_image_url),
            content_image_asset_id: trimmed(self.content_image_asset_id),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSpecialService {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub order: Option<i32>,
    pub hero_image_url: Option<String>,
    pub hero_image_asset_id: Option<String>,
    pub content_image_url: Option<String>,
    pub content_image_asset_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SpecialServiceChanges {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub order: Option<i32>,
    pub hero_image_url: Option<String>,
    pub hero_image_asset_id: Option<String>,
    pub content_image_url: Option<String>,
    pub content_image_asset_id: Option<String>,
}

impl UpdateSpecialService {
    /// Required copy cannot be blanked out by an update.
    pub fn validate(self) -> Result<SpecialServiceChanges, CoreError> {
        let (name, slug) = service_rename(self.name, self.slug)?;
        let tagline = required_text("tagline", self.tagline)?;
        let description = required_text("description", self.description)?;
        let content = required_text("content", self.content)?;
        Ok(SpecialServiceChanges {
            name,
            slug,
            tagline,
            description,
            content,
            order: self.order,
            hero_image_url: non_blank(self.hero_image_url),
            hero_image_asset_id: non_blank(self.hero_image_asset_id),
            content_image_url: non_blank(self.content_image_url),
            content_image_asset_id: non_blank(self.content_image_asset_id),
        })
    }
}

fn required_text(field: &str, value: Option<String>) -> Result<Option<String>, CoreError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if v.is_empty() => Err(CoreError::Validation(format!("{field} cannot be empty"))),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn ceramic() -> CreateSpecialService {
        CreateSpecialService {
            name: Some("Ceramic Coating".into()),
            tagline: Some("Long-lasting shine".into()),
            description: Some("9H coating".into()),
            content: Some("Full body ceramic".into()),
            order: Some(2),
            hero_image_url: Some("https://img/hero.png".into()),
            hero_image_asset_id: Some("services/hero".into()),
            content_image_url: Some("https://img/content.png".into()),
            content_image_asset_id: Some("services/content".into()),
            slug: None,
        }
    }

    #[test]
    fn create_requires_copy() {
        let err = CreateSpecialService {
            tagline: None,
            content: None,
            ..ceramic()
        }
        .validate()
        .unwrap_err();
        assert_matches!(err, CoreError::Validation(msg)
            if msg == "Missing required fields: tagline, content");
    }

    #[test]
    fn create_derives_slug() {
        let new = ceramic().validate().unwrap();
        assert_eq!(new.slug, "ceramic-coating");
        assert_eq!(new.order, 2);
    }

    #[test]
    fn update_rejects_blank_tagline() {
        assert!(UpdateSpecialService {
            tagline: Some(" ".into()),
            ..Default::default()
        }
        .validate()
        .is_err());
    }

    #[test]
    fn update_explicit_slug_without_rename() {
        let changes = UpdateSpecialService {
            slug: Some("PPF Film".into()),
            ..Default::default()
        }
        .validate()
        .unwrap();
        assert!(changes.name.is_none());
        assert_eq!(changes.slug.as_deref(), Some("ppf-film"));
    }
}
