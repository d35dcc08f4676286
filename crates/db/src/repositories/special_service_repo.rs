//! Repository for the `special_services` table.

use carcare_core::types::DbId;
use sqlx::PgPool;

use crate::models::special_service::{NewSpecialService, SpecialService, SpecialServiceChanges};

const COLUMNS: &str = "id, name, slug, tagline, description, content, sort_order, \
     hero_image_url, hero_image_asset_id, content_image_url, content_image_asset_id, \
     created_at, updated_at";

pub struct SpecialServiceRepo;

impl SpecialServiceRepo {
    pub async fn create(
        pool: &PgPool,
        input: &NewSpecialService,
    ) -> Result<SpecialService, sqlx::Error> {
        let query = format!(
            "INSERT INTO special_services
                (name, slug, tagline, description, content, sort_order,
                 hero_image_url, hero_image_asset_id, content_image_url, content_image_asset_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SpecialService>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.tagline)
            .bind(&input.description)
            .bind(&input.content)
            .bind(input.order)
            .bind(&input.hero_image_url)
            .bind(&input.hero_image_asset_id)
            .bind(&input.content_image_url)
            .bind(&input.content_image_asset_id)
            .fetch_one(pool)
            .await
    }

    /// List all special services in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<SpecialService>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM special_services ORDER BY sort_order ASC, created_at ASC"
        );
        sqlx::query_as::<_, SpecialService>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &SpecialServiceChanges,
    ) -> Result<Option<SpecialService>, sqlx::Error> {
        let query = format!(
            "UPDATE special_services SET
                name = COALESCE($2, name),
                slug = COALESCE($3, slug),
                tagline = COALESCE($4, tagline),
                description = COALESCE($5, description),
                content = COALESCE($6, content),
                sort_order = COALESCE($7, sort_order),
                hero_image_url = COALESCE($8, hero_image_url),
                hero_image_asset_id = COALESCE($9, hero_image_asset_id),
                content_image_url = COALESCE($10, content_image_url),
                content_image_asset_id = COALESCE($11, content_image_asset_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SpecialService>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.tagline)
            .bind(&input.description)
            .bind(&input.content)
            .bind(input.order)
            .bind(&input.hero_image_url)
            .bind(&input.hero_image_asset_id)
            .bind(&input.content_image_url)
            .bind(&input.content_image_asset_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<SpecialService>, sqlx::Error> {
        let query = format!("DELETE FROM special_services WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, SpecialService>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
