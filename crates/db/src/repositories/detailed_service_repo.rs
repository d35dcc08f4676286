//! Repository for the `detailed_services` table (general services).

use carcare_core::types::DbId;
use sqlx::PgPool;

use crate::models::detailed_service::{
    GeneralService, GeneralServiceChanges, NewGeneralService,
};

const COLUMNS: &str = "id, name, slug, tagline, description, content, features, sort_order, \
     hero_image_url, hero_image_asset_id, content_image_url, content_image_asset_id, \
     created_at, updated_at";

pub struct DetailedServiceRepo;

impl DetailedServiceRepo {
    pub async fn create(
        pool: &PgPool,
        input: &NewGeneralService,
    ) -> Result<GeneralService, sqlx::Error> {
        let query = format!(
            "INSERT INTO detailed_services
                (name, slug, tagline, description, content, features, sort_order,
                 hero_image_url, hero_image_asset_id, content_image_url, content_image_asset_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GeneralService>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.tagline)
            .bind(&input.description)
            .bind(&input.content)
            .bind(&input.features)
            .bind(input.order)
            .bind(&input.hero_image_url)
            .bind(&input.hero_image_asset_id)
            .bind(&input.content_image_url)
            .bind(&input.content_image_asset_id)
            .fetch_one(pool)
            .await
    }

    /// List all general services in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<GeneralService>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM detailed_services ORDER BY sort_order ASC, created_at ASC"
        );
        sqlx::query_as::<_, GeneralService>(&query)
            .fetch_all(pool)
            .await
    }

    /// Apply a patch. Only `Some` fields are written.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &GeneralServiceChanges,
    ) -> Result<Option<GeneralService>, sqlx::Error> {
        let query = format!(
            "UPDATE detailed_services SET
                name = COALESCE($2, name),
                slug = COALESCE($3, slug),
                tagline = COALESCE($4, tagline),
                description = COALESCE($5, description),
                content = COALESCE($6, content),
                features = COALESCE($7, features),
                sort_order = COALESCE($8, sort_order),
                hero_image_url = COALESCE($9, hero_image_url),
                hero_image_asset_id = COALESCE($10, hero_image_asset_id),
                content_image_url = COALESCE($11, content_image_url),
                content_image_asset_id = COALESCE($12, content_image_asset_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GeneralService>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.tagline)
            .bind(&input.description)
            .bind(&input.content)
            .bind(&input.features)
            .bind(input.order)
            .bind(&input.hero_image_url)
            .bind(&input.hero_image_asset_id)
            .bind(&input.content_image_url)
            .bind(&input.content_image_asset_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a general service, returning the removed row for image cleanup.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<GeneralService>, sqlx::Error> {
        let query = format!("DELETE FROM detailed_services WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, GeneralService>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
