//! Repository for the `car_models` table.

use carcare_core::types::DbId;
use sqlx::PgPool;

use crate::models::car_model::{CarModel, CarModelChanges, NewCarModel};

const COLUMNS: &str = "id, brand, brand_slug, name, slug, image_url, image_asset_id, \
     service_count, created_at, updated_at";

pub struct CarModelRepo;

impl CarModelRepo {
    pub async fn create(pool: &PgPool, input: &NewCarModel) -> Result<CarModel, sqlx::Error> {
        let query = format!(
            "INSERT INTO car_models
                (brand, brand_slug, name, slug, image_url, image_asset_id, service_count)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CarModel>(&query)
            .bind(&input.brand)
            .bind(&input.brand_slug)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.image_url)
            .bind(&input.image_asset_id)
            .bind(input.service_count)
            .fetch_one(pool)
            .await
    }

    /// List car models grouped by brand then name, optionally restricted to
    /// one brand slug.
    pub async fn list(
        pool: &PgPool,
        brand_slug: Option<&str>,
    ) -> Result<Vec<CarModel>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM car_models
             WHERE ($1::text IS NULL OR brand_slug = $1)
             ORDER BY brand ASC, name ASC"
        );
        sqlx::query_as::<_, CarModel>(&query)
            .bind(brand_slug)
            .fetch_all(pool)
            .await
    }

    /// Exact `(brand, name)` match; no slug normalization.
    pub async fn exists(pool: &PgPool, brand: &str, name: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM car_models WHERE brand = $1 AND name = $2)",
        )
        .bind(brand)
        .bind(name)
        .fetch_one(pool)
        .await
    }

    /// Apply a patch. Only `Some` fields are written.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CarModelChanges,
    ) -> Result<Option<CarModel>, sqlx::Error> {
        let query = format!(
            "UPDATE car_models SET
                brand = COALESCE($2, brand),
                brand_slug = COALESCE($3, brand_slug),
                name = COALESCE($4, name),
                slug = COALESCE($5, slug),
                image_url = COALESCE($6, image_url),
                image_asset_id = COALESCE($7, image_asset_id),
                service_count = COALESCE($8, service_count)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CarModel>(&query)
            .bind(id)
            .bind(&input.brand)
            .bind(&input.brand_slug)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.image_url)
            .bind(&input.image_asset_id)
            .bind(input.service_count)
            .fetch_optional(pool)
            .await
    }

    /// Delete a car model, returning the removed row so its image can be released.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<CarModel>, sqlx::Error> {
        let query = format!("DELETE FROM car_models WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, CarModel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
