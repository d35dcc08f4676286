//! Repository for the `car_brands` table.

use carcare_core::types::DbId;
use sqlx::PgPool;

use crate::models::car_brand::{CarBrand, CarBrandChanges, NewCarBrand};

const COLUMNS: &str = "id, name, brand_slug, logo_url, logo_asset_id, created_at, updated_at";

pub struct CarBrandRepo;

impl CarBrandRepo {
    pub async fn create(pool: &PgPool, input: &NewCarBrand) -> Result<CarBrand, sqlx::Error> {
        let query = format!(
            "INSERT INTO car_brands (name, brand_slug, logo_url, logo_asset_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CarBrand>(&query)
            .bind(&input.name)
            .bind(&input.brand_slug)
            .bind(&input.logo_url)
            .bind(&input.logo_asset_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CarBrand>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM car_brands WHERE id = $1");
        sqlx::query_as::<_, CarBrand>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all car brands ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<CarBrand>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM car_brands ORDER BY name ASC");
        sqlx::query_as::<_, CarBrand>(&query).fetch_all(pool).await
    }

    pub async fn slug_exists(pool: &PgPool, brand_slug: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM car_brands WHERE brand_slug = $1)",
        )
        .bind(brand_slug)
        .fetch_one(pool)
        .await
    }

    /// Apply a patch. Only `Some` fields are written.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CarBrandChanges,
    ) -> Result<Option<CarBrand>, sqlx::Error> {
        let query = format!(
            "UPDATE car_brands SET
                name = COALESCE($2, name),
                brand_slug = COALESCE($3, brand_slug),
                logo_url = COALESCE($4, logo_url),
                logo_asset_id = COALESCE($5, logo_asset_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CarBrand>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.brand_slug)
            .bind(&input.logo_url)
            .bind(&input.logo_asset_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a car brand, returning the removed row so its logo can be released.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<CarBrand>, sqlx::Error> {
        let query = format!("DELETE FROM car_brands WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, CarBrand>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
