//! Repository for the `vehicle_brands` table.

use carcare_core::types::DbId;
use sqlx::PgPool;

use crate::models::vehicle_brand::{NewVehicleBrand, VehicleBrand, VehicleBrandChanges};

const COLUMNS: &str = "id, name, slug, models, created_at, updated_at";

pub struct VehicleBrandRepo;

impl VehicleBrandRepo {
    pub async fn create(
        pool: &PgPool,
        input: &NewVehicleBrand,
    ) -> Result<VehicleBrand, sqlx::Error> {
        let query = format!(
            "INSERT INTO vehicle_brands (name, slug, models)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VehicleBrand>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.models)
            .fetch_one(pool)
            .await
    }

    /// List all vehicle brands ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<VehicleBrand>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vehicle_brands ORDER BY name ASC");
        sqlx::query_as::<_, VehicleBrand>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn slug_exists(pool: &PgPool, slug: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM vehicle_brands WHERE slug = $1)")
            .bind(slug)
            .fetch_one(pool)
            .await
    }

    /// Apply a patch. Only `Some` fields are written.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &VehicleBrandChanges,
    ) -> Result<Option<VehicleBrand>, sqlx::Error> {
        let query = format!(
            "UPDATE vehicle_brands SET
                name = COALESCE($2, name),
                slug = COALESCE($3, slug),
                models = COALESCE($4, models)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VehicleBrand>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.models)
            .fetch_optional(pool)
            .await
    }

    /// Delete a vehicle brand. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM vehicle_brands WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
