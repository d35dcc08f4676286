//! Shared query and body types for API handlers.

use carcare_core::error::CoreError;
use carcare_core::types::DbId;
use carcare_core::validation::parse_id;
use serde::Deserialize;

/// `?id=` on delete endpoints.
#[derive(Debug, Deserialize)]
pub struct IdParams {
    pub id: Option<String>,
}

impl IdParams {
    pub fn parse(&self, entity: &str) -> Result<DbId, CoreError> {
        parse_id(entity, self.id.as_deref())
    }
}

/// An update body: the target id next to the patch fields.
///
/// The admin console historically sent `_id`; both spellings are accepted.
#[derive(Debug, Deserialize)]
pub struct IdBody<T> {
    #[serde(alias = "_id")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub fields: T,
}

impl<T> IdBody<T> {
    /// Split into the parsed id and the patch.
    pub fn into_parts(self, entity: &str) -> Result<(DbId, T), CoreError> {
        let id = parse_id(entity, self.id.as_deref())?;
        Ok((id, self.fields))
    }
}

/// `?brand=` filter for car models (brand slug).
#[derive(Debug, Deserialize)]
pub struct BrandFilter {
    pub brand: Option<String>,
}

/// `?folder=` for upload signatures and media listings.
#[derive(Debug, Deserialize)]
pub struct FolderParams {
    pub folder: Option<String>,
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use carcare_db::models::vehicle_brand::UpdateVehicleBrand;

    use super::*;

    #[test]
    fn legacy_underscore_id_is_accepted() {
        let id = uuid::Uuid::new_v4();
        let body: IdBody<UpdateVehicleBrand> =
            serde_json::from_value(serde_json::json!({"_id": id.to_string(), "name": "Kia"}))
                .unwrap();
        let (parsed, fields) = body.into_parts("Brand").unwrap();
        assert_eq!(parsed, id);
        assert_eq!(fields.name.as_deref(), Some("Kia"));
    }

    #[test]
    fn missing_id_is_a_validation_error() {
        let body: IdBody<UpdateVehicleBrand> =
            serde_json::from_value(serde_json::json!({"name": "Kia"})).unwrap();
        assert_matches!(body.into_parts("Brand"), Err(CoreError::Validation(msg))
            if msg == "Brand ID is required");
    }

    #[test]
    fn malformed_id_is_a_validation_error() {
        let params = IdParams {
            id: Some("abc".into()),
        };
        assert_matches!(params.parse("Booking"), Err(CoreError::Validation(msg))
            if msg == "Invalid Booking ID format");
    }
}
