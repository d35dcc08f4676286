//! Liveness check, mounted at the root rather than under `/api`.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// `ok`, or `degraded` when Postgres does not answer.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthResponse {
    fn from_db(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }
}

/// GET /health
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db = carcare_db::health_check(&state.pool).await;
    if let Err(e) = &db {
        tracing::warn!(error = %e, "Health check could not reach the database");
    }
    Json(HealthResponse::from_db(db.is_ok()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_database_is_degraded() {
        let body = serde_json::to_value(HealthResponse::from_db(false)).unwrap();
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["dbHealthy"], false);
    }
}
