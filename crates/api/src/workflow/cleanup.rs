//! Best-effort release of hosted images after an entity is deleted.

use std::time::Duration;

use carcare_cloud::MediaHost;
use futures::future::join_all;

/// Upper bound for releasing all assets of one entity.
const RELEASE_TIMEOUT: Duration = Duration::from_secs(10);

/// Result of releasing an entity's assets.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AssetRelease {
    pub released: usize,
    /// `(asset_id, reason)` for each asset that could not be deleted.
    pub failed: Vec<(String, String)>,
}

/// Delete every asset in `asset_ids` concurrently.
///
/// Never fails: each failure is logged and counted. Runs after the owning
/// row is already gone, so a failure only leaves an orphaned image behind.
pub async fn release_assets(media: &dyn MediaHost, asset_ids: Vec<String>) -> AssetRelease {
    if asset_ids.is_empty() {
        return AssetRelease::default();
    }

    let attempts = asset_ids.iter().map(|id| async move {
        let result = tokio::time::timeout(RELEASE_TIMEOUT, media.delete_asset(id))
            .await
            .unwrap_or(Err(carcare_cloud::MediaHostError::Timeout));
        (id.clone(), result)
    });

    let mut outcome = AssetRelease::default();
    for (asset_id, result) in join_all(attempts).await {
        match result {
            Ok(()) => outcome.released += 1,
            Err(e) => {
                tracing::warn!(asset_id = %asset_id, error = %e, "Failed to release media asset");
                outcome.failed.push((asset_id, e.to_string()));
            }
        }
    }
    outcome
}
