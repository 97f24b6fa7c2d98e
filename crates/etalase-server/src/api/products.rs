use axum::{extract::State, Extension, Json};
use serde::Serialize;

use etalase_core::catalog::{normalize, NormalizeOptions, PublicProduct};
use etalase_jsonbin::decode_inventory;

use crate::middleware::RequestId;

use super::{map_upstream_error, ApiError, ApiResponse, AppState, ResponseMeta};

/// Canonical catalog payload: the item list always lives under `items`.
#[derive(Debug, Serialize)]
pub(super) struct CatalogData {
    items: Vec<PublicProduct>,
}

/// `GET /api/v1/products` — the storefront view: in-stock items only,
/// display prices, stock photos, internal fields stripped.
pub(super) async fn list_public_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<CatalogData>>, ApiError> {
    list_with_options(state, req_id, &NormalizeOptions::public_storefront()).await
}

/// `GET /api/v1/admin/products` — the dashboard view: every item including
/// sold/hidden stock (trust and sales stats need them), raw numeric prices,
/// bookkeeping fields kept.
pub(super) async fn list_admin_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<CatalogData>>, ApiError> {
    list_with_options(state, req_id, &NormalizeOptions::admin_dashboard()).await
}

async fn list_with_options(
    state: AppState,
    req_id: RequestId,
    options: &NormalizeOptions,
) -> Result<Json<ApiResponse<CatalogData>>, ApiError> {
    let record = match state.cache.get().await {
        Some(snapshot) => snapshot,
        None => {
            let fetched = state
                .client
                .fetch_latest()
                .await
                .map_err(|e| map_upstream_error(req_id.0.clone(), &e))?;
            state.cache.store(fetched).await
        }
    };

    let items = decode_inventory((*record).clone());
    let products = normalize(items, options);
    tracing::debug!(count = products.len(), "catalog normalized");

    Ok(Json(ApiResponse {
        data: CatalogData { items: products },
        meta: ResponseMeta::new(req_id.0),
    }))
}
