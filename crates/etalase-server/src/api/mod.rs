mod products;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::cache::SnapshotCache;
use crate::middleware::{request_id, RequestId};

/// Cache directive attached to catalog responses. Ten seconds shared-cache
/// freshness keeps traffic under the upstream store's rate limit.
const CATALOG_CACHE_CONTROL: &str = "s-maxage=10, stale-while-revalidate";

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<etalase_jsonbin::BinClient>,
    pub cache: SnapshotCache,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" => StatusCode::BAD_REQUEST,
            // upstream_error and internal_error both surface as 500; the
            // distinction lives in the server-side log only.
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Converts an upstream fetch/parse failure into a client-safe error.
///
/// The cause is logged server-side; the client message stays generic so
/// credential and infrastructure detail never leaks.
pub(super) fn map_upstream_error(
    request_id: String,
    error: &etalase_jsonbin::JsonbinError,
) -> ApiError {
    tracing::error!(error = %error, "inventory fetch failed");
    ApiError::new(
        request_id,
        "upstream_error",
        "failed to load the product catalog",
    )
}

fn build_cors() -> CorsLayer {
    // Read-only service: the storefront only ever issues GETs.
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

fn catalog_router() -> Router<AppState> {
    // Routes registered with get() only; axum answers 405 for any other
    // method on these paths.
    Router::new()
        .route("/api/v1/products", get(products::list_public_products))
        .route(
            "/api/v1/admin/products",
            get(products::list_admin_products),
        )
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static(CATALOG_CACHE_CONTROL),
        ))
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .merge(catalog_router())
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(Extension(req_id): Extension<RequestId>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiResponse {
            data: HealthData { status: "ok" },
            meta: ResponseMeta::new(req_id.0),
        }),
    )
}
