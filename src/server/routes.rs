//! HTTP routes for wallet and transaction views

use axum::{extract::{rejection::{PathRejection, QueryRejection}, Path, Query, State}, response::IntoResponse, routing::get, Json, Router};
use chrono::{DateTime, SecondsFormat, Utc};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::response::{ApiError, ApiResult, ListResponse};
use crate::core::paths;
use crate::core::{Transaction, Wallet};
use crate::query::WalletQueries;

#[derive(Clone)]
pub struct AppState { pub queries: WalletQueries, pub app_name: String, pub started_at: DateTime<Utc> }

impl AppState {
    pub fn new(queries: WalletQueries, app_name: impl Into<String>) -> Self {
        Self { queries, app_name: app_name.into(), started_at: Utc::now() }
    }
}

/// Raw query pairs. A repeated key reads as its values joined with `,`, so
/// `?chainId=1&chainId=137` filters on `"1,137"` and `?limit=5&limit=7`
/// parses as 5. Reading a parameter never fails.
#[derive(Debug, Default)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new(pairs: Vec<(String, String)>) -> Self { Self(pairs) }

    pub fn get(&self, key: &str) -> Option<String> {
        let values: Vec<&str> = self.0.iter().filter(|(k, _)| k == key).map(|(_, v)| v.as_str()).collect();
        (!values.is_empty()).then(|| values.join(","))
    }

    fn extract(query: Result<Query<Vec<(String, String)>>, QueryRejection>) -> Self {
        match query {
            Ok(Query(pairs)) => Self(pairs),
            Err(e) => {
                tracing::debug!(error = %e.body_text(), "unreadable query string, ignoring");
                Self::default()
            }
        }
    }
}

pub fn create_router(queries: WalletQueries) -> Router { create_router_with_name(queries, "wallet-api") }

pub fn create_router_with_name(queries: WalletQueries, app_name: &str) -> Router {
    Router::new()
        .route(paths::service::HEALTH, get(health).fallback(method_not_allowed))
        .nest(paths::wallets::MOUNT, wallet_routes())
        .fallback(route_not_found)
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(queries, app_name))
}

/// Wallet endpoints without a prefix, for mounting elsewhere.
pub fn wallet_routes() -> Router<AppState> {
    Router::new()
        .route(paths::wallets::LIST, get(list_wallets).fallback(method_not_allowed))
        .route(paths::wallets::TRANSACTIONS, get(list_transactions).fallback(method_not_allowed))
}

async fn health(State(s): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": s.app_name,
        "started_at": s.started_at.to_rfc3339_opts(SecondsFormat::Secs, true),
    }))
}

async fn list_wallets(
    State(s): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<ListResponse<Wallet>> {
    let q = QueryParams::extract(query);
    let (address, chain_id) = (q.get("address"), q.get("chainId"));
    let wallets = s.queries.list_wallets(address.as_deref(), chain_id.as_deref())?;
    Ok(ListResponse::new(wallets))
}

async fn list_transactions(
    State(s): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<ListResponse<Transaction>> {
    let Path(address) = path.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let q = QueryParams::extract(query);
    let (chain_id, limit) = (q.get("chainId"), q.get("limit"));
    let txs = s.queries.list_transactions_by_wallet(&address, chain_id.as_deref(), limit.as_deref())?;
    Ok(ListResponse::new(txs))
}

async fn route_not_found() -> ApiError { ApiError::NotFound("Route not found".into()) }

async fn method_not_allowed() -> ApiError { ApiError::MethodNotAllowed }
