//! HTTP server: axum router over the query layer

mod response;
mod routes;

pub use response::{ApiError, ApiResult, Envelope, ErrorResponse, ListResponse};
pub use routes::{create_router, create_router_with_name, wallet_routes, AppState, QueryParams};
