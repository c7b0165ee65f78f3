//! Donor search endpoints

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;

use mates_core::DirectoryUseCases;

use crate::models::{ApiResponse, DonorView};
use crate::routes::requests::error_response;
use crate::ApiState;

pub fn router() -> Router<Arc<ApiState>> {
    Router::new().route("/", get(search_donors))
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Matched case-insensitively against name, blood type, and location
    #[serde(default)]
    pub query: String,
}

/// Search donors; an empty query lists everyone
#[utoipa::path(
    get,
    path = "/api/v1/donors",
    params(("query" = Option<String>, Query, description = "Search text")),
    responses(
        (status = 200, description = "Matching donors", body = ApiResponse<Vec<DonorView>>)
    ),
    tag = "donors"
)]
pub async fn search_donors(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ApiResponse<Vec<DonorView>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let cards = state
        .directory
        .search_donors(&params.query)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(
        cards.into_iter().map(DonorView::from).collect(),
    )))
}
