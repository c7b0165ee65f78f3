//! Donation request endpoints

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;

use mates_core::{DirectoryUseCases, GeoPoint, RequestSubmission, SubmissionUseCases};

use crate::models::{classify, ApiResponse, CreatedResponse, RequestView, SubmitRequestBody};
use crate::ApiState;

pub fn router() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/", get(list_requests).post(submit_request))
        .route("/:id", get(get_request))
}

/// List donation requests, newest first
#[utoipa::path(
    get,
    path = "/api/v1/requests",
    responses(
        (status = 200, description = "Request feed", body = ApiResponse<Vec<RequestView>>)
    ),
    tag = "requests"
)]
pub async fn list_requests(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<ApiResponse<Vec<RequestView>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let cards = state
        .directory
        .list_requests()
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(
        cards.into_iter().map(RequestView::from).collect(),
    )))
}

/// Get one donation request by id
#[utoipa::path(
    get,
    path = "/api/v1/requests/{id}",
    params(("id" = u64, Path, description = "Request id")),
    responses(
        (status = 200, description = "Request details", body = ApiResponse<RequestView>),
        (status = 404, description = "Request not found")
    ),
    tag = "requests"
)]
pub async fn get_request(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<u64>,
) -> Result<Json<ApiResponse<RequestView>>, (StatusCode, Json<ApiResponse<()>>)> {
    state
        .directory
        .find_request(id)
        .await
        .map_err(error_response)?
        .map(|c| Json(ApiResponse::success(RequestView::from(c))))
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error("not_found", "request not found")),
            )
        })
}

/// Submit a donation request
#[utoipa::path(
    post,
    path = "/api/v1/requests",
    request_body = SubmitRequestBody,
    responses(
        (status = 201, description = "Request submitted", body = ApiResponse<CreatedResponse>),
        (status = 400, description = "Validation failed"),
        (status = 502, description = "Location lookup failed")
    ),
    tag = "requests"
)]
pub async fn submit_request(
    State(state): State<Arc<ApiState>>,
    Json(body): Json<SubmitRequestBody>,
) -> Result<(StatusCode, Json<ApiResponse<CreatedResponse>>), (StatusCode, Json<ApiResponse<()>>)>
{
    let submission = RequestSubmission {
        full_name: body.full_name,
        city: body.city,
        hospital: body.hospital,
        blood_type: body.blood_type,
        mobile: body.mobile,
        note: body.note,
        coordinates: point_from(body.latitude, body.longitude),
    };

    let request = state
        .submissions
        .submit_request(submission)
        .await
        .map_err(error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(CreatedResponse { id: request.id })),
    ))
}

pub(crate) fn point_from(latitude: Option<f64>, longitude: Option<f64>) -> Option<GeoPoint> {
    match (latitude, longitude) {
        (Some(lat), Some(lon)) => Some(GeoPoint::new(lat, lon)),
        _ => None,
    }
}

pub(crate) fn error_response(
    error: mates_core::SubmissionError,
) -> (StatusCode, Json<ApiResponse<()>>) {
    let (status, code) = classify(&error);
    (
        status,
        Json(ApiResponse::error(code, &error.to_string())),
    )
}
