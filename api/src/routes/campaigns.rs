//! Campaign endpoints

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;

use mates_core::{CampaignSubmission, DirectoryUseCases, SubmissionUseCases};

use crate::models::{ApiResponse, CampaignView, CreatedResponse, ScheduleCampaignBody};
use crate::routes::requests::error_response;
use crate::ApiState;

pub fn router() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/", get(list_campaigns).post(schedule_campaign))
        .route("/:id", get(get_campaign))
}

/// List donation campaigns
#[utoipa::path(
    get,
    path = "/api/v1/campaigns",
    responses(
        (status = 200, description = "Campaign list", body = ApiResponse<Vec<CampaignView>>)
    ),
    tag = "campaigns"
)]
pub async fn list_campaigns(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<ApiResponse<Vec<CampaignView>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let cards = state
        .directory
        .list_campaigns()
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(
        cards.into_iter().map(CampaignView::from).collect(),
    )))
}

/// Get one campaign by id
#[utoipa::path(
    get,
    path = "/api/v1/campaigns/{id}",
    params(("id" = u64, Path, description = "Campaign id")),
    responses(
        (status = 200, description = "Campaign details", body = ApiResponse<CampaignView>),
        (status = 404, description = "Campaign not found")
    ),
    tag = "campaigns"
)]
pub async fn get_campaign(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<u64>,
) -> Result<Json<ApiResponse<CampaignView>>, (StatusCode, Json<ApiResponse<()>>)> {
    state
        .directory
        .find_campaign(id)
        .await
        .map_err(error_response)?
        .map(|c| Json(ApiResponse::success(CampaignView::from(c))))
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error("not_found", "campaign not found")),
            )
        })
}

/// Schedule a donation campaign
#[utoipa::path(
    post,
    path = "/api/v1/campaigns",
    request_body = ScheduleCampaignBody,
    responses(
        (status = 201, description = "Campaign scheduled", body = ApiResponse<CreatedResponse>),
        (status = 400, description = "Validation failed")
    ),
    tag = "campaigns"
)]
pub async fn schedule_campaign(
    State(state): State<Arc<ApiState>>,
    Json(body): Json<ScheduleCampaignBody>,
) -> Result<(StatusCode, Json<ApiResponse<CreatedResponse>>), (StatusCode, Json<ApiResponse<()>>)>
{
    let submission = CampaignSubmission {
        organizer_name: body.organizer_name,
        organization_name: body.organization_name,
        address: body.address,
        donation_date: body.donation_date,
        phone_number: body.phone_number,
        note: body.note,
    };

    let campaign = state
        .submissions
        .schedule_campaign(submission)
        .await
        .map_err(error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(CreatedResponse { id: campaign.id })),
    ))
}
