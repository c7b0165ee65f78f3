//! Registration and sign-in endpoints

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use std::sync::Arc;

use mates_core::{DonorRegistration, SubmissionUseCases};

use crate::models::{
    ApiResponse, LoginBody, RegisterBody, RegisteredResponse, SessionResponse,
};
use crate::routes::requests::{error_response, point_from};
use crate::ApiState;

pub fn router() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a donor account and profile
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = RegisterBody,
    responses(
        (status = 201, description = "Donor registered, verification mail sent", body = ApiResponse<RegisteredResponse>),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Email already in use")
    ),
    tag = "auth"
)]
pub async fn register(
    State(state): State<Arc<ApiState>>,
    Json(body): Json<RegisterBody>,
) -> Result<(StatusCode, Json<ApiResponse<RegisteredResponse>>), (StatusCode, Json<ApiResponse<()>>)>
{
    let registration = DonorRegistration {
        email: body.email,
        password: body.password,
        full_name: body.full_name,
        phone_number: body.phone_number,
        blood_type: body.blood_type,
        location: body.location,
        hospital: body.hospital,
        date_of_birth: body.date_of_birth,
        last_donation_date: body.last_donation_date,
        coordinates: point_from(body.latitude, body.longitude),
        declaration_accepted: body.declaration_accepted,
    };

    let profile = state
        .submissions
        .register_donor(registration)
        .await
        .map_err(error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(RegisteredResponse {
            id: profile.id,
            uid: profile.uid,
            email: profile.email.as_str().to_string(),
        })),
    ))
}

/// Sign in a registered donor
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginBody,
    responses(
        (status = 200, description = "Session opened", body = ApiResponse<SessionResponse>),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<Arc<ApiState>>,
    Json(body): Json<LoginBody>,
) -> Result<Json<ApiResponse<SessionResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let session = state
        .submissions
        .sign_in(&body.email, &body.password)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(SessionResponse {
        uid: session.uid,
        token: session.token,
    })))
}
