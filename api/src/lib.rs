//! BloodMates REST API
//!
//! HTTP surface over the donation service: request and campaign
//! submission, donor registration and sign-in, donor search, and the
//! health assistant.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        REST API                              │
//! │   OpenAPI 3 | Swagger UI | CORS                              │
//! └───────┬──────────────────────┬──────────────────┬────────────┘
//!         │                      │                  │
//! ┌───────▼────────┐   ┌─────────▼───────┐  ┌───────▼────────┐
//! │  mates-core    │   │   mates-geo     │  │ mates-assistant│
//! │  submission &  │   │  reverse        │  │ keyword-gated  │
//! │  directory     │   │  geocoding      │  │ chat           │
//! └────────────────┘   └─────────────────┘  └────────────────┘
//! ```

pub mod config;
pub mod models;
pub mod notify;
pub mod routes;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use mates_assistant::Assistant;
use mates_core::{DirectoryUseCases, SubmissionUseCases};

pub use models::*;

/// API state: the application services every route dispatches into
pub struct ApiState {
    pub submissions: Arc<dyn SubmissionUseCases>,
    pub directory: Arc<dyn DirectoryUseCases>,
    pub assistant: Assistant,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "BloodMates API",
        version = "0.1.0",
        description = "Blood donation coordination service",
        license(name = "Apache-2.0")
    ),
    paths(
        routes::health::health_check,
        routes::requests::list_requests,
        routes::requests::get_request,
        routes::requests::submit_request,
        routes::campaigns::list_campaigns,
        routes::campaigns::get_campaign,
        routes::campaigns::schedule_campaign,
        routes::donors::search_donors,
        routes::auth::register,
        routes::auth::login,
        routes::assistant::chat,
    ),
    components(
        schemas(
            ErrorResponse,
            IconFamily, IconRef,
            RequestView, SubmitRequestBody, CreatedResponse,
            CampaignView, ScheduleCampaignBody,
            DonorView,
            RegisterBody, RegisteredResponse, LoginBody, SessionResponse,
            ChatTurnBody, ChatBody, ChatReply,
            routes::health::HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "requests", description = "Donation request feed and submission"),
        (name = "campaigns", description = "Campaign list and scheduling"),
        (name = "donors", description = "Donor search"),
        (name = "auth", description = "Registration and sign-in"),
        (name = "assistant", description = "Health assistant chat")
    )
)]
pub struct ApiDoc;

/// Build the API router
pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(routes::health::health_check))
        .nest("/api/v1", api_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

fn api_routes() -> Router<Arc<ApiState>> {
    Router::new()
        .nest("/requests", routes::requests::router())
        .nest("/campaigns", routes::campaigns::router())
        .nest("/donors", routes::donors::router())
        .nest("/auth", routes::auth::router())
        .nest("/assistant", routes::assistant::router())
}
