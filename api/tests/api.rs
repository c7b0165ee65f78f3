//! End-to-end API tests against the in-memory wiring

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{json, Value};

use bloodmates_api::notify::LocalNotifier;
use bloodmates_api::{build_router, ApiState};
use mates_assistant::Assistant;
use mates_core::{
    DirectoryService, DonationRequest, InMemoryAuth, InMemoryCampaignRepository,
    InMemoryDonorRepository, InMemoryRequestRepository, PersistenceError, RequestRepository,
    SequenceAllocator, SubmissionService,
};
use mates_geo::GeoapifyClient;

/// Fresh server over empty stores. External endpoints point at an
/// unroutable address so any accidental call fails fast.
fn server() -> TestServer {
    server_with_requests(Arc::new(InMemoryRequestRepository::new()))
}

fn server_with_requests(requests: Arc<dyn RequestRepository>) -> TestServer {
    let campaigns = Arc::new(InMemoryCampaignRepository::new());
    let donors = Arc::new(InMemoryDonorRepository::new());

    let submissions = SubmissionService::new(
        requests.clone(),
        campaigns.clone(),
        donors.clone(),
        Arc::new(GeoapifyClient::with_base_url("http://127.0.0.1:1", "test")),
        Arc::new(InMemoryAuth::new()),
        Arc::new(LocalNotifier::new()),
        Arc::new(SequenceAllocator::new()),
    );
    let directory = DirectoryService::new(requests, campaigns, donors);
    let assistant = Assistant::with_base_url("http://127.0.0.1:1", "test");

    let state = ApiState {
        submissions: Arc::new(submissions),
        directory: Arc::new(directory),
        assistant,
    };
    TestServer::new(build_router(state)).unwrap()
}

fn request_body() -> Value {
    json!({
        "full_name": "Jane Doe",
        "city": "Chennai",
        "hospital": "City Hospital",
        "blood_type": "B negative",
        "mobile": "9876543210",
        "note": "urgent"
    })
}

#[tokio::test]
async fn test_health() {
    let server = server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "healthy");
}

#[tokio::test]
async fn test_submit_request_then_feed() {
    let server = server();

    let created = server.post("/api/v1/requests").json(&request_body()).await;
    created.assert_status(axum::http::StatusCode::CREATED);
    let body = created.json::<Value>();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], 1);

    let feed = server.get("/api/v1/requests").await;
    feed.assert_status_ok();
    let body = feed.json::<Value>();
    let cards = body["data"].as_array().unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0]["name"], "Jane Doe");
    assert_eq!(cards[0]["location"], "City Hospital");
    assert_eq!(cards[0]["icon"]["family"], "fontisto");
    assert_eq!(cards[0]["icon"]["name"], "blood-drop");

    let one = server.get("/api/v1/requests/1").await;
    one.assert_status_ok();
    assert_eq!(one.json::<Value>()["data"]["name"], "Jane Doe");
}

#[tokio::test]
async fn test_invalid_mobile_rejected() {
    let server = server();
    let mut body = request_body();
    body["mobile"] = json!("98a6543210");

    let response = server.post("/api/v1/requests").json(&body).await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "validation_error");

    // Nothing was written
    let feed = server.get("/api/v1/requests").await;
    assert!(feed.json::<Value>()["data"].as_array().unwrap().is_empty());
}

/// Request store whose writes are always rejected
struct RejectingRequestRepository;

#[async_trait::async_trait]
impl RequestRepository for RejectingRequestRepository {
    async fn find_by_id(&self, _id: u64) -> Result<Option<DonationRequest>, PersistenceError> {
        Ok(None)
    }

    async fn list(&self) -> Result<Vec<DonationRequest>, PersistenceError> {
        Ok(Vec::new())
    }

    async fn save(&self, _request: &DonationRequest) -> Result<(), PersistenceError> {
        Err(PersistenceError::WriteFailed("store rejected the document".into()))
    }

    async fn count(&self) -> Result<u64, PersistenceError> {
        Ok(0)
    }
}

#[tokio::test]
async fn test_rejected_write_maps_to_500() {
    let server = server_with_requests(Arc::new(RejectingRequestRepository));

    let response = server.post("/api/v1/requests").json(&request_body()).await;
    response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<Value>();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "persistence_error");
}

#[tokio::test]
async fn test_request_not_found() {
    let server = server();
    let response = server.get("/api/v1/requests/42").await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_schedule_campaign_then_list() {
    let server = server();

    let created = server
        .post("/api/v1/campaigns")
        .json(&json!({
            "organizer_name": "Red Crescent",
            "organization_name": "Crescent Trust",
            "address": "12 Park Road",
            "donation_date": "2026-09-15",
            "phone_number": "9123456780",
            "note": "annual drive"
        }))
        .await;
    created.assert_status(axum::http::StatusCode::CREATED);
    assert_eq!(created.json::<Value>()["data"]["id"], 1);

    let list = server.get("/api/v1/campaigns").await;
    let body = list.json::<Value>();
    let cards = body["data"].as_array().unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0]["organizer"], "Red Crescent");
    assert_eq!(cards[0]["icon"]["family"], "octicons");
}

fn register_body(email: &str, name: &str, blood_type: &str) -> Value {
    json!({
        "email": email,
        "password": "secret1",
        "full_name": name,
        "phone_number": "9876543210",
        "blood_type": blood_type,
        "location": "Chennai",
        "hospital": "City Hospital",
        "date_of_birth": "1994-02-11",
        "declaration_accepted": true
    })
}

#[tokio::test]
async fn test_register_then_login() {
    let server = server();

    let registered = server
        .post("/api/v1/auth/register")
        .json(&register_body("jane@example.com", "Jane Doe", "B negative"))
        .await;
    registered.assert_status(axum::http::StatusCode::CREATED);
    let body = registered.json::<Value>();
    assert_eq!(body["data"]["email"], "jane@example.com");
    assert!(!body["data"]["uid"].as_str().unwrap().is_empty());

    let session = server
        .post("/api/v1/auth/login")
        .json(&json!({ "email": "jane@example.com", "password": "secret1" }))
        .await;
    session.assert_status_ok();
    assert_eq!(
        session.json::<Value>()["data"]["uid"],
        body["data"]["uid"]
    );
}

#[tokio::test]
async fn test_declaration_required() {
    let server = server();
    let mut body = register_body("jane@example.com", "Jane Doe", "B negative");
    body["declaration_accepted"] = json!(false);

    let response = server.post("/api/v1/auth/register").json(&body).await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"]["code"],
        "validation_error"
    );
}

#[tokio::test]
async fn test_wrong_password_is_unauthorized() {
    let server = server();
    server
        .post("/api/v1/auth/register")
        .json(&register_body("jane@example.com", "Jane Doe", "B negative"))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let response = server
        .post("/api/v1/auth/login")
        .json(&json!({ "email": "jane@example.com", "password": "wrong" }))
        .await;
    response.assert_status(axum::http::StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>()["error"]["code"], "auth_error");
}

#[tokio::test]
async fn test_donor_search_filters_by_blood_type() {
    let server = server();
    server
        .post("/api/v1/auth/register")
        .json(&register_body("jane@example.com", "Jane Doe", "B negative"))
        .await
        .assert_status(axum::http::StatusCode::CREATED);
    server
        .post("/api/v1/auth/register")
        .json(&register_body("ravi@example.com", "Ravi Kumar", "O positive"))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let matched = server.get("/api/v1/donors").add_query_param("query", "o positive").await;
    let body = matched.json::<Value>();
    let donors = body["data"].as_array().unwrap();
    assert_eq!(donors.len(), 1);
    assert_eq!(donors[0]["name"], "Ravi Kumar");

    // Empty query lists everyone
    let all = server.get("/api/v1/donors").await;
    assert_eq!(all.json::<Value>()["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_assistant_answers_off_topic_locally() {
    let server = server();
    let response = server
        .post("/api/v1/assistant/chat")
        .json(&json!({
            "transcript": [{ "role": "user", "text": "hello there" }]
        }))
        .await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["data"]["role"], "model");
    assert_eq!(body["data"]["text"], mates_assistant::DEFAULT_REPLY);
}
