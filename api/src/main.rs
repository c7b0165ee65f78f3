//! BloodMates API server entry point

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bloodmates_api::config::AppConfig;
use bloodmates_api::notify::LocalNotifier;
use bloodmates_api::{build_router, ApiState};
use mates_assistant::Assistant;
use mates_core::{
    CampaignRepository, Collection, DirectoryService, DonorRepository, InMemoryAuth,
    InMemoryCampaignRepository, InMemoryDonorRepository, InMemoryRequestRepository,
    RequestRepository, SequenceAllocator, SubmissionService,
};
use mates_geo::GeoapifyClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("BloodMates API v{}", env!("CARGO_PKG_VERSION"));

    let config_path =
        std::env::var("CONFIG_PATH").unwrap_or_else(|_| "/etc/bloodmates/api.json".into());

    let config = AppConfig::load(&config_path).unwrap_or_else(|_| {
        tracing::warn!("Config not found, using defaults");
        AppConfig::default()
    });

    let requests = Arc::new(InMemoryRequestRepository::new());
    let campaigns = Arc::new(InMemoryCampaignRepository::new());
    let donors = Arc::new(InMemoryDonorRepository::new());
    // Counters continue from whatever the collections already hold
    let allocator = Arc::new(SequenceAllocator::new());
    allocator.seed(Collection::Users, donors.count().await?);
    allocator.seed(Collection::DonationRequests, requests.count().await?);
    allocator.seed(Collection::Campaigns, campaigns.count().await?);

    let auth = Arc::new(InMemoryAuth::new());
    let notifier = Arc::new(LocalNotifier::new());
    let geocoder = Arc::new(GeoapifyClient::with_base_url(
        config.geocoder_url.clone(),
        config.geocoder_api_key.clone(),
    ));

    let submissions = SubmissionService::new(
        requests.clone(),
        campaigns.clone(),
        donors.clone(),
        geocoder,
        auth,
        notifier,
        allocator,
    );
    let directory = DirectoryService::new(requests, campaigns, donors);
    let assistant = Assistant::with_base_url(
        config.assistant_url.clone(),
        config.assistant_api_key.clone(),
    );

    let state = ApiState {
        submissions: Arc::new(submissions),
        directory: Arc::new(directory),
        assistant,
    };

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
