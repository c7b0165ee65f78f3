//! Directory queries
//!
//! Read-side projections: the request feed, the campaign list, and donor
//! search.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::{CampaignCard, DonorCard, RequestCard};
use crate::ports::inbound::{DirectoryUseCases, SubmissionError};
use crate::ports::outbound::{CampaignRepository, DonorRepository, RequestRepository};

/// Directory application service
pub struct DirectoryService {
    requests: Arc<dyn RequestRepository>,
    campaigns: Arc<dyn CampaignRepository>,
    donors: Arc<dyn DonorRepository>,
}

impl DirectoryService {
    pub fn new(
        requests: Arc<dyn RequestRepository>,
        campaigns: Arc<dyn CampaignRepository>,
        donors: Arc<dyn DonorRepository>,
    ) -> Self {
        Self {
            requests,
            campaigns,
            donors,
        }
    }
}

#[async_trait]
impl DirectoryUseCases for DirectoryService {
    async fn list_requests(&self) -> Result<Vec<RequestCard>, SubmissionError> {
        let requests = self.requests.list().await?;
        Ok(requests.iter().map(RequestCard::from_record).collect())
    }

    async fn find_request(&self, id: u64) -> Result<Option<RequestCard>, SubmissionError> {
        let request = self.requests.find_by_id(id).await?;
        Ok(request.as_ref().map(RequestCard::from_record))
    }

    async fn list_campaigns(&self) -> Result<Vec<CampaignCard>, SubmissionError> {
        let campaigns = self.campaigns.list().await?;
        Ok(campaigns.iter().map(CampaignCard::from_record).collect())
    }

    async fn find_campaign(&self, id: u64) -> Result<Option<CampaignCard>, SubmissionError> {
        let campaign = self.campaigns.find_by_id(id).await?;
        Ok(campaign.as_ref().map(CampaignCard::from_record))
    }

    async fn search_donors(&self, query: &str) -> Result<Vec<DonorCard>, SubmissionError> {
        let donors = self.donors.list().await?;
        let query = query.trim();
        Ok(donors
            .iter()
            .filter(|d| query.is_empty() || d.matches(query))
            .map(DonorCard::from_record)
            .collect())
    }
}
