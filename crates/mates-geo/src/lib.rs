//! Geoapify reverse-geocoding client
//!
//! Turns a coordinate pair into an address breakdown via the Geoapify
//! reverse endpoint. One outbound lookup per miss; results are held in a
//! short-lived cache keyed by coordinates rounded to four decimal
//! places, so repeated lookups for the same spot skip the round trip.
//! No retries.

use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use mates_core::ports::outbound::{LookupError, ReverseGeocoder};
use mates_core::{GeoPoint, GeocodeResult};

/// Default Geoapify API base URL
pub const GEOAPIFY_API: &str = "https://api.geoapify.com";

/// How long a cached breakdown stays fresh
const CACHE_TTL: Duration = Duration::from_secs(300);
const CACHE_CAPACITY: u64 = 1_000;

/// Reverse-geocoding response wrapper
#[derive(Debug, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    results: Vec<ReverseEntry>,
}

/// One result entry; only the address breakdown fields are read
#[derive(Debug, Clone, Deserialize)]
struct ReverseEntry {
    #[serde(default)]
    county: String,
    #[serde(default)]
    city: String,
    #[serde(default)]
    state_district: String,
    #[serde(default)]
    state: String,
    #[serde(default)]
    postcode: String,
}

impl From<ReverseEntry> for GeocodeResult {
    fn from(entry: ReverseEntry) -> Self {
        Self {
            county: entry.county,
            city: entry.city,
            state_district: entry.state_district,
            state: entry.state,
            postcode: entry.postcode,
        }
    }
}

/// Geoapify client
pub struct GeoapifyClient {
    client: Client,
    base_url: String,
    api_key: String,
    cache: Cache<(i64, i64), GeocodeResult>,
}

impl GeoapifyClient {
    /// Create a client against the default endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(GEOAPIFY_API, api_key)
    }

    /// Create a client against a custom endpoint (tests, proxies)
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            cache: Cache::builder()
                .max_capacity(CACHE_CAPACITY)
                .time_to_live(CACHE_TTL)
                .build(),
        }
    }

    /// Cache key: coordinates rounded to 4 decimal places (~11 m)
    fn cache_key(point: GeoPoint) -> (i64, i64) {
        (
            (point.latitude * 10_000.0).round() as i64,
            (point.longitude * 10_000.0).round() as i64,
        )
    }

    async fn fetch(&self, point: GeoPoint) -> Result<GeocodeResult, LookupError> {
        let url = format!(
            "{}/v1/geocode/reverse?lat={}&lon={}&format=json&apiKey={}",
            self.base_url, point.latitude, point.longitude, self.api_key
        );
        debug!(lat = point.latitude, lon = point.longitude, "reverse geocode lookup");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;
        parse_reverse_response(&body)
    }
}

/// Decode a reverse-geocoding body into the first result's breakdown
fn parse_reverse_response(body: &str) -> Result<GeocodeResult, LookupError> {
    let response: ReverseResponse =
        serde_json::from_str(body).map_err(|e| LookupError::Transport(e.to_string()))?;
    response
        .results
        .into_iter()
        .next()
        .map(GeocodeResult::from)
        .ok_or(LookupError::NoResults)
}

#[async_trait]
impl ReverseGeocoder for GeoapifyClient {
    async fn reverse_geocode(&self, point: GeoPoint) -> Result<GeocodeResult, LookupError> {
        let key = Self::cache_key(point);
        if let Some(hit) = self.cache.get(&key).await {
            debug!(?key, "reverse geocode cache hit");
            return Ok(hit);
        }

        let result = self.fetch(point).await?;
        self.cache.insert(key, result.clone()).await;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_BODY: &str = r#"{
        "results": [{
            "county": "Kanchipuram",
            "city": "Chennai",
            "state_district": "Chennai District",
            "state": "Tamil Nadu",
            "postcode": "600044",
            "country": "India",
            "lat": 12.92,
            "lon": 80.1
        }]
    }"#;

    #[test]
    fn test_parse_breakdown() {
        let result = parse_reverse_response(SAMPLE_BODY).unwrap();
        assert_eq!(result.city, "Chennai");
        assert_eq!(result.postcode, "600044");
        assert_eq!(
            result.formatted(),
            "Kanchipuram, Chennai, Chennai District, Tamil Nadu, 600044"
        );
    }

    #[test]
    fn test_empty_results_is_lookup_error() {
        let err = parse_reverse_response(r#"{"results": []}"#).unwrap_err();
        assert!(matches!(err, LookupError::NoResults));

        let err = parse_reverse_response("{}").unwrap_err();
        assert!(matches!(err, LookupError::NoResults));
    }

    #[test]
    fn test_malformed_body_is_transport_error() {
        let err = parse_reverse_response("not json").unwrap_err();
        assert!(matches!(err, LookupError::Transport(_)));
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let result =
            parse_reverse_response(r#"{"results": [{"city": "Chennai"}]}"#).unwrap();
        assert_eq!(result.city, "Chennai");
        assert_eq!(result.county, "");
    }

    #[test]
    fn test_cache_key_rounds_to_four_decimals() {
        let a = GeoapifyClient::cache_key(GeoPoint::new(12.92004, 80.10001));
        let b = GeoapifyClient::cache_key(GeoPoint::new(12.92, 80.1));
        assert_eq!(a, b);

        let c = GeoapifyClient::cache_key(GeoPoint::new(12.9215, 80.1));
        assert_ne!(a, c);
    }
}
