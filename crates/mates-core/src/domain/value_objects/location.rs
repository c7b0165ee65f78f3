//! Location Value Objects
//!
//! Canonical location representation: the formatted address string, with
//! the captured coordinate pair retained alongside when known. The
//! geocode breakdown is ephemeral and only its formatted concatenation is
//! persisted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic coordinate pair
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a new coordinate pair
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Address breakdown returned by reverse geocoding
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub county: String,
    pub city: String,
    pub state_district: String,
    pub state: String,
    pub postcode: String,
}

impl GeocodeResult {
    /// The concatenated form the submission flows store
    pub fn formatted(&self) -> String {
        format!(
            "{}, {}, {}, {}, {}",
            self.county, self.city, self.state_district, self.state, self.postcode
        )
    }
}

/// A record's location: formatted address plus optional coordinates
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Human-readable address, the canonical representation
    pub formatted: String,
    /// Coordinates, kept when the location was captured from a device fix
    pub point: Option<GeoPoint>,
}

impl Location {
    /// Location entered by hand, no coordinates known
    pub fn manual(formatted: impl Into<String>) -> Self {
        Self {
            formatted: formatted.into(),
            point: None,
        }
    }

    /// Location derived from a device fix and its geocode breakdown
    pub fn from_geocode(point: GeoPoint, geocode: &GeocodeResult) -> Self {
        Self {
            formatted: geocode.formatted(),
            point: Some(point),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_geocode() -> GeocodeResult {
        GeocodeResult {
            county: "Kanchipuram".into(),
            city: "Chennai".into(),
            state_district: "Chennai District".into(),
            state: "Tamil Nadu".into(),
            postcode: "600044".into(),
        }
    }

    #[test]
    fn test_formatted_concatenation() {
        assert_eq!(
            sample_geocode().formatted(),
            "Kanchipuram, Chennai, Chennai District, Tamil Nadu, 600044"
        );
    }

    #[test]
    fn test_location_from_geocode_keeps_point() {
        let point = GeoPoint::new(12.92, 80.1);
        let location = Location::from_geocode(point, &sample_geocode());
        assert_eq!(location.point, Some(point));
        assert!(location.formatted.starts_with("Kanchipuram"));
    }

    #[test]
    fn test_manual_location_has_no_point() {
        let location = Location::manual("Chennai");
        assert_eq!(location.point, None);
        assert_eq!(location.to_string(), "Chennai");
    }
}
