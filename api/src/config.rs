//! Service configuration
//!
//! One configuration object, constructed at startup and injected into
//! the collaborators that need its keys. Nothing reads ambient globals
//! after initialization.

use serde::{Deserialize, Serialize};

/// API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub bind_addr: String,
    /// Geoapify API base URL
    pub geocoder_url: String,
    /// Geoapify API key
    pub geocoder_api_key: String,
    /// Generative endpoint base URL
    pub assistant_url: String,
    /// Generative endpoint API key
    pub assistant_api_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".into(),
            geocoder_url: mates_geo::GEOAPIFY_API.into(),
            geocoder_api_key: String::new(),
            assistant_url: mates_assistant::GENERATIVE_API.into(),
            assistant_api_key: String::new(),
        }
    }
}

impl AppConfig {
    /// Load from file
    pub fn load(path: &str) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Save to file
    pub fn save(&self, path: &str) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }
}
