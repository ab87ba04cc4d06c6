// src/services/wikipedia_client.rs
// DOCUMENTATION: MediaWiki geosearch client
// PURPOSE: Find named points of interest around a coordinate

use crate::config::Config;
use crate::errors::TripError;
use crate::models::Attraction;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

/// Search radius around the resolved location, in meters
pub const SEARCH_RADIUS_METERS: u32 = 10_000;

/// Maximum number of attractions requested
pub const RESULT_LIMIT: u32 = 10;

/// Coordinate -> nearby attractions lookup
#[async_trait]
pub trait LandmarkSearch: Send + Sync {
    /// `lat`/`lon` are passed through exactly as the geocoder returned them
    async fn nearby(&self, lat: &str, lon: &str) -> Result<Vec<Attraction>, TripError>;
}

/// Wikipedia geosearch client
pub struct WikipediaClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct GeosearchResponse {
    #[serde(default)]
    query: Option<GeosearchQuery>,
}

#[derive(Debug, Deserialize)]
struct GeosearchQuery {
    #[serde(default)]
    geosearch: Vec<GeosearchItem>,
}

/// One geosearch hit; missing or null fields become empty values
#[derive(Debug, Deserialize)]
struct GeosearchItem {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    dist: Option<f64>,
}

impl From<GeosearchItem> for Attraction {
    fn from(item: GeosearchItem) -> Self {
        Attraction {
            name: item.title.unwrap_or_default(),
            distance_meters: item.dist.unwrap_or_default(),
        }
    }
}

impl WikipediaClient {
    pub fn new(
        base_url: impl Into<String>,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self, TripError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, TripError> {
        Self::new(
            config.geosearch_url.clone(),
            &config.user_agent,
            config.upstream_timeout(),
        )
    }
}

#[async_trait]
impl LandmarkSearch for WikipediaClient {
    async fn nearby(&self, lat: &str, lon: &str) -> Result<Vec<Attraction>, TripError> {
        let params = [
            ("action", "query".to_string()),
            ("list", "geosearch".to_string()),
            ("gscoord", format!("{}|{}", lat, lon)),
            ("gsradius", SEARCH_RADIUS_METERS.to_string()),
            ("gslimit", RESULT_LIMIT.to_string()),
            ("format", "json".to_string()),
        ];

        let response = self
            .client
            .get(&self.base_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                log::warn!("Geosearch request failed: {}", e);
                TripError::from(e)
            })?;

        let status = response.status();
        log::debug!("Geosearch status: {}", status);

        if status != StatusCode::OK {
            log::warn!("Geosearch returned status {}", status);
            return Err(TripError::UpstreamStatus(status.as_u16()));
        }

        let body: GeosearchResponse = response.json().await.map_err(|e| {
            log::warn!("Failed to parse geosearch response: {}", e);
            TripError::Parse(e.to_string())
        })?;

        // Upstream order (ascending distance) is kept as-is
        let attractions: Vec<Attraction> = body
            .query
            .map(|q| q.geosearch)
            .unwrap_or_default()
            .into_iter()
            .map(Attraction::from)
            .collect();

        log::info!("Geosearch returned {} attractions", attractions.len());
        Ok(attractions)
    }
}
