// src/services/nominatim_client.rs
// DOCUMENTATION: Nominatim geocoding client
// PURPOSE: Resolve a free-text place name to coordinates and country

use crate::config::Config;
use crate::errors::TripError;
use crate::models::GeoResult;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

/// Place name -> location lookup
/// DOCUMENTATION: Implementations make at most one outbound call and never
/// retry. Any failure is reported as an error; callers decide how to degrade.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn resolve(&self, place: &str) -> Result<GeoResult, TripError>;
}

/// Nominatim search API client
pub struct NominatimClient {
    /// HTTP client carrying timeout and user agent
    client: Client,
    /// Search endpoint
    base_url: String,
}

/// Single search hit from Nominatim
/// DOCUMENTATION: Nominatim returns coordinates as strings
#[derive(Debug, Deserialize)]
pub struct NominatimPlace {
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub display_name: Option<String>,
    #[serde(default)]
    pub address: Option<NominatimAddress>,
}

/// Address details (requested with addressdetails=1)
#[derive(Debug, Deserialize)]
pub struct NominatimAddress {
    pub country: Option<String>,
}

impl NominatimClient {
    /// Create new Nominatim client
    /// DOCUMENTATION: Every request carries the given user agent and timeout
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
            config.geocode_url.clone(),
            &config.user_agent,
            config.upstream_timeout(),
        )
    }

    /// Turn the best search hit into a GeoResult
    fn to_geo_result(place: &str, mut hits: Vec<NominatimPlace>) -> Result<GeoResult, TripError> {
        if hits.is_empty() {
            return Err(TripError::NoMatch(place.to_string()));
        }
        let best = hits.swap_remove(0);

        let geo = GeoResult {
            lat: best.lat,
            lon: best.lon,
            country: best.address.and_then(|a| a.country),
            display_name: best.display_name,
        };

        if !geo.is_resolved() {
            return Err(TripError::MissingCoordinates);
        }

        Ok(geo)
    }
}

#[async_trait]
impl Geocoder for NominatimClient {
    async fn resolve(&self, place: &str) -> Result<GeoResult, TripError> {
        let params = [
            ("q", place),
            ("format", "json"),
            ("limit", "1"),
            ("addressdetails", "1"),
        ];

        log::debug!("Nominatim search: q={}", place);

        let response = self
            .client
            .get(&self.base_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                log::warn!("Geocoding request failed: {}", e);
                TripError::from(e)
            })?;

        let status = response.status();
        log::debug!("Geocoding status: {}", status);

        if status != StatusCode::OK {
            log::warn!("Geocoding returned status {} for {}", status, place);
            return Err(TripError::UpstreamStatus(status.as_u16()));
        }

        let hits: Vec<NominatimPlace> = response.json().await.map_err(|e| {
            log::warn!("Failed to parse geocoding response: {}", e);
            TripError::Parse(e.to_string())
        })?;

        let geo = Self::to_geo_result(place, hits)?;
        log::info!(
            "Geocoded {} to lat={:?} lon={:?} country={:?}",
            place,
            geo.lat,
            geo.lon,
            geo.country
        );
        Ok(geo)
    }
}
