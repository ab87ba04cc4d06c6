// src/services/trip_service.rs
// DOCUMENTATION: Business logic for trip searches
// PURPOSE: Sequence geocoding, landmark search and the derived insights

use crate::config::Config;
use crate::errors::TripError;
use crate::models::{PlaceLookup, PlaceQuery, SearchResponse};
use crate::services::{
    ClimateClassifier, CostEstimator, Geocoder, LandmarkSearch, NominatimClient, VisitPlanner,
    WikipediaClient,
};
use std::sync::Arc;

/// Stateless orchestrator shared by all requests
#[derive(Clone)]
pub struct TripService {
    geocoder: Arc<dyn Geocoder>,
    landmarks: Arc<dyn LandmarkSearch>,
}

impl TripService {
    pub fn new(geocoder: Arc<dyn Geocoder>, landmarks: Arc<dyn LandmarkSearch>) -> Self {
        Self {
            geocoder,
            landmarks,
        }
    }

    /// Build the service with the Nominatim and Wikipedia clients
    pub fn from_config(config: &Config) -> Result<Self, TripError> {
        Ok(Self::new(
            Arc::new(NominatimClient::from_config(config)?),
            Arc::new(WikipediaClient::from_config(config)?),
        ))
    }

    /// Geocode a place and collect nearby attractions.
    /// DOCUMENTATION: Never fails. A failed geocode yields the empty lookup;
    /// a failed landmark search keeps the location only for transport and
    /// status errors.
    pub async fn fetch_places(&self, place: &str) -> PlaceLookup {
        if !PlaceQuery::new(place).is_searchable() {
            log::debug!("Place {:?} too short, skipping lookups", place);
            return PlaceLookup::empty();
        }

        log::info!("Searching place: {}", place);

        let geo = match self.geocoder.resolve(place).await {
            Ok(geo) if geo.is_resolved() => geo,
            Ok(_) => {
                log::warn!("Geocoder returned no coordinates for {}", place);
                return PlaceLookup::empty();
            }
            Err(e) => {
                log::warn!("Geocoding failed for {}: {}", place, e);
                return PlaceLookup::empty();
            }
        };

        let (lat, lon) = match (geo.lat.as_deref(), geo.lon.as_deref()) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => return PlaceLookup::empty(),
        };

        let found = self.landmarks.nearby(lat, lon).await;

        match found {
            Ok(attractions) => PlaceLookup { attractions, geo },
            Err(e) if e.keeps_location() => {
                log::warn!("Landmark search failed for {}: {}", place, e);
                PlaceLookup {
                    attractions: Vec::new(),
                    geo,
                }
            }
            Err(e) => {
                log::warn!("Landmark search failed for {}, discarding location: {}", place, e);
                PlaceLookup::empty()
            }
        }
    }

    /// Full /search pipeline
    /// DOCUMENTATION: `place` must already be trimmed; an empty name
    /// short-circuits without a visit plan
    pub async fn search(&self, place: &str, budget: f64, days: i64) -> SearchResponse {
        if place.is_empty() {
            return SearchResponse::without_place();
        }

        let PlaceLookup { attractions, geo } = self.fetch_places(place).await;

        let cost_summary = CostEstimator::estimate(budget, days, attractions.len());

        let climate = match (geo.is_resolved(), geo.lat.as_deref()) {
            (true, Some(lat)) => ClimateClassifier::classify_raw(lat, geo.country.as_deref()),
            _ => None,
        };

        let visit_plan = VisitPlanner::plan(&attractions, climate.as_ref(), &geo);

        log::debug!(
            "Search for {} produced {} attractions, climate={:?}",
            place,
            attractions.len(),
            climate.as_ref().map(|c| c.climate_type)
        );

        SearchResponse {
            attractions,
            cost_summary,
            climate,
            visit_plan: Some(visit_plan),
        }
    }
}
